use std::env;
use std::str::FromStr;

use log::{debug, error, info};

use crate::error::{FinderError, Result};
use crate::matching::{DEFAULT_MATCH_LIMIT, MatchOptions};
use crate::types::{MatchStrategy, SimilarityMetric, Threshold};

#[derive(Debug, Clone)]
pub struct Config {
    /// Prompted for when absent
    pub youtube_api_key: Option<String>,
    pub strategy: MatchStrategy,
    pub metric: SimilarityMetric,
    /// Used when the threshold prompt is left blank
    pub default_threshold: Threshold,
    pub match_limit: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            youtube_api_key: None,
            strategy: MatchStrategy::default(),
            metric: SimilarityMetric::default(),
            default_threshold: Threshold::default(),
            match_limit: DEFAULT_MATCH_LIMIT,
        }
    }
}

impl Config {
    /// Load configuration from the process environment and an optional `.env` file.
    ///
    /// # Errors
    ///
    /// Returns an error if a variable is set to a value that cannot be parsed.
    pub fn from_env() -> Result<Self> {
        debug!("Loading configuration from environment");
        dotenvy::dotenv().ok();
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Build configuration from an arbitrary variable lookup.
    ///
    /// # Errors
    ///
    /// Returns an error if a variable is set to a value that cannot be parsed.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let youtube_api_key = lookup("YOUTUBE_API_KEY")
            .map(|key| key.trim().to_string())
            .filter(|key| !key.is_empty());

        let config = Self {
            youtube_api_key,
            strategy: parse_var(&lookup, "COMMENT_FINDER_STRATEGY", defaults.strategy)?,
            metric: parse_var(&lookup, "COMMENT_FINDER_METRIC", defaults.metric)?,
            default_threshold: parse_var(
                &lookup,
                "COMMENT_FINDER_THRESHOLD",
                defaults.default_threshold,
            )?,
            match_limit: parse_var(&lookup, "COMMENT_FINDER_LIMIT", defaults.match_limit)?,
        };

        info!("Configuration loaded successfully");
        debug!(
            "API key from environment: {}",
            config.youtube_api_key.is_some()
        );
        debug!(
            "Strategy: {}, metric: {}, default threshold: {}, limit: {}",
            config.strategy, config.metric, config.default_threshold, config.match_limit
        );

        Ok(config)
    }

    /// Match options for a run, using `threshold` for the fuzzy cutoff.
    #[must_use]
    pub fn match_options(&self, threshold: Threshold) -> MatchOptions {
        MatchOptions {
            strategy: self.strategy,
            threshold,
            limit: self.match_limit,
            metric: self.metric,
        }
    }
}

fn parse_var<F, T>(lookup: &F, name: &str, default: T) -> Result<T>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
{
    match lookup(name) {
        Some(raw) if !raw.trim().is_empty() => raw.trim().parse().map_err(|_| {
            error!("Failed to parse {name} from environment: {raw:?}");
            FinderError::Config(format!("{name} has an invalid value: {raw:?}"))
        }),
        _ => Ok(default),
    }
}
