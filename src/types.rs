//! Common types used throughout the comment finder.

use std::fmt;
use std::str::FromStr;

use strum::{Display, EnumString};

use crate::error::FinderError;

/// A single comment or reply fetched from a video.
///
/// Built once at the retrieval boundary; the matching code only borrows it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Comment {
    /// Author display name, exactly as the platform returned it
    pub author: String,
    pub text: String,
    pub like_count: u64,
    /// RFC 3339 timestamp string as returned by the API
    pub published_at: String,
}

/// Minimum similarity score for a fuzzy username match.
///
/// Always within `[Threshold::MIN, Threshold::MAX]`; out-of-range values are clamped.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Threshold(f64);

impl Threshold {
    pub const MIN: f64 = 0.1;
    pub const MAX: f64 = 0.9;
    pub const DEFAULT: f64 = 0.6;

    /// Build a threshold, clamping into range. `NaN` falls back to the default.
    #[must_use]
    pub fn new(value: f64) -> Self {
        if value.is_nan() {
            return Self(Self::DEFAULT);
        }
        Self(value.clamp(Self::MIN, Self::MAX))
    }

    #[must_use]
    pub fn value(self) -> f64 {
        self.0
    }
}

impl Default for Threshold {
    fn default() -> Self {
        Self(Self::DEFAULT)
    }
}

impl fmt::Display for Threshold {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Threshold {
    type Err = FinderError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        input
            .trim()
            .parse::<f64>()
            .map(Self::new)
            .map_err(|_| FinderError::InvalidThreshold(input.to_string()))
    }
}

/// How a user-supplied name is compared against comment authors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, EnumString, Display)]
#[strum(ascii_case_insensitive, serialize_all = "lowercase")]
pub enum MatchStrategy {
    /// Case-insensitive equality, accents kept
    Exact,
    /// Normalized approximate matching under a threshold
    #[default]
    Fuzzy,
}

/// Similarity measure used by the fuzzy strategy. All variants score in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, EnumString, Display)]
#[strum(ascii_case_insensitive, serialize_all = "kebab-case")]
pub enum SimilarityMetric {
    /// Longest-matching-block ratio `2 * M / T`
    #[default]
    Ratio,
    /// `1 - distance / max_len` over Levenshtein edit distance
    Levenshtein,
    JaroWinkler,
}
