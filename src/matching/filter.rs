//! Joining matched usernames back onto the fetched comments.

use std::collections::HashSet;

use log::debug;

use crate::types::{Comment, MatchStrategy, SimilarityMetric, Threshold};

use super::matcher::{DEFAULT_MATCH_LIMIT, UsernameMatcher, distinct_authors};

/// A comment selected by a search, with the author name that matched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UserComment<'a> {
    pub comment: &'a Comment,
    /// Always byte-identical to `comment.author`
    pub matched_username: &'a str,
}

impl<'a> UserComment<'a> {
    fn new(comment: &'a Comment) -> Self {
        Self {
            comment,
            matched_username: comment.author.as_str(),
        }
    }
}

/// Search settings for [`find_user_comments`].
#[derive(Debug, Clone, Copy)]
pub struct MatchOptions {
    pub strategy: MatchStrategy,
    pub threshold: Threshold,
    pub limit: usize,
    pub metric: SimilarityMetric,
}

impl Default for MatchOptions {
    fn default() -> Self {
        Self {
            strategy: MatchStrategy::default(),
            threshold: Threshold::default(),
            limit: DEFAULT_MATCH_LIMIT,
            metric: SimilarityMetric::default(),
        }
    }
}

impl MatchOptions {
    /// The fuzzy matcher these options describe.
    #[must_use]
    pub fn matcher(&self) -> UsernameMatcher {
        UsernameMatcher::new(self.threshold)
            .with_limit(self.limit)
            .with_metric(self.metric)
    }
}

/// Comments whose author is exactly one of `usernames`, in input order.
#[must_use]
pub fn filter_by_usernames<'a>(
    comments: &'a [Comment],
    usernames: &HashSet<&str>,
) -> Vec<UserComment<'a>> {
    if usernames.is_empty() {
        return Vec::new();
    }

    comments
        .iter()
        .filter(|comment| usernames.contains(comment.author.as_str()))
        .map(UserComment::new)
        .collect()
}

/// Comments whose author equals `username` ignoring case. Accents are significant.
#[must_use]
pub fn filter_exact<'a>(comments: &'a [Comment], username: &str) -> Vec<&'a Comment> {
    let target = username.trim().to_lowercase();
    if target.is_empty() {
        return Vec::new();
    }

    comments
        .iter()
        .filter(|comment| comment.author.to_lowercase() == target)
        .collect()
}

/// Comments written by authors matching `query` under the configured strategy.
#[must_use]
pub fn find_user_comments<'a>(
    comments: &'a [Comment],
    query: &str,
    options: &MatchOptions,
) -> Vec<UserComment<'a>> {
    let found: Vec<UserComment<'a>> = match options.strategy {
        MatchStrategy::Exact => filter_exact(comments, query)
            .into_iter()
            .map(UserComment::new)
            .collect(),
        MatchStrategy::Fuzzy => {
            let matches = options.matcher().find(distinct_authors(comments), query);
            let usernames: HashSet<&str> = matches
                .iter()
                .flat_map(|found| found.variants.iter().copied())
                .collect();
            filter_by_usernames(comments, &usernames)
        }
    };

    debug!(
        "{} search for '{query}' selected {} of {} comments",
        options.strategy,
        found.len(),
        comments.len()
    );
    found
}
