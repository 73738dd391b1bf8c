//! Approximate matching of a query against comment author names.

use std::cmp::Ordering;
use std::collections::{HashMap, HashSet};

use log::debug;
use similar::{DiffTag, TextDiff};

use crate::types::{Comment, SimilarityMetric, Threshold};

use super::normalize::normalize;

/// Maximum number of distinct usernames returned by a search.
pub const DEFAULT_MATCH_LIMIT: usize = 10;

/// One matched author, possibly standing in for several spellings.
#[derive(Debug, Clone, PartialEq)]
pub struct UsernameMatch<'a> {
    /// First-seen original form among the candidates sharing this normalized name
    pub username: &'a str,
    /// Every original form that normalized to the same name, in first-seen order.
    /// Always starts with `username`.
    pub variants: Vec<&'a str>,
    pub score: f64,
}

/// Scores candidate author names against a query.
#[derive(Debug, Clone, Copy)]
pub struct UsernameMatcher {
    threshold: Threshold,
    limit: usize,
    metric: SimilarityMetric,
}

impl Default for UsernameMatcher {
    fn default() -> Self {
        Self::new(Threshold::default())
    }
}

impl UsernameMatcher {
    #[must_use]
    pub fn new(threshold: Threshold) -> Self {
        Self {
            threshold,
            limit: DEFAULT_MATCH_LIMIT,
            metric: SimilarityMetric::default(),
        }
    }

    #[must_use]
    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = limit;
        self
    }

    #[must_use]
    pub fn with_metric(mut self, metric: SimilarityMetric) -> Self {
        self.metric = metric;
        self
    }

    #[must_use]
    pub fn threshold(&self) -> Threshold {
        self.threshold
    }

    /// Similarity of two already-normalized strings, in `[0, 1]`.
    #[must_use]
    pub fn score(&self, left: &str, right: &str) -> f64 {
        match self.metric {
            SimilarityMetric::Ratio => matching_block_ratio(left, right),
            SimilarityMetric::Levenshtein => strsim::normalized_levenshtein(left, right),
            SimilarityMetric::JaroWinkler => strsim::jaro_winkler(left, right),
        }
    }

    /// Find the candidates similar to `query`, best first.
    ///
    /// Candidates that normalize to the same string are one match target,
    /// represented by whichever of them came first. Ties keep candidate order.
    #[must_use]
    pub fn find<'a, I>(&self, candidates: I, query: &str) -> Vec<UsernameMatch<'a>>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let query = normalize(query);
        if query.is_empty() || self.limit == 0 {
            debug!("Skipping username search: empty query or zero limit");
            return Vec::new();
        }

        let mut index: HashMap<String, usize> = HashMap::new();
        let mut targets: Vec<(String, Vec<&'a str>)> = Vec::new();

        for candidate in candidates {
            let key = normalize(candidate);
            match index.get(&key) {
                Some(&slot) => {
                    let variants = &mut targets[slot].1;
                    if !variants.contains(&candidate) {
                        debug!(
                            "Username '{candidate}' collides with '{}' after normalization",
                            variants[0]
                        );
                        variants.push(candidate);
                    }
                }
                None => {
                    index.insert(key.clone(), targets.len());
                    targets.push((key, vec![candidate]));
                }
            }
        }

        let threshold = self.threshold.value();
        let mut matches: Vec<UsernameMatch<'a>> = targets
            .into_iter()
            .filter_map(|(key, variants)| {
                let score = self.score(&query, &key);
                (score >= threshold).then(|| UsernameMatch {
                    username: variants[0],
                    variants,
                    score,
                })
            })
            .collect();

        matches.sort_by(|left, right| {
            right
                .score
                .partial_cmp(&left.score)
                .unwrap_or(Ordering::Equal)
        });
        matches.truncate(self.limit);

        debug!(
            "Username search for '{query}' at threshold {threshold}: {} match(es)",
            matches.len()
        );
        matches
    }
}

/// `2 * M / T` where `M` counts chars in matching blocks and `T` is both lengths summed.
fn matching_block_ratio(left: &str, right: &str) -> f64 {
    let total = left.chars().count() + right.chars().count();
    if total == 0 {
        return 1.0;
    }

    let diff = TextDiff::from_chars(left, right);
    let matched: usize = diff
        .ops()
        .iter()
        .filter(|op| op.tag() == DiffTag::Equal)
        .map(|op| op.old_range().len())
        .sum();

    2.0 * matched as f64 / total as f64
}

/// Original-form usernames similar to `query`, best first.
#[must_use]
pub fn find_similar<'a, I>(
    candidates: I,
    query: &str,
    threshold: Threshold,
    limit: usize,
) -> Vec<&'a str>
where
    I: IntoIterator<Item = &'a str>,
{
    UsernameMatcher::new(threshold)
        .with_limit(limit)
        .find(candidates, query)
        .into_iter()
        .map(|found| found.username)
        .collect()
}

/// Distinct comment authors in order of first appearance.
#[must_use]
pub fn distinct_authors(comments: &[Comment]) -> Vec<&str> {
    let mut seen = HashSet::new();
    comments
        .iter()
        .map(|comment| comment.author.as_str())
        .filter(|author| seen.insert(*author))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn comment(author: &str) -> Comment {
        Comment {
            author: author.to_string(),
            text: "hi".to_string(),
            like_count: 0,
            published_at: "2024-01-01T00:00:00Z".to_string(),
        }
    }

    #[test]
    fn finds_spelling_variants_by_descending_score() {
        let found = find_similar(
            ["Kiki_22", "kiki22", "Bob"],
            "kiki 22",
            Threshold::new(0.6),
            DEFAULT_MATCH_LIMIT,
        );
        assert_eq!(found, vec!["kiki22", "Kiki_22"]);
    }

    #[test]
    fn every_metric_accepts_close_spellings() {
        for metric in [
            SimilarityMetric::Ratio,
            SimilarityMetric::Levenshtein,
            SimilarityMetric::JaroWinkler,
        ] {
            let found = UsernameMatcher::new(Threshold::new(0.6))
                .with_metric(metric)
                .find(["Kiki_22", "kiki22", "Bob"], "kiki 22");
            let names: Vec<_> = found.iter().map(|m| m.username).collect();
            assert!(names.contains(&"Kiki_22"), "{metric}: {names:?}");
            assert!(names.contains(&"kiki22"), "{metric}: {names:?}");
            assert!(!names.contains(&"Bob"), "{metric}: {names:?}");
        }
    }

    #[test]
    fn stricter_threshold_never_adds_matches() {
        let candidates = [
            "Marie", "Maria", "mario", "Marius", "Mar", "Émilie", "Amaria", "Bob",
        ];
        let thresholds: Vec<f64> = (1..=9).map(|step| f64::from(step) / 10.0).collect();

        for pair in thresholds.windows(2) {
            let loose = find_similar(candidates, "marie", Threshold::new(pair[0]), 10);
            let strict = find_similar(candidates, "marie", Threshold::new(pair[1]), 10);
            for name in &strict {
                assert!(
                    loose.contains(name),
                    "{name} matched at {} but not at {}",
                    pair[1],
                    pair[0]
                );
            }
        }
    }

    #[test]
    fn clamped_thresholds_behave_like_bounds() {
        let candidates = ["alex", "alexa", "alexander", "al", "xander"];
        assert_eq!(
            find_similar(candidates, "alex", Threshold::new(0.95), 10),
            find_similar(candidates, "alex", Threshold::new(0.9), 10)
        );
        assert_eq!(
            find_similar(candidates, "alex", Threshold::new(0.05), 10),
            find_similar(candidates, "alex", Threshold::new(0.1), 10)
        );
    }

    #[test]
    fn normalized_collisions_keep_first_seen_representative() -> Result<(), &'static str> {
        let found = UsernameMatcher::default().find(["Zoë", "Zoe", "ZOE ", "Zoë"], "zoe");
        assert_eq!(found.len(), 1);
        let only = found.first().ok_or("expected match")?;
        assert_eq!(only.username, "Zoë");
        assert_eq!(only.variants, vec!["Zoë", "Zoe", "ZOE "]);
        assert!((only.score - 1.0).abs() < f64::EPSILON);
        Ok(())
    }

    #[test]
    fn scores_exactly_at_threshold_are_kept() {
        let matcher = UsernameMatcher::default();
        assert_eq!(matcher.score("abcdefghij", "abcdefghix"), 0.9);
        assert_eq!(matcher.score("abcdefghij", "abcdefgxyz"), 0.7);
        assert_eq!(matcher.score("", ""), 1.0);

        assert_eq!(
            find_similar(["abcdefghix"], "abcdefghij", Threshold::new(0.9), 10),
            vec!["abcdefghix"]
        );
        assert_eq!(
            find_similar(["abcdefghix"], "abcdefghij", Threshold::new(0.95), 10),
            vec!["abcdefghix"]
        );
        assert_eq!(
            find_similar(["abcdefgxyz"], "abcdefghij", Threshold::new(0.7), 10),
            vec!["abcdefgxyz"]
        );
        assert!(find_similar(["abcdefgxyz"], "abcdefghij", Threshold::new(0.71), 10).is_empty());
    }

    #[test]
    fn ties_preserve_candidate_order() {
        let found = find_similar(["anni", "anna", "anne"], "ann", Threshold::new(0.6), 10);
        assert_eq!(found, vec!["anni", "anna", "anne"]);
    }

    #[test]
    fn limit_truncates_results() {
        let candidates = ["sam1", "sam2", "sam3", "sam4"];
        assert_eq!(find_similar(candidates, "sam", Threshold::new(0.5), 2).len(), 2);
        assert!(find_similar(candidates, "sam", Threshold::new(0.5), 0).is_empty());
    }

    #[test]
    fn empty_inputs_yield_nothing() {
        let none: [&str; 0] = [];
        assert!(find_similar(none, "alice", Threshold::default(), 10).is_empty());
        assert!(find_similar(["alice"], "", Threshold::default(), 10).is_empty());
        assert!(find_similar(["alice"], " 🔥 ", Threshold::default(), 10).is_empty());
    }

    #[test]
    fn distinct_authors_keep_first_appearance() {
        let comments = vec![comment("b"), comment("a"), comment("b"), comment("c")];
        assert_eq!(distinct_authors(&comments), vec!["b", "a", "c"]);
        assert!(distinct_authors(&[]).is_empty());
    }
}
