//! Username normalization, fuzzy matching and comment filtering.

mod filter;
mod matcher;
mod normalize;

pub use filter::{
    MatchOptions, UserComment, filter_by_usernames, filter_exact, find_user_comments,
};
pub use matcher::{
    DEFAULT_MATCH_LIMIT, UsernameMatch, UsernameMatcher, distinct_authors, find_similar,
};
pub use normalize::normalize;
