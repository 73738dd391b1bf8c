use std::fmt;
use std::str::FromStr;

use url::Url;

use crate::error::{FinderError, Result};

/// Identifier of a YouTube video, extracted from a watch or short link.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VideoId(String);

impl VideoId {
    /// Extract the video id from `https://www.youtube.com/watch?v=<id>` or
    /// `https://youtu.be/<id>`.
    ///
    /// # Errors
    ///
    /// Returns [`FinderError::InvalidVideoUrl`] for any other host or path,
    /// or when the id is missing.
    pub fn from_url(input: &str) -> Result<Self> {
        let invalid = || FinderError::InvalidVideoUrl(input.to_string());
        let url = Url::parse(input.trim()).map_err(|_| invalid())?;

        if !matches!(url.scheme(), "http" | "https") {
            return Err(invalid());
        }

        let id = match (url.host_str(), url.path()) {
            (Some("www.youtube.com"), "/watch") => url
                .query_pairs()
                .find(|(key, _)| key == "v")
                .map(|(_, value)| value.into_owned()),
            (Some("youtu.be"), path) => path.strip_prefix('/').map(str::to_string),
            _ => None,
        };

        match id {
            Some(id) if !id.is_empty() && !id.contains('/') => Ok(Self(id)),
            _ => Err(invalid()),
        }
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for VideoId {
    type Err = FinderError;

    fn from_str(input: &str) -> Result<Self> {
        Self::from_url(input)
    }
}

impl fmt::Display for VideoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
