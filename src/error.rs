use reqwest::StatusCode;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum FinderError {
    #[error("Invalid YouTube URL format: {0}")]
    InvalidVideoUrl(String),

    #[error("YouTube API error ({status}): {message}")]
    YouTubeApi {
        status: reqwest::StatusCode,
        message: String,
    },

    #[error("HTTP request error: {0}")]
    Reqwest(#[from] reqwest::Error),

    #[error("Malformed comment record: missing field `{0}`")]
    MalformedComment(&'static str),

    #[error("Invalid threshold: {0}")]
    InvalidThreshold(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl FinderError {
    /// Returns a user-friendly error message suitable for printing in the terminal
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            FinderError::InvalidVideoUrl(url) => {
                format!("'{url}' is not a supported YouTube URL. Use https://www.youtube.com/watch?v=<id> or https://youtu.be/<id>.")
            }
            FinderError::YouTubeApi { status, .. } => match *status {
                StatusCode::BAD_REQUEST => {
                    "The YouTube API rejected the request. Check the API key and the video URL.".to_string()
                }
                StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
                    "The YouTube API refused access. The API key may be invalid, out of quota, or comments may be disabled for this video.".to_string()
                }
                StatusCode::NOT_FOUND => "The video could not be found.".to_string(),
                StatusCode::TOO_MANY_REQUESTS => {
                    "The YouTube API rate limit was hit. Please try again in a few moments.".to_string()
                }
                status if status.is_server_error() => {
                    "The YouTube API is experiencing issues right now. Please try again later.".to_string()
                }
                _ => "The YouTube API returned an unexpected error.".to_string(),
            },
            FinderError::Reqwest(_) => {
                "Network error while talking to the YouTube API. Please try again in a moment.".to_string()
            }
            FinderError::MalformedComment(_) => {
                "The YouTube API returned a comment in an unexpected shape.".to_string()
            }
            FinderError::InvalidThreshold(_) => {
                "The threshold must be a number between 0.1 and 0.9.".to_string()
            }
            FinderError::Config(message) => format!("Configuration problem: {message}"),
            FinderError::Io(_) => "Could not read from or write to the terminal.".to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, FinderError>;
