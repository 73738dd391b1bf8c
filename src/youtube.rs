//! YouTube Data API access: video URL parsing and comment retrieval.

mod client;
mod video_id;

use crate::error::Result;
use crate::types::Comment;

pub use client::YouTubeClient;
pub use video_id::VideoId;

/// Anything that can produce every comment of a video, replies included.
pub trait CommentSource {
    /// Fetch all comments of `video_id`, replies placed right after their parent.
    ///
    /// # Errors
    ///
    /// Returns an error if the comments cannot be retrieved.
    fn fetch_comments(&self, video_id: &VideoId) -> impl Future<Output = Result<Vec<Comment>>>;
}
