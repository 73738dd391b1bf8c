use log::{debug, info, warn};
use serde::Deserialize;
use serde::de::DeserializeOwned;

use crate::error::{FinderError, Result};
use crate::types::Comment;

use super::{CommentSource, VideoId};

const YOUTUBE_API_URL: &str = "https://www.googleapis.com/youtube/v3";

/// Largest page size the comment endpoints accept
const MAX_RESULTS: &str = "100";

/// Page of `commentThreads.list`
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CommentThreadListResponse {
    #[serde(default)]
    items: Vec<CommentThread>,
    next_page_token: Option<String>,
}

#[derive(Debug, Deserialize)]
struct CommentThread {
    id: String,
    snippet: CommentThreadSnippet,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CommentThreadSnippet {
    top_level_comment: ApiComment,
    #[serde(default)]
    total_reply_count: u64,
}

/// Page of `comments.list`
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CommentListResponse {
    #[serde(default)]
    items: Vec<ApiComment>,
    next_page_token: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ApiComment {
    snippet: CommentSnippet,
}

/// Raw comment fields; every one is checked before becoming a [`Comment`]
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CommentSnippet {
    author_display_name: Option<String>,
    text_display: Option<String>,
    like_count: Option<u64>,
    published_at: Option<String>,
}

impl TryFrom<CommentSnippet> for Comment {
    type Error = FinderError;

    fn try_from(snippet: CommentSnippet) -> Result<Self> {
        Ok(Comment {
            author: snippet
                .author_display_name
                .ok_or(FinderError::MalformedComment("authorDisplayName"))?,
            text: snippet
                .text_display
                .ok_or(FinderError::MalformedComment("textDisplay"))?,
            like_count: snippet
                .like_count
                .ok_or(FinderError::MalformedComment("likeCount"))?,
            published_at: snippet
                .published_at
                .ok_or(FinderError::MalformedComment("publishedAt"))?,
        })
    }
}

/// Google API error envelope
#[derive(Debug, Deserialize)]
struct ApiErrorResponse {
    error: ApiErrorBody,
}

#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    message: String,
}

fn error_message(body: &str) -> String {
    serde_json::from_str::<ApiErrorResponse>(body)
        .map(|response| response.error.message)
        .unwrap_or_else(|_| body.to_string())
}

fn push_comment(comments: &mut Vec<Comment>, snippet: CommentSnippet) {
    match Comment::try_from(snippet) {
        Ok(comment) => comments.push(comment),
        Err(e) => warn!("Skipping comment: {e}"),
    }
}

/// Client for the comment endpoints of the YouTube Data API v3.
pub struct YouTubeClient {
    api_key: String,
    client: reqwest::Client,
    base_url: String,
}

impl YouTubeClient {
    pub fn new(api_key: String) -> Self {
        Self::with_base_url(api_key, YOUTUBE_API_URL.to_string())
    }

    pub fn with_base_url(api_key: String, base_url: String) -> Self {
        Self {
            api_key,
            client: reqwest::Client::new(),
            base_url,
        }
    }

    async fn get<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        params: &[(&str, &str)],
    ) -> Result<T> {
        let response = self
            .client
            .get(format!("{}/{endpoint}", self.base_url))
            .query(params)
            .query(&[("key", self.api_key.as_str())])
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let message = response
                .text()
                .await
                .map(|body| error_message(&body))
                .unwrap_or_else(|e| format!("Failed to read error response: {e}"));
            return Err(FinderError::YouTubeApi { status, message });
        }

        Ok(response.json().await?)
    }

    async fn fetch_replies(&self, parent_id: &str, comments: &mut Vec<Comment>) -> Result<()> {
        let mut page_token: Option<String> = None;

        loop {
            let mut params = vec![
                ("part", "snippet"),
                ("parentId", parent_id),
                ("maxResults", MAX_RESULTS),
                ("textFormat", "plainText"),
            ];
            if let Some(token) = page_token.as_deref() {
                params.push(("pageToken", token));
            }

            let page: CommentListResponse = self.get("comments", &params).await?;
            debug!("Fetched {} replies to {parent_id}", page.items.len());

            for reply in page.items {
                push_comment(comments, reply.snippet);
            }

            match page.next_page_token {
                Some(token) if !token.is_empty() => page_token = Some(token),
                _ => return Ok(()),
            }
        }
    }
}

impl CommentSource for YouTubeClient {
    async fn fetch_comments(&self, video_id: &VideoId) -> Result<Vec<Comment>> {
        let mut comments = Vec::new();
        let mut page_token: Option<String> = None;
        let mut pages = 0usize;

        loop {
            let mut params = vec![
                ("part", "snippet"),
                ("videoId", video_id.as_str()),
                ("maxResults", MAX_RESULTS),
                ("textFormat", "plainText"),
            ];
            if let Some(token) = page_token.as_deref() {
                params.push(("pageToken", token));
            }

            let page: CommentThreadListResponse = self.get("commentThreads", &params).await?;
            pages += 1;
            debug!(
                "Fetched comment thread page {pages} with {} threads",
                page.items.len()
            );

            for thread in page.items {
                let replies = thread.snippet.total_reply_count;
                push_comment(&mut comments, thread.snippet.top_level_comment.snippet);
                if replies > 0 {
                    self.fetch_replies(&thread.id, &mut comments).await?;
                }
            }

            match page.next_page_token {
                Some(token) if !token.is_empty() => page_token = Some(token),
                _ => break,
            }
        }

        info!(
            "Fetched {} comments for video {video_id} in {pages} page(s)",
            comments.len()
        );
        Ok(comments)
    }
}
