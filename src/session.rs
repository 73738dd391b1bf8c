//! Interactive search session: prompts, retrieval, matching and output.

mod prompt;
mod render;

use std::io::{BufRead, Write};

use log::{error, info, warn};

use crate::config::Config;
use crate::error::Result;
use crate::matching::{distinct_authors, find_user_comments};
use crate::types::{MatchStrategy, Threshold};
use crate::youtube::{CommentSource, VideoId};

pub use prompt::Prompter;

/// One search run against a comment source.
pub struct Session<S> {
    source: S,
    config: Config,
}

impl<S: CommentSource> Session<S> {
    pub fn new(source: S, config: Config) -> Self {
        Self { source, config }
    }

    /// Ask for a video and a username, then print the matching comments.
    ///
    /// A bad URL or a failed fetch ends the run with a message, not an error.
    ///
    /// # Errors
    ///
    /// Returns an error only if the terminal cannot be read or written.
    pub async fn run<R: BufRead, W: Write>(&self, prompter: &mut Prompter<R, W>) -> Result<()> {
        let url = prompter.ask("\nEnter the YouTube video URL: ")?;
        let video_id = match VideoId::from_url(&url) {
            Ok(id) => id,
            Err(e) => {
                warn!("{e}");
                return prompter.say(format!("Error: {}", e.user_message()));
            }
        };

        prompter.say(
            "\nFetching comments... (this may take a while for videos with many comments)",
        )?;
        let comments = match self.source.fetch_comments(&video_id).await {
            Ok(comments) => comments,
            Err(e) => {
                error!("Failed to fetch comments for {video_id}: {e}");
                prompter.say("Failed to retrieve comments.")?;
                return prompter.say(e.user_message());
            }
        };
        prompter.say(format!("\nFound {} comments in the video.", comments.len()))?;

        let username = prompter.ask("\nEnter the username to find comments for: ")?;

        match self.config.strategy {
            MatchStrategy::Exact => {
                let options = self.config.match_options(self.config.default_threshold);
                let found = find_user_comments(&comments, &username, &options);
                info!("Exact search for '{username}' found {} comments", found.len());
                render::exact_results(prompter.output(), &username, &found)?;
            }
            MatchStrategy::Fuzzy => {
                let threshold = self.ask_threshold(prompter)?;
                let options = self.config.match_options(threshold);
                let found = find_user_comments(&comments, &username, &options);
                info!(
                    "Fuzzy search for '{username}' at {threshold} found {} comments",
                    found.len()
                );

                if found.is_empty() {
                    let similar: Vec<&str> = options
                        .matcher()
                        .find(distinct_authors(&comments), &username)
                        .into_iter()
                        .map(|candidate| candidate.username)
                        .collect();
                    render::no_fuzzy_results(
                        prompter.output(),
                        &username,
                        threshold,
                        &similar,
                    )?;
                } else {
                    render::fuzzy_results(prompter.output(), &found)?;
                }
            }
        }

        Ok(())
    }

    fn ask_threshold<R: BufRead, W: Write>(
        &self,
        prompter: &mut Prompter<R, W>,
    ) -> Result<Threshold> {
        let default = self.config.default_threshold;
        let answer = prompter.ask(&format!(
            "Enter matching threshold ({}-{}, default={default}): ",
            Threshold::MIN,
            Threshold::MAX
        ))?;

        if answer.is_empty() {
            return Ok(default);
        }

        match answer.parse::<Threshold>() {
            Ok(threshold) => Ok(threshold),
            Err(e) => {
                warn!("{e}");
                prompter.say(format!("Invalid threshold, using default {default}"))?;
                Ok(default)
            }
        }
    }
}
