pub mod config;
pub mod error;
pub mod matching;
pub mod session;
pub mod types;
pub mod youtube;

use std::io;

use log::{debug, info};

use config::Config;
use error::Result;
use session::{Prompter, Session};
use youtube::YouTubeClient;

/// Run one interactive comment search on the terminal.
///
/// # Errors
///
/// Returns an error if the configuration is invalid or the terminal fails.
pub async fn run() -> Result<()> {
    let config = Config::from_env()?;

    let stdin = io::stdin();
    let mut prompter = Prompter::new(stdin.lock(), io::stdout());
    prompter.say("YouTube Comment Finder")?;
    prompter.say("----------------------")?;

    let api_key = match config.youtube_api_key.clone() {
        Some(key) => {
            debug!("Using API key from environment");
            key
        }
        None => prompter.ask("Enter your YouTube Data API key: ")?,
    };
    if api_key.is_empty() {
        return prompter.say("Error: an API key is required.");
    }

    info!("Starting comment search session");
    let client = YouTubeClient::new(api_key);
    Session::new(client, config).run(&mut prompter).await
}
