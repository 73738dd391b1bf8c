#[tokio::main]
async fn main() -> comment_finder::error::Result<()> {
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or("comment_finder=warn"),
    )
    .init();
    log::info!("Starting comment finder");

    match comment_finder::run().await {
        Ok(()) => {
            log::info!("Comment finder finished");
            Ok(())
        }
        Err(e) => {
            log::error!("Comment finder encountered an error: {}", e);
            Err(e)
        }
    }
}
