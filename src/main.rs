use std::sync::Arc;

use anyhow::Result;
use dotenvy::dotenv;
use teloxide::prelude::*;

use fintrack_bot::{create_bot, schema, setup_bot_commands, Config, HandlerDeps};

#[tokio::main]
async fn main() -> Result<()> {
    pretty_env_logger::init();
    let _ = dotenv();

    let config = Arc::new(Config::from_env()?);
    let bot = create_bot()?;

    // Command-menu registration is cosmetic; a failure here must not stop
    // the bot from serving updates.
    if let Err(e) = setup_bot_commands(&bot).await {
        log::warn!("Failed to register bot commands: {e}");
    }

    log::info!("FinTrack bot started, web app at {}", config.webapp_url);

    Dispatcher::builder(bot, schema(HandlerDeps::new(config)))
        .dependencies(DependencyMap::new())
        .enable_ctrlc_handler()
        .build()
        .dispatch()
        .await;

    log::info!("FinTrack bot stopped");
    Ok(())
}
