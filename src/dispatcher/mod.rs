//! Update dispatcher: classifies each inbound Telegram update and routes it
//! to a handler.
//!
//! Classification order (first match wins): recognized commands, callback
//! queries, then everything else. Command selection is driven by the typed
//! [`Command`] enum and callback selection by [`callbacks::CallbackAction`],
//! so both matches are exhaustiveness-checked instead of string-compared at
//! the call sites.

pub mod callbacks;
pub mod commands;

use std::sync::Arc;
use std::time::Duration;

use teloxide::dispatching::{UpdateFilterExt, UpdateHandler};
use teloxide::prelude::*;
use teloxide::types::Message;
use teloxide::utils::command::BotCommands;

use crate::config::Config;
use crate::error::HandlerError;
use crate::media::MediaCache;
use crate::profile::ProfileClient;
use crate::resolver::LanguageResolver;

/// Bot commands with the descriptions shown in the Telegram command menu.
#[derive(BotCommands, Clone, Debug, PartialEq)]
#[command(rename_rule = "lowercase", description = "FinTrack commands:")]
pub enum Command {
    #[command(description = "launch the app")]
    Start,
    #[command(description = "command list")]
    Help,
    #[command(description = "feature guide")]
    Guide,
    #[command(description = "budgeting tips")]
    Tips,
    #[command(description = "why track your finances")]
    Why,
    #[command(description = "change language")]
    Language,
    #[command(description = "version info")]
    Version,
    #[command(description = "support the project")]
    Donate,
    #[command(description = "contact us")]
    Support,
}

/// Dependencies shared by all handlers. Constructed once at startup and
/// cloned into each branch of the handler tree; there are no ambient globals.
#[derive(Clone)]
pub struct HandlerDeps {
    pub config: Arc<Config>,
    pub resolver: Arc<LanguageResolver>,
    pub media: Arc<MediaCache>,
}

impl HandlerDeps {
    pub fn new(config: Arc<Config>) -> Self {
        let profile = Arc::new(ProfileClient::new(&config.profile_api_url, Config::profile_timeout()));
        Self {
            config,
            resolver: Arc::new(LanguageResolver::new(profile)),
            media: Arc::new(MediaCache::new()),
        }
    }
}

/// Creates the bot instance with an explicit request timeout on the
/// underlying HTTP client. The token comes from the environment.
pub fn create_bot() -> anyhow::Result<Bot> {
    let client = reqwest::ClientBuilder::new().timeout(Duration::from_secs(30)).build()?;
    Ok(Bot::from_env_with_client(client))
}

/// Registers the command list with Telegram so clients show the menu.
pub async fn setup_bot_commands(bot: &Bot) -> Result<(), teloxide::RequestError> {
    bot.set_my_commands(Command::bot_commands()).await?;
    Ok(())
}

/// Builds the dispatcher handler tree. The same schema is used in production
/// and available to integration tests.
///
/// Handlers recover from their own failures and log them; nothing that
/// happens inside a single update's handler may take the dispatcher down.
pub fn schema(deps: HandlerDeps) -> UpdateHandler<HandlerError> {
    let deps_commands = deps.clone();
    let deps_callbacks = deps.clone();
    let deps_fallback = deps;

    dptree::entry()
        // Recognized commands
        .branch(command_handler(deps_commands))
        // Inline button presses
        .branch(callback_handler(deps_callbacks))
        // Everything else gets the soft redirect to the app
        .branch(fallback_handler(deps_fallback))
}

fn command_handler(deps: HandlerDeps) -> UpdateHandler<HandlerError> {
    Update::filter_message().branch(dptree::entry().filter_command::<Command>().endpoint(
        move |bot: Bot, msg: Message, cmd: Command| {
            let deps = deps.clone();
            async move {
                log::info!("Received command {:?} from chat {}", cmd, msg.chat.id);
                if let Err(e) = commands::handle_command(&bot, &msg, cmd, &deps).await {
                    log::error!("Command handler failed for chat {}: {e}", msg.chat.id);
                }
                Ok::<(), HandlerError>(())
            }
        },
    ))
}

fn callback_handler(deps: HandlerDeps) -> UpdateHandler<HandlerError> {
    Update::filter_callback_query().endpoint(move |bot: Bot, q: CallbackQuery| {
        let deps = deps.clone();
        async move {
            callbacks::handle_callback(&bot, q, &deps).await;
            Ok::<(), HandlerError>(())
        }
    })
}

fn fallback_handler(deps: HandlerDeps) -> UpdateHandler<HandlerError> {
    Update::filter_message().endpoint(move |bot: Bot, msg: Message| {
        let deps = deps.clone();
        async move {
            if let Err(e) = commands::handle_unclassified(&bot, &msg, &deps).await {
                log::error!("Fallback handler failed for chat {}: {e}", msg.chat.id);
            }
            Ok::<(), HandlerError>(())
        }
    })
}
