//! FinTrack bot: the Telegram front-end of the FinTrack personal-finance
//! web app.
//!
//! The bot itself holds no financial data. It routes commands and inline
//! button presses to canned, localized responses, keeps the user's display
//! language in the profile service, and points everything at the web app via
//! inline web-app buttons.

pub mod config;
pub mod dispatcher;
pub mod error;
pub mod i18n;
pub mod media;
pub mod menu;
pub mod profile;
pub mod resolver;

pub use config::Config;
pub use dispatcher::{create_bot, schema, setup_bot_commands, Command, HandlerDeps};
pub use error::{BotError, HandlerError, HandlerResult};
