//! Error taxonomy.
//!
//! Expected environmental failures (profile service down, image upload
//! rejected) are handled at the call site with a degraded response and never
//! reach this layer. What does reach it are Telegram API failures on our own
//! outbound sends and data-integrity conditions like a forged callback
//! payload.

use thiserror::Error;

/// Boxed error type the dispatcher tree is parameterized over.
pub type HandlerError = Box<dyn std::error::Error + Send + Sync + 'static>;

pub type HandlerResult = Result<(), BotError>;

#[derive(Debug, Error)]
pub enum BotError {
    #[error("telegram request failed: {0}")]
    Request(#[from] teloxide::RequestError),

    #[error("unknown guide topic: {0}")]
    UnknownTopic(String),
}
