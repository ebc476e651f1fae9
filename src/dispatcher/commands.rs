//! Command handlers. Every handler resolves the user's language exactly once
//! at the top and threads it through rendering; nothing below this layer
//! re-resolves.

use teloxide::prelude::*;
use teloxide::types::{InputFile, Message};

use super::{Command, HandlerDeps};
use crate::error::HandlerResult;
use crate::i18n::{self, Lang};
use crate::menu::{self, MenuState};

/// The numeric user id the profile service keys on. Anonymous channel posts
/// have no sender; the chat id is a stable stand-in there.
fn sender_id(msg: &Message) -> i64 {
    msg.from
        .as_ref()
        .and_then(|user| i64::try_from(user.id.0).ok())
        .unwrap_or(msg.chat.id.0)
}

fn locale_hint(msg: &Message) -> Option<&str> {
    msg.from.as_ref().and_then(|user| user.language_code.as_deref())
}

pub(super) async fn handle_command(bot: &Bot, msg: &Message, cmd: Command, deps: &HandlerDeps) -> HandlerResult {
    let user_id = sender_id(msg);
    let lang = deps.resolver.resolve(user_id, locale_hint(msg)).await;

    match cmd {
        Command::Start => {
            send_welcome(bot, msg.chat.id, lang, deps).await?;
            // The picker always follows the welcome, even when the image had
            // to be skipped.
            bot.send_message(msg.chat.id, i18n::lookup(lang, "language_prompt"))
                .reply_markup(menu::language_picker_keyboard(lang))
                .await?;
        }
        Command::Help => send_fixed(bot, msg.chat.id, lang, "help", deps).await?,
        Command::Guide => {
            let view = menu::render(lang, &MenuState::TopicList, &deps.config.webapp_url);
            bot.send_message(msg.chat.id, view.text).reply_markup(view.keyboard).await?;
        }
        Command::Tips => send_fixed(bot, msg.chat.id, lang, "tips", deps).await?,
        Command::Why => send_fixed(bot, msg.chat.id, lang, "why", deps).await?,
        Command::Language => {
            bot.send_message(msg.chat.id, i18n::lookup(lang, "language_prompt"))
                .reply_markup(menu::language_picker_keyboard(lang))
                .await?;
        }
        Command::Version => send_fixed(bot, msg.chat.id, lang, "version", deps).await?,
        Command::Donate => {
            // Donations live on the app's settings screen, so this button
            // deep-links there instead of the app root.
            let keyboard = menu::webapp_keyboard(lang, &deps.config.webapp_settings_url());
            bot.send_message(msg.chat.id, i18n::lookup(lang, "donate"))
                .reply_markup(keyboard)
                .await?;
        }
        Command::Support => send_fixed(bot, msg.chat.id, lang, "support", deps).await?,
    }

    Ok(())
}

/// Non-command, non-callback traffic: a short redirect to the app. Service
/// messages without a sender are ignored.
pub(super) async fn handle_unclassified(bot: &Bot, msg: &Message, deps: &HandlerDeps) -> HandlerResult {
    if msg.from.is_none() {
        return Ok(());
    }

    let user_id = sender_id(msg);
    let lang = deps.resolver.resolve(user_id, locale_hint(msg)).await;
    send_fixed(bot, msg.chat.id, lang, "fallback", deps).await
}

/// Catalog text plus the standard "open app" button.
async fn send_fixed(bot: &Bot, chat_id: ChatId, lang: Lang, key: &str, deps: &HandlerDeps) -> HandlerResult {
    bot.send_message(chat_id, i18n::lookup(lang, key))
        .reply_markup(menu::webapp_keyboard(lang, &deps.config.webapp_url))
        .await?;
    Ok(())
}

/// Welcome message with the branding image. The first successful upload per
/// process records the file id Telegram assigns; every later /start reuses it
/// instead of re-uploading. On upload failure the welcome degrades to text
/// and the cache stays empty so the next /start retries.
async fn send_welcome(bot: &Bot, chat_id: ChatId, lang: Lang, deps: &HandlerDeps) -> HandlerResult {
    let caption = i18n::lookup(lang, "welcome");
    let keyboard = menu::webapp_keyboard(lang, &deps.config.webapp_url);

    if let Some(handle) = deps.media.welcome_handle().await {
        bot.send_photo(chat_id, InputFile::file_id(handle))
            .caption(caption)
            .reply_markup(keyboard)
            .await?;
        return Ok(());
    }

    let upload = bot
        .send_photo(chat_id, InputFile::file(deps.config.welcome_image.clone()))
        .caption(caption)
        .reply_markup(keyboard.clone())
        .await;

    match upload {
        Ok(sent) => {
            // The largest PhotoSize carries the reusable id for the original.
            if let Some(photo) = sent.photo().and_then(|sizes| sizes.last()) {
                deps.media.record_welcome(photo.file.id.clone()).await;
            }
        }
        Err(e) => {
            log::warn!("Welcome image upload failed, sending text-only welcome: {e}");
            bot.send_message(chat_id, caption).reply_markup(keyboard).await?;
        }
    }

    Ok(())
}
