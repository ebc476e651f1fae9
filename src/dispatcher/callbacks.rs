//! Callback-query handlers.
//!
//! Every query is acknowledged exactly once, before any routing, so the
//! client-side spinner clears even when the handler below fails. Menu
//! navigation edits the originating message in place; views that may hang off
//! a photo caption (the help button under the welcome image) fall back from
//! edit to a fresh send.

use teloxide::prelude::*;
use teloxide::types::{InlineKeyboardMarkup, MessageId};

use super::HandlerDeps;
use crate::error::HandlerResult;
use crate::i18n::{self, Lang};
use crate::menu::{self, GuideTopic, MenuState};

/// Typed form of the callback-data string. All wire payloads funnel through
/// [`classify`]; handler selection matches on this exhaustively.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CallbackAction {
    ShowHelp,
    GuideSelect(GuideTopic),
    GuideBack,
    SetLanguage(Lang),
    /// A `guide_*` payload whose topic id is outside the closed set. Distinct
    /// from [`CallbackAction::Unknown`]: this is a data-integrity condition
    /// (a stale or forged button), not merely unrecognized traffic.
    UnknownTopic(String),
    Unknown,
}

pub fn classify(data: &str) -> CallbackAction {
    match data {
        "show_help" => CallbackAction::ShowHelp,
        "guide_back" => CallbackAction::GuideBack,
        "set_lang_ru" => CallbackAction::SetLanguage(Lang::Ru),
        "set_lang_en" => CallbackAction::SetLanguage(Lang::En),
        _ => match data.strip_prefix("guide_") {
            Some(topic_id) => match GuideTopic::parse(topic_id) {
                Ok(topic) => CallbackAction::GuideSelect(topic),
                Err(_) => CallbackAction::UnknownTopic(topic_id.to_string()),
            },
            None => CallbackAction::Unknown,
        },
    }
}

pub(super) async fn handle_callback(bot: &Bot, q: CallbackQuery, deps: &HandlerDeps) {
    if let Err(e) = bot.answer_callback_query(q.id.clone()).await {
        log::warn!("Failed to answer callback query from user {}: {e}", q.from.id);
    }

    let Some(data) = q.data.as_deref() else {
        return;
    };
    let Some(message) = q.message.as_ref() else {
        log::warn!("Callback {data:?} arrived without an attached message");
        return;
    };
    let chat_id = message.chat().id;
    let message_id = message.id();
    let user_id = i64::try_from(q.from.id.0).unwrap_or(chat_id.0);
    let hint = q.from.language_code.as_deref();

    let result = match classify(data) {
        CallbackAction::ShowHelp => {
            let lang = deps.resolver.resolve(user_id, hint).await;
            let keyboard = menu::webapp_keyboard(lang, &deps.config.webapp_url);
            edit_or_send(bot, chat_id, message_id, i18n::lookup(lang, "help"), keyboard).await
        }
        CallbackAction::GuideSelect(topic) => {
            edit_menu(bot, chat_id, message_id, user_id, hint, MenuState::TopicDetail(topic), deps).await
        }
        CallbackAction::GuideBack => {
            edit_menu(bot, chat_id, message_id, user_id, hint, MenuState::TopicList, deps).await
        }
        CallbackAction::SetLanguage(lang) => confirm_language(bot, chat_id, message_id, user_id, lang, deps).await,
        CallbackAction::UnknownTopic(topic_id) => {
            log::error!("Callback from user {user_id} carried unknown guide topic {topic_id:?}");
            let lang = deps.resolver.resolve(user_id, hint).await;
            let keyboard = menu::webapp_keyboard(lang, &deps.config.webapp_url);
            edit_or_send(bot, chat_id, message_id, i18n::lookup(lang, "error_generic"), keyboard).await
        }
        CallbackAction::Unknown => {
            log::warn!("Unrecognized callback action {data:?} from user {user_id}");
            let lang = deps.resolver.resolve(user_id, hint).await;
            let keyboard = menu::webapp_keyboard(lang, &deps.config.webapp_url);
            edit_or_send(bot, chat_id, message_id, i18n::lookup(lang, "fallback"), keyboard).await
        }
    };

    if let Err(e) = result {
        log::error!("Callback handler failed for chat {chat_id}: {e}");
    }
}

/// Guide navigation: re-render for the target state and replace the message
/// content in place.
async fn edit_menu(
    bot: &Bot,
    chat_id: ChatId,
    message_id: MessageId,
    user_id: i64,
    hint: Option<&str>,
    state: MenuState,
    deps: &HandlerDeps,
) -> HandlerResult {
    let lang = deps.resolver.resolve(user_id, hint).await;
    let view = menu::render(lang, &state, &deps.config.webapp_url);

    bot.edit_message_text(chat_id, message_id, view.text)
        .reply_markup(view.keyboard)
        .await?;
    Ok(())
}

/// Explicit language change. The store write is best-effort; the confirmation
/// is always rendered in the newly chosen language so the user sees the
/// switch take effect immediately.
async fn confirm_language(
    bot: &Bot,
    chat_id: ChatId,
    message_id: MessageId,
    user_id: i64,
    lang: Lang,
    deps: &HandlerDeps,
) -> HandlerResult {
    if !deps.resolver.set_language(user_id, lang).await {
        log::warn!("Failed to persist language choice {:?} for user {user_id}", lang.code());
    }

    let keyboard = menu::webapp_keyboard(lang, &deps.config.webapp_url);
    edit_or_send(bot, chat_id, message_id, i18n::lookup(lang, "language_set"), keyboard).await
}

/// Replaces the originating message's text, or sends a new message when the
/// edit is rejected (a caption-only message, or content identical to the
/// previous render).
async fn edit_or_send(
    bot: &Bot,
    chat_id: ChatId,
    message_id: MessageId,
    text: &str,
    keyboard: InlineKeyboardMarkup,
) -> HandlerResult {
    let edited = bot
        .edit_message_text(chat_id, message_id, text)
        .reply_markup(keyboard.clone())
        .await;

    if let Err(e) = edited {
        log::debug!("Edit of message {} failed ({e}), sending fresh message", message_id.0);
        bot.send_message(chat_id, text).reply_markup(keyboard).await?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn classifies_fixed_actions() {
        assert_eq!(classify("show_help"), CallbackAction::ShowHelp);
        assert_eq!(classify("guide_back"), CallbackAction::GuideBack);
        assert_eq!(classify("set_lang_ru"), CallbackAction::SetLanguage(Lang::Ru));
        assert_eq!(classify("set_lang_en"), CallbackAction::SetLanguage(Lang::En));
    }

    #[test]
    fn classifies_every_guide_topic() {
        for topic in GuideTopic::ALL {
            let data = format!("guide_{}", topic.key());
            assert_eq!(classify(&data), CallbackAction::GuideSelect(topic));
        }
    }

    #[test]
    fn unknown_guide_topic_is_flagged_separately() {
        assert_eq!(
            classify("guide_crypto"),
            CallbackAction::UnknownTopic("crypto".to_string())
        );
    }

    #[test]
    fn unrelated_payloads_fall_through_to_unknown() {
        assert_eq!(classify(""), CallbackAction::Unknown);
        assert_eq!(classify("set_lang_de"), CallbackAction::Unknown);
        assert_eq!(classify("open_app"), CallbackAction::Unknown);
    }
}
