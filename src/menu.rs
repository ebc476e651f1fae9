//! Guide menu navigator.
//!
//! A stateless two-level menu: topic list ↔ topic detail. State is never
//! persisted; it is reconstructed from the callback action on each
//! interaction, and `render` is a pure function from (language, state) to an
//! outbound view. The dispatcher decides whether the view is sent as a new
//! message (the `/guide` command) or edited in place (navigation callbacks) —
//! in-place editing is a UX contract, the menu must feel like navigation
//! rather than a stream of new messages.

use teloxide::types::{InlineKeyboardButton, InlineKeyboardMarkup, WebAppInfo};
use url::Url;

use crate::error::BotError;
use crate::i18n::{self, Lang};

/// Closed set of guide topics, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuideTopic {
    Accounts,
    Currency,
    Debt,
    Categories,
    Filters,
    Export,
    Edit,
    Notifications,
}

impl GuideTopic {
    pub const ALL: [GuideTopic; 8] = [
        GuideTopic::Accounts,
        GuideTopic::Currency,
        GuideTopic::Debt,
        GuideTopic::Categories,
        GuideTopic::Filters,
        GuideTopic::Export,
        GuideTopic::Edit,
        GuideTopic::Notifications,
    ];

    /// Stable identifier used in callback data and catalog keys.
    pub fn key(self) -> &'static str {
        match self {
            GuideTopic::Accounts => "accounts",
            GuideTopic::Currency => "currency",
            GuideTopic::Debt => "debt",
            GuideTopic::Categories => "categories",
            GuideTopic::Filters => "filters",
            GuideTopic::Export => "export",
            GuideTopic::Edit => "edit",
            GuideTopic::Notifications => "notifications",
        }
    }

    /// Parses a topic id from callback data. An id outside the closed set is
    /// a data-integrity error, not a renderable state.
    pub fn parse(id: &str) -> Result<Self, BotError> {
        GuideTopic::ALL
            .into_iter()
            .find(|topic| topic.key() == id)
            .ok_or_else(|| BotError::UnknownTopic(id.to_string()))
    }

    fn body_key(self) -> String {
        format!("guide_{}", self.key())
    }

    fn button_key(self) -> String {
        format!("btn_guide_{}", self.key())
    }

    fn callback_data(self) -> String {
        format!("guide_{}", self.key())
    }
}

/// Menu position, reconstructed from the incoming action on every event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuState {
    TopicList,
    TopicDetail(GuideTopic),
}

/// The (text, keyboard) pair computed for a single response.
#[derive(Debug, Clone)]
pub struct OutboundView {
    pub text: String,
    pub keyboard: InlineKeyboardMarkup,
}

/// Renders the guide menu for a state. Pure: no I/O, no side effects.
pub fn render(lang: Lang, state: &MenuState, webapp_url: &Url) -> OutboundView {
    match state {
        MenuState::TopicList => {
            let mut rows: Vec<Vec<InlineKeyboardButton>> = GuideTopic::ALL
                .into_iter()
                .map(|topic| {
                    vec![InlineKeyboardButton::callback(
                        i18n::lookup(lang, &topic.button_key()),
                        topic.callback_data(),
                    )]
                })
                .collect();
            rows.push(vec![open_app_button(lang, webapp_url)]);
            rows.push(vec![help_button(lang)]);

            OutboundView {
                text: i18n::lookup(lang, "guide_title").to_string(),
                keyboard: InlineKeyboardMarkup::new(rows),
            }
        }
        MenuState::TopicDetail(topic) => {
            let rows = vec![
                vec![InlineKeyboardButton::callback(
                    i18n::lookup(lang, "btn_back"),
                    "guide_back",
                )],
                vec![open_app_button(lang, webapp_url)],
                vec![help_button(lang)],
            ];

            OutboundView {
                text: i18n::lookup(lang, &topic.body_key()).to_string(),
                keyboard: InlineKeyboardMarkup::new(rows),
            }
        }
    }
}

/// Single-row keyboard with just the "open app" button, used by most
/// fixed-response commands.
pub fn webapp_keyboard(lang: Lang, webapp_url: &Url) -> InlineKeyboardMarkup {
    InlineKeyboardMarkup::new(vec![vec![open_app_button(lang, webapp_url)]])
}

/// Language picker sent as the second message on /start and on /language.
pub fn language_picker_keyboard(lang: Lang) -> InlineKeyboardMarkup {
    InlineKeyboardMarkup::new(vec![
        vec![InlineKeyboardButton::callback(
            i18n::lookup(lang, "btn_lang_ru"),
            "set_lang_ru",
        )],
        vec![InlineKeyboardButton::callback(
            i18n::lookup(lang, "btn_lang_en"),
            "set_lang_en",
        )],
    ])
}

fn open_app_button(lang: Lang, webapp_url: &Url) -> InlineKeyboardButton {
    InlineKeyboardButton::web_app(
        i18n::lookup(lang, "btn_open_app"),
        WebAppInfo {
            url: webapp_url.clone(),
        },
    )
}

fn help_button(lang: Lang) -> InlineKeyboardButton {
    InlineKeyboardButton::callback(i18n::lookup(lang, "btn_help"), "show_help")
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn app_url() -> Url {
        Url::parse("https://fintrack.example.com").unwrap()
    }

    fn button_texts(view: &OutboundView) -> Vec<String> {
        view.keyboard
            .inline_keyboard
            .iter()
            .flatten()
            .map(|b| b.text.clone())
            .collect()
    }

    #[test]
    fn topic_list_shows_all_topics_in_fixed_order() {
        let view = render(Lang::En, &MenuState::TopicList, &app_url());
        let texts = button_texts(&view);

        // 8 topics + open app + help
        assert_eq!(texts.len(), 10);
        assert_eq!(texts[0], "💳 Accounts & display order");
        assert_eq!(texts[7], "🔔 Notifications");
        assert_eq!(texts[8], "💰 Open FinTrack");
        assert_eq!(texts[9], "📚 Help");
        assert!(view.text.contains("feature guide"));
    }

    #[test]
    fn detail_view_has_body_and_back_button() {
        let view = render(Lang::Ru, &MenuState::TopicDetail(GuideTopic::Debt), &app_url());
        assert!(view.text.contains("Погашение задолженностей"));

        let texts = button_texts(&view);
        assert_eq!(texts[0], "← Назад к темам");
        assert_eq!(texts.len(), 3);
    }

    // TopicList → select(accounts) → back must land on a view identical in
    // content to the original list render.
    #[test]
    fn menu_round_trip_is_lossless() {
        let url = app_url();
        let list = render(Lang::En, &MenuState::TopicList, &url);

        let topic = GuideTopic::parse("accounts").unwrap();
        let detail = render(Lang::En, &MenuState::TopicDetail(topic), &url);
        assert!(detail.text.contains("Accounts & display order"));

        let back = render(Lang::En, &MenuState::TopicList, &url);
        assert_eq!(list.text, back.text);
        assert_eq!(button_texts(&list), button_texts(&back));
    }

    #[test]
    fn unknown_topic_is_an_error_not_a_blank_view() {
        let err = GuideTopic::parse("not_a_topic").unwrap_err();
        assert!(matches!(err, BotError::UnknownTopic(ref id) if id == "not_a_topic"));
    }

    #[test]
    fn every_topic_has_a_non_empty_body_in_both_languages() {
        for topic in GuideTopic::ALL {
            for lang in [Lang::Ru, Lang::En] {
                let view = render(lang, &MenuState::TopicDetail(topic), &app_url());
                assert!(!view.text.is_empty(), "blank body for {:?} in {:?}", topic, lang);
            }
        }
    }

    #[test]
    fn topic_callback_data_matches_wire_grammar() {
        assert_eq!(GuideTopic::Accounts.callback_data(), "guide_accounts");
        assert_eq!(GuideTopic::Notifications.callback_data(), "guide_notifications");
    }
}
