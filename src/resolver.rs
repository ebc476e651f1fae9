//! Per-event language resolution.
//!
//! The profile service is the single source of truth: the resolver is called
//! on every inbound update with no per-process session cache, so a language
//! change made through the explicit picker is observed on the very next event.

use std::sync::Arc;

use crate::i18n::Lang;
use crate::profile::ProfileClient;

pub struct LanguageResolver {
    profile: Arc<ProfileClient>,
}

impl LanguageResolver {
    pub fn new(profile: Arc<ProfileClient>) -> Self {
        Self { profile }
    }

    /// Resolves the effective display language for a user.
    ///
    /// 1. If the profile store has a valid code, return it without writing.
    /// 2. Otherwise derive a code from the platform locale hint (`ru` only on
    ///    an exact `ru` hint, else `en`).
    /// 3. Persist the derived code best-effort; a store failure still returns
    ///    the derived value for the current response.
    ///
    /// Two events racing on the same new user may both reach the store; both
    /// derive the same value from the same hint, so last write wins without
    /// corruption.
    pub async fn resolve(&self, user_id: i64, locale_hint: Option<&str>) -> Lang {
        if let Some(code) = self.profile.fetch_language(user_id).await {
            if let Some(lang) = Lang::from_code(&code) {
                return lang;
            }
            log::warn!("User {user_id} has unsupported stored language {code:?}, re-detecting");
        }

        let lang = Lang::detect(locale_hint);
        if !self.profile.store_language(user_id, lang.code()).await {
            log::warn!("Failed to persist auto-detected language for user {user_id}, will retry on next event");
        }
        lang
    }

    /// Explicit language change from the picker. Bypasses detection and
    /// writes the requested code directly. The confirmation shown to the user
    /// must be rendered in the newly chosen language, not the prior one.
    pub async fn set_language(&self, user_id: i64, lang: Lang) -> bool {
        self.profile.store_language(user_id, lang.code()).await
    }
}
