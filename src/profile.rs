//! HTTP client for the user-profile service.
//!
//! The profile service owns the user record; this client reads and writes a
//! single field, the stored language code. Both operations degrade gracefully:
//! the chat experience must never fail outright because the profile store is
//! down, so transport errors and non-2xx statuses are logged and mapped to
//! "absent" / `false` instead of being surfaced.

use serde::{Deserialize, Serialize};

/// Wire format of `GET /api/v1/users/telegram/{id}`.
#[derive(Debug, Deserialize)]
struct UserProfile {
    language_code: Option<String>,
}

/// Body of `PATCH /api/v1/users/telegram/{id}`.
#[derive(Debug, Serialize)]
struct LanguagePatch<'a> {
    language_code: &'a str,
}

pub struct ProfileClient {
    http: reqwest::Client,
    base_url: String,
}

impl ProfileClient {
    /// Builds a client with an explicit request timeout. Falls back to the
    /// default client if the builder fails (it only can on TLS backend
    /// misconfiguration, which would surface at startup anyway).
    pub fn new(base_url: &str, timeout: std::time::Duration) -> Self {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .unwrap_or_default();
        Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    fn user_url(&self, user_id: i64) -> String {
        format!("{}/api/v1/users/telegram/{}", self.base_url, user_id)
    }

    /// Fetches the stored language code for a user. Returns `None` for a
    /// missing user, a null field, a non-2xx status, a malformed body, or any
    /// transport error.
    pub async fn fetch_language(&self, user_id: i64) -> Option<String> {
        let response = match self.http.get(self.user_url(user_id)).send().await {
            Ok(response) => response,
            Err(e) => {
                log::warn!("Profile fetch failed for user {user_id}: {e}");
                return None;
            }
        };

        if !response.status().is_success() {
            log::warn!(
                "Profile fetch for user {user_id} returned status {}",
                response.status()
            );
            return None;
        }

        match response.json::<UserProfile>().await {
            Ok(profile) => profile.language_code,
            Err(e) => {
                log::warn!("Profile fetch for user {user_id} returned malformed body: {e}");
                None
            }
        }
    }

    /// Stores the language code for a user. Returns `true` iff the service
    /// answered 2xx; all failures are swallowed.
    pub async fn store_language(&self, user_id: i64, code: &str) -> bool {
        let result = self
            .http
            .patch(self.user_url(user_id))
            .json(&LanguagePatch { language_code: code })
            .send()
            .await;

        match result {
            Ok(response) if response.status().is_success() => true,
            Ok(response) => {
                log::warn!(
                    "Profile store for user {user_id} returned status {}",
                    response.status()
                );
                false
            }
            Err(e) => {
                log::warn!("Profile store failed for user {user_id}: {e}");
                false
            }
        }
    }
}
