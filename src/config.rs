use std::env;
use std::path::PathBuf;
use std::time::Duration;

use anyhow::Context;
use url::Url;

/// Fallback web app URL, matching the production deployment.
const DEFAULT_WEBAPP_URL: &str = "https://financetrack21.netlify.app";

/// Fallback profile service base URL (local development API).
const DEFAULT_PROFILE_API_URL: &str = "http://127.0.0.1:3000";

/// Request timeout for profile-service calls. A slow profile service only
/// delays the single in-flight update, but there is no reason to hold a task
/// for longer than this.
pub const PROFILE_TIMEOUT_SECS: u64 = 10;

/// Runtime configuration, loaded once at startup and injected into the
/// handler dependencies. No module reads the environment after this point.
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the FinTrack web application, opened by inline buttons.
    pub webapp_url: Url,
    /// Base URL of the user-profile service (language storage).
    pub profile_api_url: String,
    /// Path to the welcome image uploaded on first /start.
    pub welcome_image: PathBuf,
}

impl Config {
    /// Reads configuration from the environment, with defaults for everything
    /// except the bot token (which teloxide reads itself from TELOXIDE_TOKEN).
    pub fn from_env() -> anyhow::Result<Self> {
        let webapp_url = env::var("WEBAPP_URL").unwrap_or_else(|_| DEFAULT_WEBAPP_URL.to_string());
        let webapp_url = Url::parse(&webapp_url).with_context(|| format!("invalid WEBAPP_URL: {webapp_url}"))?;

        let profile_api_url = env::var("PROFILE_API_URL").unwrap_or_else(|_| DEFAULT_PROFILE_API_URL.to_string());

        let welcome_image = env::var("WELCOME_IMAGE")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("assets/welcome.png"));

        Ok(Self {
            webapp_url,
            profile_api_url,
            welcome_image,
        })
    }

    /// The web app opened directly on its settings screen, used by the donate
    /// flow. The base URL is opaque configuration; we only set the path.
    pub fn webapp_settings_url(&self) -> Url {
        let mut url = self.webapp_url.clone();
        url.set_path("/settings");
        url
    }

    pub fn profile_timeout() -> Duration {
        Duration::from_secs(PROFILE_TIMEOUT_SECS)
    }
}
