use anyhow::{Context, Result};

/// Application configuration loaded from environment variables.
///
/// Provider credentials are OPTIONAL at startup: the service boots without
/// them and the endpoints that need one answer with a configuration error
/// instead. Only malformed values fail the boot.
#[derive(Debug, Clone)]
pub struct Config {
    /// Image generation provider token. Sketch endpoints require it.
    pub replicate_api_token: Option<String>,
    /// Text model key for prompt refinement. Optional; without it the raw
    /// customer idea goes straight into the style scaffold.
    pub gemini_api_key: Option<String>,
    /// Bot token for the webhook's outbound notification.
    pub telegram_bot_token: Option<String>,
    /// URL the Telegram inline button opens.
    pub web_app_url: String,
    /// Blade mask used when the request does not carry one.
    pub mask_path: String,
    /// Which provider profile drives sketch generation.
    pub sketch_profile: String,
    /// Successful generations allowed per calendar day; unlimited if unset.
    pub sketch_daily_limit: Option<u32>,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            replicate_api_token: optional_env("REPLICATE_API_TOKEN"),
            gemini_api_key: optional_env("GEMINI_API_KEY"),
            telegram_bot_token: optional_env("TELEGRAM_BOT_TOKEN"),
            web_app_url: std::env::var("WEB_APP_URL")
                .unwrap_or_else(|_| "https://topordorf-totem.vercel.app".to_string()),
            mask_path: std::env::var("MASK_PATH")
                .unwrap_or_else(|_| "public/mask.png".to_string()),
            sketch_profile: std::env::var("SKETCH_PROFILE")
                .unwrap_or_else(|_| "flux-fill".to_string()),
            sketch_daily_limit: match optional_env("SKETCH_DAILY_LIMIT") {
                Some(raw) => Some(
                    raw.parse::<u32>()
                        .context("SKETCH_DAILY_LIMIT must be a non-negative integer")?,
                ),
                None => None,
            },
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}

/// Reads an env var, treating empty values as unset.
fn optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|value| !value.is_empty())
}
