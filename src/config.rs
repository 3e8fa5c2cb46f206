// src/config.rs

use std::env;

// Source page
pub const EVENT_URL: &str = "https://19hz.info/eventlisting_BayArea.php";

// Filtering
pub const KEYWORDS: [&str; 2] = ["hardstyle", "hardcore"];
pub const LOOKAHEAD_DAYS: i64 = 7;

// Email provider
pub const RESEND_ENDPOINT: &str = "https://api.resend.com/emails";

/// Runtime configuration, built once at process start and passed into the
/// components. All values come from the environment; none are read again
/// after construction.
#[derive(Clone, Debug)]
pub struct Config {
    /// Page to fetch. Defaults to [`EVENT_URL`].
    pub event_url: String,
    /// Sender identity. Required before any send attempt, dry-run included.
    pub email_user: Option<String>,
    /// Single recipient address.
    pub email_to: Option<String>,
    /// Resend API key. Not validated up front; a missing key simply makes
    /// the send call fail, which is logged and swallowed.
    pub resend_api_key: Option<String>,
    /// Send endpoint. Defaults to [`RESEND_ENDPOINT`].
    pub resend_endpoint: String,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            event_url: env::var("EVENT_URL").unwrap_or_else(|_| EVENT_URL.to_string()),
            email_user: env::var("EMAIL_USER").ok(),
            email_to: env::var("EMAIL_TO").ok(),
            resend_api_key: env::var("RESEND_API_KEY").ok(),
            resend_endpoint: env::var("RESEND_ENDPOINT")
                .unwrap_or_else(|_| RESEND_ENDPOINT.to_string()),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            event_url: EVENT_URL.to_string(),
            email_user: None,
            email_to: None,
            resend_api_key: None,
            resend_endpoint: RESEND_ENDPOINT.to_string(),
        }
    }
}
