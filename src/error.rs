// src/error.rs

use thiserror::Error;

/// Fatal errors. Per-row parse failures are not errors (rows are silently
/// skipped), and send failures are handled inside the notifier.
#[derive(Debug, Error)]
pub enum Error {
    /// Non-2xx response from the event page.
    #[error("fetch failed: HTTP {status} from {url}")]
    Http { url: String, status: u16 },

    /// Transport-level fetch failure (DNS, TLS, connect, read).
    #[error("fetch failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// Missing or unusable configuration, raised before any network call.
    #[error("configuration error: {0}")]
    Config(&'static str),
}
