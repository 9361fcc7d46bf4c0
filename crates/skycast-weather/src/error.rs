//! Weather pipeline error types.

use thiserror::Error;

/// Errors produced by a single forecast fetch.
///
/// Both variants are terminal for that call; recovery is driven by the next
/// location or unit change, never by an internal retry.
#[derive(Debug, Error)]
pub enum WeatherError {
    /// Connectivity failure, timeout, or a non-2xx response.
    #[error("network error: {0}")]
    Network(String),

    /// Response body did not match the expected forecast schema.
    #[error("unexpected forecast payload: {0}")]
    Parse(String),
}

impl WeatherError {
    /// User-friendly error message for UI display.
    pub fn user_message(&self) -> &'static str {
        match self {
            WeatherError::Network(_) => "Weather service unreachable. Check your connection.",
            WeatherError::Parse(_) => "Weather service returned unexpected data.",
        }
    }
}

impl From<reqwest::Error> for WeatherError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            WeatherError::Parse(err.to_string())
        } else if err.is_timeout() {
            WeatherError::Network(format!("request timed out: {err}"))
        } else {
            WeatherError::Network(err.to_string())
        }
    }
}
