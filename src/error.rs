//! Typed error record and HTTP status classification.

use std::time::Duration;

use serde::Deserialize;

/// Message used when an error response body cannot be decoded.
pub const UNPARSEABLE_BODY: &str = "unparseable error body";

/// Failure categories surfaced to callers.
///
/// `Network`, `Server` and `RateLimit` are transient and eligible for retry;
/// every other kind is terminal on first occurrence.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ErrorKind {
    /// Transport-level failure: connect error, timeout, interrupted body.
    Network,
    /// HTTP 401 or 403.
    Authentication,
    /// HTTP 404.
    NotFound,
    /// HTTP 400 or 422.
    Validation,
    /// HTTP 429. Carries the server's `Retry-After` when present.
    RateLimit,
    /// Any HTTP 5xx.
    Server,
    /// Any other non-success status.
    Unknown,
    /// A success response whose body could not be deserialized.
    Decode,
    /// Invalid client configuration.
    Config,
}

impl ErrorKind {
    /// Whether a failure of this kind may succeed on a later attempt.
    pub fn is_retryable(self) -> bool {
        matches!(
            self,
            ErrorKind::Network | ErrorKind::Server | ErrorKind::RateLimit
        )
    }
}

/// The terminal failure of one logical API call.
///
/// Immutable once surfaced. `attempts` counts the HTTP attempts made before
/// the call gave up, starting at 1.
#[derive(Clone, Debug)]
pub struct ApiError {
    pub kind: ErrorKind,
    /// HTTP status of the final attempt, when a response was received.
    pub status: Option<u16>,
    pub message: String,
    /// Server-provided `Retry-After`, only set for rate-limited responses.
    pub retry_after: Option<Duration>,
    /// HTTP attempts made for the logical call this error terminated.
    pub attempts: u32,
}

impl ApiError {
    pub(crate) fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            status: None,
            message: message.into(),
            retry_after: None,
            attempts: 1,
        }
    }

    pub(crate) fn config(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Config, message)
    }

    pub(crate) fn network(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Network, message)
    }

    pub(crate) fn decode(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Decode, message)
    }

    pub(crate) fn with_attempts(mut self, attempts: u32) -> Self {
        self.attempts = attempts;
        self
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self.kind {
            ErrorKind::Network => "network error",
            ErrorKind::Authentication => "authentication failed",
            ErrorKind::NotFound => "not found",
            ErrorKind::Validation => "validation failed",
            ErrorKind::RateLimit => "rate limited",
            ErrorKind::Server => "server error",
            ErrorKind::Unknown => "unexpected response",
            ErrorKind::Decode => "decode error",
            ErrorKind::Config => "configuration error",
        };
        match self.status {
            Some(status) => write!(f, "{} (HTTP {}): {}", label, status, self.message)?,
            None => write!(f, "{}: {}", label, self.message)?,
        }
        if self.attempts > 1 {
            write!(f, " after {} attempts", self.attempts)?;
        }
        Ok(())
    }
}

impl std::error::Error for ApiError {}

/// Conventional error body returned by the API.
#[derive(Deserialize)]
struct ErrorBody {
    message: Option<String>,
    code: Option<String>,
}

/// Maps a non-success response to a typed error.
///
/// The kind is derived from the status code alone; the message comes from the
/// conventional `{"message", "code"}` body when it parses, the raw body text
/// when it is plain text, and [`UNPARSEABLE_BODY`] otherwise.
pub fn classify(status: u16, retry_after: Option<Duration>, body: &[u8]) -> ApiError {
    let kind = match status {
        401 | 403 => ErrorKind::Authentication,
        404 => ErrorKind::NotFound,
        400 | 422 => ErrorKind::Validation,
        429 => ErrorKind::RateLimit,
        500..=599 => ErrorKind::Server,
        _ => ErrorKind::Unknown,
    };

    ApiError {
        kind,
        status: Some(status),
        message: error_message(body),
        retry_after: if kind == ErrorKind::RateLimit {
            retry_after
        } else {
            None
        },
        attempts: 1,
    }
}

fn error_message(body: &[u8]) -> String {
    if let Ok(parsed) = serde_json::from_slice::<ErrorBody>(body) {
        if let Some(message) = parsed.message {
            return match parsed.code {
                Some(code) => format!("{} ({})", message, code),
                None => message,
            };
        }
    }

    match std::str::from_utf8(body) {
        Ok(text) if !text.trim().is_empty() => text.trim().to_string(),
        _ => UNPARSEABLE_BODY.to_string(),
    }
}
