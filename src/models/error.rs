/// Fixed message shown whenever the backend cannot be reached at all.
pub const BACKEND_UNREACHABLE: &str =
    "Network error: Could not connect to backend. Make sure the backend server is running.";

/// Every failure the dashboard can surface to the user.
///
/// `Display` yields the user-visible message verbatim, so components render
/// errors with `to_string()` and nothing else.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AppError {
    /// The request never reached the backend (DNS, refused connection, CORS, timeout).
    #[error("{0}")]
    NetworkUnreachable(String),

    /// The backend answered with a status outside 200-299.
    #[error("{message}")]
    HttpStatus { status: u16, message: String },

    /// The body was not JSON or did not have the expected shape.
    #[error("{0}")]
    MalformedBody(String),

    /// A successful response whose body reports a logical error.
    #[error("{0}")]
    Domain(String),

    /// Local input error, raised before any request is made.
    #[error("{0}")]
    Validation(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),
}

impl AppError {
    pub fn unreachable() -> Self {
        Self::NetworkUnreachable(BACKEND_UNREACHABLE.to_string())
    }

    /// Builds the error for a non-2xx response.
    ///
    /// The body's `error` string is used verbatim when present; otherwise the
    /// message falls back to one naming the status code.
    pub fn from_status(status: u16, body: &str) -> Self {
        let message = serde_json::from_str::<serde_json::Value>(body)
            .ok()
            .and_then(|v| v.get("error")?.as_str().map(str::to_string))
            .unwrap_or_else(|| format!("HTTP error! status: {status}"));

        Self::HttpStatus { status, message }
    }

    /// True for errors raised before a request was sent.
    pub const fn is_local(&self) -> bool {
        matches!(self, Self::Validation(_))
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            Self::HttpStatus { status, .. } => Some(*status),
            _ => None,
        }
    }
}
