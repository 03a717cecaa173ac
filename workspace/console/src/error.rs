use compute::ComputeError;
use thiserror::Error;

/// Errors surfaced by console operations. None of them are fatal to the
/// process; controllers turn them into notifications.
#[derive(Error, Debug)]
pub enum ConsoleError {
    /// The session has no tenant record to read or update.
    #[error("no tenant record is linked to this session")]
    MissingIdentity,

    /// The request never produced a response (connection, timeout, TLS).
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The backend answered with a non-success status.
    #[error("backend returned {status} ({code}): {message}")]
    Api {
        status: u16,
        code: String,
        message: String,
    },

    /// The response body did not have the expected shape.
    #[error("unexpected response: {0}")]
    Decode(String),

    #[error(transparent)]
    Compute(#[from] ComputeError),
}

impl ConsoleError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, ConsoleError::Api { status: 404, .. })
    }
}

/// Type alias for Result with ConsoleError
pub type Result<T> = std::result::Result<T, ConsoleError>;
