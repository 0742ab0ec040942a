//! Error types for habitforge

use thiserror::Error;

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, HfError>;

/// All errors the core and CLI can surface.
///
/// Nothing here is fatal to the process: `main` maps any variant to a
/// non-zero exit code and every operation returns control to the caller.
#[derive(Debug, Error)]
pub enum HfError {
    /// Credential mismatch for a known phone number. Recoverable by retrying.
    #[error("incorrect password, please try again")]
    IncorrectPassword,

    /// An operation that needs an authenticated session was called without one.
    #[error("not logged in, run `hf login` first")]
    NotLoggedIn,

    /// Input rejected at the CLI boundary before reaching the core.
    #[error("invalid input: {0}")]
    Validation(String),

    /// Unrecognized day name passed to a day-keyed operation.
    #[error("unknown day '{0}' (expected Mon, Tue, Wed, Thu, Fri, Sat or Sun)")]
    UnknownDay(String),

    #[error("config error: {0}")]
    Config(String),

    #[error("config not found: {0}")]
    MissingConfig(String),

    #[error("serialization error: {0}")]
    Serialization(String),

    #[error("storage error: {0}")]
    Storage(#[from] rusqlite::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}
