//! Error types for the Tally system.
//!
//! Uses `thiserror` for ergonomic error definition with categorized kinds.

use thiserror::Error;

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for Tally operations.
#[derive(Debug, Error)]
#[error("{kind}")]
pub struct Error {
    /// The kind of error that occurred.
    pub kind: ErrorKind,
}

impl Error {
    /// Creates a new error with the given kind.
    #[must_use]
    pub fn new(kind: ErrorKind) -> Self {
        Self { kind }
    }

    /// Creates a syntax error from a parse failure description.
    #[must_use]
    pub fn syntax(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Syntax(message.into()))
    }

    /// Creates a missing-caller error.
    #[must_use]
    pub fn missing_caller() -> Self {
        Self::new(ErrorKind::MissingCaller)
    }

    /// Creates a campaign-not-found error.
    #[must_use]
    pub fn campaign_not_found(name: impl Into<String>) -> Self {
        Self::new(ErrorKind::CampaignNotFound(name.into()))
    }

    /// Creates a duplicate-campaign error.
    #[must_use]
    pub fn duplicate_campaign(name: impl Into<String>) -> Self {
        Self::new(ErrorKind::DuplicateCampaign(name.into()))
    }

    /// Creates a no-active-campaign error.
    #[must_use]
    pub fn no_active_campaign() -> Self {
        Self::new(ErrorKind::NoActiveCampaign)
    }

    /// Creates an invalid-vocabulary-pattern error.
    #[must_use]
    pub fn invalid_pattern(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::InvalidPattern(message.into()))
    }

    /// Creates a serialization error.
    #[must_use]
    pub fn serialization(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::SerializationError(message.into()))
    }

    /// Creates an I/O error.
    #[must_use]
    pub fn io(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::IoError(message.into()))
    }

    /// Creates an internal error.
    #[must_use]
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Internal(message.into()))
    }
}

/// Categorized error kinds for pattern matching.
#[derive(Debug, Error)]
pub enum ErrorKind {
    /// The token stream did not match the query grammar.
    #[error("syntax error: {0}")]
    Syntax(String),

    /// The caller identifier was missing or empty.
    ///
    /// This is a caller contract violation and is rejected before lexing.
    #[error("caller identifier is missing or empty")]
    MissingCaller,

    /// No campaign with the given name exists in the store.
    #[error("no campaign named '{0}'")]
    CampaignNotFound(String),

    /// More than one campaign with the given name exists in the store.
    #[error("multiple campaigns named '{0}'")]
    DuplicateCampaign(String),

    /// The store has no active campaign pointer.
    #[error("no active campaign set")]
    NoActiveCampaign,

    /// The vocabulary could not be compiled into a lexer pattern.
    #[error("invalid vocabulary pattern: {0}")]
    InvalidPattern(String),

    /// Serialization or deserialization failed.
    #[error("serialization error: {0}")]
    SerializationError(String),

    /// An I/O operation failed.
    #[error("io error: {0}")]
    IoError(String),

    /// Internal error (should not happen).
    #[error("internal error: {0}")]
    Internal(String),
}
