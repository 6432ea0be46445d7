//! Error types for the zfolio plugin.
//!
//! This module defines the crate-wide error type [`FolioError`], the lookup
//! failure type [`LookupError`] reported by the game database client, and a
//! [`Result`] alias. All errors derive their `Error` implementation through
//! `thiserror`.

use thiserror::Error;

/// Sentence shown to the user whenever a game lookup fails.
///
/// Transport and decoding detail never reaches the UI; it is logged instead.
pub const LOOKUP_FAILED_MESSAGE: &str = "Could not load games right now. Please try again.";

/// The main error type for zfolio operations.
///
/// # Examples
///
/// ```
/// use zfolio::FolioError;
///
/// fn validate() -> Result<(), FolioError> {
///     Err(FolioError::Config("phrases must not be empty".to_string()))
/// }
/// assert!(validate().is_err());
/// ```
#[derive(Debug, Error)]
pub enum FolioError {
    /// Configuration is invalid or missing.
    ///
    /// Raised when plugin configuration values cannot produce a usable
    /// component, for example an empty typewriter phrase list.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Theme parsing or loading failed.
    #[error("Theme error: {0}")]
    Theme(String),

    /// Profile document parsing or loading failed.
    #[error("Profile error: {0}")]
    Profile(String),

    /// Filesystem or I/O operation failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The game database lookup failed.
    #[error("Lookup error: {0}")]
    Lookup(#[from] LookupError),
}

/// Failure of a single request to the game database.
///
/// Variants keep enough detail for logs; [`LookupError::user_message`] is what
/// the UI shows.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LookupError {
    /// No API key was configured, so no request was issued.
    #[error("no RAWG API key configured")]
    MissingApiKey,

    /// The request URL could not be built.
    #[error("invalid request URL: {0}")]
    InvalidUrl(String),

    /// The host or the API answered with a non-success status code.
    #[error("request failed with status {0}")]
    Status(u16),

    /// The response body was not the expected JSON document.
    #[error("malformed response: {0}")]
    Malformed(String),

    /// The user declined the web access permission.
    #[error("web access permission was denied")]
    PermissionDenied,

    /// The response could not be matched to a request this plugin issued.
    #[error("response does not belong to a known request")]
    UnknownRequest,
}

impl LookupError {
    /// Returns the generic message shown to the user for any lookup failure.
    #[must_use]
    pub const fn user_message(&self) -> &'static str {
        LOOKUP_FAILED_MESSAGE
    }
}

/// A specialized `Result` type for zfolio operations.
pub type Result<T> = std::result::Result<T, FolioError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_lookup_error_maps_to_the_same_user_message() {
        let errors = [
            LookupError::MissingApiKey,
            LookupError::InvalidUrl("x".into()),
            LookupError::Status(503),
            LookupError::Malformed("eof".into()),
            LookupError::PermissionDenied,
            LookupError::UnknownRequest,
        ];
        for error in errors {
            assert_eq!(error.user_message(), LOOKUP_FAILED_MESSAGE);
        }
    }

    #[test]
    fn lookup_error_converts_into_folio_error() {
        let err: FolioError = LookupError::Status(404).into();
        assert_eq!(err.to_string(), "Lookup error: request failed with status 404");
    }
}
