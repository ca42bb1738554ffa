//! Error types for SVG image extraction and packaging.

use thiserror::Error;

/// Result type alias using `ExtractError`.
pub type Result<T> = std::result::Result<T, ExtractError>;

/// Errors that can occur while validating, extracting, fetching, or
/// packaging embedded images.
///
/// The taxonomy is a closed union: input-shape problems (`Validation`),
/// network/HTTP problems (`Fetch`), SVG structural problems (`Parse`),
/// and everything else (`Other`, `Io`). Translation to user-facing text
/// is a total function over this union, see
/// [`user_message`](crate::error::user_message).
#[derive(Error, Debug)]
pub enum ExtractError {
    /// Input failed a format or size rule. Never retried.
    #[error("{message}")]
    Validation {
        /// The user-facing validation message.
        message: String,
        /// The input field the rule applies to, when known (e.g. `url`).
        field: Option<String>,
    },

    /// Network or HTTP failure from the URL-fetch collaborator.
    #[error("{message}")]
    Fetch {
        /// Description of the failure.
        message: String,
        /// The URL that was being fetched.
        url: Option<String>,
        /// HTTP status code, when a response was received.
        status: Option<u16>,
    },

    /// The SVG text could not be parsed into a document tree.
    #[error("{0}")]
    Parse(String),

    /// Archive assembly failure or any other uncategorised error.
    #[error("{0}")]
    Other(String),

    /// I/O operation failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl ExtractError {
    /// Creates a `Validation` error without a field.
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
            field: None,
        }
    }

    /// Creates a `Validation` error tied to a named input field.
    pub fn validation_field(message: impl Into<String>, field: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
            field: Some(field.into()),
        }
    }

    /// Creates a `Fetch` error with no URL or status attached.
    pub fn fetch(message: impl Into<String>) -> Self {
        Self::Fetch {
            message: message.into(),
            url: None,
            status: None,
        }
    }

    /// Creates an `Other` error.
    pub fn other(message: impl Into<String>) -> Self {
        Self::Other(message.into())
    }

    /// Returns `true` if retrying the operation could succeed.
    ///
    /// Only fetch failures are retryable, and CORS-flagged fetch failures
    /// are excluded: the remote server's policy will not change between
    /// attempts. Validation, parse, and packaging failures are
    /// deterministic for a given input.
    ///
    /// # Examples
    ///
    /// ```
    /// use svgrab_core::ExtractError;
    ///
    /// assert!(ExtractError::fetch("connection reset").is_retryable());
    /// assert!(!ExtractError::fetch("blocked by CORS policy").is_retryable());
    /// assert!(!ExtractError::validation("SVG content is empty").is_retryable());
    /// ```
    #[must_use]
    pub fn is_retryable(&self) -> bool {
        match self {
            Self::Fetch { message, .. } => !message.to_ascii_lowercase().contains("cors"),
            _ => false,
        }
    }

    /// Returns the input field this error relates to, if any.
    #[must_use]
    pub fn field(&self) -> Option<&str> {
        match self {
            Self::Validation { field, .. } => field.as_deref(),
            _ => None,
        }
    }

    /// Returns the HTTP status associated with a fetch failure, if any.
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Fetch { status, .. } => *status,
            _ => None,
        }
    }
}
