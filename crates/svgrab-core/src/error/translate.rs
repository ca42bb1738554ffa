//! Translation of typed errors into user-facing text.
//!
//! Every surfaced failure passes through [`user_message`] before being
//! shown, so even unexpected low-level errors produce a readable message.

use super::types::ExtractError;

/// Guidance shown when the remote server rejects cross-origin requests.
pub const CORS_GUIDANCE: &str =
    "The server hosting this SVG does not allow cross-origin requests (CORS). \
     Download the file and extract it locally instead.";

/// Guidance shown when a fetch exceeds its time budget.
pub const TIMEOUT_GUIDANCE: &str =
    "The request timed out. Check your connection or increase the timeout and try again.";

/// Guidance shown for structural SVG parse failures.
pub const PARSE_GUIDANCE: &str =
    "Failed to parse SVG content. Please verify the file is a valid SVG.";

/// Generic guidance for network-level failures.
pub const NETWORK_GUIDANCE: &str =
    "Network error: could not fetch the SVG. Check the URL and your connection.";

/// Fallback for errors with no usable message.
pub const UNEXPECTED_GUIDANCE: &str = "An unexpected error occurred. Please try again.";

/// Converts an error into the text shown to the user.
///
/// The full error is logged before translation; the returned string never
/// exposes internal detail beyond what each branch chooses to surface.
///
/// # Examples
///
/// ```
/// use svgrab_core::ExtractError;
/// use svgrab_core::error::user_message;
///
/// let msg = user_message(&ExtractError::fetch("CORS policy blocked"));
/// assert!(msg.contains("CORS"));
///
/// let msg = user_message(&ExtractError::Parse("unexpected EOF".into()));
/// assert!(msg.contains("parse SVG"));
/// ```
#[must_use]
pub fn user_message(err: &ExtractError) -> String {
    log::error!("surfacing error: {err:?}");

    match err {
        ExtractError::Validation { message, .. } => message.clone(),

        ExtractError::Fetch { message, .. } => {
            let lowered = message.to_ascii_lowercase();
            if lowered.contains("cors") {
                CORS_GUIDANCE.to_string()
            } else if lowered.contains("timeout") || lowered.contains("timed out") {
                TIMEOUT_GUIDANCE.to_string()
            } else if message.is_empty() {
                NETWORK_GUIDANCE.to_string()
            } else {
                message.clone()
            }
        }

        ExtractError::Parse(_) => PARSE_GUIDANCE.to_string(),

        ExtractError::Other(_) | ExtractError::Io(_) => {
            let message = err.to_string();
            if message.to_ascii_lowercase().contains("fetch") {
                NETWORK_GUIDANCE.to_string()
            } else if message.is_empty() {
                UNEXPECTED_GUIDANCE.to_string()
            } else {
                message
            }
        }
    }
}

impl ExtractError {
    /// Convenience method form of [`user_message`].
    #[must_use]
    pub fn user_message(&self) -> String {
        user_message(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_message_is_verbatim() {
        let err = ExtractError::validation("File size exceeds 10MB limit");
        assert_eq!(user_message(&err), "File size exceeds 10MB limit");
    }

    #[test]
    fn test_cors_fetch_error() {
        let err = ExtractError::fetch("CORS policy blocked");
        assert!(user_message(&err).contains("CORS"));

        let err = ExtractError::fetch("request blocked by cors preflight");
        assert!(user_message(&err).contains("CORS"));
    }

    #[test]
    fn test_timeout_fetch_error() {
        let err = ExtractError::fetch("Request timeout");
        assert!(user_message(&err).contains("timed out"));

        let err = ExtractError::fetch("connection Timeout after 30s");
        assert!(user_message(&err).contains("timed out"));
    }

    #[test]
    fn test_other_fetch_errors_keep_their_message() {
        let err = ExtractError::fetch("Request failed with HTTP status 500");
        assert_eq!(user_message(&err), "Request failed with HTTP status 500");
    }

    #[test]
    fn test_empty_fetch_message_falls_back() {
        let err = ExtractError::fetch("");
        assert_eq!(user_message(&err), NETWORK_GUIDANCE);
    }

    #[test]
    fn test_parse_error_ignores_inner_message() {
        let err = ExtractError::Parse("x".into());
        let msg = user_message(&err);
        assert!(msg.contains("parse SVG"));
        assert!(!msg.contains('x'));
    }

    #[test]
    fn test_generic_error_mentioning_fetch() {
        // The shape a JS "TypeError: Failed to fetch" would arrive in.
        let err = ExtractError::other("TypeError: Failed to fetch");
        assert_eq!(user_message(&err), NETWORK_GUIDANCE);
    }

    #[test]
    fn test_messageless_error_falls_back() {
        let err = ExtractError::other("");
        assert!(user_message(&err).contains("unexpected error"));
    }

    #[test]
    fn test_other_error_keeps_message() {
        let err = ExtractError::other("ZIP generation failed");
        assert_eq!(user_message(&err), "ZIP generation failed");
    }
}
