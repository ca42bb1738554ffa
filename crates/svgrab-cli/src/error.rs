//! Error conversion utilities for CLI.
//!
//! Converts svgrab-core's typed errors into user-friendly contextual
//! errors (anyhow). The core's translator produces the readable message;
//! this layer adds actionable hints per error category.

use anyhow::anyhow;
use svgrab_core::ExtractError;

/// Converts an `ExtractError` to a user-friendly anyhow error.
pub fn convert_core_error(err: ExtractError, input: &str) -> anyhow::Error {
    let message = err.user_message();

    let hint = match &err {
        ExtractError::Validation { field, .. } => match field.as_deref() {
            Some("url") => Some("Pass an absolute http(s) URL together with --url."),
            Some("file") => Some("Provide a readable .svg file no larger than 10MB."),
            _ => None,
        },
        ExtractError::Fetch { .. } if !err.is_retryable() => {
            Some("CORS restrictions cannot be bypassed; download the file and extract it locally.")
        }
        ExtractError::Fetch { .. } => {
            Some("Use --retries and --timeout to adjust fetch behavior.")
        }
        ExtractError::Parse(_) => {
            Some("The file may be truncated or not XML; open it in a browser to confirm.")
        }
        _ => None,
    };

    let base = match hint {
        Some(hint) => anyhow!("{message}\nHINT: {hint}"),
        None => anyhow!("{message}"),
    };
    base.context(format!("Error processing '{input}'"))
}

/// Adds input context to a core result.
pub fn add_input_context<T>(
    result: Result<T, ExtractError>,
    input: &str,
) -> anyhow::Result<T> {
    result.map_err(|err| convert_core_error(err, input))
}
