//! Input validation run before any parsing or packaging.
//!
//! These checks are deliberately shallow: they reject obviously wrong
//! input with a stable user-facing message and leave structural checks
//! to the parser.

use crate::error::ExtractError;
use crate::error::Result;
use url::Url;

/// Maximum accepted SVG file size in bytes (10 MB).
pub const MAX_FILE_SIZE: u64 = 10 * 1024 * 1024;

/// Content types accepted for an uploaded SVG file.
pub const SVG_CONTENT_TYPES: [&str; 3] = ["image/svg+xml", "text/xml", "application/xml"];

/// Metadata of a file-like input handle.
///
/// The core never opens files itself for validation; the caller supplies
/// whatever name/size/type information its file source exposes.
#[derive(Debug, Clone)]
pub struct FileMeta {
    /// File name, used for the `.svg` extension override.
    pub name: String,
    /// Size in bytes.
    pub size: u64,
    /// Declared content type, when the source provides one.
    pub content_type: Option<String>,
}

/// Returns `true` iff `url` parses as an absolute `http` or `https` URL.
///
/// Never panics; any parse failure or other scheme yields `false`.
///
/// # Examples
///
/// ```
/// use svgrab_core::validate_url;
///
/// assert!(validate_url("https://example.com/icon.svg"));
/// assert!(!validate_url("ftp://example.com/icon.svg"));
/// assert!(!validate_url("not a url"));
/// ```
#[must_use]
pub fn validate_url(url: &str) -> bool {
    Url::parse(url).is_ok_and(|parsed| matches!(parsed.scheme(), "http" | "https"))
}

/// Checks that `text` plausibly contains an SVG document.
///
/// This is a syntactic heuristic (presence of the literal `<svg`), not a
/// schema check; the parser decides whether the markup is well-formed.
///
/// # Errors
///
/// Returns a validation error for empty or non-SVG-looking content.
pub fn validate_svg_content(text: &str) -> Result<()> {
    if text.trim().is_empty() {
        return Err(ExtractError::validation("SVG content is empty"));
    }
    if !text.contains("<svg") {
        return Err(ExtractError::validation(
            "Content does not appear to be valid SVG",
        ));
    }
    Ok(())
}

/// Checks a file handle's metadata against the upload rules.
///
/// A name ending in `.svg` overrides a wrong or missing content type.
///
/// # Errors
///
/// Returns a validation error when the handle is absent, the file
/// exceeds [`MAX_FILE_SIZE`], or neither content type nor extension
/// identify it as SVG.
pub fn validate_file(meta: Option<&FileMeta>) -> Result<()> {
    let Some(meta) = meta else {
        return Err(ExtractError::validation_field("No file provided", "file"));
    };

    if meta.size > MAX_FILE_SIZE {
        return Err(ExtractError::validation_field(
            "File size exceeds 10MB limit",
            "file",
        ));
    }

    let type_ok = meta
        .content_type
        .as_deref()
        .is_some_and(|content_type| SVG_CONTENT_TYPES.contains(&content_type));
    let extension_ok = meta.name.to_ascii_lowercase().ends_with(".svg");

    if !type_ok && !extension_ok {
        return Err(ExtractError::validation_field(
            "File must be an SVG file",
            "file",
        ));
    }

    Ok(())
}
