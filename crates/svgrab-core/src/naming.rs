//! Deterministic output filenames for packaged images.

/// Extension used when a record has no usable MIME subtype.
pub const DEFAULT_EXTENSION: &str = "png";

/// Maps an image's MIME type and position to its archive filename.
///
/// Pure and deterministic: `image-{position + 1}.{extension}`, where the
/// extension is the subtype half of the MIME type (`image/jpeg` →
/// `jpeg`). The user-visible name is 1-based even though positions are
/// 0-based internally. No collision resolution is performed; under
/// contiguous positions collisions cannot occur, and a reused position
/// simply wins last inside the archive.
///
/// # Examples
///
/// ```
/// use svgrab_core::filename_for;
///
/// assert_eq!(filename_for(Some("image/png"), 0), "image-1.png");
/// assert_eq!(filename_for(Some("image/jpeg"), 5), "image-6.jpeg");
/// assert_eq!(filename_for(None, 0), "image-1.png");
/// ```
#[must_use]
pub fn filename_for(format: Option<&str>, position: usize) -> String {
    let extension = format
        .and_then(|mime| mime.split('/').nth(1))
        .filter(|subtype| !subtype.is_empty())
        .unwrap_or(DEFAULT_EXTENSION);
    format!("image-{}.{extension}", position + 1)
}
