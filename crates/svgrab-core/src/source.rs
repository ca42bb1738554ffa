//! Reading SVG text from a local file.

use crate::error::Result;
use crate::validation::FileMeta;
use crate::validation::validate_file;
use std::fs;
use std::path::Path;

/// Builds validation metadata for `path`, if it points at a file.
///
/// The content type is guessed from the file name, mirroring what a
/// browser file input would declare.
#[must_use]
pub fn file_meta(path: &Path) -> Option<FileMeta> {
    let metadata = fs::metadata(path).ok()?;
    if !metadata.is_file() {
        return None;
    }
    Some(FileMeta {
        name: path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default(),
        size: metadata.len(),
        content_type: mime_guess::from_path(path)
            .first_raw()
            .map(str::to_string),
    })
}

/// Reads SVG text from a local file after validating its metadata.
///
/// # Errors
///
/// Returns the file-validation error (absent, oversized, or non-SVG
/// file), or an I/O error if the read itself fails.
///
/// # Examples
///
/// ```no_run
/// use std::path::Path;
/// use svgrab_core::read_svg_file;
///
/// let svg = read_svg_file(Path::new("drawing.svg"))?;
/// assert!(svg.contains("<svg"));
/// # Ok::<(), svgrab_core::ExtractError>(())
/// ```
pub fn read_svg_file(path: &Path) -> Result<String> {
    let meta = file_meta(path);
    validate_file(meta.as_ref())?;
    Ok(fs::read_to_string(path)?)
}
