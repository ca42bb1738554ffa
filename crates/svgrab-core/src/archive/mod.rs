//! ZIP packaging of extracted image records.
//!
//! The packager is entirely in-memory: records are filtered, decoded,
//! and written into a deflate-compressed ZIP held in a byte buffer. No
//! state persists beyond the call that produces the blob.

mod progress;

pub use progress::NoopProgress;
pub use progress::ProgressObserver;

use crate::error::ExtractError;
use crate::error::Result;
use crate::naming::filename_for;
use crate::types::ImageRecord;
use std::fmt::Display;
use std::io::Cursor;
use std::io::Write;
use zip::CompressionMethod;
use zip::ZipWriter;
use zip::write::SimpleFileOptions;

/// MIME type declared on the produced archive.
pub const ZIP_CONTENT_TYPE: &str = "application/zip";

/// Balanced deflate level used for every entry.
const COMPRESSION_LEVEL: i64 = 6;

/// The finished archive: an opaque binary blob plus its content type.
#[derive(Debug, Clone)]
pub struct ArchiveBlob {
    bytes: Vec<u8>,
}

impl ArchiveBlob {
    /// The raw ZIP bytes.
    #[must_use]
    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Consumes the blob, returning the ZIP bytes.
    #[must_use]
    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }

    /// Size of the archive in bytes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// Returns `true` when the blob holds no bytes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Declared content type of the blob.
    #[must_use]
    pub const fn content_type(&self) -> &'static str {
        ZIP_CONTENT_TYPE
    }
}

/// Packages `images` into a ZIP archive without progress reporting.
///
/// See [`generate_archive_with_progress`] for the full contract.
pub fn generate_archive(images: &[ImageRecord]) -> Result<ArchiveBlob> {
    generate_archive_with_progress(images, &mut NoopProgress)
}

/// Packages `images` into a ZIP archive, reporting progress.
///
/// Records without a payload are dropped with a logged warning; the
/// survivors are re-indexed in filtered order and written under their
/// policy filenames with balanced deflate compression. `progress`
/// receives integer percentages as entries are written; on success it is
/// called at least once and the final value is exactly 100.
///
/// # Errors
///
/// - `"No images provided for ZIP generation"` when `images` is empty.
/// - `"No valid images to include in ZIP"` when filtering leaves
///   nothing.
/// - `"ZIP generation failed"` for any internal assembly failure (the
///   original error is logged, not surfaced).
///
/// # Examples
///
/// ```
/// use svgrab_core::ImageRecord;
/// use svgrab_core::generate_archive;
///
/// let record = ImageRecord::from_data_url("data:image/png;base64,aGVsbG8=", 0)?;
/// let blob = generate_archive(&[record])?;
/// assert_eq!(blob.content_type(), "application/zip");
/// assert!(blob.len() > 0);
/// # Ok::<(), svgrab_core::ExtractError>(())
/// ```
pub fn generate_archive_with_progress(
    images: &[ImageRecord],
    progress: &mut dyn ProgressObserver,
) -> Result<ArchiveBlob> {
    if images.is_empty() {
        return Err(ExtractError::other("No images provided for ZIP generation"));
    }

    let valid: Vec<&ImageRecord> = images
        .iter()
        .filter(|image| {
            if image.payload().is_empty() {
                log::warn!("skipping image {}: data URL has no payload", image.id());
                false
            } else {
                true
            }
        })
        .collect();

    if valid.is_empty() {
        return Err(ExtractError::other("No valid images to include in ZIP"));
    }

    let mut zip = ZipWriter::new(Cursor::new(Vec::new()));
    let options = SimpleFileOptions::default()
        .compression_method(CompressionMethod::Deflated)
        .compression_level(Some(COMPRESSION_LEVEL));

    let total = valid.len();
    for (position, image) in valid.iter().enumerate() {
        let filename = filename_for(Some(image.format()), position);
        let bytes = image.decode().map_err(assembly_failure)?;

        zip.start_file(&filename, options)
            .map_err(assembly_failure)?;
        zip.write_all(&bytes).map_err(assembly_failure)?;

        progress.on_progress(percent_done(position + 1, total));
    }

    let cursor = zip.finish().map_err(assembly_failure)?;

    Ok(ArchiveBlob {
        bytes: cursor.into_inner(),
    })
}

/// Integer percentage of `done` out of `total`; exactly 100 at the end.
fn percent_done(done: usize, total: usize) -> u8 {
    u8::try_from(done * 100 / total).unwrap_or(100)
}

/// Logs the underlying failure and returns the generic assembly error.
fn assembly_failure(err: impl Display) -> ExtractError {
    log::error!("ZIP assembly failed: {err}");
    ExtractError::other("ZIP generation failed")
}
