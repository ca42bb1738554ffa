//! The embedded-image record produced by extraction.

use crate::error::ExtractError;
use crate::error::Result;
use base64::Engine;
use base64::engine::general_purpose::STANDARD;

/// Prefix every embedded raster image reference must carry.
pub const DATA_IMAGE_PREFIX: &str = "data:image/";

/// One embedded image found in an SVG document.
///
/// Records are immutable after construction and live only for the
/// duration of one extraction-to-packaging flow; they hold no external
/// resources.
///
/// # Examples
///
/// ```
/// use svgrab_core::ImageRecord;
///
/// let record = ImageRecord::from_data_url("data:image/png;base64,aGVsbG8=", 0)?;
/// assert_eq!(record.format(), "image/png");
/// assert_eq!(record.index(), 0);
/// # Ok::<(), svgrab_core::ExtractError>(())
/// ```
#[derive(Debug, Clone)]
pub struct ImageRecord {
    data_url: String,
    format: String,
    index: usize,
    size: u64,
    id: String,
}

impl ImageRecord {
    /// Builds a record from a `data:image/...;base64,<payload>` URL.
    ///
    /// `format` is derived solely from the substring between `data:` and
    /// the first `;`. `size` is the estimated decoded byte length,
    /// `floor(payload_len * 3 / 4)`. Base64 padding is deliberately not
    /// corrected for, so the estimate is slightly loose.
    ///
    /// # Errors
    ///
    /// Returns a validation error when the value does not start with
    /// `data:image/` or is missing the `;` / `,` separators. An empty
    /// payload is allowed here; the archive packager filters those out.
    pub fn from_data_url(data_url: &str, index: usize) -> Result<Self> {
        if !data_url.starts_with(DATA_IMAGE_PREFIX) {
            return Err(ExtractError::validation_field(
                "image reference is not an embedded data URL",
                "href",
            ));
        }

        let mime_and_rest = &data_url["data:".len()..];
        let Some(semicolon) = mime_and_rest.find(';') else {
            return Err(ExtractError::validation_field(
                "malformed data URL: missing ';' after the MIME type",
                "href",
            ));
        };
        let format = mime_and_rest[..semicolon].to_string();

        let Some((_, payload)) = data_url.split_once(',') else {
            return Err(ExtractError::validation_field(
                "malformed data URL: missing ',' payload separator",
                "href",
            ));
        };
        let size = payload.len() as u64 * 3 / 4;

        Ok(Self {
            data_url: data_url.to_string(),
            format,
            index,
            size,
            id: uuid::Uuid::new_v4().to_string(),
        })
    }

    /// The full `data:` URL this record was built from.
    #[must_use]
    pub fn data_url(&self) -> &str {
        &self.data_url
    }

    /// MIME type of the embedded image (e.g. `image/png`).
    #[must_use]
    pub fn format(&self) -> &str {
        &self.format
    }

    /// Zero-based position among the embedded images of the document.
    #[must_use]
    pub const fn index(&self) -> usize {
        self.index
    }

    /// Estimated decoded byte length.
    #[must_use]
    pub const fn size(&self) -> u64 {
        self.size
    }

    /// Identifier unique within one extraction's output list.
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// The base64 payload after the first `,`, possibly empty.
    #[must_use]
    pub fn payload(&self) -> &str {
        self.data_url
            .split_once(',')
            .map_or("", |(_, payload)| payload)
    }

    /// Decodes the base64 payload into raw image bytes.
    pub fn decode(&self) -> Result<Vec<u8>> {
        STANDARD
            .decode(self.payload())
            .map_err(|err| ExtractError::other(format!("failed to decode base64 payload: {err}")))
    }
}
