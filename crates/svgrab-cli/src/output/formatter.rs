//! Output formatter trait for CLI results.

use anyhow::Result;
use serde::Serialize;
use std::path::PathBuf;

/// What an extract run produced.
#[derive(Debug, Serialize)]
pub struct ExtractSummary {
    /// The input file path or URL.
    pub input: String,
    /// Where the output was written.
    pub output: PathBuf,
    /// Number of images packed (or 1 for a single-image write).
    pub images_written: usize,
    /// Size of the written output in bytes.
    pub bytes_written: u64,
    /// Whether the output is a ZIP archive or a single decoded image.
    pub archive: bool,
}

/// One embedded image, as shown by `list`.
#[derive(Debug, Serialize)]
pub struct ImageEntry {
    /// Zero-based position in document order.
    pub index: usize,
    /// MIME type from the data URL.
    pub format: String,
    /// Estimated decoded size in bytes.
    pub size: u64,
    /// Filename the image would get inside an archive.
    pub filename: String,
    /// Record identifier (shown in verbose/long output).
    pub id: String,
}

/// Common output formatter trait
pub trait OutputFormatter {
    /// Format extraction result
    fn format_extract_result(&self, summary: &ExtractSummary) -> Result<()>;

    /// Format the image listing
    fn format_list_result(&self, entries: &[ImageEntry], human_readable: bool) -> Result<()>;

    /// Format warning message
    fn format_warning(&self, message: &str);
}

/// Generic JSON output structure
#[derive(Debug, Serialize)]
pub struct JsonOutput<T> {
    pub operation: String,
    pub status: Status,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Success,
    #[allow(dead_code)]
    Error,
}

impl<T: Serialize> JsonOutput<T> {
    pub fn success(operation: impl Into<String>, data: T) -> Self {
        Self {
            operation: operation.into(),
            status: Status::Success,
            data: Some(data),
            error: None,
        }
    }
}
