//! Extract base64-embedded raster images from SVG markup and package
//! them as ZIP archives.
//!
//! `svgrab-core` provides the full pipeline: input validation, a
//! single-pass scan of the SVG document tree for embedded (data-URL)
//! images, deterministic output naming, and in-memory ZIP assembly with
//! progress reporting. SVG text can come from a local file, a URL
//! (with timeout and retry), or any string the caller already holds.
//!
//! # Examples
//!
//! ```no_run
//! use svgrab_core::extract_images;
//! use svgrab_core::generate_archive;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let svg = std::fs::read_to_string("drawing.svg")?;
//! let images = extract_images(&svg)?;
//! let blob = generate_archive(&images)?;
//! std::fs::write("images.zip", blob.bytes())?;
//! # Ok(())
//! # }
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]

pub mod archive;
pub mod error;
pub mod extraction;
pub mod fetch;
pub mod naming;
pub mod source;
pub mod types;
pub mod validation;

// Re-export main API types
pub use archive::ArchiveBlob;
pub use archive::NoopProgress;
pub use archive::ProgressObserver;
pub use archive::ZIP_CONTENT_TYPE;
pub use archive::generate_archive;
pub use archive::generate_archive_with_progress;
pub use error::ExtractError;
pub use error::Result;
pub use error::user_message;
pub use extraction::count_images;
pub use extraction::extract_images;
pub use fetch::FetchOptions;
pub use fetch::fetch_svg;
pub use naming::filename_for;
pub use source::read_svg_file;
pub use types::ImageRecord;
pub use validation::FileMeta;
pub use validation::validate_file;
pub use validation::validate_svg_content;
pub use validation::validate_url;
