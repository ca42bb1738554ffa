//! Command implementations.

pub mod completion;
pub mod extract;
pub mod list;

use crate::error::add_input_context;
use anyhow::Result;
use std::path::Path;
use std::time::Duration;
use svgrab_core::FetchOptions;

/// Loads SVG text from a local file or, with `from_url`, from a URL.
pub fn load_svg(input: &str, from_url: bool, timeout_secs: u64, retries: u32) -> Result<String> {
    if from_url {
        let options = FetchOptions::default()
            .with_timeout(Duration::from_secs(timeout_secs))
            .with_retries(retries);
        add_input_context(svgrab_core::fetch_svg(input, &options), input)
    } else {
        add_input_context(svgrab_core::read_svg_file(Path::new(input)), input)
    }
}
