//! List command implementation.

use super::load_svg;
use crate::cli::ListArgs;
use crate::error::add_input_context;
use crate::output::ImageEntry;
use crate::output::OutputFormatter;
use anyhow::Result;
use svgrab_core::extract_images;
use svgrab_core::filename_for;

pub fn execute(args: &ListArgs, formatter: &dyn OutputFormatter) -> Result<()> {
    let svg = load_svg(&args.input, args.url, args.timeout, args.retries)?;
    let images = add_input_context(extract_images(&svg), &args.input)?;

    let entries: Vec<ImageEntry> = images
        .iter()
        .enumerate()
        .map(|(position, image)| ImageEntry {
            index: image.index(),
            format: image.format().to_string(),
            size: image.size(),
            filename: filename_for(Some(image.format()), position),
            id: image.id().to_string(),
        })
        .collect();

    formatter.format_list_result(&entries, args.human_readable)?;

    Ok(())
}
