//! Extract command implementation.

use super::load_svg;
use crate::cli::ExtractArgs;
use crate::error::add_input_context;
use crate::output::ExtractSummary;
use crate::output::OutputFormatter;
use crate::progress::CliProgress;
use anyhow::Context;
use anyhow::Result;
use anyhow::bail;
use std::fs;
use std::path::Path;
use std::path::PathBuf;
use svgrab_core::NoopProgress;
use svgrab_core::extract_images;
use svgrab_core::filename_for;
use svgrab_core::generate_archive_with_progress;

pub fn execute(args: &ExtractArgs, formatter: &dyn OutputFormatter, quiet: bool) -> Result<()> {
    let svg = load_svg(&args.input, args.url, args.timeout, args.retries)?;
    let images = add_input_context(extract_images(&svg), &args.input)?;

    if let Some(index) = args.only {
        return write_single(args, formatter, &images, index);
    }

    let output = args
        .output
        .clone()
        .unwrap_or_else(|| default_output_path(&args.input));
    check_overwrite(&output, args.force)?;

    // Progress bar only for interactive runs.
    let blob = if CliProgress::should_show() && !quiet {
        let mut progress = CliProgress::new("Packaging");
        add_input_context(generate_archive_with_progress(&images, &mut progress), &args.input)?
    } else {
        let mut noop = NoopProgress;
        add_input_context(generate_archive_with_progress(&images, &mut noop), &args.input)?
    };

    fs::write(&output, blob.bytes())
        .with_context(|| format!("failed to write '{}'", output.display()))?;

    // The packager drops payloadless records; count what actually landed.
    let packed = images.iter().filter(|i| !i.payload().is_empty()).count();

    formatter.format_extract_result(&ExtractSummary {
        input: args.input.clone(),
        output,
        images_written: packed,
        bytes_written: blob.len() as u64,
        archive: true,
    })?;

    Ok(())
}

fn write_single(
    args: &ExtractArgs,
    formatter: &dyn OutputFormatter,
    images: &[svgrab_core::ImageRecord],
    index: usize,
) -> Result<()> {
    let Some(image) = images.get(index) else {
        bail!(
            "no embedded image at index {index} ({} found in '{}')",
            images.len(),
            args.input
        );
    };

    let output = args
        .output
        .clone()
        .unwrap_or_else(|| PathBuf::from(filename_for(Some(image.format()), index)));
    check_overwrite(&output, args.force)?;

    let bytes = add_input_context(image.decode(), &args.input)?;
    fs::write(&output, &bytes)
        .with_context(|| format!("failed to write '{}'", output.display()))?;

    formatter.format_extract_result(&ExtractSummary {
        input: args.input.clone(),
        output,
        images_written: 1,
        bytes_written: bytes.len() as u64,
        archive: false,
    })?;

    Ok(())
}

/// Default archive name: `<input stem>-images.zip` in the current directory.
fn default_output_path(input: &str) -> PathBuf {
    let stem = Path::new(input)
        .file_stem()
        .map_or_else(|| "svg".to_string(), |s| s.to_string_lossy().into_owned());
    PathBuf::from(format!("{stem}-images.zip"))
}

fn check_overwrite(output: &Path, force: bool) -> Result<()> {
    if output.exists() && !force {
        bail!(
            "output file '{}' already exists (use --force to overwrite)",
            output.display()
        );
    }
    Ok(())
}
