//! Locating embedded raster images in SVG markup.
//!
//! Extraction is a single pass: validate the text, parse it into a
//! document tree, walk every `image` element in document order, and
//! build an [`ImageRecord`] for each embedded (data-URL) reference.
//! External references are ignored entirely; they are not an error.

use crate::error::ExtractError;
use crate::error::Result;
use crate::types::DATA_IMAGE_PREFIX;
use crate::types::ImageRecord;
use crate::validation::validate_svg_content;
use roxmltree::Document;
use roxmltree::Node;

/// Message surfaced when the markup cannot be parsed into a tree.
pub const PARSE_FAILURE_MESSAGE: &str =
    "Failed to parse SVG content. The SVG may be malformed.";

const XLINK_NS: &str = "http://www.w3.org/1999/xlink";

/// Reads the image-reference attribute of an `image` element.
///
/// Candidates are probed in order, first present wins: the SVG 2 `href`
/// attribute, then the legacy `xlink:href` (resolved by expanded name,
/// since roxmltree matches namespaced attributes by URI, not prefix).
fn image_href<'a>(node: &Node<'a, '_>) -> Option<&'a str> {
    node.attribute("href")
        .or_else(|| node.attribute((XLINK_NS, "href")))
}

/// Extracts every embedded image from `svg_text`, in document order.
///
/// Elements without a reference attribute, or whose reference is not a
/// `data:image/` URL, are skipped silently and consume no index. A
/// per-element construction failure (malformed data URL) is logged as a
/// warning and skipped; it never aborts the extraction. `index` values
/// on the returned records are contiguous from 0.
///
/// # Errors
///
/// Returns the content-validation error for empty or non-SVG text, or a
/// parse error when the markup is not well-formed XML.
///
/// # Examples
///
/// ```
/// use svgrab_core::extract_images;
///
/// let svg = r#"<svg xmlns="http://www.w3.org/2000/svg">
///     <image href="data:image/png;base64,aGVsbG8="/>
///     <image href="https://example.com/external.png"/>
/// </svg>"#;
///
/// let images = extract_images(svg)?;
/// assert_eq!(images.len(), 1);
/// assert_eq!(images[0].format(), "image/png");
/// # Ok::<(), svgrab_core::ExtractError>(())
/// ```
pub fn extract_images(svg_text: &str) -> Result<Vec<ImageRecord>> {
    validate_svg_content(svg_text)?;

    let doc = Document::parse(svg_text).map_err(|err| {
        log::error!("SVG parse failed: {err}");
        ExtractError::Parse(PARSE_FAILURE_MESSAGE.to_string())
    })?;

    let mut records = Vec::new();
    for node in doc
        .descendants()
        .filter(|node| node.is_element() && node.tag_name().name() == "image")
    {
        let Some(href) = image_href(&node) else {
            continue;
        };
        if !href.starts_with(DATA_IMAGE_PREFIX) {
            log::debug!("ignoring external image reference");
            continue;
        }
        match ImageRecord::from_data_url(href, records.len()) {
            Ok(record) => records.push(record),
            Err(err) => log::warn!("skipping embedded image: {err}"),
        }
    }

    Ok(records)
}

/// Counts the embedded images in `svg_text`.
///
/// Equivalent to `extract_images(svg_text).len()`, except every failure
/// (validation or parse) is swallowed and yields 0.
///
/// # Examples
///
/// ```
/// use svgrab_core::count_images;
///
/// assert_eq!(count_images("not svg at all"), 0);
/// ```
#[must_use]
pub fn count_images(svg_text: &str) -> usize {
    extract_images(svg_text).map_or(0, |records| records.len())
}
