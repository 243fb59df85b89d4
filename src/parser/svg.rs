//! SVG text scanning.
//!
//! The input is treated as text, not XML: every `<path ...>` element's
//! `d="..."` payload is extracted by string scanning in document order and
//! handed to the path parser. Anything that is not a path element is
//! ignored.

use crate::error::{PinwheelError, Result};
use crate::types::Polygon;

use super::path::parse_path_data;

/// Extract every path payload from an SVG document, in document order.
pub fn extract_path_data(svg: &str) -> Vec<&str> {
    let mut payloads = Vec::new();
    let mut rest = svg;

    while let Some(open) = rest.find("<path") {
        let tag = &rest[open..];
        let Some(end) = tag.find('>') else { break };
        if let Some(d) = attribute_value(&tag[..end], "d") {
            payloads.push(d);
        }
        rest = &tag[end + 1..];
    }

    payloads
}

/// Parse an SVG document into polygons ready for transformation.
///
/// Zero drawable polygons is fatal: downstream rendering needs at least one
/// shape, so an input whose paths are all missing, unsupported, or
/// degenerate is a hard error rather than an empty animation.
pub fn parse_svg(svg: &str, curve_steps: u32) -> Result<Vec<Polygon>> {
    let mut polygons = Vec::new();
    for payload in extract_path_data(svg) {
        polygons.extend(parse_path_data(payload, curve_steps)?);
    }

    if polygons.is_empty() {
        return Err(PinwheelError::Parse {
            message: "No drawable polygons in SVG input".to_string(),
            help: Some(
                "Paths need absolute M/L/C/Z data with at least three points per shape"
                    .to_string(),
            ),
        });
    }

    Ok(polygons)
}

/// Find a double-quoted attribute value inside one tag.
///
/// The attribute name must sit on a word boundary so `d=` never matches the
/// tail of `id=`.
fn attribute_value<'a>(tag: &'a str, name: &str) -> Option<&'a str> {
    let needle = format!("{}=\"", name);
    for (idx, _) in tag.match_indices(&needle) {
        let preceded = tag[..idx]
            .chars()
            .last()
            .is_some_and(|c| c.is_whitespace());
        if preceded {
            let start = idx + needle.len();
            let rest = &tag[start..];
            let end = rest.find('"')?;
            return Some(&rest[..end]);
        }
    }
    None
}
