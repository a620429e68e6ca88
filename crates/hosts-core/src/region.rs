//! Managed region location and rewriting.
//!
//! The region is the span from the first [`REGION_HEADER`] to the end of the
//! first [`REGION_FOOTER`]. Both literals carry their own leading and trailing
//! newline and are matched byte for byte. Content outside the region is never
//! modified.

use std::ops::Range;

use crate::error::{Error, RegionFault, Result};

/// Marker opening the managed region.
pub const REGION_HEADER: &str = "\n##### managed by hosts-manager : start #####\n";

/// Marker closing the managed region.
pub const REGION_FOOTER: &str = "\n##### managed by hosts-manager : end #####\n";

/// Where the managed region sits in a buffer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegionSpan {
    /// Byte range from the header start to the footer end. Empty and at the end
    /// of the buffer when the region does not exist yet.
    pub span: Range<usize>,
    /// Whether both markers were found.
    pub exists: bool,
}

/// Find the managed region in `buffer`.
///
/// # Errors
/// Returns [`Error::MalformedRegion`] when only one marker is present or the
/// first footer comes before the first header.
pub fn locate_region(buffer: &str) -> Result<RegionSpan> {
    let header = buffer.find(REGION_HEADER);
    let footer = buffer.find(REGION_FOOTER);

    match (header, footer) {
        (None, None) => Ok(RegionSpan {
            span: buffer.len()..buffer.len(),
            exists: false,
        }),
        (Some(_), None) => Err(Error::MalformedRegion(RegionFault::MissingFooter)),
        (None, Some(_)) => Err(Error::MalformedRegion(RegionFault::MissingHeader)),
        (Some(start), Some(end)) if end < start => {
            Err(Error::MalformedRegion(RegionFault::FooterBeforeHeader))
        }
        (Some(start), Some(end)) => Ok(RegionSpan {
            span: start..end + REGION_FOOTER.len(),
            exists: true,
        }),
    }
}

/// Replace the managed region of `original` with the given group bodies.
///
/// The region is appended when `original` has none. Each body is written
/// verbatim between a leading and a trailing `\n`, in the order given.
///
/// # Example
/// ```
/// use hosts_core::region::merge_region;
///
/// let merged = merge_region("127.0.0.1 localhost\n", ["192.0.2.1 a.example"]).unwrap();
/// assert!(merged.starts_with("127.0.0.1 localhost\n"));
/// assert!(merged.contains("\n192.0.2.1 a.example\n"));
///
/// // Running it again on its own output changes nothing
/// assert_eq!(merge_region(&merged, ["192.0.2.1 a.example"]).unwrap(), merged);
/// ```
pub fn merge_region<'a, I>(original: &str, bodies: I) -> Result<String>
where
    I: IntoIterator<Item = &'a str>,
{
    let region = locate_region(original)?;
    tracing::debug!(
        start = region.span.start,
        end = region.span.end,
        exists = region.exists,
        "Located managed region"
    );

    let mut merged =
        String::with_capacity(original.len() + REGION_HEADER.len() + REGION_FOOTER.len());
    merged.push_str(&original[..region.span.start]);
    merged.push_str(REGION_HEADER);
    for body in bodies {
        merged.push('\n');
        merged.push_str(body);
        merged.push('\n');
    }
    merged.push_str(REGION_FOOTER);
    merged.push_str(&original[region.span.end..]);

    Ok(merged)
}
