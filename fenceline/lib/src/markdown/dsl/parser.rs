//! Parser for line-highlight annotations.
//!
//! Parses language tags like:
//! - `rust`
//! - `js{2}`
//! - `ts{1,3-5,8}`

use super::{RangeSpec, ValidLineRange};
use crate::markdown::{HighlightError, HighlightResult};
use lazy_static::lazy_static;
use regex::Regex;

/// Widest range a single item may cover before it is treated as malformed.
pub const MAX_RANGE_SPAN: usize = 100_000;

lazy_static! {
    /// Splits a tag into the language and the optional brace annotation.
    /// The closing brace is optional so an unterminated annotation still
    /// yields its items; anything after the closing brace is ignored.
    static ref TAG_PATTERN: Regex = Regex::new(
        r"^(?P<language>[^{]*)(?:\{(?P<ranges>[^}]*)\}?)?"
    ).unwrap();
}

/// Parses a language tag into its language and highlighted lines.
///
/// Malformed items (non-numeric values, or ranges whose end precedes their
/// start) are skipped with a warning and the remaining items still apply.
/// Zero is never a member: `0-3` contributes lines 1 through 3.
///
/// ## Examples
///
/// ```
/// use fenceline_lib::markdown::dsl::parse_line_range;
///
/// let spec = parse_line_range(Some("js{1,3-5,8}"));
/// assert_eq!(spec.language, "js");
/// assert_eq!(
///     spec.highlighted_lines.into_iter().collect::<Vec<_>>(),
///     vec![1, 3, 4, 5, 8]
/// );
///
/// let spec = parse_line_range(None);
/// assert_eq!(spec.language, "");
/// assert!(spec.is_empty());
/// ```
pub fn parse_line_range(tag: Option<&str>) -> RangeSpec {
    let Some(tag) = tag.filter(|t| !t.is_empty()) else {
        return RangeSpec::default();
    };

    let Some(captures) = TAG_PATTERN.captures(tag) else {
        return RangeSpec::new(tag.trim());
    };

    let language = captures
        .name("language")
        .map(|m| m.as_str().trim())
        .unwrap_or_default();
    let mut spec = RangeSpec::new(language);

    let Some(ranges) = captures.name("ranges") else {
        return spec;
    };

    for item in ranges.as_str().split(',') {
        let item = item.trim();
        if item.is_empty() {
            continue;
        }

        match parse_range_item(item) {
            Ok(range) => spec.extend_with(range),
            Err(e) => {
                tracing::warn!(tag, item, error = %e, "Skipping malformed line range item");
            }
        }
    }

    spec
}

/// Parses one comma-separated item: a line number or an inclusive range.
fn parse_range_item(item: &str) -> HighlightResult<ValidLineRange> {
    let Some((start, end)) = item.split_once('-') else {
        let line = item.parse::<usize>().map_err(|_| {
            HighlightError::InvalidLineRange(format!("Invalid line number: {}", item))
        })?;
        return Ok(ValidLineRange::single(line));
    };

    let start = start.trim().parse::<usize>().map_err(|_| {
        HighlightError::InvalidLineRange(format!("Invalid start number: {}", start))
    })?;

    let end = end.trim().parse::<usize>().map_err(|_| {
        HighlightError::InvalidLineRange(format!("Invalid end number: {}", end))
    })?;

    let range = ValidLineRange::range(start, end)?;
    if range.span() > MAX_RANGE_SPAN {
        return Err(HighlightError::InvalidLineRange(format!(
            "{}-{} spans more than {} lines",
            start, end, MAX_RANGE_SPAN
        )));
    }

    Ok(range)
}
