//! Line-highlight annotations embedded in a code block's language tag.
//!
//! A tag may carry a brace-delimited list of 1-based line numbers and
//! inclusive ranges after the language name:
//!
//! ````markdown
//! ```ts{1,4-6}
//! const x = 1;
//! const y = 2;
//! const z = 3;
//! const result = x + y;
//! const total = result + z;
//! console.log(total);
//! ```
//! ````
//!
//! Lines 1, 4, 5 and 6 of the block above are emphasized.

mod parser;

pub use parser::{MAX_RANGE_SPAN, parse_line_range};

use std::collections::BTreeSet;

use crate::markdown::{HighlightError, HighlightResult};

/// Result of splitting a language tag into its language and highlighted lines.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RangeSpec {
    /// Language portion of the tag, trimmed. May be empty.
    pub language: String,
    /// Positive, 1-based line numbers to emphasize.
    pub highlighted_lines: BTreeSet<usize>,
}

impl RangeSpec {
    /// Creates a spec for a language with no highlighted lines.
    pub fn new(language: impl Into<String>) -> Self {
        Self {
            language: language.into(),
            highlighted_lines: BTreeSet::new(),
        }
    }

    /// Checks if a line number should be highlighted.
    pub fn contains(&self, line: usize) -> bool {
        self.highlighted_lines.contains(&line)
    }

    /// Checks if no lines are highlighted.
    pub fn is_empty(&self) -> bool {
        self.highlighted_lines.is_empty()
    }

    /// Adds every positive member of a validated range.
    pub(crate) fn extend_with(&mut self, range: ValidLineRange) {
        self.highlighted_lines
            .extend((range.start()..=range.end()).filter(|line| *line > 0));
    }
}

/// Validated line range with enforced invariants (start <= end).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValidLineRange {
    start: usize,
    end: usize,
}

impl ValidLineRange {
    /// Creates a single-line range.
    pub fn single(line: usize) -> Self {
        Self { start: line, end: line }
    }

    /// Creates a range from start to end (inclusive).
    ///
    /// ## Errors
    ///
    /// Returns an error if start > end.
    pub fn range(start: usize, end: usize) -> HighlightResult<Self> {
        if start > end {
            Err(HighlightError::InvalidLineRange(format!(
                "{}-{} (start must be <= end)",
                start, end
            )))
        } else {
            Ok(Self { start, end })
        }
    }

    /// Checks if a line number falls within this range.
    pub fn contains(&self, line: usize) -> bool {
        line >= self.start && line <= self.end
    }

    /// Returns the start of the range.
    pub fn start(&self) -> usize {
        self.start
    }

    /// Returns the end of the range.
    pub fn end(&self) -> usize {
        self.end
    }

    /// Number of lines covered, inclusive of both ends.
    pub fn span(&self) -> usize {
        (self.end - self.start).saturating_add(1)
    }
}
