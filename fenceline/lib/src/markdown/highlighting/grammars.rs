//! Grammar loading utilities for syntax highlighting.
//!
//! Provides the syntax set from two-face, which bundles syntect's default
//! grammars plus the extended set curated by the bat project.

use lazy_static::lazy_static;
use syntect::parsing::SyntaxSet;
use two_face::syntax::extra_newlines as extra_syntax_set;

lazy_static! {
    /// Lazily loaded syntax set from two-face with extended grammars.
    ///
    /// The newline variant is required because the tokenizer feeds lines
    /// with their terminators to the parser.
    static ref SYNTAX_SET: SyntaxSet = extra_syntax_set();
}

/// Returns the shared syntax set with extended grammars.
///
/// The set is loaded on first use and shared by every highlighter, so
/// highlighters are cheap to construct and safe to use from many threads.
///
/// ## Examples
///
/// ```
/// # use fenceline_lib::markdown::highlighting::CodeHighlighter;
/// # let highlighter = CodeHighlighter::default();
/// let syntax_set = highlighter.syntax_set();
/// let rust_syntax = syntax_set.find_syntax_by_extension("rs");
/// assert!(rust_syntax.is_some());
/// ```
pub(super) fn load_syntax_set() -> &'static SyntaxSet {
    &SYNTAX_SET
}
