//! Tokenizer seam and the syntect-backed code highlighter.
//!
//! Renderers never talk to syntect directly; they go through the
//! [`Tokenizer`] trait so any engine that can turn `(language, source)` into
//! token markup can be plugged in.

mod grammars;

use syntect::html::{ClassStyle, line_tokens_to_classed_spans};
use syntect::parsing::{ParseState, Scope, ScopeStack, SyntaxSet};
use syntect::util::LinesWithEndings;

use crate::markdown::{HighlightError, HighlightResult, PLAIN_TEXT};

/// Converts source text in a named language into token markup.
///
/// Implementations must produce *line-balanced* markup: every `\n` in the
/// output sits outside any open element, so callers can split the result on
/// line terminators and wrap each line independently.
///
/// A language the implementation cannot handle must be reported as
/// [`HighlightError::UnsupportedLanguage`]; callers fall back to plain text in
/// that case. Any other error aborts the document being rendered.
///
/// Closures with the matching signature implement the trait:
///
/// ```
/// use fenceline_lib::markdown::highlighting::Tokenizer;
/// use fenceline_lib::markdown::HighlightResult;
///
/// let shout = |_lang: &str, source: &str| -> HighlightResult<String> {
///     Ok(source.to_uppercase())
/// };
/// assert_eq!(shout.tokenize("any", "abc").unwrap(), "ABC");
/// ```
pub trait Tokenizer: Send + Sync {
    /// Returns token markup for `source` highlighted as `language`.
    fn tokenize(&self, language: &str, source: &str) -> HighlightResult<String>;
}

impl<F> Tokenizer for F
where
    F: Fn(&str, &str) -> HighlightResult<String> + Send + Sync,
{
    fn tokenize(&self, language: &str, source: &str) -> HighlightResult<String> {
        self(language, source)
    }
}

/// Syntect tokenizer emitting class-based token spans.
///
/// Each token is wrapped in `<span class="...">` where the classes are the
/// atoms of its scope (`source rust`, `keyword operator`, ...). Spans that
/// are open at the end of a line are closed before the line terminator and
/// reopened on the next line, which keeps the output line-balanced.
///
/// ## Examples
///
/// ```
/// use fenceline_lib::markdown::highlighting::{CodeHighlighter, Tokenizer};
///
/// let highlighter = CodeHighlighter::new();
/// let html = highlighter.tokenize("rust", "fn main() {}\n").unwrap();
/// assert!(html.contains("<span class=\"source rust\">"));
/// assert!(html.ends_with("\n"));
/// ```
#[derive(Debug, Clone, Copy)]
pub struct CodeHighlighter {
    syntax_set: &'static SyntaxSet,
}

impl CodeHighlighter {
    /// Creates a highlighter over the shared extended syntax set.
    pub fn new() -> Self {
        Self {
            syntax_set: grammars::load_syntax_set(),
        }
    }

    /// Returns a reference to the syntax set.
    pub fn syntax_set(&self) -> &SyntaxSet {
        self.syntax_set
    }

    /// Checks if a grammar exists for the language.
    pub fn supports(&self, language: &str) -> bool {
        language != PLAIN_TEXT && self.syntax_set.find_syntax_by_token(language).is_some()
    }
}

impl Default for CodeHighlighter {
    fn default() -> Self {
        Self::new()
    }
}

impl Tokenizer for CodeHighlighter {
    fn tokenize(&self, language: &str, source: &str) -> HighlightResult<String> {
        let syntax = match language {
            PLAIN_TEXT => None,
            _ => self.syntax_set.find_syntax_by_token(language),
        }
        .ok_or_else(|| HighlightError::UnsupportedLanguage(language.to_string()))?;

        let mut parse_state = ParseState::new(syntax);
        let mut stack = ScopeStack::new();
        let mut output = String::with_capacity(source.len() * 2);

        for line in LinesWithEndings::from(source) {
            let ops = parse_state
                .parse_line(line, self.syntax_set)
                .map_err(|e| HighlightError::Tokenize(format!("{}: {}", language, e)))?;

            let (content, terminator) = split_terminator(line);
            let ops: Vec<_> = ops
                .into_iter()
                .map(|(index, op)| (index.min(content.len()), op))
                .collect();

            for scope in stack.as_slice() {
                push_open_span(&mut output, *scope);
            }

            let (spans, _) =
                line_tokens_to_classed_spans(content, &ops, ClassStyle::Spaced, &mut stack)
                    .map_err(|e| HighlightError::Tokenize(format!("{}: {}", language, e)))?;
            output.push_str(&spans);

            for _ in 0..stack.len() {
                output.push_str("</span>");
            }
            output.push_str(terminator);
        }

        Ok(output)
    }
}

/// Splits a line into its content and its `\n` or `\r\n` terminator.
fn split_terminator(line: &str) -> (&str, &str) {
    let content = line
        .strip_suffix('\n')
        .map(|l| l.strip_suffix('\r').unwrap_or(l))
        .unwrap_or(line);
    line.split_at(content.len())
}

/// Opens a span whose classes are the atoms of `scope`, matching `ClassStyle::Spaced`.
fn push_open_span(output: &mut String, scope: Scope) {
    output.push_str("<span class=\"");
    output.push_str(&scope.build_string().replace('.', " "));
    output.push_str("\">");
}
