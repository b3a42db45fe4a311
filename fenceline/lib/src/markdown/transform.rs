//! Rewrites the code nodes of an MDAST into highlighted HTML nodes.
//!
//! Traversal is a single pre-order pass. Every `code` and `inlineCode` node
//! is visited once and replaced in place by an `html` node carrying the same
//! position, so sibling order is untouched. `html` nodes are never matched,
//! which makes a second pass over an already transformed tree a no-op.

use markdown::mdast::{Code, Html, InlineCode, Node};
use markdown::unist::Position;

use crate::markdown::dsl::parse_line_range;
use crate::markdown::highlighting::Tokenizer;
use crate::markdown::output::{render_block, render_inline};
use crate::markdown::{HighlightError, HighlightResult, PLAIN_TEXT, RenderOptions, resolve_language};

/// Counts of code nodes rewritten by one transform.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TransformStats {
    /// Fenced or indented code blocks.
    pub blocks: usize,
    /// Inline code spans.
    pub inline: usize,
}

impl TransformStats {
    /// Total number of rewritten nodes.
    pub fn total(&self) -> usize {
        self.blocks + self.inline
    }
}

/// Rewrites every code node under `root` (including `root` itself).
///
/// ## Examples
///
/// ```
/// use fenceline_lib::markdown::{HighlightError, HighlightResult, RenderOptions, as_ast, transform};
///
/// let mut ast = as_ast("Run `cargo test` now.").unwrap();
/// let plain = |lang: &str, _: &str| -> HighlightResult<String> {
///     Err(HighlightError::UnsupportedLanguage(lang.to_string()))
/// };
///
/// let stats = transform(&mut ast, &RenderOptions::default(), &plain).unwrap();
/// assert_eq!(stats.inline, 1);
///
/// let json = serde_json::to_string(&ast).unwrap();
/// assert!(json.contains("<code class=\\\"language-text\\\">cargo test</code>"));
/// ```
///
/// ## Errors
///
/// Tokenizer failures other than an unsupported language abort the
/// transform. The tree may then be partially rewritten and should be
/// discarded by the caller.
pub fn transform(
    root: &mut Node,
    options: &RenderOptions,
    tokenizer: &dyn Tokenizer,
) -> HighlightResult<TransformStats> {
    let mut stats = TransformStats::default();
    visit(root, options, tokenizer, &mut stats)?;
    tracing::debug!(
        blocks = stats.blocks,
        inline = stats.inline,
        "Rewrote code nodes"
    );
    Ok(stats)
}

fn visit(
    node: &mut Node,
    options: &RenderOptions,
    tokenizer: &dyn Tokenizer,
    stats: &mut TransformStats,
) -> HighlightResult<()> {
    let replacement = match node {
        Node::Code(code) => {
            stats.blocks += 1;
            Some(rewrite_code(code, options, tokenizer)?)
        }
        Node::InlineCode(inline) => {
            stats.inline += 1;
            Some(rewrite_inline_code(inline, options, tokenizer)?)
        }
        _ => None,
    };

    if let Some(html) = replacement {
        *node = Node::Html(html);
        return Ok(());
    }

    if let Some(children) = node.children_mut() {
        for child in children.iter_mut() {
            visit(child, options, tokenizer, stats)?;
        }
    }

    Ok(())
}

fn rewrite_code(
    code: &Code,
    options: &RenderOptions,
    tokenizer: &dyn Tokenizer,
) -> HighlightResult<Html> {
    let spec = parse_line_range(code.lang.as_deref());
    let language = resolve_language(Some(spec.language.as_str()), &options.aliases);

    let rendered = render_block(
        &language,
        &code.value,
        &spec.highlighted_lines,
        &options.class_prefix,
        tokenizer,
    )
    .map_err(|e| with_position(e, code.position.as_ref()))?;

    Ok(Html {
        value: rendered.html,
        position: code.position.clone(),
    })
}

fn rewrite_inline_code(
    inline: &InlineCode,
    options: &RenderOptions,
    tokenizer: &dyn Tokenizer,
) -> HighlightResult<Html> {
    let (language, source) = match split_inline(&inline.value, options.inline_marker()) {
        Some((tag, rest)) => (resolve_language(Some(tag), &options.aliases), rest),
        None => (PLAIN_TEXT.to_string(), inline.value.as_str()),
    };

    let rendered = render_inline(&language, source, &options.class_prefix, tokenizer)
        .map_err(|e| with_position(e, inline.position.as_ref()))?;

    Ok(Html {
        value: rendered.html,
        position: inline.position.clone(),
    })
}

/// Splits inline code on the first marker into `(language, rest)`.
///
/// Returns `None` unless both halves are non-empty.
fn split_inline<'a>(value: &'a str, marker: Option<&str>) -> Option<(&'a str, &'a str)> {
    let (tag, rest) = value.split_once(marker?)?;
    (!tag.is_empty() && !rest.is_empty()).then_some((tag, rest))
}

/// Prefixes tokenizer failures with the source location of the node.
fn with_position(error: HighlightError, position: Option<&Position>) -> HighlightError {
    match (error, position) {
        (HighlightError::Tokenize(msg), Some(pos)) => HighlightError::Tokenize(format!(
            "{}:{}: {}",
            pos.start.line, pos.start.column, msg
        )),
        (error, _) => error,
    }
}
