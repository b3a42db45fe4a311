//! MDAST (Markdown Abstract Syntax Tree) entry points.

use markdown::ParseOptions;
use markdown::mdast::Node;

use crate::markdown::highlighting::Tokenizer;
use crate::markdown::{HighlightError, HighlightResult, RenderOptions, transform};

/// Parses markdown content into an MDAST.
///
/// GitHub Flavored Markdown (GFM) extensions are enabled.
///
/// ## Errors
///
/// Returns `HighlightError::AstParse` if the content cannot be parsed into an AST.
///
/// ## Examples
///
/// ```
/// use fenceline_lib::markdown::as_ast;
/// use markdown::mdast::Node;
///
/// let ast = as_ast("# Hello\n\nWorld").unwrap();
/// assert!(matches!(ast, Node::Root(_)));
/// ```
pub fn as_ast(content: &str) -> HighlightResult<Node> {
    let options = ParseOptions::gfm();
    markdown::to_mdast(content, &options).map_err(|e| HighlightError::AstParse(e.to_string()))
}

/// Parses markdown content and rewrites its code nodes into highlighted HTML.
///
/// ## Errors
///
/// Returns `HighlightError::AstParse` for unparseable content, or the
/// tokenizer's error when highlighting fails for a reason other than an
/// unsupported language.
#[tracing::instrument(skip_all, fields(len = content.len()))]
pub fn highlight_markdown(
    content: &str,
    options: &RenderOptions,
    tokenizer: &dyn Tokenizer,
) -> HighlightResult<Node> {
    let mut ast = as_ast(content)?;
    transform(&mut ast, options, tokenizer)?;
    Ok(ast)
}

/// Collects the values of all HTML nodes in document order.
pub fn html_fragments(node: &Node) -> Vec<&str> {
    let mut fragments = Vec::new();
    collect_html(node, &mut fragments);
    fragments
}

fn collect_html<'a>(node: &'a Node, fragments: &mut Vec<&'a str>) {
    if let Node::Html(html) = node {
        fragments.push(&html.value);
    }

    if let Some(children) = node.children() {
        for child in children {
            collect_html(child, fragments);
        }
    }
}
