//! Line-oriented HTML generation for highlighted code.
//!
//! Block code is wrapped in a `gatsby-highlight` container with one span per
//! physical line, so highlighted lines can be styled across the full width of
//! the block regardless of horizontal scroll. Inline code gets a single
//! `code` element.
//!
//! ## Examples
//!
//! ```
//! use std::collections::BTreeSet;
//! use fenceline_lib::markdown::HighlightResult;
//! use fenceline_lib::markdown::output::render_block;
//!
//! let tokenizer = |_: &str, source: &str| -> HighlightResult<String> { Ok(source.to_string()) };
//! let highlighted = BTreeSet::from([2]);
//! let block = render_block("js", "a\nb\n", &highlighted, "language-", &tokenizer).unwrap();
//!
//! assert_eq!(
//!     block.html,
//!     "<div class=\"gatsby-highlight\" data-language=\"js\">\
//!      <pre class=\"language-js\"><code class=\"language-js\">\
//!      <span class=\"code-line\">a\n</span>\
//!      <span class=\"code-line gatsby-highlight-code-line\">b\n</span>\
//!      </code></pre></div>"
//! );
//! ```

use std::collections::BTreeSet;

use crate::markdown::highlighting::Tokenizer;
use crate::markdown::{HighlightError, HighlightResult};

/// Class applied to every line wrapper.
pub const LINE_CLASS: &str = "code-line";

/// Additional class marking a highlighted line.
pub const HIGHLIGHT_LINE_CLASS: &str = "gatsby-highlight-code-line";

/// Class of the container wrapping block code.
pub const CONTAINER_CLASS: &str = "gatsby-highlight";

/// Markup generated for one code node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedBlock {
    /// Generated HTML.
    pub html: String,
    /// Language used for `data-language` and the class name.
    pub language_name: String,
}

/// Renders block code with per-line wrappers.
///
/// Lines whose 1-based index is in `highlighted_lines` get the
/// [`HIGHLIGHT_LINE_CLASS`] marker. Members past the last line have no effect.
///
/// ## Errors
///
/// Returns the tokenizer's error for anything other than an unsupported
/// language, which falls back to escaped plain text instead.
pub fn render_block(
    language: &str,
    source: &str,
    highlighted_lines: &BTreeSet<usize>,
    class_prefix: &str,
    tokenizer: &dyn Tokenizer,
) -> HighlightResult<RenderedBlock> {
    let tokens = tokenize_or_plain(language, source, tokenizer)?;
    let class_name = class_attr(class_prefix, language);

    let mut html = String::with_capacity(tokens.len() + 128);
    html.push_str(&format!(
        r#"<div class="{}" data-language="{}"><pre class="{}"><code class="{}">"#,
        CONTAINER_CLASS,
        html_escape::encode_double_quoted_attribute(language),
        class_name,
        class_name
    ));

    for (idx, line) in tokens.split_inclusive('\n').enumerate() {
        let line_num = idx + 1;
        if highlighted_lines.contains(&line_num) {
            html.push_str(&format!(
                r#"<span class="{} {}">"#,
                LINE_CLASS, HIGHLIGHT_LINE_CLASS
            ));
        } else {
            html.push_str(&format!(r#"<span class="{}">"#, LINE_CLASS));
        }
        html.push_str(line);
        html.push_str("</span>");
    }

    html.push_str("</code></pre></div>");

    Ok(RenderedBlock {
        html,
        language_name: language.to_string(),
    })
}

/// Renders inline code as a single `code` element.
///
/// ## Errors
///
/// Same policy as [`render_block`].
pub fn render_inline(
    language: &str,
    source: &str,
    class_prefix: &str,
    tokenizer: &dyn Tokenizer,
) -> HighlightResult<RenderedBlock> {
    let tokens = tokenize_or_plain(language, source, tokenizer)?;
    let html = format!(
        r#"<code class="{}">{}</code>"#,
        class_attr(class_prefix, language),
        tokens
    );

    Ok(RenderedBlock {
        html,
        language_name: language.to_string(),
    })
}

/// Runs the tokenizer, degrading to escaped source for unsupported languages.
fn tokenize_or_plain(
    language: &str,
    source: &str,
    tokenizer: &dyn Tokenizer,
) -> HighlightResult<String> {
    match tokenizer.tokenize(language, source) {
        Ok(tokens) => Ok(tokens),
        Err(HighlightError::UnsupportedLanguage(_)) => {
            tracing::debug!(language, "No grammar for language, rendering plain text");
            Ok(html_escape::encode_text(source).into_owned())
        }
        Err(e) => Err(e),
    }
}

fn class_attr(class_prefix: &str, language: &str) -> String {
    html_escape::encode_double_quoted_attribute(&format!("{}{}", class_prefix, language))
        .into_owned()
}
