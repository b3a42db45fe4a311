//! Code highlighting for markdown documents.
//!
//! The pipeline for one code node is:
//!
//! 1. [`dsl::parse_line_range`] splits the language tag into the language and
//!    the set of lines to emphasize (`js{1,3-5}`).
//! 2. [`resolve_language`] lower-cases the language and applies user aliases.
//! 3. [`output::render_block`] / [`output::render_inline`] run the
//!    [`highlighting::Tokenizer`] and wrap the result per line.
//! 4. [`transform`] replaces the node with an `html` node holding the markup.
//!
//! ## Examples
//!
//! ```
//! use fenceline_lib::markdown::{RenderOptions, highlight_markdown, html_fragments};
//! use fenceline_lib::markdown::highlighting::CodeHighlighter;
//!
//! let mut options = RenderOptions::default();
//! options.aliases.insert("js", "javascript");
//!
//! let content = "```js{2}\nconst a = 1\nconst b = 2\n```\n";
//! let ast = highlight_markdown(content, &options, &CodeHighlighter::new()).unwrap();
//!
//! let html = html_fragments(&ast)[0];
//! assert!(html.starts_with(
//!     r#"<div class="gatsby-highlight" data-language="javascript"><pre class="language-javascript">"#
//! ));
//! ```

mod language;
mod options;
mod transform;
mod types;
pub mod dsl;
pub mod highlighting;
pub mod output;

pub use language::{PLAIN_TEXT, resolve_language};
pub use options::{AliasTable, DEFAULT_CLASS_PREFIX, RenderOptions};
pub use output::{RenderedBlock, as_ast, highlight_markdown, html_fragments};
pub use transform::{TransformStats, transform};
pub use types::{HighlightError, HighlightResult};
