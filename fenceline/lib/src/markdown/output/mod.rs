//! Output generation for highlighted code.
//!
//! This module provides:
//! - Line-oriented HTML for block and inline code
//! - MDAST parsing and highlighting of whole markdown documents
//!
//! ## Examples
//!
//! ```
//! use fenceline_lib::markdown::RenderOptions;
//! use fenceline_lib::markdown::highlighting::CodeHighlighter;
//! use fenceline_lib::markdown::output::{highlight_markdown, html_fragments};
//!
//! let ast = highlight_markdown(
//!     "```rust{2}\nfn main() {\n    run();\n}\n```\n",
//!     &RenderOptions::default(),
//!     &CodeHighlighter::new(),
//! )
//! .unwrap();
//!
//! let fragments = html_fragments(&ast);
//! assert_eq!(fragments.len(), 1);
//! assert!(fragments[0].contains("gatsby-highlight-code-line"));
//! ```

mod ast;
pub mod html;

pub use ast::{as_ast, highlight_markdown, html_fragments};
pub use html::{RenderedBlock, render_block, render_inline};
