//! Line-aware syntax highlighting for markdown code blocks.
//!
//! This library rewrites the code nodes of a markdown AST into highlighted
//! HTML. Language tags may carry a line-range annotation (`js{1,3-5}`) naming
//! lines that should be emphasized, and short language names can be mapped to
//! canonical ones through an alias table.
//!
//! ## Modules
//!
//! - [`markdown`] - Range parsing, language resolution, line rendering and AST rewriting

pub mod markdown;
