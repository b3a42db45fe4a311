//! Language name normalization.

use super::AliasTable;

/// Language used when a code node declares none.
pub const PLAIN_TEXT: &str = "text";

/// Resolves a language tag to the canonical name used for classes and tokenizing.
///
/// Empty or missing tags fall back to [`PLAIN_TEXT`]. Lookup is
/// case-insensitive: the tag is lower-cased before consulting the alias table.
///
/// ## Examples
///
/// ```
/// use fenceline_lib::markdown::{AliasTable, resolve_language};
///
/// let aliases: AliasTable = [("js", "javascript")].into_iter().collect();
/// assert_eq!(resolve_language(Some("JS"), &aliases), "javascript");
/// assert_eq!(resolve_language(Some("Rust"), &aliases), "rust");
/// assert_eq!(resolve_language(None, &aliases), "text");
/// ```
pub fn resolve_language(tag: Option<&str>, aliases: &AliasTable) -> String {
    match tag {
        Some(tag) if !tag.is_empty() => {
            let lower = tag.to_lowercase();
            match aliases.get(&lower) {
                Some(canonical) => canonical.to_string(),
                None => lower,
            }
        }
        _ => PLAIN_TEXT.to_string(),
    }
}
