//! Render configuration shared by every document transform.
//!
//! Options are built once and passed by reference into each transform, so
//! documents rendered concurrently with different configurations never see
//! each other's settings.
//!
//! ## Examples
//!
//! ```
//! use fenceline_lib::markdown::RenderOptions;
//!
//! let options = RenderOptions::from_yaml(
//!     "classPrefix: lang-\ninlineCodeMarker: \"|\"\naliases:\n  JS: javascript\n",
//! )
//! .unwrap();
//!
//! assert_eq!(options.class_prefix, "lang-");
//! assert_eq!(options.inline_code_marker.as_deref(), Some("|"));
//! assert_eq!(options.aliases.get("js"), Some("javascript"));
//! ```

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::HighlightResult;

/// Default prefix applied to the language class name.
pub const DEFAULT_CLASS_PREFIX: &str = "language-";

/// Mapping from a lowercase alias to a lowercase canonical language name.
///
/// Keys and values are lower-cased on construction so lookups only need to
/// lower-case the incoming tag.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "HashMap<String, String>", into = "HashMap<String, String>")]
pub struct AliasTable(HashMap<String, String>);

impl AliasTable {
    /// Creates an empty alias table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an alias, lower-casing both sides.
    pub fn insert(&mut self, alias: impl AsRef<str>, canonical: impl AsRef<str>) {
        self.0.insert(
            alias.as_ref().to_lowercase(),
            canonical.as_ref().to_lowercase(),
        );
    }

    /// Looks up the canonical name for an already lower-cased alias.
    pub fn get(&self, alias: &str) -> Option<&str> {
        self.0.get(alias).map(String::as_str)
    }

    /// Returns the number of aliases.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Checks if the table is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<K: AsRef<str>, V: AsRef<str>> FromIterator<(K, V)> for AliasTable {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut table = Self::new();
        for (alias, canonical) in iter {
            table.insert(alias, canonical);
        }
        table
    }
}

impl From<HashMap<String, String>> for AliasTable {
    fn from(map: HashMap<String, String>) -> Self {
        map.into_iter().collect()
    }
}

impl From<AliasTable> for HashMap<String, String> {
    fn from(table: AliasTable) -> Self {
        table.0
    }
}

/// Options controlling how code nodes are rendered.
///
/// ## Examples
///
/// ```
/// use fenceline_lib::markdown::RenderOptions;
///
/// let mut options = RenderOptions::default();
/// options.class_prefix = "hl-".to_string();
/// options.inline_code_marker = Some("›".to_string());
/// options.aliases.insert("sh", "bash");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default, deny_unknown_fields)]
#[non_exhaustive]
pub struct RenderOptions {
    /// Prefix for the language class on `pre` and `code` elements.
    pub class_prefix: String,
    /// Delimiter separating an explicit language from inline code text.
    pub inline_code_marker: Option<String>,
    /// User-supplied language aliases.
    pub aliases: AliasTable,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            class_prefix: DEFAULT_CLASS_PREFIX.to_string(),
            inline_code_marker: None,
            aliases: AliasTable::new(),
        }
    }
}

impl RenderOptions {
    /// Parses options from a YAML document. Missing keys take their defaults.
    ///
    /// ## Errors
    ///
    /// Returns `HighlightError::ConfigParse` for malformed YAML or unknown keys.
    pub fn from_yaml(content: &str) -> HighlightResult<Self> {
        Ok(serde_yaml::from_str(content)?)
    }

    /// Parses options from a JSON document. Missing keys take their defaults.
    ///
    /// ## Errors
    ///
    /// Returns `HighlightError::ConfigJson` for malformed JSON or unknown keys.
    pub fn from_json(content: &str) -> HighlightResult<Self> {
        Ok(serde_json::from_str(content)?)
    }

    /// Returns the configured inline marker, treating an empty string as unset.
    pub(crate) fn inline_marker(&self) -> Option<&str> {
        self.inline_code_marker
            .as_deref()
            .filter(|marker| !marker.is_empty())
    }
}
