//! Frequency-table stores
//!
//! A store is a named collection of per-language character-frequency tables.
//! [`DirStore`] reads `<language>.json` files from a directory; [`MemoryStore`]
//! holds tables in memory for tests and embedding.

use crate::language::{LanguageError, LanguageResult};
use rustc_hash::FxHashMap;
use std::collections::HashMap;
use std::path::PathBuf;
use tracing::debug;

/// Expected frequency per character for one language, immutable once loaded.
pub type FrequencyTable = FxHashMap<char, f64>;

/// Source of per-language frequency tables.
///
/// `available_languages` only surfaces names that exist, so iterating over it
/// and loading each one cannot hit `NotFound` short of a concurrent removal.
pub trait FrequencyStore: Send + Sync {
    /// Names of every language the store can currently load. Never errors;
    /// an unreadable store simply lists nothing.
    fn available_languages(&self) -> Vec<String>;

    /// Load one language's table, failing with [`LanguageError::NotFound`] if
    /// the store has no entry under that name.
    fn load(&self, language: &str) -> LanguageResult<FrequencyTable>;
}

/// Directory of `<language>.json` frequency tables.
///
/// Each file is a JSON object mapping single-character strings to numbers,
/// e.g. `{"e": 0.127, "t": 0.091}`.
pub struct DirStore {
    root: PathBuf,
}

impl DirStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    fn table_path(&self, language: &str) -> PathBuf {
        self.root.join(format!("{language}.json"))
    }
}

impl FrequencyStore for DirStore {
    fn available_languages(&self) -> Vec<String> {
        let Ok(entries) = std::fs::read_dir(&self.root) else {
            debug!(root = %self.root.display(), "frequency table directory not readable");
            return Vec::new();
        };

        let mut languages: Vec<String> = entries
            .filter_map(|e| e.ok())
            .filter_map(|e| {
                let path = e.path();
                if path.extension().and_then(|x| x.to_str()) == Some("json") {
                    path.file_stem()
                        .and_then(|s| s.to_str())
                        .map(str::to_string)
                } else {
                    None
                }
            })
            .collect();
        languages.sort_unstable();
        languages
    }

    fn load(&self, language: &str) -> LanguageResult<FrequencyTable> {
        let path = self.table_path(language);
        let raw = std::fs::read_to_string(&path).map_err(|source| {
            if source.kind() == std::io::ErrorKind::NotFound {
                LanguageError::NotFound(language.to_string())
            } else {
                LanguageError::Io {
                    language: language.to_string(),
                    source,
                }
            }
        })?;

        parse_table(language, &raw)
    }
}

/// Parse a JSON char -> frequency object. Multi-character keys or non-numeric
/// values surface as [`LanguageError::MalformedTable`].
fn parse_table(language: &str, raw: &str) -> LanguageResult<FrequencyTable> {
    serde_json::from_str::<HashMap<char, f64>>(raw)
        .map(|table| table.into_iter().collect())
        .map_err(|source| LanguageError::MalformedTable {
            language: language.to_string(),
            source,
        })
}

/// In-memory frequency-table store.
#[derive(Default)]
pub struct MemoryStore {
    tables: HashMap<String, FrequencyTable>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_table(
        mut self,
        language: impl Into<String>,
        table: impl IntoIterator<Item = (char, f64)>,
    ) -> Self {
        self.tables
            .insert(language.into(), table.into_iter().collect());
        self
    }
}

impl FrequencyStore for MemoryStore {
    fn available_languages(&self) -> Vec<String> {
        let mut languages: Vec<String> = self.tables.keys().cloned().collect();
        languages.sort_unstable();
        languages
    }

    fn load(&self, language: &str) -> LanguageResult<FrequencyTable> {
        self.tables
            .get(language)
            .cloned()
            .ok_or_else(|| LanguageError::NotFound(language.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_single_char_keys() {
        let table = parse_table("en", r#"{"e": 0.127, "t": 0.091}"#).unwrap();
        assert_eq!(table.len(), 2);
        assert_eq!(table[&'e'], 0.127);
    }

    #[test]
    fn multi_char_key_is_malformed() {
        let err = parse_table("en", r#"{"th": 0.02}"#).unwrap_err();
        assert!(matches!(err, LanguageError::MalformedTable { .. }));
    }

    #[test]
    fn non_numeric_value_is_malformed() {
        let err = parse_table("en", r#"{"e": "lots"}"#).unwrap_err();
        assert!(matches!(err, LanguageError::MalformedTable { .. }));
    }

    #[test]
    fn memory_store_lists_sorted_and_loads() {
        let store = MemoryStore::new()
            .with_table("fr", [('e', 0.15)])
            .with_table("en", [('e', 0.127)]);
        assert_eq!(store.available_languages(), vec!["en", "fr"]);
        assert_eq!(store.load("fr").unwrap()[&'e'], 0.15);
        assert!(matches!(
            store.load("de"),
            Err(LanguageError::NotFound(name)) if name == "de"
        ));
    }
}
