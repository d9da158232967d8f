//! Frequency comparison and language classification

use crate::language::{FrequencyStore, FrequencyTable, LanguageError, LanguageResult};
use crate::models::Classification;
use rayon::prelude::*;
use rustc_hash::FxHashMap;
use std::collections::HashMap;
use tracing::debug;

/// Threshold above which a text counts as typical of a language.
pub const DEFAULT_TYPICALITY_THRESHOLD: f64 = 0.4;

/// Scores texts against the frequency tables of a [`FrequencyStore`].
///
/// The store handle is explicit; there is no implicit working-directory
/// lookup anywhere in this pipeline.
pub struct FrequencyComparator<S> {
    store: S,
}

impl<S: FrequencyStore> FrequencyComparator<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Similarity score per language, 1 being a perfect match.
    ///
    /// With `languages = None` every language the store lists is scored; an
    /// entry that vanishes between listing and loading is skipped. Explicitly
    /// requested languages must all load, so a missing one fails the whole
    /// call with [`LanguageError::NotFound`]. Malformed tables always surface.
    pub fn detect_language(
        &self,
        text: &str,
        languages: Option<&[String]>,
    ) -> LanguageResult<HashMap<String, f64>> {
        let tables = match languages {
            Some(names) => names
                .iter()
                .map(|name| self.store.load(name).map(|table| (name.clone(), table)))
                .collect::<LanguageResult<Vec<_>>>()?,
            None => {
                let mut tables = Vec::new();
                for name in self.store.available_languages() {
                    match self.store.load(&name) {
                        Ok(table) => tables.push((name, table)),
                        // Listed a moment ago but gone now; discovery only
                        // ever surfaces what truly exists.
                        Err(LanguageError::NotFound(_)) => continue,
                        Err(err) => return Err(err),
                    }
                }
                tables
            }
        };

        let counts = char_counts(text);
        let text_len = text.chars().count();
        debug!(languages = tables.len(), text_len, "scoring languages");

        Ok(tables
            .par_iter()
            .map(|(name, table)| (name.clone(), similarity(table, &counts, text_len)))
            .collect())
    }

    /// Whether `text` scores above `threshold` for `language`.
    ///
    /// Shares the exact scoring of [`detect_language`](Self::detect_language);
    /// fails with [`LanguageError::NotFound`] if the language is not in the
    /// store.
    pub fn is_typical(&self, text: &str, language: &str, threshold: f64) -> LanguageResult<bool> {
        let table = self.store.load(language)?;
        let score = similarity(&table, &char_counts(text), text.chars().count());
        Ok(score > threshold)
    }
}

/// Thin argmax over [`FrequencyComparator::detect_language`].
pub struct LanguageClassifier<S> {
    comparator: FrequencyComparator<S>,
}

impl<S: FrequencyStore> LanguageClassifier<S> {
    pub fn new(store: S) -> Self {
        Self {
            comparator: FrequencyComparator::new(store),
        }
    }

    /// The best-scoring language for `text`, or `None` if the store lists no
    /// languages. Equal scores resolve to the lexicographically smallest
    /// language name so the result is deterministic.
    pub fn classify(&self, text: &str) -> LanguageResult<Option<Classification>> {
        let scores = self.comparator.detect_language(text, None)?;
        Ok(scores
            .into_iter()
            .max_by(|a, b| a.1.total_cmp(&b.1).then_with(|| b.0.cmp(&a.0)))
            .map(|(language, score)| Classification { language, score }))
    }
}

/// Character counts of the case-folded text.
fn char_counts(text: &str) -> FxHashMap<char, usize> {
    let mut counts = FxHashMap::default();
    for ch in text.to_lowercase().chars() {
        *counts.entry(ch).or_insert(0) += 1;
    }
    counts
}

/// `1 - Σ |expected - observed| / text_len` over the table characters that
/// occur in the text. Expected-but-absent characters are skipped, so an empty
/// table (or an empty text) scores exactly 1.
fn similarity(table: &FrequencyTable, counts: &FxHashMap<char, usize>, text_len: usize) -> f64 {
    let mut deviation = 0.0;
    for (ch, expected) in table {
        if let Some(&observed) = counts.get(ch) {
            deviation += (expected - observed as f64).abs() / text_len as f64;
        }
    }
    1.0 - deviation
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::language::MemoryStore;

    fn comparator(store: MemoryStore) -> FrequencyComparator<MemoryStore> {
        FrequencyComparator::new(store)
    }

    #[test]
    fn empty_table_scores_exactly_one() {
        let cmp = comparator(MemoryStore::new().with_table("empty", []));
        let scores = cmp.detect_language("any text at all", None).unwrap();
        assert_eq!(scores["empty"], 1.0);
    }

    #[test]
    fn score_matches_hand_computation() {
        // "aab": a occurs 2x, b 1x, len 3; 'z' is expected but absent
        let cmp = comparator(
            MemoryStore::new().with_table("toy", [('a', 2.0), ('b', 0.5), ('z', 0.9)]),
        );
        let scores = cmp.detect_language("aab", None).unwrap();
        let expected = 1.0 - ((2.0f64 - 2.0).abs() + (0.5f64 - 1.0).abs()) / 3.0;
        assert!((scores["toy"] - expected).abs() < 1e-12);
    }

    #[test]
    fn text_is_case_folded() {
        let cmp = comparator(MemoryStore::new().with_table("toy", [('a', 3.0)]));
        let scores = cmp.detect_language("AaA", None).unwrap();
        assert_eq!(scores["toy"], 1.0);
    }

    #[test]
    fn explicit_missing_language_fails_fast() {
        let cmp = comparator(MemoryStore::new().with_table("en", [('e', 0.12)]));
        let err = cmp
            .detect_language("text", Some(&["en".into(), "xx".into()]))
            .unwrap_err();
        assert!(matches!(err, LanguageError::NotFound(name) if name == "xx"));
    }

    #[test]
    fn discovery_scores_every_stored_language() {
        let cmp = comparator(
            MemoryStore::new()
                .with_table("en", [('e', 0.12)])
                .with_table("fr", [('e', 0.15)]),
        );
        let scores = cmp.detect_language("eee", None).unwrap();
        assert_eq!(scores.len(), 2);
        assert!(scores.contains_key("en") && scores.contains_key("fr"));
    }

    #[test]
    fn is_typical_is_monotonic_in_threshold() {
        let cmp = comparator(MemoryStore::new().with_table("toy", [('a', 1.0)]));
        // score for "ab" = 1 - |1 - 1|/2 = 1.0
        assert!(cmp.is_typical("ab", "toy", 0.4).unwrap());
        assert!(cmp.is_typical("ab", "toy", 0.1).unwrap());
        assert!(!cmp.is_typical("ab", "toy", 1.0).unwrap());
    }

    #[test]
    fn is_typical_unknown_language_is_not_found() {
        let cmp = comparator(MemoryStore::new());
        assert!(matches!(
            cmp.is_typical("text", "en", DEFAULT_TYPICALITY_THRESHOLD),
            Err(LanguageError::NotFound(name)) if name == "en"
        ));
    }

    #[test]
    fn classifier_picks_argmax() {
        let store = MemoryStore::new()
            .with_table("close", [('a', 2.0)])
            .with_table("far", [('a', 100.0)]);
        let best = LanguageClassifier::new(store).classify("aa").unwrap().unwrap();
        assert_eq!(best.language, "close");
        assert_eq!(best.score, 1.0);
    }

    #[test]
    fn classifier_breaks_ties_by_name() {
        let store = MemoryStore::new()
            .with_table("bb", [])
            .with_table("aa", []);
        let best = LanguageClassifier::new(store).classify("text").unwrap().unwrap();
        assert_eq!(best.language, "aa");
    }

    #[test]
    fn classifier_on_empty_store_is_none() {
        assert!(LanguageClassifier::new(MemoryStore::new())
            .classify("text")
            .unwrap()
            .is_none());
    }
}
