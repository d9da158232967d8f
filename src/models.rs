//! Shared result types

use serde::{Deserialize, Serialize};

/// One candidate key length from the Kasiski ranking.
///
/// `votes` counts how many repeated-sequence spacings had `length` as a factor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyLengthCandidate {
    pub length: usize,
    pub votes: usize,
}

/// Best-scoring language for a text, as picked by the classifier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Classification {
    pub language: String,
    /// Similarity score: 1 is a perfect frequency match, lower (possibly
    /// negative) means greater mismatch.
    pub score: f64,
}
