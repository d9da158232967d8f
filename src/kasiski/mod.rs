//! Kasiski examination pipeline
//!
//! Estimates the key length of a repeating-key polyalphabetic cipher from the
//! ciphertext alone. The pipeline is linear:
//!
//! 1. [`find_repeat_sequences`] - every substring (length >= `min_length`)
//!    that occurs at least twice, with all of its start offsets
//! 2. [`spacings`] - distances between consecutive occurrences
//! 3. [`rank_key_lengths`] - factorize each spacing and rank the factors by
//!    how many spacings they divide
//!
//! A factor that divides many spacings is a likely key length, since repeated
//! plaintext encrypted with the same key slice lands a whole number of key
//! periods apart.

mod factors;
mod sequences;

pub use factors::{divisors, rank_key_lengths};
pub use sequences::{find_repeat_sequences, spacings, SequenceMap};

use thiserror::Error;

/// Errors from the Kasiski pipeline
#[derive(Error, Debug)]
pub enum KasiskiError {
    #[error(
        "min_length must be at least 2 and smaller than half the text length \
         (got {min_length} for a text of {text_len} chars)"
    )]
    MinLengthOutOfRange { min_length: usize, text_len: usize },

    #[error("cannot factorize {0}: number must be greater than 1")]
    NotFactorable(usize),
}

pub type KasiskiResult<T> = Result<T, KasiskiError>;
