//! Keyscope - cryptanalysis support for classical ciphers
//!
//! Two independent pipelines, composed only as "text in, ranked results out":
//!
//! - **Kasiski examination** ([`kasiski`]): find repeated substrings in a
//!   ciphertext, measure the spacings between their occurrences, factorize the
//!   spacings, and rank the factors by vote count to estimate the key length
//!   of a repeating-key polyalphabetic cipher.
//! - **Language identification** ([`language`]): score a text against
//!   per-language character-frequency reference tables and pick the best match.
//!
//! Everything is synchronous and allocation-transient: each call builds its own
//! structures and returns them, no shared mutable state.

pub mod cli;
pub mod kasiski;
pub mod language;
pub mod models;
