//! key-lengths command - Kasiski examination of a ciphertext

use anyhow::Result;
use console::style;

use crate::kasiski::{find_repeat_sequences, rank_key_lengths, spacings};

pub fn run(text: &str, min_length: usize, top: Option<usize>, format: &str) -> Result<()> {
    let sequences = find_repeat_sequences(text, min_length)?;
    let spaces = spacings(&sequences);
    let ranked = rank_key_lengths(&spaces, top)?;

    if format == "json" {
        println!("{}", serde_json::to_string_pretty(&ranked)?);
        return Ok(());
    }

    if ranked.is_empty() {
        println!(
            "No repeated sequences of length >= {} found; cannot estimate a key length.",
            min_length
        );
        return Ok(());
    }

    println!("\nMost likely key lengths\n");
    for candidate in &ranked {
        println!(
            "  {:>6}  {} votes",
            style(candidate.length).cyan().bold(),
            candidate.votes
        );
    }
    println!(
        "\n  {} repeated sequences, {} spacings analyzed",
        style(sequences.len()).dim(),
        style(spaces.len()).dim()
    );
    Ok(())
}
