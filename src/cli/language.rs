//! detect / typical commands - language identification

use anyhow::Result;
use console::style;
use std::path::Path;

use crate::language::{DirStore, FrequencyComparator};
use crate::models::Classification;

pub fn detect(text: &str, tables: &Path, languages: &[String], format: &str) -> Result<()> {
    let comparator = FrequencyComparator::new(DirStore::new(tables));
    let requested = if languages.is_empty() {
        None
    } else {
        Some(languages)
    };
    let scores = comparator.detect_language(text, requested)?;

    let mut ranked: Vec<Classification> = scores
        .into_iter()
        .map(|(language, score)| Classification { language, score })
        .collect();
    ranked.sort_by(|a, b| b.score.total_cmp(&a.score).then_with(|| a.language.cmp(&b.language)));

    if format == "json" {
        println!("{}", serde_json::to_string_pretty(&ranked)?);
        return Ok(());
    }

    if ranked.is_empty() {
        println!("No frequency tables found in {}", tables.display());
        return Ok(());
    }

    println!("\nLanguage similarity\n");
    for entry in &ranked {
        println!(
            "  {:<12} {:>10.4}",
            style(&entry.language).cyan(),
            entry.score
        );
    }
    println!(
        "\n  Most likely: {}",
        style(&ranked[0].language).green().bold()
    );
    Ok(())
}

pub fn typical(text: &str, tables: &Path, language: &str, threshold: f64) -> Result<()> {
    let comparator = FrequencyComparator::new(DirStore::new(tables));
    let is_typical = comparator.is_typical(text, language, threshold)?;

    if is_typical {
        println!(
            "  {} Text is typical of '{}' (threshold {})",
            style("[OK]").green(),
            style(language).cyan(),
            threshold
        );
    } else {
        println!(
            "  {} Text is not typical of '{}' (threshold {})",
            style("[--]").dim(),
            style(language).cyan(),
            threshold
        );
    }
    Ok(())
}
