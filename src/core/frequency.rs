//! Zipf-scale word frequency index.
//!
//! Built once from a two-column `word<TAB>zipf` file (any whitespace
//! separator is accepted) and read-only afterwards. On the Zipf scale
//! 6 ≈ "the", 4 ≈ "rhyme", 2.5 ≈ uncommon-but-poetic.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

/// Read-only map from lowercase surface form to Zipf score.
#[derive(Debug, Default)]
pub struct FrequencyIndex {
    scores: HashMap<String, f64>,
}

impl FrequencyIndex {
    /// Pure lookup. `None` means the word is unknown to the dataset and is
    /// treated as below any cutoff, not as an error.
    pub fn score(&self, word: &str) -> Option<f64> {
        self.scores.get(&word.to_lowercase()).copied()
    }

    pub fn len(&self) -> usize {
        self.scores.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scores.is_empty()
    }

    /// Build an index directly from (word, score) pairs.
    pub fn from_entries<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = (S, f64)>,
        S: Into<String>,
    {
        let scores = entries
            .into_iter()
            .map(|(word, score)| (word.into().to_lowercase(), score))
            .collect();
        Self { scores }
    }
}

/// Result of loading a frequency file.
#[derive(Debug, Default)]
pub struct FrequencyLoadResult {
    pub index: FrequencyIndex,
    /// Lines that did not parse as `word zipf`; skipped, never fatal.
    pub malformed_lines: usize,
}

pub fn load(path: &Path) -> Result<FrequencyLoadResult> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read frequency file: {:?}", path))?;
    Ok(parse(&content))
}

pub fn parse(content: &str) -> FrequencyLoadResult {
    let mut result = FrequencyLoadResult::default();

    for line in content.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let mut fields = line.split_whitespace();
        let entry = match (fields.next(), fields.next()) {
            (Some(word), Some(score)) => score
                .parse::<f64>()
                .ok()
                .filter(|z| z.is_finite())
                .map(|z| (word, z)),
            _ => None,
        };

        match entry {
            // Later duplicates win, deterministically.
            Some((word, zipf)) => {
                result.index.scores.insert(word.to_lowercase(), zipf);
            }
            None => result.malformed_lines += 1,
        }
    }

    result
}
