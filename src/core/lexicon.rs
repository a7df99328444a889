//! CMUdict-format transcription loader.
//!
//! Each data line is `word PH1 PH2 ...`. Alternate pronunciations are
//! annotated `word(2)`, `word(3)` and so on; the unannotated line is
//! variant 1. `;;;` comment lines are ignored, and cmusphinx-style
//! trailing `#` comments are stripped before tokenizing.
//!
//! Malformed entries are skipped and reported as warnings, never fatal:
//! a bad line cannot invalidate the rest of the dictionary.

use std::collections::HashMap;
use std::fs;
use std::path::Path;
use std::sync::OnceLock;

use anyhow::{Context, Result};
use regex::Regex;

use super::error::EntryError;
use super::phoneme::Phoneme;

/// One pronunciation of a surface word.
///
/// A word with N variant transcriptions yields N records; each record
/// rhymes on its own. Records are immutable once loaded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PronunciationRecord {
    /// Lowercased surface form, variant annotation stripped.
    pub word: String,
    /// 1-based variant index; 1 for the unannotated base transcription.
    pub variant: u32,
    pub phonemes: Vec<Phoneme>,
}

/// Flat ordered arena of all pronunciation records, with a per-word index.
///
/// Downstream stages reference records by arena id instead of copying
/// them, so a word can belong to several families without duplication.
#[derive(Debug, Default)]
pub struct Lexicon {
    records: Vec<PronunciationRecord>,
    by_word: HashMap<String, Vec<usize>>,
}

impl Lexicon {
    pub fn records(&self) -> &[PronunciationRecord] {
        &self.records
    }

    pub fn get(&self, id: usize) -> &PronunciationRecord {
        &self.records[id]
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// All records of a word, in dictionary order of their variants.
    pub fn variants_of(&self, word: &str) -> Vec<&PronunciationRecord> {
        self.by_word
            .get(word)
            .map(|ids| ids.iter().map(|&id| &self.records[id]).collect())
            .unwrap_or_default()
    }

    fn push(&mut self, record: PronunciationRecord) {
        let id = self.records.len();
        self.by_word
            .entry(record.word.clone())
            .or_default()
            .push(id);
        self.records.push(record);
    }
}

/// A skipped dictionary entry, kept for the verbose report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryWarning {
    /// 1-based line number in the dictionary file.
    pub line: usize,
    pub word: String,
    pub error: EntryError,
}

/// Result of loading a dictionary.
#[derive(Debug, Default)]
pub struct LexiconLoadResult {
    pub lexicon: Lexicon,
    pub warnings: Vec<EntryWarning>,
    /// Data lines seen, the skipped ones included.
    pub raw_entries: usize,
}

pub fn load(path: &Path) -> Result<LexiconLoadResult> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read dictionary file: {:?}", path))?;
    Ok(parse(&content))
}

pub fn parse(content: &str) -> LexiconLoadResult {
    let mut result = LexiconLoadResult::default();

    for (idx, raw_line) in content.lines().enumerate() {
        // cmusphinx dictionaries carry trailing "# ..." comments on some lines
        let line = raw_line.split('#').next().unwrap_or("").trim();
        if line.is_empty() || line.starts_with(";;;") {
            continue;
        }
        result.raw_entries += 1;

        match parse_line(line) {
            Ok(record) => result.lexicon.push(record),
            Err((word, error)) => result.warnings.push(EntryWarning {
                line: idx + 1,
                word,
                error,
            }),
        }
    }

    result
}

/// Matches the `(2)`, `(3)` suffixes marking alternate pronunciations.
fn variant_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^(.*)\((\d+)\)$").expect("valid regex"))
}

/// `"either(2)"` → `("either", 2)`; unannotated words are variant 1.
fn split_variant(raw: &str) -> (String, u32) {
    if let Some(caps) = variant_re().captures(raw) {
        let variant = caps[2].parse().unwrap_or(1);
        (caps[1].to_lowercase(), variant)
    } else {
        (raw.to_lowercase(), 1)
    }
}

fn parse_line(line: &str) -> Result<PronunciationRecord, (String, EntryError)> {
    let mut tokens = line.split_whitespace();
    let raw_word = tokens.next().expect("line is non-empty");
    let (word, variant) = split_variant(raw_word);

    let phonemes: Vec<Phoneme> = match tokens.map(|token| token.parse()).collect() {
        Ok(phonemes) => phonemes,
        Err(error) => return Err((word, error)),
    };

    if phonemes.is_empty() {
        return Err((word, EntryError::MissingPhonemes));
    }
    if !phonemes.iter().any(Phoneme::is_vowel) {
        return Err((word, EntryError::NoSyllable));
    }

    Ok(PronunciationRecord {
        word,
        variant,
        phonemes,
    })
}
