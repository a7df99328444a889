//! Rhyme-unit extraction and stress classification.
//!
//! Both are pure functions of an immutable phoneme sequence: identical
//! input sequences always yield identical results, which is what makes
//! grouping across words valid.

use std::fmt;

use super::error::NoStressedVowel;
use super::phoneme::Phoneme;

/// The phoneme subsequence from the last primary-stressed vowel
/// (inclusive) to the end of a pronunciation.
///
/// Two pronunciations rhyme iff their units are symbol-for-symbol equal,
/// stress markers included.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RhymeUnit(Vec<Phoneme>);

impl RhymeUnit {
    pub fn phonemes(&self) -> &[Phoneme] {
        &self.0
    }

    /// Number of syllable nuclei in the unit, the stressed vowel included.
    pub fn syllable_count(&self) -> usize {
        self.0.iter().filter(|ph| ph.is_vowel()).count()
    }

    /// Unstressed syllables after the rhyme-defining stressed vowel.
    pub fn syllables_after(&self) -> usize {
        self.syllable_count().saturating_sub(1)
    }
}

impl fmt::Display for RhymeUnit {
    /// Canonical space-joined ARPAbet form, e.g. `AE1 T`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, ph) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{}", ph)?;
        }
        Ok(())
    }
}

/// Syllabic shape of a rhyme, from the count of vowels strictly after the
/// rhyme-defining stressed vowel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum StressPattern {
    /// Stress on the final syllable ("return" / "concern").
    Masculine,
    /// One trailing syllable ("lover" / "cover").
    Feminine,
    /// Two or more trailing syllables ("flattery" / "battery").
    Dactylic,
}

impl StressPattern {
    pub fn classify(trailing_vowels: usize) -> Self {
        match trailing_vowels {
            0 => StressPattern::Masculine,
            1 => StressPattern::Feminine,
            _ => StressPattern::Dactylic,
        }
    }

    pub fn all() -> [StressPattern; 3] {
        [
            StressPattern::Masculine,
            StressPattern::Feminine,
            StressPattern::Dactylic,
        ]
    }

    pub fn as_str(self) -> &'static str {
        match self {
            StressPattern::Masculine => "masculine",
            StressPattern::Feminine => "feminine",
            StressPattern::Dactylic => "dactylic",
        }
    }
}

impl fmt::Display for StressPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Extract the rhyme unit and classify its stress pattern.
///
/// The unit starts at the *last* vowel carrying primary stress. A
/// pronunciation without one cannot rhyme and is reported as an error so
/// callers can skip and count it.
pub fn extract_rhyme_unit(
    phonemes: &[Phoneme],
) -> Result<(RhymeUnit, StressPattern), NoStressedVowel> {
    let last = phonemes
        .iter()
        .rposition(Phoneme::has_primary_stress)
        .ok_or(NoStressedVowel)?;

    let trailing = phonemes[last + 1..]
        .iter()
        .filter(|ph| ph.is_vowel())
        .count();

    let unit = RhymeUnit(phonemes[last..].to_vec());
    Ok((unit, StressPattern::classify(trailing)))
}
