use thiserror::Error;

/// Why a dictionary entry was rejected by the loader.
///
/// Entry errors are never fatal: the loader skips the offending line,
/// records a warning, and keeps going.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EntryError {
    #[error("unknown phoneme token \"{token}\"")]
    UnknownPhoneme { token: String },
    /// The transcription parsed but contains no vowel, so the record has
    /// no syllable to rhyme on.
    #[error("transcription has no vowel phoneme")]
    NoSyllable,
    #[error("entry has a word but no phoneme sequence")]
    MissingPhonemes,
}

/// A pronunciation with vowels but no primary-stressed vowel.
///
/// Some abbreviations and function words are transcribed this way. The
/// record is skipped; other records of the same word are unaffected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("no primary-stressed vowel in transcription")]
pub struct NoStressedVowel;
