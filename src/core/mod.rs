//! Core rhyme-family engine.
//!
//! Data flows strictly forward through a linear pipeline:
//! lexicon -> extraction -> aggregation -> summarization -> ranking.
//!
//! - `phoneme`: ARPAbet symbol model (closed consonant/vowel sets, stress)
//! - `lexicon`: CMUdict-format loader into a flat record arena
//! - `frequency`: read-only Zipf score index
//! - `extract`: rhyme-unit extraction and stress classification
//! - `family`: aggregation by rhyme key with cross-variant dedup
//! - `summary`: representative and spelling-variant reduction
//! - `rank`: row assembly and the final total order
//! - `pipeline`: orchestration of one full run

pub mod error;
pub mod extract;
pub mod family;
pub mod frequency;
pub mod lexicon;
pub mod phoneme;
pub mod pipeline;
pub mod rank;
pub mod summary;

pub use error::{EntryError, NoStressedVowel};
pub use extract::{RhymeUnit, StressPattern, extract_rhyme_unit};
pub use family::{Family, FamilyBuilder, FamilyKey, Member};
pub use frequency::{FrequencyIndex, FrequencyLoadResult};
pub use lexicon::{EntryWarning, Lexicon, LexiconLoadResult, PronunciationRecord};
pub use phoneme::{Consonant, Phoneme, Stress, Vowel};
pub use pipeline::{PipelineOptions, PipelineOutcome, PipelineStats, run_pipeline};
pub use rank::FamilyRow;
