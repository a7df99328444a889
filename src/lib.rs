//! Rime - ranked English rhyme families
//!
//! Rime is a CLI tool and library for deriving ranked families of English
//! words that rhyme, from ARPAbet phonetic transcriptions (CMUdict line
//! format) and Zipf-scale word frequencies. Families share a rhyme unit
//! (phonemes from the last primary-stressed vowel onward) and are ranked
//! by size and representative frequency.
//!
//! ## Module Structure
//!
//! - `cli`: Command-line interface layer (user-facing commands and reporting)
//! - `config`: Configuration file loading and parsing
//! - `core`: Core engine (lexicon, extraction, aggregation, ranking)
//! - `tsv_writer`: TSV serialization of ranked family rows

pub mod cli;
pub mod config;
pub mod core;
pub mod tsv_writer;
