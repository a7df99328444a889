//! The build pipeline.
//!
//! A linear one-shot transformation with no retries and no intermediate
//! persisted state: extract -> filter -> aggregate -> summarize -> rank.
//! Extraction runs in parallel with input order preserved; aggregation is
//! sequential over that ordered result, so the per-family word dedup is
//! applied globally rather than per partition.

use rayon::prelude::*;

use crate::config::{Config, Mode};

use super::error::NoStressedVowel;
use super::extract::{RhymeUnit, StressPattern, extract_rhyme_unit};
use super::family::{FamilyBuilder, FamilyKey};
use super::frequency::FrequencyIndex;
use super::lexicon::Lexicon;
use super::rank::{FamilyRow, build_rows};

/// Pipeline knobs, decoupled from the file-path half of [`Config`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PipelineOptions {
    pub zipf_cutoff: f64,
    pub min_family_size: usize,
    pub max_spelling_variants: usize,
    pub ending_length: usize,
    pub mode: Mode,
}

impl From<&Config> for PipelineOptions {
    fn from(config: &Config) -> Self {
        Self {
            zipf_cutoff: config.zipf_cutoff,
            min_family_size: config.min_family_size,
            max_spelling_variants: config.max_spelling_variants,
            ending_length: config.ending_length,
            mode: config.mode,
        }
    }
}

/// Per-stage counts for the run report.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PipelineStats {
    /// Records in the lexicon arena.
    pub records: usize,
    /// Records with no primary-stressed vowel, skipped.
    pub stressless: usize,
    /// Records dropped in masculine-only mode for not being masculine.
    pub filtered_pattern: usize,
    /// Records whose word is unknown to the frequency index or scores
    /// below the cutoff.
    pub below_cutoff: usize,
    /// Records that contributed to a family.
    pub retained: usize,
    /// Distinct rhyme keys seen, before the minimum-size filter.
    pub candidate_families: usize,
    /// Families surviving the minimum-size filter.
    pub families: usize,
}

/// Ranked rows plus run accounting.
#[derive(Debug)]
pub struct PipelineOutcome {
    /// All surviving families in final rank order. In masculine-only mode
    /// every row is masculine.
    pub rows: Vec<FamilyRow>,
    pub stats: PipelineStats,
}

pub fn run_pipeline(
    lexicon: &Lexicon,
    frequencies: &FrequencyIndex,
    options: &PipelineOptions,
) -> PipelineOutcome {
    let extractions: Vec<Result<(RhymeUnit, StressPattern), NoStressedVowel>> = lexicon
        .records()
        .par_iter()
        .map(|record| extract_rhyme_unit(&record.phonemes))
        .collect();

    let mut stats = PipelineStats {
        records: lexicon.len(),
        ..PipelineStats::default()
    };

    let mut builder = FamilyBuilder::default();
    for (id, extraction) in extractions.into_iter().enumerate() {
        let record = lexicon.get(id);
        let (unit, pattern) = match extraction {
            Ok(extracted) => extracted,
            Err(NoStressedVowel) => {
                stats.stressless += 1;
                continue;
            }
        };

        if options.mode == Mode::MasculineOnly && pattern != StressPattern::Masculine {
            stats.filtered_pattern += 1;
            continue;
        }

        let zipf = match frequencies.score(&record.word) {
            Some(zipf) if zipf >= options.zipf_cutoff => zipf,
            // absent from the dataset counts as below any cutoff
            _ => {
                stats.below_cutoff += 1;
                continue;
            }
        };

        builder.insert(FamilyKey { unit, pattern }, &record.word, zipf, id);
        stats.retained += 1;
    }

    stats.candidate_families = builder.len();
    let families = builder.finish(options.min_family_size);
    stats.families = families.len();

    let rows = build_rows(families, options.ending_length, options.max_spelling_variants);
    PipelineOutcome { rows, stats }
}
