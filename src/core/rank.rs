//! Final ranking and row assembly.
//!
//! A row is the complete exported view of one family. Ordering must be a
//! total order so repeated runs produce byte-identical output.

use std::cmp::Ordering;

use super::extract::StressPattern;
use super::family::Family;
use super::summary::spelling_variants;

/// One output row, in final field form.
#[derive(Debug, Clone, PartialEq)]
pub struct FamilyRow {
    pub pattern: StressPattern,
    /// Canonical space-joined ARPAbet form of the rhyme unit.
    pub rhyme_unit: String,
    /// Unstressed syllables after the rhyme-defining stressed vowel.
    pub syllables_after: usize,
    pub family_size: usize,
    pub representative: String,
    pub rep_zipf: f64,
    /// Up to the configured cap of (ending-representative, score) pairs.
    pub spelling_variants: Vec<(String, f64)>,
    /// All members with scores, frequency-sorted.
    pub members: Vec<(String, f64)>,
}

/// Assemble rows and sort them into final rank order.
pub fn build_rows(
    families: Vec<Family>,
    ending_length: usize,
    max_variants: usize,
) -> Vec<FamilyRow> {
    let mut rows: Vec<FamilyRow> = families
        .into_iter()
        .map(|family| row_from_family(family, ending_length, max_variants))
        .collect();
    rows.sort_by(rank_order);
    rows
}

fn row_from_family(family: Family, ending_length: usize, max_variants: usize) -> FamilyRow {
    let representative = family.representative();
    FamilyRow {
        pattern: family.key.pattern,
        rhyme_unit: family.key.unit.to_string(),
        syllables_after: family.key.unit.syllables_after(),
        family_size: family.size(),
        representative: representative.word.clone(),
        rep_zipf: representative.zipf,
        spelling_variants: spelling_variants(&family.members, ending_length, max_variants),
        members: family
            .members
            .iter()
            .map(|member| (member.word.clone(), member.zipf))
            .collect(),
    }
}

/// Size descending, representative score descending, then canonical unit
/// string ascending. The unit string is unique per family, so this is a
/// total order and output ordering is reproducible across runs.
fn rank_order(a: &FamilyRow, b: &FamilyRow) -> Ordering {
    b.family_size
        .cmp(&a.family_size)
        .then_with(|| b.rep_zipf.total_cmp(&a.rep_zipf))
        .then_with(|| a.rhyme_unit.cmp(&b.rhyme_unit))
}
