//! Family aggregation with cross-variant dedup.
//!
//! A family is the set of distinct surface words sharing one rhyme key.
//! Aggregation is purely additive per key: a skipped record simply never
//! contributes and cannot invalidate other members.

use std::cmp::Ordering;
use std::collections::HashMap;

use super::extract::{RhymeUnit, StressPattern};

/// Grouping key for rhyme-equivalent pronunciations.
///
/// The stress pattern is derivable from the unit, so carrying it in the
/// key does not change the partition; it keeps classified output cheap.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FamilyKey {
    pub unit: RhymeUnit,
    pub pattern: StressPattern,
}

/// A qualifying member word of a family.
#[derive(Debug, Clone, PartialEq)]
pub struct Member {
    pub word: String,
    pub zipf: f64,
    /// Arena id of the first record that placed this word here.
    pub record: usize,
}

/// Canonical member order: score descending, then word ascending.
///
/// The lexicographic tie-break keeps representative selection independent
/// of map iteration order.
pub fn by_score_then_word(a: &Member, b: &Member) -> Ordering {
    b.zipf
        .total_cmp(&a.zipf)
        .then_with(|| a.word.cmp(&b.word))
}

#[derive(Debug)]
pub struct Family {
    pub key: FamilyKey,
    /// Distinct surface words, sorted by [`by_score_then_word`].
    pub members: Vec<Member>,
}

impl Family {
    /// Count of distinct surface-form members.
    pub fn size(&self) -> usize {
        self.members.len()
    }

    /// Highest-frequency member; ties broken lexicographically.
    pub fn representative(&self) -> &Member {
        &self.members[0]
    }
}

/// Accumulates members per key during the aggregation pass.
#[derive(Debug, Default)]
pub struct FamilyBuilder {
    families: HashMap<FamilyKey, HashMap<String, Member>>,
}

impl FamilyBuilder {
    /// Add a word to the family for `key`.
    ///
    /// A surface word contributes at most once per family, even when two
    /// of its variant pronunciations collapse to the same rhyme unit.
    /// Variants mapping to different keys land in different families.
    pub fn insert(&mut self, key: FamilyKey, word: &str, zipf: f64, record: usize) {
        self.families
            .entry(key)
            .or_default()
            .entry(word.to_string())
            .or_insert_with(|| Member {
                word: word.to_string(),
                zipf,
                record,
            });
    }

    /// Distinct keys seen so far, the under-sized ones included.
    pub fn len(&self) -> usize {
        self.families.len()
    }

    pub fn is_empty(&self) -> bool {
        self.families.is_empty()
    }

    /// Finish aggregation, dropping families smaller than `min_family_size`.
    ///
    /// The size filter runs only after aggregation completes, so it is
    /// computed over the true deduplicated member set.
    pub fn finish(self, min_family_size: usize) -> Vec<Family> {
        self.families
            .into_iter()
            .filter(|(_, members)| members.len() >= min_family_size)
            .map(|(key, members)| {
                let mut members: Vec<Member> = members.into_values().collect();
                members.sort_by(by_score_then_word);
                Family { key, members }
            })
            .collect()
    }
}
