//! Representative selection and spelling-variant summarization.

use std::cmp::Ordering;
use std::collections::HashMap;
use std::collections::hash_map::Entry;
use std::hash::Hash;

use super::family::{Member, by_score_then_word};

/// Keep the best item per bucket.
///
/// A generic partition-then-max-reduce: items are grouped by `bucket` and
/// within each group only the one winning every `beats` comparison
/// survives. Returned in arbitrary order; callers sort.
pub fn best_per_bucket<T, K, I, B, C>(items: I, bucket: B, beats: C) -> Vec<T>
where
    I: IntoIterator<Item = T>,
    K: Eq + Hash,
    B: Fn(&T) -> K,
    C: Fn(&T, &T) -> bool,
{
    let mut best: HashMap<K, T> = HashMap::new();
    for item in items {
        match best.entry(bucket(&item)) {
            Entry::Occupied(mut slot) => {
                if beats(&item, slot.get()) {
                    slot.insert(item);
                }
            }
            Entry::Vacant(slot) => {
                slot.insert(item);
            }
        }
    }
    best.into_values().collect()
}

/// Normalized orthographic ending: the last `len` characters of the word,
/// or the whole word if shorter.
///
/// Groups spelling patterns within one phonetic family, so "write" and
/// "right" can both be surfaced from the `AY1 T` family.
pub fn ortho_ending(word: &str, len: usize) -> String {
    let chars: Vec<char> = word.chars().collect();
    if chars.len() <= len {
        word.to_string()
    } else {
        chars[chars.len() - len..].iter().collect()
    }
}

/// Best member per distinct orthographic ending, score-ordered, capped at
/// `max_variants` pairs of (word, score).
pub fn spelling_variants(
    members: &[Member],
    ending_length: usize,
    max_variants: usize,
) -> Vec<(String, f64)> {
    let mut picks = best_per_bucket(
        members.iter(),
        |member| ortho_ending(&member.word, ending_length),
        |a, b| by_score_then_word(a, b) == Ordering::Less,
    );
    picks.sort_by(|a, b| by_score_then_word(a, b));
    picks.truncate(max_variants);
    picks
        .into_iter()
        .map(|member| (member.word.clone(), member.zipf))
        .collect()
}
