//! TSV serialization of ranked family rows.
//!
//! Kept out of the core pipeline: the core's obligation ends at the
//! ordered row sequence, and column layout and file naming live here.

use std::fmt::Write as _;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::config::Mode;
use crate::core::{FamilyRow, StressPattern};

pub const BASIC_FILE_NAME: &str = "rhyme_families.tsv";
pub const COMBINED_FILE_NAME: &str = "rhyme_families_all.tsv";

const BASE_HEADER: &str = "rhyme_unit\tsyllables_after\tfamily_size\trepresentative\trep_zipf\tspelling_variants\tall_words";

/// One output file produced by a run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WrittenFile {
    pub path: PathBuf,
    pub rows: usize,
}

/// Write the rank-ordered rows according to the configured mode.
///
/// Masculine-only mode produces a single file without a type column.
/// All-stress-patterns mode produces one file per pattern plus a combined
/// file with a leading type column; each file keeps the global rank order,
/// which is also the per-pattern rank order since the sort keys do not
/// involve the pattern.
pub fn write_families(rows: &[FamilyRow], out_dir: &Path, mode: Mode) -> Result<Vec<WrittenFile>> {
    fs::create_dir_all(out_dir)
        .with_context(|| format!("Failed to create output directory: {:?}", out_dir))?;

    let mut written = Vec::new();
    match mode {
        Mode::MasculineOnly => {
            written.push(write_file(rows.iter(), &out_dir.join(BASIC_FILE_NAME), false)?);
        }
        Mode::AllStressPatterns => {
            for pattern in StressPattern::all() {
                let path = out_dir.join(format!("rhyme_families_{}.tsv", pattern));
                let rows = rows.iter().filter(|row| row.pattern == pattern);
                written.push(write_file(rows, &path, false)?);
            }
            written.push(write_file(rows.iter(), &out_dir.join(COMBINED_FILE_NAME), true)?);
        }
    }
    Ok(written)
}

fn write_file<'a>(
    rows: impl Iterator<Item = &'a FamilyRow>,
    path: &Path,
    with_type: bool,
) -> Result<WrittenFile> {
    let mut content = String::new();
    if with_type {
        content.push_str("type\t");
    }
    content.push_str(BASE_HEADER);
    content.push('\n');

    let mut count = 0;
    for row in rows {
        write_row(&mut content, row, with_type);
        count += 1;
    }

    fs::write(path, content).with_context(|| format!("Failed to write: {:?}", path))?;
    Ok(WrittenFile {
        path: path.to_path_buf(),
        rows: count,
    })
}

fn write_row(out: &mut String, row: &FamilyRow, with_type: bool) {
    if with_type {
        let _ = write!(out, "{}\t", row.pattern);
    }
    let _ = writeln!(
        out,
        "{}\t{}\t{}\t{}\t{:.2}\t{}\t{}",
        row.rhyme_unit,
        row.syllables_after,
        row.family_size,
        row.representative,
        row.rep_zipf,
        spelling_variants_field(&row.spelling_variants),
        all_words_field(&row.members),
    );
}

/// `night (5.2),  write (4.6)` style pairs.
pub fn spelling_variants_field(variants: &[(String, f64)]) -> String {
    variants
        .iter()
        .map(|(word, zipf)| format!("{} ({:.1})", word, zipf))
        .collect::<Vec<_>>()
        .join(",  ")
}

fn all_words_field(members: &[(String, f64)]) -> String {
    members
        .iter()
        .map(|(word, _)| word.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}
