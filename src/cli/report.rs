//! Report formatting and printing utilities.
//!
//! This module displays run results in a compact terminal format.
//! Separate from core logic to allow rime to be used as a library; every
//! printer takes a writer so tests can capture output.

use std::io::{self, Write};

use colored::Colorize;
use unicode_width::UnicodeWidthStr;

use super::commands::{
    BuildSummary, CommandResult, CommandSummary, InitSummary, LookupSummary,
};
use crate::config::{CONFIG_FILE_NAME, Mode};
use crate::core::FamilyRow;
use crate::tsv_writer::spelling_variants_field;

/// Success mark for consistent output formatting.
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓

/// Failure mark for consistent output formatting.
pub const FAILURE_MARK: &str = "\u{2718}"; // ✘

/// Widest the spelling-variants preview column gets before truncation.
const MAX_VARIANTS_WIDTH: usize = 45;

pub fn print(result: &CommandResult, verbose: bool) {
    print_to(result, verbose, &mut io::stdout().lock());
}

pub fn print_to<W: Write>(result: &CommandResult, verbose: bool, writer: &mut W) {
    match &result.summary {
        CommandSummary::Build(summary) => print_build(summary, verbose, writer),
        CommandSummary::Lookup(summary) => print_lookup(summary, writer),
        CommandSummary::Init(summary) => print_init(summary, writer),
    }
}

// ============================================================
// Build
// ============================================================

fn print_build<W: Write>(summary: &BuildSummary, verbose: bool, writer: &mut W) {
    let stats = &summary.stats;

    let _ = writeln!(
        writer,
        "Loaded {} dictionary entries ({} records), {} frequency scores",
        group_thousands(summary.raw_entries),
        group_thousands(stats.records),
        group_thousands(summary.frequency_words),
    );

    print_skip_warnings(summary, verbose, writer);

    let mut filter_line = format!(
        "{} records retained (Zipf >= {}) | {} below cutoff | {} stress-less",
        group_thousands(stats.retained),
        summary.zipf_cutoff,
        group_thousands(stats.below_cutoff),
        group_thousands(stats.stressless),
    );
    if summary.mode == Mode::MasculineOnly {
        filter_line.push_str(&format!(
            " | {} non-masculine",
            group_thousands(stats.filtered_pattern)
        ));
    }
    let _ = writeln!(writer, "{}", filter_line);

    let _ = writeln!(
        writer,
        "{} distinct rhyme units, {} families kept",
        group_thousands(stats.candidate_families),
        group_thousands(stats.families),
    );

    if !summary.preview.is_empty() {
        let _ = writeln!(writer);
        print_preview_table(&summary.preview, summary.mode, writer);
    }

    let _ = writeln!(writer);
    for file in &summary.written {
        let _ = writeln!(
            writer,
            "{} {}",
            SUCCESS_MARK.green(),
            format!(
                "Wrote {} families -> {}",
                group_thousands(file.rows),
                file.path.display()
            )
            .green()
        );
    }
}

fn print_skip_warnings<W: Write>(summary: &BuildSummary, verbose: bool, writer: &mut W) {
    let skipped = summary.entry_warnings.len();
    if skipped > 0 {
        if verbose {
            for warning in &summary.entry_warnings {
                let _ = writeln!(
                    writer,
                    "{} line {}: skipped \"{}\" ({})",
                    "warning:".bold().yellow(),
                    warning.line,
                    warning.word,
                    warning.error
                );
            }
        } else {
            let _ = writeln!(
                writer,
                "{} {} dictionary entr{} skipped (use {} for details)",
                "warning:".bold().yellow(),
                skipped,
                if skipped == 1 { "y" } else { "ies" },
                "-v".cyan()
            );
        }
    }

    if summary.frequency_malformed > 0 {
        let _ = writeln!(
            writer,
            "{} {} malformed frequency line(s) skipped",
            "warning:".bold().yellow(),
            summary.frequency_malformed
        );
    }
}

fn print_preview_table<W: Write>(rows: &[FamilyRow], mode: Mode, writer: &mut W) {
    let unit_width = rows
        .iter()
        .map(|row| row.rhyme_unit.width())
        .max()
        .unwrap_or(0)
        .max("Rhyme Unit".width());

    let type_width = if mode == Mode::AllStressPatterns { 11 } else { 0 };
    let header_type = if mode == Mode::AllStressPatterns {
        format!("{:<11}", "Type")
    } else {
        String::new()
    };

    let _ = writeln!(
        writer,
        "{}",
        format!(
            "{:<5} {}{:<unit_width$} {:>3} {:>5}  {:<16} {:>5}  Spelling variants",
            "Rank", header_type, "Rhyme Unit", "Syl", "Size", "Representative", "Zipf",
        )
        .bold()
    );
    let _ = writeln!(
        writer,
        "{}",
        "-".repeat(5 + 1 + type_width + unit_width + 1 + 3 + 1 + 5 + 2 + 16 + 1 + 5 + 2 + MAX_VARIANTS_WIDTH)
    );

    for (rank, row) in rows.iter().enumerate() {
        let type_field = if mode == Mode::AllStressPatterns {
            format!("{:<11}", row.pattern.to_string())
        } else {
            String::new()
        };
        let _ = writeln!(
            writer,
            "{:<5} {}{:<unit_width$} {:>3} {:>5}  {:<16} {:>5.2}  {}",
            rank + 1,
            type_field,
            row.rhyme_unit,
            row.syllables_after,
            row.family_size,
            row.representative,
            row.rep_zipf,
            truncate_to_width(&spelling_variants_field(&row.spelling_variants), MAX_VARIANTS_WIDTH),
        );
    }
}

// ============================================================
// Lookup
// ============================================================

fn print_lookup<W: Write>(summary: &LookupSummary, writer: &mut W) {
    if summary.variants.is_empty() {
        let _ = writeln!(
            writer,
            "{} {}",
            FAILURE_MARK.red(),
            format!("\"{}\" not found in dictionary", summary.word).red()
        );
        return;
    }

    let zipf = match summary.zipf {
        Some(zipf) => format!("Zipf {:.2}", zipf),
        None => "no frequency score".to_string(),
    };
    let _ = writeln!(writer, "{} ({})", summary.word.bold(), zipf);

    for variant in &summary.variants {
        match &variant.rhyme {
            Some((unit, pattern)) => {
                let _ = writeln!(
                    writer,
                    "  {}. {}  {} {}  ({})",
                    variant.variant,
                    variant.transcription,
                    "->".blue(),
                    unit.cyan(),
                    pattern
                );
            }
            None => {
                let _ = writeln!(
                    writer,
                    "  {}. {}  {}",
                    variant.variant,
                    variant.transcription,
                    "(no primary stress, cannot rhyme)".dimmed()
                );
            }
        }
    }
}

// ============================================================
// Init
// ============================================================

fn print_init<W: Write>(summary: &InitSummary, writer: &mut W) {
    if summary.created {
        let _ = writeln!(
            writer,
            "{} {}",
            SUCCESS_MARK.green(),
            format!("Created {}", CONFIG_FILE_NAME).green()
        );
    }
}

// ============================================================
// Helpers
// ============================================================

/// `1234567` -> `"1,234,567"`.
fn group_thousands(n: usize) -> String {
    let digits = n.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}

/// Truncate to a display width, appending an ellipsis when cut.
fn truncate_to_width(text: &str, max_width: usize) -> String {
    if text.width() <= max_width {
        return text.to_string();
    }
    let mut out = String::new();
    for ch in text.chars() {
        let candidate = format!("{}{}", out, ch);
        if candidate.width() > max_width.saturating_sub(1) {
            break;
        }
        out = candidate;
    }
    out.push('…');
    out
}
