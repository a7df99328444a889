use super::super::exit_status::ExitStatus;
use crate::config::Mode;
use crate::core::{EntryWarning, FamilyRow, PipelineStats, StressPattern};
use crate::tsv_writer::WrittenFile;

#[derive(Debug)]
pub enum CommandSummary {
    Build(BuildSummary),
    Lookup(LookupSummary),
    Init(InitSummary),
}

#[derive(Debug)]
pub struct BuildSummary {
    /// Dictionary data lines seen, skipped ones included.
    pub raw_entries: usize,
    /// Skipped dictionary entries, for the verbose report.
    pub entry_warnings: Vec<EntryWarning>,
    /// Words in the frequency index.
    pub frequency_words: usize,
    /// Frequency-file lines that did not parse.
    pub frequency_malformed: usize,
    pub zipf_cutoff: f64,
    pub mode: Mode,
    pub stats: PipelineStats,
    /// The highest-ranked rows, for the preview table.
    pub preview: Vec<FamilyRow>,
    pub written: Vec<WrittenFile>,
}

#[derive(Debug)]
pub struct LookupVariant {
    /// 1-based variant index from the dictionary.
    pub variant: u32,
    /// Space-joined ARPAbet transcription.
    pub transcription: String,
    /// Rhyme unit and classification; None when the record carries no
    /// primary stress.
    pub rhyme: Option<(String, StressPattern)>,
}

#[derive(Debug)]
pub struct LookupSummary {
    pub word: String,
    pub zipf: Option<f64>,
    pub variants: Vec<LookupVariant>,
}

#[derive(Debug)]
pub struct InitSummary {
    pub created: bool,
}

/// Result of running a rime command.
#[derive(Debug)]
pub struct CommandResult {
    pub summary: CommandSummary,
}

impl CommandResult {
    pub fn exit_status(&self) -> ExitStatus {
        match &self.summary {
            CommandSummary::Lookup(summary) if summary.variants.is_empty() => ExitStatus::Failure,
            _ => ExitStatus::Success,
        }
    }
}
