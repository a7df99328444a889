use anyhow::{Context, Result};

use super::super::args::BuildCommand;
use super::helper::resolve_config;
use super::{BuildSummary, CommandResult, CommandSummary};
use crate::config::Config;
use crate::core::{PipelineOptions, frequency, lexicon, run_pipeline};
use crate::tsv_writer::write_families;

pub fn build(cmd: BuildCommand) -> Result<CommandResult> {
    let args = &cmd.args;
    let config = build_config(&cmd)?;

    let load = lexicon::load(&config.dict_path)?;
    let frequencies = frequency::load(&config.frequency_path)?;

    let options = PipelineOptions::from(&config);
    let outcome = run_pipeline(&load.lexicon, &frequencies.index, &options);

    let written = write_families(&outcome.rows, &config.out_dir, config.mode)?;

    let top = args.top.unwrap_or(config.top_preview);
    let preview = outcome.rows.iter().take(top).cloned().collect();

    Ok(CommandResult {
        summary: CommandSummary::Build(BuildSummary {
            raw_entries: load.raw_entries,
            entry_warnings: load.warnings,
            frequency_words: frequencies.index.len(),
            frequency_malformed: frequencies.malformed_lines,
            zipf_cutoff: config.zipf_cutoff,
            mode: config.mode,
            stats: outcome.stats,
            preview,
            written,
        }),
    })
}

fn build_config(cmd: &BuildCommand) -> Result<Config> {
    let args = &cmd.args;
    let mut config = resolve_config(&args.common)?;

    if let Some(out_dir) = &args.out_dir {
        config.out_dir = out_dir.clone();
    }
    if let Some(cutoff) = args.cutoff {
        config.zipf_cutoff = cutoff;
    }
    if let Some(min_family_size) = args.min_family_size {
        config.min_family_size = min_family_size;
    }
    if let Some(max_variants) = args.max_variants {
        config.max_spelling_variants = max_variants;
    }
    if let Some(ending_length) = args.ending_length {
        config.ending_length = ending_length;
    }
    if let Some(mode) = args.mode {
        config.mode = mode;
    }

    config
        .validate()
        .context("Invalid configuration after applying command-line overrides")?;
    Ok(config)
}
