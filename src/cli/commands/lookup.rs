use anyhow::Result;

use super::super::args::LookupCommand;
use super::helper::resolve_config;
use super::{CommandResult, CommandSummary, LookupSummary, LookupVariant};
use crate::core::{extract_rhyme_unit, frequency, lexicon};

pub fn lookup(cmd: LookupCommand) -> Result<CommandResult> {
    let config = resolve_config(&cmd.args.common)?;

    let load = lexicon::load(&config.dict_path)?;
    let frequencies = frequency::load(&config.frequency_path)?;

    let word = cmd.word.to_lowercase();
    let variants = load
        .lexicon
        .variants_of(&word)
        .into_iter()
        .map(|record| {
            let transcription = record
                .phonemes
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join(" ");
            let rhyme = extract_rhyme_unit(&record.phonemes)
                .ok()
                .map(|(unit, pattern)| (unit.to_string(), pattern));
            LookupVariant {
                variant: record.variant,
                transcription,
                rhyme,
            }
        })
        .collect();

    Ok(CommandResult {
        summary: CommandSummary::Lookup(LookupSummary {
            zipf: frequencies.index.score(&word),
            word,
            variants,
        }),
    })
}
