use anyhow::Result;

use super::super::args::CommonArgs;
use crate::config::{Config, load_config};

/// Load config from the working directory and apply the shared dataset
/// path overrides. Command-specific overrides are applied by the caller,
/// which re-validates afterwards.
pub fn resolve_config(common: &CommonArgs) -> Result<Config> {
    let cwd = std::env::current_dir()?;
    let mut config = load_config(&cwd)?.config;

    if let Some(dict) = &common.dict {
        config.dict_path = dict.clone();
    }
    if let Some(frequencies) = &common.frequencies {
        config.frequency_path = frequencies.clone();
    }

    Ok(config)
}
