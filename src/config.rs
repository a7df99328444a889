use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const CONFIG_FILE_NAME: &str = ".rimerc.json";

/// Which rhyme classes the run keeps, and the output layout that follows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum Mode {
    /// Keep only masculine records; write a single output file.
    MasculineOnly,
    /// Classify everything; write one file per stress pattern plus a
    /// combined file with a type column.
    AllStressPatterns,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Phonetic dictionary in CMUdict format.
    #[serde(default = "default_dict_path")]
    pub dict_path: PathBuf,
    /// Word frequency file: `word<TAB>zipf` per line.
    #[serde(default = "default_frequency_path")]
    pub frequency_path: PathBuf,
    #[serde(default = "default_out_dir")]
    pub out_dir: PathBuf,
    /// Minimum Zipf score a word needs to join a family.
    #[serde(default = "default_zipf_cutoff")]
    pub zipf_cutoff: f64,
    /// Families smaller than this are dropped after aggregation.
    #[serde(default = "default_min_family_size")]
    pub min_family_size: usize,
    /// Cap on distinct-ending representatives per family.
    #[serde(default = "default_max_spelling_variants")]
    pub max_spelling_variants: usize,
    /// Length of the orthographic ending used to group spelling variants.
    #[serde(default = "default_ending_length")]
    pub ending_length: usize,
    #[serde(default = "default_mode")]
    pub mode: Mode,
    /// Families shown in the terminal preview table.
    #[serde(default = "default_top_preview")]
    pub top_preview: usize,
}

fn default_dict_path() -> PathBuf {
    PathBuf::from("./cmudict.dict")
}

fn default_frequency_path() -> PathBuf {
    PathBuf::from("./wordfreq-en.tsv")
}

fn default_out_dir() -> PathBuf {
    PathBuf::from(".")
}

fn default_zipf_cutoff() -> f64 {
    2.5
}

fn default_min_family_size() -> usize {
    3
}

fn default_max_spelling_variants() -> usize {
    6
}

fn default_ending_length() -> usize {
    3
}

fn default_mode() -> Mode {
    Mode::MasculineOnly
}

fn default_top_preview() -> usize {
    20
}

impl Default for Config {
    fn default() -> Self {
        Self {
            dict_path: default_dict_path(),
            frequency_path: default_frequency_path(),
            out_dir: default_out_dir(),
            zipf_cutoff: default_zipf_cutoff(),
            min_family_size: default_min_family_size(),
            max_spelling_variants: default_max_spelling_variants(),
            ending_length: default_ending_length(),
            mode: default_mode(),
            top_preview: default_top_preview(),
        }
    }
}

/// Invalid configuration values. Fatal at startup, before any processing.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("zipfCutoff must be a finite non-negative number (got {0})")]
    InvalidCutoff(f64),
    #[error("minFamilySize must be at least 1")]
    MinFamilySizeZero,
    #[error("maxSpellingVariants must be at least 1")]
    MaxVariantsZero,
    #[error("endingLength must be at least 1")]
    EndingLengthZero,
}

impl Config {
    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.zipf_cutoff.is_finite() || self.zipf_cutoff < 0.0 {
            return Err(ConfigError::InvalidCutoff(self.zipf_cutoff));
        }
        if self.min_family_size == 0 {
            return Err(ConfigError::MinFamilySizeZero);
        }
        if self.max_spelling_variants == 0 {
            return Err(ConfigError::MaxVariantsZero);
        }
        if self.ending_length == 0 {
            return Err(ConfigError::EndingLengthZero);
        }
        Ok(())
    }
}

pub fn default_config_json() -> Result<String> {
    let config = Config::default();
    serde_json::to_string_pretty(&config).context("Failed to generate default config.")
}

pub fn find_config_file(start_dir: &Path) -> Option<PathBuf> {
    let mut current = start_dir.to_path_buf();

    loop {
        let config_path = current.join(CONFIG_FILE_NAME);
        if config_path.exists() {
            return Some(config_path);
        }
        if current.join(".git").exists() {
            return None;
        }
        if !current.pop() {
            return None;
        }
    }
}

/// Result of loading configuration.
pub struct ConfigLoadResult {
    pub config: Config,
    /// True if config was loaded from a file, false if using defaults.
    pub from_file: bool,
}

pub fn load_config(start_dir: &Path) -> Result<ConfigLoadResult> {
    match find_config_file(start_dir) {
        Some(path) => {
            let content = fs::read_to_string(&path)?;
            let config: Config = serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse config file: {:?}", path))?;
            config.validate()?;
            Ok(ConfigLoadResult {
                config,
                from_file: true,
            })
        }
        None => Ok(ConfigLoadResult {
            config: Config::default(),
            from_file: false,
        }),
    }
}
