use std::{fs, path::PathBuf, process::Command};

use anyhow::{Context, Result};
use tempfile::TempDir;

mod build;
mod init;
mod lookup;

const BIN: &str = env!("CARGO_BIN_EXE_rime");

pub const DICT_FILE: &str = "cmudict.dict";
pub const FREQ_FILE: &str = "wordfreq-en.tsv";

/// Small but representative dictionary: rhyming masculine families,
/// feminine and dactylic families, variant pronunciations (same-key and
/// different-key), a stress-less word and two malformed lines.
pub const SAMPLE_DICT: &str = "\
;;; sample dictionary
CAT K AE1 T
HAT HH AE1 T
BAT B AE1 T
NIGHT N AY1 T
RIGHT R AY1 T
WRITE R AY1 T
EITHER IY1 DH ER0
EITHER(2) AY1 DH ER0
ROUTE R UW1 T
ROUTE(2) R UW1 T
LOVER L AH1 V ER0
COVER K AH1 V ER0
DISCOVER D IH0 S K AH1 V ER0
FLATTERY F L AE1 T ER0 IY0
BATTERY B AE1 T ER0 IY0
CATTERY K AE1 T ER0 IY0
A AH0
PSST P S S T
BADTOKEN QX AE1 T
";

pub const SAMPLE_FREQS: &str = "\
cat\t5.06
hat\t4.01
bat\t3.92
night\t5.19
right\t5.52
write\t4.63
either\t5.31
route\t4.21
lover\t4.42
cover\t4.61
discover\t4.33
flattery\t2.96
battery\t4.29
cattery\t2.61
a\t6.51
";

pub struct CliTest {
    _temp_dir: TempDir,
    project_dir: PathBuf,
}

impl CliTest {
    pub fn new() -> Result<Self> {
        let temp_dir = TempDir::new()?;
        let project_dir = temp_dir.path().canonicalize()?;
        // stop the config-file search at the project boundary
        fs::create_dir(project_dir.join(".git"))?;
        Ok(Self {
            _temp_dir: temp_dir,
            project_dir,
        })
    }

    /// A test project with the sample dictionary and frequency files.
    pub fn with_datasets() -> Result<Self> {
        let test = Self::new()?;
        test.write_file(DICT_FILE, SAMPLE_DICT)?;
        test.write_file(FREQ_FILE, SAMPLE_FREQS)?;
        Ok(test)
    }

    pub fn write_file(&self, path: &str, content: &str) -> Result<()> {
        let full_path = self.project_dir.join(path);
        if let Some(parent) = full_path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&full_path, content).with_context(|| format!("write {:?}", full_path))
    }

    pub fn read_file(&self, path: &str) -> Result<String> {
        let full_path = self.project_dir.join(path);
        fs::read_to_string(&full_path).with_context(|| format!("read {:?}", full_path))
    }

    pub fn command(&self) -> Command {
        let mut command = Command::new(BIN);
        command.current_dir(&self.project_dir);
        command
    }

    /// `rime build` preconfigured with the sample dataset paths.
    pub fn build_command(&self) -> Command {
        let mut command = self.command();
        command
            .arg("build")
            .args(["--dict", DICT_FILE])
            .args(["--frequencies", FREQ_FILE]);
        command
    }
}

pub fn stdout_of(output: &std::process::Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

pub fn stderr_of(output: &std::process::Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}
