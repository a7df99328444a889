use anyhow::Result;
use pretty_assertions::assert_eq;

use crate::{CliTest, DICT_FILE, FREQ_FILE, stderr_of, stdout_of};

fn lookup_command(test: &CliTest, word: &str) -> std::process::Command {
    let mut command = test.command();
    command
        .arg("lookup")
        .arg(word)
        .args(["--dict", DICT_FILE])
        .args(["--frequencies", FREQ_FILE]);
    command
}

#[test]
fn test_lookup_word_with_variants() -> Result<()> {
    let test = CliTest::with_datasets()?;

    let output = lookup_command(&test, "either").output()?;
    assert_eq!(output.status.code(), Some(0), "{}", stderr_of(&output));

    let stdout = stdout_of(&output);
    assert!(stdout.contains("either (Zipf 5.31)"));
    assert!(stdout.contains("IY1 DH ER0"));
    assert!(stdout.contains("AY1 DH ER0"));
    assert!(stdout.contains("(feminine)"));
    Ok(())
}

#[test]
fn test_lookup_is_case_insensitive() -> Result<()> {
    let test = CliTest::with_datasets()?;

    let output = lookup_command(&test, "CAT").output()?;
    assert_eq!(output.status.code(), Some(0), "{}", stderr_of(&output));

    let stdout = stdout_of(&output);
    assert!(stdout.contains("AE1 T"));
    assert!(stdout.contains("(masculine)"));
    Ok(())
}

#[test]
fn test_lookup_stressless_word() -> Result<()> {
    let test = CliTest::with_datasets()?;

    let output = lookup_command(&test, "a").output()?;
    assert_eq!(output.status.code(), Some(0), "{}", stderr_of(&output));

    let stdout = stdout_of(&output);
    assert!(stdout.contains("no primary stress"));
    Ok(())
}

#[test]
fn test_lookup_unknown_word_fails() -> Result<()> {
    let test = CliTest::with_datasets()?;

    let output = lookup_command(&test, "zyzzyva").output()?;
    assert_eq!(output.status.code(), Some(1));
    assert!(stdout_of(&output).contains("not found in dictionary"));
    Ok(())
}
