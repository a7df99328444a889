use anyhow::Result;
use pretty_assertions::assert_eq;

use crate::{CliTest, stderr_of, stdout_of};

#[test]
fn test_init_creates_config() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.command().arg("init").output()?;
    assert_eq!(output.status.code(), Some(0), "{}", stderr_of(&output));
    assert!(stdout_of(&output).contains("Created .rimerc.json"));

    let config = test.read_file(".rimerc.json")?;
    assert!(config.contains("zipfCutoff"));
    assert!(config.contains("masculine-only"));
    Ok(())
}

#[test]
fn test_init_refuses_to_overwrite() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(".rimerc.json", "{}")?;

    let output = test.command().arg("init").output()?;
    assert_eq!(output.status.code(), Some(2));
    assert!(stderr_of(&output).contains("already exists"));
    Ok(())
}
