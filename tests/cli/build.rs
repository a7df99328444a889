use anyhow::Result;
use pretty_assertions::assert_eq;

use crate::{CliTest, stderr_of, stdout_of};

#[test]
fn test_build_masculine_only_default() -> Result<()> {
    let test = CliTest::with_datasets()?;

    let output = test.build_command().output()?;
    assert_eq!(output.status.code(), Some(0), "{}", stderr_of(&output));

    let tsv = test.read_file("rhyme_families.tsv")?;
    let lines: Vec<&str> = tsv.lines().collect();
    assert_eq!(
        lines[0],
        "rhyme_unit\tsyllables_after\tfamily_size\trepresentative\trep_zipf\tspelling_variants\tall_words"
    );

    // two families of size 3 survive the default min size; the higher
    // representative score ranks first
    assert_eq!(
        lines[1],
        "AY1 T\t0\t3\tright\t5.52\tright (5.5),  write (4.6)\tright, night, write"
    );
    assert_eq!(
        lines[2],
        "AE1 T\t0\t3\tcat\t5.06\tcat (5.1),  hat (4.0),  bat (3.9)\tcat, hat, bat"
    );
    assert_eq!(lines.len(), 3);

    let stdout = stdout_of(&output);
    assert!(stdout.contains("2 dictionary entries skipped"));
    assert!(stdout.contains("Wrote 2 families"));
    Ok(())
}

#[test]
fn test_build_all_stress_patterns() -> Result<()> {
    let test = CliTest::with_datasets()?;

    let output = test
        .build_command()
        .args(["--mode", "all-stress-patterns"])
        .output()?;
    assert_eq!(output.status.code(), Some(0), "{}", stderr_of(&output));

    let masculine = test.read_file("rhyme_families_masculine.tsv")?;
    assert!(masculine.contains("AY1 T\t"));
    assert!(masculine.contains("AE1 T\t"));

    let feminine = test.read_file("rhyme_families_feminine.tsv")?;
    assert!(feminine.contains("AH1 V ER0\t1\t3\tcover\t4.61"));

    let dactylic = test.read_file("rhyme_families_dactylic.tsv")?;
    assert!(dactylic.contains("AE1 T ER0 IY0\t2\t3\tbattery\t4.29\tbattery (4.3)\t"));

    // combined file carries the type column and the global rank order
    let combined = test.read_file("rhyme_families_all.tsv")?;
    let lines: Vec<&str> = combined.lines().collect();
    assert!(lines[0].starts_with("type\trhyme_unit\t"));
    assert!(lines[1].starts_with("masculine\tAY1 T\t"));
    assert!(lines[2].starts_with("masculine\tAE1 T\t"));
    assert!(lines[3].starts_with("feminine\tAH1 V ER0\t"));
    assert!(lines[4].starts_with("dactylic\tAE1 T ER0 IY0\t"));
    assert_eq!(lines.len(), 5);
    Ok(())
}

#[test]
fn test_same_key_variants_count_once() -> Result<()> {
    let test = CliTest::with_datasets()?;

    // both ROUTE transcriptions reduce to the same rhyme unit; with the
    // size floor lowered the family must still have exactly one member
    let output = test
        .build_command()
        .args(["--min-family-size", "1"])
        .output()?;
    assert_eq!(output.status.code(), Some(0), "{}", stderr_of(&output));

    let tsv = test.read_file("rhyme_families.tsv")?;
    let route_row = tsv
        .lines()
        .find(|line| line.starts_with("UW1 T\t"))
        .expect("route family present");
    assert_eq!(route_row, "UW1 T\t0\t1\troute\t4.21\troute (4.2)\troute");
    Ok(())
}

#[test]
fn test_different_key_variants_join_both_families() -> Result<()> {
    let test = CliTest::with_datasets()?;

    let output = test
        .build_command()
        .args(["--mode", "all-stress-patterns"])
        .args(["--min-family-size", "1"])
        .output()?;
    assert_eq!(output.status.code(), Some(0), "{}", stderr_of(&output));

    let combined = test.read_file("rhyme_families_all.tsv")?;
    let either_rows: Vec<&str> = combined
        .lines()
        .filter(|line| line.ends_with("\teither"))
        .collect();
    assert_eq!(either_rows.len(), 2);
    assert!(either_rows.iter().any(|row| row.contains("IY1 DH ER0")));
    assert!(either_rows.iter().any(|row| row.contains("AY1 DH ER0")));
    Ok(())
}

#[test]
fn test_min_family_size_drops_small_families() -> Result<()> {
    let test = CliTest::with_datasets()?;

    let output = test.build_command().output()?;
    assert_eq!(output.status.code(), Some(0), "{}", stderr_of(&output));

    // UW1 T has a single qualifying member and the default floor is 3
    let tsv = test.read_file("rhyme_families.tsv")?;
    assert!(!tsv.contains("UW1 T"));
    Ok(())
}

#[test]
fn test_raising_cutoff_shrinks_families() -> Result<()> {
    let test = CliTest::with_datasets()?;

    let output = test
        .build_command()
        .args(["--cutoff", "5.0", "--min-family-size", "1"])
        .output()?;
    assert_eq!(output.status.code(), Some(0), "{}", stderr_of(&output));

    let tsv = test.read_file("rhyme_families.tsv")?;
    // only cat (5.06) clears the cutoff in the AE1 T family
    assert!(tsv.contains("AE1 T\t0\t1\tcat\t"));
    Ok(())
}

#[test]
fn test_build_is_idempotent() -> Result<()> {
    let test = CliTest::with_datasets()?;

    let output = test.build_command().output()?;
    assert_eq!(output.status.code(), Some(0), "{}", stderr_of(&output));
    let first = test.read_file("rhyme_families.tsv")?;
    let first_stdout = stdout_of(&output);

    let output = test.build_command().output()?;
    let second = test.read_file("rhyme_families.tsv")?;

    assert_eq!(first, second);
    assert_eq!(first_stdout, stdout_of(&output));
    Ok(())
}

#[test]
fn test_verbose_lists_skipped_entries() -> Result<()> {
    let test = CliTest::with_datasets()?;

    let output = test.build_command().arg("--verbose").output()?;
    assert_eq!(output.status.code(), Some(0), "{}", stderr_of(&output));

    let stdout = stdout_of(&output);
    assert!(stdout.contains("badtoken"));
    assert!(stdout.contains("unknown phoneme token \"QX\""));
    assert!(stdout.contains("psst"));
    assert!(stdout.contains("no vowel phoneme"));
    Ok(())
}

#[test]
fn test_config_file_values_are_used() -> Result<()> {
    let test = CliTest::with_datasets()?;
    test.write_file(
        ".rimerc.json",
        r#"{
            "dictPath": "cmudict.dict",
            "frequencyPath": "wordfreq-en.tsv",
            "outDir": "out",
            "minFamilySize": 1
        }"#,
    )?;

    let output = test.command().arg("build").output()?;
    assert_eq!(output.status.code(), Some(0), "{}", stderr_of(&output));

    let tsv = test.read_file("out/rhyme_families.tsv")?;
    assert!(tsv.contains("UW1 T"));
    Ok(())
}

#[test]
fn test_invalid_config_fails_before_processing() -> Result<()> {
    let test = CliTest::with_datasets()?;
    test.write_file(".rimerc.json", r#"{ "zipfCutoff": -2.0 }"#)?;

    let output = test.build_command().output()?;
    assert_eq!(output.status.code(), Some(2));
    assert!(stderr_of(&output).contains("zipfCutoff"));
    Ok(())
}

#[test]
fn test_invalid_cli_override_fails() -> Result<()> {
    let test = CliTest::with_datasets()?;

    let output = test
        .build_command()
        .args(["--min-family-size", "0"])
        .output()?;
    assert_eq!(output.status.code(), Some(2));
    assert!(stderr_of(&output).contains("minFamilySize"));
    Ok(())
}

#[test]
fn test_missing_dictionary_is_fatal() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(crate::FREQ_FILE, crate::SAMPLE_FREQS)?;

    let output = test.build_command().output()?;
    assert_eq!(output.status.code(), Some(2));
    assert!(stderr_of(&output).contains("dictionary"));
    Ok(())
}
