use anyhow::Result;
use pretty_assertions::assert_eq;

use crate::{CliTest, strip_timestamps};

#[test]
fn test_extract_writes_sorted_catalog() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("src/z-file.js", "_(\"Beta message\");\n_(\"Zebra message\");\n")?;
    test.write_file("src/a-file.js", "_(\"Beta message\");\n_(\"Alpha message\");\n")?;

    let output = test.extract_command().output()?;
    assert!(
        output.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    let catalog = test.read_file("locales/en.po")?;

    // Messages sorted by msgid regardless of scan order
    let alpha = catalog.find("msgid \"Alpha message\"").unwrap();
    let beta = catalog.find("msgid \"Beta message\"").unwrap();
    let zebra = catalog.find("msgid \"Zebra message\"").unwrap();
    assert!(alpha < beta && beta < zebra);

    // Shared message groups both references, sorted by path
    assert!(catalog.contains(
        "#: src/a-file.js:1\n#: src/z-file.js:1\nmsgid \"Beta message\"\nmsgstr \"\"\n"
    ));
    Ok(())
}

#[test]
fn test_extract_is_deterministic_across_runs() -> Result<()> {
    let test = CliTest::new()?;
    for i in 0..8 {
        test.write_file(
            &format!("src/mod{}.js", i),
            &format!("_(\"Message {}\");\ngettext(\"Shared text\");\n", i),
        )?;
    }

    test.extract_command().output()?;
    let first = test.read_file("locales/en.po")?;

    // Force a fresh output directory for the second run
    test.write_file(".xpotrc.json", r#"{ "outputDir": "./second" }"#)?;
    test.extract_command().output()?;
    let second = test.read_file("second/en.po")?;

    assert_eq!(strip_timestamps(&first), strip_timestamps(&second));
    Ok(())
}

#[test]
fn test_extract_rerun_leaves_unchanged_catalog_untouched() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("src/app.js", "_(\"Stable\");\n")?;

    test.extract_command().output()?;
    let first = test.read_file("locales/en.po")?;

    let output = test.extract_command().output()?;
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("unchanged"), "stdout: {}", stdout);

    // Byte-identical, timestamps included
    assert_eq!(first, test.read_file("locales/en.po")?);
    Ok(())
}

#[test]
fn test_extract_preserves_translations_on_merge() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(".xpotrc.json", r#"{ "locales": ["de"] }"#)?;
    test.write_file("src/app.js", "_(\"Save\");\n_(\"New message\");\n")?;
    test.write_file(
        "locales/de.po",
        "msgid \"Save\"\nmsgstr \"Speichern\"\n\nmsgid \"Dropped\"\nmsgstr \"Weg\"\n",
    )?;

    let output = test.extract_command().output()?;
    assert!(output.status.success());

    let catalog = test.read_file("locales/de.po")?;
    assert!(catalog.contains("msgid \"Save\"\nmsgstr \"Speichern\"\n"));
    assert!(catalog.contains("msgid \"New message\"\nmsgstr \"\"\n"));
    assert!(!catalog.contains("Dropped"));
    Ok(())
}

#[test]
fn test_extract_retain_obsolete_flag() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(".xpotrc.json", r#"{ "locales": ["de"] }"#)?;
    test.write_file("src/app.js", "_(\"Save\");\n")?;
    test.write_file("locales/de.po", "msgid \"Old\"\nmsgstr \"Alt\"\n")?;

    let output = test
        .extract_command()
        .arg("--retain-obsolete")
        .output()?;
    assert!(output.status.success());

    let catalog = test.read_file("locales/de.po")?;
    assert!(catalog.contains("msgid \"Old\"\nmsgstr \"Alt\"\n"));
    Ok(())
}

#[test]
fn test_extract_reports_unreadable_file_and_continues() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("src/good.js", "_(\"Survives\");\n")?;
    std::fs::write(test.root().join("src/bad.js"), [0xff, 0xfe, 0x00])?;

    let output = test.extract_command().output()?;
    // Per-file failures are reported and flip the exit status,
    // but the rest of the catalog is still written
    assert_eq!(output.status.code(), Some(1));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("extraction failed"), "stdout: {}", stdout);

    let catalog = test.read_file("locales/en.po")?;
    assert!(catalog.contains("msgid \"Survives\""));
    Ok(())
}

#[test]
fn test_extract_multiple_locales() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("src/app.js", "_(\"Hello\");\n")?;

    let output = test
        .extract_command()
        .args(["--locale", "en", "--locale", "de"])
        .output()?;
    assert!(output.status.success());

    assert!(test.read_file("locales/en.po")?.contains("\"Language: en\\n\""));
    assert!(test.read_file("locales/de.po")?.contains("\"Language: de\\n\""));
    Ok(())
}

#[test]
fn test_extract_respects_config_keywords() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(".xpotrc.json", r#"{ "keywords": ["tr"] }"#)?;
    test.write_file("src/app.js", "tr(\"Custom keyword\");\n_(\"Ignored\");\n")?;

    test.extract_command().output()?;

    let catalog = test.read_file("locales/en.po")?;
    assert!(catalog.contains("msgid \"Custom keyword\""));
    assert!(!catalog.contains("Ignored"));
    Ok(())
}

#[test]
fn test_extract_malformed_baseline_warns_and_starts_fresh() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("src/app.js", "_(\"Fresh\");\n")?;
    test.write_file("locales/en.po", "not a catalog at all\n")?;

    let output = test.extract_command().output()?;
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("malformed catalog"), "stdout: {}", stdout);

    let catalog = test.read_file("locales/en.po")?;
    assert!(catalog.contains("msgid \"Fresh\""));
    Ok(())
}
