use anyhow::Result;
use insta_cmd::assert_cmd_snapshot;
use pretty_assertions::assert_eq;

use crate::{CliTest, THRESHOLD, large_file};

const LOG_FILE: &str = "translated_files_log.txt";

fn data_lines(content: &str) -> Vec<&str> {
    content.lines().skip(1).collect()
}

#[test]
fn test_translate_without_command_uses_current_directory() -> Result<()> {
    let test = CliTest::with_file(
        "strings.csv",
        &large_file("KEY;ENGLISH;SPANISH;NOTES", "menu.ok;Welcome;Bienvenido, Rey;Rey"),
    )?;

    assert_cmd_snapshot!(test.command(), @r"
    success: true
    exit_code: 0
    ----- stdout -----
    Processed 1 files. Log: translated_files_log.txt

    ----- stderr -----
    ");

    let content = test.read_file("strings.csv")?;
    assert_eq!(content.lines().next(), Some("KEY;ENGLISH;SPANISH;NOTES"));
    assert!(
        data_lines(&content)
            .iter()
            .all(|line| *line == "menu.ok;Welcome;Bem-vindo, Rei;Rey")
    );
    assert_eq!(test.read_file(LOG_FILE)?, "strings.csv;SCRIPT;TRADUZIDO\n");
    Ok(())
}

#[test]
fn test_translate_mixed_rows() -> Result<()> {
    let mut content = large_file("ID;SPANISH;X", "pad;Hola;pad");
    content.push_str("# Rey;Rey;Rey\n");
    content.push_str("a;[ICON] Guardar;Guardar\n");
    content.push_str("b;Hola $NAME$;c\n");
    content.push_str("c;¡Siguiente!;;;\n");
    content.push_str("d;REY\n");
    content.push_str("malformed\n");
    let test = CliTest::with_file("ui.csv", &content)?;

    assert_cmd_snapshot!(test.translate_command().arg("--verbose"), @r"
    success: true
    exit_code: 0
    ----- stdout -----
      ui.csv  column 1: 2 translated, 787 ignored, 2 blocked, 1 comments, 1 malformed
        blocked: 1 bracketed token, 1 placeholder
    Processed 1 files. Log: translated_files_log.txt

    ----- stderr -----
    ");

    let rewritten = test.read_file("ui.csv")?;
    let tail: Vec<&str> = rewritten.lines().rev().take(6).collect();
    assert_eq!(
        tail,
        vec![
            "malformed",
            "d;Rei",
            "c;Próximo!;;;",
            "b;Hola $NAME$;c",
            "a;[ICON] Guardar;Guardar",
            "# Rey;Rey;Rey",
        ]
    );
    Ok(())
}

#[test]
fn test_translate_size_threshold_boundary() -> Result<()> {
    let test = CliTest::new()?;
    let header = "SPANISH\n";
    let exact = format!("{}{}", header, "a".repeat(THRESHOLD - header.len()));
    let over = format!("{}{}", header, "a".repeat(THRESHOLD - header.len() + 1));
    test.write_file("exact.csv", &exact)?;
    test.write_file("over.csv", &over)?;

    assert_cmd_snapshot!(test.translate_command().arg("--verbose"), @r"
    success: true
    exit_code: 0
    ----- stdout -----
      over.csv  column 0: 0 translated, 1 ignored, 0 blocked, 0 comments, 0 malformed
    Processed 1 files. Log: translated_files_log.txt

    ----- stderr -----
    note: skipped exact.csv (10240 bytes, not above the 10240 byte threshold)
    ");

    assert_eq!(test.read_file(LOG_FILE)?, "over.csv;SCRIPT;TRADUZIDO\n");
    // rewritten with a trailing newline
    assert_eq!(test.read_file("over.csv")?, format!("{}\n", over));
    assert_eq!(test.read_file("exact.csv")?, exact);
    Ok(())
}

#[test]
fn test_translate_skips_files_without_target_column() -> Result<()> {
    let test = CliTest::new()?;
    let content = large_file("A;B;C", "Rey;Rey;Rey");
    test.write_file("narrow.csv", &content)?;
    test.write_file("notes.txt", &large_file("SPANISH", "Rey"))?;

    assert_cmd_snapshot!(test.translate_command().arg("-v"), @r"
    success: true
    exit_code: 0
    ----- stdout -----
    Processed 0 files. Log: translated_files_log.txt

    ----- stderr -----
    note: skipped narrow.csv (no target column in header)
    ");

    assert_eq!(test.read_file("narrow.csv")?, content);
    assert_eq!(test.read_file(LOG_FILE)?, "");
    Ok(())
}

#[test]
fn test_translate_overwrites_previous_log() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(LOG_FILE, "old.csv;SCRIPT;TRADUZIDO\n")?;
    test.write_file("b.csv", &large_file("SPANISH", "Reina"))?;
    test.write_file("a.csv", &large_file("SPANISH", "Hola"))?;

    let output = test.translate_command().output()?;
    assert!(output.status.success());

    assert_eq!(
        test.read_file(LOG_FILE)?,
        "a.csv;SCRIPT;TRADUZIDO\nb.csv;SCRIPT;TRADUZIDO\n"
    );
    Ok(())
}

#[test]
fn test_translate_dry_run() -> Result<()> {
    let content = large_file("SPANISH", "Hijo");
    let test = CliTest::with_file("family.csv", &content)?;

    assert_cmd_snapshot!(test.translate_command().arg("--dry-run"), @r"
    success: true
    exit_code: 0
    ----- stdout -----
      family.csv  column 0: 2047 translated, 0 ignored, 0 blocked, 0 comments, 0 malformed
    Dry run: would process 1 files.

    ----- stderr -----
    ");

    assert_eq!(test.read_file("family.csv")?, content);
    assert!(!test.root().join(LOG_FILE).exists());
    Ok(())
}

#[test]
fn test_translate_min_size_flag() -> Result<()> {
    let test = CliTest::with_file("tiny.csv", "SPANISH\nCerrar\n")?;

    let output = test.translate_command().args(["--min-size", "0"]).output()?;
    assert!(output.status.success());

    assert_eq!(test.read_file("tiny.csv")?, "SPANISH\nFechar\n");
    Ok(())
}

#[test]
fn test_translate_dir_flag() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("data/strings.csv", &large_file("SPANISH", "Cargar"))?;

    assert_cmd_snapshot!(test.translate_command().args(["--dir", "data"]), @r"
    success: true
    exit_code: 0
    ----- stdout -----
    Processed 1 files. Log: data/translated_files_log.txt

    ----- stderr -----
    ");

    assert!(data_lines(&test.read_file("data/strings.csv")?).iter().all(|l| *l == "Carregar"));
    assert!(test.root().join("data").join(LOG_FILE).exists());
    Ok(())
}

#[test]
fn test_translate_dir_comes_from_flag_only() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("data/strings.csv", &large_file("SPANISH", "Cargar"))?;
    test.write_file("here.csv", &large_file("SPANISH", "Cargar"))?;

    let output = test
        .translate_command()
        .env("ES2PT_DIR", test.root().join("data"))
        .output()?;
    assert!(output.status.success());

    assert!(data_lines(&test.read_file("here.csv")?).iter().all(|l| *l == "Carregar"));
    assert!(data_lines(&test.read_file("data/strings.csv")?).iter().all(|l| *l == "Cargar"));
    assert!(test.root().join(LOG_FILE).exists());
    Ok(())
}

#[test]
fn test_translate_with_config_file() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(
        ".es2ptrc.json",
        r#"{
            "targetColumn": "texto",
            "method": "DICT",
            "logFile": "log.txt",
            "dictionary": { "Hola": "Olá", "Guardar": "Gravar" }
        }"#,
    )?;
    test.write_file("ui.csv", &large_file("ID;TEXTO", "1;Hola, Guardar"))?;

    assert_cmd_snapshot!(test.translate_command(), @r"
    success: true
    exit_code: 0
    ----- stdout -----
    Processed 1 files. Log: log.txt

    ----- stderr -----
    ");

    assert!(data_lines(&test.read_file("ui.csv")?).iter().all(|l| *l == "1;Olá, Gravar"));
    assert_eq!(test.read_file("log.txt")?, "ui.csv;DICT;TRADUZIDO\n");
    Ok(())
}

#[test]
fn test_translate_invalid_config() -> Result<()> {
    let test = CliTest::with_file(".es2ptrc.json", r#"{ "dictionary": { "Hola": 1 } }"#)?;

    let output = test.translate_command().output()?;
    assert_eq!(output.status.code(), Some(2));
    let stderr = String::from_utf8(output.stderr)?;
    assert!(stderr.starts_with("Error: Dictionary value for \"Hola\" must be a string"));
    Ok(())
}

#[test]
fn test_translate_missing_dir() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.translate_command().args(["--dir", "missing"]).output()?;
    assert_eq!(output.status.code(), Some(2));
    let stderr = String::from_utf8(output.stderr)?;
    assert!(stderr.starts_with("Error: Failed to open directory: missing"));
    Ok(())
}
