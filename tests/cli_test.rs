//! End-to-end tests of the isasheet binary

use std::fs;
use std::path::Path;
use std::process::{Command, Output};
use tempfile::tempdir;

fn isasheet(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_isasheet"))
        .args(args)
        .output()
        .expect("failed to run isasheet")
}

fn stdout(output: &Output) -> String {
    String::from_utf8(output.stdout.clone()).unwrap()
}

fn write_config(dir: &Path) -> String {
    let path = dir.join("isasheet.toml");
    fs::write(
        &path,
        r#"
[study]
experiment_name = "cfg_exp"
organism = "Mus musculus"
source_type = "ESC"
model_type = "embryoid body"
samples = ["EB-1", "EB-2"]

[library]
kit = "10x 3' v3"
type = "3'"

[columns]
sample_characteristics = ["day"]
"#,
    )
    .unwrap();
    path.to_string_lossy().into_owned()
}

#[test]
fn test_show_sample_from_flags() {
    let output = isasheet(&[
        "show",
        "sample",
        "--experiment",
        "exp",
        "--organism",
        "human",
        "--sample",
        "S-1",
        "--sample",
        "S-2",
    ]);
    assert!(output.status.success());

    let text = stdout(&output);
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 3);
    assert!(lines[0].starts_with("Source Name\tCharacteristics[Organism]"));
    assert!(lines[1].starts_with("S_1\tHomo sapiens\tNCBITAXON\t"));
    assert!(lines[2].starts_with("S_2\t"));
}

#[test]
fn test_show_assay_json_from_config() {
    let dir = tempdir().unwrap();
    let config = write_config(dir.path());

    let output = isasheet(&["show", "assay", "--config", &config, "--json"]);
    assert!(output.status.success());

    let table: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();
    let header = table["header"].as_array().unwrap();
    let rows = table["rows"].as_array().unwrap();
    assert_eq!(header.len(), 15);
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[1][4], "EB_2_GEX");
    assert_eq!(rows[0][6], "10x 3' v3");
}

#[test]
fn test_flags_override_config_samples() {
    let dir = tempdir().unwrap();
    let config = write_config(dir.path());
    let samples = dir.path().join("samples.txt");
    fs::write(&samples, "# batch 1\nX-1\n\nX-2\n").unwrap();

    let output = isasheet(&[
        "show",
        "sample",
        "--config",
        &config,
        "--samples-file",
        samples.to_str().unwrap(),
    ]);
    assert!(output.status.success());

    let text = stdout(&output);
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 3);
    assert!(lines[0].ends_with("Sample Name\tCharacteristics[day]"));
    assert!(lines[1].starts_with("X_1\tMus musculus\t"));
}

#[test]
fn test_generate_writes_three_files() {
    let dir = tempdir().unwrap();
    let config = write_config(dir.path());
    let out = dir.path().join("isa");

    let output = isasheet(&["generate", out.to_str().unwrap(), "--config", &config]);
    assert!(output.status.success());
    assert!(stdout(&output).contains("2 sample(s)"));

    assert!(out.join("i_Investigation.txt").exists());
    assert!(out.join("s_cfg_exp.txt").exists());
    assert!(out
        .join("a_cfg_exp_transcription_profiling_nucleotide_sequencing.txt")
        .exists());

    // A second run needs --force
    let again = isasheet(&["generate", out.to_str().unwrap(), "--config", &config]);
    assert!(!again.status.success());

    let forced = isasheet(&[
        "generate",
        out.to_str().unwrap(),
        "--config",
        &config,
        "--force",
    ]);
    assert!(forced.status.success());
}

#[test]
fn test_invalid_sample_fails() {
    let dir = tempdir().unwrap();
    let out = dir.path().join("isa");

    let output = isasheet(&[
        "generate",
        out.to_str().unwrap(),
        "--experiment",
        "exp",
        "--sample",
        "",
    ]);
    assert!(!output.status.success());
    assert!(!out.exists());
}

#[test]
fn test_missing_experiment_fails() {
    let output = isasheet(&["show", "sample", "--sample", "S-1"]);
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("experiment"));
}
