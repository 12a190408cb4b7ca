use assert_cmd::Command;
use predicates::prelude::*;
use std::path::Path;
use tempfile::TempDir;

const RELAX: &str = r#"{"name":"Relax","description":"Evening scene","colours":[{"xy":{"x":0.5,"y":0.4},"rgb":{"r":1,"g":0.5,"b":0},"brightness":60,"name":"Amber"},{"xy":{"x":0.31,"y":0.32},"rgb":{"r":0.9,"g":0.9,"b":0.9},"brightness":75.0,"name":"Warm White"}]}"#;

/// Runs the binary with an isolated config home so user settings never leak in.
fn lightscene_cmd(config_home: &Path) -> Command {
    let mut cmd = Command::cargo_bin("lightscene").expect("binary exists");
    cmd.env("XDG_CONFIG_HOME", config_home);
    cmd
}

fn write_scene(temp: &TempDir, name: &str, contents: &str) -> std::path::PathBuf {
    let path = temp.path().join(name);
    std::fs::write(&path, contents).unwrap();
    path
}

#[test]
fn help_prints_usage() {
    let temp = TempDir::new().unwrap();
    lightscene_cmd(temp.path())
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Inspect and normalise colour scene documents",
        ));
}

#[test]
fn show_lists_colours_in_order() {
    let temp = TempDir::new().unwrap();
    let path = write_scene(&temp, "relax.json", RELAX);

    lightscene_cmd(temp.path())
        .arg("show")
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Relax (2 colours): Evening scene\n  1. Amber brightness=60 xy(0.5, 0.4) rgb(1, 0.5, 0)\n  2. Warm White brightness=75",
        ));
}

#[test]
fn fmt_compact_normalises_numbers() {
    let temp = TempDir::new().unwrap();
    let path = write_scene(&temp, "relax.json", RELAX);

    lightscene_cmd(temp.path())
        .args(["fmt", "--compact"])
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::starts_with(
            r#"{"name":"Relax","description":"Evening scene","colours":[{"xy":{"x":0.5,"y":0.4},"rgb":{"r":1.0,"g":0.5,"b":0.0},"brightness":60.0,"name":"Amber"}"#,
        ));
}

#[test]
fn fmt_reads_stdin() {
    let temp = TempDir::new().unwrap();

    lightscene_cmd(temp.path())
        .args(["fmt", "--compact", "-"])
        .write_stdin("[{\"name\":\"Focus\"}]")
        .assert()
        .success()
        .stdout(predicate::str::diff(
            "[{\"name\":\"Focus\",\"description\":\"\",\"colours\":[]}]\n",
        ));
}

#[test]
fn fmt_uses_config_indent() {
    let temp = TempDir::new().unwrap();
    let path = write_scene(&temp, "relax.json", RELAX);
    let config = write_scene(&temp, "custom.toml", "[output]\nindent = 4\n");

    lightscene_cmd(temp.path())
        .arg("--config")
        .arg(&config)
        .arg("fmt")
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("\n    \"name\": \"Relax\""));
}

#[test]
fn check_reports_counts() {
    let temp = TempDir::new().unwrap();
    let path = write_scene(&temp, "scenes.json", &format!("[{RELAX}, {{}}]"));

    lightscene_cmd(temp.path())
        .arg("check")
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("ok: 2 scene(s), 2 colour(s)"));
}

#[test]
fn check_fails_on_missing_field() {
    let temp = TempDir::new().unwrap();
    let path = write_scene(
        &temp,
        "broken.json",
        r#"{"colours":[{"xy":{"x":0.1,"y":0.1},"brightness":5}]}"#,
    );

    lightscene_cmd(temp.path())
        .arg("check")
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("missing field `rgb`").count(1));
}

#[test]
fn default_document_comes_from_config() {
    let temp = TempDir::new().unwrap();
    let scenes = write_scene(&temp, "relax.json", RELAX);
    let config_dir = temp.path().join("lightscene");
    std::fs::create_dir_all(&config_dir).unwrap();
    std::fs::write(
        config_dir.join("config.toml"),
        format!("[input]\ndefault_document = {:?}\n", scenes.display().to_string()),
    )
    .unwrap();

    lightscene_cmd(temp.path())
        .arg("check")
        .assert()
        .success()
        .stdout(predicate::str::contains("ok: 1 scene(s), 2 colour(s)"));
}

#[test]
fn missing_input_is_reported() {
    let temp = TempDir::new().unwrap();

    lightscene_cmd(temp.path())
        .arg("show")
        .assert()
        .failure()
        .stderr(predicate::str::contains("no input document given"));
}

#[test]
fn schema_describes_scene_fields() {
    let temp = TempDir::new().unwrap();

    lightscene_cmd(temp.path())
        .arg("schema")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("\"brightness\"")
                .and(predicate::str::contains("\"colours\"")),
        );

    lightscene_cmd(temp.path())
        .args(["schema", "config"])
        .assert()
        .success()
        .stdout(predicate::str::contains("max_document_bytes"));
}
