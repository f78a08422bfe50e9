use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn workspace(config: Option<&str>) -> TempDir {
    let dir = tempfile::tempdir().unwrap();
    if let Some(config) = config {
        fs::write(dir.path().join("emoji-chime.json"), config).unwrap();
    }
    dir
}

fn cmd(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("emoji-chime").unwrap();
    cmd.current_dir(dir.path())
        .env("HOME", dir.path())
        .env("XDG_CONFIG_HOME", dir.path().join(".config"));
    cmd
}

#[test]
fn check_reports_counts_and_classification() {
    let dir = workspace(None);
    cmd(&dir)
        .args(["check", "huh 🗿🗿"])
        .assert()
        .success()
        .stdout(predicate::str::contains("moyai: 2"))
        .stdout(predicate::str::contains("huhcat: 1"))
        .stdout(predicate::str::contains("Classified as: moyai"));
}

#[test]
fn check_json_respects_sound_limit() {
    let dir = workspace(Some(r#"{"emoji_sound_limit":2}"#));
    cmd(&dir)
        .args(["check", "--json", "<:bonk:1><:bonk:2><:bonk:3>"])
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""sound": "bonk""#))
        .stdout(predicate::str::contains(r#""count": 2"#));
}

#[test]
fn play_dry_run_uses_hd_locator() {
    let dir = workspace(Some(r#"{"quality":"HD","sounds_dir":"/srv/sounds"}"#));
    cmd(&dir)
        .args(["play", "moyai", "--dry-run"])
        .assert()
        .success()
        .stdout(predicate::str::contains("/srv/sounds/moyai_hd.wav"));
}

#[test]
fn play_disabled_sound_is_reported() {
    let dir = workspace(Some(r#"{"sounds":{"sus":{"enabled":false}}}"#));
    cmd(&dir)
        .args(["play", "sus", "--dry-run"])
        .assert()
        .success()
        .stdout(predicate::str::contains("sus is disabled"));
}

#[test]
fn listen_dry_run_emits_requests() {
    let dir = workspace(None);
    let input = [
        r#"{"type":"TYPING_START","channelId":"1"}"#,
        "garbage",
        r#"{"type":"MESSAGE_CREATE","channelId":"1","message":{"content":"<:bonk:5> 🗿","author":{"id":"a"}}}"#,
        r#"{"type":"MESSAGE_CREATE","channelId":"2","message":{"content":"🗿","author":{"id":"a"}}}"#,
        r#"{"type":"MESSAGE_REACTION_ADD","channelId":"1","userId":"b","messageAuthorId":"a","emoji":{"name":"sus"}}"#,
    ]
    .join("\n");

    let output = cmd(&dir)
        .args(["listen", "--channel", "1", "--dry-run"])
        .write_stdin(input)
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let stdout = String::from_utf8(output).unwrap();
    let sounds: Vec<String> = stdout
        .lines()
        .map(|line| {
            let value: serde_json::Value = serde_json::from_str(line).unwrap();
            value["sound"].as_str().unwrap().to_string()
        })
        .collect();

    assert_eq!(sounds.len(), 3);
    assert!(sounds.contains(&"bonk".to_string()));
    assert!(sounds.contains(&"moyai".to_string()));
    assert!(sounds.contains(&"sus".to_string()));
}

#[test]
fn config_validate_rejects_bad_volume() {
    let dir = workspace(Some(r#"{"volume":2.0}"#));
    cmd(&dir)
        .args(["config", "--validate"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("volume must be between 0.0 and 1.0"));
}
