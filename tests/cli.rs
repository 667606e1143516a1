use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn sketchpad_cmd() -> Command {
    Command::cargo_bin("sketchpad").expect("binary exists")
}

fn write_script(dir: &TempDir, name: &str, contents: &str) -> std::path::PathBuf {
    let path = dir.path().join(name);
    std::fs::write(&path, contents).unwrap();
    path
}

#[test]
fn sketchpad_help_prints_usage() {
    sketchpad_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Freehand sketch pad with unified mouse and touch input",
        ));
}

#[test]
fn replay_reports_strokes_and_ink() {
    let temp = TempDir::new().unwrap();
    let script = write_script(
        &temp,
        "stroke.txt",
        "mouse-move 1 1\nmouse-down 10 10\nmouse-move 60 60\nmouse-up 60 60\n",
    );

    sketchpad_cmd()
        .env("XDG_CONFIG_HOME", temp.path())
        .arg("replay")
        .arg(&script)
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Replayed 4 event(s): 1 stroke(s), 1 segment(s), 1 ignored, 0 clear(s)",
        ))
        .stdout(predicate::str::contains("Surface 340x200"))
        .stdout(predicate::str::is_match(r": [1-9]\d* inked pixel\(s\)").unwrap());
}

#[test]
fn replay_after_clear_reports_blank_surface() {
    let temp = TempDir::new().unwrap();
    let script = write_script(
        &temp,
        "cleared.txt",
        "touch-start 10 10\ntouch-move 40 40\ntouch-end\nclear\n",
    );

    sketchpad_cmd()
        .env("XDG_CONFIG_HOME", temp.path())
        .arg("replay")
        .arg(&script)
        .assert()
        .success()
        .stdout(predicate::str::contains(": 0 inked pixel(s)"));
}

#[test]
fn replay_preview_prints_ascii_grid() {
    let temp = TempDir::new().unwrap();
    let script = write_script(
        &temp,
        "preview.txt",
        "mouse-down 5 5\nmouse-move 35 5\n",
    );

    sketchpad_cmd()
        .env("XDG_CONFIG_HOME", temp.path())
        .args(["replay", "--preview", "--cell", "20"])
        .arg(&script)
        .assert()
        .success()
        .stdout(predicate::str::contains("Stroke still in progress"))
        .stdout(predicate::str::contains("##."));
}

#[test]
fn replay_rejects_bad_script_with_line_number() {
    let temp = TempDir::new().unwrap();
    let script = write_script(&temp, "bad.txt", "mouse-down 1 1\nsmudge 2 2\n");

    sketchpad_cmd()
        .env("XDG_CONFIG_HOME", temp.path())
        .arg("replay")
        .arg(&script)
        .assert()
        .failure()
        .stderr(predicate::str::contains("line 2: unknown event 'smudge'"));
}

#[test]
fn replay_honors_explicit_config() {
    let temp = TempDir::new().unwrap();
    let config = temp.path().join("pad.toml");
    std::fs::write(
        &config,
        "[surface]\nwidth = 64\nheight = 32\nbackground = \"white\"\n",
    )
    .unwrap();
    let script = write_script(&temp, "empty.txt", "# nothing\n");

    sketchpad_cmd()
        .args(["--config"])
        .arg(&config)
        .arg("replay")
        .arg(&script)
        .assert()
        .success()
        .stdout(predicate::str::contains("Surface 64x32 (White background"));
}

#[test]
fn init_config_writes_once() {
    let temp = TempDir::new().unwrap();

    sketchpad_cmd()
        .env("XDG_CONFIG_HOME", temp.path())
        .arg("init-config")
        .assert()
        .success()
        .stdout(predicate::str::contains("Wrote example config"));
    assert!(temp.path().join("sketchpad").join("config.toml").exists());

    sketchpad_cmd()
        .env("XDG_CONFIG_HOME", temp.path())
        .arg("init-config")
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));
}
