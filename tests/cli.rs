use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

const PNG_MAGIC: [u8; 4] = [0x89, b'P', b'N', b'G'];

fn paintpad_cmd() -> Command {
    Command::cargo_bin("paintpad").expect("binary exists")
}

#[test]
fn paintpad_help_prints_usage() {
    paintpad_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Headless driver for the paintpad widget",
        ));
}

#[test]
fn no_flags_prints_usage_and_writes_nothing() {
    paintpad_cmd()
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage:"));
}

#[test]
fn scribble_writes_a_png_snapshot() {
    let temp = TempDir::new().unwrap();
    let config_path = temp.path().join("config.toml");
    std::fs::write(&config_path, "[drawing]\ndefault_line_width = 3.0\n").unwrap();
    let output = temp.path().join("out.png");

    paintpad_cmd()
        .args(["--config", &config_path.to_string_lossy()])
        .args(["--scribble", "--width", "200", "--height", "150"])
        .args(["--output", &output.to_string_lossy()])
        .assert()
        .success()
        .stdout(predicate::str::contains("out.png"));

    let bytes = std::fs::read(&output).unwrap();
    assert_eq!(&bytes[..4], &PNG_MAGIC);

    let decoded = tiny_skia::Pixmap::decode_png(&bytes).unwrap();
    assert_eq!((decoded.width(), decoded.height()), (200, 150));
    assert!(
        decoded.pixels().iter().any(|p| p.alpha() > 0),
        "scribble session should leave paint on the canvas"
    );
}

#[test]
fn open_resizes_the_canvas_to_the_image() {
    let temp = TempDir::new().unwrap();

    // A 6x3 source image, produced through the library's own exporter.
    let mut canvas = paintpad::Canvas::new(6, 3);
    canvas.fill_dot(1.0, 1.0);
    let source = temp.path().join("source.png");
    paintpad::io::export::save_png(&canvas, &source).unwrap();

    let output = temp.path().join("roundtrip.png");
    paintpad_cmd()
        .env("XDG_CONFIG_HOME", temp.path())
        .args(["--open", &source.to_string_lossy()])
        .args(["--output", &output.to_string_lossy()])
        .assert()
        .success();

    let decoded = tiny_skia::Pixmap::decode_png(&std::fs::read(&output).unwrap()).unwrap();
    assert_eq!((decoded.width(), decoded.height()), (6, 3));
}

#[test]
fn bad_config_file_fails_loudly() {
    let temp = TempDir::new().unwrap();
    let config_path = temp.path().join("config.toml");
    std::fs::write(&config_path, "definitely not [ toml").unwrap();

    paintpad_cmd()
        .args(["--config", &config_path.to_string_lossy()])
        .arg("--scribble")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to parse config file"));
}
