use assert_cmd::Command;
use serde_json::{Value, json};
use std::fs;
use std::path::{Path, PathBuf};

fn write_selection(dir: &Path, name: &str, json: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, json).expect("write selection");
    path
}

fn stdout_json(output: &std::process::Output) -> Value {
    serde_json::from_slice(&output.stdout).expect("stdout is JSON")
}

#[test]
fn cli_renders_svg_to_stdout() {
    let tmp = tempfile::tempdir().expect("tempdir");
    let input = write_selection(
        tmp.path(),
        "selection.json",
        r#"[{"slug":"chest","intensity":2},{"slug":"biceps","side":"left"}]"#,
    );

    let exe = assert_cmd::cargo_bin!("body-highlighter-cli");
    let output = Command::new(exe)
        .args([
            "render",
            "--theme",
            "dark",
            "--scale",
            "2",
            "--id",
            "demo view",
            input.to_string_lossy().as_ref(),
        ])
        .output()
        .expect("run cli");
    assert!(output.status.success());

    let svg = String::from_utf8(output.stdout).expect("utf-8 svg");
    let doc = roxmltree::Document::parse(&svg).expect("well-formed svg");
    let root = doc.root_element();
    assert_eq!(root.attribute("id"), Some("demo-view"));
    assert_eq!(root.attribute("width"), Some("400"));

    let chest_fills: Vec<_> = doc
        .descendants()
        .filter(|n| n.attribute("data-slug") == Some("chest"))
        .map(|n| n.attribute("fill"))
        .collect();
    assert!(!chest_fills.is_empty());
    assert!(chest_fills.iter().all(|f| *f == Some("#74b9ff")));

    let right_biceps = doc
        .descendants()
        .find(|n| {
            n.attribute("data-slug") == Some("biceps") && n.attribute("data-side") == Some("right")
        })
        .expect("right biceps path");
    assert_eq!(right_biceps.attribute("fill"), Some("#6a7282"));
}

#[test]
fn cli_renders_png_with_default_out_path_for_file_input() {
    let tmp = tempfile::tempdir().expect("tempdir");
    let input = write_selection(tmp.path(), "legs.json", r#"[{"slug":"quadriceps"}]"#);
    let expected_out = input.with_extension("png");

    let exe = assert_cmd::cargo_bin!("body-highlighter-cli");
    Command::new(exe)
        .args([
            "render",
            "--format",
            "png",
            input.to_string_lossy().as_ref(),
        ])
        .assert()
        .success();

    let bytes = fs::read(&expected_out).expect("read png");
    assert!(
        bytes.starts_with(b"\x89PNG\r\n\x1a\n"),
        "output is not a PNG"
    );
}

#[test]
fn cli_renders_jpeg_to_explicit_out_path() {
    let tmp = tempfile::tempdir().expect("tempdir");
    let input = write_selection(tmp.path(), "sel.json", "[]");
    let out = tmp.path().join("body.jpg");

    let exe = assert_cmd::cargo_bin!("body-highlighter-cli");
    Command::new(exe)
        .args([
            "render",
            "--gender",
            "female",
            "--view",
            "back",
            "--format",
            "jpg",
            "--out",
            out.to_string_lossy().as_ref(),
            input.to_string_lossy().as_ref(),
        ])
        .assert()
        .success();

    let bytes = fs::read(&out).expect("read jpg");
    assert!(bytes.starts_with(&[0xFF, 0xD8]), "output is not a JPG");
}

#[test]
fn cli_click_walks_the_side_state_machine() {
    let exe = assert_cmd::cargo_bin!("body-highlighter-cli");

    let first = Command::new(&exe)
        .args(["click", "chest", "--side", "left", "--intensity", "2"])
        .write_stdin("")
        .output()
        .expect("run cli");
    assert!(first.status.success());
    let first = stdout_json(&first);
    assert_eq!(first, json!([{"slug": "chest", "intensity": 2, "side": "left"}]));

    let second = Command::new(&exe)
        .args(["click", "chest", "--side", "right"])
        .write_stdin(first.to_string())
        .output()
        .expect("run cli");
    assert!(second.status.success());
    assert_eq!(stdout_json(&second), json!([{"slug": "chest", "intensity": 2}]));

    let third = Command::new(&exe)
        .args(["click", "chest", "--side", "right"])
        .write_stdin(r#"[{"slug":"chest","intensity":2}]"#)
        .output()
        .expect("run cli");
    assert!(third.status.success());
    assert_eq!(stdout_json(&third), json!([{"slug": "chest", "intensity": 2, "side": "left"}]));
}

#[test]
fn cli_click_without_side_toggles_whole_entry() {
    let tmp = tempfile::tempdir().expect("tempdir");
    let input = write_selection(tmp.path(), "sel.json", r#"[{"slug":"abs","intensity":1}]"#);

    let exe = assert_cmd::cargo_bin!("body-highlighter-cli");
    let output = Command::new(exe)
        .args(["click", "abs", input.to_string_lossy().as_ref()])
        .output()
        .expect("run cli");
    assert!(output.status.success());
    assert_eq!(stdout_json(&output), json!([]));
}

#[test]
fn cli_click_is_checked_against_the_active_view() {
    let exe = assert_cmd::cargo_bin!("body-highlighter-cli");
    let output = Command::new(&exe)
        .args(["click", "abs", "--view", "back"])
        .write_stdin(r#"[{"slug":"trapezius"}]"#)
        .output()
        .expect("run cli");
    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("not drawn in the male back view"), "{stderr}");

    let output = Command::new(&exe)
        .args(["click", "hair", "--side", "left"])
        .write_stdin("[]")
        .output()
        .expect("run cli");
    assert!(output.status.success());
    assert_eq!(stdout_json(&output), json!([{"slug": "hair", "intensity": 1}]));
}

#[test]
fn cli_intensity_rebroadcasts_to_every_entry() {
    let exe = assert_cmd::cargo_bin!("body-highlighter-cli");
    let output = Command::new(exe)
        .args(["intensity", "2"])
        .write_stdin(r#"[{"slug":"abs","intensity":1},{"slug":"neck","side":"left"}]"#)
        .output()
        .expect("run cli");
    assert!(output.status.success());
    assert_eq!(
        stdout_json(&output),
        json!([
            {"slug": "abs", "intensity": 2},
            {"slug": "neck", "intensity": 2, "side": "left"}
        ])
    );
}

#[test]
fn cli_lists_slugs_for_a_view() {
    let exe = assert_cmd::cargo_bin!("body-highlighter-cli");
    let output = Command::new(exe)
        .args(["slugs", "--view", "back"])
        .output()
        .expect("run cli");
    assert!(output.status.success());
    let out = stdout_json(&output);
    assert_eq!(out["gender"], "male");
    assert_eq!(out["view"], "back");
    let slugs = out["slugs"].as_array().expect("slugs array");
    assert!(slugs.contains(&json!("upper-back")));
    assert!(!slugs.contains(&json!("chest")));
}

#[test]
fn cli_layout_reports_selected_paths() {
    let exe = assert_cmd::cargo_bin!("body-highlighter-cli");
    let output = Command::new(exe)
        .args(["layout", "--pretty", "--colors", "#111111,#222222"])
        .write_stdin(r#"[{"slug":"head"}]"#)
        .output()
        .expect("run cli");
    assert!(output.status.success());
    let layout = stdout_json(&output);
    let paths = layout["paths"].as_array().expect("paths array");
    let head: Vec<_> = paths.iter().filter(|p| p["slug"] == "head").collect();
    assert!(!head.is_empty());
    assert!(
        head.iter()
            .all(|p| p["selected"] == true && p["fill"] == "#111111")
    );
    assert!(layout["contentBounds"].is_object());
}

#[test]
fn cli_config_file_is_merged_under_flags() {
    let tmp = tempfile::tempdir().expect("tempdir");
    let config = tmp.path().join("config.json");
    fs::write(&config, r#"{"gender":"female","border":"none","scale":3}"#).expect("write config");

    let exe = assert_cmd::cargo_bin!("body-highlighter-cli");
    let output = Command::new(exe)
        .args(["render", "--config", config.to_string_lossy().as_ref(), "--scale", "1"])
        .write_stdin("")
        .output()
        .expect("run cli");
    assert!(output.status.success());
    let svg = String::from_utf8(output.stdout).expect("utf-8 svg");
    let doc = roxmltree::Document::parse(&svg).expect("well-formed svg");
    let root = doc.root_element();
    assert_eq!(root.attribute("data-gender"), Some("female"));
    assert_eq!(root.attribute("width"), Some("208"));
    let group = root
        .children()
        .find(|n| n.has_tag_name("g"))
        .expect("body-parts group");
    assert_eq!(group.attribute("stroke"), None);
}

#[test]
fn cli_usage_errors_exit_with_code_2() {
    let exe = assert_cmd::cargo_bin!("body-highlighter-cli");
    Command::new(&exe)
        .args(["render", "--format", "gif"])
        .assert()
        .code(2);
    Command::new(&exe).args(["click"]).assert().code(2);
    Command::new(&exe)
        .args(["intensity", "0"])
        .assert()
        .code(2);
}

#[test]
fn cli_runtime_errors_exit_with_code_1() {
    let exe = assert_cmd::cargo_bin!("body-highlighter-cli");
    Command::new(&exe)
        .args(["click", "elbow"])
        .write_stdin("[]")
        .assert()
        .code(1);
    Command::new(&exe)
        .args(["render", "--gender", "robot"])
        .write_stdin("[]")
        .assert()
        .code(1);
    Command::new(&exe)
        .args(["render"])
        .write_stdin("{not json")
        .assert()
        .code(1);
    Command::new(&exe)
        .args(["render", "--colors", "#111111,,#333333"])
        .write_stdin("[]")
        .assert()
        .code(1);
}
