use assert_cmd::Command;
use predicates::prelude::*;
use std::path::PathBuf;
use tempfile::TempDir;

fn vectortagger_cmd() -> Command {
    Command::cargo_bin("vectortagger").expect("binary exists")
}

fn write_script(temp: &TempDir, contents: &str) -> PathBuf {
    let path = temp.path().join("script.json");
    std::fs::write(&path, contents).unwrap();
    path
}

fn run_json(temp: &TempDir, script: &str) -> serde_json::Value {
    let path = write_script(temp, script);
    let output = vectortagger_cmd()
        .env("XDG_CONFIG_HOME", temp.path())
        .arg(&path)
        .output()
        .unwrap();
    assert!(output.status.success(), "{}", String::from_utf8_lossy(&output.stderr));
    serde_json::from_slice(&output.stdout).unwrap()
}

#[test]
fn vectortagger_help_prints_usage() {
    vectortagger_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Replay pointer scripts against the vector annotation editor",
        ));
}

#[test]
fn script_argument_is_required() {
    vectortagger_cmd()
        .assert()
        .failure()
        .stderr(predicate::str::contains("required arguments were not provided"));
}

#[test]
fn missing_script_reports_path() {
    vectortagger_cmd()
        .arg("/nonexistent/script.json")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to read script"));
}

#[test]
fn invalid_script_fails_to_parse() {
    let temp = TempDir::new().unwrap();
    let path = write_script(&temp, r#"{"events": []}"#);
    vectortagger_cmd()
        .env("XDG_CONFIG_HOME", temp.path())
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to parse script"));
}

#[test]
fn polygon_is_drawn_and_closed_near_first_point() {
    let temp = TempDir::new().unwrap();
    let report = run_json(
        &temp,
        r#"{
            "surface": {"width": 200, "height": 200, "vector_type": 5},
            "events": [
                {"click": {"x": 0, "y": 0}},
                {"move": {"x": 60, "y": 10}},
                {"click": {"x": 100, "y": 0}},
                {"click": {"x": 100, "y": 100}},
                {"click": {"x": 3, "y": 4}}
            ]
        }"#,
    );

    assert_eq!(report["state"], "idle");
    let shapes = report["shapes"].as_array().unwrap();
    assert_eq!(shapes.len(), 1);
    assert_eq!(shapes[0]["id"], "unsaved-1");
    assert_eq!(shapes[0]["kind"], "arbitrary_polygon");
    assert_eq!(shapes[0]["closed"], true);
    assert_eq!(
        shapes[0]["points"],
        serde_json::json!([[0.0, 0.0], [100.0, 0.0], [100.0, 100.0]])
    );
}

#[test]
fn edit_and_cancel_restores_loaded_line() {
    let temp = TempDir::new().unwrap();
    let report = run_json(
        &temp,
        r#"{
            "surface": {"width": 200, "height": 200, "vector_type": 3},
            "annotation_type_id": 4,
            "annotations": [
                {"id": 11, "vector": {"x1": 10, "y1": 10, "x2": 50, "y2": 50},
                 "annotation_type": {"id": 4, "vector_type": 3}},
                {"id": 12, "vector": {"x1": 1, "y1": 1},
                 "annotation_type": {"id": 4, "vector_type": 9}}
            ],
            "events": [
                {"select": 11},
                {"move_selection": "right"},
                {"set_point": {"id": 11, "index": 2, "x": 0, "y": 0}},
                "cancel",
                {"select": 99}
            ]
        }"#,
    );

    let shapes = report["shapes"].as_array().unwrap();
    assert_eq!(shapes.len(), 1);
    assert_eq!(shapes[0]["id"], 11);
    assert_eq!(shapes[0]["mutable"], false);
    assert_eq!(shapes[0]["points"], serde_json::json!([[10.0, 10.0], [50.0, 50.0]]));
    assert_eq!(report["errors"], serde_json::json!(["no shape with id 99 on the surface"]));
}

#[test]
fn commit_reports_moved_shape() {
    let temp = TempDir::new().unwrap();
    let config = temp.path().join("custom.toml");
    std::fs::write(&config, "[editor]\nmove_step_px = 5.0\n").unwrap();
    let path = write_script(
        &temp,
        r#"{
            "surface": {"width": 100, "height": 100, "vector_type": 2},
            "events": [
                {"click": {"x": 20, "y": 20}},
                {"move_selection": "down"},
                "commit"
            ]
        }"#,
    );

    vectortagger_cmd()
        .arg(&path)
        .args(["--config", config.to_str().unwrap(), "--compact"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            r#""committed":[{"id":"unsaved-1","kind":"point","closed":true,"mutable":false,"points":[[20.0,25.0]]}]"#,
        ));
}

#[test]
fn second_drawing_keeps_committed_line() {
    let temp = TempDir::new().unwrap();
    let report = run_json(
        &temp,
        r#"{
            "surface": {"width": 200, "height": 200, "vector_type": 3},
            "events": [
                {"click": {"x": 10, "y": 10}},
                {"click": {"x": 50, "y": 50}},
                "commit",
                {"click": {"x": 120, "y": 120}},
                {"click": {"x": 160, "y": 150}},
                {"delete_point": {"id": "unsaved-2", "index": 2}}
            ]
        }"#,
    );

    assert_eq!(report["state"], "authoring");
    assert_eq!(report["active"], "unsaved-2");
    let shapes = report["shapes"].as_array().unwrap();
    assert_eq!(shapes.len(), 2);
    assert_eq!(shapes[0]["id"], "unsaved-1");
    assert_eq!(shapes[0]["closed"], true);
    assert_eq!(shapes[1]["id"], "unsaved-2");
    assert_eq!(shapes[1]["closed"], false);
    assert_eq!(shapes[1]["points"], serde_json::json!([[120.0, 120.0]]));
}

#[test]
fn dump_config_schema_prints_sections() {
    Command::cargo_bin("dump_config_schema")
        .expect("binary exists")
        .assert()
        .success()
        .stdout(predicate::str::contains("move_step_px").and(predicate::str::contains("handle_radius")));
}
