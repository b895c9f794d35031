use std::{env, fs, path::PathBuf, process::Command};

use serde_json::{json, Value};

fn run_find_path(request: &PathBuf) -> (String, Value) {
    let output = Command::new(env!("CARGO_BIN_EXE_find_path"))
        .arg("--request")
        .arg(request)
        .output()
        .unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    let (status, body) = stdout.split_once('\n').unwrap();
    (status.to_string(), serde_json::from_str(body).unwrap())
}

#[test]
fn demo_request() {
    let request = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("demos/request.json");
    let (status, body) = run_find_path(&request);

    assert_eq!(status, "200 OK");
    assert_eq!(body["has_path"], json!(true));
    assert_eq!(body["cost"], json!(3));
    assert_eq!(body["path"].as_array().unwrap().len(), 2);
}

#[test]
fn rejected_request() {
    let request = env::temp_dir().join(format!("find_path_rejected_{}.json", std::process::id()));
    fs::write(
        &request,
        json!({"graph": {"vertexes": [{"id": "A", "name": "A"}]}, "source": "A"}).to_string(),
    )
    .unwrap();

    let (status, body) = run_find_path(&request);
    fs::remove_file(&request).unwrap();

    assert_eq!(status, "400 Bad Request");
    assert_eq!(body, json!({"error": "destination not found in content"}));
}
