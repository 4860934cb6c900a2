mod common;

use std::process::Command;
use std::sync::{Arc, Mutex};

use axum::{Json, Router, extract::State, routing::post};
use common::TestFixture;

fn shabecal() -> Command {
    let mut command = Command::new(env!("CARGO_BIN_EXE_shabecal"));
    command.env_remove("SHABECAL_KEY_FILE").env_remove("VERTEXAI_API_URL");
    command
}

type Seen = Arc<Mutex<Vec<serde_json::Value>>>;

async fn token_handler() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "access_token": "cli-token", "expires_in": 3600 }))
}

async fn generate_handler(State(seen): State<Seen>, Json(body): Json<serde_json::Value>) -> Json<serde_json::Value> {
    seen.lock().unwrap().push(body);
    Json(serde_json::json!({
        "candidates": [{ "content": { "role": "model", "parts": [{ "text": "S: sore throat\nP: fluids" }] } }]
    }))
}

async fn spawn_fake_google() -> (String, Seen) {
    let seen: Seen = Arc::new(Mutex::new(Vec::new()));
    let app = Router::new()
        .route("/token", post(token_handler))
        .route("/v1/models/:action", post(generate_handler))
        .with_state(seen.clone());

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    (format!("http://{addr}"), seen)
}

#[test]
fn test_cli_version_flag() {
    let output = shabecal().arg("--version").output().expect("Failed to execute command");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("shabecal"));
}

#[test]
fn test_cli_help_flag() {
    let output = shabecal().arg("--help").output().expect("Failed to execute command");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Usage:"));
    assert!(stdout.contains("summarize"));
    assert!(stdout.contains("token"));
}

#[test]
fn test_cli_missing_key_file() {
    let fixture = TestFixture::new();
    let output = shabecal()
        .args(["token", "--key"])
        .arg(fixture.path().join("absent.json"))
        .output()
        .expect("Failed to execute command");

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("absent.json"));
}

#[test]
fn test_cli_rejects_incomplete_key() {
    let fixture = TestFixture::new();
    let key = fixture.create_file("key.json", br#"{"type":"service_account","client_email":"a@b"}"#);
    let output = shabecal().args(["token", "--key"]).arg(&key).output().expect("Failed to execute command");

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("private_key"));
}

#[tokio::test]
async fn test_cli_prints_token() {
    let (base, _seen) = spawn_fake_google().await;
    let fixture = TestFixture::new();
    let key = fixture.create_key_file(&format!("{base}/token"));

    let output = tokio::process::Command::new(env!("CARGO_BIN_EXE_shabecal"))
        .env_remove("SHABECAL_KEY_FILE")
        .args(["token", "--scope", "storage", "--key"])
        .arg(&key)
        .output()
        .await
        .unwrap();

    assert!(output.status.success(), "{}", String::from_utf8_lossy(&output.stderr));
    assert_eq!(String::from_utf8_lossy(&output.stdout).trim(), "cli-token");
}

#[tokio::test]
async fn test_cli_summarizes_recording() {
    let (base, seen) = spawn_fake_google().await;
    let fixture = TestFixture::new();
    let key = fixture.create_key_file(&format!("{base}/token"));
    let audio = fixture.create_file("visit.mp3", b"ID3-fake-audio");
    let prompt = fixture.create_file("prompt.txt", b"Only the plan, please.");
    let note = fixture.path().join("note.txt");

    let output = tokio::process::Command::new(env!("CARGO_BIN_EXE_shabecal"))
        .env("VERTEXAI_API_URL", format!("{base}/v1/models/{{{{MODEL}}}}"))
        .arg("summarize")
        .arg("--key").arg(&key)
        .arg("--audio").arg(&audio)
        .arg("--prompt-file").arg(&prompt)
        .arg("--output").arg(&note)
        .output()
        .await
        .unwrap();

    assert!(output.status.success(), "{}", String::from_utf8_lossy(&output.stderr));
    assert!(String::from_utf8_lossy(&output.stdout).contains("S: sore throat"));
    assert_eq!(fixture.read_file("note.txt"), "S: sore throat\nP: fluids");

    let seen = seen.lock().unwrap();
    let parts = &seen[0]["contents"][0]["parts"];
    assert_eq!(parts[0]["text"], "Only the plan, please.");
    assert_eq!(parts[1]["inlineData"]["mimeType"], "audio/mpeg");
}
