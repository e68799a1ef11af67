//! Sheets Store Tests
//!
//! Points the Sheets adapter at a local HTTP server that records every call.
//!
//! These tests verify:
//! - Range paths, including quoted tab names
//! - Write bodies and `valueInputOption`
//! - One token exchange shared by all calls
//! - Error statuses surface as errors

use std::io::Write;
use std::sync::Arc;

use axum::extract::{Request, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::{Json, Router};
use parking_lot::Mutex;
use serde_json::{json, Value};
use tempfile::NamedTempFile;

use inventory_bridge::config::Config;
use inventory_bridge::sheet::{CellRef, Column, SheetRange};
use inventory_bridge::storage::{BackingStore, SheetsStore};
use inventory_bridge::BridgeError;

const PRIVATE_KEY: &str = include_str!("../fixtures/service_account_rsa.pem");

// =============================================================================
// Helper Functions
// =============================================================================

#[derive(Debug, Clone)]
struct Recorded {
    method: String,
    path: String,
    query: Option<String>,
    authorization: Option<String>,
    body: String,
}

impl Recorded {
    fn json(&self) -> Value {
        serde_json::from_str(&self.body).unwrap()
    }
}

type Log = Arc<Mutex<Vec<Recorded>>>;

async fn record(State(log): State<Log>, request: Request) -> Response {
    let (parts, body) = request.into_parts();
    let body = axum::body::to_bytes(body, usize::MAX).await.unwrap();
    let recorded = Recorded {
        method: parts.method.to_string(),
        path: parts.uri.path().to_string(),
        query: parts.uri.query().map(str::to_string),
        authorization: parts
            .headers
            .get("authorization")
            .and_then(|value| value.to_str().ok())
            .map(str::to_string),
        body: String::from_utf8_lossy(&body).into_owned(),
    };
    log.lock().push(recorded.clone());

    if recorded.path == "/token" {
        return Json(json!({ "access_token": "test-token", "expires_in": 3600, "token_type": "Bearer" }))
            .into_response();
    }
    if recorded.path == "/token-denied" {
        return (StatusCode::UNAUTHORIZED, "invalid_grant").into_response();
    }
    if recorded.path.contains("Missing%20Tab") {
        return (StatusCode::BAD_REQUEST, "Unable to parse range: 'Missing Tab'!A2:G").into_response();
    }
    if recorded.method == "GET" {
        return Json(json!({
            "range": "'My Tab'!E2:E1000",
            "majorDimension": "ROWS",
            "values": [["SN001"], [], [42]]
        }))
        .into_response();
    }
    Json(json!({})).into_response()
}

async fn start_server() -> (String, Log) {
    let log: Log = Arc::default();
    let app = Router::new().fallback(record).with_state(log.clone());
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    (format!("http://{}", addr), log)
}

fn key_file(token_uri: &str) -> NamedTempFile {
    let key = json!({
        "type": "service_account",
        "client_email": "bridge@example.iam.gserviceaccount.com",
        "private_key": PRIVATE_KEY,
        "private_key_id": "key-1",
        "token_uri": token_uri,
    });
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(key.to_string().as_bytes()).unwrap();
    file
}

struct Harness {
    store: SheetsStore,
    log: Log,
    _key: NamedTempFile,
}

async fn setup_with_token_path(token_path: &str) -> Harness {
    let (base, log) = start_server().await;
    let key = key_file(&format!("{}{}", base, token_path));
    let config = Config::builder()
        .spreadsheet_id("SID")
        .credentials_path(key.path())
        .sheets_api_base(base)
        .build();

    Harness {
        store: SheetsStore::from_config(&config).unwrap(),
        log,
        _key: key,
    }
}

async fn setup() -> Harness {
    setup_with_token_path("/token").await
}

fn calls(log: &Log) -> Vec<Recorded> {
    log.lock().clone()
}

fn sheet_calls(log: &Log) -> Vec<Recorded> {
    calls(log)
        .into_iter()
        .filter(|call| call.path.starts_with("/v4/"))
        .collect()
}

// =============================================================================
// Request Shape Tests
// =============================================================================

#[tokio::test]
async fn test_read_requests_quoted_column_range() {
    let harness = setup().await;

    let rows = harness
        .store
        .read(&SheetRange::column("My Tab", Column::SerialNumber))
        .await
        .unwrap();

    assert_eq!(rows, vec![vec!["SN001".to_string()], vec![], vec!["42".to_string()]]);

    let calls = sheet_calls(&harness.log);
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].method, "GET");
    assert_eq!(calls[0].path, "/v4/spreadsheets/SID/values/'My%20Tab'!E2:E");
    assert_eq!(calls[0].authorization.as_deref(), Some("Bearer test-token"));
}

#[tokio::test]
async fn test_write_cell_puts_single_user_entered_value() {
    let harness = setup().await;

    harness
        .store
        .write_cell(&CellRef::new("Main", Column::Status, 2), "Broken")
        .await
        .unwrap();

    let calls = sheet_calls(&harness.log);
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].method, "PUT");
    assert_eq!(calls[0].path, "/v4/spreadsheets/SID/values/Main!G2");
    assert_eq!(calls[0].query.as_deref(), Some("valueInputOption=USER_ENTERED"));

    let body = calls[0].json();
    assert_eq!(body["range"], "Main!G2");
    assert_eq!(body["values"], json!([["Broken"]]));
}

#[tokio::test]
async fn test_append_posts_row_to_table_range() {
    let harness = setup().await;
    let row: Vec<String> = ["Radio9", "d", "VHF", "M9", "SN009", "02/02/2024", "In Service"]
        .iter()
        .map(|cell| cell.to_string())
        .collect();

    harness.store.append(&SheetRange::table("Main"), &row).await.unwrap();

    let calls = sheet_calls(&harness.log);
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].method, "POST");
    assert_eq!(calls[0].path, "/v4/spreadsheets/SID/values/Main!A:G:append");
    assert_eq!(calls[0].query.as_deref(), Some("valueInputOption=USER_ENTERED"));
    assert_eq!(
        calls[0].json()["values"],
        json!([["Radio9", "d", "VHF", "M9", "SN009", "02/02/2024", "In Service"]])
    );
}

// =============================================================================
// Token Tests
// =============================================================================

#[tokio::test]
async fn test_token_is_exchanged_once_for_many_calls() {
    let harness = setup().await;

    harness.store.read(&SheetRange::data("Main")).await.unwrap();
    harness
        .store
        .write_cell(&CellRef::new("Main", Column::LastInspection, 3), "03/03/2024")
        .await
        .unwrap();
    harness.store.read(&SheetRange::data("Main")).await.unwrap();

    let calls = calls(&harness.log);
    let exchanges: Vec<&Recorded> = calls.iter().filter(|call| call.path == "/token").collect();
    assert_eq!(exchanges.len(), 1);
    assert_eq!(exchanges[0].method, "POST");
    assert!(exchanges[0]
        .body
        .starts_with("grant_type=urn%3Aietf%3Aparams%3Aoauth%3Agrant-type%3Ajwt-bearer&assertion="));
    assert_eq!(calls.len(), 4);
}

#[tokio::test]
async fn test_warm_up_fetches_token_before_first_command() {
    let harness = setup().await;

    harness.store.warm_up().await.unwrap();
    assert_eq!(calls(&harness.log).len(), 1);
    assert_eq!(calls(&harness.log)[0].path, "/token");

    harness.store.read(&SheetRange::data("Main")).await.unwrap();

    let calls = calls(&harness.log);
    assert_eq!(calls.len(), 2);
    assert!(calls[1].path.starts_with("/v4/"));
}

#[tokio::test]
async fn test_rejected_token_exchange_is_auth_error() {
    let harness = setup_with_token_path("/token-denied").await;

    let err = harness.store.read(&SheetRange::data("Main")).await.unwrap_err();

    assert!(matches!(err, BridgeError::Auth(_)), "{:?}", err);
    assert!(sheet_calls(&harness.log).is_empty());
    assert!(harness.store.warm_up().await.is_err());
}

// =============================================================================
// Error Tests
// =============================================================================

#[tokio::test]
async fn test_error_status_surfaces_as_http_error() {
    let harness = setup().await;

    let err = harness
        .store
        .read(&SheetRange::data("Missing Tab"))
        .await
        .unwrap_err();

    match err {
        BridgeError::Http { status, body } => {
            assert_eq!(status, 400);
            assert!(body.contains("Unable to parse range"), "{}", body);
        }
        other => panic!("Expected Http error, got {:?}", other),
    }
}
