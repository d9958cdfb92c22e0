//! REST API contract tests.
//!
//! Drive the axum router directly with tower's oneshot, no socket
//! needed. Each test gets its own temp data dir and a worker with a
//! short processing time so the create -> process -> completed flow
//! stays fast.

use std::time::Duration;

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::Router;
use serde_json::{json, Value};
use tower::ServiceExt;

use one_click_video::api::{self, AppState};
use one_click_video::jobs::{JobQueue, JobStore};

fn test_app() -> (Router, tempfile::TempDir) {
    let dir = tempfile::tempdir().expect("create temp dir");
    let store = JobStore::new(dir.path().to_path_buf());
    let queue = JobQueue::spawn(store.clone(), Duration::from_millis(10));
    let state = AppState::new(store, queue, "test".to_string());
    (api::router(state), dir)
}

async fn get(app: &Router, uri: &str) -> (StatusCode, Value) {
    let resp = app
        .clone()
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = resp.status();
    (status, body_json(resp).await)
}

async fn post(app: &Router, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let mut builder = Request::builder().method("POST").uri(uri);
    let body = match body {
        Some(v) => {
            builder = builder.header(header::CONTENT_TYPE, "application/json");
            Body::from(v.to_string())
        }
        None => Body::empty(),
    };
    let resp = app
        .clone()
        .oneshot(builder.body(body).unwrap())
        .await
        .unwrap();
    let status = resp.status();
    (status, body_json(resp).await)
}

async fn body_json(resp: axum::response::Response) -> Value {
    let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX)
        .await
        .expect("read body");
    serde_json::from_slice(&bytes).unwrap_or(Value::Null)
}

#[tokio::test]
async fn health_reports_service_info() {
    let (app, _dir) = test_app();

    let (status, body) = get(&app, "/health").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
    assert_eq!(body["service"], "one-click-video");
    assert_eq!(body["env"], "test");
}

#[tokio::test]
async fn create_then_get_job() {
    let (app, _dir) = test_app();

    let (status, created) = post(
        &app,
        "/api/v1/jobs",
        Some(json!({"user_id": 7, "input_file_path": "/uploads/talk.mp4"})),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(created["status"], "Uploaded");
    assert_eq!(created["user_id"], 7);
    assert_eq!(created["input_file_path"], "/uploads/talk.mp4");

    let id = created["id"].as_str().expect("job id");
    let (status, fetched) = get(&app, &format!("/api/v1/jobs/{id}")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched["id"], created["id"]);
}

#[tokio::test]
async fn unknown_job_is_404_with_error_body() {
    let (app, _dir) = test_app();

    let id = uuid::Uuid::new_v4();
    let (status, body) = get(&app, &format!("/api/v1/jobs/{id}")).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    let error = body["error"].as_str().expect("error field");
    assert!(error.contains("Job not found"), "got: {error}");
}

#[tokio::test]
async fn list_supports_status_filter() {
    let (app, _dir) = test_app();

    for path in ["/uploads/a.mp4", "/uploads/b.mp4"] {
        let (status, _) = post(
            &app,
            "/api/v1/jobs",
            Some(json!({"user_id": 1, "input_file_path": path})),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
    }

    let (status, body) = get(&app, "/api/v1/jobs").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["jobs"].as_array().unwrap().len(), 2);

    let (_, uploaded) = get(&app, "/api/v1/jobs?status=Uploaded").await;
    assert_eq!(uploaded["jobs"].as_array().unwrap().len(), 2);

    let (_, completed) = get(&app, "/api/v1/jobs?status=Completed").await;
    assert_eq!(completed["jobs"].as_array().unwrap().len(), 0);
}

#[tokio::test]
async fn process_unknown_job_is_404() {
    let (app, _dir) = test_app();

    let id = uuid::Uuid::new_v4();
    let (status, _) = post(&app, &format!("/api/v1/jobs/{id}/process"), None).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn process_flow_reaches_completed() {
    let (app, _dir) = test_app();

    let (_, created) = post(
        &app,
        "/api/v1/jobs",
        Some(json!({"user_id": 1, "input_file_path": "/uploads/talk.mp4"})),
    )
    .await;
    let id = created["id"].as_str().expect("job id").to_string();

    let (status, queued) = post(&app, &format!("/api/v1/jobs/{id}/process"), None).await;
    assert_eq!(status, StatusCode::OK);
    // The worker races this read, so any in-flight state is acceptable.
    let state = queued["status"].as_str().unwrap();
    assert!(
        ["Queued", "Processing", "Completed"].contains(&state),
        "unexpected state: {state}"
    );

    let deadline = tokio::time::Instant::now() + Duration::from_secs(5);
    loop {
        let (_, job) = get(&app, &format!("/api/v1/jobs/{id}")).await;
        if job["status"] == "Completed" {
            assert_eq!(job["output_file_paths"], json!(["/renders/talk.mp4"]));
            break;
        }
        assert!(
            tokio::time::Instant::now() < deadline,
            "job stuck in {}",
            job["status"]
        );
        tokio::time::sleep(Duration::from_millis(10)).await;
    }
}
