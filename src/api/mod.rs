//! HTTP API handlers

use std::time::Instant;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::jobs::{JobQueue, JobStatus, JobStore, VideoJob};

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub store: JobStore,
    pub queue: JobQueue,
    pub env: String,
    started: Instant,
}

impl AppState {
    pub fn new(store: JobStore, queue: JobQueue, env: String) -> Self {
        Self {
            store,
            queue,
            env,
            started: Instant::now(),
        }
    }
}

/// Error response
#[derive(Serialize)]
struct ErrorResponse {
    error: String,
}

/// General status response
#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub service: &'static str,
    pub version: &'static str,
    pub env: String,
    pub uptime_secs: u64,
}

/// Build the API router: /health plus the /api/v1 job routes.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_handler))
        .route("/api/v1/jobs", post(create_job_handler).get(list_jobs_handler))
        .route("/api/v1/jobs/{job_id}", get(get_job_handler))
        .route("/api/v1/jobs/{job_id}/process", post(process_job_handler))
        .with_state(state)
}

/// GET /health - Service health check
pub async fn health_handler(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        service: "one-click-video",
        version: env!("CARGO_PKG_VERSION"),
        env: state.env.clone(),
        uptime_secs: state.started.elapsed().as_secs(),
    })
}

// =============================================================================
// Job handlers
// =============================================================================

/// Create job request body
#[derive(Deserialize)]
pub struct CreateJobRequest {
    pub user_id: i64,
    pub input_file_path: String,
}

/// POST /api/v1/jobs - Create a job for an uploaded file
pub async fn create_job_handler(
    State(state): State<AppState>,
    Json(req): Json<CreateJobRequest>,
) -> impl IntoResponse {
    let job = VideoJob::new(req.user_id, req.input_file_path);
    tracing::info!("Created job {} for user {}", job.id, job.user_id);
    state.store.save(job.clone()).await;
    (StatusCode::CREATED, Json(job))
}

/// List query params
#[derive(Deserialize)]
pub struct ListJobsQuery {
    pub status: Option<JobStatus>,
}

/// Wrapper for the job list response
#[derive(Serialize)]
pub struct JobsResponse {
    pub jobs: Vec<VideoJob>,
}

/// GET /api/v1/jobs - List jobs, optionally filtered by status
pub async fn list_jobs_handler(
    State(state): State<AppState>,
    Query(query): Query<ListJobsQuery>,
) -> Json<JobsResponse> {
    let jobs = match query.status {
        Some(status) => state.store.find_by_status(status).await,
        None => state.store.list().await,
    };
    Json(JobsResponse { jobs })
}

/// GET /api/v1/jobs/{job_id} - Get a specific job
pub async fn get_job_handler(
    State(state): State<AppState>,
    Path(job_id): Path<Uuid>,
) -> impl IntoResponse {
    match state.store.get(job_id).await {
        Some(job) => (StatusCode::OK, Json(job)).into_response(),
        None => (
            StatusCode::NOT_FOUND,
            Json(ErrorResponse {
                error: format!("Job not found: {}", job_id),
            }),
        )
            .into_response(),
    }
}

/// POST /api/v1/jobs/{job_id}/process - Queue a job for processing
pub async fn process_job_handler(
    State(state): State<AppState>,
    Path(job_id): Path<Uuid>,
) -> impl IntoResponse {
    match state.queue.enqueue(&state.store, job_id).await {
        Ok(()) => match state.store.get(job_id).await {
            Some(job) => (StatusCode::OK, Json(job)).into_response(),
            None => (
                StatusCode::NOT_FOUND,
                Json(ErrorResponse {
                    error: format!("Job not found: {}", job_id),
                }),
            )
                .into_response(),
        },
        Err(crate::jobs::JobError::NotFound(id)) => (
            StatusCode::NOT_FOUND,
            Json(ErrorResponse {
                error: format!("Job not found: {}", id),
            }),
        )
            .into_response(),
        Err(e) => (
            StatusCode::SERVICE_UNAVAILABLE,
            Json(ErrorResponse {
                error: e.to_string(),
            }),
        )
            .into_response(),
    }
}
