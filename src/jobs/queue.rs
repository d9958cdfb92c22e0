//! Processing queue - drives queued jobs through the pipeline.
//!
//! A bounded mpsc channel feeds a single worker task. The pipeline
//! itself (silence detection -> ASR -> render) is stubbed: the worker
//! holds the job in Processing for a configurable duration, then marks
//! it Completed with a derived output path. A job that disappears from
//! the store mid-flight is dropped; a job the store cannot transition
//! is marked Failed.

use std::time::Duration;

use tokio::sync::mpsc;
use uuid::Uuid;

use super::{JobError, JobStore};

/// Queue capacity. Backpressure applies beyond this many pending jobs.
const QUEUE_CAPACITY: usize = 64;

/// Handle for enqueueing jobs onto the processing worker.
#[derive(Clone)]
pub struct JobQueue {
    tx: mpsc::Sender<Uuid>,
}

impl JobQueue {
    /// Spawn the worker task and return the queue handle.
    ///
    /// `processing_time` is how long the stubbed pipeline holds each job
    /// in Processing before completing it.
    pub fn spawn(store: JobStore, processing_time: Duration) -> Self {
        let (tx, rx) = mpsc::channel(QUEUE_CAPACITY);
        tokio::spawn(worker_loop(store, rx, processing_time));
        Self { tx }
    }

    /// Mark the job Queued and hand it to the worker.
    pub async fn enqueue(&self, store: &JobStore, job_id: Uuid) -> Result<(), JobError> {
        store
            .update(job_id, |job| job.mark_queued())
            .await
            .ok_or(JobError::NotFound(job_id))?;

        self.tx
            .send(job_id)
            .await
            .map_err(|_| JobError::QueueClosed)?;

        tracing::info!("Enqueued job {}", job_id);
        Ok(())
    }
}

async fn worker_loop(store: JobStore, mut rx: mpsc::Receiver<Uuid>, processing_time: Duration) {
    tracing::info!("Processing worker started");

    while let Some(job_id) = rx.recv().await {
        process_one(&store, job_id, processing_time).await;
    }

    // All senders dropped: server is shutting down.
    tracing::info!("Processing worker stopped");
}

async fn process_one(store: &JobStore, job_id: Uuid, processing_time: Duration) {
    tracing::info!("Starting video processing task for job {}", job_id);

    let Some(job) = store.update(job_id, |j| j.mark_processing()).await else {
        tracing::warn!("Job {} vanished before processing", job_id);
        return;
    };

    // Stub for the real pipeline:
    // silence detection -> ASR -> JSON -> B-roll -> text -> render
    tokio::time::sleep(processing_time).await;

    let output = render_output_path(&job.input_file_path, &job.render_config.format);
    match store
        .update(job_id, |j| j.mark_completed(vec![output.clone()]))
        .await
    {
        Some(_) => tracing::info!("Video processing task completed for job {}", job_id),
        None => tracing::warn!("Job {} vanished during processing", job_id),
    }
}

/// Derive the render output path from the input file name.
fn render_output_path(input_file_path: &str, format: &str) -> String {
    let stem = std::path::Path::new(input_file_path)
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("output");
    format!("/renders/{stem}.{format}")
}
