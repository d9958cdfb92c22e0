//! Video job domain model.
//!
//! A `VideoJob` tracks one uploaded file through the processing pipeline:
//! Uploaded -> Queued -> Processing -> Completed (or Failed). Transitions
//! always bump `updated_at`.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub mod queue;
pub mod store;

pub use queue::JobQueue;
pub use store::JobStore;

/// Lifecycle state of a video job.
///
/// Serialized with capitalized names for wire compatibility with the
/// original platform API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum JobStatus {
    Uploaded,
    Queued,
    Processing,
    Completed,
    Failed,
}

impl JobStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            JobStatus::Uploaded => "Uploaded",
            JobStatus::Queued => "Queued",
            JobStatus::Processing => "Processing",
            JobStatus::Completed => "Completed",
            JobStatus::Failed => "Failed",
        }
    }
}

/// One word of an ASR transcript, with timing and confidence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WordSegment {
    pub word: String,
    pub start: f64,
    pub end: f64,
    pub confidence: f64,
}

/// Full transcript produced by the ASR stage.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Transcript {
    pub full_text: String,
    #[serde(default)]
    pub words: Vec<WordSegment>,
}

/// Output render parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderConfig {
    pub resolution: String,
    pub format: String,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            resolution: "1920x1080".to_string(),
            format: "mp4".to_string(),
        }
    }
}

/// A video processing job.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VideoJob {
    pub id: Uuid,
    pub user_id: i64,
    pub input_file_path: String,
    pub status: JobStatus,
    #[serde(default)]
    pub transcript: Option<Transcript>,
    #[serde(default)]
    pub render_config: RenderConfig,
    #[serde(default)]
    pub output_file_paths: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl VideoJob {
    /// Create a freshly uploaded job for the given input file.
    pub fn new(user_id: i64, input_file_path: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            user_id,
            input_file_path: input_file_path.into(),
            status: JobStatus::Uploaded,
            transcript: None,
            render_config: RenderConfig::default(),
            output_file_paths: Vec::new(),
            created_at: now,
            updated_at: now,
        }
    }

    pub fn mark_queued(&mut self) {
        self.status = JobStatus::Queued;
        self.updated_at = Utc::now();
    }

    pub fn mark_processing(&mut self) {
        self.status = JobStatus::Processing;
        self.updated_at = Utc::now();
    }

    pub fn mark_completed(&mut self, output_paths: Vec<String>) {
        self.status = JobStatus::Completed;
        self.output_file_paths = output_paths;
        self.updated_at = Utc::now();
    }

    pub fn mark_failed(&mut self) {
        self.status = JobStatus::Failed;
        self.updated_at = Utc::now();
    }
}

/// Errors from the job subsystem.
#[derive(Debug, thiserror::Error)]
pub enum JobError {
    #[error("job not found: {0}")]
    NotFound(Uuid),

    #[error("processing queue is closed")]
    QueueClosed,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_job_starts_uploaded_with_defaults() {
        let job = VideoJob::new(42, "/uploads/clip.mov");
        assert_eq!(job.status, JobStatus::Uploaded);
        assert_eq!(job.user_id, 42);
        assert_eq!(job.input_file_path, "/uploads/clip.mov");
        assert!(job.transcript.is_none());
        assert!(job.output_file_paths.is_empty());
        assert_eq!(job.render_config.resolution, "1920x1080");
        assert_eq!(job.render_config.format, "mp4");
        assert_eq!(job.created_at, job.updated_at);
    }

    #[test]
    fn transitions_advance_status_and_bump_updated_at() {
        let mut job = VideoJob::new(1, "/uploads/a.mp4");
        let t0 = job.updated_at;

        job.mark_queued();
        assert_eq!(job.status, JobStatus::Queued);
        assert!(job.updated_at >= t0);

        job.mark_processing();
        assert_eq!(job.status, JobStatus::Processing);

        job.mark_completed(vec!["/renders/a.mp4".to_string()]);
        assert_eq!(job.status, JobStatus::Completed);
        assert_eq!(job.output_file_paths, vec!["/renders/a.mp4"]);
    }

    #[test]
    fn mark_failed_does_not_touch_outputs() {
        let mut job = VideoJob::new(1, "/uploads/b.mp4");
        job.mark_failed();
        assert_eq!(job.status, JobStatus::Failed);
        assert!(job.output_file_paths.is_empty());
    }

    #[test]
    fn status_serializes_with_capitalized_wire_names() {
        // The original platform API uses "Uploaded", "Queued", etc.
        let json = serde_json::to_string(&JobStatus::Processing).unwrap();
        assert_eq!(json, "\"Processing\"");
        let back: JobStatus = serde_json::from_str("\"Completed\"").unwrap();
        assert_eq!(back, JobStatus::Completed);
    }
}
