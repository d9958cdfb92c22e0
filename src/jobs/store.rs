//! Job store - manages video jobs with file-backed persistence.
//!
//! Jobs live in memory behind an RwLock and are flushed to `jobs.json`
//! in the data directory after every mutation. Persistence is
//! best-effort: a failed write is logged, not propagated, so a full
//! disk never takes the API down.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use tokio::sync::RwLock;
use uuid::Uuid;

use super::{JobStatus, VideoJob};

/// Video job store.
#[derive(Clone)]
pub struct JobStore {
    jobs: Arc<RwLock<HashMap<Uuid, VideoJob>>>,
    data_dir: PathBuf,
}

impl JobStore {
    /// Create a new store, loading existing jobs from disk.
    pub fn new(data_dir: PathBuf) -> Self {
        let jobs = Self::load_from_disk(&data_dir);
        if !jobs.is_empty() {
            tracing::info!("Loaded {} job(s) from disk", jobs.len());
        }
        Self {
            jobs: Arc::new(RwLock::new(jobs)),
            data_dir,
        }
    }

    fn jobs_file(data_dir: &Path) -> PathBuf {
        data_dir.join("jobs.json")
    }

    fn load_from_disk(data_dir: &Path) -> HashMap<Uuid, VideoJob> {
        let path = Self::jobs_file(data_dir);
        if let Ok(content) = fs::read_to_string(&path) {
            if let Ok(jobs) = serde_json::from_str(&content) {
                return jobs;
            }
            tracing::warn!("Ignoring unreadable jobs file: {}", path.display());
        }
        HashMap::new()
    }

    async fn save_to_disk(&self) {
        let jobs = self.jobs.read().await;
        let path = Self::jobs_file(&self.data_dir);

        if let Some(parent) = path.parent() {
            let _ = fs::create_dir_all(parent);
        }

        match serde_json::to_string_pretty(&*jobs) {
            Ok(json) => {
                if let Err(e) = fs::write(&path, json) {
                    tracing::warn!("Failed to persist jobs to {}: {}", path.display(), e);
                }
            }
            Err(e) => tracing::warn!("Failed to serialize jobs: {}", e),
        }
    }

    /// Get a job by id.
    pub async fn get(&self, job_id: Uuid) -> Option<VideoJob> {
        let jobs = self.jobs.read().await;
        jobs.get(&job_id).cloned()
    }

    /// Insert or replace a job, persisting the result.
    pub async fn save(&self, job: VideoJob) {
        {
            let mut jobs = self.jobs.write().await;
            jobs.insert(job.id, job);
        }
        self.save_to_disk().await;
    }

    /// Apply a mutation to a stored job, persisting the result.
    ///
    /// Returns the updated job, or `None` when the id is unknown.
    pub async fn update<F>(&self, job_id: Uuid, mutate: F) -> Option<VideoJob>
    where
        F: FnOnce(&mut VideoJob),
    {
        let updated = {
            let mut jobs = self.jobs.write().await;
            let job = jobs.get_mut(&job_id)?;
            mutate(job);
            job.clone()
        };
        self.save_to_disk().await;
        Some(updated)
    }

    /// List all jobs, newest first.
    pub async fn list(&self) -> Vec<VideoJob> {
        let jobs = self.jobs.read().await;
        let mut all: Vec<VideoJob> = jobs.values().cloned().collect();
        all.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        all
    }

    /// List jobs in a given status, newest first.
    pub async fn find_by_status(&self, status: JobStatus) -> Vec<VideoJob> {
        let jobs = self.jobs.read().await;
        let mut matching: Vec<VideoJob> =
            jobs.values().filter(|j| j.status == status).cloned().collect();
        matching.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        matching
    }

    /// Delete a job, persisting the result. Returns true when removed.
    pub async fn delete(&self, job_id: Uuid) -> bool {
        let removed = {
            let mut jobs = self.jobs.write().await;
            jobs.remove(&job_id).is_some()
        };
        if removed {
            self.save_to_disk().await;
        }
        removed
    }
}
