//! One Click Video - Rust Implementation
//!
//! A video processing platform: upload a video, queue it for the automated
//! pipeline, browse the results in the Library.
//!
//! This library provides:
//! - Video job domain model, file-backed store, and processing queue
//! - REST API for job creation, inspection, and processing
//! - Server-rendered web UI (collapsible sidebar shell, Library and Home pages)

pub mod api;
pub mod config;
pub mod jobs;
pub mod ui;
