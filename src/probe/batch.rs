//! Batch loading
//!
//! Files are decoded independently on the rayon pool. A file that fails to
//! load is reported and the rest of the batch carries on.

use super::{load_file, LoadedFile};
use crate::filter::WaveformOptions;
use rayon::prelude::*;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Cooperative cancellation flag shared between a batch and its caller
///
/// Checked before each file starts. A file that is already being decoded
/// always runs to completion.
#[derive(Debug, Clone, Default)]
pub struct CancelToken {
    cancelled: Arc<AtomicBool>,
}

impl CancelToken {
    /// Create a token that is not cancelled
    pub fn new() -> Self {
        Self::default()
    }

    /// Request cancellation
    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::SeqCst);
    }

    /// Whether cancellation was requested
    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::SeqCst)
    }
}

/// A file that could not be loaded
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileFailure {
    /// Path of the failing file
    pub path: PathBuf,
    /// Human-readable message naming the file and the cause
    pub message: String,
}

/// Outcome of a batch load
#[derive(Debug, Default)]
pub struct BatchReport {
    /// Files that loaded, in input order
    pub loaded: Vec<LoadedFile>,
    /// Files that failed, in input order
    pub failures: Vec<FileFailure>,
    /// Files never started because the batch was cancelled
    pub skipped: Vec<PathBuf>,
}

impl BatchReport {
    /// Total number of files the batch was given
    pub fn total(&self) -> usize {
        self.loaded.len() + self.failures.len() + self.skipped.len()
    }

    /// Whether every file loaded
    pub fn is_clean(&self) -> bool {
        self.failures.is_empty() && self.skipped.is_empty()
    }
}

enum Outcome {
    Loaded(LoadedFile),
    Failed(FileFailure),
    Skipped(PathBuf),
}

fn load_one(path: &Path, width: i32, options: WaveformOptions, cancel: &CancelToken) -> Outcome {
    if cancel.is_cancelled() {
        return Outcome::Skipped(path.to_path_buf());
    }

    match load_file(path, width, options) {
        Ok(loaded) => Outcome::Loaded(loaded),
        Err(e) => {
            if e.is_decode_error() {
                tracing::warn!("{} is not a usable WAV file: {}", path.display(), e);
            } else {
                tracing::warn!("failed to read {}: {}", path.display(), e);
            }
            Outcome::Failed(FileFailure {
                path: path.to_path_buf(),
                message: format!("File '{}': {}", path.display(), e),
            })
        }
    }
}

/// Load every path, never stopping on a per-file failure
pub fn load_batch<P: AsRef<Path> + Sync>(
    paths: &[P],
    width: i32,
    options: WaveformOptions,
    cancel: &CancelToken,
) -> BatchReport {
    let outcomes: Vec<Outcome> = paths
        .par_iter()
        .map(|path| load_one(path.as_ref(), width, options, cancel))
        .collect();

    let mut report = BatchReport::default();
    for outcome in outcomes {
        match outcome {
            Outcome::Loaded(loaded) => report.loaded.push(loaded),
            Outcome::Failed(failure) => report.failures.push(failure),
            Outcome::Skipped(path) => report.skipped.push(path),
        }
    }

    tracing::info!(
        "batch finished: {} loaded, {} failed, {} skipped",
        report.loaded.len(),
        report.failures.len(),
        report.skipped.len()
    );
    report
}
