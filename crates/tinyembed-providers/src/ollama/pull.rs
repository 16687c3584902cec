//! Pull progress mapping
//!
//! Ollama streams one status object per line while pulling a model. Lines
//! carrying a digest describe one layer; the mapper keeps the latest state
//! of every layer and derives the aggregate transfer figures from them.

use tinyembed_domain::error::{Error, Result};
use tinyembed_domain::value_objects::{FileProgress, ProgressEvent, TransferProgress};

use super::wire::PullStatus;
use crate::constants::OLLAMA_PULL_SUCCESS;

/// Turns pull status lines into progress events
#[derive(Debug)]
pub struct PullProgressMapper {
    model: String,
    files: Vec<FileProgress>,
}

impl PullProgressMapper {
    /// Mapper for a pull of `model`
    pub fn new(model: impl Into<String>) -> Self {
        Self {
            model: model.into(),
            files: Vec::new(),
        }
    }

    /// Map one NDJSON line received `elapsed_secs` after the pull started
    ///
    /// Blank lines and the final success line yield `None`. A line carrying
    /// an `error` field fails the pull.
    pub fn map_line(&mut self, line: &str, elapsed_secs: f64) -> Result<Option<ProgressEvent>> {
        let line = line.trim();
        if line.is_empty() {
            return Ok(None);
        }
        let status: PullStatus = serde_json::from_str(line)?;
        self.map_status(status, elapsed_secs)
    }

    /// Map one decoded status object
    pub fn map_status(
        &mut self,
        status: PullStatus,
        elapsed_secs: f64,
    ) -> Result<Option<ProgressEvent>> {
        if let Some(message) = status.error {
            return Err(Error::model_lifecycle(message));
        }
        if status.status == OLLAMA_PULL_SUCCESS {
            return Ok(None);
        }

        if let (Some(digest), Some(total)) = (&status.digest, status.total) {
            self.update_file(digest, total, status.completed.unwrap_or(0));
        }

        let overall = self.overall(elapsed_secs);
        let percent = overall.as_ref().map_or(0.0, |o| {
            if o.bytes_total == 0 {
                0.0
            } else {
                o.bytes_loaded as f64 / o.bytes_total as f64 * 100.0
            }
        });

        Ok(Some(ProgressEvent::Downloading {
            model: self.model.clone(),
            percent,
            message: (!status.status.is_empty()).then_some(status.status),
            files: self.files.clone(),
            overall,
        }))
    }

    fn update_file(&mut self, digest: &str, total: u64, completed: u64) {
        let percent = if total == 0 {
            0.0
        } else {
            completed as f64 / total as f64 * 100.0
        };
        match self.files.iter_mut().find(|f| f.id == digest) {
            Some(file) => {
                file.percent = percent;
                file.bytes_loaded = Some(completed);
                file.bytes_total = Some(total);
            }
            None => self.files.push(FileProgress {
                id: digest.to_string(),
                name: short_digest(digest),
                percent,
                bytes_loaded: Some(completed),
                bytes_total: Some(total),
                speed: None,
                time_remaining: None,
            }),
        }
    }

    fn overall(&self, elapsed_secs: f64) -> Option<TransferProgress> {
        if self.files.is_empty() {
            return None;
        }
        let bytes_total: u64 = self.files.iter().filter_map(|f| f.bytes_total).sum();
        let bytes_loaded: u64 = self.files.iter().filter_map(|f| f.bytes_loaded).sum();
        let speed = if elapsed_secs > 0.0 {
            bytes_loaded as f64 / elapsed_secs
        } else {
            0.0
        };
        let time_remaining = if speed > 0.0 {
            bytes_total.saturating_sub(bytes_loaded) as f64 / speed
        } else {
            0.0
        };
        Some(TransferProgress {
            bytes_loaded,
            bytes_total,
            speed,
            time_remaining,
        })
    }
}

/// `sha256:0123456789abcdef...` shortened to `0123456789ab`
fn short_digest(digest: &str) -> String {
    let hex = digest.rsplit(':').next().unwrap_or(digest);
    hex.chars().take(12).collect()
}
