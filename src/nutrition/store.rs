use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use thiserror::Error;
use tokio::fs;

use crate::config::AppConfig;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Read-only access to the externally maintained daily log files.
/// A missing file is normal (a day with nothing written) and comes back as
/// `Ok(None)`; only genuine read failures surface as errors.
#[async_trait]
pub trait LogStore: Send + Sync {
    /// Raw text of the structured nutrition log for `date` (`YYYY-MM-DD`).
    async fn nutrition_log(&self, date: &str) -> Result<Option<String>, StoreError>;

    /// Raw text of the free-form memory journal for `date`.
    async fn journal(&self, date: &str) -> Result<Option<String>, StoreError>;
}

pub struct FsLogStore {
    nutrition_dir: PathBuf,
    memory_dir: PathBuf,
}

impl FsLogStore {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            nutrition_dir: config.nutrition_dir(),
            memory_dir: config.memory_dir(),
        }
    }
}

#[async_trait]
impl LogStore for FsLogStore {
    async fn nutrition_log(&self, date: &str) -> Result<Option<String>, StoreError> {
        // Logs are partitioned by year-month: nutrition/daily/2026-02/2026-02-16.md
        let Some(year_month) = date.get(..7) else {
            return Ok(None);
        };
        let path = self
            .nutrition_dir
            .join(year_month)
            .join(format!("{date}.md"));
        read_optional(&path).await
    }

    async fn journal(&self, date: &str) -> Result<Option<String>, StoreError> {
        let path = self.memory_dir.join(format!("{date}.md"));
        read_optional(&path).await
    }
}

async fn read_optional(path: &Path) -> Result<Option<String>, StoreError> {
    match fs::read_to_string(path).await {
        Ok(content) => Ok(Some(content)),
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
        Err(e) => Err(StoreError::Read {
            path: path.to_path_buf(),
            source: e,
        }),
    }
}
