//! DirectoryPoller - サンプルの Worker
//!
//! ディレクトリのエントリ数を数え、前回から変化していれば短い間隔、
//! 変化がなければ長い間隔を返す（適応的ポーリング）。

use std::path::{Path, PathBuf};
use std::sync::{Mutex, PoisonError};
use std::time::Duration;

use anyhow::Context;
use async_trait::async_trait;
use pacer_core::{IterationError, Worker};
use tokio_util::sync::CancellationToken;
use tracing::info;

pub struct DirectoryPoller {
    path: PathBuf,
    idle_delay: Duration,
    busy_delay: Duration,
    last_count: Mutex<Option<usize>>,
}

impl DirectoryPoller {
    pub fn new(path: PathBuf, idle_delay: Duration, busy_delay: Duration) -> Self {
        Self {
            path,
            idle_delay,
            busy_delay,
            last_count: Mutex::new(None),
        }
    }

    pub fn last_count(&self) -> Option<usize> {
        *self.last_count.lock().unwrap_or_else(PoisonError::into_inner)
    }

    async fn scan(&self, cancel: &CancellationToken) -> Result<usize, IterationError> {
        tokio::select! {
            biased;
            _ = cancel.cancelled() => Err(IterationError::cancelled("scan interrupted")),
            res = count_entries(&self.path) => Ok(res?),
        }
    }

    fn record(&self, count: usize) -> Option<usize> {
        self.last_count
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .replace(count)
    }
}

async fn count_entries(path: &Path) -> anyhow::Result<usize> {
    let mut dir = tokio::fs::read_dir(path)
        .await
        .with_context(|| format!("failed to read directory {}", path.display()))?;
    let mut n = 0;
    while dir.next_entry().await?.is_some() {
        n += 1;
    }
    Ok(n)
}

#[async_trait]
impl Worker for DirectoryPoller {
    async fn run_iteration(&self, cancel: &CancellationToken) -> Result<Duration, IterationError> {
        let count = self.scan(cancel).await?;
        let previous = self.record(count);

        if previous == Some(count) {
            Ok(self.idle_delay)
        } else {
            info!(path = %self.path.display(), ?previous, count, "directory changed");
            Ok(self.busy_delay)
        }
    }

    async fn setup(&self, cancel: &CancellationToken) -> Result<(), IterationError> {
        let count = self.scan(cancel).await?;
        self.record(count);
        info!(path = %self.path.display(), count, "initial scan");
        Ok(())
    }

    async fn teardown(&self, _cancel: &CancellationToken) -> Result<(), IterationError> {
        info!(path = %self.path.display(), count = ?self.last_count(), "final scan result");
        Ok(())
    }
}
