//! WorkerLoopBuilder - WorkerLoop の構築
//!
//! ロガーを指定しなければ `TracingLogger` を使う。

use std::sync::Arc;

use super::worker_loop::WorkerLoop;
use crate::impls::TracingLogger;
use crate::ports::LoopLogger;

const DEFAULT_NAME: &str = "worker";

/// WorkerLoopBuilder は WorkerLoop を構築
///
/// # 使用例
/// ```ignore
/// let worker_loop = WorkerLoop::builder()
///     .name("index-refresher")
///     .logger(Arc::new(RecordingLogger::new()))
///     .build();
/// ```
pub struct WorkerLoopBuilder {
    name: Option<String>,
    logger: Option<Arc<dyn LoopLogger>>,
}

impl WorkerLoopBuilder {
    pub fn new() -> Self {
        Self {
            name: None,
            logger: None,
        }
    }

    /// tracing span に載る名前
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn logger(mut self, logger: Arc<dyn LoopLogger>) -> Self {
        self.logger = Some(logger);
        self
    }

    pub fn build(self) -> WorkerLoop {
        let name = self.name.unwrap_or_else(|| DEFAULT_NAME.to_string());
        let logger = self
            .logger
            .unwrap_or_else(|| Arc::new(TracingLogger::new()));
        WorkerLoop::new(name, logger)
    }
}

impl Default for WorkerLoopBuilder {
    fn default() -> Self {
        Self::new()
    }
}
