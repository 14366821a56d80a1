//! RecordingLogger - テスト用のロガー
//!
//! 受け取ったイベントを順番通りに保持します。

use std::sync::{Mutex, PoisonError};

use crate::ports::LoopLogger;

/// 記録された 1 件のログイベント
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogEvent {
    Info(String),
    Error { message: String, trace: String },
}

impl LogEvent {
    pub fn info(message: impl Into<String>) -> Self {
        LogEvent::Info(message.into())
    }
}

/// RecordingLogger はログイベントをメモリに記録
///
/// # 使用例
/// ```ignore
/// let logger = Arc::new(RecordingLogger::new());
/// let worker_loop = WorkerLoop::new("test", logger.clone());
/// worker_loop.run(&worker, default_delay, &cancel).await;
/// assert_eq!(logger.errors().len(), 1);
/// ```
#[derive(Debug, Default)]
pub struct RecordingLogger {
    events: Mutex<Vec<LogEvent>>,
}

impl RecordingLogger {
    pub fn new() -> Self {
        Self::default()
    }

    /// 記録済みの全イベント（記録順）
    pub fn events(&self) -> Vec<LogEvent> {
        self.lock().clone()
    }

    pub fn infos(&self) -> Vec<String> {
        self.lock()
            .iter()
            .filter_map(|e| match e {
                LogEvent::Info(msg) => Some(msg.clone()),
                LogEvent::Error { .. } => None,
            })
            .collect()
    }

    /// `(message, trace)` のリスト
    pub fn errors(&self) -> Vec<(String, String)> {
        self.lock()
            .iter()
            .filter_map(|e| match e {
                LogEvent::Error { message, trace } => Some((message.clone(), trace.clone())),
                LogEvent::Info(_) => None,
            })
            .collect()
    }

    // テストの panic で poison されても記録は読めるようにする
    fn lock(&self) -> std::sync::MutexGuard<'_, Vec<LogEvent>> {
        self.events.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl LoopLogger for RecordingLogger {
    fn info(&self, message: &str) {
        self.lock().push(LogEvent::Info(message.to_string()));
    }

    fn error(&self, message: &str, trace: &str) {
        self.lock().push(LogEvent::Error {
            message: message.to_string(),
            trace: trace.to_string(),
        });
    }
}
