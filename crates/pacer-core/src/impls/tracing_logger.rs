//! TracingLogger - `tracing` への転送

use crate::ports::LoopLogger;

/// TracingLogger は LoopLogger のイベントを `tracing` に流す
///
/// 出力先やフォーマットは呼び出し側の subscriber が決める。
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingLogger;

impl TracingLogger {
    pub fn new() -> Self {
        Self
    }
}

impl LoopLogger for TracingLogger {
    fn info(&self, message: &str) {
        tracing::info!("{message}");
    }

    fn error(&self, message: &str, trace: &str) {
        tracing::error!(trace = %trace, "{message}");
    }
}
