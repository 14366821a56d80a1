//! LoopLogger port - ログ出力先の抽象化
//!
//! # 実装
//! - **TracingLogger**: `tracing` へ転送（本番用）
//! - **RecordingLogger**: メモリに記録（テスト用）

/// LoopLogger はループのログイベントを受け取る
///
/// ループが出すのは次の 3 種類だけ:
/// - 開始時に `info` 1 回
/// - 停止時に `info` 1 回
/// - IterationFault ごとに `error` 1 回（message + trace）
///
/// # Thread Safety
/// - `Send + Sync` を要求（`Arc<dyn LoopLogger>` で共有するため）
pub trait LoopLogger: Send + Sync {
    fn info(&self, message: &str);

    fn error(&self, message: &str, trace: &str);
}
