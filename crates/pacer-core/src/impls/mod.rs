//! Impls - ports の実装
//!
//! # 含まれる実装
//! - **TracingLogger**: `tracing` へ転送する LoopLogger（デフォルト）
//! - **RecordingLogger**: イベントをメモリに貯める LoopLogger（テスト用）
//! - **FnWorker**: クロージャから Worker を作るアダプタ

pub mod fn_worker;
pub mod recording_logger;
pub mod tracing_logger;

// 主要な型を再エクスポート
pub use self::fn_worker::FnWorker;
pub use self::recording_logger::{LogEvent, RecordingLogger};
pub use self::tracing_logger::TracingLogger;
