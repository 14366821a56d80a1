//! pacer-core
//!
//! 呼び出し側が用意した 1 イテレーション分の処理を、キャンセルされるまで
//! 繰り返し実行するループ。
//!
//! # モジュール構成
//! - **domain**: ExecutionState, IterationError, IterationOutcome
//! - **ports**: Worker（繰り返す処理）, LoopLogger（ログの受け口）
//! - **app**: WorkerLoop, WorkerLoopBuilder, delay, classify
//! - **impls**: TracingLogger, RecordingLogger, FnWorker
//! - **config**: WorkerConfig
//! - **error**: PacerError

pub mod app;
pub mod config;
pub mod domain;
pub mod error;
pub mod impls;
pub mod ports;

pub use app::{WorkerLoop, WorkerLoopBuilder};
pub use config::WorkerConfig;
pub use domain::{ExecutionState, IterationError, IterationOutcome};
pub use error::PacerError;
pub use ports::{LoopLogger, Worker};
