//! WorkerLoop - 繰り返し実行ループ
//!
//! # フロー
//! 1. "worker started" を記録
//! 2. キャンセル済みなら Stopped へ遷移して終了（唯一の終了経路）
//! 3. Worker::run_iteration() を実行
//! 4. 結果を分類（`classify`）
//!    - Success(delay): delay だけ待つ
//!    - Cancelled: 何もせず 2 へ
//!    - Fault(err): error を記録して default_delay だけ待つ
//! 5. 2 へ戻る
//!
//! 待機はキャンセルで中断される。実行中のイテレーションは中断しない
//! （渡した token を見ない Worker はシャットダウンを遅らせる）。

use std::sync::Arc;
use std::time::Duration;

use tokio_util::sync::CancellationToken;
use tracing::Instrument;

use super::builder::WorkerLoopBuilder;
use super::delay;
use super::fault::classify;
use crate::domain::{ExecutionState, IterationOutcome};
use crate::ports::{LoopLogger, Worker};

pub(crate) const STARTED: &str = "worker started";
pub(crate) const STOPPED: &str = "worker stopped";

/// WorkerLoop は Worker をキャンセルされるまで回し続ける
///
/// イテレーションの失敗で `run` が終わることはない。
/// `run` が返るのはキャンセルを観測したときだけ。
pub struct WorkerLoop {
    name: String,
    logger: Arc<dyn LoopLogger>,
}

impl WorkerLoop {
    pub fn new(name: impl Into<String>, logger: Arc<dyn LoopLogger>) -> Self {
        Self {
            name: name.into(),
            logger,
        }
    }

    pub fn builder() -> WorkerLoopBuilder {
        WorkerLoopBuilder::new()
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// キャンセルされるまで `worker` を実行する
    ///
    /// # 引数
    /// - `default_delay`: イテレーションが失敗したときの待ち時間
    /// - `cancel`: ループ先頭、イテレーション、待機のすべてに渡される
    ///
    /// `setup` / `teardown` は呼ばない。
    pub async fn run<W>(&self, worker: &W, default_delay: Duration, cancel: &CancellationToken)
    where
        W: Worker + ?Sized,
    {
        let span = tracing::info_span!("worker_loop", name = %self.name);
        self.drive(worker, default_delay, cancel)
            .instrument(span)
            .await
    }

    async fn drive<W>(&self, worker: &W, default_delay: Duration, cancel: &CancellationToken)
    where
        W: Worker + ?Sized,
    {
        self.logger.info(STARTED);

        let mut state = ExecutionState::Running;
        loop {
            state = state.observe(cancel.is_cancelled());
            if !state.is_running() {
                break;
            }

            let result = worker.run_iteration(cancel).await;

            match classify(result, cancel.is_cancelled()) {
                IterationOutcome::Success(next) => {
                    delay::wait(next, cancel).await;
                }
                // 次のループ先頭で Stopped に遷移する
                IterationOutcome::Cancelled => {}
                IterationOutcome::Fault(err) => {
                    self.logger.error(&err.to_string(), &err.trace());
                    delay::wait(default_delay, cancel).await;
                }
            }
        }

        self.logger.info(STOPPED);
    }
}
