//! Worker port - 繰り返し実行される処理の定義

use std::time::Duration;

use async_trait::async_trait;
use tokio_util::sync::CancellationToken;

use crate::domain::IterationError;

/// Worker は 1 イテレーション分の処理を提供する
///
/// # 使用例
/// ```ignore
/// struct QueueDrainer;
///
/// #[async_trait]
/// impl Worker for QueueDrainer {
///     async fn run_iteration(&self, cancel: &CancellationToken) -> Result<Duration, IterationError> {
///         let drained = drain_once(cancel).await?;
///         Ok(if drained == 0 { Duration::from_secs(30) } else { Duration::ZERO })
///     }
/// }
/// ```
///
/// # 契約
/// - `run_iteration` だけが必須。戻り値は次のイテレーションまでの待ち時間
///   （`Duration::ZERO` ならすぐに次を実行）
/// - `setup` / `teardown` はデフォルトで何もしない。
///   `WorkerLoop::run` はこれらを呼ばないので、必要なら呼び出し側が
///   ループの前後で呼ぶ
/// - 1 つのインスタンスに対して同時に 2 つのループを回すのは呼び出し側の誤り
///   （ループ側では検出しない）
#[async_trait]
pub trait Worker: Send + Sync {
    async fn run_iteration(&self, cancel: &CancellationToken) -> Result<Duration, IterationError>;

    async fn setup(&self, _cancel: &CancellationToken) -> Result<(), IterationError> {
        Ok(())
    }

    async fn teardown(&self, _cancel: &CancellationToken) -> Result<(), IterationError> {
        Ok(())
    }
}
