//! FnWorker - クロージャから Worker を作る
//!
//! イテレーション本体だけを必須にし、setup / teardown は
//! 何もしないフックで初期化しておく。

use std::future::Future;
use std::pin::Pin;
use std::time::Duration;

use async_trait::async_trait;
use tokio_util::sync::CancellationToken;

use crate::domain::IterationError;
use crate::ports::Worker;

type HookFuture = Pin<Box<dyn Future<Output = Result<(), IterationError>> + Send>>;
type Hook = Box<dyn Fn(CancellationToken) -> HookFuture + Send + Sync>;

/// FnWorker はクロージャで実装された Worker
///
/// クロージャは呼び出しごとに新しい future を作る。
/// 状態を持ち回りたい場合はクロージャ内で `Arc` を明示的に clone する。
///
/// # 使用例
/// ```ignore
/// let worker = FnWorker::new(|cancel: CancellationToken| async move {
///     poll_feed(&cancel).await?;
///     Ok(Duration::from_secs(10))
/// })
/// .with_teardown(|_cancel| async { flush().await.map_err(IterationError::failed) });
/// ```
pub struct FnWorker<F> {
    iteration: F,
    setup: Hook,
    teardown: Hook,
}

impl<F, Fut> FnWorker<F>
where
    F: Fn(CancellationToken) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = Result<Duration, IterationError>> + Send + 'static,
{
    pub fn new(iteration: F) -> Self {
        Self {
            iteration,
            setup: noop_hook(),
            teardown: noop_hook(),
        }
    }

    pub fn with_setup<S, SFut>(mut self, setup: S) -> Self
    where
        S: Fn(CancellationToken) -> SFut + Send + Sync + 'static,
        SFut: Future<Output = Result<(), IterationError>> + Send + 'static,
    {
        self.setup = into_hook(setup);
        self
    }

    pub fn with_teardown<T, TFut>(mut self, teardown: T) -> Self
    where
        T: Fn(CancellationToken) -> TFut + Send + Sync + 'static,
        TFut: Future<Output = Result<(), IterationError>> + Send + 'static,
    {
        self.teardown = into_hook(teardown);
        self
    }
}

fn noop_hook() -> Hook {
    Box::new(|_: CancellationToken| -> HookFuture { Box::pin(async { Ok(()) }) })
}

fn into_hook<H, HFut>(hook: H) -> Hook
where
    H: Fn(CancellationToken) -> HFut + Send + Sync + 'static,
    HFut: Future<Output = Result<(), IterationError>> + Send + 'static,
{
    Box::new(move |cancel: CancellationToken| -> HookFuture { Box::pin(hook(cancel)) })
}

#[async_trait]
impl<F, Fut> Worker for FnWorker<F>
where
    F: Fn(CancellationToken) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = Result<Duration, IterationError>> + Send + 'static,
{
    async fn run_iteration(&self, cancel: &CancellationToken) -> Result<Duration, IterationError> {
        (self.iteration)(cancel.clone()).await
    }

    async fn setup(&self, cancel: &CancellationToken) -> Result<(), IterationError> {
        (self.setup)(cancel.clone()).await
    }

    async fn teardown(&self, cancel: &CancellationToken) -> Result<(), IterationError> {
        (self.teardown)(cancel.clone()).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::anyhow;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[tokio::test]
    async fn hooks_default_to_noop() {
        let worker = FnWorker::new(|_cancel| async { Ok(Duration::from_secs(1)) });
        let cancel = CancellationToken::new();

        assert!(worker.setup(&cancel).await.is_ok());
        assert!(worker.teardown(&cancel).await.is_ok());
        assert_eq!(
            worker.run_iteration(&cancel).await.unwrap(),
            Duration::from_secs(1)
        );
    }

    #[tokio::test]
    async fn custom_hooks_are_invoked() {
        let calls = Arc::new(AtomicUsize::new(0));
        let setup_calls = calls.clone();
        let worker = FnWorker::new(|_cancel| async { Ok(Duration::ZERO) })
            .with_setup(move |_cancel| {
                let calls = setup_calls.clone();
                async move {
                    calls.fetch_add(1, Ordering::SeqCst);
                    Ok(())
                }
            })
            .with_teardown(|_cancel| async { Err(anyhow!("flush failed").into()) });
        let cancel = CancellationToken::new();

        worker.setup(&cancel).await.unwrap();
        let err = worker.teardown(&cancel).await.unwrap_err();

        assert_eq!(calls.load(Ordering::SeqCst), 1);
        assert_eq!(err.to_string(), "flush failed");
    }

    #[tokio::test]
    async fn iteration_sees_the_loop_token() {
        let worker = FnWorker::new(|cancel: CancellationToken| async move {
            if cancel.is_cancelled() {
                return Err(IterationError::cancelled("stop requested"));
            }
            Ok(Duration::ZERO)
        });
        let cancel = CancellationToken::new();
        cancel.cancel();

        let err = worker.run_iteration(&cancel).await.unwrap_err();
        assert!(err.is_cancellation());
    }
}
