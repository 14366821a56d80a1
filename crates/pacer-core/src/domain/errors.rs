//! Errors - イテレーションの失敗
//!
//! キャンセル由来の失敗（Cancelled）と、それ以外の失敗（Failed）を
//! 型で区別します。Cancelled であっても、ループのキャンセル要求と
//! 重なっていなければ graceful stop としては扱いません（`app::classify` を参照）。

use thiserror::Error;

/// IterationError は `Worker::run_iteration` が返す失敗
#[derive(Debug, Error)]
pub enum IterationError {
    /// キャンセル由来の失敗（ネストした処理のタイムアウトなども含む）
    #[error("iteration cancelled: {reason}")]
    Cancelled { reason: String },

    /// それ以外の失敗
    #[error(transparent)]
    Failed(#[from] anyhow::Error),
}

impl IterationError {
    pub fn cancelled(reason: impl Into<String>) -> Self {
        IterationError::Cancelled {
            reason: reason.into(),
        }
    }

    /// 任意のエラーを Failed に包む
    pub fn failed<E>(err: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        IterationError::Failed(anyhow::Error::new(err))
    }

    pub fn is_cancellation(&self) -> bool {
        matches!(self, IterationError::Cancelled { .. })
    }

    /// 診断用トレース
    ///
    /// Failed の場合は anyhow の Debug 表現（cause chain と、
    /// `RUST_BACKTRACE` が有効なら backtrace）を返す。
    pub fn trace(&self) -> String {
        match self {
            IterationError::Cancelled { reason } => format!("cancelled: {reason}"),
            IterationError::Failed(err) => format!("{err:?}"),
        }
    }
}

impl From<tokio::time::error::Elapsed> for IterationError {
    fn from(err: tokio::time::error::Elapsed) -> Self {
        IterationError::cancelled(err.to_string())
    }
}
