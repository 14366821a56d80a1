//! Config - ループの設定値
//!
//! `default_delay` はイテレーション失敗時の待ち時間。
//! humantime 形式（"5s", "1m 30s" など）で書ける。

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::PacerError;

/// WorkerConfig はホスト側の設定ファイルに埋め込むための型
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkerConfig {
    #[serde(with = "humantime_serde", default = "default_delay")]
    pub default_delay: Duration,
}

fn default_delay() -> Duration {
    Duration::from_secs(5)
}

impl Default for WorkerConfig {
    fn default() -> Self {
        Self {
            default_delay: default_delay(),
        }
    }
}

impl WorkerConfig {
    /// 起動時検証
    ///
    /// 失敗し続けるイテレーションが待ちなしで回り続けないように、
    /// default_delay = 0 を弾く。
    pub fn validate(&self) -> Result<(), PacerError> {
        if self.default_delay.is_zero() {
            return Err(PacerError::InvalidConfig(
                "default_delay must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }
}
