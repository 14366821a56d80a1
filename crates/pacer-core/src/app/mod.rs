//! App - ループ本体
//!
//! # 主要コンポーネント
//! - **WorkerLoop**: メインループ（check → iterate → classify → wait）
//! - **WorkerLoopBuilder**: 名前とロガーのワイヤリング
//! - **delay**: キャンセル可能な待機
//! - **fault**: イテレーション結果の分類（graceful cancel / fault）

pub mod builder;
pub mod delay;
pub mod fault;
pub mod worker_loop;

// 主要な型を再エクスポート
pub use self::builder::WorkerLoopBuilder;
pub use self::delay::{WaitResult, wait};
pub use self::fault::classify;
pub use self::worker_loop::WorkerLoop;
