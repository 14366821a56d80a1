//! Ports - 抽象化レイヤー
//!
//! ループが外部と接する境界は 2 つだけです。
//! - **Worker**: 呼び出し側が実装する 1 イテレーション分の処理
//! - **LoopLogger**: ループが出すログイベントの受け口

pub mod logger;
pub mod worker;

pub use self::logger::LoopLogger;
pub use self::worker::Worker;
