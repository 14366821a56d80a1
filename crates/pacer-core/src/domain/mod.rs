//! Domain - ループが扱う値の型
//!
//! - **state**: ExecutionState（Running / Stopped）
//! - **errors**: IterationError（キャンセル由来かどうかを区別する）
//! - **outcome**: IterationOutcome（1 イテレーションの分類結果）

pub mod errors;
pub mod outcome;
pub mod state;

pub use self::errors::IterationError;
pub use self::outcome::IterationOutcome;
pub use self::state::ExecutionState;
