//! State - ループの実行状態
//!
//! # 状態遷移
//! - Start → Running
//! - Running → Stopped: ループ先頭でキャンセルを観測したときのみ
//! - エラーでは Stopped に遷移しない

/// ExecutionState はループの状態を表現
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExecutionState {
    Running,
    Stopped,
}

impl ExecutionState {
    /// ループ先頭のチェック結果から次の状態を返す
    ///
    /// Stopped は終端状態なので、一度 Stopped になったら戻らない。
    pub fn observe(self, cancel_requested: bool) -> Self {
        match self {
            ExecutionState::Running if cancel_requested => ExecutionState::Stopped,
            other => other,
        }
    }

    pub fn is_running(self) -> bool {
        self == ExecutionState::Running
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn running_stays_running_without_cancel() {
        assert_eq!(ExecutionState::Running.observe(false), ExecutionState::Running);
    }

    #[test]
    fn running_stops_on_cancel() {
        assert_eq!(ExecutionState::Running.observe(true), ExecutionState::Stopped);
    }

    #[test]
    fn stopped_is_terminal() {
        assert_eq!(ExecutionState::Stopped.observe(false), ExecutionState::Stopped);
        assert!(!ExecutionState::Stopped.is_running());
    }
}
