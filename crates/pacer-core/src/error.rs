use thiserror::Error;

#[derive(Debug, Error)]
pub enum PacerError {
    #[error("invalid config: {0}")]
    InvalidConfig(String),
}
