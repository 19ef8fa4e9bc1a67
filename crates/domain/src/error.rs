use thiserror::Error;

pub type Result<T> = std::result::Result<T, HookError>;

/// Failure reported by a rendering collaborator when it rejects an operation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct SinkError {
    pub message: String,
}

impl SinkError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

#[derive(Debug, Error)]
pub enum HookError {
    #[error("Invalid liquidity distribution: {reason}")]
    InvalidDistribution { reason: String },

    #[error("Event log has no blocks")]
    EmptyLog,

    #[error("Block {block} has no swap events")]
    EmptyBlock { block: usize },

    #[error("Rendering sink failed: {0}")]
    SinkFailure(#[from] SinkError),

    #[error("Invalid scenario: {0}")]
    InvalidScenario(String),
}

impl HookError {
    pub fn invalid_distribution(reason: impl Into<String>) -> Self {
        Self::InvalidDistribution {
            reason: reason.into(),
        }
    }
}

impl From<serde_json::Error> for HookError {
    fn from(err: serde_json::Error) -> Self {
        Self::InvalidScenario(err.to_string())
    }
}
