//! Operations handed to the rendering collaborator.

use hookviz_domain::SinkError;
use hookviz_domain::enums::PoolKind;
use hookviz_domain::value_objects::LiquidityDistribution;
use serde::{Deserialize, Serialize};
use std::fmt;

/// One primitive instruction for the renderer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum Operation {
    /// Draw the highlight frame around a pool.
    Highlight { pool: PoolKind },
    /// Remove the highlight frame from a pool.
    Unhighlight { pool: PoolKind },
    /// Animate a pool from one snapshot to the next.
    Transition {
        pool: PoolKind,
        from: LiquidityDistribution,
        to: LiquidityDistribution,
    },
    /// Highlight a cell of the label table.
    HighlightCell { row: usize, col: usize },
    /// Remove the highlight from a table cell.
    UnhighlightCell { row: usize, col: usize },
}

impl Operation {
    /// True for the four per-event pool steps, false for the table cell bracket.
    #[must_use]
    pub fn is_pool_step(&self) -> bool {
        matches!(
            self,
            Operation::Highlight { .. }
                | Operation::Unhighlight { .. }
                | Operation::Transition { .. }
        )
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operation::Highlight { pool } => write!(f, "highlight {pool}"),
            Operation::Unhighlight { pool } => write!(f, "unhighlight {pool}"),
            Operation::Transition { pool, from, to } => {
                write!(f, "transition {pool} {from} -> {to}")
            }
            Operation::HighlightCell { row, col } => write!(f, "highlight cell ({row}, {col})"),
            Operation::UnhighlightCell { row, col } => {
                write!(f, "unhighlight cell ({row}, {col})")
            }
        }
    }
}

/// Consumer of the operation stream, implemented by the renderer.
///
/// Each call is synchronous: the operation is considered finished when
/// `apply` returns. An error aborts playback.
pub trait OperationSink {
    /// Applies a single operation.
    fn apply(&mut self, op: &Operation) -> Result<(), SinkError>;
}

impl<S: OperationSink + ?Sized> OperationSink for &mut S {
    fn apply(&mut self, op: &Operation) -> Result<(), SinkError> {
        (**self).apply(op)
    }
}

/// Sink that keeps every operation in memory.
#[derive(Debug, Clone, Default)]
pub struct RecordingSink {
    operations: Vec<Operation>,
}

impl RecordingSink {
    /// Creates an empty recording sink.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// All operations received, in order.
    #[must_use]
    pub fn operations(&self) -> &[Operation] {
        &self.operations
    }

    /// Operations received, without the table cell bracket.
    #[must_use]
    pub fn pool_steps(&self) -> Vec<&Operation> {
        self.operations.iter().filter(|op| op.is_pool_step()).collect()
    }
}

impl OperationSink for RecordingSink {
    fn apply(&mut self, op: &Operation) -> Result<(), SinkError> {
        self.operations.push(op.clone());
        Ok(())
    }
}
