//! Label table projection.
//!
//! The table shown above the pools has one column per block and one row per
//! swap position. Blocks shorter than the longest one leave their trailing
//! cells empty.

use hookviz_domain::entities::EventLog;
use hookviz_domain::{HookError, Result};
use serde::Serialize;

/// Grid of event labels with its headers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Table {
    /// `"1"`, `"2"`, ... one per swap position.
    row_headers: Vec<String>,
    /// `"Block 1"`, `"Block 2"`, ... one per block.
    column_headers: Vec<String>,
    /// Row-major cells, `None` where a block has no event at that position.
    cells: Vec<Vec<Option<String>>>,
}

impl Table {
    /// Number of rows (the longest block's event count).
    #[must_use]
    pub fn rows(&self) -> usize {
        self.row_headers.len()
    }

    /// Number of columns (the block count).
    #[must_use]
    pub fn columns(&self) -> usize {
        self.column_headers.len()
    }

    /// Label at `(row, col)`, or `None` for an empty or out-of-range cell.
    #[must_use]
    pub fn cell(&self, row: usize, col: usize) -> Option<&str> {
        self.cells
            .get(row)
            .and_then(|r| r.get(col))
            .and_then(|c| c.as_deref())
    }

    #[must_use]
    pub fn row_headers(&self) -> &[String] {
        &self.row_headers
    }

    #[must_use]
    pub fn column_headers(&self) -> &[String] {
        &self.column_headers
    }

    /// Row-major cells.
    #[must_use]
    pub fn cells(&self) -> &[Vec<Option<String>>] {
        &self.cells
    }
}

/// Projects `log` into its label table.
///
/// # Errors
/// Returns `EmptyLog` if the log has no blocks.
pub fn project(log: &EventLog) -> Result<Table> {
    if log.is_empty() {
        return Err(HookError::EmptyLog);
    }

    let rows = log.max_events_per_block();
    let columns = log.block_count();

    let mut cells = vec![vec![None; columns]; rows];
    for (at, event) in log.iter() {
        cells[at.position][at.block] = Some(event.label.clone());
    }

    Ok(Table {
        row_headers: (1..=rows).map(|r| r.to_string()).collect(),
        column_headers: (1..=columns).map(|c| format!("Block {c}")).collect(),
        cells,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use hookviz_domain::entities::{Block, SwapEvent};
    use hookviz_domain::value_objects::LiquidityDistribution;
    use pretty_assertions::assert_eq;

    fn block(labels: &[&str]) -> Block {
        Block::new(
            labels
                .iter()
                .map(|l| {
                    SwapEvent::new(
                        *l,
                        LiquidityDistribution::new(vec![1, 0]),
                        LiquidityDistribution::new(vec![0, 0]),
                    )
                })
                .collect(),
        )
    }

    #[test]
    fn test_project_ragged_blocks() {
        let log = EventLog::new(vec![block(&["a", "b", "c"]), block(&["d"])]).unwrap();
        let table = project(&log).unwrap();

        assert_eq!(table.rows(), 3);
        assert_eq!(table.columns(), 2);
        assert_eq!(table.row_headers(), &["1", "2", "3"]);
        assert_eq!(table.column_headers(), &["Block 1", "Block 2"]);

        assert_eq!(table.cell(0, 0), Some("a"));
        assert_eq!(table.cell(1, 0), Some("b"));
        assert_eq!(table.cell(2, 0), Some("c"));
        assert_eq!(table.cell(0, 1), Some("d"));
        assert_eq!(table.cell(1, 1), None);
        assert_eq!(table.cell(2, 1), None);
        assert_eq!(table.cell(3, 0), None);
    }

    #[test]
    fn test_cell_empty_iff_block_shorter() {
        let log = EventLog::new(vec![block(&["a"]), block(&["b", "c"]), block(&["d", "e", "f"])])
            .unwrap();
        let table = project(&log).unwrap();

        for (col, b) in log.blocks().iter().enumerate() {
            for row in 0..table.rows() {
                assert_eq!(table.cell(row, col).is_none(), b.len() < row + 1);
            }
        }
    }

    #[test]
    fn test_project_is_repeatable() {
        let log = EventLog::new(vec![block(&["a", "b"]), block(&["c"])]).unwrap();
        assert_eq!(project(&log).unwrap(), project(&log).unwrap());
    }

    #[test]
    fn test_project_empty_log() {
        let err = project(&EventLog::default()).unwrap_err();
        assert!(matches!(err, HookError::EmptyLog));
    }
}
