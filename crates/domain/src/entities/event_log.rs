//! The complete swap script of one animation run.

use crate::entities::block::Block;
use crate::entities::swap_event::SwapEvent;
use crate::error::{HookError, Result};
use serde::{Deserialize, Serialize};

/// Location of an event: block index and position inside that block, both 0-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct EventPosition {
    pub block: usize,
    pub position: usize,
}

impl EventPosition {
    #[must_use]
    pub fn new(block: usize, position: usize) -> Self {
        Self { block, position }
    }

    /// Whether this is the first swap of its block.
    #[must_use]
    pub fn is_first_in_block(&self) -> bool {
        self.position == 0
    }
}

/// Ordered blocks of swap events.
///
/// Every block holds at least one event and every snapshot has the same
/// width. A log without blocks is allowed here; projection and playback
/// reject it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Block>", into = "Vec<Block>")]
pub struct EventLog {
    blocks: Vec<Block>,
}

impl EventLog {
    /// Builds a log, checking block contents and snapshot widths.
    ///
    /// # Errors
    /// `EmptyBlock` for a block without events, `InvalidDistribution` when
    /// snapshot widths differ.
    pub fn new(blocks: Vec<Block>) -> Result<Self> {
        let mut width = None;
        for (b, block) in blocks.iter().enumerate() {
            if block.is_empty() {
                return Err(HookError::EmptyBlock { block: b });
            }
            for (p, event) in block.events.iter().enumerate() {
                let expected = *width.get_or_insert(event.base_pool.width());
                event
                    .base_pool
                    .ensure_width(expected, &format!("base pool of event {b}.{p}"))?;
                event
                    .temp_pool
                    .ensure_width(expected, &format!("temp pool of event {b}.{p}"))?;
            }
        }
        Ok(Self { blocks })
    }

    #[must_use]
    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    #[must_use]
    pub fn block_count(&self) -> usize {
        self.blocks.len()
    }

    /// Largest number of events in any block.
    #[must_use]
    pub fn max_events_per_block(&self) -> usize {
        self.blocks.iter().map(Block::len).max().unwrap_or(0)
    }

    #[must_use]
    pub fn event_count(&self) -> usize {
        self.blocks.iter().map(Block::len).sum()
    }

    /// Slot count shared by every snapshot, `None` for an empty log.
    #[must_use]
    pub fn width(&self) -> Option<usize> {
        self.blocks
            .first()
            .and_then(|b| b.events.first())
            .map(|e| e.base_pool.width())
    }

    #[must_use]
    pub fn get(&self, at: EventPosition) -> Option<&SwapEvent> {
        self.blocks
            .get(at.block)
            .and_then(|b| b.events.get(at.position))
    }

    /// Events in (block, position) order.
    pub fn iter(&self) -> impl Iterator<Item = (EventPosition, &SwapEvent)> {
        self.blocks.iter().enumerate().flat_map(|(b, block)| {
            block
                .events
                .iter()
                .enumerate()
                .map(move |(p, event)| (EventPosition::new(b, p), event))
        })
    }
}

impl TryFrom<Vec<Block>> for EventLog {
    type Error = HookError;

    fn try_from(blocks: Vec<Block>) -> Result<Self> {
        Self::new(blocks)
    }
}

impl From<EventLog> for Vec<Block> {
    fn from(log: EventLog) -> Self {
        log.blocks
    }
}
