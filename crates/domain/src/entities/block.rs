use crate::entities::swap_event::SwapEvent;
use serde::{Deserialize, Serialize};

/// Swap events sharing one temporary-pool lifetime, in execution order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Block {
    pub events: Vec<SwapEvent>,
}

impl Block {
    pub fn new(events: Vec<SwapEvent>) -> Self {
        Self { events }
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}
