//! Prelude module for convenient imports.
//!
//! This module re-exports the most commonly used types from the crate.
//!
//! # Example
//!
//! ```rust
//! use hookviz_sequencer::prelude::*;
//! ```

// Machine
pub use crate::machine::{EventRole, SequencerState, Step, plan_event};

// Operations
pub use crate::operation::{Operation, OperationSink, RecordingSink};

// Sequencer
pub use crate::sequencer::{EventSequencer, PlaybackSummary, play};

// State
pub use crate::state::{PoolCursor, PresentationState};

// Stop conditions
pub use crate::stop::{PlaybackProgress, PlayedEvent, RunToEnd, StopAfter, StopCondition};

// Table
pub use crate::table::{Table, project};
