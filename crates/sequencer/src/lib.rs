//! Playback engine for the sandwich-resistant hook visualizer.
//!
//! This crate turns an event log into what a renderer needs:
//! - The label table shown above the pools
//! - The ordered stream of highlight and transition operations
//! - The presentation state both pools are displayed in

/// Prelude module for convenient imports.
pub mod prelude;

/// Per-event state machine.
pub mod machine;
/// Operations and the sink that consumes them.
pub mod operation;
/// Event sequencer.
pub mod sequencer;
/// Displayed pool state.
pub mod state;
/// Cooperative stop conditions.
pub mod stop;
/// Label table projection.
pub mod table;
