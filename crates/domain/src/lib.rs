//! Domain model for the sandwich-resistant hook visualizer.
//!
//! This crate holds the pieces that do not depend on playback:
//! - Liquidity distributions and their zone classification
//! - Swap events grouped into blocks, and the event log that holds them
//! - Scenario and chart configuration
//! - The shared error type

/// Zone classification of liquidity distributions.
pub mod classification;
/// Swap events, blocks and the event log.
pub mod entities;
/// Small enums shared across crates.
pub mod enums;
/// Error type.
pub mod error;
/// Scenario configuration and the built-in sandwich attack script.
pub mod scenario;
/// Value objects.
pub mod value_objects;

pub use error::{HookError, Result, SinkError};
