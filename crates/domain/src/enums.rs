use serde::{Deserialize, Serialize};
use std::fmt;

/// Which of the two displayed pools an operation targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PoolKind {
    /// Persisted across blocks.
    Base,
    /// Reset at the start of every block.
    Temp,
}

impl fmt::Display for PoolKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PoolKind::Base => f.pad("base"),
            PoolKind::Temp => f.pad("temp"),
        }
    }
}

/// Semantic zone of a single slot, used to pick its bar colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ZoneTag {
    Available,
    DepletedBoundary,
    Unavailable,
}

/// Bar colours of the three zones.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ZoneColor {
    Green,
    Blue,
    Red,
}

impl ZoneTag {
    pub fn color(self) -> ZoneColor {
        match self {
            ZoneTag::Available => ZoneColor::Green,
            ZoneTag::DepletedBoundary => ZoneColor::Blue,
            ZoneTag::Unavailable => ZoneColor::Red,
        }
    }
}

impl fmt::Display for ZoneColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ZoneColor::Green => f.pad("GREEN"),
            ZoneColor::Blue => f.pad("BLUE"),
            ZoneColor::Red => f.pad("RED"),
        }
    }
}
