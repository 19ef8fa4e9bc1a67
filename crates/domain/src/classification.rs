//! Zone classification of a liquidity distribution.
//!
//! Liquidity drains outward from the current price, so a single left-to-right
//! pass is enough: slots before the first empty slot are still reachable,
//! empty slots mark the depleted boundary, and anything after it is out of
//! reach for this direction of trade.

use crate::enums::{ZoneColor, ZoneTag};
use crate::error::Result;
use crate::value_objects::LiquidityDistribution;

/// Tags every slot of `distribution` with its zone.
///
/// The output has the same length as the input and always reads
/// `Available* (DepletedBoundary | Unavailable)*`, with no `Available`
/// after the first `DepletedBoundary`.
#[must_use]
pub fn classify(distribution: &LiquidityDistribution) -> Vec<ZoneTag> {
    let mut crossed_zero = false;
    distribution
        .slots()
        .iter()
        .map(|&value| {
            if value == 0 {
                crossed_zero = true;
                ZoneTag::DepletedBoundary
            } else if crossed_zero {
                ZoneTag::Unavailable
            } else {
                ZoneTag::Available
            }
        })
        .collect()
}

/// Validates raw values and classifies them.
///
/// # Errors
/// Returns `InvalidDistribution` if any value is negative.
pub fn classify_raw(raw: &[i64]) -> Result<Vec<ZoneTag>> {
    let distribution = LiquidityDistribution::try_from_raw(raw)?;
    Ok(classify(&distribution))
}

/// Bar colours for `distribution`, one per slot.
#[must_use]
pub fn bar_colors(distribution: &LiquidityDistribution) -> Vec<ZoneColor> {
    classify(distribution)
        .into_iter()
        .map(ZoneTag::color)
        .collect()
}
