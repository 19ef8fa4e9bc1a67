use crate::error::{HookError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Liquidity per price tick, one slot per bucket.
///
/// Built from raw integers through [`LiquidityDistribution::try_from_raw`],
/// which rejects negative values. Deserialisation goes through the same check.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "Vec<i64>", into = "Vec<u32>")]
pub struct LiquidityDistribution {
    slots: Vec<u32>,
}

impl LiquidityDistribution {
    pub fn new(slots: Vec<u32>) -> Self {
        Self { slots }
    }

    pub fn try_from_raw(raw: &[i64]) -> Result<Self> {
        let slots = raw
            .iter()
            .enumerate()
            .map(|(i, &v)| {
                u32::try_from(v).map_err(|_| {
                    HookError::invalid_distribution(format!("slot {i} has value {v}"))
                })
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(Self { slots })
    }

    pub fn slots(&self) -> &[u32] {
        &self.slots
    }

    pub fn width(&self) -> usize {
        self.slots.len()
    }

    pub fn max(&self) -> u32 {
        self.slots.iter().copied().max().unwrap_or(0)
    }

    /// Fails unless `self` has exactly `width` slots.
    pub fn ensure_width(&self, width: usize, what: &str) -> Result<()> {
        if self.width() != width {
            return Err(HookError::invalid_distribution(format!(
                "{what} has {} slots, expected {width}",
                self.width()
            )));
        }
        Ok(())
    }
}

impl TryFrom<Vec<i64>> for LiquidityDistribution {
    type Error = HookError;

    fn try_from(raw: Vec<i64>) -> Result<Self> {
        Self::try_from_raw(&raw)
    }
}

impl From<LiquidityDistribution> for Vec<u32> {
    fn from(d: LiquidityDistribution) -> Self {
        d.slots
    }
}

impl fmt::Display for LiquidityDistribution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, v) in self.slots.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{v}")?;
        }
        write!(f, "]")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_try_from_raw_rejects_negative() {
        let err = LiquidityDistribution::try_from_raw(&[1, 0, -2]).unwrap_err();
        assert!(matches!(err, HookError::InvalidDistribution { .. }));
        assert!(err.to_string().contains("slot 2"));
    }

    #[test]
    fn test_deserialize_validates() {
        let ok: LiquidityDistribution = serde_json::from_str("[1, 0, 3]").unwrap();
        assert_eq!(ok.slots(), &[1, 0, 3]);
        assert_eq!(ok.max(), 3);

        assert!(serde_json::from_str::<LiquidityDistribution>("[1, -1]").is_err());
        assert!(serde_json::from_str::<LiquidityDistribution>("[1, \"a\"]").is_err());
    }

    #[test]
    fn test_ensure_width() {
        let d = LiquidityDistribution::new(vec![1, 1, 1]);
        assert!(d.ensure_width(3, "initial").is_ok());
        let err = d.ensure_width(4, "initial").unwrap_err();
        assert_eq!(
            err.to_string(),
            "Invalid liquidity distribution: initial has 3 slots, expected 4"
        );
    }

    #[test]
    fn test_display() {
        let d = LiquidityDistribution::new(vec![1, 0, 2]);
        assert_eq!(d.to_string(), "[1, 0, 2]");
    }
}
