use crate::enums::PoolKind;
use crate::value_objects::LiquidityDistribution;
use serde::{Deserialize, Serialize};

/// One recorded swap and the two pool snapshots it leaves behind.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SwapEvent {
    pub label: String,
    /// Persisted state after the swap.
    pub base_pool: LiquidityDistribution,
    /// Per-block state after the swap.
    pub temp_pool: LiquidityDistribution,
}

impl SwapEvent {
    pub fn new(
        label: impl Into<String>,
        base_pool: LiquidityDistribution,
        temp_pool: LiquidityDistribution,
    ) -> Self {
        Self {
            label: label.into(),
            base_pool,
            temp_pool,
        }
    }

    /// Snapshot left in `pool` by this swap.
    pub fn snapshot(&self, pool: PoolKind) -> &LiquidityDistribution {
        match pool {
            PoolKind::Base => &self.base_pool,
            PoolKind::Temp => &self.temp_pool,
        }
    }
}
