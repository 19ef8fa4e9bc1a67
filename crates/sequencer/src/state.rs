//! Presentation state management.
//!
//! Each transition animates from the snapshot currently on screen to the
//! next one, so only the last two snapshots of a pool are ever needed.

use crate::machine::EventRole;
use hookviz_domain::enums::PoolKind;
use hookviz_domain::entities::SwapEvent;
use hookviz_domain::value_objects::LiquidityDistribution;

/// Previous and current snapshot of one displayed pool.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PoolCursor {
    /// Snapshot shown before the last transition.
    previous: Option<LiquidityDistribution>,
    /// Snapshot on screen.
    current: LiquidityDistribution,
}

impl PoolCursor {
    /// Creates a cursor showing `initial`, with no history.
    #[must_use]
    pub fn new(initial: LiquidityDistribution) -> Self {
        Self {
            previous: None,
            current: initial,
        }
    }

    #[must_use]
    pub fn current(&self) -> &LiquidityDistribution {
        &self.current
    }

    #[must_use]
    pub fn previous(&self) -> Option<&LiquidityDistribution> {
        self.previous.as_ref()
    }

    /// Cursor after animating from the current snapshot to `to`.
    #[must_use]
    pub fn advanced(&self, to: &LiquidityDistribution) -> Self {
        Self {
            previous: Some(self.current.clone()),
            current: to.clone(),
        }
    }

    /// Cursor after animating from `from` to `to`, ignoring the current snapshot.
    #[must_use]
    pub fn reset(from: &LiquidityDistribution, to: &LiquidityDistribution) -> Self {
        Self {
            previous: Some(from.clone()),
            current: to.clone(),
        }
    }
}

/// What the renderer currently shows for both pools.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PresentationState {
    base: PoolCursor,
    temp: PoolCursor,
}

impl PresentationState {
    /// Both pools start from `initial`.
    #[must_use]
    pub fn new(initial: LiquidityDistribution) -> Self {
        Self {
            base: PoolCursor::new(initial.clone()),
            temp: PoolCursor::new(initial),
        }
    }

    #[must_use]
    pub fn base(&self) -> &PoolCursor {
        &self.base
    }

    #[must_use]
    pub fn temp(&self) -> &PoolCursor {
        &self.temp
    }

    #[must_use]
    pub fn cursor(&self, pool: PoolKind) -> &PoolCursor {
        match pool {
            PoolKind::Base => &self.base,
            PoolKind::Temp => &self.temp,
        }
    }

    /// Slot count of the displayed snapshots.
    #[must_use]
    pub fn width(&self) -> usize {
        self.base.current.width()
    }

    /// Snapshot the temporary pool starts the block from: the persisted
    /// state on screen when the block opens.
    #[must_use]
    pub fn block_reset(&self) -> &LiquidityDistribution {
        &self.base.current
    }

    /// Where a transition of `pool` starts for an event playing in `role`.
    #[must_use]
    pub fn transition_origin(&self, role: EventRole, pool: PoolKind) -> &LiquidityDistribution {
        match (role, pool) {
            (EventRole::FirstInBlock, PoolKind::Temp) => self.block_reset(),
            (_, pool) => self.cursor(pool).current(),
        }
    }

    /// State once `event` has been fully played in `role`.
    #[must_use]
    pub fn after(&self, role: EventRole, event: &SwapEvent) -> Self {
        let temp = match role {
            EventRole::FirstInBlock => PoolCursor::reset(self.block_reset(), &event.temp_pool),
            EventRole::Subsequent => self.temp.advanced(&event.temp_pool),
        };
        Self {
            base: self.base.advanced(&event.base_pool),
            temp,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dist(slots: &[u32]) -> LiquidityDistribution {
        LiquidityDistribution::new(slots.to_vec())
    }

    #[test]
    fn test_new_state_has_no_history() {
        let state = PresentationState::new(dist(&[1, 1, 0]));
        assert_eq!(state.base().current(), &dist(&[1, 1, 0]));
        assert_eq!(state.temp().current(), &dist(&[1, 1, 0]));
        assert!(state.base().previous().is_none());
        assert_eq!(state.width(), 3);
    }

    #[test]
    fn test_after_subsequent_advances_both() {
        let state = PresentationState::new(dist(&[1, 1]));
        let event = SwapEvent::new("swap", dist(&[1, 0]), dist(&[0, 0]));
        let next = state.after(EventRole::Subsequent, &event);

        assert_eq!(next.base().previous(), Some(&dist(&[1, 1])));
        assert_eq!(next.base().current(), &dist(&[1, 0]));
        assert_eq!(next.temp().previous(), Some(&dist(&[1, 1])));
        assert_eq!(next.temp().current(), &dist(&[0, 0]));
    }

    #[test]
    fn test_after_first_in_block_resets_temp_to_base() {
        let state = PresentationState::new(dist(&[1, 1]));
        let first = SwapEvent::new("a", dist(&[2, 1]), dist(&[0, 1]));
        let second = SwapEvent::new("b", dist(&[3, 1]), dist(&[0, 0]));
        let end_of_block = state
            .after(EventRole::FirstInBlock, &first)
            .after(EventRole::Subsequent, &second);

        let next_block = SwapEvent::new("c", dist(&[4, 1]), dist(&[4, 0]));
        assert_eq!(
            end_of_block.transition_origin(EventRole::FirstInBlock, PoolKind::Temp),
            &dist(&[3, 1])
        );
        let next = end_of_block.after(EventRole::FirstInBlock, &next_block);
        // The previous block's final temp snapshot [0, 0] is never read.
        assert_eq!(next.temp().previous(), Some(&dist(&[3, 1])));
        assert_eq!(next.temp().current(), &dist(&[4, 0]));
    }

    #[test]
    fn test_transition_origin_uses_current_otherwise() {
        let state = PresentationState::new(dist(&[1, 0]));
        let state = state.after(
            EventRole::Subsequent,
            &SwapEvent::new("x", dist(&[2, 0]), dist(&[5, 0])),
        );
        assert_eq!(
            state.transition_origin(EventRole::Subsequent, PoolKind::Temp),
            &dist(&[5, 0])
        );
        assert_eq!(
            state.transition_origin(EventRole::FirstInBlock, PoolKind::Base),
            &dist(&[2, 0])
        );
    }
}
