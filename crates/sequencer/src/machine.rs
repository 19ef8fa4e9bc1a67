//! Per-event state machine.
//!
//! Every event plays as four steps. The role of the event decides which pool
//! leads: the first swap of a block is measured against the persisted base
//! state, so base is highlighted and updated first; later swaps are measured
//! against the temporary state accumulated in the block, so temp leads and
//! base catches up.
//!
//! ```text
//! Idle ──► FirstInBlock(Highlight ► LeadTransition ► TrailTransition ► Unhighlight) ──► Idle
//!   │                                                                                    │
//!   └────► Subsequent  (Highlight ► LeadTransition ► TrailTransition ► Unhighlight) ─────┤
//!                                                                                        ▼
//!                                                                                       Done
//! ```

use crate::operation::Operation;
use crate::state::PresentationState;
use hookviz_domain::entities::{EventPosition, SwapEvent};
use hookviz_domain::enums::PoolKind;

/// How an event is played, from its position in the block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventRole {
    /// Position 0: delta against the base state.
    FirstInBlock,
    /// Any later position: delta against the temporary state.
    Subsequent,
}

impl EventRole {
    #[must_use]
    pub fn for_position(at: EventPosition) -> Self {
        if at.is_first_in_block() {
            EventRole::FirstInBlock
        } else {
            EventRole::Subsequent
        }
    }

    /// Pool highlighted and transitioned first.
    #[must_use]
    pub fn lead(self) -> PoolKind {
        match self {
            EventRole::FirstInBlock => PoolKind::Base,
            EventRole::Subsequent => PoolKind::Temp,
        }
    }

    /// Pool transitioned second.
    #[must_use]
    pub fn trail(self) -> PoolKind {
        match self {
            EventRole::FirstInBlock => PoolKind::Temp,
            EventRole::Subsequent => PoolKind::Base,
        }
    }
}

/// One of the four steps of an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Highlight,
    LeadTransition,
    TrailTransition,
    Unhighlight,
}

impl Step {
    /// Step following this one, `None` after `Unhighlight`.
    #[must_use]
    pub fn next(self) -> Option<Step> {
        match self {
            Step::Highlight => Some(Step::LeadTransition),
            Step::LeadTransition => Some(Step::TrailTransition),
            Step::TrailTransition => Some(Step::Unhighlight),
            Step::Unhighlight => None,
        }
    }
}

/// Where the sequencer is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SequencerState {
    /// Between events.
    Idle,
    FirstInBlock(Step),
    Subsequent(Step),
    /// Log exhausted, stop requested, or run aborted.
    Done,
}

impl SequencerState {
    /// First step of an event played in `role`.
    #[must_use]
    pub fn enter(role: EventRole) -> Self {
        match role {
            EventRole::FirstInBlock => SequencerState::FirstInBlock(Step::Highlight),
            EventRole::Subsequent => SequencerState::Subsequent(Step::Highlight),
        }
    }

    /// Next state inside the current event; `Idle` once its last step is done.
    ///
    /// `Idle` and `Done` do not advance on their own.
    #[must_use]
    pub fn advance(self) -> Self {
        match self {
            SequencerState::FirstInBlock(step) => step
                .next()
                .map_or(SequencerState::Idle, SequencerState::FirstInBlock),
            SequencerState::Subsequent(step) => step
                .next()
                .map_or(SequencerState::Idle, SequencerState::Subsequent),
            other => other,
        }
    }

    #[must_use]
    pub fn step(self) -> Option<Step> {
        match self {
            SequencerState::FirstInBlock(step) | SequencerState::Subsequent(step) => Some(step),
            SequencerState::Idle | SequencerState::Done => None,
        }
    }
}

/// Operation emitted at `step` of `event`, given what is on screen before the event.
#[must_use]
pub fn step_operation(
    role: EventRole,
    step: Step,
    state: &PresentationState,
    event: &SwapEvent,
) -> Operation {
    let transition = |pool: PoolKind| Operation::Transition {
        pool,
        from: state.transition_origin(role, pool).clone(),
        to: event.snapshot(pool).clone(),
    };
    match step {
        Step::Highlight => Operation::Highlight { pool: role.lead() },
        Step::LeadTransition => transition(role.lead()),
        Step::TrailTransition => transition(role.trail()),
        Step::Unhighlight => Operation::Unhighlight { pool: role.lead() },
    }
}

/// The four pool operations of `event`, in emission order.
#[must_use]
pub fn plan_event(role: EventRole, state: &PresentationState, event: &SwapEvent) -> Vec<Operation> {
    let mut operations = Vec::with_capacity(4);
    let mut machine = SequencerState::enter(role);
    while let Some(step) = machine.step() {
        operations.push(step_operation(role, step, state, event));
        machine = machine.advance();
    }
    operations
}
