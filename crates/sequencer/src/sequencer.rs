//! Event sequencer.
//!
//! Walks an event log in (block, position) order and hands each event's
//! operations to an [`OperationSink`]:
//!
//! ```text
//! HighlightCell ─► Highlight(lead) ─► Transition(lead) ─► Transition(trail) ─► Unhighlight(lead) ─► UnhighlightCell
//! ```
//!
//! The presentation state moves forward one whole event at a time. A stop
//! request or a sink failure therefore never leaves it half-applied.

use crate::machine::{EventRole, SequencerState, step_operation};
use crate::operation::{Operation, OperationSink};
use crate::state::PresentationState;
use crate::stop::{PlaybackProgress, PlayedEvent, RunToEnd, StopCondition};
use hookviz_domain::entities::{EventLog, EventPosition, SwapEvent};
use hookviz_domain::{HookError, Result};
use tracing::{debug, info, warn};

/// Outcome of a playback run that was not aborted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlaybackSummary {
    /// Events whose operations were all emitted.
    pub events_played: usize,
    /// Operations accepted by the sink, cell brackets included.
    pub operations_emitted: usize,
    /// Whether the stop condition halted playback before the log ran out.
    pub stopped_early: bool,
    /// What the renderer shows once playback ended.
    pub state: PresentationState,
}

/// Plays event logs into a sink, owning the presentation state meanwhile.
#[derive(Debug)]
pub struct EventSequencer<S = RunToEnd> {
    state: PresentationState,
    machine: SequencerState,
    stop: S,
    operations_emitted: usize,
}

impl EventSequencer<RunToEnd> {
    /// Creates a sequencer that plays the whole log.
    #[must_use]
    pub fn new(initial: PresentationState) -> Self {
        Self {
            state: initial,
            machine: SequencerState::Idle,
            stop: RunToEnd,
            operations_emitted: 0,
        }
    }
}

impl<S: StopCondition> EventSequencer<S> {
    /// Replaces the stop condition.
    #[must_use]
    pub fn with_stop<T: StopCondition>(self, stop: T) -> EventSequencer<T> {
        EventSequencer {
            state: self.state,
            machine: self.machine,
            stop,
            operations_emitted: self.operations_emitted,
        }
    }

    /// Presentation state after the last fully played event.
    #[must_use]
    pub fn state(&self) -> &PresentationState {
        &self.state
    }

    #[must_use]
    pub fn machine_state(&self) -> SequencerState {
        self.machine
    }

    /// Plays `log` into `sink`.
    ///
    /// # Errors
    /// - `EmptyLog` if the log has no blocks
    /// - `InvalidDistribution` if the initial state and the log differ in width
    /// - `SinkFailure` if the sink rejects an operation; playback ends there
    pub fn play<K>(&mut self, log: &EventLog, sink: &mut K) -> Result<PlaybackSummary>
    where
        K: OperationSink + ?Sized,
    {
        if log.is_empty() {
            return Err(HookError::EmptyLog);
        }
        if let Some(width) = log.width() {
            self.state
                .base()
                .current()
                .ensure_width(width, "initial presentation state")?;
        }

        info!(
            blocks = log.block_count(),
            events = log.event_count(),
            "starting playback"
        );

        self.machine = SequencerState::Idle;
        self.operations_emitted = 0;
        let mut progress = PlaybackProgress::default();
        let mut stopped_early = false;

        for (at, event) in log.iter() {
            if self.stop.should_stop(&progress) {
                info!(
                    events_played = progress.events_played,
                    "stop requested, ending playback"
                );
                stopped_early = true;
                break;
            }

            let role = EventRole::for_position(at);
            debug!(block = at.block, position = at.position, ?role, label = %event.label, "playing event");

            if let Err(err) = self.play_event(at, role, event, sink) {
                warn!(block = at.block, position = at.position, %err, "sink rejected operation, aborting playback");
                self.machine = SequencerState::Done;
                return Err(err);
            }

            progress.events_played += 1;
            progress.last = Some(PlayedEvent {
                at,
                role,
                label: event.label.clone(),
            });
        }

        self.machine = SequencerState::Done;
        info!(
            events_played = progress.events_played,
            operations = self.operations_emitted,
            stopped_early,
            "playback finished"
        );

        Ok(PlaybackSummary {
            events_played: progress.events_played,
            operations_emitted: self.operations_emitted,
            stopped_early,
            state: self.state.clone(),
        })
    }

    fn play_event<K>(
        &mut self,
        at: EventPosition,
        role: EventRole,
        event: &SwapEvent,
        sink: &mut K,
    ) -> Result<()>
    where
        K: OperationSink + ?Sized,
    {
        let next = self.state.after(role, event);
        let (row, col) = (at.position, at.block);

        self.emit(sink, &Operation::HighlightCell { row, col })?;

        self.machine = SequencerState::enter(role);
        while let Some(step) = self.machine.step() {
            let op = step_operation(role, step, &self.state, event);
            self.emit(sink, &op)?;
            self.machine = self.machine.advance();
        }

        self.emit(sink, &Operation::UnhighlightCell { row, col })?;

        self.state = next;
        Ok(())
    }

    fn emit<K>(&mut self, sink: &mut K, op: &Operation) -> Result<()>
    where
        K: OperationSink + ?Sized,
    {
        debug!(%op, "emit");
        sink.apply(op)?;
        self.operations_emitted += 1;
        Ok(())
    }
}

/// Plays `log` from `initial` into `sink`, halting when `stop` asks to.
///
/// # Errors
/// See [`EventSequencer::play`].
pub fn play<K, S>(
    log: &EventLog,
    initial: PresentationState,
    sink: &mut K,
    stop: S,
) -> Result<PlaybackSummary>
where
    K: OperationSink + ?Sized,
    S: StopCondition,
{
    EventSequencer::new(initial).with_stop(stop).play(log, sink)
}
