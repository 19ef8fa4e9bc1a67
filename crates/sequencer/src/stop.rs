//! Cooperative stop conditions.
//!
//! Playback consults its stop condition between events only, so an event's
//! operations are always emitted as a whole.

use crate::machine::EventRole;
use hookviz_domain::entities::EventPosition;

/// An event that finished playing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayedEvent {
    pub at: EventPosition,
    pub role: EventRole,
    pub label: String,
}

/// Progress at an event boundary.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlaybackProgress {
    /// Events played so far.
    pub events_played: usize,
    /// The event that just finished, `None` before the first one.
    pub last: Option<PlayedEvent>,
}

/// Decides whether playback halts before the next event.
pub trait StopCondition {
    /// Called before each event while events remain.
    fn should_stop(&mut self, progress: &PlaybackProgress) -> bool;
}

/// Plays the whole log.
#[derive(Debug, Clone, Copy, Default)]
pub struct RunToEnd;

impl StopCondition for RunToEnd {
    fn should_stop(&mut self, _progress: &PlaybackProgress) -> bool {
        false
    }
}

/// Halts once the given number of events has been played.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StopAfter(pub usize);

impl StopCondition for StopAfter {
    fn should_stop(&mut self, progress: &PlaybackProgress) -> bool {
        progress.events_played >= self.0
    }
}

impl<F> StopCondition for F
where
    F: FnMut(&PlaybackProgress) -> bool,
{
    fn should_stop(&mut self, progress: &PlaybackProgress) -> bool {
        self(progress)
    }
}
