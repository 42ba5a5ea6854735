//! Observer trait for presentation layers.

use crate::game::Snapshot;
use crate::rules::Outcome;

use super::event::{CrossingEvent, Voyage};

/// Receives engine notifications.
///
/// All methods default to doing nothing; implement the ones you need.
/// Callbacks run synchronously, inside the command that caused them.
pub trait CrossingObserver {
    /// The game state changed (any successful command, or a reset).
    fn on_change(&mut self, _snapshot: &Snapshot) {}

    /// The boat left a dock. Schedule `complete_voyage` when done.
    fn on_voyage_started(&mut self, _voyage: &Voyage) {}

    /// The game ended.
    fn on_outcome(&mut self, _outcome: &Outcome) {}

    /// Dispatch a single event to the matching callback.
    fn notify(&mut self, event: &CrossingEvent) {
        match event {
            CrossingEvent::Changed(snapshot) => self.on_change(snapshot),
            CrossingEvent::VoyageStarted(voyage) => self.on_voyage_started(voyage),
            CrossingEvent::OutcomeReached(outcome) => self.on_outcome(outcome),
        }
    }
}
