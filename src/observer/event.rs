//! Notifications sent from the engine to presentation layers.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::{AvatarId, Side};
use crate::game::Snapshot;
use crate::rules::Outcome;

/// A voyage that has just left a dock.
///
/// The presentation layer may animate it, then must call
/// `CrossingEngine::complete_voyage`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Voyage {
    /// Trip number, starting at 1.
    pub trip: u32,
    pub from: Side,
    pub to: Side,
    /// Avatars aboard, in ascending ID order.
    pub manifest: SmallVec<[AvatarId; 4]>,
}

/// Everything the engine reports, as a single value.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum CrossingEvent {
    /// State after a successful command or a reset.
    Changed(Snapshot),
    /// The boat has left a dock.
    VoyageStarted(Voyage),
    /// The game has ended.
    OutcomeReached(Outcome),
}

impl CrossingEvent {
    /// Short name for logs.
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            CrossingEvent::Changed(_) => "changed",
            CrossingEvent::VoyageStarted(_) => "voyage_started",
            CrossingEvent::OutcomeReached(_) => "outcome_reached",
        }
    }
}
