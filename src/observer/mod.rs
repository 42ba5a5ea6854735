//! Engine → presentation notifications.
//!
//! The engine pushes a `CrossingEvent` to every registered observer after
//! each successful command:
//! - `Changed`: a fresh `Snapshot`
//! - `VoyageStarted`: the boat left, the adapter owes a `complete_voyage`
//! - `OutcomeReached`: the game ended, with the side and counts on a loss

pub mod event;
pub mod traits;
pub mod log;

pub use event::{CrossingEvent, Voyage};
pub use traits::CrossingObserver;
pub use log::EventLog;
