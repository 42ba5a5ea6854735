//! The live crossing game.
//!
//! - `Game`: the state of one game (roster, docks, boat, trips, outcome)
//! - `CrossingEngine`: the commands that change it, under the rules
//! - `Snapshot`: a serializable copy for presentation layers

pub mod state;
pub mod engine;
pub mod snapshot;

pub use state::Game;
pub use engine::CrossingEngine;
pub use snapshot::Snapshot;
