//! Puzzle solver.
//!
//! Finds the shortest winning sequence of crossings for a configuration,
//! or the next crossing from a game in progress. It applies the same rules
//! as the engine: a crossing is evaluated on arrival, a win beats an
//! imbalance.

pub mod position;
pub mod search;

pub use position::{Arrival, Crossing, Position};
pub use search::{hint, play, solve, solve_from, Plan, PlayError};
