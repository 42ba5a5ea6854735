//! Crossing rules.
//!
//! - `balance`: headcounts per side and the balance rule
//! - `outcome`: win/loss assessment
//!
//! The engine calls `assess` after every voyage; nothing here mutates a
//! game.

pub mod balance;
pub mod outcome;

pub use balance::{is_side_balanced, side_headcount, Headcount};
pub use outcome::{assess, find_imbalance, is_win, GameStatus, Outcome};
