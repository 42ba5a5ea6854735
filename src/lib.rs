//! # river-crossing
//!
//! Rule engine for the humans-and-monsters river-crossing puzzle.
//!
//! Humans and monsters start on the origin dock and must all reach the
//! destination using a boat of limited capacity. Whenever a voyage ends,
//! a side where monsters outnumber humans loses the game.
//!
//! ## Design Principles
//!
//! 1. **Presentation-Agnostic**: The engine never renders or schedules.
//!    Adapters send commands and observe notifications.
//!
//! 2. **Explicit Voyages**: `launch` and `complete_voyage` are separate
//!    commands; the adapter owns the timing in between.
//!
//! 3. **Rejections, Not Panics**: Every rule violation is a `Rejection`
//!    value with a stable code.
//!
//! ## Modules
//!
//! - `core`: Avatar IDs, sides, mount states, configuration, errors
//! - `mounts`: Docks and the boat, sharing the `Mount` capability
//! - `rules`: Balance rule, win/loss assessment
//! - `game`: Game state, the crossing engine, snapshots
//! - `observer`: Engine → presentation notifications
//! - `solver`: Shortest winning plans and hints

pub mod core;
pub mod mounts;
pub mod rules;
pub mod game;
pub mod observer;
pub mod solver;

// Re-export commonly used types
pub use crate::core::{
    Avatar, AvatarId, AvatarKind,
    MountId, MountState, Side, Zone,
    ConfigField, CrossingConfig,
    ConfigError, InvariantViolation, Rejection, RejectionCode,
};

pub use crate::mounts::{Boat, BoatLocation, BoatStatus, Dock, Holder, Mount};

pub use crate::rules::{GameStatus, Headcount, Outcome};

pub use crate::game::{CrossingEngine, Game, Snapshot};

pub use crate::observer::{CrossingEvent, CrossingObserver, EventLog, Voyage};

pub use crate::solver::{Crossing, Plan, PlayError, Position};
