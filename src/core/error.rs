//! Error types.
//!
//! - `ConfigError`: the configuration form was filled in wrong.
//! - `Rejection`: a command broke a crossing rule. Ordinary gameplay, the
//!   engine state is left untouched.
//! - `InvariantViolation`: the game state is corrupt. Never reachable
//!   through the public commands.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::avatar::{MountId, Side};
use super::config::ConfigField;
use super::entity::AvatarId;

/// Invalid crossing configuration.
#[derive(Error, Clone, Debug, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{field} must be a whole number, got {input:?}")]
    NotAnInteger { field: ConfigField, input: String },
    #[error("{field} must be at least 1, got {value}")]
    TooSmall { field: ConfigField, value: i64 },
    #[error("monsters and humans together must be at most {max}, got {total}")]
    TooManyAvatars { total: u64, max: u32 },
    #[error("minimum crew must be between 1 and the boat capacity ({boat_capacity}), got {min_crew}")]
    MinCrewOutOfRange { min_crew: u32, boat_capacity: u32 },
}

/// Stable reason code for a rejected command.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RejectionCode {
    GameOver,
    VoyageInProgress,
    NoVoyageInProgress,
    UnknownAvatar,
    NotOnDock,
    WrongShore,
    BoatFull,
    NotAboard,
    NeedsCrew,
}

/// A command refused by the crossing rules.
#[derive(Error, Clone, Debug, PartialEq, Eq)]
pub enum Rejection {
    #[error("the game is over")]
    GameOver,
    #[error("the boat is crossing the river")]
    VoyageInProgress,
    #[error("no voyage is in progress")]
    NoVoyageInProgress,
    #[error("unknown avatar {0}")]
    UnknownAvatar(AvatarId),
    #[error("{0} is not on a dock")]
    NotOnDock(AvatarId),
    #[error("{avatar} is on the {avatar_side} side but the boat is on the {boat_side} side")]
    WrongShore {
        avatar: AvatarId,
        avatar_side: Side,
        boat_side: Side,
    },
    #[error("the boat is full ({capacity} seats)")]
    BoatFull { capacity: usize },
    #[error("{0} is not aboard the boat")]
    NotAboard(AvatarId),
    #[error("the boat needs a minimum crew of {minimum}, has {aboard}")]
    NeedsCrew { aboard: usize, minimum: usize },
}

impl Rejection {
    /// Reason code for presentation layers.
    #[must_use]
    pub fn code(&self) -> RejectionCode {
        match self {
            Rejection::GameOver => RejectionCode::GameOver,
            Rejection::VoyageInProgress => RejectionCode::VoyageInProgress,
            Rejection::NoVoyageInProgress => RejectionCode::NoVoyageInProgress,
            Rejection::UnknownAvatar(_) => RejectionCode::UnknownAvatar,
            Rejection::NotOnDock(_) => RejectionCode::NotOnDock,
            Rejection::WrongShore { .. } => RejectionCode::WrongShore,
            Rejection::BoatFull { .. } => RejectionCode::BoatFull,
            Rejection::NotAboard(_) => RejectionCode::NotAboard,
            Rejection::NeedsCrew { .. } => RejectionCode::NeedsCrew,
        }
    }
}

/// Corrupt game state.
#[derive(Error, Clone, Debug, PartialEq, Eq)]
pub enum InvariantViolation {
    #[error("{avatar} is held by {holders} mounts")]
    HeldOutsideOneMount { avatar: AvatarId, holders: usize },
    #[error("{avatar} mount state disagrees with the mount holding it")]
    MountMismatch { avatar: AvatarId },
    #[error("{0} is held by a mount but missing from the roster")]
    NotInRoster(AvatarId),
    #[error("{mount} holds {len} avatars, over its capacity of {capacity}")]
    OverCapacity {
        mount: MountId,
        len: usize,
        capacity: usize,
    },
}
