//! Core types: avatar IDs, sides, mount states, configuration, errors.
//!
//! Everything else in the crate is built from these.

pub mod entity;
pub mod avatar;
pub mod config;
pub mod error;

pub use entity::{AvatarId, AvatarKind};
pub use avatar::{Avatar, MountId, MountState, Side, Zone};
pub use config::{ConfigField, CrossingConfig, MAX_AVATARS};
pub use error::{ConfigError, InvariantViolation, Rejection, RejectionCode};
