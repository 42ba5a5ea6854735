//! Avatars and where they stand.
//!
//! An avatar is always attached to a mount: one of the two docks or the
//! boat. While the boat is crossing, its passengers are tagged
//! `InTransit` instead. The zone an avatar is in is derived from its
//! mount state and never stored separately.

use serde::{Deserialize, Serialize};

use super::entity::{AvatarId, AvatarKind};

/// A bank of the river.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    /// Where everybody starts.
    Origin,
    /// Where everybody has to end up.
    Destination,
}

impl Side {
    /// Both sides, origin first.
    pub const ALL: [Side; 2] = [Side::Origin, Side::Destination];

    /// The bank across the river.
    #[must_use]
    pub const fn opposite(self) -> Self {
        match self {
            Side::Origin => Side::Destination,
            Side::Destination => Side::Origin,
        }
    }
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Side::Origin => f.write_str("origin"),
            Side::Destination => f.write_str("destination"),
        }
    }
}

/// Identifies a mount: a dock on one side, or the boat.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MountId {
    Dock(Side),
    Boat,
}

impl std::fmt::Display for MountId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MountId::Dock(side) => write!(f, "{} dock", side),
            MountId::Boat => f.write_str("boat"),
        }
    }
}

/// What an avatar is currently attached to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MountState {
    /// Standing on a dock or sitting in a docked boat.
    Mounted(MountId),
    /// Aboard a boat that is crossing the river.
    InTransit,
}

/// Coarse placement reported to presentation layers.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Zone {
    OriginDock,
    Boat,
    DestinationDock,
    InTransit,
}

impl From<MountState> for Zone {
    fn from(state: MountState) -> Self {
        match state {
            MountState::Mounted(MountId::Dock(Side::Origin)) => Zone::OriginDock,
            MountState::Mounted(MountId::Dock(Side::Destination)) => Zone::DestinationDock,
            MountState::Mounted(MountId::Boat) => Zone::Boat,
            MountState::InTransit => Zone::InTransit,
        }
    }
}

/// A single human or monster.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Avatar {
    id: AvatarId,
    kind: AvatarKind,
    mount: MountState,
}

impl Avatar {
    /// Create an avatar attached to `mount`.
    #[must_use]
    pub fn new(id: AvatarId, kind: AvatarKind, mount: MountId) -> Self {
        Self {
            id,
            kind,
            mount: MountState::Mounted(mount),
        }
    }

    #[must_use]
    pub fn id(&self) -> AvatarId {
        self.id
    }

    #[must_use]
    pub fn kind(&self) -> AvatarKind {
        self.kind
    }

    #[must_use]
    pub fn mount(&self) -> MountState {
        self.mount
    }

    #[must_use]
    pub fn zone(&self) -> Zone {
        self.mount.into()
    }

    #[must_use]
    pub fn is_human(&self) -> bool {
        self.kind == AvatarKind::Human
    }

    /// The dock side this avatar stands on, if it is on a dock.
    #[must_use]
    pub fn dock_side(&self) -> Option<Side> {
        match self.mount {
            MountState::Mounted(MountId::Dock(side)) => Some(side),
            _ => None,
        }
    }

    /// Whether the avatar sits in a docked boat.
    #[must_use]
    pub fn is_aboard(&self) -> bool {
        self.mount == MountState::Mounted(MountId::Boat)
    }

    pub(crate) fn set_mount(&mut self, mount: MountState) {
        self.mount = mount;
    }
}
