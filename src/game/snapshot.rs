//! Read-only copies of the game state for presentation layers.
//!
//! Holders are `im` sets, so taking a snapshot after every command only
//! copies the avatar list.

use serde::{Deserialize, Serialize};

use crate::core::{Avatar, AvatarId, Side, Zone};
use crate::mounts::{BoatLocation, Holder, Mount};
use crate::rules::{GameStatus, Outcome};

use super::state::Game;

/// Everything a renderer needs to draw the river.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    pub status: GameStatus,
    pub outcome: Option<Outcome>,
    pub trips: u32,
    /// A voyage is in flight.
    pub busy: bool,
    pub boat_location: BoatLocation,
    pub boat: Holder,
    pub min_crew: usize,
    pub origin: Holder,
    pub destination: Holder,
    /// All avatars in ascending ID order.
    pub avatars: Vec<Avatar>,
}

impl Snapshot {
    /// Capture the current state of `game`.
    #[must_use]
    pub fn of(game: &Game) -> Self {
        let mut avatars: Vec<Avatar> = game.avatars().cloned().collect();
        avatars.sort_unstable_by_key(Avatar::id);

        Self {
            status: game.status(),
            outcome: game.outcome().copied(),
            trips: game.trips(),
            busy: game.is_busy(),
            boat_location: game.boat().location(),
            boat: game.boat().holder().clone(),
            min_crew: game.boat().min_crew(),
            origin: game.dock(Side::Origin).holder().clone(),
            destination: game.dock(Side::Destination).holder().clone(),
            avatars,
        }
    }

    /// The dock holder for `side`.
    #[must_use]
    pub fn dock(&self, side: Side) -> &Holder {
        match side {
            Side::Origin => &self.origin,
            Side::Destination => &self.destination,
        }
    }

    /// Zone of an avatar, `None` if unknown.
    #[must_use]
    pub fn zone_of(&self, id: AvatarId) -> Option<Zone> {
        self.avatars
            .binary_search_by_key(&id, Avatar::id)
            .ok()
            .map(|index| self.avatars[index].zone())
    }
}
