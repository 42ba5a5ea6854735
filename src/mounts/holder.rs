//! Capacity-bounded set of avatars shared by docks and the boat.
//!
//! Backed by `im::OrdSet` so that cloning a holder for a snapshot is O(1)
//! and iteration order is stable.

use im::OrdSet;
use serde::{Deserialize, Serialize};

use crate::core::AvatarId;

/// Avatars currently held by a mount, with a maximum capacity.
///
/// `len() <= max_capacity()` at all times: `insert` refuses once full.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Holder {
    avatars: OrdSet<AvatarId>,
    max_capacity: usize,
}

impl Holder {
    /// Create an empty holder.
    #[must_use]
    pub fn new(max_capacity: usize) -> Self {
        Self {
            avatars: OrdSet::new(),
            max_capacity,
        }
    }

    #[must_use]
    pub fn max_capacity(&self) -> usize {
        self.max_capacity
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.avatars.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.avatars.is_empty()
    }

    #[must_use]
    pub fn is_full(&self) -> bool {
        self.avatars.len() >= self.max_capacity
    }

    #[must_use]
    pub fn contains(&self, avatar: AvatarId) -> bool {
        self.avatars.contains(&avatar)
    }

    /// Add an avatar.
    ///
    /// Returns `false` if the holder is full or already holds the avatar.
    pub fn insert(&mut self, avatar: AvatarId) -> bool {
        if self.is_full() || self.avatars.contains(&avatar) {
            return false;
        }
        self.avatars.insert(avatar);
        true
    }

    /// Remove an avatar. Returns `false` if it was not held.
    pub fn remove(&mut self, avatar: AvatarId) -> bool {
        self.avatars.remove(&avatar).is_some()
    }

    /// Held avatars in ascending ID order.
    pub fn iter(&self) -> impl Iterator<Item = AvatarId> + '_ {
        self.avatars.iter().copied()
    }

    /// Held avatars as a vector, in ascending ID order.
    #[must_use]
    pub fn to_vec(&self) -> Vec<AvatarId> {
        self.iter().collect()
    }
}
