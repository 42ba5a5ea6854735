//! The state of one crossing game.
//!
//! A `Game` owns the roster of avatars, both docks, the boat, the trip
//! counter and the outcome. It is built fresh for every new game; there is
//! no teardown, a reset simply replaces it.
//!
//! Mutation goes through the `CrossingEngine`, which enforces the rules.
//! The `pub(crate)` helpers here only keep the containers and the avatars'
//! mount states in agreement.

use rustc_hash::FxHashMap;

use crate::core::{
    Avatar, AvatarId, AvatarKind, ConfigError, CrossingConfig, InvariantViolation, MountId,
    MountState, Side,
};
use crate::mounts::{Boat, Dock, Mount};
use crate::rules::{GameStatus, Outcome};

/// Complete state of a crossing.
#[derive(Clone, Debug)]
pub struct Game {
    config: CrossingConfig,

    /// Avatars by ID.
    roster: FxHashMap<AvatarId, Avatar>,

    origin: Dock,
    destination: Dock,
    boat: Boat,

    /// Voyages launched so far.
    trips: u32,

    /// `None` while the game is ongoing.
    outcome: Option<Outcome>,
}

impl Game {
    /// Create a new game with everybody on the origin dock.
    ///
    /// Humans get IDs `0..humans`, monsters the IDs after them. The boat
    /// starts empty at the origin.
    pub fn new(config: CrossingConfig) -> Result<Self, ConfigError> {
        config.validate()?;

        let total = config.total_avatars();
        let mut origin = Dock::new(Side::Origin, total as usize);
        let mut roster = FxHashMap::default();

        for index in 0..total {
            let id = AvatarId::new(index);
            let kind = AvatarKind::for_index(index, config.humans);
            roster.insert(id, Avatar::new(id, kind, MountId::Dock(Side::Origin)));
            origin.holder_mut().insert(id);
        }

        Ok(Self {
            destination: Dock::new(Side::Destination, total as usize),
            boat: Boat::new(
                config.boat_capacity as usize,
                config.min_crew as usize,
                Side::Origin,
            ),
            origin,
            roster,
            trips: 0,
            outcome: None,
            config,
        })
    }

    #[must_use]
    pub fn config(&self) -> &CrossingConfig {
        &self.config
    }

    // === Avatars ===

    #[must_use]
    pub fn avatar(&self, id: AvatarId) -> Option<&Avatar> {
        self.roster.get(&id)
    }

    /// All avatars, in no particular order.
    pub fn avatars(&self) -> impl Iterator<Item = &Avatar> {
        self.roster.values()
    }

    /// All avatar IDs in ascending order.
    #[must_use]
    pub fn avatar_ids(&self) -> Vec<AvatarId> {
        let mut ids: Vec<_> = self.roster.keys().copied().collect();
        ids.sort_unstable();
        ids
    }

    /// IDs of every avatar of `kind` in ascending order.
    #[must_use]
    pub fn avatars_of_kind(&self, kind: AvatarKind) -> Vec<AvatarId> {
        let mut ids: Vec<_> = self
            .roster
            .values()
            .filter(|a| a.kind() == kind)
            .map(Avatar::id)
            .collect();
        ids.sort_unstable();
        ids
    }

    #[must_use]
    pub fn total_avatars(&self) -> usize {
        self.roster.len()
    }

    // === Mounts ===

    #[must_use]
    pub fn dock(&self, side: Side) -> &Dock {
        match side {
            Side::Origin => &self.origin,
            Side::Destination => &self.destination,
        }
    }

    #[must_use]
    pub fn boat(&self) -> &Boat {
        &self.boat
    }

    /// Look up any mount by ID.
    #[must_use]
    pub fn mount(&self, id: MountId) -> &dyn Mount {
        match id {
            MountId::Dock(side) => self.dock(side),
            MountId::Boat => &self.boat,
        }
    }

    fn mount_mut(&mut self, id: MountId) -> &mut dyn Mount {
        match id {
            MountId::Dock(Side::Origin) => &mut self.origin,
            MountId::Dock(Side::Destination) => &mut self.destination,
            MountId::Boat => &mut self.boat,
        }
    }

    /// Lowest-numbered avatar of `kind` held by `mount`.
    #[must_use]
    pub fn find_on(&self, mount: MountId, kind: AvatarKind) -> Option<AvatarId> {
        self.mount(mount)
            .holder()
            .iter()
            .find(|id| self.avatar(*id).is_some_and(|a| a.kind() == kind))
    }

    pub(crate) fn boat_mut(&mut self) -> &mut Boat {
        &mut self.boat
    }

    // === Progress ===

    #[must_use]
    pub fn trips(&self) -> u32 {
        self.trips
    }

    #[must_use]
    pub fn outcome(&self) -> Option<&Outcome> {
        self.outcome.as_ref()
    }

    #[must_use]
    pub fn status(&self) -> GameStatus {
        self.outcome.map_or(GameStatus::Ongoing, |o| o.status())
    }

    /// A voyage is in flight.
    #[must_use]
    pub fn is_busy(&self) -> bool {
        self.boat.docked_side().is_none()
    }

    pub(crate) fn record_trip(&mut self) -> u32 {
        self.trips += 1;
        self.trips
    }

    pub(crate) fn set_outcome(&mut self, outcome: Outcome) {
        self.outcome = Some(outcome);
    }

    // === Movement ===

    /// Move a mounted avatar onto another mount.
    ///
    /// Returns `false` and changes nothing if the avatar is unknown, in
    /// transit, or the target is full.
    pub(crate) fn transfer(&mut self, id: AvatarId, to: MountId) -> bool {
        let from = match self.roster.get(&id).map(Avatar::mount) {
            Some(MountState::Mounted(from)) => from,
            _ => return false,
        };
        if from == to {
            return true;
        }
        if !self.mount_mut(to).holder_mut().insert(id) {
            return false;
        }
        self.mount_mut(from).holder_mut().remove(id);
        if let Some(avatar) = self.roster.get_mut(&id) {
            avatar.set_mount(MountState::Mounted(to));
        }
        true
    }

    /// Set the mount state of everybody aboard the boat.
    pub(crate) fn set_passengers_mount(&mut self, mount: MountState) {
        for id in self.boat.holder().iter() {
            if let Some(avatar) = self.roster.get_mut(&id) {
                avatar.set_mount(mount);
            }
        }
    }

    // === Invariants ===

    /// Verify that containers and mount states agree.
    ///
    /// - every avatar is held by exactly one mount,
    /// - its mount state names that mount (`InTransit` for a sailing boat),
    /// - every held avatar is in the roster,
    /// - no mount is over capacity.
    pub fn check_invariants(&self) -> Result<(), InvariantViolation> {
        let mounts: [&dyn Mount; 3] = [&self.origin, &self.destination, &self.boat];

        for mount in mounts {
            if mount.len() > mount.max_capacity() {
                return Err(InvariantViolation::OverCapacity {
                    mount: mount.mount_id(),
                    len: mount.len(),
                    capacity: mount.max_capacity(),
                });
            }
            if let Some(stray) = mount.holder().iter().find(|id| !self.roster.contains_key(id)) {
                return Err(InvariantViolation::NotInRoster(stray));
            }
        }

        for avatar in self.roster.values() {
            let id = avatar.id();
            let holders: Vec<MountId> = mounts
                .iter()
                .filter(|m| m.contains(id))
                .map(|m| m.mount_id())
                .collect();

            let [holder] = holders.as_slice() else {
                return Err(InvariantViolation::HeldOutsideOneMount {
                    avatar: id,
                    holders: holders.len(),
                });
            };

            let expected = if *holder == MountId::Boat && self.is_busy() {
                MountState::InTransit
            } else {
                MountState::Mounted(*holder)
            };
            if avatar.mount() != expected {
                return Err(InvariantViolation::MountMismatch { avatar: id });
            }
        }

        Ok(())
    }
}
