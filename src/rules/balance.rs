//! Headcounts and the balance rule.
//!
//! A side is unbalanced when humans are present and outnumbered by
//! monsters. Monsters alone never unbalance a side; ties are balanced.
//!
//! The boat counts toward the side it is moored at. While sailing it
//! counts toward neither.

use serde::{Deserialize, Serialize};

use crate::core::{AvatarId, AvatarKind, Side};
use crate::game::Game;
use crate::mounts::Mount;

/// Humans and monsters counted together.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Headcount {
    pub humans: u32,
    pub monsters: u32,
}

impl Headcount {
    #[must_use]
    pub const fn new(humans: u32, monsters: u32) -> Self {
        Self { humans, monsters }
    }

    /// Count the given avatars by kind. Unknown IDs are skipped.
    #[must_use]
    pub fn of(game: &Game, avatars: impl IntoIterator<Item = AvatarId>) -> Self {
        let mut count = Self::default();
        for kind in avatars.into_iter().filter_map(|id| game.avatar(id).map(|a| a.kind())) {
            count.add(kind);
        }
        count
    }

    /// Add one avatar of `kind`.
    pub fn add(&mut self, kind: AvatarKind) {
        match kind {
            AvatarKind::Human => self.humans += 1,
            AvatarKind::Monster => self.monsters += 1,
        }
    }

    #[must_use]
    pub const fn total(self) -> u32 {
        self.humans + self.monsters
    }

    /// Humans are absent, or not outnumbered.
    #[must_use]
    pub const fn is_balanced(self) -> bool {
        self.humans == 0 || self.monsters <= self.humans
    }
}

impl std::ops::Add for Headcount {
    type Output = Headcount;

    fn add(self, rhs: Headcount) -> Headcount {
        Headcount::new(self.humans + rhs.humans, self.monsters + rhs.monsters)
    }
}

impl std::fmt::Display for Headcount {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} humans, {} monsters", self.humans, self.monsters)
    }
}

/// Count one side: its dock, plus the boat if moored there.
#[must_use]
pub fn side_headcount(game: &Game, side: Side) -> Headcount {
    let dock = Headcount::of(game, game.dock(side).holder().iter());
    if game.boat().is_docked_at(side) {
        dock + Headcount::of(game, game.boat().holder().iter())
    } else {
        dock
    }
}

/// Whether `side` satisfies the balance rule.
#[must_use]
pub fn is_side_balanced(game: &Game, side: Side) -> bool {
    side_headcount(game, side).is_balanced()
}
