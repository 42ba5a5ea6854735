//! Avatar identification.
//!
//! Every avatar taking part in a crossing has a stable `AvatarId`.
//!
//! ## ID Layout
//!
//! IDs are allocated when a game is created:
//! - `0..humans`: humans
//! - `humans..humans + monsters`: monsters
//!
//! The layout is only a convention of `Game::new`; nothing else relies on
//! it. Always ask the avatar for its `AvatarKind`.
//!
//! ```
//! use river_crossing::core::{AvatarId, AvatarKind};
//!
//! let id = AvatarId::new(4);
//! assert_eq!(id.raw(), 4);
//! assert_eq!(AvatarKind::for_index(4, 3), AvatarKind::Monster);
//! ```

use serde::{Deserialize, Serialize};

/// Unique identifier for an avatar within one game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct AvatarId(pub u32);

impl AvatarId {
    /// Create a new avatar ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl From<u32> for AvatarId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for AvatarId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Avatar({})", self.0)
    }
}

/// The two populations of the puzzle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AvatarKind {
    Human,
    Monster,
}

impl AvatarKind {
    /// Kind of the avatar at `index` under the default ID layout.
    ///
    /// The first `humans` indices are humans, the rest are monsters.
    #[must_use]
    pub const fn for_index(index: u32, humans: u32) -> Self {
        if index < humans {
            AvatarKind::Human
        } else {
            AvatarKind::Monster
        }
    }

    /// Short lowercase label used by adapters.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            AvatarKind::Human => "human",
            AvatarKind::Monster => "monster",
        }
    }
}

impl std::fmt::Display for AvatarKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}
