//! Win and loss conditions.

use serde::{Deserialize, Serialize};

use crate::core::Side;
use crate::game::Game;
use crate::mounts::Mount;

use super::balance::{side_headcount, Headcount};

/// Where a game stands.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameStatus {
    Ongoing,
    Won,
    Lost,
}

impl GameStatus {
    #[must_use]
    pub fn is_terminal(self) -> bool {
        self != GameStatus::Ongoing
    }
}

/// How a finished game ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    /// Everybody reached the destination.
    Won { trips: u32 },
    /// Monsters outnumbered humans on `side`.
    Lost {
        side: Side,
        headcount: Headcount,
        trips: u32,
    },
}

impl Outcome {
    #[must_use]
    pub fn status(&self) -> GameStatus {
        match self {
            Outcome::Won { .. } => GameStatus::Won,
            Outcome::Lost { .. } => GameStatus::Lost,
        }
    }

    /// The trip count when the game ended.
    #[must_use]
    pub fn trips(&self) -> u32 {
        match *self {
            Outcome::Won { trips } | Outcome::Lost { trips, .. } => trips,
        }
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::Won { trips } => write!(f, "everybody crossed in {} trips", trips),
            Outcome::Lost { side, headcount, .. } => write!(
                f,
                "the humans on the {} side were outnumbered ({})",
                side, headcount
            ),
        }
    }
}

/// Origin dock empty, boat moored at the destination, and everybody on
/// that side.
#[must_use]
pub fn is_win(game: &Game) -> bool {
    let boat = game.boat();
    if !game.dock(Side::Origin).is_empty() || !boat.is_docked_at(Side::Destination) {
        return false;
    }
    game.dock(Side::Destination).len() + boat.len() >= game.total_avatars()
}

/// First unbalanced side, origin checked before destination.
#[must_use]
pub fn find_imbalance(game: &Game) -> Option<(Side, Headcount)> {
    Side::ALL
        .into_iter()
        .map(|side| (side, side_headcount(game, side)))
        .find(|(_, count)| !count.is_balanced())
}

/// Decide whether the game has ended. A win takes precedence over a loss.
///
/// Pure: the game is not modified.
#[must_use]
pub fn assess(game: &Game) -> Option<Outcome> {
    let trips = game.trips();

    if is_win(game) {
        return Some(Outcome::Won { trips });
    }

    find_imbalance(game).map(|(side, headcount)| Outcome::Lost {
        side,
        headcount,
        trips,
    })
}
