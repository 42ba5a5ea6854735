//! Abstract positions for the solver.
//!
//! Individual avatars do not matter to the rules, only how many of each
//! kind stand on each side and where the boat is moored. Boarding and
//! disembarking never change a position; only crossings do.

use serde::{Deserialize, Serialize};

use crate::core::{CrossingConfig, Side};
use crate::game::Game;
use crate::rules::{side_headcount, Headcount};

/// A boat trip, as counts.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Crossing {
    pub humans: u32,
    pub monsters: u32,
    pub from: Side,
    pub to: Side,
}

impl Crossing {
    #[must_use]
    pub fn crew(&self) -> Headcount {
        Headcount::new(self.humans, self.monsters)
    }
}

impl std::fmt::Display for Crossing {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}H {}M {} -> {}",
            self.humans, self.monsters, self.from, self.to
        )
    }
}

/// Counts on the origin side (boat included when moored there) and the
/// boat's side.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    pub origin: Headcount,
    pub boat: Side,
}

/// What happens after a crossing.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Arrival {
    Won,
    Lost,
    Continue,
}

impl Position {
    /// Everybody at the origin with the boat.
    #[must_use]
    pub fn start(config: &CrossingConfig) -> Self {
        Self {
            origin: Headcount::new(config.humans, config.monsters),
            boat: Side::Origin,
        }
    }

    /// Position of a live game, `None` while a voyage is in flight.
    #[must_use]
    pub fn of(game: &Game) -> Option<Self> {
        Some(Self {
            origin: side_headcount(game, Side::Origin),
            boat: game.boat().docked_side()?,
        })
    }

    /// The origin counts do not exceed the configured population.
    #[must_use]
    pub fn fits(&self, config: &CrossingConfig) -> bool {
        self.origin.humans <= config.humans && self.origin.monsters <= config.monsters
    }

    /// Counts on `side`. Only meaningful when the position `fits`.
    #[must_use]
    pub fn side(&self, side: Side, config: &CrossingConfig) -> Headcount {
        match side {
            Side::Origin => self.origin,
            Side::Destination => Headcount::new(
                config.humans.saturating_sub(self.origin.humans),
                config.monsters.saturating_sub(self.origin.monsters),
            ),
        }
    }

    /// Every crossing the rules allow from here.
    ///
    /// Larger crews first, humans before monsters.
    #[must_use]
    pub fn crossings(&self, config: &CrossingConfig) -> Vec<Crossing> {
        let available = self.side(self.boat, config);
        let mut out = Vec::new();

        for humans in (0..=available.humans.min(config.boat_capacity)).rev() {
            for monsters in (0..=available.monsters.min(config.boat_capacity)).rev() {
                let crew = humans + monsters;
                if crew >= config.min_crew && crew <= config.boat_capacity {
                    out.push(Crossing {
                        humans,
                        monsters,
                        from: self.boat,
                        to: self.boat.opposite(),
                    });
                }
            }
        }

        out.sort_by_key(|c| std::cmp::Reverse(c.humans + c.monsters));
        out
    }

    /// Apply a crossing. The caller guarantees it came from `crossings`.
    #[must_use]
    pub fn after(&self, crossing: &Crossing) -> Self {
        let origin = match crossing.from {
            Side::Origin => Headcount::new(
                self.origin.humans.saturating_sub(crossing.humans),
                self.origin.monsters.saturating_sub(crossing.monsters),
            ),
            Side::Destination => self.origin + crossing.crew(),
        };
        Self {
            origin,
            boat: crossing.to,
        }
    }

    /// Evaluate this position the way the engine does after a voyage.
    #[must_use]
    pub fn arrival(&self, config: &CrossingConfig) -> Arrival {
        if self.boat == Side::Destination && self.origin.total() == 0 {
            return Arrival::Won;
        }
        let balanced = Side::ALL
            .into_iter()
            .all(|side| self.side(side, config).is_balanced());
        if balanced {
            Arrival::Continue
        } else {
            Arrival::Lost
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::MAX_AVATARS;

    #[test]
    fn test_start_crossings() {
        let config = CrossingConfig::new(3, 3, 2);
        let start = Position::start(&config);

        let crossings = start.crossings(&config);
        // (2,0) (1,1) (0,2) then (1,0) (0,1)
        assert_eq!(crossings.len(), 5);
        assert_eq!(crossings[0].humans + crossings[0].monsters, 2);
        assert!(crossings.iter().all(|c| c.from == Side::Origin));
    }

    #[test]
    fn test_min_crew_filters() {
        let config = CrossingConfig::new(3, 3, 2).with_min_crew(2);
        let crossings = Position::start(&config).crossings(&config);
        assert_eq!(crossings.len(), 3);
    }

    #[test]
    fn test_after_and_arrival() {
        let config = CrossingConfig::new(3, 3, 2);
        let start = Position::start(&config);

        let pair = Crossing {
            humans: 1,
            monsters: 1,
            from: Side::Origin,
            to: Side::Destination,
        };
        let next = start.after(&pair);
        assert_eq!(next.origin, Headcount::new(2, 2));
        assert_eq!(next.boat, Side::Destination);
        assert_eq!(next.side(Side::Destination, &config), Headcount::new(1, 1));
        assert_eq!(next.arrival(&config), Arrival::Continue);

        let two_humans = Crossing {
            humans: 2,
            monsters: 0,
            from: Side::Origin,
            to: Side::Destination,
        };
        assert_eq!(start.after(&two_humans).arrival(&config), Arrival::Lost);
    }

    #[test]
    fn test_return_trip() {
        let config = CrossingConfig::new(3, 3, 2);
        let position = Position {
            origin: Headcount::new(2, 2),
            boat: Side::Destination,
        };
        let back = Crossing {
            humans: 1,
            monsters: 0,
            from: Side::Destination,
            to: Side::Origin,
        };
        assert_eq!(position.after(&back).origin, Headcount::new(3, 2));
    }

    #[test]
    fn test_crew_bounded_by_capacity() {
        let config = CrossingConfig::new(MAX_AVATARS / 2, MAX_AVATARS / 2, 2);
        let crossings = Position::start(&config).crossings(&config);
        // (2,0) (1,1) (0,2) (1,0) (0,1)
        assert_eq!(crossings.len(), 5);
        assert!(crossings.iter().all(|c| c.crew().total() <= 2));
    }

    #[test]
    fn test_fits() {
        let config = CrossingConfig::new(3, 3, 2);
        assert!(Position::start(&config).fits(&config));

        let crowded = Position {
            origin: Headcount::new(4, 3),
            boat: Side::Origin,
        };
        assert!(!crowded.fits(&config));
        assert_eq!(crowded.side(Side::Destination, &config), Headcount::new(0, 0));
    }

    #[test]
    fn test_won_arrival() {
        let config = CrossingConfig::new(2, 1, 3);
        let position = Position {
            origin: Headcount::default(),
            boat: Side::Destination,
        };
        // Outnumbered at the destination, but everybody made it
        assert_eq!(position.arrival(&config), Arrival::Won);
    }
}
