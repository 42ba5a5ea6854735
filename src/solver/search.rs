//! Breadth-first search for the shortest winning plan.
//!
//! Positions are stored in a flat arena with parent indices; a plan is
//! read back by walking parents from the winning node. The position space is
//! `(humans + 1) * (monsters + 1) * 2`, so the search always terminates.

use std::collections::VecDeque;

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::core::{AvatarKind, CrossingConfig, MountId, Rejection, Side};
use crate::game::{CrossingEngine, Game};
use crate::mounts::Mount;
use crate::rules::GameStatus;

use super::position::{Arrival, Crossing, Position};

/// A winning sequence of crossings.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Plan {
    pub crossings: Vec<Crossing>,
    /// Positions expanded while searching.
    pub explored: usize,
}

impl Plan {
    /// Number of trips.
    #[must_use]
    pub fn len(&self) -> usize {
        self.crossings.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.crossings.is_empty()
    }
}

/// Why a crossing could not be played.
#[derive(Error, Clone, Debug, PartialEq, Eq)]
pub enum PlayError {
    #[error("no {kind} left on the {side} dock")]
    Missing { kind: AvatarKind, side: Side },
    #[error(transparent)]
    Rejected(#[from] Rejection),
}

struct Node {
    position: Position,
    parent: Option<(usize, Crossing)>,
}

/// Shortest plan from the start of a game with `config`.
#[must_use]
pub fn solve(config: &CrossingConfig) -> Option<Plan> {
    solve_from(Position::start(config), config)
}

/// Shortest plan from `start`.
///
/// `None` if the puzzle cannot be won, or if `start` holds more avatars
/// than `config` has.
#[must_use]
pub fn solve_from(start: Position, config: &CrossingConfig) -> Option<Plan> {
    if !start.fits(config) {
        debug!(origin = %start.origin, "start position does not fit the configuration");
        return None;
    }

    let mut nodes = vec![Node {
        position: start,
        parent: None,
    }];
    let mut seen: FxHashMap<Position, usize> = FxHashMap::default();
    seen.insert(start, 0);
    let mut queue = VecDeque::from([0usize]);
    let mut explored = 0;

    while let Some(index) = queue.pop_front() {
        explored += 1;
        let position = nodes[index].position;

        for crossing in position.crossings(config) {
            let next = position.after(&crossing);
            match next.arrival(config) {
                Arrival::Lost => continue,
                Arrival::Won => {
                    let mut crossings = vec![crossing];
                    let mut cursor = index;
                    while let Some((parent, step)) = nodes[cursor].parent {
                        crossings.push(step);
                        cursor = parent;
                    }
                    crossings.reverse();
                    debug!(trips = crossings.len(), explored, "plan found");
                    return Some(Plan { crossings, explored });
                }
                Arrival::Continue => {
                    if seen.contains_key(&next) {
                        continue;
                    }
                    seen.insert(next, nodes.len());
                    queue.push_back(nodes.len());
                    nodes.push(Node {
                        position: next,
                        parent: Some((index, crossing)),
                    });
                }
            }
        }
    }

    debug!(explored, "no plan");
    None
}

/// Next crossing of the shortest plan from the current position.
///
/// `None` if the game is over, a voyage is in flight, or the position
/// cannot be won.
#[must_use]
pub fn hint(game: &Game) -> Option<Crossing> {
    if game.status().is_terminal() {
        return None;
    }
    let position = Position::of(game)?;
    solve_from(position, game.config())?.crossings.first().copied()
}

/// Carry out one crossing on a live engine.
///
/// Empties the boat onto its dock, boards the crew, launches and
/// completes the voyage.
pub fn play(engine: &mut CrossingEngine, crossing: &Crossing) -> Result<GameStatus, PlayError> {
    for id in engine.game().boat().passengers() {
        engine.disembark(id)?;
    }

    let dock = MountId::Dock(crossing.from);
    for (kind, count) in [
        (AvatarKind::Human, crossing.humans),
        (AvatarKind::Monster, crossing.monsters),
    ] {
        for _ in 0..count {
            let id = engine.game().find_on(dock, kind).ok_or(PlayError::Missing {
                kind,
                side: crossing.from,
            })?;
            engine.board(id)?;
        }
    }

    engine.launch()?;
    Ok(engine.complete_voyage()?)
}
