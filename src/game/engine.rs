//! The crossing engine: commands, rule checks and notifications.
//!
//! ## Voyages
//!
//! A voyage is two commands. `launch` puts the boat in transit and returns
//! immediately; the presentation layer animates the crossing and then
//! calls `complete_voyage`, which docks the boat and evaluates the
//! outcome. In between, `is_busy()` is true and every other command is
//! rejected with `Rejection::VoyageInProgress`.
//!
//! ## Example
//!
//! ```
//! use river_crossing::core::{AvatarId, CrossingConfig, Side};
//! use river_crossing::game::CrossingEngine;
//! use river_crossing::rules::GameStatus;
//!
//! let mut engine = CrossingEngine::new(CrossingConfig::new(3, 3, 2)).unwrap();
//!
//! engine.board(AvatarId(0)).unwrap(); // a human
//! engine.board(AvatarId(3)).unwrap(); // a monster
//! let voyage = engine.launch().unwrap();
//! assert_eq!(voyage.to, Side::Destination);
//! assert!(engine.is_busy());
//!
//! assert_eq!(engine.complete_voyage().unwrap(), GameStatus::Ongoing);
//! assert!(engine.game().boat().is_docked_at(Side::Destination));
//! ```

use tracing::{debug, info};

use crate::core::{AvatarId, ConfigError, CrossingConfig, MountId, MountState, Rejection, Side};
use crate::mounts::Mount;
use crate::observer::{CrossingEvent, CrossingObserver, Voyage};
use crate::rules::{self, GameStatus, Headcount};

use super::snapshot::Snapshot;
use super::state::Game;

/// Owns the live game and enforces the crossing rules.
pub struct CrossingEngine {
    game: Game,
    observers: Vec<Box<dyn CrossingObserver>>,
}

impl CrossingEngine {
    /// Start a new game.
    pub fn new(config: CrossingConfig) -> Result<Self, ConfigError> {
        Ok(Self::from_game(Game::new(config)?))
    }

    /// Wrap an existing game.
    #[must_use]
    pub fn from_game(game: Game) -> Self {
        Self {
            game,
            observers: Vec::new(),
        }
    }

    /// Register an observer (builder pattern).
    #[must_use]
    pub fn with_observer<O: CrossingObserver + 'static>(mut self, observer: O) -> Self {
        self.observers.push(Box::new(observer));
        self
    }

    /// Register an observer.
    pub fn add_observer(&mut self, observer: Box<dyn CrossingObserver>) {
        self.observers.push(observer);
    }

    // === Queries ===

    #[must_use]
    pub fn game(&self) -> &Game {
        &self.game
    }

    #[must_use]
    pub fn status(&self) -> GameStatus {
        self.game.status()
    }

    /// A voyage is in flight; commands other than `complete_voyage` and
    /// `reset` are rejected.
    #[must_use]
    pub fn is_busy(&self) -> bool {
        self.game.is_busy()
    }

    #[must_use]
    pub fn snapshot(&self) -> Snapshot {
        Snapshot::of(&self.game)
    }

    /// Humans and monsters on `side`, counting the boat if moored there.
    #[must_use]
    pub fn headcount(&self, side: Side) -> Headcount {
        rules::side_headcount(&self.game, side)
    }

    #[must_use]
    pub fn is_balanced(&self, side: Side) -> bool {
        rules::is_side_balanced(&self.game, side)
    }

    // === Commands ===

    /// Move an avatar from its dock into the boat.
    pub fn board(&mut self, id: AvatarId) -> Result<(), Rejection> {
        self.check_board(id)
            .inspect_err(|rejection| log_rejection("board", rejection))?;

        let moved = self.game.transfer(id, MountId::Boat);
        debug_assert!(moved, "boarding {id} passed every check but failed");

        debug!(avatar = %id, aboard = self.game.boat().len(), "avatar boarded");
        self.changed();
        Ok(())
    }

    /// Move an avatar from the boat onto the dock the boat is moored at.
    pub fn disembark(&mut self, id: AvatarId) -> Result<(), Rejection> {
        let side = self
            .check_disembark(id)
            .inspect_err(|rejection| log_rejection("disembark", rejection))?;

        let moved = self.game.transfer(id, MountId::Dock(side));
        debug_assert!(moved, "disembarking {id} passed every check but failed");

        debug!(avatar = %id, %side, "avatar disembarked");
        self.changed();
        Ok(())
    }

    /// Send the boat across the river.
    ///
    /// Increments the trip counter. The voyage stays in flight until
    /// `complete_voyage` is called.
    pub fn launch(&mut self) -> Result<Voyage, Rejection> {
        let from = self
            .check_launch()
            .inspect_err(|rejection| log_rejection("launch", rejection))?;
        let to = from.opposite();

        let sailed = self.game.boat_mut().set_sail();
        debug_assert_eq!(sailed, Some(to));

        let trip = self.game.record_trip();
        self.game.set_passengers_mount(MountState::InTransit);

        let voyage = Voyage {
            trip,
            from,
            to,
            manifest: self.game.boat().holder().iter().collect(),
        };
        info!(trip, %from, %to, crew = voyage.manifest.len(), "voyage started");

        self.changed();
        self.emit(CrossingEvent::VoyageStarted(voyage.clone()));
        Ok(voyage)
    }

    /// Dock the boat at the far side and evaluate the outcome.
    pub fn complete_voyage(&mut self) -> Result<GameStatus, Rejection> {
        if self.game.status().is_terminal() {
            log_rejection("complete_voyage", &Rejection::GameOver);
            return Err(Rejection::GameOver);
        }
        let Some(side) = self.game.boat_mut().arrive() else {
            log_rejection("complete_voyage", &Rejection::NoVoyageInProgress);
            return Err(Rejection::NoVoyageInProgress);
        };

        self.game.set_passengers_mount(MountState::Mounted(MountId::Boat));
        info!(trip = self.game.trips(), %side, "voyage completed");

        self.changed();
        Ok(self.evaluate_outcome())
    }

    /// Check the win and loss conditions and record the outcome.
    ///
    /// Idempotent. Terminal games keep their outcome, and nothing is
    /// evaluated while a voyage is in flight.
    pub fn evaluate_outcome(&mut self) -> GameStatus {
        if self.game.status().is_terminal() || self.game.is_busy() {
            return self.game.status();
        }

        if let Some(outcome) = rules::assess(&self.game) {
            info!(%outcome, trips = outcome.trips(), "game over");
            self.game.set_outcome(outcome);
            self.changed();
            self.emit(CrossingEvent::OutcomeReached(outcome));
        }

        self.game.status()
    }

    /// Throw the current game away and start a new one.
    ///
    /// Allowed at any time, including mid-voyage and after the game ended.
    /// On a configuration error the current game is kept.
    pub fn reset(&mut self, config: CrossingConfig) -> Result<(), ConfigError> {
        let game = Game::new(config)
            .inspect_err(|err| debug!(error = %err, "reset refused"))?;

        info!(
            monsters = game.config().monsters,
            humans = game.config().humans,
            boat_capacity = game.config().boat_capacity,
            "new game"
        );
        self.game = game;
        self.changed();
        Ok(())
    }

    // === Rule Checks ===

    fn check_ready(&self) -> Result<(), Rejection> {
        if self.game.status().is_terminal() {
            return Err(Rejection::GameOver);
        }
        if self.game.is_busy() {
            return Err(Rejection::VoyageInProgress);
        }
        Ok(())
    }

    fn check_board(&self, id: AvatarId) -> Result<(), Rejection> {
        self.check_ready()?;

        let avatar = self.game.avatar(id).ok_or(Rejection::UnknownAvatar(id))?;
        let avatar_side = avatar.dock_side().ok_or(Rejection::NotOnDock(id))?;

        let boat = self.game.boat();
        let boat_side = boat.docked_side().ok_or(Rejection::VoyageInProgress)?;
        if avatar_side != boat_side {
            return Err(Rejection::WrongShore {
                avatar: id,
                avatar_side,
                boat_side,
            });
        }
        if boat.is_full() {
            return Err(Rejection::BoatFull {
                capacity: boat.max_capacity(),
            });
        }
        Ok(())
    }

    /// Returns the side the avatar will step onto.
    fn check_disembark(&self, id: AvatarId) -> Result<Side, Rejection> {
        self.check_ready()?;

        let avatar = self.game.avatar(id).ok_or(Rejection::UnknownAvatar(id))?;
        if !avatar.is_aboard() {
            return Err(Rejection::NotAboard(id));
        }
        self.game.boat().docked_side().ok_or(Rejection::VoyageInProgress)
    }

    /// Returns the side the boat leaves from.
    fn check_launch(&self) -> Result<Side, Rejection> {
        self.check_ready()?;

        let boat = self.game.boat();
        if !boat.has_crew() {
            return Err(Rejection::NeedsCrew {
                aboard: boat.len(),
                minimum: boat.min_crew(),
            });
        }
        boat.docked_side().ok_or(Rejection::VoyageInProgress)
    }

    // === Notifications ===

    fn changed(&mut self) {
        if cfg!(debug_assertions) {
            if let Err(violation) = self.game.check_invariants() {
                panic!("crossing invariant violated: {violation}");
            }
        }
        if !self.observers.is_empty() {
            let snapshot = Snapshot::of(&self.game);
            self.emit(CrossingEvent::Changed(snapshot));
        }
    }

    fn emit(&mut self, event: CrossingEvent) {
        debug!(event = event.kind(), observers = self.observers.len(), "notify");
        for observer in &mut self.observers {
            observer.notify(&event);
        }
    }
}

impl std::fmt::Debug for CrossingEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CrossingEngine")
            .field("game", &self.game)
            .field("observers", &self.observers.len())
            .finish()
    }
}

fn log_rejection(command: &'static str, rejection: &Rejection) {
    debug!(command, code = ?rejection.code(), reason = %rejection, "command rejected");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{AvatarKind, Zone};
    use crate::mounts::BoatLocation;
    use crate::observer::EventLog;
    use crate::rules::Outcome;

    fn engine(monsters: u32, humans: u32, capacity: u32) -> CrossingEngine {
        CrossingEngine::new(CrossingConfig::new(monsters, humans, capacity)).unwrap()
    }

    fn human(engine: &CrossingEngine, n: usize) -> AvatarId {
        engine.game().avatars_of_kind(AvatarKind::Human)[n]
    }

    fn monster(engine: &CrossingEngine, n: usize) -> AvatarId {
        engine.game().avatars_of_kind(AvatarKind::Monster)[n]
    }

    fn cross(engine: &mut CrossingEngine) -> GameStatus {
        engine.launch().unwrap();
        engine.complete_voyage().unwrap()
    }

    #[test]
    fn test_board_and_disembark() {
        let mut engine = engine(3, 3, 2);
        let h = human(&engine, 0);

        engine.board(h).unwrap();
        assert_eq!(engine.game().avatar(h).unwrap().zone(), Zone::Boat);
        assert!(engine.game().boat().contains(h));

        engine.disembark(h).unwrap();
        assert_eq!(engine.game().avatar(h).unwrap().zone(), Zone::OriginDock);
        assert!(engine.game().boat().is_empty());
    }

    #[test]
    fn test_board_rejections() {
        let mut engine = engine(3, 3, 2);

        assert_eq!(engine.board(AvatarId(99)), Err(Rejection::UnknownAvatar(AvatarId(99))));

        engine.board(human(&engine, 0)).unwrap();
        assert_eq!(
            engine.board(human(&engine, 0)),
            Err(Rejection::NotOnDock(human(&engine, 0)))
        );

        engine.board(monster(&engine, 0)).unwrap();
        assert_eq!(
            engine.board(human(&engine, 1)),
            Err(Rejection::BoatFull { capacity: 2 })
        );
    }

    #[test]
    fn test_board_from_wrong_shore() {
        let mut engine = engine(3, 3, 2);
        let (h0, m0) = (human(&engine, 0), monster(&engine, 0));

        engine.board(h0).unwrap();
        engine.board(m0).unwrap();
        cross(&mut engine);
        engine.disembark(h0).unwrap();

        // Boat is at the destination, origin avatars cannot board
        let h1 = human(&engine, 1);
        assert_eq!(
            engine.board(h1),
            Err(Rejection::WrongShore {
                avatar: h1,
                avatar_side: Side::Origin,
                boat_side: Side::Destination,
            })
        );

        // The one who just got off can get back on
        engine.board(h0).unwrap();
    }

    #[test]
    fn test_disembark_not_aboard() {
        let mut engine = engine(3, 3, 2);
        let h = human(&engine, 0);
        assert_eq!(engine.disembark(h), Err(Rejection::NotAboard(h)));
        assert_eq!(engine.disembark(AvatarId(50)), Err(Rejection::UnknownAvatar(AvatarId(50))));
    }

    #[test]
    fn test_launch_needs_crew() {
        let mut engine = engine(3, 3, 2);
        assert_eq!(
            engine.launch(),
            Err(Rejection::NeedsCrew { aboard: 0, minimum: 1 })
        );
        assert_eq!(engine.status(), GameStatus::Ongoing);
        assert_eq!(engine.game().trips(), 0);
        assert!(!engine.is_busy());
    }

    #[test]
    fn test_min_crew_two() {
        let config = CrossingConfig::new(3, 3, 2).with_min_crew(2);
        let mut engine = CrossingEngine::new(config).unwrap();

        engine.board(human(&engine, 0)).unwrap();
        assert_eq!(
            engine.launch(),
            Err(Rejection::NeedsCrew { aboard: 1, minimum: 2 })
        );

        engine.board(monster(&engine, 0)).unwrap();
        assert!(engine.launch().is_ok());
    }

    #[test]
    fn test_busy_rejects_commands() {
        let mut engine = engine(3, 3, 2);
        let (h0, h1) = (human(&engine, 0), human(&engine, 1));
        engine.board(h0).unwrap();

        let voyage = engine.launch().unwrap();
        assert_eq!(voyage.trip, 1);
        assert_eq!(voyage.from, Side::Origin);
        assert_eq!(voyage.to, Side::Destination);
        assert_eq!(voyage.manifest.as_slice(), &[h0]);

        assert!(engine.is_busy());
        assert_eq!(engine.game().avatar(h0).unwrap().zone(), Zone::InTransit);
        assert_eq!(
            engine.game().boat().location(),
            BoatLocation::InTransit {
                from: Side::Origin,
                to: Side::Destination
            }
        );

        assert_eq!(engine.board(h1), Err(Rejection::VoyageInProgress));
        assert_eq!(engine.disembark(h0), Err(Rejection::VoyageInProgress));
        assert_eq!(engine.launch().unwrap_err(), Rejection::VoyageInProgress);
        assert_eq!(engine.evaluate_outcome(), GameStatus::Ongoing);

        engine.complete_voyage().unwrap();
        assert!(!engine.is_busy());
        assert_eq!(engine.game().avatar(h0).unwrap().zone(), Zone::Boat);
        assert_eq!(engine.complete_voyage(), Err(Rejection::NoVoyageInProgress));
    }

    #[test]
    fn test_complete_without_voyage() {
        let mut engine = engine(1, 1, 1);
        assert_eq!(engine.complete_voyage(), Err(Rejection::NoVoyageInProgress));
    }

    #[test]
    fn test_loss_on_origin() {
        let mut engine = engine(2, 2, 2);
        engine.board(human(&engine, 0)).unwrap();

        assert_eq!(cross(&mut engine), GameStatus::Lost);
        assert_eq!(
            engine.game().outcome(),
            Some(&Outcome::Lost {
                side: Side::Origin,
                headcount: Headcount::new(1, 2),
                trips: 1,
            })
        );
    }

    #[test]
    fn test_terminal_rejects_everything() {
        let mut engine = engine(2, 2, 2);
        let h0 = human(&engine, 0);
        engine.board(h0).unwrap();
        cross(&mut engine);
        assert_eq!(engine.status(), GameStatus::Lost);

        assert_eq!(engine.disembark(h0), Err(Rejection::GameOver));
        assert_eq!(engine.board(human(&engine, 1)), Err(Rejection::GameOver));
        assert_eq!(engine.launch().unwrap_err(), Rejection::GameOver);
        assert_eq!(engine.complete_voyage(), Err(Rejection::GameOver));
        assert_eq!(engine.evaluate_outcome(), GameStatus::Lost);
    }

    #[test]
    fn test_single_pair_wins() {
        let mut engine = engine(1, 1, 2);
        engine.board(human(&engine, 0)).unwrap();
        engine.board(monster(&engine, 0)).unwrap();

        assert_eq!(cross(&mut engine), GameStatus::Won);
        assert_eq!(engine.game().outcome(), Some(&Outcome::Won { trips: 1 }));
    }

    #[test]
    fn test_win_precedes_imbalance() {
        // Everybody crosses together; the destination is outnumbered but
        // the crossing is complete.
        let mut engine = engine(2, 1, 3);
        for id in engine.game().avatar_ids() {
            engine.board(id).unwrap();
        }
        assert_eq!(cross(&mut engine), GameStatus::Won);
    }

    #[test]
    fn test_reset() {
        let mut engine = engine(2, 2, 2);
        engine.board(human(&engine, 0)).unwrap();
        cross(&mut engine);
        assert_eq!(engine.status(), GameStatus::Lost);

        engine.reset(CrossingConfig::new(4, 5, 3)).unwrap();
        assert_eq!(engine.status(), GameStatus::Ongoing);
        assert_eq!(engine.game().trips(), 0);
        assert_eq!(engine.game().total_avatars(), 9);
        assert_eq!(engine.game().boat().max_capacity(), 3);

        // A bad config keeps the current game
        assert!(engine.reset(CrossingConfig::new(0, 1, 1)).is_err());
        assert_eq!(engine.game().total_avatars(), 9);
    }

    #[test]
    fn test_reset_mid_voyage() {
        let mut engine = engine(3, 3, 2);
        engine.board(human(&engine, 0)).unwrap();
        engine.launch().unwrap();

        engine.reset(CrossingConfig::default()).unwrap();
        assert!(!engine.is_busy());
        assert_eq!(engine.complete_voyage(), Err(Rejection::NoVoyageInProgress));
    }

    #[test]
    fn test_observers_notified() {
        let log = EventLog::new();
        let mut engine = engine(1, 1, 2).with_observer(log.clone());

        engine.board(AvatarId(0)).unwrap();
        engine.board(AvatarId(1)).unwrap();
        engine.launch().unwrap();
        engine.complete_voyage().unwrap();

        let kinds: Vec<_> = log.events().iter().map(CrossingEvent::kind).collect();
        assert_eq!(
            kinds,
            vec![
                "changed",
                "changed",
                "changed",
                "voyage_started",
                "changed",
                "changed",
                "outcome_reached",
            ]
        );

        // Rejections do not notify
        log.drain();
        assert!(engine.launch().is_err());
        assert!(log.is_empty());
    }

    #[test]
    fn test_observer_added_later() {
        let early = EventLog::new();
        let late = EventLog::new();
        let mut engine = engine(3, 3, 2).with_observer(early.clone());

        engine.board(AvatarId(0)).unwrap();
        engine.add_observer(Box::new(late.clone()));
        engine.launch().unwrap();

        assert_eq!(early.len(), 3);
        let kinds: Vec<_> = late.events().iter().map(CrossingEvent::kind).collect();
        assert_eq!(kinds, vec!["changed", "voyage_started"]);
    }

    #[test]
    fn test_headcount_queries() {
        let mut engine = engine(3, 3, 2);
        engine.board(human(&engine, 0)).unwrap();

        // Boat is moored at the origin, so its passenger still counts there
        assert_eq!(engine.headcount(Side::Origin), Headcount::new(3, 3));

        engine.launch().unwrap();
        assert_eq!(engine.headcount(Side::Origin), Headcount::new(2, 3));
        assert!(!engine.is_balanced(Side::Origin));
        assert_eq!(engine.headcount(Side::Destination), Headcount::default());
    }
}
