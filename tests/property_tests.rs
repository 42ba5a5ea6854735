//! Property tests: random command sequences never break the rules.

use proptest::prelude::*;

use river_crossing::core::{AvatarId, ConfigError, CrossingConfig, Rejection, Side, MAX_AVATARS};
use river_crossing::game::CrossingEngine;
use river_crossing::mounts::Mount;
use river_crossing::rules::GameStatus;

#[derive(Clone, Debug)]
enum Command {
    Board(u32),
    Disembark(u32),
    Launch,
    Complete,
    Evaluate,
}

fn config_strategy() -> impl Strategy<Value = CrossingConfig> {
    (1u32..=4, 1u32..=4, 1u32..=4)
        .prop_flat_map(|(monsters, humans, capacity)| {
            (Just(monsters), Just(humans), Just(capacity), 1u32..=capacity)
        })
        .prop_map(|(monsters, humans, capacity, min_crew)| {
            CrossingConfig::new(monsters, humans, capacity).with_min_crew(min_crew)
        })
}

fn command_strategy() -> impl Strategy<Value = Command> {
    prop_oneof![
        3 => (0u32..9).prop_map(Command::Board),
        2 => (0u32..9).prop_map(Command::Disembark),
        2 => Just(Command::Launch),
        2 => Just(Command::Complete),
        1 => Just(Command::Evaluate),
    ]
}

fn check_state(engine: &CrossingEngine) -> Result<(), TestCaseError> {
    let game = engine.game();
    prop_assert_eq!(game.check_invariants(), Ok(()));

    let held = game.dock(Side::Origin).len()
        + game.dock(Side::Destination).len()
        + game.boat().len();
    prop_assert_eq!(held, game.config().total_avatars() as usize);
    prop_assert!(game.boat().len() <= game.boat().max_capacity());

    if engine.status() == GameStatus::Won {
        prop_assert!(game.dock(Side::Origin).is_empty());
        prop_assert!(game.boat().is_docked_at(Side::Destination));
    }
    Ok(())
}

proptest! {
    #[test]
    fn prop_random_play_keeps_invariants(
        config in config_strategy(),
        commands in prop::collection::vec(command_strategy(), 0..60),
    ) {
        let mut engine = CrossingEngine::new(config).unwrap();

        for command in commands {
            let terminal = engine.status().is_terminal();
            let aboard = engine.game().boat().len();
            let trips = engine.game().trips();

            match command {
                Command::Board(id) => {
                    let result = engine.board(AvatarId(id));
                    if terminal {
                        prop_assert_eq!(result, Err(Rejection::GameOver));
                    }
                }
                Command::Disembark(id) => {
                    let result = engine.disembark(AvatarId(id));
                    if terminal {
                        prop_assert_eq!(result, Err(Rejection::GameOver));
                    }
                }
                Command::Launch => match engine.launch() {
                    Ok(voyage) => {
                        prop_assert!(!terminal);
                        prop_assert!(aboard >= engine.game().boat().min_crew());
                        prop_assert_eq!(voyage.trip, trips + 1);
                        prop_assert!(engine.is_busy());
                    }
                    Err(_) => prop_assert_eq!(engine.game().trips(), trips),
                },
                Command::Complete => {
                    let busy = engine.is_busy();
                    let result = engine.complete_voyage();
                    prop_assert_eq!(result.is_ok(), busy && !terminal);
                }
                Command::Evaluate => {
                    let first = engine.evaluate_outcome();
                    let second = engine.evaluate_outcome();
                    prop_assert_eq!(first, second);
                }
            }

            check_state(&engine)?;

            if terminal {
                prop_assert!(engine.status().is_terminal());
            }
        }
    }

    #[test]
    fn prop_busy_engine_rejects_moves(config in config_strategy(), id in 0u32..9) {
        let mut engine = CrossingEngine::new(config).unwrap();
        let crew: Vec<_> = engine
            .game()
            .avatar_ids()
            .into_iter()
            .take(engine.game().boat().min_crew())
            .collect();
        for avatar in crew {
            engine.board(avatar).unwrap();
        }
        engine.launch().unwrap();

        prop_assert_eq!(engine.board(AvatarId(id)), Err(Rejection::VoyageInProgress));
        prop_assert_eq!(engine.disembark(AvatarId(id)), Err(Rejection::VoyageInProgress));
        prop_assert_eq!(engine.launch().unwrap_err(), Rejection::VoyageInProgress);
        prop_assert_eq!(engine.evaluate_outcome(), GameStatus::Ongoing);
        prop_assert!(engine.complete_voyage().is_ok());
    }

    #[test]
    fn prop_invalid_counts_rejected(monsters in 0u32..3, humans in 0u32..3, capacity in 0u32..3) {
        let config = CrossingConfig::new(monsters, humans, capacity);
        let valid = monsters >= 1 && humans >= 1 && capacity >= 1;
        prop_assert_eq!(CrossingEngine::new(config).is_ok(), valid);
    }

    #[test]
    fn prop_oversized_totals_rejected(
        monsters in prop_oneof![1u32..=6_000, 1u32..],
        humans in prop_oneof![1u32..=6_000, 1u32..],
    ) {
        let config = CrossingConfig::new(monsters, humans, 2);
        let total = u64::from(monsters) + u64::from(humans);

        match CrossingEngine::new(config) {
            Ok(engine) => {
                prop_assert!(total <= u64::from(MAX_AVATARS));
                prop_assert_eq!(engine.game().total_avatars() as u64, total);
            }
            Err(err) => {
                prop_assert!(total > u64::from(MAX_AVATARS));
                prop_assert_eq!(err, ConfigError::TooManyAvatars { total, max: MAX_AVATARS });
            }
        }
    }
}
