//! Terminal adapter for the crossing engine.
//!
//! Reads one command per line from stdin:
//!
//! ```text
//! board <id>     put an avatar in the boat        (alias: b)
//! off <id>       take an avatar out of the boat   (alias: d)
//! go             launch the boat                  (alias: launch)
//! hint           suggest the next crossing
//! solve          print the shortest plan from here
//! auto           play the rest of the game
//! reset [M H C]  start over, optionally with new counts
//! status         redraw the river
//! quit
//! ```

use std::io::{self, BufRead, Write};
use std::process::ExitCode;
use std::thread;
use std::time::Duration;

use clap::Parser;
use river_crossing::core::{AvatarId, AvatarKind, ConfigError, CrossingConfig, Side};
use river_crossing::game::{CrossingEngine, Snapshot};
use river_crossing::mounts::BoatLocation;
use river_crossing::observer::{CrossingObserver, Voyage};
use river_crossing::rules::{GameStatus, Outcome};
use river_crossing::solver::{self, Position};
use tracing::warn;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(author, version, about = "Get the humans and monsters across the river", long_about = None)]
struct Cli {
    /// Number of monsters
    #[arg(long, default_value = "3")]
    monsters: String,

    /// Number of humans
    #[arg(long, default_value = "3")]
    humans: String,

    /// Seats in the boat
    #[arg(long, default_value = "2")]
    capacity: String,

    /// Passengers needed to launch the boat
    #[arg(long, default_value_t = 1)]
    min_crew: u32,

    /// How long a crossing takes, in milliseconds
    #[arg(long, default_value_t = 400)]
    transit_ms: u64,

    /// Print snapshots as JSON instead of drawing the river
    #[arg(long)]
    json: bool,

    /// Log level used when RUST_LOG is not set
    #[arg(long, default_value = "warn")]
    log_level: String,
}

fn init_logging(level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

/// Draws the river after every change.
struct Renderer {
    json: bool,
}

impl CrossingObserver for Renderer {
    fn on_change(&mut self, snapshot: &Snapshot) {
        if self.json {
            match serde_json::to_string(snapshot) {
                Ok(line) => println!("{line}"),
                Err(err) => warn!(error = %err, "snapshot not serializable"),
            }
        } else {
            println!("{}", draw(snapshot));
        }
    }

    fn on_voyage_started(&mut self, voyage: &Voyage) {
        if !self.json {
            println!("~ trip {} sails from the {} side ~", voyage.trip, voyage.from);
        }
    }

    fn on_outcome(&mut self, outcome: &Outcome) {
        if !self.json {
            match outcome {
                Outcome::Won { .. } => println!("You won: {outcome}."),
                Outcome::Lost { .. } => println!("You lost: {outcome}."),
            }
        }
    }
}

fn label(snapshot: &Snapshot, id: AvatarId) -> String {
    let kind = snapshot
        .avatars
        .binary_search_by_key(&id, |a| a.id())
        .ok()
        .map(|i| snapshot.avatars[i].kind());
    match kind {
        Some(AvatarKind::Human) => format!("H{}", id.raw()),
        Some(AvatarKind::Monster) => format!("M{}", id.raw()),
        None => format!("?{}", id.raw()),
    }
}

fn group(snapshot: &Snapshot, ids: impl Iterator<Item = AvatarId>) -> String {
    let labels: Vec<String> = ids.map(|id| label(snapshot, id)).collect();
    format!("[{}]", labels.join(" "))
}

fn draw(snapshot: &Snapshot) -> String {
    let origin = group(snapshot, snapshot.origin.iter());
    let destination = group(snapshot, snapshot.destination.iter());
    let boat = format!("<{}>", group(snapshot, snapshot.boat.iter()));

    let river = match snapshot.boat_location {
        BoatLocation::Docked(Side::Origin) => format!("{boat}~~~~~~~~"),
        BoatLocation::Docked(Side::Destination) => format!("~~~~~~~~{boat}"),
        BoatLocation::InTransit { .. } => format!("~~~~{boat}~~~~"),
    };
    format!("{origin} {river} {destination}   trips: {}", snapshot.trips)
}

fn parse_id(arg: Option<&str>) -> Option<AvatarId> {
    arg?.parse::<u32>().ok().map(AvatarId::new)
}

/// Launch, wait out the crossing, then dock.
fn sail(engine: &mut CrossingEngine, transit: Duration) {
    match engine.launch() {
        Ok(_) => {
            thread::sleep(transit);
            if let Err(rejection) = engine.complete_voyage() {
                warn!(reason = %rejection, "voyage could not complete");
            }
        }
        Err(rejection) => println!("! {rejection}"),
    }
}

fn reset(engine: &mut CrossingEngine, args: &[&str], min_crew: u32) -> Result<(), ConfigError> {
    let config = match args {
        [monsters, humans, capacity] => CrossingConfig::from_inputs(monsters, humans, capacity)?,
        _ => engine.game().config().clone(),
    };
    engine.reset(config.with_min_crew(min_crew))
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(&cli.log_level);

    let config = match CrossingConfig::from_inputs(&cli.monsters, &cli.humans, &cli.capacity)
        .map(|c| c.with_min_crew(cli.min_crew))
        .and_then(|c| c.validate().map(|()| c))
    {
        Ok(config) => config,
        Err(err) => {
            eprintln!("error: {err}");
            return ExitCode::FAILURE;
        }
    };

    let mut engine = match CrossingEngine::new(config) {
        Ok(engine) => engine.with_observer(Renderer { json: cli.json }),
        Err(err) => {
            eprintln!("error: {err}");
            return ExitCode::FAILURE;
        }
    };
    let transit = Duration::from_millis(cli.transit_ms);

    println!("{}", draw(&engine.snapshot()));

    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let Ok(line) = line else { break };
        let words: Vec<&str> = line.split_whitespace().collect();
        let Some((&command, args)) = words.split_first() else {
            continue;
        };

        match command {
            "board" | "b" => match parse_id(args.first().copied()) {
                Some(id) => {
                    if let Err(rejection) = engine.board(id) {
                        println!("! {rejection}");
                    }
                }
                None => println!("! usage: board <id>"),
            },
            "off" | "d" => match parse_id(args.first().copied()) {
                Some(id) => {
                    if let Err(rejection) = engine.disembark(id) {
                        println!("! {rejection}");
                    }
                }
                None => println!("! usage: off <id>"),
            },
            "go" | "launch" => sail(&mut engine, transit),
            "hint" => match solver::hint(engine.game()) {
                Some(crossing) => println!("try: {crossing}"),
                None => println!("no winning move from here"),
            },
            "solve" => {
                let plan = Position::of(engine.game())
                    .filter(|_| engine.status() == GameStatus::Ongoing)
                    .and_then(|p| solver::solve_from(p, engine.game().config()));
                match plan {
                    Some(plan) => {
                        for (n, crossing) in plan.crossings.iter().enumerate() {
                            println!("{:>3}. {crossing}", n + 1);
                        }
                    }
                    None => println!("no winning plan from here"),
                }
            }
            "auto" => {
                while let Some(crossing) = solver::hint(engine.game()) {
                    if let Err(err) = solver::play(&mut engine, &crossing) {
                        println!("! {err}");
                        break;
                    }
                    thread::sleep(transit);
                }
                if engine.status() == GameStatus::Ongoing {
                    println!("no winning plan from here");
                }
            }
            "reset" => {
                if let Err(err) = reset(&mut engine, args, cli.min_crew) {
                    println!("! {err}");
                }
            }
            "status" => println!("{}", draw(&engine.snapshot())),
            "quit" | "exit" => break,
            other => println!("! unknown command {other:?}"),
        }

        if io::stdout().flush().is_err() {
            break;
        }
    }

    ExitCode::SUCCESS
}
