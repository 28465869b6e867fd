#[cfg(not(feature = "std"))]
fn main() {}

#[cfg(feature = "std")]
use seabattle::{
    display::{coord_to_string, parse_coord, render_board},
    init_logging, GameError, GameSession, Orientation, RandomTargeting, Side, Statistics,
    Targeting, TurnOutcome,
};

#[cfg(feature = "std")]
use clap::{Parser, Subcommand};
#[cfg(feature = "std")]
use log::LevelFilter;
#[cfg(feature = "std")]
use rand::rngs::SmallRng;
#[cfg(feature = "std")]
use rand::SeedableRng;
#[cfg(feature = "std")]
use std::io::{self, BufRead, Write};

/// Upper bound on turns in an automated game.
#[cfg(feature = "std")]
const MAX_SIM_TURNS: usize = 10_000;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[cfg(feature = "std")]
struct Cli {
    #[arg(long, global = true, help = "Log level (off..trace), overrides SEABATTLE_LOG")]
    log_level: Option<LevelFilter>,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
#[cfg(feature = "std")]
enum Commands {
    /// Play against the computer in the terminal.
    Play {
        #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
        seed: Option<u64>,
    },
    /// Run automated games where the human side fires at random.
    Sim {
        #[arg(long, default_value_t = 1)]
        games: u32,
        #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
        seed: Option<u64>,
        #[arg(long, help = "Print every turn as a JSON line")]
        trace: bool,
    },
}

#[cfg(feature = "std")]
fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.log_level);

    match cli.command {
        Commands::Play { seed } => run_play(seed),
        Commands::Sim { games, seed, trace } => run_sim(games, seed, trace),
    }
}

#[cfg(feature = "std")]
fn make_session(seed: Option<u64>) -> GameSession {
    match seed {
        Some(s) => GameSession::with_seed(s),
        None => GameSession::new(),
    }
}

#[cfg(feature = "std")]
fn make_rng(seed: Option<u64>) -> SmallRng {
    match seed {
        Some(s) => SmallRng::seed_from_u64(s.wrapping_add(1)),
        None => {
            let mut seed_rng = rand::rng();
            SmallRng::from_rng(&mut seed_rng)
        }
    }
}

/// Read one trimmed line from stdin; `None` on end of input.
#[cfg(feature = "std")]
fn prompt(message: &str) -> anyhow::Result<Option<String>> {
    print!("{} ", message);
    io::stdout().flush()?;
    let mut buf = String::new();
    if io::stdin().lock().read_line(&mut buf)? == 0 {
        return Ok(None);
    }
    Ok(Some(buf.trim().to_string()))
}

#[cfg(feature = "std")]
fn run_play(seed: Option<u64>) -> anyhow::Result<()> {
    let mut stats = Statistics::new();
    let mut session = make_session(seed);

    loop {
        session.initialize_game();
        println!("Place your ships!");
        if !place_fleet(&mut session)? {
            return Ok(());
        }
        session.end_placement_phase()?;
        println!("All ships placed. Attack the enemy board!");
        if !battle(&mut session, &mut stats)? {
            return Ok(());
        }

        let report = stats.report();
        println!(
            "Games played: {}  Wins: {}  Losses: {}  Hit accuracy: {}%",
            report.games_played, report.wins, report.losses, report.hit_accuracy
        );
        match prompt("Play again? [y/N]")? {
            Some(answer) if answer.eq_ignore_ascii_case("y") => continue,
            _ => return Ok(()),
        }
    }
}

/// Interactive placement. Returns `false` if the player quit.
#[cfg(feature = "std")]
fn place_fleet(session: &mut GameSession) -> anyhow::Result<bool> {
    while let Some(ship) = session.next_ship() {
        println!("\n{}", render_board(session.human().board(), true));
        let message = format!(
            "Place your {} (length {}), {} remaining [e.g. A1 h | A1 v | auto | reset | quit]:",
            ship.name(),
            ship.length(),
            session.remaining_ships()
        );
        let Some(line) = prompt(&message)? else {
            return Ok(false);
        };
        let mut parts = line.split_whitespace();
        let Some(first) = parts.next() else {
            continue;
        };
        match first.to_ascii_lowercase().as_str() {
            "quit" | "q" => return Ok(false),
            "auto" => session.auto_place_player_ships()?,
            "reset" => {
                session.reset_placement()?;
                println!("Ship placement reset. Place your ships!");
            }
            _ => {
                let (row, col) = match parse_coord(first) {
                    Ok(coord) => coord,
                    Err(e) => {
                        println!("{}", e);
                        continue;
                    }
                };
                let orientation = match parts.next().map(|s| s.to_ascii_lowercase()) {
                    None => Orientation::Horizontal,
                    Some(o) if o == "h" => Orientation::Horizontal,
                    Some(o) if o == "v" => Orientation::Vertical,
                    Some(o) => {
                        println!("Unknown orientation '{}' - use h or v", o);
                        continue;
                    }
                };
                if let Err(e) = session.place_player_ship(row, col, orientation) {
                    println!("Cannot place ship there: {}", e);
                }
            }
        }
    }
    println!("\n{}", render_board(session.human().board(), true));
    Ok(true)
}

/// Alternate human and computer turns until the game ends. Returns `false`
/// if the player quit.
#[cfg(feature = "std")]
fn battle(session: &mut GameSession, stats: &mut Statistics) -> anyhow::Result<bool> {
    loop {
        println!("\nEnemy waters:\n{}", render_board(session.computer().board(), false));
        println!("Your fleet:\n{}", render_board(session.human().board(), true));
        let Some(line) = prompt("Your target (e.g. B7, or quit):")? else {
            return Ok(false);
        };
        if line.eq_ignore_ascii_case("quit") || line.eq_ignore_ascii_case("q") {
            return Ok(false);
        }
        let target = match parse_coord(&line) {
            Ok(coord) => coord,
            Err(e) => {
                println!("{}", e);
                continue;
            }
        };

        let outcome = session.play_turn(stats, Some(target))?;
        if outcome.game_over {
            println!("You sunk the last ship. Congratulations! You won!");
            return Ok(true);
        }
        if outcome.sunk {
            println!("You sunk a ship! Computer's turn...");
        } else if outcome.hit {
            println!("Hit! Computer's turn...");
        } else {
            println!("Miss! Computer's turn...");
        }

        let outcome = session.play_turn(stats, None)?;
        let at = outcome
            .target
            .map(|(r, c)| coord_to_string(r, c))
            .unwrap_or_default();
        if outcome.game_over {
            println!("Computer fired at {}. Game over. Computer wins.", at);
            return Ok(true);
        }
        if outcome.sunk {
            println!("Computer fired at {} and sunk your ship! Your turn...", at);
        } else if outcome.hit {
            println!("Computer fired at {} and hit! Your turn...", at);
        } else {
            println!("Computer fired at {} and missed! Your turn...", at);
        }
    }
}

#[cfg(feature = "std")]
#[derive(serde::Serialize)]
struct GameSummary {
    game: u32,
    winner: Option<Side>,
    turns: usize,
}

#[cfg(feature = "std")]
#[derive(serde::Serialize)]
struct TraceLine<'a> {
    game: u32,
    turn: usize,
    outcome: &'a TurnOutcome,
}

#[cfg(feature = "std")]
fn run_sim(games: u32, seed: Option<u64>, trace: bool) -> anyhow::Result<()> {
    let mut stats = Statistics::new();
    let mut session = make_session(seed);
    let mut shooter_rng = make_rng(seed);
    let mut shooter = RandomTargeting;

    for game in 1..=games {
        session.initialize_game();
        session.auto_place_player_ships()?;
        session.end_placement_phase()?;

        let mut turns = 0;
        while !session.is_finished() {
            if turns >= MAX_SIM_TURNS {
                anyhow::bail!("game {} did not finish after {} turns", game, turns);
            }
            let target = match session.current_player() {
                Side::Human => Some(
                    shooter
                        .select_target(&mut shooter_rng, session.computer().board(), None)
                        .ok_or(GameError::NoTargetAvailable)?,
                ),
                Side::Computer => None,
            };
            let outcome = session.play_turn(&mut stats, target)?;
            turns += 1;
            if trace {
                let line = TraceLine {
                    game,
                    turn: turns,
                    outcome: &outcome,
                };
                println!("{}", serde_json::to_string(&line)?);
            }
        }

        let summary = GameSummary {
            game,
            winner: session.winner(),
            turns,
        };
        println!("{}", serde_json::to_string(&summary)?);
    }

    println!("{}", serde_json::to_string(&stats.report())?);
    Ok(())
}
