//! Standalone agent-vs-agent runner.
//!
//! Run with:
//! `cargo run --release --bin self_play -- --first max-positive-agent --second base-agent`
//! `cargo run --release --bin self_play -- --config agent.toml --games 5`

use std::path::PathBuf;

use clap::Parser;
use neural_knight::agents::agent_config::AgentConfig;
use neural_knight::agents::agent_trait::Agent;
use neural_knight::agents::registry::AGENT_NAMES;
use neural_knight::chess_errors::ChessResult;
use neural_knight::transition::position::Position;
use neural_knight::utils::self_play::{play_game, GameOutcome, Seat, SelfPlayConfig};

#[derive(Parser, Debug)]
#[command(author, version, about = "Play registry agents against each other", long_about = None)]
struct Args {
    /// Agent moving first
    #[arg(long, default_value = "balance-agent")]
    first: String,

    /// Agent moving second
    #[arg(long, default_value = "base-agent")]
    second: String,

    /// TOML or JSON agent config for the first agent; overrides --first
    #[arg(long)]
    config: Option<PathBuf>,

    /// Plies of lookahead for both agents
    #[arg(short, long, default_value_t = 1)]
    lookahead: u8,

    /// Scoring threads per agent
    #[arg(short, long, default_value_t = 4)]
    workers: usize,

    #[arg(long, default_value_t = 300)]
    max_plies: u32,

    #[arg(short, long, default_value_t = 1)]
    games: u16,

    /// Base seed; game i uses seed + i
    #[arg(long, default_value_t = 1234)]
    seed: u64,

    /// Print the final board of every game
    #[arg(long)]
    show_board: bool,

    /// Log level when RUST_LOG is unset
    #[arg(long, default_value = "info")]
    log_level: String,

    /// List agent names and exit
    #[arg(long)]
    list: bool,
}

fn agent_for(name: &str, args: &Args, seed: u64) -> ChessResult<Box<dyn Agent>> {
    AgentConfig {
        agent: name.to_owned(),
        lookahead: args.lookahead,
        workers: args.workers,
        seed: Some(seed),
        ..AgentConfig::default()
    }
    .build()
}

fn main() -> ChessResult<()> {
    let args = Args::parse();

    env_logger::Builder::from_env(
        env_logger::Env::default().filter_or(env_logger::DEFAULT_FILTER_ENV, &args.log_level),
    )
    .init();

    if args.list {
        for name in AGENT_NAMES {
            println!("{name}");
        }
        return Ok(());
    }

    let file_config = args.config.as_deref().map(AgentConfig::from_file).transpose()?;

    let mut first_wins = 0u16;
    let mut second_wins = 0u16;
    let mut other = 0u16;

    for game in 0..args.games {
        let seed = args.seed.wrapping_add(u64::from(game));
        let mut first = match &file_config {
            Some(config) => AgentConfig {
                seed: Some(seed),
                ..config.clone()
            }
            .build()?,
            None => agent_for(&args.first, &args, seed)?,
        };
        let mut second = agent_for(&args.second, &args, seed ^ 0x5A5A_A5A5)?;

        let record = play_game(
            first.as_mut(),
            second.as_mut(),
            Position::initial(),
            SelfPlayConfig {
                max_plies: args.max_plies,
            },
        )?;

        match record.outcome {
            GameOutcome::KingCaptured { winner: Seat::First }
            | GameOutcome::NoMoves { stuck: Seat::Second } => first_wins += 1,
            GameOutcome::KingCaptured { winner: Seat::Second }
            | GameOutcome::NoMoves { stuck: Seat::First } => second_wins += 1,
            GameOutcome::Stale | GameOutcome::MaxPlies => other += 1,
        }

        println!(
            "[{}] game {}/{} {} vs {} seed={} {}",
            chrono::Local::now().format("%Y-%m-%d %H:%M:%S"),
            game + 1,
            args.games,
            first.name(),
            second.name(),
            seed,
            record.report()
        );
        if args.show_board {
            println!("{}", record.final_position.board());
        }
    }

    println!("first_wins={first_wins} second_wins={second_wins} undecided={other}");
    Ok(())
}
