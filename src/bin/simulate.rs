//! Match simulator.
//!
//! Plays seeded matches between a random-move player and the heuristic
//! opponent and prints one summary per match.
//!
//! Usage:
//!   cargo run --features cli --bin simulate -- [OPTIONS]
//!
//! Examples:
//!   cargo run --features cli --bin simulate -- -n 100 --seed 42
//!   cargo run --features cli --bin simulate -- --region tagalog --json
//!   RUST_LOG=debug cargo run --features cli --bin simulate -- -n 1

use std::error::Error;
use std::path::PathBuf;

use clap::Parser;
use serde::Serialize;

use shell_duel::{
    DuelConfig, DuelEngine, FighterId, GameRng, Heuristic, HeuristicConfig, MatchResult, RandomSource, Region,
    RoundStart,
};

#[derive(Parser)]
#[command(author, version, about = "Simulate shell duel matches", long_about = None)]
struct Args {
    /// Number of matches to play
    #[arg(short = 'n', long, default_value_t = 10)]
    matches: u32,

    /// Base seed; match i uses a fork of it
    #[arg(long, default_value_t = 0)]
    seed: u64,

    /// Player fighter name
    #[arg(long, default_value = "Player")]
    name: String,

    /// Player region (bisaya or tagalog)
    #[arg(long, default_value = "bisaya")]
    region: Region,

    /// JSON file with duel rules; missing fields keep their defaults
    #[arg(long)]
    config: Option<PathBuf>,

    /// Opponent never uses items or shoots itself
    #[arg(long)]
    aggressive: bool,

    /// Print one JSON object per match instead of text
    #[arg(long)]
    json: bool,
}

#[derive(Serialize)]
struct MatchSummary {
    index: u32,
    seed: u64,
    result: MatchResult,
    rounds: u32,
    player_wins: u32,
    opponent_wins: u32,
    turns: u32,
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();
    let args = Args::parse();

    let config = match &args.config {
        Some(path) => serde_json::from_str::<DuelConfig>(&std::fs::read_to_string(path)?)?,
        None => DuelConfig::default(),
    };
    let heuristic = if args.aggressive {
        HeuristicConfig::aggressive()
    } else {
        HeuristicConfig::default()
    };
    heuristic.validate()?;
    let engine = DuelEngine::with_policy(config, Heuristic::new(heuristic))?;

    let mut seeds = GameRng::new(args.seed);
    let mut player_total = 0;
    let mut opponent_total = 0;
    let mut draws = 0;

    for index in 0..args.matches {
        let rng = seeds.fork();
        let summary = play_match(&engine, &args, index, rng)?;
        match summary.result {
            MatchResult::Winner(FighterId::Player) => player_total += 1,
            MatchResult::Winner(FighterId::Opponent) => opponent_total += 1,
            MatchResult::Draw => draws += 1,
        }

        if args.json {
            println!("{}", serde_json::to_string(&summary)?);
        } else {
            let result = match summary.result {
                MatchResult::Winner(id) => format!("{id} wins"),
                MatchResult::Draw => "draw".to_string(),
            };
            println!(
                "match {:>4}  {:<13} {}-{}  rounds {}  turns {:>3}",
                summary.index, result, summary.player_wins, summary.opponent_wins, summary.rounds, summary.turns
            );
        }
    }

    if !args.json {
        println!();
        println!("player {player_total}  opponent {opponent_total}  draws {draws}");
    }
    Ok(())
}

fn play_match(engine: &DuelEngine, args: &Args, index: u32, mut rng: GameRng) -> Result<MatchSummary, Box<dyn Error>> {
    let seed = rng.seed();
    let mut player_rng = rng.fork();
    let mut state = engine.create_game(format!("sim-{index}"), args.name.as_str(), args.region, &mut rng);
    let mut turns = 0;

    let result = loop {
        if state.is_round_over() {
            match engine.start_new_round(&mut state, &mut rng) {
                RoundStart::Started(_) => continue,
                RoundStart::MatchOver(result) => break result,
            }
        }

        match state.current_turn {
            FighterId::Player => {
                let actions = engine.legal_actions(&state, FighterId::Player);
                let action = &actions[player_rng.next_below(actions.len())];
                engine.apply(&mut state, FighterId::Player, action, &mut rng)?;
            }
            FighterId::Opponent => {
                engine.ai_turn(&mut state, &mut rng)?;
            }
        }
        turns += 1;
    };

    Ok(MatchSummary {
        index,
        seed,
        result,
        rounds: state.round,
        player_wins: state.player.wins,
        opponent_wins: state.opponent.wins,
        turns,
    })
}
