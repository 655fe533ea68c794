//! Run seeded AI-versus-AI matches and print a summary.

use clap::{Parser, ValueEnum};

use chase_on::ai::AiConfig;
use chase_on::core::{LandingTieBreak, MovementConvention, PlayerId, RulesConfig, TriggerOrder};
use chase_on::sim::{PolicyKind, SelfPlayConfig, SelfPlayRunner};

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Convention {
    Same,
    Converging,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Opponent {
    Heuristic,
    Random,
}

#[derive(Parser)]
#[command(author, version, about = "Self-play for the spy pursuit card game", long_about = None)]
struct Args {
    /// Number of matches
    #[arg(short, long, default_value_t = 1000)]
    matches: usize,

    /// First seed; match i uses seed + i
    #[arg(short, long, default_value_t = 0)]
    seed: u64,

    /// Choice noise amplitude
    #[arg(long, default_value_t = 2.5)]
    noise: f64,

    /// Bluff probability
    #[arg(long, default_value_t = 0.25)]
    bluff: f64,

    /// Direction convention
    #[arg(long, value_enum, default_value_t = Convention::Same)]
    convention: Convention,

    /// Resolve simultaneous landings in favour of the active player
    #[arg(long)]
    active_wins_ties: bool,

    /// Check the passive seat's instant trigger first
    #[arg(long)]
    passive_first: bool,

    /// Policy for seat 1 (seat 0 is always heuristic)
    #[arg(long, value_enum, default_value_t = Opponent::Heuristic)]
    opponent: Opponent,

    /// Print every match
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let args = Args::parse();

    let level = if args.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();

    let rules = RulesConfig::default()
        .with_convention(match args.convention {
            Convention::Same => MovementConvention::SameRotation,
            Convention::Converging => MovementConvention::Converging,
        })
        .with_landing_tie_break(if args.active_wins_ties {
            LandingTieBreak::ActivePlayer
        } else {
            LandingTieBreak::LargerMove
        })
        .with_trigger_order(if args.passive_first {
            TriggerOrder::PassiveFirst
        } else {
            TriggerOrder::ActiveFirst
        });

    let config = SelfPlayConfig::new()
        .with_matches(args.matches)
        .with_seed_offset(args.seed)
        .with_rules(rules)
        .with_ai(AiConfig::default().with_noise(args.noise).with_bluff_chance(args.bluff))
        .with_seat(
            PlayerId::new(1),
            match args.opponent {
                Opponent::Heuristic => PolicyKind::Heuristic,
                Opponent::Random => PolicyKind::Random,
            },
        );

    let runner = match SelfPlayRunner::new(config) {
        Ok(runner) => runner,
        Err(err) => {
            log::error!("invalid rules: {}", err);
            std::process::exit(2);
        }
    };

    let (records, summary) = runner.run();

    if args.verbose {
        for record in &records {
            match &record.outcome {
                Some(outcome) => println!(
                    "seed {:>6}  first {}  {:>2} half-rounds  {}",
                    record.seed, record.first, record.half_rounds, outcome
                ),
                None => println!("seed {:>6}  unfinished", record.seed),
            }
        }
    }

    println!("matches        {}", summary.matches);
    for player in PlayerId::all() {
        println!(
            "{} wins {:>6} ({:.1}%)",
            player,
            summary.wins[player],
            summary.win_rate(player) * 100.0
        );
    }
    println!("first mover    {}", summary.first_player_wins);
    println!("mean length    {:.2} half-rounds (max {})", summary.mean_half_rounds(), summary.longest);
    for (reason, count) in summary.sorted_reasons() {
        println!("  {:<20} {}", reason, count);
    }
    if summary.unfinished > 0 {
        println!("unfinished     {}", summary.unfinished);
    }
}
