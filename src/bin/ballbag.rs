use ballbag::agents::{BotProfile, BotStyle};
use ballbag::game::Game;
use ballbag::round::RoundError;
use ballbag::rules::Rules;
use clap::Parser;
use rand::Rng;

/// Simulate Ballbag matches between bots and report who wins.
#[derive(Parser, Debug)]
#[command(name = "ballbag", version, about)]
struct Args {
    /// Number of matches to play.
    #[arg(short, long, default_value_t = 1)]
    matches: usize,

    /// Bot style for each seat, in turn order (random, greedy).
    #[arg(
        short,
        long,
        value_delimiter = ',',
        default_values_t = [BotStyle::Random, BotStyle::Random, BotStyle::Greedy]
    )]
    players: Vec<BotStyle>,

    /// Seed for reproducible shuffles and bot decisions.
    #[arg(short, long)]
    seed: Option<u64>,

    /// A match ends once a total passes this.
    #[arg(long, default_value_t = 100)]
    target: u32,

    /// Bots call at or below this hand score.
    #[arg(long, default_value_t = 7)]
    call_threshold: u32,
}

fn main() -> Result<(), RoundError> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let args = Args::parse();

    let seed = args.seed.unwrap_or_else(|| rand::rng().random());
    let rules = Rules::default().with_target_score(args.target);
    let mut game = Game::with_seed(rules, seed);
    for (seat, style) in args.players.iter().enumerate() {
        let profile = BotProfile::default()
            .with_call_threshold(args.call_threshold)
            .with_seed(seed.wrapping_add(seat as u64 + 1));
        game.add_player(format!("{}-{style}", seat + 1), style.build(profile));
    }

    let mut wins = vec![0usize; args.players.len()];
    let mut rounds = 0usize;
    for _ in 0..args.matches {
        let outcome = game.run()?;
        wins[outcome.winner.seat] += 1;
        rounds += outcome.rounds;
    }

    println!("{} matches, {} rounds (seed {seed})", args.matches, rounds);
    for (seat, player) in game.players().iter().enumerate() {
        let share = if args.matches == 0 { 0.0 } else { wins[seat] as f64 / args.matches as f64 };
        println!("\t{}. {:<12} {:>6} wins ({:.1}%)", seat + 1, player.name(), wins[seat], share * 100.0);
    }
    Ok(())
}
