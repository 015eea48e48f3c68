//! ballbag: round engine and scoring for the Ballbag card game
//!
//! Players hold five cards, discard and draw in turn, and may "call" at the start of a turn
//! to end the round. Low hands are good: a call only goes unpunished when the caller holds
//! strictly the lowest hand. A match runs rounds until someone passes 100 points.
//!
//! ## Quick start: a bot match
//! ```
//! use ballbag::agents::{BotProfile, GreedyBot, RandomBot};
//! use ballbag::game::Game;
//! use ballbag::rules::Rules;
//!
//! let mut game = Game::with_seed(Rules::default(), 7);
//! game.add_player("rand", Box::new(RandomBot::new(BotProfile::default().with_seed(1))));
//! game.add_player("greedy", Box::new(GreedyBot::new(BotProfile::default().with_seed(2))));
//!
//! let outcome = game.run().unwrap();
//! assert_eq!(outcome.standings.len(), 2);
//! // the table is wiped once the match is over
//! assert!(game.players().iter().all(|p| p.total_score() == 0));
//! ```
//!
//! ## Binaries
//! ```sh
//! cargo run --bin ballbag -- --matches 100 --players random,random,greedy
//! cargo run --bin ballbag-scorer
//! ```

pub mod agents;
pub mod cards;
pub mod deck;
pub mod engine;
pub mod game;
pub mod player;
pub mod prompt;
pub mod round;
pub mod rules;
pub mod scoring;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
