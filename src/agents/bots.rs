use crate::cards::Card;
use crate::player::Player;
use rand::seq::IndexedRandom;
use rand::{rngs::StdRng, Rng, RngCore, SeedableRng};
use std::cmp::Reverse;
use std::fmt;
use std::str::FromStr;

use super::{AgentError, AgentKind, DrawSource, PlayerAgent};

/// Configuration for a bot's calling policy and randomness.
#[derive(Debug, Clone)]
#[non_exhaustive]
pub struct BotProfile {
    /// Call once the bot's own hand scores at or below this.
    pub call_threshold: u32,
    /// Chance of taking the visible pile card instead of drawing blind.
    pub pile_chance: f64,
    pub rng_seed: Option<u64>,
}

impl BotProfile {
    pub fn new(call_threshold: u32, pile_chance: f64) -> Self {
        Self { call_threshold, pile_chance, rng_seed: None }
    }

    /// Set a deterministic RNG seed for reproducible decisions.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng_seed = Some(seed);
        self
    }

    pub fn with_call_threshold(mut self, threshold: u32) -> Self {
        self.call_threshold = threshold;
        self
    }

    pub fn with_pile_chance(mut self, chance: f64) -> Self {
        self.pile_chance = chance;
        self
    }
}

impl Default for BotProfile {
    fn default() -> Self {
        Self::new(7, 0.5)
    }
}

#[derive(Debug)]
struct BotState {
    rng: StdRng,
}

impl BotState {
    fn new(seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(v) => StdRng::seed_from_u64(v),
            None => {
                let mut seed = [0u8; 32];
                rand::rng().fill_bytes(&mut seed);
                StdRng::from_seed(seed)
            }
        };
        Self { rng }
    }
}

/// Plays a random card, draws from the pile on a coin flip, and calls on a low hand.
#[derive(Debug)]
pub struct RandomBot {
    profile: BotProfile,
    state: BotState,
}

impl RandomBot {
    pub fn new(profile: BotProfile) -> Self {
        let state = BotState::new(profile.rng_seed);
        Self { profile, state }
    }

    pub fn profile(&self) -> &BotProfile {
        &self.profile
    }
}

impl PlayerAgent for RandomBot {
    fn kind(&self) -> AgentKind {
        AgentKind::Bot
    }

    fn call(&mut self, seat: usize, players: &[Player]) -> Result<bool, AgentError> {
        let score = players.get(seat).map(Player::round_score);
        Ok(matches!(score, Some(s) if s <= self.profile.call_threshold))
    }

    fn choose_cards_to_play(&mut self, hand: &[Card]) -> Result<Vec<Card>, AgentError> {
        Ok(hand.choose(&mut self.state.rng).copied().into_iter().collect())
    }

    fn choose_draw(
        &mut self,
        _hand: &[Card],
        pile_top: Option<Card>,
    ) -> Result<DrawSource, AgentError> {
        let chance = self.profile.pile_chance.clamp(0.0, 1.0);
        if pile_top.is_some() && self.state.rng.random_bool(chance) {
            return Ok(DrawSource::Pile);
        }
        Ok(DrawSource::Deck)
    }
}

/// Dumps its highest-scoring card every turn; otherwise behaves like [`RandomBot`].
#[derive(Debug)]
pub struct GreedyBot {
    inner: RandomBot,
}

impl GreedyBot {
    pub fn new(profile: BotProfile) -> Self {
        Self { inner: RandomBot::new(profile) }
    }

    pub fn profile(&self) -> &BotProfile {
        self.inner.profile()
    }
}

impl PlayerAgent for GreedyBot {
    fn kind(&self) -> AgentKind {
        AgentKind::Bot
    }

    fn call(&mut self, seat: usize, players: &[Player]) -> Result<bool, AgentError> {
        self.inner.call(seat, players)
    }

    fn choose_cards_to_play(&mut self, hand: &[Card]) -> Result<Vec<Card>, AgentError> {
        // ties go to the card earliest in catalog order
        let top = hand.iter().copied().max_by_key(|c| (c.score(), Reverse(c.index())));
        Ok(top.into_iter().collect())
    }

    fn choose_draw(
        &mut self,
        hand: &[Card],
        pile_top: Option<Card>,
    ) -> Result<DrawSource, AgentError> {
        self.inner.choose_draw(hand, pile_top)
    }
}

/// Built-in bot strategies, selectable by name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum BotStyle {
    Random,
    Greedy,
}

impl BotStyle {
    pub fn build(self, profile: BotProfile) -> Box<dyn PlayerAgent> {
        match self {
            BotStyle::Random => Box::new(RandomBot::new(profile)),
            BotStyle::Greedy => Box::new(GreedyBot::new(profile)),
        }
    }
}

impl fmt::Display for BotStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BotStyle::Random => write!(f, "random"),
            BotStyle::Greedy => write!(f, "greedy"),
        }
    }
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum BotStyleParseError {
    #[error("unknown bot style: '{0}' (expected random or greedy)")]
    Unknown(String),
}

impl FromStr for BotStyle {
    type Err = BotStyleParseError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "random" => Ok(BotStyle::Random),
            "greedy" | "max" | "max-card-down" => Ok(BotStyle::Greedy),
            _ => Err(BotStyleParseError::Unknown(s.to_string())),
        }
    }
}
