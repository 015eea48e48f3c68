//! Agents: pluggable decision makers (bots, humans at a prompt, test scripts).
//!
//! The round never looks inside an agent. It asks the seat's agent whether to call, what to
//! play and where to draw from, then performs the resulting moves itself. `AgentTable` keeps
//! one agent per seat alongside the table's [`Player`] state.

use crate::cards::Card;
use crate::player::Player;
use crate::prompt::PromptError;
use core::fmt;

/// Kinds of agents attached to seats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum AgentKind {
    Human,
    Bot,
}

/// Where a player takes their replacement card from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DrawSource {
    /// Top of the face-down deck.
    Deck,
    /// The visible top of the discard pile.
    Pile,
}

#[derive(thiserror::Error, Debug)]
#[non_exhaustive]
pub enum AgentError {
    #[error(transparent)]
    Prompt(#[from] PromptError),
    #[error("this seat plays away from the engine and cannot be asked for moves")]
    Offline,
}

/// A seat controller that makes the decisions of one player.
pub trait PlayerAgent {
    /// The kind of this agent (human, bot, etc.).
    fn kind(&self) -> AgentKind {
        AgentKind::Human
    }

    /// Asked at the start of each turn: end the round now and score it?
    fn call(&mut self, seat: usize, players: &[Player]) -> Result<bool, AgentError>;

    /// Pick one or more cards from `hand` to discard this turn.
    fn choose_cards_to_play(&mut self, hand: &[Card]) -> Result<Vec<Card>, AgentError>;

    /// Pick where to draw from after discarding. `pile_top` is the only visible pile card.
    fn choose_draw(
        &mut self,
        hand: &[Card],
        pile_top: Option<Card>,
    ) -> Result<DrawSource, AgentError>;
}

mod bots;
mod human;

pub use bots::{BotProfile, BotStyle, BotStyleParseError, GreedyBot, RandomBot};
pub use human::{HumanAgent, TableSeat};

/// One agent per seat, in turn order.
#[derive(Default)]
pub struct AgentTable {
    seats: Vec<Box<dyn PlayerAgent>>,
}

impl fmt::Debug for AgentTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let flags: String = self
            .seats
            .iter()
            .map(|a| match a.kind() {
                AgentKind::Bot => 'B',
                AgentKind::Human => 'H',
            })
            .collect();
        write!(f, "AgentTable({flags})")
    }
}

impl AgentTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seat a new agent after the existing ones; returns its seat index.
    pub fn push(&mut self, agent: Box<dyn PlayerAgent>) -> usize {
        self.seats.push(agent);
        self.seats.len() - 1
    }

    pub fn len(&self) -> usize {
        self.seats.len()
    }

    pub fn is_empty(&self) -> bool {
        self.seats.is_empty()
    }

    /// Get immutable access to an agent for inspection.
    pub fn agent(&self, seat: usize) -> Option<&(dyn PlayerAgent + 'static)> {
        self.seats.get(seat).map(|a| a.as_ref())
    }

    pub fn agent_mut(&mut self, seat: usize) -> Option<&mut (dyn PlayerAgent + 'static)> {
        self.seats.get_mut(seat).map(|a| a.as_mut())
    }

    /// Return the kind of agent at a seat, if any.
    pub fn agent_kind(&self, seat: usize) -> Option<AgentKind> {
        self.agent(seat).map(|a| a.kind())
    }

    /// Whether any human agents are seated.
    pub fn any_humans(&self) -> bool {
        self.seats.iter().any(|a| matches!(a.kind(), AgentKind::Human))
    }
}
