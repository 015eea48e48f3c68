use crate::cards::{hand_score, Card};
use std::fmt;

/// Per-seat game state: who the player is, what they hold, and their running total.
///
/// Decisions are made by the seat's [`PlayerAgent`](crate::agents::PlayerAgent); this type
/// only carries the state those decisions read and the round mutates.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub struct Player {
    pub(crate) name: String,
    pub(crate) hand: Vec<Card>,
    pub(crate) total_score: u32,
}

impl Player {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into(), hand: Vec::new(), total_score: 0 }
    }

    /// Returns the player's name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the cards currently held
    pub fn hand(&self) -> &[Card] {
        &self.hand
    }

    /// Sum of the current hand's card scores. Lower is better.
    pub fn round_score(&self) -> u32 {
        hand_score(&self.hand)
    }

    /// Running total across rounds of the current match.
    pub fn total_score(&self) -> u32 {
        self.total_score
    }

    pub fn deal(&mut self, card: Card) {
        self.hand.push(card);
    }

    /// Remove one copy of `card` from the hand. Returns `false` if it was not held.
    pub fn discard(&mut self, card: Card) -> bool {
        match self.hand.iter().position(|c| *c == card) {
            Some(i) => {
                self.hand.swap_remove(i);
                true
            }
            None => false,
        }
    }

    pub fn reset_hand(&mut self) {
        self.hand.clear();
    }

    /// Replace the hand wholesale, e.g. with cards typed in after a live round.
    pub fn set_hand(&mut self, cards: Vec<Card>) {
        self.hand = cards;
    }

    /// Clear hand and total for a fresh match.
    pub fn reset(&mut self) {
        self.hand.clear();
        self.total_score = 0;
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Player(name={}, current_score={}, total_score={})",
            self.name,
            self.round_score(),
            self.total_score
        )
    }
}
