use crate::cards::{catalog, Card, CATALOG_SIZE};
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum DeckError {
    #[error("cannot draw from an empty deck")]
    Empty,
}

/// An ordered draw stack. The top of the deck is the end of the vector.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// A fresh, unshuffled 54-card deck. Draws come out in catalog order.
    ///
    /// ```
    /// use ballbag::deck::Deck;
    ///
    /// let deck = Deck::standard();
    /// assert_eq!(deck.len(), 54);
    /// assert_eq!(deck, Deck::standard());
    /// ```
    pub fn standard() -> Self {
        let mut cards = Vec::with_capacity(CATALOG_SIZE);
        cards.extend(catalog());
        cards.reverse();
        Self { cards }
    }

    /// A deck holding exactly `cards`, last element on top.
    pub fn from_cards(cards: Vec<Card>) -> Self {
        Self { cards }
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Remaining cards, bottom first.
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Shuffle with the thread-local RNG.
    pub fn shuffle(&mut self) {
        self.cards.shuffle(&mut rand::rng());
    }

    /// Shuffle using a seeded RNG for reproducibility.
    pub fn shuffle_seeded(&mut self, seed: u64) {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        self.cards.shuffle(&mut rng);
    }

    /// Shuffle using the provided RNG implementing Rng.
    pub fn shuffle_with<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.cards.shuffle(rng);
    }

    /// Draw one card from the top of the deck.
    pub fn draw(&mut self) -> Result<Card, DeckError> {
        self.cards.pop().ok_or(DeckError::Empty)
    }
}

impl Default for Deck {
    fn default() -> Self {
        Self::standard()
    }
}

impl From<Vec<Card>> for Deck {
    fn from(cards: Vec<Card>) -> Self {
        Self::from_cards(cards)
    }
}

/// The shared discard stack. Only the top card (last pushed) is visible.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Pile {
    cards: Vec<Card>,
}

impl Pile {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// The visible card, if any.
    pub fn top(&self) -> Option<Card> {
        self.cards.last().copied()
    }

    /// Pile contents, bottom first.
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn push(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// Lay played cards on the pile in play order; the last one becomes the top.
    pub fn extend<I: IntoIterator<Item = Card>>(&mut self, cards: I) {
        self.cards.extend(cards);
    }

    /// Take the visible card off the pile.
    pub fn take_top(&mut self) -> Option<Card> {
        self.cards.pop()
    }

    /// Empty the pile, returning everything that was on it, bottom first.
    pub fn drain_all(&mut self) -> Vec<Card> {
        std::mem::take(&mut self.cards)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{Joker, Rank, Suit};

    #[test]
    fn standard_deck_has_54_cards() {
        let d = Deck::standard();
        assert_eq!(d.len(), 54);
        assert!(!d.is_empty());
    }

    #[test]
    fn standard_deck_draws_in_catalog_order() {
        let mut d = Deck::standard();
        assert_eq!(d.draw().unwrap(), Card::new(Rank::Ace, Suit::Diamonds));
        assert_eq!(d.draw().unwrap(), Card::new(Rank::Two, Suit::Diamonds));
        let rest: Vec<Card> = (0..52).map(|_| d.draw().unwrap()).collect();
        assert_eq!(rest.last().copied(), Some(Card::Joker(Joker::Two)));
    }

    #[test]
    fn drawing_past_the_end_fails() {
        let mut d = Deck::standard();
        for _ in 0..54 {
            assert!(d.draw().is_ok());
        }
        assert!(d.is_empty());
        assert_eq!(d.draw(), Err(DeckError::Empty));
    }

    #[test]
    fn seeded_shuffle_is_reproducible() {
        let mut d1 = Deck::standard();
        let mut d2 = Deck::standard();
        d1.shuffle_seeded(42);
        d2.shuffle_seeded(42);
        assert_eq!(d1, d2);
        assert_ne!(d1, Deck::standard());
    }

    #[test]
    fn unseeded_shuffle_keeps_every_card() {
        let mut d = Deck::standard();
        d.shuffle();
        assert_eq!(d.len(), 54);
        let mut cards = d.cards().to_vec();
        cards.sort();
        assert_eq!(cards, catalog().collect::<Vec<_>>());
    }

    #[test]
    fn from_cards_draws_from_the_tail() {
        let a = Card::new(Rank::Two, Suit::Clubs);
        let b = Card::new(Rank::Nine, Suit::Hearts);
        let mut d = Deck::from(vec![a, b]);
        assert_eq!(d.draw(), Ok(b));
        assert_eq!(d.draw(), Ok(a));
        assert_eq!(d.draw(), Err(DeckError::Empty));
    }

    #[test]
    fn pile_top_tracks_last_push() {
        let mut p = Pile::new();
        assert_eq!(p.top(), None);
        let a = Card::new(Rank::Ace, Suit::Spades);
        let b = Card::Joker(Joker::One);
        p.push(a);
        p.extend([b]);
        assert_eq!(p.top(), Some(b));
        assert_eq!(p.take_top(), Some(b));
        assert_eq!(p.top(), Some(a));
        assert_eq!(p.drain_all(), vec![a]);
        assert!(p.is_empty());
    }
}
