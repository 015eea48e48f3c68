use ballbag::cards::{catalog, Card};
use ballbag::deck::{Deck, DeckError};
use proptest::prelude::*;

fn sorted(cards: &[Card]) -> Vec<Card> {
    let mut out = cards.to_vec();
    out.sort();
    out
}

#[test]
fn fresh_decks_are_identical() {
    let a = Deck::standard();
    let b = Deck::standard();
    assert_eq!(a.len(), 54);
    assert_eq!(a, b);
}

#[test]
fn fifty_fifth_draw_fails() {
    let mut deck = Deck::standard();
    let drawn: Vec<Card> = (0..54).map(|_| deck.draw().unwrap()).collect();
    assert_eq!(drawn, catalog().collect::<Vec<_>>());
    assert_eq!(deck.draw(), Err(DeckError::Empty));
}

proptest! {
    #[test]
    fn shuffle_keeps_the_same_cards(seed in any::<u64>()) {
        let mut deck = Deck::standard();
        deck.shuffle_seeded(seed);
        prop_assert_eq!(deck.len(), 54);
        prop_assert_eq!(sorted(deck.cards()), sorted(Deck::standard().cards()));
    }

    #[test]
    fn shuffle_reorders_the_deck(seed in any::<u64>()) {
        // 54! orderings; a shuffle landing on the unshuffled one is not a realistic outcome
        let mut deck = Deck::standard();
        deck.shuffle_seeded(seed);
        prop_assert_ne!(deck, Deck::standard());
    }

    #[test]
    fn partial_decks_draw_in_reverse(n in 0usize..=54) {
        let cards: Vec<Card> = catalog().take(n).collect();
        let mut deck = Deck::from_cards(cards.clone());
        let mut drawn = Vec::new();
        while let Ok(c) = deck.draw() {
            drawn.push(c);
        }
        drawn.reverse();
        prop_assert_eq!(drawn, cards);
    }
}
