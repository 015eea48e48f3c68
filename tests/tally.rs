use ballbag::agents::{BotProfile, RandomBot};
use ballbag::cards::{Card, Rank, Suit};
use ballbag::game::Game;
use ballbag::player::Player;
use ballbag::rules::Rules;
use ballbag::scoring::tally_scores;
use proptest::prelude::*;

fn with_hands(hands: &[&[Card]]) -> Vec<Player> {
    hands
        .iter()
        .enumerate()
        .map(|(i, h)| {
            let mut p = Player::new(format!("{}", i + 1));
            p.set_hand(h.to_vec());
            p
        })
        .collect()
}

#[test]
fn equal_hands_make_the_call_fail() {
    let mut players = with_hands(&[
        &[Card::new(Rank::Queen, Suit::Diamonds)],
        &[Card::new(Rank::Queen, Suit::Spades)],
    ]);
    let tally = tally_scores(&mut players, 1, &Rules::default()).unwrap();
    assert!(!tally.successful);
    assert_eq!(players[0].total_score(), 10);
    assert_eq!(players[1].total_score(), 30);
}

#[test]
fn strictly_lowest_hand_calls_for_free() {
    let mut players = with_hands(&[
        &[Card::new(Rank::Seven, Suit::Spades)],
        &[Card::new(Rank::Queen, Suit::Spades)],
    ]);
    let tally = tally_scores(&mut players, 0, &Rules::default()).unwrap();
    assert!(tally.successful);
    assert_eq!(players[0].total_score(), 0);
    assert_eq!(players[1].total_score(), 10);
}

#[test]
fn landing_on_25_drops_to_zero() {
    let mut game = Game::with_seed(Rules::default(), 0);
    game.add_player("a", Box::new(RandomBot::new(BotProfile::default())));
    game.add_player("b", Box::new(RandomBot::new(BotProfile::default())));
    game.player_mut(0).unwrap().set_hand(vec![Card::new(Rank::Ace, Suit::Clubs)]);
    game.player_mut(1).unwrap().set_hand(vec![Card::new(Rank::Ten, Suit::Hearts)]);

    // b: 0 -> 10 -> 15 -> 25, which wraps
    game.tally_scores(0).unwrap();
    game.player_mut(1).unwrap().set_hand(vec![Card::new(Rank::Five, Suit::Hearts)]);
    game.tally_scores(0).unwrap();
    assert_eq!(game.players()[1].total_score(), 15);

    game.player_mut(1).unwrap().set_hand(vec![Card::new(Rank::Ten, Suit::Hearts)]);
    game.tally_scores(0).unwrap();
    assert_eq!(game.players()[1].total_score(), 0, "15 + 10 = 25 wraps to 0");
}

#[test]
fn wrap_only_drops_one_milestone() {
    let mut players = with_hands(&[&[], &[]]);
    // 34 -> 53 -> 75, which drops to 50 and stays there
    for (hand, total) in [("10s Jd Qh 4s", 34), ("10s 9h", 53), ("10s Jd 2h", 50)] {
        players[1].set_hand(ballbag::cards::parse_cards(hand).unwrap());
        tally_scores(&mut players, 0, &Rules::default()).unwrap();
        assert_eq!(players[1].total_score(), total);
    }
}

fn catalog_card(i: usize) -> Card {
    ballbag::cards::catalog().nth(i % 54).unwrap_or(Card::new(Rank::Ace, Suit::Spades))
}

proptest! {
    #[test]
    fn non_caller_totals_drop_one_milestone_when_they_land_on_one(
        hands in prop::collection::vec(prop::collection::vec(0usize..54, 1..=5), 1..20),
    ) {
        let mut players = with_hands(&[&[], &[]]);
        for hand in hands {
            let cards: Vec<Card> = hand.into_iter().map(catalog_card).collect();
            let before = players[1].total_score();
            players[1].set_hand(cards);
            let landed = before + players[1].round_score();
            let tally = tally_scores(&mut players, 0, &Rules::default()).unwrap();
            let after = players[1].total_score();
            prop_assert_eq!(i64::from(after) - i64::from(before), tally.deltas[1]);
            let expected = if landed > 0 && landed % 25 == 0 { landed - 25 } else { landed };
            prop_assert_eq!(after, expected);
        }
    }

    #[test]
    fn caller_pays_only_when_someone_is_as_low(a in 0usize..54, b in 0usize..54) {
        let (ca, cb) = (catalog_card(a), catalog_card(b));
        let mut players = with_hands(&[&[ca], &[cb]]);
        let tally = tally_scores(&mut players, 0, &Rules::default()).unwrap();
        prop_assert_eq!(tally.successful, cb.score() > ca.score());
        let expected = if tally.successful { 0 } else { 30 };
        prop_assert_eq!(players[0].total_score(), expected);
    }
}
