use crate::cards::{hand_score, parse_cards, Card};
use crate::player::Player;
use crate::prompt::Prompter;
use std::io::{BufRead, Write};

use super::{AgentError, AgentKind, DrawSource, PlayerAgent};

/// A person at a terminal, answering each decision through a [`Prompter`].
#[derive(Debug)]
pub struct HumanAgent<R, W> {
    prompter: Prompter<R, W>,
}

impl<R: BufRead, W: Write> HumanAgent<R, W> {
    pub fn new(prompter: Prompter<R, W>) -> Self {
        Self { prompter }
    }

    pub fn into_prompter(self) -> Prompter<R, W> {
        self.prompter
    }
}

/// A person playing at a physical table. The engine never sees their moves, only the
/// hands and calls entered afterwards, so asking this seat for a decision is an error.
#[derive(Debug, Clone, Copy, Default)]
pub struct TableSeat;

impl PlayerAgent for TableSeat {
    fn call(&mut self, _seat: usize, _players: &[Player]) -> Result<bool, AgentError> {
        Err(AgentError::Offline)
    }

    fn choose_cards_to_play(&mut self, _hand: &[Card]) -> Result<Vec<Card>, AgentError> {
        Err(AgentError::Offline)
    }

    fn choose_draw(&mut self, _: &[Card], _: Option<Card>) -> Result<DrawSource, AgentError> {
        Err(AgentError::Offline)
    }
}

fn format_hand(hand: &[Card]) -> String {
    hand.iter().map(Card::to_string).collect::<Vec<_>>().join(" ")
}

/// Accept a selection only if every card is held, each at most once.
fn pick_from_hand(hand: &[Card], answer: &str) -> Result<Vec<Card>, String> {
    let picked = parse_cards(answer).map_err(|e| e.to_string())?;
    if picked.is_empty() {
        return Err("Play at least one card".to_string());
    }
    let mut remaining = hand.to_vec();
    for card in &picked {
        match remaining.iter().position(|c| c == card) {
            Some(i) => {
                remaining.swap_remove(i);
            }
            None => return Err(format!("You are not holding {card}")),
        }
    }
    Ok(picked)
}

impl<R: BufRead, W: Write> PlayerAgent for HumanAgent<R, W> {
    fn kind(&self) -> AgentKind {
        AgentKind::Human
    }

    fn call(&mut self, seat: usize, players: &[Player]) -> Result<bool, AgentError> {
        let Some(me) = players.get(seat) else {
            return Ok(false);
        };
        self.prompter.say(format!(
            "{}: your hand is {} ({} points)",
            me.name(),
            format_hand(me.hand()),
            me.round_score()
        ))?;
        Ok(self.prompter.confirm("Call ballbag? [y/N] ", false)?)
    }

    fn choose_cards_to_play(&mut self, hand: &[Card]) -> Result<Vec<Card>, AgentError> {
        let prompt = format!("Play which card(s) from [{}]? ", format_hand(hand));
        Ok(self.prompter.ask(&prompt, |s| pick_from_hand(hand, s))?)
    }

    fn choose_draw(
        &mut self,
        hand: &[Card],
        pile_top: Option<Card>,
    ) -> Result<DrawSource, AgentError> {
        let Some(top) = pile_top else {
            return Ok(DrawSource::Deck);
        };
        let prompt = format!(
            "Holding {} ({} points). Draw from [d]eck or take {top} from the [p]ile? ",
            format_hand(hand),
            hand_score(hand)
        );
        Ok(self.prompter.ask(&prompt, |s| match s.to_ascii_lowercase().as_str() {
            "d" | "deck" | "" => Ok(DrawSource::Deck),
            "p" | "pile" => Ok(DrawSource::Pile),
            other => Err(format!("Don't recognise '{other}', answer d or p")),
        })?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{Rank, Suit};
    use std::io::Cursor;

    fn human(input: &str) -> HumanAgent<Cursor<Vec<u8>>, Vec<u8>> {
        HumanAgent::new(Prompter::new(Cursor::new(input.as_bytes().to_vec()), Vec::new()))
    }

    #[test]
    fn call_reads_yes_no() {
        let mut p = Player::new("ann");
        p.set_hand(parse_cards("As 2s").unwrap());
        let mut h = human("y\nn\n");
        assert!(h.call(0, std::slice::from_ref(&p)).unwrap());
        assert!(!h.call(0, std::slice::from_ref(&p)).unwrap());
    }

    #[test]
    fn play_rejects_cards_not_in_hand() {
        let hand = parse_cards("As 7d Kc").unwrap();
        let mut h = human("Qs\nAs As\n\n7d kc\n");
        let played = h.choose_cards_to_play(&hand).unwrap();
        assert_eq!(
            played,
            vec![Card::new(Rank::Seven, Suit::Diamonds), Card::new(Rank::King, Suit::Clubs)]
        );
        let out = String::from_utf8(h.into_prompter().into_output()).unwrap();
        assert!(out.contains("not holding Qs"));
        assert!(out.contains("not holding As"));
        assert!(out.contains("at least one card"));
    }

    #[test]
    fn draw_choice_skips_prompt_without_pile() {
        let mut h = human("");
        assert_eq!(h.choose_draw(&[], None).unwrap(), DrawSource::Deck);
        let mut h = human("x\np\n");
        let top = Some(Card::new(Rank::Two, Suit::Hearts));
        assert_eq!(h.choose_draw(&[], top).unwrap(), DrawSource::Pile);
    }

    #[test]
    fn closed_input_is_an_error() {
        let mut h = human("");
        assert!(h.choose_cards_to_play(&parse_cards("As").unwrap()).is_err());
    }
}
