use crate::agents::{AgentError, AgentTable, DrawSource, PlayerAgent};
use crate::cards::Card;
use crate::deck::{Deck, DeckError, Pile};
use crate::player::Player;
use crate::rules::Rules;
use crate::scoring::{tally_scores, Tally};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum RoundState {
    Dealing,
    InProgress,
    Called,
}

/// Result of one pass around the table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RoundStatus {
    /// Nobody called; go around again.
    Continue,
    /// A player called and the round has been scored.
    Called(Tally),
}

#[derive(thiserror::Error, Debug)]
#[non_exhaustive]
pub enum RoundError {
    #[error("a round needs at least one player")]
    NoPlayers,
    #[error("{players} players cannot be dealt from this deck (max {max})")]
    TooManyPlayers { players: usize, max: usize },
    #[error("{players} players but {agents} seated agents")]
    SeatMismatch { players: usize, agents: usize },
    #[error("no player in seat {0}")]
    NoSuchSeat(usize),
    #[error("round already ended with a call")]
    AlreadyCalled,
    #[error("cannot recycle: deck holds {deck} cards, pile holds {pile}")]
    RecyclePrecondition { deck: usize, pile: usize },
    #[error("seat {seat} played no cards")]
    EmptyPlay { seat: usize },
    #[error("seat {seat} played {card}, which is not in their hand")]
    CardNotInHand { seat: usize, card: Card },
    #[error("seat {seat} took from an empty pile")]
    EmptyPile { seat: usize },
    #[error(transparent)]
    IllegalPlay(#[from] IllegalPlay),
    #[error(transparent)]
    Deck(#[from] DeckError),
    #[error(transparent)]
    Agent(#[from] AgentError),
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("illegal play: {0}")]
pub struct IllegalPlay(pub String);

/// Decides whether a set of discarded cards forms a legal play.
pub trait PlayValidator {
    fn validate(&self, played: &[Card]) -> Result<(), IllegalPlay>;
}

/// Accepts every play. Pair and same-suit run checks would slot in as another validator.
#[derive(Debug, Clone, Copy, Default)]
pub struct AnyPlay;

impl PlayValidator for AnyPlay {
    fn validate(&self, _played: &[Card]) -> Result<(), IllegalPlay> {
        Ok(())
    }
}

/// How a finished round went.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub struct RoundOutcome {
    pub caller: usize,
    pub tally: Tally,
    /// Seat holding the lowest hand when the round ended. Informational only; the tally
    /// is what moves the scores.
    pub lowest: usize,
    /// Passes around the table, including the one cut short by the call.
    pub cycles: usize,
}

/// One hand of ballbag, from the deal to the call.
///
/// The round owns the deck and the discard pile and borrows the table's players and
/// their agents for its lifetime. Cards only ever move between the deck, the pile and
/// the hands, so [`Round::card_count`] never changes.
pub struct Round<'a> {
    players: &'a mut [Player],
    agents: &'a mut AgentTable,
    deck: Deck,
    pile: Pile,
    rules: Rules,
    rng: ChaCha8Rng,
    validator: Box<dyn PlayValidator>,
    state: RoundState,
    cycles: usize,
    total_cards: usize,
}

impl std::fmt::Debug for Round<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Round")
            .field("state", &self.state)
            .field("deck", &self.deck.len())
            .field("pile", &self.pile.len())
            .field("players", &self.players.len())
            .field("cycles", &self.cycles)
            .finish()
    }
}

impl<'a> Round<'a> {
    /// Shuffle a fresh 54-card deck and deal.
    pub fn new(
        players: &'a mut [Player],
        agents: &'a mut AgentTable,
        rules: Rules,
        seed: u64,
    ) -> Result<Self, RoundError> {
        Self::with_deck(players, agents, Deck::standard(), rules, seed)
    }

    /// Shuffle `deck` and deal from it.
    pub fn with_deck(
        players: &'a mut [Player],
        agents: &'a mut AgentTable,
        deck: Deck,
        rules: Rules,
        seed: u64,
    ) -> Result<Self, RoundError> {
        if players.is_empty() {
            return Err(RoundError::NoPlayers);
        }
        if players.len() != agents.len() {
            return Err(RoundError::SeatMismatch { players: players.len(), agents: agents.len() });
        }
        // every hand, the pile's seed card, and one more so a recycle always leaves a draw
        let needed = players.len() * rules.hand_size + 2;
        if needed > deck.len() {
            let max = deck.len().saturating_sub(2) / rules.hand_size.max(1);
            return Err(RoundError::TooManyPlayers { players: players.len(), max });
        }

        let mut round = Self {
            total_cards: deck.len(),
            players,
            agents,
            deck,
            pile: Pile::new(),
            rules,
            rng: ChaCha8Rng::seed_from_u64(seed),
            validator: Box::new(AnyPlay),
            state: RoundState::Dealing,
            cycles: 0,
        };
        round.deal()?;
        Ok(round)
    }

    /// Replace the play validator.
    pub fn with_validator(mut self, validator: impl PlayValidator + 'static) -> Self {
        self.validator = Box::new(validator);
        self
    }

    fn deal(&mut self) -> Result<(), RoundError> {
        self.deck.shuffle_with(&mut self.rng);
        for p in self.players.iter_mut() {
            p.reset_hand();
        }
        for _ in 0..self.rules.hand_size {
            for p in self.players.iter_mut() {
                p.deal(self.deck.draw()?);
            }
        }
        self.pile.push(self.deck.draw()?);
        self.state = RoundState::InProgress;
        log::debug!(
            "dealt {} cards to {} players, {} showing",
            self.rules.hand_size,
            self.players.len(),
            self.pile.top().map(|c| c.to_string()).unwrap_or_default()
        );
        Ok(())
    }

    pub fn state(&self) -> RoundState {
        self.state
    }

    pub fn players(&self) -> &[Player] {
        &*self.players
    }

    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    pub fn pile(&self) -> &Pile {
        &self.pile
    }

    pub fn rules(&self) -> &Rules {
        &self.rules
    }

    pub fn cycles(&self) -> usize {
        self.cycles
    }

    /// Cards across deck, pile and every hand.
    pub fn card_count(&self) -> usize {
        self.deck.len() + self.pile.len() + self.players.iter().map(|p| p.hand().len()).sum::<usize>()
    }

    /// Score a call by `caller` against the hands as they stand.
    pub fn tally_scores(&mut self, caller: usize) -> Result<Tally, RoundError> {
        tally_scores(self.players, caller, &self.rules)
    }

    /// Turn the pile, minus one card, into a fresh shuffled deck. Only legal when the deck
    /// has run out and the pile has something in it.
    pub fn recycle(&mut self) -> Result<(), RoundError> {
        if !self.deck.is_empty() || self.pile.is_empty() {
            return Err(RoundError::RecyclePrecondition {
                deck: self.deck.len(),
                pile: self.pile.len(),
            });
        }
        self.deck = Deck::from_cards(self.pile.drain_all());
        self.deck.shuffle_with(&mut self.rng);
        self.pile.push(self.deck.draw()?);
        log::debug!("recycled pile into a {}-card deck", self.deck.len());
        Ok(())
    }

    fn seat_agent(
        agents: &mut AgentTable,
        seat: usize,
    ) -> Result<&mut (dyn PlayerAgent + 'static), RoundError> {
        agents.agent_mut(seat).ok_or(RoundError::NoSuchSeat(seat))
    }

    /// Give every player one turn in seat order. Stops early if someone calls.
    pub fn game_round(&mut self) -> Result<RoundStatus, RoundError> {
        if self.state == RoundState::Called {
            return Err(RoundError::AlreadyCalled);
        }
        self.cycles += 1;
        for seat in 0..self.players.len() {
            if let Some(tally) = self.play_turn(seat)? {
                return Ok(RoundStatus::Called(tally));
            }
        }
        Ok(RoundStatus::Continue)
    }

    fn play_turn(&mut self, seat: usize) -> Result<Option<Tally>, RoundError> {
        let called = Self::seat_agent(self.agents, seat)?.call(seat, &*self.players)?;
        if called {
            let tally = self.tally_scores(seat)?;
            self.state = RoundState::Called;
            return Ok(Some(tally));
        }

        if self.deck.is_empty() {
            self.recycle()?;
        }

        let played =
            Self::seat_agent(self.agents, seat)?.choose_cards_to_play(self.players[seat].hand())?;
        let remaining = self.check_play(seat, &played)?;

        let source =
            Self::seat_agent(self.agents, seat)?.choose_draw(&remaining, self.pile.top())?;
        match source {
            DrawSource::Pile if self.pile.is_empty() => return Err(RoundError::EmptyPile { seat }),
            DrawSource::Deck if self.deck.is_empty() => return Err(DeckError::Empty.into()),
            _ => {}
        }

        // nothing below can fail, so the turn is applied whole or not at all
        for &card in &played {
            self.players[seat].discard(card);
        }
        let drawn = match source {
            DrawSource::Pile => self.pile.take_top().ok_or(RoundError::EmptyPile { seat })?,
            DrawSource::Deck => self.deck.draw()?,
        };
        self.players[seat].deal(drawn);
        self.pile.extend(played.iter().copied());

        log::debug!(
            "{} played {:?}, drew {drawn} from the {:?}",
            self.players[seat].name(),
            played.iter().map(Card::to_string).collect::<Vec<_>>(),
            source
        );
        debug_assert_eq!(self.card_count(), self.total_cards);
        Ok(None)
    }

    /// Check the whole selection against the hand and the validator. Returns the hand as
    /// it will be once the play is made; the player's cards are not touched.
    fn check_play(&self, seat: usize, played: &[Card]) -> Result<Vec<Card>, RoundError> {
        if played.is_empty() {
            return Err(RoundError::EmptyPlay { seat });
        }
        self.validator.validate(played)?;
        let mut held = self.players[seat].hand().to_vec();
        for &card in played {
            match held.iter().position(|c| *c == card) {
                Some(i) => {
                    held.swap_remove(i);
                }
                None => return Err(RoundError::CardNotInHand { seat, card }),
            }
        }
        Ok(held)
    }

    /// Play passes until someone calls.
    pub fn run(&mut self) -> Result<RoundOutcome, RoundError> {
        let tally = loop {
            if let RoundStatus::Called(tally) = self.game_round()? {
                break tally;
            }
        };
        let lowest = self
            .players
            .iter()
            .enumerate()
            .min_by_key(|(_, p)| p.round_score())
            .map(|(seat, _)| seat)
            .unwrap_or(tally.caller);
        Ok(RoundOutcome { caller: tally.caller, tally, lowest, cycles: self.cycles })
    }
}
