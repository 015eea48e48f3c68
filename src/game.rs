use crate::agents::{AgentTable, PlayerAgent};
use crate::player::Player;
use crate::round::{Round, RoundError, RoundOutcome};
use crate::rules::Rules;
use crate::scoring::{tally_scores, Tally};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// A player's position on the leaderboard.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub struct Standing {
    pub seat: usize,
    pub name: String,
    pub total_score: u32,
}

/// Final standings of a match, captured before the table is reset.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub struct MatchOutcome {
    pub winner: Standing,
    /// Every player, lowest total first.
    pub standings: Vec<Standing>,
    pub rounds: usize,
}

/// A table of players that plays rounds until someone's total passes the target.
#[derive(Debug)]
#[non_exhaustive]
pub struct Game {
    pub(crate) players: Vec<Player>,
    pub(crate) agents: AgentTable,
    pub(crate) rules: Rules,
    rng: ChaCha8Rng,
}

impl Game {
    pub fn new(rules: Rules) -> Self {
        let seed: u64 = rand::rng().random();
        Self::with_seed(rules, seed)
    }

    /// A game whose deck shuffles are reproducible. Bot decisions are seeded separately
    /// through their profiles.
    pub fn with_seed(rules: Rules, seed: u64) -> Self {
        Self {
            players: Vec::new(),
            agents: AgentTable::new(),
            rules,
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Seat a player after the existing ones; returns the seat index.
    pub fn add_player(&mut self, name: impl Into<String>, agent: Box<dyn PlayerAgent>) -> usize {
        self.players.push(Player::new(name));
        self.agents.push(agent)
    }

    /// Returns the players in seat order
    pub fn players(&self) -> &[Player] {
        &self.players
    }

    pub fn player_mut(&mut self, seat: usize) -> Option<&mut Player> {
        self.players.get_mut(seat)
    }

    /// Seat of the first player with this name.
    pub fn seat_of(&self, name: &str) -> Option<usize> {
        self.players.iter().position(|p| p.name() == name)
    }

    pub fn rules(&self) -> &Rules {
        &self.rules
    }

    pub fn agents(&self) -> &AgentTable {
        &self.agents
    }

    /// True once any player's total is past the target.
    pub fn is_finished(&self) -> bool {
        self.players.iter().any(|p| p.total_score() > self.rules.target_score)
    }

    /// Players ordered by total, lowest (best) first. Ties keep seat order.
    pub fn leaders(&self) -> Vec<&Player> {
        let mut sorted: Vec<&Player> = self.players.iter().collect();
        sorted.sort_by_key(|p| p.total_score());
        sorted
    }

    fn standings(&self) -> Vec<Standing> {
        let mut seats: Vec<usize> = (0..self.players.len()).collect();
        seats.sort_by_key(|&s| self.players[s].total_score());
        seats
            .into_iter()
            .map(|seat| Standing {
                seat,
                name: self.players[seat].name().to_string(),
                total_score: self.players[seat].total_score(),
            })
            .collect()
    }

    /// Score a call decided outside the engine, e.g. by someone at the table saying so.
    pub fn tally_scores(&mut self, caller: usize) -> Result<Tally, RoundError> {
        tally_scores(&mut self.players, caller, &self.rules)
    }

    /// Deal a new round on this table.
    pub fn new_round(&mut self) -> Result<Round<'_>, RoundError> {
        let seed: u64 = self.rng.random();
        Round::new(&mut self.players, &mut self.agents, self.rules, seed)
    }

    /// Play a single round to its call.
    pub fn play_round(&mut self) -> Result<RoundOutcome, RoundError> {
        self.new_round()?.run()
    }

    /// Play rounds until the match is over and report the standings.
    ///
    /// Hands and totals are wiped on the way out whether the match finished, failed, or
    /// unwound, so the same table can immediately start another match.
    pub fn run(&mut self) -> Result<MatchOutcome, RoundError> {
        let table = ResetOnExit(self);
        table.0.play_to_finish()
    }

    fn play_to_finish(&mut self) -> Result<MatchOutcome, RoundError> {
        let mut rounds = 0;
        while !self.is_finished() {
            rounds += 1;
            let outcome = self.play_round()?;
            log::debug!(
                "round {rounds}: {} called, {} held the lowest hand",
                self.players[outcome.caller].name(),
                self.players[outcome.lowest].name()
            );
        }
        let standings = self.standings();
        let winner = standings.first().cloned().ok_or(RoundError::NoPlayers)?;
        log::info!("{} wins on {} after {rounds} rounds", winner.name, winner.total_score);
        Ok(MatchOutcome { winner, standings, rounds })
    }

    /// Clear every hand and total.
    pub fn reset(&mut self) {
        for p in &mut self.players {
            p.reset();
        }
    }
}

struct ResetOnExit<'a>(&'a mut Game);

impl Drop for ResetOnExit<'_> {
    fn drop(&mut self) {
        self.0.reset();
    }
}
