// Read-mostly match boundary for scoring front-ends. A CLI or other collaborator can show
// the leaderboard, check for the end of the match, and feed in calls it decided itself
// without reaching into `Game` internals.

use crate::player::Player;
use crate::round::RoundError;
use crate::scoring::Tally;

pub trait ScoreBoard {
    // Queries
    fn leaders(&self) -> Vec<&Player>;
    fn is_finished(&self) -> bool;
    fn num_players(&self) -> usize;

    // Externally-decided call
    fn tally_scores(&mut self, caller: usize) -> Result<Tally, RoundError>;
}

impl ScoreBoard for crate::game::Game {
    fn leaders(&self) -> Vec<&Player> {
        self.leaders()
    }
    fn is_finished(&self) -> bool {
        self.is_finished()
    }
    fn num_players(&self) -> usize {
        self.players().len()
    }

    fn tally_scores(&mut self, caller: usize) -> Result<Tally, RoundError> {
        self.tally_scores(caller)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::agents::{BotProfile, RandomBot};
    use crate::cards::parse_cards;
    use crate::game::Game;
    use crate::rules::Rules;

    fn board() -> Game {
        let mut g = Game::with_seed(Rules::default().with_target_score(20), 5);
        for name in ["ann", "bo"] {
            g.add_player(name, Box::new(RandomBot::new(BotProfile::default())));
        }
        g
    }

    fn drive(sb: &mut dyn ScoreBoard, caller: usize) -> Result<Tally, RoundError> {
        sb.tally_scores(caller)
    }

    #[test]
    fn scoreboard_drives_external_calls() {
        let mut g = board();
        g.player_mut(0).unwrap().set_hand(parse_cards("As").unwrap());
        g.player_mut(1).unwrap().set_hand(parse_cards("Kd Qd").unwrap());
        let t = drive(&mut g, 0).unwrap();
        assert!(t.successful);
        assert_eq!(ScoreBoard::num_players(&g), 2);
        assert!(!ScoreBoard::is_finished(&g), "20 does not pass a target of 20");

        drive(&mut g, 0).unwrap();
        assert!(ScoreBoard::is_finished(&g));
        let leaders = ScoreBoard::leaders(&g);
        assert_eq!(leaders[0].name(), "ann");
        assert_eq!(leaders[1].total_score(), 40);
    }
}
