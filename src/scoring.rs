use crate::player::Player;
use crate::round::RoundError;
use crate::rules::Rules;

/// What a call did to the table's totals.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub struct Tally {
    pub caller: usize,
    /// The caller held strictly the lowest hand.
    pub successful: bool,
    /// Change to each seat's total, in seat order. Milestone drops make entries negative.
    pub deltas: Vec<i64>,
}

/// Score a call made by `caller` against the hands currently held.
///
/// The caller takes `miscall_penalty` unless every other hand is strictly higher. Everyone
/// else adds their hand to their total; a non-caller whose new total lands on a positive
/// multiple of `milestone` drops back by one milestone. A `caller` outside the table is
/// [`RoundError::NoSuchSeat`] and leaves every total alone.
///
/// ```
/// use ballbag::cards::parse_cards;
/// use ballbag::player::Player;
/// use ballbag::rules::Rules;
/// use ballbag::scoring::tally_scores;
///
/// let mut players = vec![Player::new("a"), Player::new("b")];
/// players[0].set_hand(parse_cards("7s").unwrap());
/// players[1].set_hand(parse_cards("Qs").unwrap());
/// let tally = tally_scores(&mut players, 0, &Rules::default())?;
/// assert!(tally.successful);
/// assert_eq!(players[0].total_score(), 0);
/// assert_eq!(players[1].total_score(), 10);
/// # Ok::<(), ballbag::round::RoundError>(())
/// ```
pub fn tally_scores(
    players: &mut [Player],
    caller: usize,
    rules: &Rules,
) -> Result<Tally, RoundError> {
    let caller_score = players.get(caller).ok_or(RoundError::NoSuchSeat(caller))?.round_score();
    let successful = players
        .iter()
        .enumerate()
        .filter(|(seat, _)| *seat != caller)
        .all(|(_, p)| p.round_score() > caller_score);

    let mut deltas = vec![0i64; players.len()];
    if !successful {
        players[caller].total_score += rules.miscall_penalty;
        deltas[caller] = i64::from(rules.miscall_penalty);
    }

    for (seat, p) in players.iter_mut().enumerate() {
        if seat == caller {
            continue;
        }
        let before = p.total_score;
        p.total_score += p.round_score();
        if rules.milestone > 0 && p.total_score > 0 && p.total_score % rules.milestone == 0 {
            p.total_score -= rules.milestone;
        }
        deltas[seat] = i64::from(p.total_score) - i64::from(before);
    }

    log::info!(
        "{} called on {} ({})",
        players[caller].name(),
        caller_score,
        if successful { "lowest" } else { "miscall" }
    );
    Ok(Tally { caller, successful, deltas })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::parse_cards;

    fn table(hands: &[&str]) -> Vec<Player> {
        hands
            .iter()
            .enumerate()
            .map(|(i, h)| {
                let mut p = Player::new(format!("P{}", i + 1));
                p.set_hand(parse_cards(h).unwrap());
                p
            })
            .collect()
    }

    #[test]
    fn tied_call_is_penalised() {
        let mut ps = table(&["Qd", "Qs"]);
        let t = tally_scores(&mut ps, 1, &Rules::default()).unwrap();
        assert!(!t.successful);
        assert_eq!(ps[0].total_score(), 10);
        assert_eq!(ps[1].total_score(), 30);
        assert_eq!(t.deltas, vec![10, 30]);
    }

    #[test]
    fn strictly_lowest_call_is_free() {
        let mut ps = table(&["7s", "Qs"]);
        let t = tally_scores(&mut ps, 0, &Rules::default()).unwrap();
        assert!(t.successful);
        assert_eq!(ps[0].total_score(), 0);
        assert_eq!(ps[1].total_score(), 10);
    }

    #[test]
    fn milestone_total_wraps_down() {
        let mut ps = table(&["As", "Qs"]);
        ps[1].total_score = 15;
        let t = tally_scores(&mut ps, 0, &Rules::default()).unwrap();
        assert_eq!(ps[1].total_score(), 0);
        assert_eq!(t.deltas[1], -15);
    }

    #[test]
    fn caller_never_wraps() {
        let mut ps = table(&["Ks", "2c"]);
        ps[0].total_score = 20;
        tally_scores(&mut ps, 0, &Rules::default()).unwrap();
        assert_eq!(ps[0].total_score(), 50, "caller penalty is not reduced at milestones");
        assert_eq!(ps[1].total_score(), 2);
    }

    #[test]
    fn zero_total_does_not_wrap() {
        let mut ps = table(&["As", "jk1 jk2"]);
        tally_scores(&mut ps, 0, &Rules::default()).unwrap();
        assert_eq!(ps[1].total_score(), 0);
        assert_eq!(ps[0].total_score(), 30, "joker hand of 0 beats the caller's ace");
    }

    #[test]
    fn unknown_caller_is_rejected() {
        let mut ps = table(&["As", "Qs"]);
        assert!(matches!(
            tally_scores(&mut ps, 2, &Rules::default()),
            Err(RoundError::NoSuchSeat(2))
        ));
        assert!(ps.iter().all(|p| p.total_score() == 0));
    }

    #[test]
    fn any_equal_or_lower_hand_penalises_caller() {
        let mut ps = table(&["5s", "9h", "5d"]);
        let t = tally_scores(&mut ps, 0, &Rules::default()).unwrap();
        assert!(!t.successful);
        assert_eq!(ps[0].total_score(), 30);
        assert_eq!(ps[1].total_score(), 9);
        assert_eq!(ps[2].total_score(), 5);
    }
}
