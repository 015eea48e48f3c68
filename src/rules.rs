//! Tunable game constants. `Rules::default()` is the standard game.

/// Numeric rules shared by rounds and matches.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub struct Rules {
    /// Cards dealt to each player at the start of a round.
    pub hand_size: usize,
    /// A match ends once any total strictly exceeds this.
    pub target_score: u32,
    /// Added to a caller's total when someone else held an equal or lower hand.
    pub miscall_penalty: u32,
    /// Non-caller totals landing on a positive multiple of this drop by this amount.
    pub milestone: u32,
}

impl Rules {
    pub const fn standard() -> Self {
        Self { hand_size: 5, target_score: 100, miscall_penalty: 30, milestone: 25 }
    }

    pub fn with_target_score(mut self, target: u32) -> Self {
        self.target_score = target;
        self
    }

    pub fn with_hand_size(mut self, hand_size: usize) -> Self {
        self.hand_size = hand_size;
        self
    }

    pub fn with_miscall_penalty(mut self, penalty: u32) -> Self {
        self.miscall_penalty = penalty;
        self
    }

    pub fn with_milestone(mut self, milestone: u32) -> Self {
        self.milestone = milestone;
        self
    }
}

impl Default for Rules {
    fn default() -> Self {
        Self::standard()
    }
}
