use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

/// Number of distinct cards in one physical set: 52 suited cards plus two jokers.
pub const CATALOG_SIZE: usize = 54;

/// Card ranks from Ace (low) to King (high).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Rank {
    Ace = 1,
    Two = 2,
    Three = 3,
    Four = 4,
    Five = 5,
    Six = 6,
    Seven = 7,
    Eight = 8,
    Nine = 9,
    Ten = 10,
    Jack = 11,
    Queen = 12,
    King = 13,
}

impl Rank {
    pub const ALL: [Rank; 13] = [
        Rank::Ace,
        Rank::Two,
        Rank::Three,
        Rank::Four,
        Rank::Five,
        Rank::Six,
        Rank::Seven,
        Rank::Eight,
        Rank::Nine,
        Rank::Ten,
        Rank::Jack,
        Rank::Queen,
        Rank::King,
    ];

    pub const fn value(self) -> u8 {
        self as u8
    }

    /// Points this rank is worth in a hand: face value, honours capped at 10.
    pub const fn score(self) -> u32 {
        let v = self as u32;
        if v > 10 {
            10
        } else {
            v
        }
    }

    pub const fn to_char(self) -> char {
        match self {
            Rank::Ace => 'A',
            Rank::Two => '2',
            Rank::Three => '3',
            Rank::Four => '4',
            Rank::Five => '5',
            Rank::Six => '6',
            Rank::Seven => '7',
            Rank::Eight => '8',
            Rank::Nine => '9',
            Rank::Ten => 'T',
            Rank::Jack => 'J',
            Rank::Queen => 'Q',
            Rank::King => 'K',
        }
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum RankParseError {
    #[error("invalid rank: '{0}'")]
    Invalid(String),
}

impl FromStr for Rank {
    type Err = RankParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let upper = s.trim().to_ascii_uppercase();
        let r = match upper.as_str() {
            "A" | "1" => Rank::Ace,
            "2" => Rank::Two,
            "3" => Rank::Three,
            "4" => Rank::Four,
            "5" => Rank::Five,
            "6" => Rank::Six,
            "7" => Rank::Seven,
            "8" => Rank::Eight,
            "9" => Rank::Nine,
            "10" | "T" => Rank::Ten,
            "J" => Rank::Jack,
            "Q" => Rank::Queen,
            "K" => Rank::King,
            _ => return Err(RankParseError::Invalid(s.to_string())),
        };
        Ok(r)
    }
}

/// The four suits, in catalog order. Suits carry no scoring weight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Suit {
    Diamonds,
    Hearts,
    Spades,
    Clubs,
}

impl Suit {
    pub const ALL: [Suit; 4] = [Suit::Diamonds, Suit::Hearts, Suit::Spades, Suit::Clubs];

    pub const fn to_char(self) -> char {
        match self {
            Suit::Diamonds => 'd',
            Suit::Hearts => 'h',
            Suit::Spades => 's',
            Suit::Clubs => 'c',
        }
    }

    const fn position(self) -> usize {
        match self {
            Suit::Diamonds => 0,
            Suit::Hearts => 1,
            Suit::Spades => 2,
            Suit::Clubs => 3,
        }
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SuitParseError {
    #[error("invalid suit: '{0}'")]
    Invalid(String),
}

impl FromStr for Suit {
    type Err = SuitParseError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let t = s.trim();
        let mut chars = t.chars();
        if let (Some(c), None) = (chars.next(), chars.next()) {
            return Suit::try_from(c);
        }
        match t.to_ascii_lowercase().as_str() {
            "diamonds" => Ok(Suit::Diamonds),
            "hearts" => Ok(Suit::Hearts),
            "spades" => Ok(Suit::Spades),
            "clubs" => Ok(Suit::Clubs),
            _ => Err(SuitParseError::Invalid(s.to_string())),
        }
    }
}

impl TryFrom<char> for Suit {
    type Error = SuitParseError;
    fn try_from(c: char) -> Result<Self, Self::Error> {
        match c.to_ascii_lowercase() {
            'd' => Ok(Suit::Diamonds),
            'h' => Ok(Suit::Hearts),
            's' => Ok(Suit::Spades),
            'c' => Ok(Suit::Clubs),
            _ => Err(SuitParseError::Invalid(c.to_string())),
        }
    }
}

/// The two distinguishable jokers of a set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Joker {
    One,
    Two,
}

/// A card identity: one of 52 suited cards or one of two jokers.
///
/// ```
/// use ballbag::cards::{Card, Joker, Rank, Suit};
///
/// let queen = Card::new(Rank::Queen, Suit::Spades);
/// assert_eq!(queen.score(), 10);
/// assert_eq!(queen.to_string(), "Qs");
/// assert_eq!(Card::Joker(Joker::Two).score(), 0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Card {
    Standard { rank: Rank, suit: Suit },
    Joker(Joker),
}

impl Card {
    pub const fn new(rank: Rank, suit: Suit) -> Self {
        Card::Standard { rank, suit }
    }

    pub const fn rank(self) -> Option<Rank> {
        match self {
            Card::Standard { rank, .. } => Some(rank),
            Card::Joker(_) => None,
        }
    }

    pub const fn suit(self) -> Option<Suit> {
        match self {
            Card::Standard { suit, .. } => Some(suit),
            Card::Joker(_) => None,
        }
    }

    pub const fn is_joker(self) -> bool {
        matches!(self, Card::Joker(_))
    }

    /// Points this card adds to a hand. Jokers are free.
    pub const fn score(self) -> u32 {
        match self {
            Card::Standard { rank, .. } => rank.score(),
            Card::Joker(_) => 0,
        }
    }

    /// Position of this card in catalog order (0..54).
    pub const fn index(self) -> usize {
        match self {
            Card::Standard { rank, suit } => suit.position() * 13 + rank.value() as usize - 1,
            Card::Joker(Joker::One) => 52,
            Card::Joker(Joker::Two) => 53,
        }
    }
}

impl PartialOrd for Card {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Cards order by catalog position: suit-major, then rank, jokers last.
impl Ord for Card {
    fn cmp(&self, other: &Self) -> Ordering {
        self.index().cmp(&other.index())
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Card::Standard { rank, suit } => write!(f, "{rank}{suit}"),
            Card::Joker(Joker::One) => write!(f, "JK1"),
            Card::Joker(Joker::Two) => write!(f, "JK2"),
        }
    }
}

/// Every card identity in catalog order: diamonds, hearts, spades, clubs (Ace..King each),
/// then the two jokers.
pub fn catalog() -> impl Iterator<Item = Card> {
    Suit::ALL
        .into_iter()
        .flat_map(|s| Rank::ALL.into_iter().map(move |r| Card::new(r, s)))
        .chain([Card::Joker(Joker::One), Card::Joker(Joker::Two)])
}

/// Sum of card scores.
pub fn hand_score(cards: &[Card]) -> u32 {
    cards.iter().map(|c| c.score()).sum()
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum CardParseError {
    #[error("invalid card: '{0}'")]
    Invalid(String),
    #[error(transparent)]
    Rank(#[from] RankParseError),
    #[error(transparent)]
    Suit(#[from] SuitParseError),
}

impl FromStr for Card {
    type Err = CardParseError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let t = s.trim();
        let lower = t.to_ascii_lowercase();
        match lower.as_str() {
            "jk1" | "joker1" => return Ok(Card::Joker(Joker::One)),
            "jk2" | "joker2" => return Ok(Card::Joker(Joker::Two)),
            _ => {}
        }
        if !t.is_ascii() || t.len() < 2 {
            return Err(CardParseError::Invalid(s.to_string()));
        }

        // suit is always the last char; rank is whatever precedes it ("10" included)
        let (rank_str, suit_str) = t.split_at(t.len() - 1);
        let rank = Rank::from_str(rank_str)?;
        let suit = Suit::from_str(suit_str)?;
        Ok(Card::new(rank, suit))
    }
}

/// Parse multiple cards separated by whitespace or commas.
///
/// ```
/// use ballbag::cards::{parse_cards, Card, Joker, Rank, Suit};
///
/// let cards = parse_cards("As, Kd jk1").unwrap();
/// assert_eq!(cards[0], Card::new(Rank::Ace, Suit::Spades));
/// assert_eq!(cards[1], Card::new(Rank::King, Suit::Diamonds));
/// assert_eq!(cards[2], Card::Joker(Joker::One));
/// ```
pub fn parse_cards(input: &str) -> Result<Vec<Card>, CardParseError> {
    input
        .split(|c: char| c.is_whitespace() || c == ',')
        .filter(|s| !s.is_empty())
        .map(Card::from_str)
        .collect()
}
