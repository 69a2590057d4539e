use enum_map::Enum;
use itertools::Itertools;
use rand::prelude::*;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt;
use std::str::FromStr;

pub const ALL_RANKS: [Rank; 13] = [
    Rank::R2,
    Rank::R3,
    Rank::R4,
    Rank::R5,
    Rank::R6,
    Rank::R7,
    Rank::R8,
    Rank::R9,
    Rank::RT,
    Rank::RJ,
    Rank::RQ,
    Rank::RK,
    Rank::RA,
];
pub const ALL_SUITS: [Suit; 4] = [Suit::Club, Suit::Diamond, Suit::Heart, Suit::Spade];
const DECK_LEN: usize = ALL_RANKS.len() * ALL_SUITS.len();
const SPADE: char = 's';
const HEART: char = 'h';
const DIAMOND: char = 'd';
const CLUB: char = 'c';
const SPADE_SYMBOL: char = '♠';
const HEART_SYMBOL: char = '♥';
const DIAMOND_SYMBOL: char = '♦';
const CLUB_SYMBOL: char = '♣';

/// Why a card (or the text of one) was rejected
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CardError {
    /// Numeric value outside 2..=14
    InvalidValue(u8),
    InvalidRank(String),
    InvalidSuit(String),
    Malformed(String),
}

impl Error for CardError {}

impl fmt::Display for CardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidValue(v) => write!(f, "Card value {} is outside of 2-14", v),
            Self::InvalidRank(s) => write!(f, "Unknown card rank '{}'", s),
            Self::InvalidSuit(s) => write!(f, "Unknown card suit '{}'", s),
            Self::Malformed(s) => write!(f, "Unable to parse '{}' as a card", s),
        }
    }
}

#[derive(Hash, PartialEq, Eq, PartialOrd, Ord, Clone, Copy, Debug, Serialize, Deserialize)]
pub enum Suit {
    Club,
    Diamond,
    Heart,
    Spade,
}

impl Suit {
    pub fn symbol(self) -> char {
        match self {
            Self::Club => CLUB_SYMBOL,
            Self::Diamond => DIAMOND_SYMBOL,
            Self::Heart => HEART_SYMBOL,
            Self::Spade => SPADE_SYMBOL,
        }
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Club => write!(f, "{}", CLUB),
            Self::Diamond => write!(f, "{}", DIAMOND),
            Self::Heart => write!(f, "{}", HEART),
            Self::Spade => write!(f, "{}", SPADE),
        }
    }
}

impl TryFrom<char> for Suit {
    type Error = CardError;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        match c.to_ascii_lowercase() {
            CLUB => Ok(Self::Club),
            DIAMOND => Ok(Self::Diamond),
            HEART => Ok(Self::Heart),
            SPADE => Ok(Self::Spade),
            _ => Err(CardError::InvalidSuit(c.to_string())),
        }
    }
}

impl FromStr for Suit {
    type Err = CardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.trim().chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Self::try_from(c),
            _ => Err(CardError::InvalidSuit(s.to_string())),
        }
    }
}

#[derive(
    Hash, Enum, PartialEq, Eq, PartialOrd, Ord, Clone, Copy, Debug, Serialize, Deserialize,
)]
pub enum Rank {
    R2,
    R3,
    R4,
    R5,
    R6,
    R7,
    R8,
    R9,
    RT,
    RJ,
    RQ,
    RK,
    RA,
}

impl Rank {
    /// Numeric value of the rank. Aces are high (14).
    pub fn value(self) -> u8 {
        match self {
            Self::R2 => 2,
            Self::R3 => 3,
            Self::R4 => 4,
            Self::R5 => 5,
            Self::R6 => 6,
            Self::R7 => 7,
            Self::R8 => 8,
            Self::R9 => 9,
            Self::RT => 10,
            Self::RJ => 11,
            Self::RQ => 12,
            Self::RK => 13,
            Self::RA => 14,
        }
    }

    pub fn from_value(v: u8) -> Result<Self, CardError> {
        match v {
            2..=14 => Ok(ALL_RANKS[usize::from(v - 2)]),
            _ => Err(CardError::InvalidValue(v)),
        }
    }

    /// How the rank is written for people: numbers up to 10, then J Q K A
    pub fn label(self) -> &'static str {
        match self {
            Self::R2 => "2",
            Self::R3 => "3",
            Self::R4 => "4",
            Self::R5 => "5",
            Self::R6 => "6",
            Self::R7 => "7",
            Self::R8 => "8",
            Self::R9 => "9",
            Self::RT => "10",
            Self::RJ => "J",
            Self::RQ => "Q",
            Self::RK => "K",
            Self::RA => "A",
        }
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::RT => write!(f, "T"),
            r => write!(f, "{}", r.label()),
        }
    }
}

/// Accepts the face letters (T J Q K A, any case) or a plain number in 2-14.
impl FromStr for Rank {
    type Err = CardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        match s.to_ascii_uppercase().as_str() {
            "T" => Ok(Self::RT),
            "J" => Ok(Self::RJ),
            "Q" => Ok(Self::RQ),
            "K" => Ok(Self::RK),
            "A" => Ok(Self::RA),
            digits => match digits.parse::<u8>() {
                Ok(v) => Self::from_value(v),
                Err(_) => Err(CardError::InvalidRank(s.to_string())),
            },
        }
    }
}

#[derive(Hash, PartialEq, Eq, PartialOrd, Ord, Clone, Copy, Debug, Serialize, Deserialize)]
pub struct Card {
    rank: Rank,
    suit: Suit,
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.rank, self.suit)
    }
}

/// Parses `<rank><suit>`, e.g. `Ah`, `td`, `10S` or `14c`.
impl FromStr for Card {
    type Err = CardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let (idx, suit) = match s.char_indices().last() {
            Some((idx, suit)) if idx > 0 => (idx, suit),
            _ => return Err(CardError::Malformed(s.to_string())),
        };
        Ok(Self::new(s[..idx].parse()?, Suit::try_from(suit)?))
    }
}

impl Card {
    pub fn new(rank: Rank, suit: Suit) -> Self {
        Self { rank, suit }
    }

    pub fn suit(self) -> Suit {
        self.suit
    }

    pub fn rank(self) -> Rank {
        self.rank
    }

    pub fn value(self) -> u8 {
        self.rank.value()
    }

    /// Human facing form, e.g. `10♦` or `A♥`
    pub fn pretty(self) -> String {
        format!("{}{}", self.rank.label(), self.suit.symbol())
    }
}

/// Parse a list of cards. Either whitespace separated (`"TD JD 10c"`) or, when there is no
/// whitespace at all, packed two characters per card (`"TdJdQd"`).
pub fn cards_from_str(s: &str) -> Result<Vec<Card>, CardError> {
    let words: Vec<&str> = s.split_whitespace().collect();
    if words.len() == 1 && words[0].chars().count() > 3 {
        return words[0]
            .chars()
            .chunks(2)
            .into_iter()
            .map(|chunk| chunk.collect::<String>().parse::<Card>())
            .collect();
    }
    words.into_iter().map(str::parse::<Card>).collect()
}

/// Returns an UNSHUFFLED vector of cards, one of each
fn all_cards() -> Vec<Card> {
    ALL_SUITS
        .iter()
        .cartesian_product(ALL_RANKS.iter())
        .map(|(suit, rank)| Card::new(*rank, *suit))
        .collect()
}

#[derive(PartialEq, Debug, derive_more::Display, derive_more::Error)]
pub enum DeckError {
    #[display(fmt = "No more cards in deck")]
    OutOfCards,
}

#[derive(Debug, Clone)]
pub struct Deck {
    cards: Vec<Card>,
    next: usize,
}

impl Default for Deck {
    fn default() -> Self {
        Self::new()
    }
}

impl Deck {
    /// Generate a new single deck of cards, shuffled
    pub fn new() -> Self {
        Self::shuffled(&mut thread_rng())
    }

    /// Same as `new()`, but the order of the cards is fully determined by `seed`
    pub fn with_seed(seed: u64) -> Self {
        Self::shuffled(&mut StdRng::seed_from_u64(seed))
    }

    fn shuffled<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let mut cards = all_cards();
        assert_eq!(cards.len(), DECK_LEN);
        cards.shuffle(rng);
        Self { cards, next: 0 }
    }

    /// How many cards can still be drawn
    pub fn remaining(&self) -> usize {
        self.cards.len() - self.next
    }

    /// Draw the topmost card and return it, or return an error if there are no more cards.
    pub fn draw(&mut self) -> Result<Card, DeckError> {
        let c = *self.cards.get(self.next).ok_or(DeckError::OutOfCards)?;
        self.next += 1;
        Ok(c)
    }

    /// Draw `n` cards. Nothing is drawn if fewer than `n` remain.
    pub fn draw_n(&mut self, n: usize) -> Result<Vec<Card>, DeckError> {
        if n > self.remaining() {
            return Err(DeckError::OutOfCards);
        }
        std::iter::repeat_with(|| self.draw()).take(n).collect()
    }
}
