use crate::deck::{cards_from_str, Card, CardError, Rank};
use enum_map::{Enum, EnumMap};
use itertools::{zip, Itertools};
use log::{debug, trace};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::error::Error;
use std::fmt;
use std::str::FromStr;

pub const HAND_SIZE: usize = 5;

/// Which of two hands, called A and B, comes out ahead
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display, Serialize, Deserialize,
)]
pub enum Winner {
    A,
    B,
    Tie,
}

impl From<Ordering> for Winner {
    fn from(o: Ordering) -> Self {
        match o {
            Ordering::Greater => Winner::A,
            Ordering::Less => Winner::B,
            Ordering::Equal => Winner::Tie,
        }
    }
}

impl Winner {
    /// The same verdict with A and B swapped
    pub fn flip(self) -> Self {
        match self {
            Winner::A => Winner::B,
            Winner::B => Winner::A,
            Winner::Tie => Winner::Tie,
        }
    }
}

#[derive(
    Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Enum, Serialize, Deserialize,
)]
pub enum HandClass {
    HighCard,
    Pair,
    TwoPair,
    ThreeOfAKind,
    Straight,
    Flush,
    FullHouse,
    FourOfAKind,
    StraightFlush,
}

pub const ALL_HAND_CLASSES: [HandClass; 9] = [
    HandClass::HighCard,
    HandClass::Pair,
    HandClass::TwoPair,
    HandClass::ThreeOfAKind,
    HandClass::Straight,
    HandClass::Flush,
    HandClass::FullHouse,
    HandClass::FourOfAKind,
    HandClass::StraightFlush,
];

/// How many cards share each rank, biggest group first, and what that makes the hand. Five
/// distinct ranks are only provisionally HighCard: they may still be a straight and/or flush.
const SHAPES: [(&[usize], HandClass); 6] = [
    (&[4, 1], HandClass::FourOfAKind),
    (&[3, 2], HandClass::FullHouse),
    (&[3, 1, 1], HandClass::ThreeOfAKind),
    (&[2, 2, 1], HandClass::TwoPair),
    (&[2, 1, 1, 1], HandClass::Pair),
    (&[1, 1, 1, 1, 1], HandClass::HighCard),
];

const WHEEL: [u8; HAND_SIZE] = [2, 3, 4, 5, 14];

/// Ranks grouped by how many times they appear. Bigger groups come first, and groups of the same
/// size are ordered high to low, so AAKK5 becomes [(2, A), (2, K), (1, 5)].
fn grouped(ranks: &[Rank]) -> Vec<(usize, Rank)> {
    let mut counts: EnumMap<Rank, usize> = EnumMap::default();
    for r in ranks {
        counts[*r] += 1;
    }
    counts
        .into_iter()
        .filter(|(_, n)| *n > 0)
        .map(|(r, n)| (n, r))
        .sorted_unstable()
        .rev()
        .collect()
}

/// The group ranks of a hand that must have the given shape, e.g. the pair and then its three
/// kickers for [2, 1, 1, 1].
fn group_ranks(ranks: &[Rank], shape: &[usize]) -> Vec<Rank> {
    let groups = grouped(ranks);
    assert!(
        groups.iter().map(|(n, _)| *n).eq(shape.iter().copied()),
        "{:?} does not have shape {:?}",
        ranks,
        shape
    );
    groups.into_iter().map(|(_, r)| r).collect()
}

/// Rank values high to low, with the Ace of a wheel (A2345) moved to the bottom as a 1.
fn straight_values(ranks: &[Rank; HAND_SIZE]) -> [u8; HAND_SIZE] {
    let mut values = ranks.map(Rank::value);
    if values[0] == 14 && values[1] == 5 {
        values = [5, 4, 3, 2, 1];
    }
    values
}

fn is_straight(c: &[Card]) -> bool {
    // only asked about five distinct ranks
    let values: Vec<u8> = c.iter().map(|c| c.value()).sorted_unstable().collect();
    values == WHEEL || values[HAND_SIZE - 1] - values[0] == 4
}

/// Ranks of the cards, highest first
fn sorted_ranks(c: &[Card]) -> [Rank; HAND_SIZE] {
    let mut ranks: [Rank; HAND_SIZE] = [
        c[0].rank(),
        c[1].rank(),
        c[2].rank(),
        c[3].rank(),
        c[4].rank(),
    ];
    ranks.sort_unstable();
    ranks.reverse();
    ranks
}

impl HandClass {
    pub fn name(self) -> &'static str {
        match self {
            Self::HighCard => "High card",
            Self::Pair => "One pair",
            Self::TwoPair => "Two pairs",
            Self::ThreeOfAKind => "Three of a kind",
            Self::Straight => "Straight",
            Self::Flush => "Flush",
            Self::FullHouse => "Full house",
            Self::FourOfAKind => "Four of a kind",
            Self::StraightFlush => "Straight flush",
        }
    }

    /// Classify five distinct cards.
    ///
    /// The rank counts decide everything except five distinct ranks, which are then checked for
    /// a straight (the wheel A2345 included) and a flush. Hands with a repeated rank can be
    /// neither, so they never reach that check.
    pub fn which(c: &[Card]) -> HandClass {
        assert_eq!(c.len(), HAND_SIZE);
        let ranks: Vec<Rank> = c.iter().map(|c| c.rank()).collect();
        let shape: Vec<usize> = grouped(&ranks).into_iter().map(|(n, _)| n).collect();
        let class = match SHAPES.iter().find(|(s, _)| *s == shape.as_slice()) {
            Some((_, class)) => *class,
            None => unreachable!("Rank counts {:?} can't come from five distinct cards", shape),
        };
        if class != HandClass::HighCard {
            trace!("{:?} classified as {} by rank counts", c, class);
            return class;
        }
        let flush = c.iter().map(|c| c.suit()).all_equal();
        let straight = is_straight(c);
        let class = match (straight, flush) {
            (true, true) => HandClass::StraightFlush,
            (false, true) => HandClass::Flush,
            (true, false) => HandClass::Straight,
            (false, false) => HandClass::HighCard,
        };
        trace!("{:?} classified as {}", c, class);
        class
    }

    /// Order two sets of cards that are both of this class. Greater means `c1` wins.
    fn tie_break(self, c1: &[Card], c2: &[Card]) -> Ordering {
        debug_assert_eq!(HandClass::which(c1), self);
        debug_assert_eq!(HandClass::which(c2), self);
        let left = sorted_ranks(c1);
        let right = sorted_ranks(c2);
        match self {
            HandClass::StraightFlush => HandClass::beats_straight_flush(left, right),
            HandClass::FourOfAKind => HandClass::beats_quads(left, right),
            HandClass::FullHouse => HandClass::beats_full_house(left, right),
            HandClass::Flush => HandClass::beats_flush(left, right),
            HandClass::Straight => HandClass::beats_straight(left, right),
            HandClass::ThreeOfAKind => HandClass::beats_set(left, right),
            HandClass::TwoPair => HandClass::beats_two_pair(left, right),
            HandClass::Pair => HandClass::beats_pair(left, right),
            HandClass::HighCard => HandClass::beats_high_card(&left, &right),
        }
    }

    fn beats_straight_flush(left: [Rank; HAND_SIZE], right: [Rank; HAND_SIZE]) -> Ordering {
        // flush part is equal; walk the whole straight from the top, wheel Ace counted as 1
        Self::beats_high_card(&straight_values(&left), &straight_values(&right))
    }

    fn beats_quads(left: [Rank; HAND_SIZE], right: [Rank; HAND_SIZE]) -> Ordering {
        let l = group_ranks(&left, &[4, 1]);
        let r = group_ranks(&right, &[4, 1]);
        l[0].cmp(&r[0]).then(l[1].cmp(&r[1]))
    }

    fn beats_full_house(left: [Rank; HAND_SIZE], right: [Rank; HAND_SIZE]) -> Ordering {
        // the three of a kind first, no matter how high the pair is
        let l = group_ranks(&left, &[3, 2]);
        let r = group_ranks(&right, &[3, 2]);
        l[0].cmp(&r[0]).then(l[1].cmp(&r[1]))
    }

    fn beats_flush(left: [Rank; HAND_SIZE], right: [Rank; HAND_SIZE]) -> Ordering {
        Self::beats_high_card(&left, &right)
    }

    fn beats_straight(left: [Rank; HAND_SIZE], right: [Rank; HAND_SIZE]) -> Ordering {
        // Two straights can only differ in their top two cards. For a wheel those are 5 and 4,
        // so it loses to 65432 even though it holds an Ace.
        let l = straight_values(&left);
        let r = straight_values(&right);
        Self::beats_high_card(&l[..2], &r[..2])
    }

    fn beats_set(left: [Rank; HAND_SIZE], right: [Rank; HAND_SIZE]) -> Ordering {
        let l = group_ranks(&left, &[3, 1, 1]);
        let r = group_ranks(&right, &[3, 1, 1]);
        l[0].cmp(&r[0]).then_with(|| Self::beats_high_card(&l[1..], &r[1..]))
    }

    fn beats_two_pair(left: [Rank; HAND_SIZE], right: [Rank; HAND_SIZE]) -> Ordering {
        // Higher pair, then lower pair. The fifth card is NOT looked at: two hands with the same
        // two pairs tie whatever their kickers are.
        let l = group_ranks(&left, &[2, 2, 1]);
        let r = group_ranks(&right, &[2, 2, 1]);
        Self::beats_high_card(&l[..2], &r[..2])
    }

    fn beats_pair(left: [Rank; HAND_SIZE], right: [Rank; HAND_SIZE]) -> Ordering {
        let l = group_ranks(&left, &[2, 1, 1, 1]);
        let r = group_ranks(&right, &[2, 1, 1, 1]);
        l[0].cmp(&r[0]).then_with(|| Self::beats_high_card(&l[1..], &r[1..]))
    }

    /// Compare two lists that are sorted high to low, first difference wins
    fn beats_high_card<T: Ord>(left: &[T], right: &[T]) -> Ordering {
        assert_eq!(left.len(), right.len());
        for (l, r) in zip(left.iter(), right.iter()) {
            match l.cmp(r) {
                Ordering::Equal => {}
                o => return o,
            };
        }
        Ordering::Equal
    }
}

impl fmt::Display for HandClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[derive(PartialEq, Debug, Clone)]
pub enum HandError {
    NotFiveCards(usize),
    DuplicateCard(Card),
    Card(CardError),
}

impl Error for HandError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Card(e) => Some(e),
            _ => None,
        }
    }
}

impl fmt::Display for HandError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotFiveCards(n) => write!(f, "Five cards are required, but {} were given", n),
            Self::DuplicateCard(c) => write!(f, "Card {} appears more than once", c),
            Self::Card(e) => write!(f, "{}", e),
        }
    }
}

impl From<CardError> for HandError {
    fn from(e: CardError) -> Self {
        Self::Card(e)
    }
}

/// Five distinct cards and what they make
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Hand {
    cards: [Card; HAND_SIZE],
    class: HandClass,
}

impl fmt::Display for Hand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}{}{}{}{}",
            self.cards[0], self.cards[1], self.cards[2], self.cards[3], self.cards[4],
        )
    }
}

impl FromStr for Hand {
    type Err = HandError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(&cards_from_str(s)?)
    }
}

impl Hand {
    pub fn new(cards: &[Card]) -> Result<Self, HandError> {
        if cards.len() != HAND_SIZE {
            return Err(HandError::NotFiveCards(cards.len()));
        }
        if let Some(dup) = cards.iter().duplicates().next() {
            return Err(HandError::DuplicateCard(*dup));
        }
        Ok(Self {
            cards: [cards[0], cards[1], cards[2], cards[3], cards[4]],
            class: HandClass::which(cards),
        })
    }

    /// The cards, in the order they were given
    pub fn cards(&self) -> &[Card; HAND_SIZE] {
        &self.cards
    }

    pub fn class(&self) -> HandClass {
        self.class
    }

    /// Cards in their human facing form, e.g. `10♦, J♦, Q♦, 5♠, A♥`
    pub fn pretty(&self) -> String {
        self.cards.iter().map(|c| c.pretty()).join(", ")
    }

    /// Whether this hand (A) or `other` (B) wins. The class decides unless it is the same for
    /// both, in which case that class's tie-break does.
    pub fn beats(&self, other: &Self) -> Winner {
        match self.class.cmp(&other.class) {
            Ordering::Equal => compare_same_rank(self, other, self.class),
            o => o.into(),
        }
    }
}

/// Break the tie between two hands that are both `class`.
///
/// Panics if either hand is not of `class`; callers are expected to have compared classes
/// already.
pub fn compare_same_rank(a: &Hand, b: &Hand, class: HandClass) -> Winner {
    assert_eq!(a.class, class, "{} is not a {}", a, class);
    assert_eq!(b.class, class, "{} is not a {}", b, class);
    let winner: Winner = class.tie_break(&a.cards, &b.cards).into();
    debug!("{} vs {} ({}): {}", a, b, class, winner);
    winner
}

/// The result of playing two hands against each other
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Outcome {
    pub winner: Winner,
    /// Class of the winning hand. On a tie both hands share it.
    pub class: HandClass,
}

impl Outcome {
    /// `None` on a tie
    pub fn winning_hand<'a>(&self, a: &'a Hand, b: &'a Hand) -> Option<&'a Hand> {
        match self.winner {
            Winner::A => Some(a),
            Winner::B => Some(b),
            Winner::Tie => None,
        }
    }
}

pub fn showdown(a: &Hand, b: &Hand) -> Outcome {
    let winner = a.beats(b);
    let class = match winner {
        Winner::B => b.class,
        Winner::A | Winner::Tie => a.class,
    };
    debug!("{} ({}) vs {} ({}): {} wins with {}", a, a.class, b, b.class, winner, class);
    Outcome { winner, class }
}


#[cfg(test)]
mod test_hand_class {
    use super::*;
    use crate::deck::{Suit, ALL_RANKS, ALL_SUITS};

    fn hand(s: &str) -> Hand {
        s.parse().unwrap()
    }

    /// Group `i` of the hand is `shape[i]` cards of `ranks[i]`, each in a different suit
    fn shaped(shape: &[usize], ranks: &[Rank]) -> Vec<Card> {
        zip(shape, ranks)
            .enumerate()
            .flat_map(|(i, (n, r))| (0..*n).map(move |j| Card::new(*r, ALL_SUITS[(i + j) % 4])))
            .collect()
    }

    fn counts(cards: &[Card]) -> Vec<usize> {
        let ranks: Vec<Rank> = cards.iter().map(|c| c.rank()).collect();
        grouped(&ranks).into_iter().map(|(n, _)| n).collect()
    }

    // Every way of filling each row of the table with ranks lands on that row's class.
    #[test]
    fn count_shapes() {
        for (shape, class) in SHAPES.iter().filter(|(s, _)| s.len() < HAND_SIZE) {
            for ranks in ALL_RANKS.into_iter().permutations(shape.len()) {
                let cards = shaped(shape, &ranks);
                assert_eq!(counts(&cards), *shape);
                assert_eq!(HandClass::which(&cards), *class, "{:?}", cards);
            }
        }
    }

    // Five distinct ranks: the last row of the table, then the straight/flush check
    #[test]
    fn distinct_ranks() {
        let mut straights: Vec<Vec<Rank>> =
            ALL_RANKS.windows(HAND_SIZE).map(<[Rank]>::to_vec).collect();
        straights.push(vec![Rank::R2, Rank::R3, Rank::R4, Rank::R5, Rank::RA]);
        let mut seen = 0;
        for ranks in ALL_RANKS.into_iter().combinations(HAND_SIZE) {
            let offsuit = shaped(&[1; HAND_SIZE], &ranks);
            let suited: Vec<Card> = ranks.iter().map(|r| Card::new(*r, Suit::Heart)).collect();
            assert_eq!(counts(&offsuit), [1; HAND_SIZE]);
            let (plain, flush) = if straights.contains(&ranks) {
                seen += 1;
                (HandClass::Straight, HandClass::StraightFlush)
            } else {
                (HandClass::HighCard, HandClass::Flush)
            };
            assert_eq!(HandClass::which(&offsuit), plain, "{:?}", offsuit);
            assert_eq!(HandClass::which(&suited), flush, "{:?}", suited);
        }
        assert_eq!(seen, 10);
    }

    #[test]
    fn wheel() {
        assert_eq!(hand("As2d3h4s5c").class(), HandClass::Straight);
        assert_eq!(hand("5h4h3h2hAh").class(), HandClass::StraightFlush);
    }

    // Aces don't wrap around the top of a straight
    #[test]
    fn not_straight() {
        for s in ["KcAd2h3s4c", "QcKdAh2s3c", "Ac3d4h5s6c", "Ac2d3h4s6c"] {
            assert_eq!(hand(s).class(), HandClass::HighCard, "{}", s);
        }
    }

    #[test]
    fn grouping() {
        let ranks = [Rank::R5, Rank::RK, Rank::RA, Rank::RK, Rank::RA];
        assert_eq!(grouped(&ranks), vec![(2, Rank::RA), (2, Rank::RK), (1, Rank::R5)]);
        assert_eq!(group_ranks(&ranks, &[2, 2, 1]), vec![Rank::RA, Rank::RK, Rank::R5]);
    }

    #[test]
    #[should_panic]
    fn grouping_wrong_shape() {
        let ranks = [Rank::R5, Rank::RK, Rank::RA, Rank::RK, Rank::RA];
        group_ranks(&ranks, &[3, 1, 1]);
    }

    #[test]
    fn beats_straight_flush_tie() {
        let h1 = hand("AcKcQcJcTc");
        let h2 = hand("AdKdQdJdTd");
        assert_eq!(h1.beats(&h2), Winner::Tie);
        let h1 = hand("KcQcJcTc9c");
        let h2 = hand("KdQdJdTd9d");
        assert_eq!(h1.beats(&h2), Winner::Tie);
        let h1 = hand("5c4c3c2cAc");
        let h2 = hand("5d4d3d2dAd");
        assert_eq!(h1.beats(&h2), Winner::Tie);
    }

    #[test]
    fn beats_straight_flush_win() {
        let h1 = hand("AcKcQcJcTc");
        let h2 = hand("KdQdJdTd9d");
        assert_eq!(h1.beats(&h2), Winner::A);
        let h1 = hand("6c5c4c3c2c");
        let h2 = hand("5d4d3d2dAd");
        assert_eq!(h1.beats(&h2), Winner::A);
        let h1 = hand("AcKcQcJcTc");
        let h2 = hand("5d4d3d2dAd");
        assert_eq!(h1.beats(&h2), Winner::A);
    }

    #[test]
    fn beats_straight_flush_lose() {
        let h1 = hand("KdQdJdTd9d");
        let h2 = hand("AcKcQcJcTc");
        assert_eq!(h1.beats(&h2), Winner::B);
        let h1 = hand("As2s3s4s5s");
        let h2 = hand("2s3s4s5s6s");
        assert_eq!(h1.beats(&h2), Winner::B);
    }

    #[test]
    fn beats_quads_tie() {
        // this should be impossible in typical single deck poker, but check for it anyway since
        // the logic doesn't care
        let h1 = hand("2c2d2h2s3c");
        let h2 = hand("2c2d2h2s3d");
        assert_eq!(h1.beats(&h2), Winner::Tie);
    }

    #[test]
    fn beats_quads_win() {
        let h1 = hand("4c4d4h4s3c");
        let h2 = hand("3c3d3h3s2d");
        assert_eq!(h1.beats(&h2), Winner::A);
        let h1 = hand("4c4d4h4s5c");
        let h2 = hand("4c4d4h4s3c");
        assert_eq!(h1.beats(&h2), Winner::A);
        // four kings on the board, the kicker plays
        let h1 = hand("KsKcKhKdAs");
        let h2 = hand("KsKcKhKdTs");
        assert_eq!(h1.beats(&h2), Winner::A);
    }

    #[test]
    fn beats_quads_lose() {
        let h1 = hand("2s2c2h2dTs");
        let h2 = hand("AsAcAhAdTs");
        assert_eq!(h1.beats(&h2), Winner::B);
        let h1 = hand("4c4d4h4s3c");
        let h2 = hand("4c4d4h4s5c");
        assert_eq!(h1.beats(&h2), Winner::B);
    }

    #[test]
    fn beats_full_house_tie() {
        let h1 = hand("AsAcAd9h9s");
        let h2 = hand("AsAcAh9c9d");
        assert_eq!(h1.beats(&h2), Winner::Tie);
    }

    #[test]
    fn beats_full_house_win() {
        // kings full beats tens full, even though the tens hand holds two kings
        let h1 = hand("KsKcKdThTs");
        let h2 = hand("ThTsTdKcKh");
        assert_eq!(h1.beats(&h2), Winner::A);
        let h1 = hand("AsAcAd9h9s");
        let h2 = hand("AsAcAd6h6s");
        assert_eq!(h1.beats(&h2), Winner::A);
    }

    #[test]
    fn beats_full_house_lose() {
        let h1 = hand("2s2c2dAhAs");
        let h2 = hand("3s3c3d4h4s");
        assert_eq!(h1.beats(&h2), Winner::B);
        let h1 = hand("AsAcAd6h6s");
        let h2 = hand("AsAcAd9h9s");
        assert_eq!(h1.beats(&h2), Winner::B);
    }

    #[test]
    fn beats_flush_tie() {
        let h1 = hand("AsTs9s7s6s");
        let h2 = hand("AhTh9h7h6h");
        assert_eq!(h1.beats(&h2), Winner::Tie);
    }

    #[test]
    fn beats_flush_win() {
        let h1 = hand("AsTs9s7s6s");
        let h2 = hand("KsQs9s7s6s");
        assert_eq!(h1.beats(&h2), Winner::A);
        // decided by the last card
        let h1 = hand("AhTh9h7h6h");
        let h2 = hand("AsTs9s7s5s");
        assert_eq!(h1.beats(&h2), Winner::A);
    }

    #[test]
    fn beats_flush_lose() {
        let h1 = hand("KsQs9s7s6s");
        let h2 = hand("AsTs9s7s6s");
        assert_eq!(h1.beats(&h2), Winner::B);
    }

    #[test]
    fn beats_straight_tie() {
        let h1 = hand("9c8d7h6s5c");
        let h2 = hand("9d8h7s6c5d");
        assert_eq!(h1.beats(&h2), Winner::Tie);
        let h1 = hand("As2d3s4d5h");
        let h2 = hand("Ac2h3c4h5d");
        assert_eq!(h1.beats(&h2), Winner::Tie);
    }

    #[test]
    fn beats_straight_win() {
        let h1 = hand("6c5d4h3s2c");
        let h2 = hand("5c4d3h2sAc");
        assert_eq!(h1.beats(&h2), Winner::A);
        let h1 = hand("AsKdQsJdTh");
        let h2 = hand("As2d3s4d5h");
        assert_eq!(h1.beats(&h2), Winner::A);
        let h1 = hand("Tc9d8h7s6c");
        let h2 = hand("9d8h7s6c5d");
        assert_eq!(h1.beats(&h2), Winner::A);
    }

    #[test]
    fn beats_straight_lose() {
        let h1 = hand("As2d3s4d5h");
        let h2 = hand("AsKdQsJdTh");
        assert_eq!(h1.beats(&h2), Winner::B);
        let h1 = hand("As2d3s4d5h");
        let h2 = hand("2c3d4h5s6c");
        assert_eq!(h1.beats(&h2), Winner::B);
    }

    #[test]
    fn beats_set_tie() {
        let h1 = hand("7s7h7dAcKc");
        let h2 = hand("7s7h7dAdKd");
        assert_eq!(h1.beats(&h2), Winner::Tie);
    }

    #[test]
    fn beats_set_win() {
        let h1 = hand("KsKhKdAc5c");
        let h2 = hand("QsQhQdTc9c");
        assert_eq!(h1.beats(&h2), Winner::A);
        let h1 = hand("JsJhJdAcKc");
        let h2 = hand("JsJhJdAcQc");
        assert_eq!(h1.beats(&h2), Winner::A);
        // second kicker
        let h1 = hand("JsJhJdAc3c");
        let h2 = hand("JsJhJdAd2c");
        assert_eq!(h1.beats(&h2), Winner::A);
    }

    #[test]
    fn beats_set_lose() {
        let h1 = hand("JsJhJdAcQc");
        let h2 = hand("JsJhJdAcKc");
        assert_eq!(h1.beats(&h2), Winner::B);
    }

    #[test]
    fn beats_two_pair_tie() {
        let h1 = hand("JsJd3s3h2d");
        let h2 = hand("JhJc3c3d2s");
        assert_eq!(h1.beats(&h2), Winner::Tie);
    }

    // Full poker rules would give this to the Ace kicker. Two pairs are deliberately compared on
    // the pairs alone, so it is a tie.
    #[test]
    fn beats_two_pair_ignores_kicker() {
        let h1 = hand("JsJd3s3hAd");
        let h2 = hand("JhJc3c3d2s");
        assert_eq!(h1.beats(&h2), Winner::Tie);
        assert_eq!(h2.beats(&h1), Winner::Tie);
    }

    #[test]
    fn beats_two_pair_win() {
        let h1 = hand("JsJd3s3h2d");
        let h2 = hand("TsTd5s5h2s");
        assert_eq!(h1.beats(&h2), Winner::A);
        let h1 = hand("JsJd4s4h2d");
        let h2 = hand("JhJc3s3h2s");
        assert_eq!(h1.beats(&h2), Winner::A);
    }

    #[test]
    fn beats_two_pair_lose() {
        let h1 = hand("TsTd5s5h2s");
        let h2 = hand("JsJd3s3h2d");
        assert_eq!(h1.beats(&h2), Winner::B);
    }

    #[test]
    fn beats_pair_tie() {
        let h1 = hand("QsQdTs8h5h");
        let h2 = hand("QhQcTd8c5c");
        assert_eq!(h1.beats(&h2), Winner::Tie);
    }

    #[test]
    fn beats_pair_win() {
        let h1 = hand("QsQdTs8h5h");
        let h2 = hand("8s8hTsQs5h");
        assert_eq!(h1.beats(&h2), Winner::A);
        let h1 = hand("QsQdTs8h5h");
        let h2 = hand("QsQdTs6h5h");
        assert_eq!(h1.beats(&h2), Winner::A);
        let h1 = hand("QsQdTs8h5h");
        let h2 = hand("QhQcTd8c4c");
        assert_eq!(h1.beats(&h2), Winner::A);
    }

    #[test]
    fn beats_pair_lose() {
        let h1 = hand("8s8hTsQs5h");
        let h2 = hand("QsQdTs8h5h");
        assert_eq!(h1.beats(&h2), Winner::B);
    }

    #[test]
    fn beats_high_card_tie() {
        let h1 = hand("KsQdTs8h5h");
        let h2 = hand("KdQcTc8d5c");
        assert_eq!(h1.beats(&h2), Winner::Tie);
    }

    #[test]
    fn beats_high_card_win() {
        let h1 = hand("KsQdTs8h5h");
        let h2 = hand("QsJdTs8h5h");
        assert_eq!(h1.beats(&h2), Winner::A);
        let h1 = hand("KsQdTs8h5h");
        let h2 = hand("KdQcTc8d4h");
        assert_eq!(h1.beats(&h2), Winner::A);
    }

    #[test]
    fn beats_high_card_lose() {
        let h1 = hand("QsJdTs8h5h");
        let h2 = hand("KsQdTs8h5h");
        assert_eq!(h1.beats(&h2), Winner::B);
    }
}
