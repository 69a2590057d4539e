//! Five card poker hands: what they are and which of two wins.
//!
//! ```
//! use showdown_core::{showdown, Hand, HandClass, Winner};
//!
//! let a: Hand = "TD JD QD 5S AH".parse().unwrap();
//! let b: Hand = "2C 3C 4C 5C 7C".parse().unwrap();
//! let outcome = showdown(&a, &b);
//! assert_eq!(outcome.winner, Winner::B);
//! assert_eq!(outcome.class, HandClass::Flush);
//! ```
pub mod deck;
pub mod hand;

pub use deck::{Card, CardError, Deck, DeckError, Rank, Suit};
pub use hand::{compare_same_rank, showdown, Hand, HandClass, HandError, Outcome, Winner};

/// Everything that can go wrong building cards and hands, or dealing them
#[derive(Debug, derive_more::Display, derive_more::From)]
pub enum ShowdownError {
    Card(CardError),
    Hand(HandError),
    Deck(DeckError),
}

impl std::error::Error for ShowdownError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Card(e) => Some(e),
            Self::Hand(e) => Some(e),
            Self::Deck(e) => Some(e),
        }
    }
}

/// Deal two hands off the top of `deck`
pub fn deal_two(deck: &mut Deck) -> Result<(Hand, Hand), ShowdownError> {
    let a = Hand::new(&deck.draw_n(hand::HAND_SIZE)?)?;
    let b = Hand::new(&deck.draw_n(hand::HAND_SIZE)?)?;
    Ok((a, b))
}
