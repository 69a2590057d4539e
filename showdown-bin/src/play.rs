use std::error::Error;
use std::io::{self, BufRead, Write};

use log::{info, warn};
use showdown_core::{showdown, Card, CardError, Hand, HandError, Outcome};

const ORDINALS: [&str; 5] = ["first", "second", "third", "fourth", "fifth"];

enum HandInput {
    Hand(Hand),
    BadCard(CardError),
    BadHand(HandError),
    Eof,
}

/// One line of input without its line ending, or None once input is exhausted. Bytes that
/// aren't UTF-8 become U+FFFD, which no card parses from.
fn read_line(input: &mut dyn BufRead) -> io::Result<Option<String>> {
    let mut buf = Vec::new();
    if input.read_until(b'\n', &mut buf)? == 0 {
        return Ok(None);
    }
    Ok(Some(String::from_utf8_lossy(&buf).trim().to_string()))
}

fn prompt(out: &mut dyn Write, no_prompts: bool, msg: &str) -> io::Result<()> {
    if no_prompts {
        return Ok(());
    }
    write!(out, "{}", msg)?;
    out.flush()
}

/// Rank is a face letter (J Q K A, T for ten) or a number from 2 to 14; suit is S C H or D.
fn parse_card(rank: &str, suit: &str) -> Result<Card, CardError> {
    Ok(Card::new(rank.parse()?, suit.parse()?))
}

/// Ask for five cards, one rank and one suit at a time. Gives up at the first bad card.
fn read_hand(
    input: &mut dyn BufRead,
    out: &mut dyn Write,
    no_prompts: bool,
) -> io::Result<HandInput> {
    let mut cards = Vec::with_capacity(ORDINALS.len());
    for ordinal in ORDINALS {
        prompt(out, no_prompts, &format!("Enter the {} card:\nRank:", ordinal))?;
        let rank = match read_line(input)? {
            Some(r) => r,
            None => return Ok(HandInput::Eof),
        };
        prompt(out, no_prompts, "Suit:")?;
        let suit = match read_line(input)? {
            Some(s) => s,
            None => return Ok(HandInput::Eof),
        };
        match parse_card(&rank, &suit) {
            Ok(c) => cards.push(c),
            Err(e) => return Ok(HandInput::BadCard(e)),
        }
    }
    Ok(match Hand::new(&cards) {
        Ok(h) => HandInput::Hand(h),
        Err(e) => HandInput::BadHand(e),
    })
}

/// The line shown for a finished comparison
pub fn describe(a: &Hand, b: &Hand, outcome: &Outcome) -> String {
    match outcome.winning_hand(a, b) {
        Some(h) => format!("hand: {} wins with rank {}!", h.pretty(), outcome.class),
        None => format!("chop: both hands tie with rank {}!", outcome.class),
    }
}

/// Keep asking for pairs of hands and reporting the winner until input runs out
pub fn run(
    input: &mut dyn BufRead,
    out: &mut dyn Write,
    no_prompts: bool,
) -> Result<(), Box<dyn Error>> {
    let mut played = 0usize;
    loop {
        prompt(
            out,
            no_prompts,
            "Welcome to the poker hand comparer!\nPlease enter the first hand.\n",
        )?;
        let a = match read_hand(input, out, no_prompts)? {
            HandInput::Hand(h) => h,
            HandInput::BadCard(e) => {
                warn!("{}", e);
                writeln!(out, "first hand input error, skipping second hand input...")?;
                continue;
            }
            HandInput::BadHand(e) => {
                warn!("{}", e);
                writeln!(out, "invalid first hand, skipping second hand input...")?;
                continue;
            }
            HandInput::Eof => break,
        };
        prompt(out, no_prompts, "Please enter the second hand.\n")?;
        let b = match read_hand(input, out, no_prompts)? {
            HandInput::Hand(h) => h,
            HandInput::BadCard(e) => {
                warn!("{}", e);
                writeln!(out, "second hand input error")?;
                continue;
            }
            HandInput::BadHand(e) => {
                warn!("{}", e);
                writeln!(out, "invalid second hand")?;
                continue;
            }
            HandInput::Eof => break,
        };
        let outcome = showdown(&a, &b);
        writeln!(out, "{}", describe(&a, &b, &outcome))?;
        played += 1;
    }
    info!("compared {} pairs of hands", played);
    Ok(())
}
