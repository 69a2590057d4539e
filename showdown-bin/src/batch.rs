use std::error::Error;
use std::fmt;
use std::io::{BufRead, Write};

use enum_map::EnumMap;
use itertools::Itertools;
use log::{debug, info, warn};
use showdown_core::deck::cards_from_str;
use showdown_core::hand::HAND_SIZE;
use showdown_core::{showdown, Hand, HandClass, HandError, Winner};

/// Running score over a file of deals
#[derive(Debug, Default, PartialEq)]
pub struct Tally {
    pub player1: usize,
    pub player2: usize,
    pub ties: usize,
    pub skipped: usize,
    /// How many scored deals were judged at each class
    decided_at: EnumMap<HandClass, usize>,
}

impl Tally {
    fn record(&mut self, winner: Winner, class: HandClass) {
        match winner {
            Winner::A => self.player1 += 1,
            Winner::B => self.player2 += 1,
            Winner::Tie => self.ties += 1,
        }
        self.decided_at[class] += 1;
    }

    /// How many deals were decided at each hand class, best class first
    pub fn by_class(&self) -> Vec<(HandClass, usize)> {
        self.decided_at
            .iter()
            .rev()
            .filter(|(_, n)| **n > 0)
            .map(|(class, n)| (class, *n))
            .collect()
    }
}

impl fmt::Display for Tally {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "player 1 wins: {}, player 2 wins: {}, ties: {}",
            self.player1, self.player2, self.ties
        )
    }
}

/// A line holds ten cards from one deck: player 1's hand then player 2's.
fn parse_deal(line: &str) -> Result<(Hand, Hand), Box<dyn Error>> {
    let cards = cards_from_str(line)?;
    if cards.len() != HAND_SIZE * 2 {
        return Err(format!("Expected {} cards, found {}", HAND_SIZE * 2, cards.len()).into());
    }
    if let Some(dup) = cards.iter().duplicates().next() {
        return Err(HandError::DuplicateCard(*dup).into());
    }
    let (a, b) = cards.split_at(HAND_SIZE);
    Ok((Hand::new(a)?, Hand::new(b)?))
}

fn verdict(winner: Winner, class: HandClass) -> String {
    match winner {
        Winner::A => format!("player 1 wins with rank {}", class),
        Winner::B => format!("player 2 wins with rank {}", class),
        Winner::Tie => format!("tie with rank {}", class),
    }
}

/// Score every deal in `input`. Blank lines and lines starting with `#` are ignored; lines that
/// don't hold two valid hands are logged and skipped.
pub fn run(
    input: &mut dyn BufRead,
    out: &mut dyn Write,
    quiet: bool,
) -> Result<Tally, Box<dyn Error>> {
    let mut tally = Tally::default();
    let mut buf = Vec::new();
    let mut lineno = 0;
    loop {
        buf.clear();
        if input.read_until(b'\n', &mut buf)? == 0 {
            break;
        }
        lineno += 1;
        let line = match std::str::from_utf8(&buf) {
            Ok(line) => line.trim(),
            Err(e) => {
                warn!("line {}: {}", lineno, e);
                tally.skipped += 1;
                continue;
            }
        };
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let (a, b) = match parse_deal(line) {
            Ok(hands) => hands,
            Err(e) => {
                warn!("line {}: {}", lineno, e);
                tally.skipped += 1;
                continue;
            }
        };
        let outcome = showdown(&a, &b);
        debug!("line {}: {} ({}) vs {} ({})", lineno, a, a.class(), b, b.class());
        if !quiet {
            writeln!(out, "{}: {} {}: {}", lineno, a, b, verdict(outcome.winner, outcome.class))?;
        }
        tally.record(outcome.winner, outcome.class);
    }
    for (class, n) in tally.by_class() {
        info!("{}: {}", class, n);
    }
    if tally.skipped > 0 {
        warn!("skipped {} malformed lines", tally.skipped);
    }
    Ok(tally)
}
