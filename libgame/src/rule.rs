use std::{fmt, str::FromStr};

use itertools::Itertools;
use thiserror::Error;

/// Possible neighbor counts, `0..=8`.
pub const NEIGHBOR_COUNTS: usize = 9;

/// Transition table for a two-state totalistic automaton.
///
/// A dead cell becomes alive when `birth[neighbors]` is set, a live cell stays
/// alive when `survive[neighbors]` is set, every other cell is dead in the
/// next generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rule {
    pub birth: [bool; NEIGHBOR_COUNTS],
    pub survive: [bool; NEIGHBOR_COUNTS],
}

/// Conway's Game of Life, B3/S23.
pub static GAME_OF_LIFE: Rule = Rule::from_counts(&[3], &[2, 3]);

impl Rule {
    /// Panics if any count is above 8.
    pub const fn from_counts(birth: &[usize], survive: &[usize]) -> Self {
        Self {
            birth: count_table(birth),
            survive: count_table(survive),
        }
    }

    pub fn next_state(&self, alive: bool, neighbors: u32) -> bool {
        let table = if alive { &self.survive } else { &self.birth };
        table.get(neighbors as usize).copied().unwrap_or(false)
    }
}

impl Default for Rule {
    fn default() -> Self {
        GAME_OF_LIFE
    }
}

const fn count_table(counts: &[usize]) -> [bool; NEIGHBOR_COUNTS] {
    let mut table = [false; NEIGHBOR_COUNTS];
    let mut i = 0;
    while i < counts.len() {
        table[counts[i]] = true;
        i += 1;
    }
    table
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RuleParseError {
    #[error("rule must look like B3/S23")]
    MissingSeparator,

    #[error("expected '{expected}' at the start of \"{part}\"")]
    BadPrefix { expected: char, part: String },

    #[error("'{digit}' is not a neighbor count between 0 and 8")]
    BadDigit { digit: char },
}

/// Parses `B<counts>/S<counts>`, e.g. `B3/S23` or `b36/s23`.
impl FromStr for Rule {
    type Err = RuleParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (birth, survive) = s
            .trim()
            .split_once('/')
            .ok_or(RuleParseError::MissingSeparator)?;

        Ok(Self {
            birth: parse_counts(birth, 'B')?,
            survive: parse_counts(survive, 'S')?,
        })
    }
}

fn parse_counts(part: &str, prefix: char) -> Result<[bool; NEIGHBOR_COUNTS], RuleParseError> {
    let mut chars = part.chars();

    match chars.next() {
        Some(c) if c.eq_ignore_ascii_case(&prefix) => {}
        _ => {
            return Err(RuleParseError::BadPrefix {
                expected: prefix,
                part: part.to_owned(),
            });
        }
    }

    let mut table = [false; NEIGHBOR_COUNTS];
    for digit in chars {
        let count = digit
            .to_digit(10)
            .filter(|&count| (count as usize) < NEIGHBOR_COUNTS)
            .ok_or(RuleParseError::BadDigit { digit })?;

        table[count as usize] = true;
    }

    Ok(table)
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let counts = |table: &[bool; NEIGHBOR_COUNTS]| {
            (0..NEIGHBOR_COUNTS).filter(|&n| table[n]).join("")
        };

        write!(f, "B{}/S{}", counts(&self.birth), counts(&self.survive))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn game_of_life_tables() {
        for n in 0..NEIGHBOR_COUNTS as u32 {
            assert_eq!(GAME_OF_LIFE.next_state(true, n), n == 2 || n == 3);
            assert_eq!(GAME_OF_LIFE.next_state(false, n), n == 3);
        }
        assert_eq!(Rule::default(), GAME_OF_LIFE);
    }

    #[test]
    fn counts_past_eight_are_dead() {
        let everything = Rule::from_counts(&[0, 1, 2, 3, 4, 5, 6, 7, 8], &[0, 1, 2, 3, 4, 5, 6, 7, 8]);
        assert!(everything.next_state(true, 8));
        assert!(!everything.next_state(true, 9));
        assert!(!everything.next_state(false, 42));
    }

    #[test]
    fn parses_notation() {
        assert_eq!("B3/S23".parse::<Rule>(), Ok(GAME_OF_LIFE));
        assert_eq!("b3/s23".parse::<Rule>(), Ok(GAME_OF_LIFE));
        assert_eq!(
            "B36/S23".parse::<Rule>(),
            Ok(Rule::from_counts(&[3, 6], &[2, 3]))
        );
        assert_eq!("B/S".parse::<Rule>(), Ok(Rule::from_counts(&[], &[])));
    }

    #[test]
    fn rejects_bad_notation() {
        assert_eq!(
            "B3S23".parse::<Rule>(),
            Err(RuleParseError::MissingSeparator)
        );
        assert_eq!(
            "S23/B3".parse::<Rule>(),
            Err(RuleParseError::BadPrefix {
                expected: 'B',
                part: "S23".to_owned()
            })
        );
        assert_eq!(
            "B3/S29".parse::<Rule>(),
            Err(RuleParseError::BadDigit { digit: '9' })
        );
        assert_eq!(
            "B3/Sx".parse::<Rule>(),
            Err(RuleParseError::BadDigit { digit: 'x' })
        );
    }

    #[test]
    fn display_round_trips_through_parse() {
        assert_eq!(GAME_OF_LIFE.to_string(), "B3/S23");

        let highlife = Rule::from_counts(&[3, 6], &[2, 3]);
        assert_eq!(highlife.to_string().parse::<Rule>(), Ok(highlife));
    }
}
