//! The puzzle board: four sides of three letters.

use std::str::FromStr;

use crate::letters::{self, ALPHABET, Letter, LetterSet};
use crate::{Error, Result};

pub const SIDES: usize = 4;
pub const SIDE_LETTERS: usize = 3;
/// Number of distinct letters on a board.
pub const LETTERS: usize = SIDES * SIDE_LETTERS;

pub type Side = [Letter; SIDE_LETTERS];

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Puzzle {
    sides: [Side; SIDES],
    letters: LetterSet,
    /// Side index for every letter on the board.
    side_of: [Option<u8>; ALPHABET],
}

impl Puzzle {
    /// Builds a puzzle from four sides, checking every letter is distinct.
    pub fn new(sides: [Side; SIDES]) -> Result<Self> {
        let mut letters = LetterSet::empty();
        let mut side_of = [None; ALPHABET];
        for (s, side) in sides.iter().enumerate() {
            for &letter in side {
                let i = letters::index(letter).ok_or(Error::PuzzleLetter(letter as char))?;
                if !letters.insert(letter) {
                    return Err(Error::DuplicateLetter(letter as char));
                }
                side_of[i] = Some(s as u8);
            }
        }
        Ok(Self {
            sides,
            letters,
            side_of,
        })
    }

    /// Parses `abc-def-ghi-jkl` or the same groups on separate lines, ignoring case.
    pub fn parse(input: &str) -> Result<Self> {
        let normalised = input.trim().to_lowercase();
        let groups: Vec<&str> = normalised.split(['-', '\n']).map(str::trim).collect();

        let count: usize = groups.iter().map(|group| group.chars().count()).sum();
        if count < LETTERS {
            return Err(Error::PuzzleFormat(format!(
                "expected {LETTERS} letters, found {count}"
            )));
        }
        if groups.len() != SIDES || groups.iter().any(|g| g.chars().count() != SIDE_LETTERS) {
            // also catches empty groups from doubled or stray separators
            return Err(Error::PuzzleFormat(format!(
                "expected {SIDES} sides of {SIDE_LETTERS} letters, found '{}'",
                groups.join("-")
            )));
        }

        let mut sides = [[0; SIDE_LETTERS]; SIDES];
        for (side, group) in sides.iter_mut().zip(&groups) {
            for (slot, c) in side.iter_mut().zip(group.chars()) {
                if !c.is_ascii_lowercase() {
                    return Err(Error::PuzzleLetter(c));
                }
                *slot = c as u8;
            }
        }
        Self::new(sides)
    }

    pub fn sides(&self) -> &[Side; SIDES] {
        &self.sides
    }

    /// Every letter on the board.
    pub fn letters(&self) -> LetterSet {
        self.letters
    }

    /// The side a letter sits on, if it is on the board at all.
    pub fn side_of(&self, letter: Letter) -> Option<usize> {
        letters::index(letter)
            .and_then(|i| self.side_of[i])
            .map(usize::from)
    }

    /// Whether a word only uses board letters and never stays on one side between letters.
    pub fn is_usable(&self, word: &str) -> bool {
        let mut previous = None;
        for letter in word.bytes() {
            let Some(side) = self.side_of(letter) else {
                return false;
            };
            if previous == Some(side) {
                return false;
            }
            previous = Some(side);
        }
        previous.is_some()
    }
}

impl FromStr for Puzzle {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl std::fmt::Display for Puzzle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, side) in self.sides.iter().enumerate() {
            if i > 0 {
                f.write_str("-")?;
            }
            for &letter in side {
                write!(f, "{}", letter as char)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dashed_and_lines_match() {
        let dashed = Puzzle::parse("abc-def-ghi-jkl").unwrap();
        let lines = Puzzle::parse("abc\ndef\nghi\njkl").unwrap();
        assert_eq!(dashed, lines);
        assert_eq!(dashed.to_string(), "abc-def-ghi-jkl");
        assert_eq!(dashed.letters().len(), LETTERS);
    }

    #[test]
    fn case_and_whitespace_are_ignored() {
        let shouty = Puzzle::parse("  CMU\nZOH\r\nSBI\nRAN\n").unwrap();
        assert_eq!(shouty, Puzzle::parse("cmu-zoh-sbi-ran").unwrap());
    }

    #[test]
    fn too_few_letters() {
        assert!(matches!(Puzzle::parse("ab-cd"), Err(Error::PuzzleFormat(_))));
        assert!(matches!(Puzzle::parse(""), Err(Error::PuzzleFormat(_))));
    }

    #[test]
    fn bad_grouping() {
        assert!(matches!(
            Puzzle::parse("abcd-ef-ghi-jkl"),
            Err(Error::PuzzleFormat(_))
        ));
        assert!(matches!(
            Puzzle::parse("abcdefghijkl"),
            Err(Error::PuzzleFormat(_))
        ));
    }

    #[test]
    fn stray_separators() {
        for input in ["abc--def-ghi-jkl", "-abc-def-ghi-jkl-", "abc\n\ndef\nghi\njkl"] {
            assert!(
                matches!(Puzzle::parse(input), Err(Error::PuzzleFormat(_))),
                "{input:?}"
            );
        }
    }

    #[test]
    fn bad_letters() {
        assert!(matches!(
            Puzzle::parse("abc-def-ghi-jk1"),
            Err(Error::PuzzleLetter('1'))
        ));
        assert!(matches!(
            Puzzle::parse("abc-def-ghi-jka"),
            Err(Error::DuplicateLetter('a'))
        ));
    }

    #[test]
    fn sides_and_usability() {
        let puzzle = Puzzle::parse("abc-def-ghi-jkl").unwrap();
        assert_eq!(puzzle.side_of(b'a'), Some(0));
        assert_eq!(puzzle.side_of(b'l'), Some(3));
        assert_eq!(puzzle.side_of(b'z'), None);

        assert!(puzzle.is_usable("adgj"));
        assert!(puzzle.is_usable("behcli"));
        // a and b share a side
        assert!(!puzzle.is_usable("abd"));
        assert!(!puzzle.is_usable("adz"));
        assert!(!puzzle.is_usable(""));
    }
}
