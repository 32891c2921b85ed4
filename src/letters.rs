//! Letters and compact sets of letters.

use std::ops::{BitOr, BitOrAssign, Sub};

/// A lowercase ascii letter, `b'a'..=b'z'`.
pub type Letter = u8;

/// Number of distinct letters.
pub const ALPHABET: usize = 26;

/// Position of a letter in the alphabet, if it is a lowercase ascii letter.
pub fn index(letter: Letter) -> Option<usize> {
    letter
        .is_ascii_lowercase()
        .then(|| (letter - b'a') as usize)
}

/// A set of lowercase letters packed into the low 26 bits of a `u32`.
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct LetterSet(u32);

const _: () = assert!(
    ALPHABET <= u32::BITS as usize,
    "Every letter must have a bit in the set"
);

impl LetterSet {
    pub const fn empty() -> Self {
        Self(0)
    }

    /// Collects the letters of a word, or `None` if it has a character outside `a..=z`.
    pub fn from_word(word: &str) -> Option<Self> {
        word.bytes()
            .try_fold(Self::empty(), |set, byte| Some(set | Self::single(byte)?))
    }

    fn single(letter: Letter) -> Option<Self> {
        index(letter).map(|i| Self(1 << i))
    }

    /// Adds a letter, returning `false` if it was already present.
    pub fn insert(&mut self, letter: Letter) -> bool {
        debug_assert!(letter.is_ascii_lowercase(), "Only lowercase letters fit in a set");
        let Some(bit) = Self::single(letter) else {
            return false;
        };
        let fresh = (*self & bit).is_empty();
        *self |= bit;
        fresh
    }

    pub fn contains(self, letter: Letter) -> bool {
        Self::single(letter).is_some_and(|bit| !(self & bit).is_empty())
    }

    pub const fn union(self, other: Self) -> Self {
        Self(self.0 | other.0)
    }

    /// Letters in `self` that are not in `other`.
    pub const fn difference(self, other: Self) -> Self {
        Self(self.0 & !other.0)
    }

    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    pub const fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    pub const fn is_superset(self, other: Self) -> bool {
        other.0 & !self.0 == 0
    }

    /// Letters in alphabetical order.
    pub fn iter(self) -> impl Iterator<Item = Letter> {
        (0..ALPHABET as u8).filter(move |i| self.0 & (1u32 << i) != 0).map(|i| b'a' + i)
    }
}

impl std::ops::BitAnd for LetterSet {
    type Output = Self;
    fn bitand(self, rhs: Self) -> Self::Output {
        Self(self.0 & rhs.0)
    }
}

impl BitOr for LetterSet {
    type Output = Self;
    fn bitor(self, rhs: Self) -> Self::Output {
        self.union(rhs)
    }
}

impl BitOrAssign for LetterSet {
    fn bitor_assign(&mut self, rhs: Self) {
        *self = self.union(rhs);
    }
}

impl Sub for LetterSet {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self::Output {
        self.difference(rhs)
    }
}

impl FromIterator<Letter> for LetterSet {
    fn from_iter<T: IntoIterator<Item = Letter>>(iter: T) -> Self {
        let mut set = Self::empty();
        for letter in iter {
            set.insert(letter);
        }
        set
    }
}

impl std::fmt::Display for LetterSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for letter in self.iter() {
            write!(f, "{}", letter as char)?;
        }
        Ok(())
    }
}

impl std::fmt::Debug for LetterSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{{{self}}}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn duplicates_collapse() {
        let set = LetterSet::from_word("behcli").unwrap();
        assert_eq!(set.len(), 6);
        assert_eq!(LetterSet::from_word("aabba").unwrap().len(), 2);
        assert_eq!(set.to_string(), "bcehil");
    }

    #[test]
    fn rejects_non_letters() {
        assert_eq!(LetterSet::from_word("don't"), None);
        assert_eq!(LetterSet::from_word("Abc"), None);
        assert_eq!(LetterSet::from_word(""), Some(LetterSet::empty()));
    }

    #[test]
    fn set_operations() {
        let a = LetterSet::from_word("adgj").unwrap();
        let b = LetterSet::from_word("jfkb").unwrap();
        assert_eq!((a | b).len(), 7);
        assert_eq!((b - a).to_string(), "bfk");
        assert!((a | b).is_superset(a));
        assert!(!a.is_superset(b));
        assert!(a.contains(b'g'));
        assert!(!a.contains(b'z'));

        let mut c = LetterSet::empty();
        assert!(c.insert(b'q'));
        assert!(!c.insert(b'q'));
        assert_eq!(c.iter().collect::<Vec<_>>(), vec![b'q']);
    }
}
