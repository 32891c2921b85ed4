use super::{Trie, iter::UsableWords};
use crate::{
    letters::{self, Letter},
    puzzle::Puzzle,
};

impl Trie {
    pub fn new() -> Self {
        Trie::default()
    }

    /// Adds a lowercase word, returning `false` if it is empty or has a character outside `a..=z`.
    ///
    /// Inserting the same word again leaves the trie unchanged.
    pub fn insert(&mut self, word: &str) -> bool {
        if word.is_empty() || !word.bytes().all(|byte| byte.is_ascii_lowercase()) {
            return false;
        }
        let mut current_node = self;
        for letter in word.bytes() {
            current_node = current_node.children[(letter - b'a') as usize]
                .get_or_insert_with(Box::default);
        }
        current_node.terminal = true;
        true
    }

    pub fn contains(&self, word: &str) -> bool {
        let mut current_node = self;
        for letter in word.bytes() {
            match current_node.child(letter) {
                Some(next) => current_node = next,
                None => return false,
            }
        }
        current_node.terminal
    }

    pub fn child(&self, letter: Letter) -> Option<&Trie> {
        letters::index(letter).and_then(|i| self.children[i].as_deref())
    }

    pub fn is_terminal(&self) -> bool {
        self.terminal
    }

    /// Number of distinct words.
    pub fn len(&self) -> usize {
        let mut count = 0;
        let mut stack = vec![self];
        while let Some(node) = stack.pop() {
            count += usize::from(node.terminal);
            stack.extend(node.children.iter().flatten().map(Box::as_ref));
        }
        count
    }

    pub fn is_empty(&self) -> bool {
        !self.terminal && self.children.iter().all(Option::is_none)
    }

    /// Every word that can be played on the puzzle, see [`UsableWords`].
    pub fn usable_words<'t, 'p>(&'t self, puzzle: &'p Puzzle) -> UsableWords<'t, 'p> {
        UsableWords::new(self, puzzle)
    }
}

impl<S: AsRef<str>> FromIterator<S> for Trie {
    fn from_iter<T: IntoIterator<Item = S>>(iter: T) -> Self {
        let mut trie = Trie::new();
        for word in iter {
            trie.insert(word.as_ref());
        }
        trie
    }
}
