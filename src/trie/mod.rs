pub mod iter;
mod node;
#[cfg(test)]
mod test;

use crate::letters::ALPHABET;

const CHILDREN: usize = ALPHABET;

/// A prefix tree of lowercase words.
///
/// Each node owns its children, indexed by letter. The letter a node stands for is
/// the slot it occupies in its parent, so spelling a word means carrying the path
/// down from the root.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Trie {
    /// A dictionary word ends here.
    terminal: bool,
    children: [Option<Box<Trie>>; CHILDREN],
}
