use smallvec::{SmallVec, smallvec};

use super::Trie;
use crate::puzzle::{LETTERS, Puzzle, SIDE_LETTERS};

/// Depth-first walk of the trie restricted to a puzzle's letters.
///
/// Yields every dictionary word built only from board letters where no two
/// consecutive letters come from the same side. A word and its extensions are
/// yielded separately. From any node at most nine letters are tried, so the walk
/// only ever touches the part of the trie spelled with the board's alphabet.
#[derive(Debug)]
pub struct UsableWords<'t, 'p> {
    puzzle: &'p Puzzle,
    heads: SmallVec<[Head<'t>; 16]>,
    word: String,
}

#[derive(Debug)]
struct Head<'t> {
    node: &'t Trie,
    /// Side of the letter that led here, `None` at the root.
    side: Option<usize>,
    /// Next board position (`side * 3 + letter`) to try as a child.
    next: usize,
}

impl<'t, 'p> UsableWords<'t, 'p> {
    pub(super) fn new(trie: &'t Trie, puzzle: &'p Puzzle) -> Self {
        Self {
            puzzle,
            heads: smallvec![Head {
                node: trie,
                side: None,
                next: 0,
            }],
            word: String::new(),
        }
    }
}

impl Iterator for UsableWords<'_, '_> {
    type Item = String;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(head) = self.heads.last_mut() {
            if head.next >= LETTERS {
                self.heads.pop();
                self.word.pop();
                continue;
            }

            let position = head.next;
            let side = position / SIDE_LETTERS;
            if head.side == Some(side) {
                head.next = (side + 1) * SIDE_LETTERS;
                continue;
            }
            head.next += 1;

            let letter = self.puzzle.sides()[side][position % SIDE_LETTERS];
            let Some(child) = head.node.child(letter) else {
                continue;
            };
            self.heads.push(Head {
                node: child,
                side: Some(side),
                next: 0,
            });
            self.word.push(letter as char);
            if child.is_terminal() {
                return Some(self.word.clone());
            }
        }
        None
    }
}
