use std::collections::{BTreeMap, HashMap};

use log::debug;

use crate::letters::{self, ALPHABET, Letter, LetterSet};

/// Position of an [`Edge`] in its [`WordIndex`].
pub type EdgeId = usize;

/// Interchangeable words: same first letter, same last letter, same letters used.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Edge {
    first: Letter,
    last: Letter,
    letters: LetterSet,
    words: Vec<String>,
}

impl Edge {
    pub fn first(&self) -> Letter {
        self.first
    }

    pub fn last(&self) -> Letter {
        self.last
    }

    pub fn letters(&self) -> LetterSet {
        self.letters
    }

    /// The literal words, in the order they were indexed. Never empty.
    pub fn words(&self) -> &[String] {
        &self.words
    }
}

/// Usable words of one puzzle grouped into edges and indexed by their end letters.
#[derive(Debug, Clone, Default)]
pub struct WordIndex {
    edges: Vec<Edge>,
    pairs: BTreeMap<(Letter, Letter), Vec<EdgeId>>,
    /// Edges by first letter, ordered by last letter.
    departing: [Vec<EdgeId>; ALPHABET],
    words: usize,
}

impl WordIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Groups words by `(first, last, letters)`. Empty words and words with
    /// characters outside `a..=z` are ignored.
    pub fn build(words: impl IntoIterator<Item = String>) -> Self {
        let mut index = Self::new();
        let mut groups: HashMap<(Letter, Letter, LetterSet), EdgeId> = HashMap::new();

        for word in words {
            let (Some(&first), Some(&last)) = (word.as_bytes().first(), word.as_bytes().last())
            else {
                continue;
            };
            let Some(letters) = LetterSet::from_word(&word) else {
                continue;
            };
            let id = *groups.entry((first, last, letters)).or_insert_with(|| {
                index.edges.push(Edge {
                    first,
                    last,
                    letters,
                    words: Vec::new(),
                });
                index.edges.len() - 1
            });
            index.edges[id].words.push(word);
            index.words += 1;
        }

        for (id, edge) in index.edges.iter().enumerate() {
            index
                .pairs
                .entry((edge.first, edge.last))
                .or_default()
                .push(id);
        }
        for (&(first, _), ids) in &index.pairs {
            if let Some(i) = letters::index(first) {
                index.departing[i].extend(ids);
            }
        }

        debug!(
            "indexed {} words into {} edges over {} letter pairs",
            index.words,
            index.edges.len(),
            index.pairs.len()
        );
        index
    }

    pub fn edge(&self, id: EdgeId) -> &Edge {
        &self.edges[id]
    }

    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Letter pairs with their edges, ordered by first then last letter.
    pub fn pairs(&self) -> impl Iterator<Item = ((Letter, Letter), &[EdgeId])> + '_ {
        self.pairs.iter().map(|(&pair, ids)| (pair, ids.as_slice()))
    }

    pub fn between(&self, first: Letter, last: Letter) -> &[EdgeId] {
        self.pairs
            .get(&(first, last))
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Edges whose words start with `letter`.
    pub fn departing(&self, letter: Letter) -> &[EdgeId] {
        letters::index(letter)
            .map(|i| self.departing[i].as_slice())
            .unwrap_or_default()
    }

    /// Number of edges.
    pub fn len(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    /// Number of words across every edge.
    pub fn word_count(&self) -> usize {
        self.words
    }
}
