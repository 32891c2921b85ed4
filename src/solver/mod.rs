mod index;
mod search;
mod stats;

pub use index::{Edge, EdgeId, WordIndex};
pub use search::Chain;
pub use stats::SolveStats;

use std::{io::Read, time::Instant};

use log::{debug, info};

use crate::{Error, Result, dictionary, puzzle::Puzzle, trie::Trie};
use search::ChainSearch;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SolveConfig {
    pub(crate) min_words: usize,
    pub(crate) max_words: usize,
    pub(crate) budget: Option<u64>,
}

impl Default for SolveConfig {
    fn default() -> Self {
        Self {
            min_words: 3,
            max_words: 6,
            budget: None,
        }
    }
}

impl SolveConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Accept chains of `min..=max` words.
    pub fn words(mut self, min: usize, max: usize) -> Self {
        self.min_words = min;
        self.max_words = max;
        self
    }

    /// Give up after visiting this many chains.
    pub fn budget(mut self, nodes: u64) -> Self {
        self.budget = Some(nodes);
        self
    }

    pub fn min_words(&self) -> usize {
        self.min_words
    }

    pub fn max_words(&self) -> usize {
        self.max_words
    }

    fn validate(&self) -> Result<()> {
        if self.min_words == 0 || self.min_words > self.max_words {
            Err(Error::InvalidRange {
                min: self.min_words,
                max: self.max_words,
            })
        } else {
            Ok(())
        }
    }
}

/// Everything found for one puzzle.
#[derive(Debug, Clone)]
pub struct Solution {
    pub(crate) puzzle: Puzzle,
    pub(crate) length: usize,
    pub(crate) count: u64,
    pub(crate) index: WordIndex,
    pub(crate) chains: Vec<Chain>,
    pub(crate) stats: SolveStats,
}

impl Solution {
    pub fn puzzle(&self) -> &Puzzle {
        &self.puzzle
    }

    /// Chain length the search stopped at.
    pub fn length(&self) -> usize {
        self.length
    }

    /// Number of literal word sequences across every chain.
    pub fn count(&self) -> u64 {
        self.count
    }

    pub fn chains(&self) -> &[Chain] {
        &self.chains
    }

    pub fn is_empty(&self) -> bool {
        self.chains.is_empty()
    }

    pub fn index(&self) -> &WordIndex {
        &self.index
    }

    pub fn stats(&self) -> &SolveStats {
        &self.stats
    }

    /// The edges of a chain returned by this solution.
    pub fn edges<'s>(&'s self, chain: &'s Chain) -> impl Iterator<Item = &'s Edge> + 's {
        chain.edges().iter().map(|&id| self.index.edge(id))
    }

    /// Literal word sequences a chain stands for, or `None` if that overflows.
    pub fn literal_count(&self, chain: &Chain) -> Option<u64> {
        literal_count(&self.index, chain)
    }
}

fn literal_count(index: &WordIndex, chain: &Chain) -> Option<u64> {
    chain
        .edges()
        .iter()
        .try_fold(1u64, |n, &id| n.checked_mul(index.edge(id).words().len() as u64))
}

fn total_count(index: &WordIndex, chains: &[Chain]) -> Result<u64> {
    chains
        .iter()
        .try_fold(0u64, |total, chain| {
            total.checked_add(literal_count(index, chain)?)
        })
        .ok_or(Error::CountOverflow)
}

/// A dictionary ready to solve any number of puzzles.
///
/// The trie is never modified after construction, so a `Solver` can be shared
/// between threads solving different puzzles.
#[derive(Debug, Clone, Default)]
pub struct Solver {
    trie: Trie,
}

impl Solver {
    pub fn new(trie: Trie) -> Self {
        Self { trie }
    }

    pub fn from_reader(rdr: impl Read) -> Result<Self> {
        dictionary::from_reader(rdr).map(Self::new)
    }

    pub fn from_words<S: AsRef<str>>(words: impl IntoIterator<Item = S>) -> Self {
        Self::new(dictionary::from_words(words))
    }

    pub fn trie(&self) -> &Trie {
        &self.trie
    }

    /// Parses the puzzle and solves it.
    pub fn solve(&self, puzzle: &str, config: &SolveConfig) -> Result<Solution> {
        let puzzle = Puzzle::parse(puzzle)?;
        self.solve_puzzle(puzzle, config)
    }

    pub fn solve_puzzle(&self, puzzle: Puzzle, config: &SolveConfig) -> Result<Solution> {
        config.validate()?;

        let start = Instant::now();
        let index = WordIndex::build(self.trie.usable_words(&puzzle));
        info!(
            "{} usable words enumerated in {:?} for puzzle: {puzzle}",
            index.word_count(),
            start.elapsed()
        );

        let mut search = ChainSearch::new(&index, puzzle.letters()).budget(config.budget);
        let (length, chains) = search.deepen(config.min_words, config.max_words)?;
        let count = total_count(&index, &chains)?;
        let stats = SolveStats {
            usable_words: index.word_count(),
            edges: index.len(),
            depths: (config.min_words..=length).collect(),
            explored: search.explored(),
            chains: chains.len(),
        };
        debug!("{count} solutions in {length} words for puzzle: {puzzle}");

        Ok(Solution {
            puzzle,
            length,
            count,
            index,
            chains,
            stats,
        })
    }
}

/// Solves a puzzle against a word list in one go.
pub fn solve<S: AsRef<str>>(
    puzzle: &str,
    words: impl IntoIterator<Item = S>,
    config: &SolveConfig,
) -> Result<Solution> {
    let puzzle = Puzzle::parse(puzzle)?;
    // Reject a bad range before building the trie; `solve_puzzle` checks it again.
    config.validate()?;
    Solver::from_words(words).solve_puzzle(puzzle, config)
}
