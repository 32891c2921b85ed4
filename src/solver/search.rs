use std::time::Instant;

use log::{debug, info};
use smallvec::SmallVec;

use super::index::{EdgeId, WordIndex};
use crate::{Error, Result, letters::LetterSet};

/// Edges where each one starts with the letter the previous one ends with.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Chain {
    pub(super) edges: SmallVec<[EdgeId; 6]>,
}

impl Chain {
    /// Ids into the [`WordIndex`] the chain was found in.
    pub fn edges(&self) -> &[EdgeId] {
        &self.edges
    }

    pub fn len(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }
}

#[derive(Debug, Clone, Copy)]
struct Frame {
    edge: EdgeId,
    /// Letters used by this edge and every edge before it.
    covered: LetterSet,
    /// Next departing edge to try.
    next: usize,
}

/// Backtracking search for chains covering a set of letters.
#[derive(Debug)]
pub(crate) struct ChainSearch<'i> {
    index: &'i WordIndex,
    target: LetterSet,
    budget: Option<u64>,
    explored: u64,
}

impl<'i> ChainSearch<'i> {
    pub fn new(index: &'i WordIndex, target: LetterSet) -> Self {
        Self {
            index,
            target,
            budget: None,
            explored: 0,
        }
    }

    /// Stop with [`Error::SearchBudget`] after visiting this many chains.
    pub fn budget(mut self, budget: Option<u64>) -> Self {
        self.budget = budget;
        self
    }

    /// Chains visited so far, over every depth.
    pub fn explored(&self) -> u64 {
        self.explored
    }

    /// Searches each length in `min..=max` until one has solutions.
    ///
    /// Returns the length searched last with its chains, which are empty only if
    /// that length is `max`.
    pub fn deepen(&mut self, min: usize, max: usize) -> Result<(usize, Vec<Chain>)> {
        for depth in min..=max {
            let start = Instant::now();
            let chains = self.exhaust(depth)?;
            info!(
                "search at depth {depth} found {} chains in {:?}",
                chains.len(),
                start.elapsed()
            );
            if !chains.is_empty() {
                return Ok((depth, chains));
            }
        }
        Ok((max, Vec::new()))
    }

    /// Every chain of at most `depth` edges that covers the target.
    ///
    /// An edge is only appended if it adds a letter the chain is missing, and a
    /// chain stops growing as soon as it covers the target.
    pub fn exhaust(&mut self, depth: usize) -> Result<Vec<Chain>> {
        let mut found = Vec::new();
        let mut frames: SmallVec<[Frame; 8]> = SmallVec::new();
        if depth == 0 {
            return Ok(found);
        }

        let index = self.index;
        for (_, seeds) in index.pairs() {
            for &seed in seeds {
                let letters = index.edge(seed).letters();
                self.visit(&mut frames, &mut found, depth, seed, letters)?;

                while let Some(frame) = frames.last_mut() {
                    let tail = index.edge(frame.edge).last();
                    let Some(&next) = index.departing(tail).get(frame.next) else {
                        frames.pop();
                        continue;
                    };
                    frame.next += 1;

                    let covered = frame.covered;
                    let letters = index.edge(next).letters();
                    if (letters - covered).is_empty() {
                        continue;
                    }
                    self.visit(&mut frames, &mut found, depth, next, covered | letters)?;
                }
            }
        }
        debug!("{} chains visited so far", self.explored);
        Ok(found)
    }

    fn visit(
        &mut self,
        frames: &mut SmallVec<[Frame; 8]>,
        found: &mut Vec<Chain>,
        depth: usize,
        edge: EdgeId,
        covered: LetterSet,
    ) -> Result<()> {
        self.explored += 1;
        if let Some(budget) = self.budget {
            if self.explored > budget {
                return Err(Error::SearchBudget(budget));
            }
        }

        if covered.is_superset(self.target) {
            let edges = frames.iter().map(|frame| frame.edge).chain([edge]).collect();
            found.push(Chain { edges });
        } else if frames.len() + 1 < depth {
            frames.push(Frame {
                edge,
                covered,
                next: 0,
            });
        }
        Ok(())
    }
}
