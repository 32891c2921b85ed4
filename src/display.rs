//! Picking and rendering chains for people to read.

use itertools::Itertools;
use rand::{SeedableRng, rngs::StdRng, seq::SliceRandom};

use crate::solver::{Chain, Solution};

/// Seed used when the caller has no preference.
pub const DEFAULT_SEED: u64 = 42;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub struct Display {
    /// Every word of an edge rather than the first
    pub alternatives: bool,
    /// Number of literal word sequences behind the chain
    pub count: bool,
}

impl Solution {
    /// Up to `n` chains in an order shuffled by `seed`.
    ///
    /// The same seed always picks the same chains from the same solution.
    pub fn sample(&self, n: usize, seed: u64) -> Vec<&Chain> {
        let mut chains = self.chains.iter().collect_vec();
        chains.shuffle(&mut StdRng::seed_from_u64(seed));
        chains.truncate(n);
        chains
    }

    /// Every literal word sequence a chain stands for, without collecting them up front.
    pub fn literal_chains<'s>(
        &'s self,
        chain: &'s Chain,
    ) -> impl Iterator<Item = Vec<&'s str>> + 's {
        self.edges(chain)
            .map(|edge| edge.words().iter().map(String::as_str))
            .multi_cartesian_product()
    }

    pub fn display<'s>(&'s self, chain: &'s Chain, flags: Display) -> ChainDisplay<'s> {
        ChainDisplay(self, chain, flags)
    }
}

pub struct ChainDisplay<'s>(&'s Solution, &'s Chain, Display);

impl std::fmt::Display for ChainDisplay<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let ChainDisplay(solution, chain, flags) = *self;
        let words = solution
            .edges(chain)
            .map(|edge| {
                if flags.alternatives {
                    edge.words().join("|")
                } else {
                    edge.words().first().cloned().unwrap_or_default()
                }
            })
            .join("-");
        f.write_str(&words)?;
        if flags.count {
            match solution.literal_count(chain) {
                Some(count) => write!(f, "\t@{count}")?,
                None => f.write_str("\t@overflow")?,
            }
        }
        Ok(())
    }
}
