//! Solves Letter Boxed puzzles
//!
//! Words are chained so each starts with the letter the previous one ended on,
//! and the chain has to use all twelve letters on the board.
//!
//! ```no_run
//! use letterbox::{SolveConfig, Solver};
//!
//! let solver = Solver::from_reader(std::fs::File::open("words.txt")?)?;
//! let solution = solver.solve("abc-def-ghi-jkl", &SolveConfig::new())?;
//! println!("{} solutions in {} words", solution.count(), solution.length());
//! # Ok::<(), letterbox::Error>(())
//! ```

pub mod dictionary;
pub mod display;
mod error;
pub mod letters;
pub mod puzzle;
pub mod solver;
pub mod trie;

#[cfg(feature = "cli")]
pub mod cli;

pub use error::{Error, Result};
pub use puzzle::Puzzle;
pub use solver::{Chain, Edge, SolveConfig, SolveStats, Solution, Solver, solve};
pub use trie::Trie;
