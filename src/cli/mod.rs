use clap::{Parser, ValueEnum};

use crate::{
    SolveConfig,
    display::{DEFAULT_SEED, Display},
};

/// Word list used when none is given.
pub const DEFAULT_DICTIONARY: &str = "words.txt";

/// Finds the shortest word chains that solve a Letter Boxed puzzle.
#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// The four sides of the puzzle, e.g. `abc-def-ghi-jkl`.
    /// Use `-` to read them from stdin, one side per line.
    pub puzzle: String,

    /// Word list with one word per line, or `-` for stdin.
    /// Defaults to `words.txt` in the working directory.
    #[arg(short, long, value_name = "FILE")]
    pub dictionary: Option<clio::Input>,

    /// Fewest words a solution may use.
    #[arg(long, default_value_t = 3)]
    pub min: usize,
    /// Most words a solution may use.
    #[arg(long, default_value_t = 6)]
    pub max: usize,
    /// Give up after visiting this many partial chains.
    #[arg(short, long)]
    pub budget: Option<u64>,

    /// Number of chains to print.
    #[arg(short = 'n', long, default_value_t = 20)]
    pub sample: usize,
    /// Print every chain in the order they were found instead of a sample.
    #[arg(short, long, conflicts_with_all = ["sample", "seed"])]
    pub all: bool,
    /// Seed for picking the sample.
    #[arg(short, long, default_value_t = DEFAULT_SEED)]
    pub seed: u64,

    /// Show every word each step of a chain could use.
    #[arg(short = 'w', long)]
    pub alternatives: bool,
    /// Show how many word sequences each chain stands for.
    #[arg(short, long)]
    pub count: bool,
    #[arg(short, long, value_enum, default_value_t = Format::Human)]
    pub format: Format,

    /// Log more, can be repeated.
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Format {
    /// Print the solutions in a human-readable format.
    #[default]
    Human,
    /// Print the solutions in a machine-readable format (JSON).
    Json,
}

impl Cli {
    pub fn config(&self) -> SolveConfig {
        let config = SolveConfig::new().words(self.min, self.max);
        match self.budget {
            Some(budget) => config.budget(budget),
            None => config,
        }
    }

    pub fn display(&self) -> Display {
        Display {
            alternatives: self.alternatives,
            count: self.count,
        }
    }

    /// Default log filter for the verbosity flags.
    pub fn log_level(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }
}
