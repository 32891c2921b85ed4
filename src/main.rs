use std::io::{Read, Write};

use clap::Parser;
use env_logger::Env;
use letterbox::{
    Chain, SolveStats, Solution, Solver,
    cli::{Cli, DEFAULT_DICTIONARY, Format},
    dictionary,
};
use log::debug;
use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Error)]
enum Error {
    #[error(transparent)]
    Solve(#[from] letterbox::Error),
    #[error("Unable to read the puzzle: {0}")]
    Puzzle(std::io::Error),
    #[error("The puzzle and the dictionary cannot both be read from stdin")]
    BothStdin,
    #[error("Unable to write the solutions: {0}")]
    Output(#[from] std::io::Error),
    #[error("Unable to write the solutions: {0}")]
    Json(#[from] serde_json::Error),
}

fn main() {
    if let Err(err) = entry() {
        eprintln!("{}", err);
        std::process::exit(1)
    }
}

fn entry() -> Result<(), Error> {
    let mut cli = Cli::parse();
    env_logger::Builder::from_env(Env::default().default_filter_or(cli.log_level())).init();
    debug!("Command line options: {:?}", cli);

    let puzzle = if cli.puzzle == "-" {
        if cli.dictionary.as_ref().is_some_and(|input| input.is_std()) {
            return Err(Error::BothStdin);
        }
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .map_err(Error::Puzzle)?;
        buf
    } else {
        cli.puzzle.clone()
    };

    let trie = match cli.dictionary.as_mut() {
        Some(input) => dictionary::from_reader(input.lock())?,
        None => dictionary::file::open(DEFAULT_DICTIONARY)?,
    };
    let solution = Solver::new(trie).solve(&puzzle, &cli.config())?;

    let chains = if cli.all {
        solution.chains().iter().collect()
    } else {
        solution.sample(cli.sample, cli.seed)
    };

    let io = std::io::stdout();
    let mut f = io.lock();
    match cli.format {
        Format::Human => write_human(&cli, &solution, &chains, &mut f)?,
        Format::Json => {
            serde_json::to_writer_pretty(&mut f, &Report::new(&solution, &chains))?;
            writeln!(f)?;
        }
    }
    Ok(())
}

fn write_human(
    cli: &Cli,
    solution: &Solution,
    chains: &[&Chain],
    mut f: impl Write,
) -> Result<(), std::io::Error> {
    writeln!(f, "Letters: {}", solution.puzzle())?;
    if solution.is_empty() {
        return writeln!(f, "No solution found in up to {} words", solution.length());
    }
    writeln!(
        f,
        "Solutions in {} words: {}",
        solution.length(),
        solution.count()
    )?;
    for (i, chain) in chains.iter().enumerate() {
        writeln!(f, "{}. {}", i + 1, solution.display(chain, cli.display()))?;
    }
    Ok(())
}

#[derive(Debug, Serialize)]
struct Report<'s> {
    puzzle: String,
    length: usize,
    count: u64,
    /// Each chain as its steps, each step as every word it could use
    chains: Vec<Vec<&'s [String]>>,
    stats: &'s SolveStats,
}

impl<'s> Report<'s> {
    fn new(solution: &'s Solution, chains: &[&'s Chain]) -> Self {
        Self {
            puzzle: solution.puzzle().to_string(),
            length: solution.length(),
            count: solution.count(),
            chains: chains
                .iter()
                .map(|&chain| solution.edges(chain).map(|edge| edge.words()).collect())
                .collect(),
            stats: solution.stats(),
        }
    }
}
