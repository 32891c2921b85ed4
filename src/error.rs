use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Invalid puzzle format: {0}")]
    PuzzleFormat(String),
    #[error("The puzzle contains a character that is not a letter: '{0}'")]
    PuzzleLetter(char),
    #[error("The letter '{0}' appears more than once in the puzzle")]
    DuplicateLetter(char),
    #[error("Invalid word count range: {min}..={max}")]
    InvalidRange { min: usize, max: usize },
    #[error("Unable to read the dictionary: {0}")]
    Dictionary(#[from] std::io::Error),
    #[error("The search explored more than {0} nodes without finishing")]
    SearchBudget(u64),
    #[error("The number of solutions does not fit in a 64-bit counter")]
    CountOverflow,
}

pub type Result<T> = std::result::Result<T, Error>;
