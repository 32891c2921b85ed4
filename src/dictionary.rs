//! Loading word lists into a [`Trie`].

use std::io::{BufRead, BufReader, Read};

use log::{debug, info, trace};

use crate::{Result, trie::Trie};

fn normalise(line: &str) -> String {
    line.trim().to_lowercase()
}

/// Reads one word per line. Blank lines and words with characters outside `a..=z`,
/// including lines that are not valid UTF-8, are skipped.
pub fn from_reader(rdr: impl Read) -> Result<Trie> {
    let start = std::time::Instant::now();
    let mut trie = Trie::new();
    let mut skipped = 0usize;
    for line in BufReader::new(rdr).split(b'\n') {
        let line = line?;
        let Ok(line) = std::str::from_utf8(&line) else {
            trace!("skipping dictionary entry {:?}", String::from_utf8_lossy(&line));
            skipped += 1;
            continue;
        };
        let word = normalise(line);
        if word.is_empty() {
            continue;
        }
        if !trie.insert(&word) {
            trace!("skipping dictionary entry '{word}'");
            skipped += 1;
        }
    }
    debug!("skipped {skipped} dictionary entries");
    info!("trie built in {:?}", start.elapsed());
    Ok(trie)
}

/// Builds a trie from words already in memory, normalising them like [`from_reader`].
pub fn from_words<S: AsRef<str>>(words: impl IntoIterator<Item = S>) -> Trie {
    words
        .into_iter()
        .map(|word| normalise(word.as_ref()))
        .collect()
}

pub mod file {
    use std::{fs::File, path::Path};

    use crate::{Result, trie::Trie};

    pub fn open(path: impl AsRef<Path>) -> Result<Trie> {
        super::from_reader(File::open(path)?)
    }
}
