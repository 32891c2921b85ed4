use itertools::Itertools;

use super::*;
use crate::puzzle::Puzzle;

fn puzzle() -> Puzzle {
    Puzzle::parse("abc-def-ghi-jkl").unwrap()
}

#[test]
fn single() {
    let mut trie = Trie::new();
    assert!(trie.insert("abcde"));
    assert!(trie.contains("abcde"));
    assert!(!trie.contains("abcd"));
    assert_eq!(trie.len(), 1);
}

#[test]
fn multiple_overlapping() {
    let keys = vec!["abc", "abcd", "abcde"];
    let trie: Trie = keys.iter().collect();

    for key in keys {
        assert!(trie.contains(key));
    }
    assert!(!trie.contains("ab"));
    assert_eq!(trie.len(), 3);
}

#[test]
fn insert_is_idempotent() {
    let mut trie = Trie::new();
    trie.insert("word");
    let once = trie.clone();
    trie.insert("word");
    assert_eq!(trie, once);
    assert_eq!(trie.len(), 1);
}

#[test]
fn rejects_non_letters() {
    let mut trie = Trie::new();
    assert!(!trie.insert(""));
    assert!(!trie.insert("don't"));
    assert!(!trie.insert("Capital"));
    assert!(trie.is_empty());
}

#[test]
fn usable_words_follow_sides() {
    let trie: Trie = ["adgj", "jfkb", "behcli", "abc", "adz", "hello"]
        .into_iter()
        .collect();
    let puzzle = puzzle();
    let words = trie.usable_words(&puzzle).sorted().collect_vec();
    assert_eq!(words, vec!["adgj", "behcli", "jfkb"]);
}

#[test]
fn usable_prefixes_are_independent() {
    let trie: Trie = ["ad", "adg", "adgj", "adgjb"].into_iter().collect();
    let puzzle = puzzle();
    let words = trie.usable_words(&puzzle).sorted().collect_vec();
    assert_eq!(words, vec!["ad", "adg", "adgj", "adgjb"]);
}

#[test]
fn unusable_prefix_hides_extensions() {
    // "ab" breaks the side rule so nothing below it is reachable.
    let trie: Trie = ["abd", "abdg", "ad"].into_iter().collect();
    let puzzle = puzzle();
    assert_eq!(trie.usable_words(&puzzle).collect_vec(), vec!["ad"]);
}

#[test]
fn usable_words_are_distinct_and_valid() {
    let trie: Trie = ["ad", "da", "adad", "dada", "ajkl", "gig", "hihi", "lkj", "hal"]
        .into_iter()
        .collect();
    let puzzle = puzzle();
    let words = trie.usable_words(&puzzle).collect_vec();
    assert_eq!(words.len(), words.iter().unique().count());
    for word in &words {
        assert!(trie.contains(word));
        assert!(puzzle.is_usable(word), "{word} is not playable");
    }
    assert_eq!(
        words.into_iter().sorted().collect_vec(),
        vec!["ad", "adad", "da", "dada", "hal"]
    );
}

#[test]
fn empty_trie_has_no_words() {
    let trie = Trie::new();
    assert_eq!(trie.usable_words(&puzzle()).count(), 0);
}
