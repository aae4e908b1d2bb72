
use std::collections::HashSet;

use clap::ValueEnum;

use crate::dictionary::{PronunciationDict, Word, WordSet};

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq)]
pub enum StripMode {
  All,
  Start,
  End,
  Both
}

// Strips the given characters from the word strings themselves. A word whose stripped
// form already exists has its pronunciations unioned into that entry; a word stripped
// down to nothing is dropped and reported. Returns (removed words, changed count).
pub fn remove_symbols_from_words(dictionary: &mut PronunciationDict, symbols: &HashSet<char>, mode: StripMode) -> (WordSet, usize) {
  let mut removed_words = WordSet::new();
  let mut changed_counter = 0;

  let all_words: Vec<Word> = dictionary.keys().cloned().collect();
  for word in all_words {
    let new_word = strip_word(&word, symbols, mode);
    if new_word == word {
      continue;
    }

    let pronunciations = dictionary.remove(&word).unwrap();
    if new_word.is_empty() {
      removed_words.insert(word);
    } else {
      dictionary.union_into(new_word, &pronunciations);
    }
    changed_counter += 1;
  }

  (removed_words, changed_counter)
}

fn strip_word(word: &str, symbols: &HashSet<char>, mode: StripMode) -> Word {
  match mode {
    StripMode::All => word.chars().filter(|c| !symbols.contains(c)).collect(),
    StripMode::Start => word.trim_start_matches(|c| symbols.contains(&c)).to_owned(),
    StripMode::End => word.trim_end_matches(|c| symbols.contains(&c)).to_owned(),
    StripMode::Both => word.trim_matches(|c| symbols.contains(&c)).to_owned()
  }
}
