
use std::collections::{HashMap, HashSet};

pub type Symbol = String;
pub type Word = String;
pub type Pronunciation = Vec<Symbol>;

#[derive(Clone, Debug, PartialEq, Default)]
pub struct Pronunciations {
  entries: Vec<(Pronunciation, f64)>
}

impl Pronunciations {
  pub fn new() -> Pronunciations {
    Pronunciations { entries: Vec::new() }
  }

  pub fn from_entries(entries: Vec<(Pronunciation, f64)>) -> Pronunciations {
    let mut result = Pronunciations::new();
    for (pronunciation, weight) in entries {
      result.insert_new(pronunciation, weight);
    }
    result
  }

  // First-seen weight wins; a pronunciation that is already present is not overwritten.
  pub fn insert_new(&mut self, pronunciation: Pronunciation, weight: f64) {
    if !self.contains(&pronunciation) {
      self.entries.push((pronunciation, weight));
    }
  }

  pub fn extend_new(&mut self, other: &Pronunciations) {
    for (pronunciation, weight) in &other.entries {
      self.insert_new(pronunciation.clone(), *weight);
    }
  }

  pub fn contains(&self, pronunciation: &[Symbol]) -> bool {
    self.entries.iter().any(|(p, _)| p == pronunciation)
  }

  pub fn get(&self, pronunciation: &[Symbol]) -> Option<f64> {
    self.entries.iter().find(|(p, _)| p == pronunciation).map(|(_, w)| *w)
  }

  pub fn iter(&self) -> impl Iterator<Item = &(Pronunciation, f64)> {
    self.entries.iter()
  }

  pub fn len(&self) -> usize {
    self.entries.len()
  }

  pub fn is_empty(&self) -> bool {
    self.entries.is_empty()
  }
}

#[derive(Clone, Debug, Default)]
pub struct PronunciationDict {
  entries: Vec<(Word, Pronunciations)>,
  index: HashMap<Word, usize>
}

impl PronunciationDict {
  pub fn new() -> PronunciationDict {
    PronunciationDict { entries: Vec::new(), index: HashMap::new() }
  }

  pub fn insert_new(&mut self, word: Word, pronunciations: Pronunciations) {
    if self.index.contains_key(&word) {
      panic!("Duplicate word: {}", word);
    }
    self.index.insert(word.clone(), self.entries.len());
    self.entries.push((word, pronunciations));
  }

  // Replaces the pronunciations of an existing word in place, or appends a new entry.
  pub fn set(&mut self, word: Word, pronunciations: Pronunciations) {
    match self.index.get(&word) {
      Some(&i) => self.entries[i].1 = pronunciations,
      None => self.insert_new(word, pronunciations)
    }
  }

  // Unions pronunciations into an existing word (first-seen weight wins), or appends a new entry.
  pub fn union_into(&mut self, word: Word, pronunciations: &Pronunciations) {
    match self.index.get(&word) {
      Some(&i) => self.entries[i].1.extend_new(pronunciations),
      None => self.insert_new(word, pronunciations.clone())
    }
  }

  pub fn push_pronunciation(&mut self, word: Word, pronunciation: Pronunciation, weight: f64) {
    match self.index.get(&word) {
      Some(&i) => self.entries[i].1.insert_new(pronunciation, weight),
      None => {
        let mut pronunciations = Pronunciations::new();
        pronunciations.insert_new(pronunciation, weight);
        self.insert_new(word, pronunciations);
      }
    }
  }

  pub fn remove(&mut self, word: &str) -> Option<Pronunciations> {
    let i = *self.index.get(word)?;
    self.index.remove(word);
    let (_, pronunciations) = self.entries.remove(i);
    for position in self.index.values_mut() {
      if *position > i {
        *position -= 1;
      }
    }
    Some(pronunciations)
  }

  pub fn contains(&self, word: &str) -> bool {
    self.index.contains_key(word)
  }

  pub fn get(&self, word: &str) -> Option<&Pronunciations> {
    self.index.get(word).map(|&i| &self.entries[i].1)
  }

  pub fn entry(&self, i: usize) -> (&Word, &Pronunciations) {
    let (word, pronunciations) = &self.entries[i];
    (word, pronunciations)
  }

  pub fn set_at(&mut self, i: usize, pronunciations: Pronunciations) {
    self.entries[i].1 = pronunciations;
  }

  pub fn iter(&self) -> impl Iterator<Item = (&Word, &Pronunciations)> {
    self.entries.iter().map(|(w, p)| (w, p))
  }

  pub fn keys(&self) -> impl Iterator<Item = &Word> {
    self.entries.iter().map(|(w, _)| w)
  }

  pub fn len(&self) -> usize {
    self.entries.len()
  }

  pub fn is_empty(&self) -> bool {
    self.entries.is_empty()
  }
}

impl PartialEq for PronunciationDict {
  fn eq(&self, other: &PronunciationDict) -> bool {
    self.entries == other.entries
  }
}

#[derive(Clone, Debug, Default)]
pub struct WordSet {
  items: Vec<Word>,
  seen: HashSet<Word>
}

impl WordSet {
  pub fn new() -> WordSet {
    WordSet { items: Vec::new(), seen: HashSet::new() }
  }

  pub fn insert(&mut self, word: Word) -> bool {
    if self.seen.contains(&word) {
      return false;
    }
    self.seen.insert(word.clone());
    self.items.push(word);
    true
  }

  pub fn contains(&self, word: &str) -> bool {
    self.seen.contains(word)
  }

  pub fn get(&self, i: usize) -> &str {
    &self.items[i]
  }

  pub fn iter(&self) -> impl Iterator<Item = &Word> {
    self.items.iter()
  }

  pub fn len(&self) -> usize {
    self.items.len()
  }

  pub fn is_empty(&self) -> bool {
    self.items.is_empty()
  }
}

impl FromIterator<Word> for WordSet {
  fn from_iter<I: IntoIterator<Item = Word>>(iter: I) -> WordSet {
    let mut result = WordSet::new();
    for word in iter {
      result.insert(word);
    }
    result
  }
}

impl PartialEq for WordSet {
  fn eq(&self, other: &WordSet) -> bool {
    self.items == other.items
  }
}

pub fn dict_words_to_lower(lookup_dict: &PronunciationDict) -> PronunciationDict {
  let mut result = PronunciationDict::new();
  for (word, pronunciations) in lookup_dict.iter() {
    result.union_into(word.to_lowercase(), pronunciations);
  }
  result
}

pub fn default_punctuation() -> Vec<Symbol> {
  [
    "!", "\"", "#", "$", "%", "&", "'", "(", ")", "*", "+", ",", "-", ".", "/", ":", ";", "<",
    "=", ">", "?", "@", "[", "\\", "]", "{", "}", "~", "`",
    "、", "。", "？", "！", "：", "；", "।", "¿", "¡", "【", "】", "，", "…", "‥", "「", "」",
    "『", "』", "〝", "〟", "″", "⟨", "⟩", "♪", "・", "‹", "›", "«", "»", "～", "′", "“", "”"
  ].iter().map(|s| s.to_string()).collect()
}

#[cfg(test)]
mod tests {
  use super::*;

  fn p(symbols: &[&str]) -> Pronunciation {
    symbols.iter().map(|s| s.to_string()).collect()
  }

  #[test]
  fn insert_new_keeps_first_weight() {
    let mut pronunciations = Pronunciations::new();
    pronunciations.insert_new(p(&["T", "EH0"]), 0.7);
    pronunciations.insert_new(p(&["T", "EH0"]), 0.3);
    pronunciations.insert_new(p(&["T", "EH1"]), 0.0);

    assert_eq!(pronunciations.len(), 2);
    assert_eq!(pronunciations.get(&p(&["T", "EH0"])), Some(0.7));
    assert_eq!(pronunciations.get(&p(&["T", "EH1"])), Some(0.0));
  }

  #[test]
  fn dict_preserves_insertion_order() {
    let mut dict = PronunciationDict::new();
    dict.push_pronunciation("b".to_owned(), p(&["B"]), 1.0);
    dict.push_pronunciation("a".to_owned(), p(&["AH0"]), 1.0);
    dict.push_pronunciation("b".to_owned(), p(&["B", "IY0"]), 2.0);

    let words: Vec<&Word> = dict.keys().collect();
    assert_eq!(words, vec!["b", "a"]);
    assert_eq!(dict.get("b").unwrap().len(), 2);
  }

  #[test]
  #[should_panic(expected = "Duplicate word")]
  fn insert_new_panics_on_duplicate() {
    let mut dict = PronunciationDict::new();
    dict.insert_new("a".to_owned(), Pronunciations::from_entries(vec![(p(&["AH0"]), 1.0)]));
    dict.insert_new("a".to_owned(), Pronunciations::from_entries(vec![(p(&["EY1"]), 1.0)]));
  }

  #[test]
  fn remove_keeps_lookup_consistent() {
    let mut dict = PronunciationDict::new();
    dict.push_pronunciation("a".to_owned(), p(&["AH0"]), 1.0);
    dict.push_pronunciation("b".to_owned(), p(&["B"]), 1.0);
    dict.push_pronunciation("c".to_owned(), p(&["S"]), 1.0);

    let removed = dict.remove("a").unwrap();
    assert_eq!(removed.get(&p(&["AH0"])), Some(1.0));
    assert!(!dict.contains("a"));
    assert_eq!(dict.get("c").unwrap().get(&p(&["S"])), Some(1.0));
    let words: Vec<&Word> = dict.keys().collect();
    assert_eq!(words, vec!["b", "c"]);
  }

  #[test]
  fn word_set_ignores_duplicates() {
    let mut words = WordSet::new();
    assert!(words.insert("one".to_owned()));
    assert!(words.insert("two".to_owned()));
    assert!(!words.insert("one".to_owned()));

    assert_eq!(words.len(), 2);
    assert_eq!(words.get(0), "one");
    assert_eq!(words.get(1), "two");
  }

  #[test]
  fn words_to_lower_unions_colliding_keys() {
    let mut dict = PronunciationDict::new();
    dict.push_pronunciation("Test".to_owned(), p(&["T", "EH0"]), 0.7);
    dict.push_pronunciation("TEST".to_owned(), p(&["T", "EH1"]), 0.3);
    dict.push_pronunciation("TEST".to_owned(), p(&["T", "EH0"]), 0.1);

    let folded = dict_words_to_lower(&dict);
    assert_eq!(folded.len(), 1);
    let pronunciations = folded.get("test").unwrap();
    assert_eq!(pronunciations.len(), 2);
    // the colliding pronunciation keeps the weight it was first seen with
    assert_eq!(pronunciations.get(&p(&["T", "EH0"])), Some(0.7));
    assert_eq!(pronunciations.get(&p(&["T", "EH1"])), Some(0.3));
  }
}
