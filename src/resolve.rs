
use std::collections::HashSet;

use crate::dictionary::{Pronunciations, Symbol};

#[derive(Clone, Debug)]
pub struct Options {
  pub trim_symbols: HashSet<char>,
  pub split_on_hyphen: bool,
  pub trim_start: bool,
  pub trim_end: bool,
  pub weight_exponent: f64
}

impl Options {
  pub fn new<'a, I: IntoIterator<Item = &'a str>>(trim_symbols: I, split_on_hyphen: bool) -> Options {
    Options {
      trim_symbols: trim_symbols.into_iter().flat_map(|s| s.chars()).collect(),
      split_on_hyphen,
      trim_start: true,
      trim_end: true,
      weight_exponent: 1.0
    }
  }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Strategy {
  DirectLookup,
  TrimDecompose,
  HyphenSplit
}

const STRATEGY_ORDER: [Strategy; 3] = [
  Strategy::DirectLookup,
  Strategy::TrimDecompose,
  Strategy::HyphenSplit
];

// Tries each strategy in order; the first one producing any pronunciation wins,
// so a direct hit is never merged with decomposed alternatives.
pub fn get_pronunciations_from_word<F: Fn(&str) -> Pronunciations>(word: &str, lookup: &F, options: &Options) -> Pronunciations {
  for strategy in STRATEGY_ORDER {
    let result = match strategy {
      Strategy::DirectLookup => lookup(word),
      Strategy::TrimDecompose => resolve_trimmed(word, lookup, options),
      Strategy::HyphenSplit => resolve_hyphenated(word, lookup, options)
    };
    if !result.is_empty() {
      return result;
    }
  }
  Pronunciations::new()
}

fn split_trim(word: &str, options: &Options) -> (String, String, String) {
  let chars: Vec<char> = word.chars().collect();
  let mut start = 0;
  let mut end = chars.len();

  if options.trim_start {
    while start < end && options.trim_symbols.contains(&chars[start]) {
      start += 1;
    }
  }
  if options.trim_end {
    while end > start && options.trim_symbols.contains(&chars[end - 1]) {
      end -= 1;
    }
  }

  (
    chars[.. start].iter().collect(),
    chars[start .. end].iter().collect(),
    chars[end ..].iter().collect()
  )
}

fn resolve_trimmed<F: Fn(&str) -> Pronunciations>(word: &str, lookup: &F, options: &Options) -> Pronunciations {
  let (prefix, stem, suffix) = split_trim(word, options);

  if stem == word || stem.is_empty() {
    return Pronunciations::new();
  }

  let stem_pronunciations = get_pronunciations_from_word(&stem, lookup, options);

  let mut result = Pronunciations::new();
  for (pronunciation, weight) in stem_pronunciations.iter() {
    let mut symbols: Vec<Symbol> = prefix.chars().map(|c| c.to_string()).collect();
    symbols.extend(pronunciation.iter().cloned());
    symbols.extend(suffix.chars().map(|c| c.to_string()));
    result.insert_new(symbols, *weight);
  }
  result
}

fn resolve_hyphenated<F: Fn(&str) -> Pronunciations>(word: &str, lookup: &F, options: &Options) -> Pronunciations {
  if !options.split_on_hyphen || !word.contains('-') {
    return Pronunciations::new();
  }

  let part_results: Vec<Pronunciations> = word.split('-')
    .map(|part| get_pronunciations_from_word(part, lookup, options))
    .collect();

  // one unresolvable part sinks the whole branch
  if part_results.iter().any(|p| p.is_empty()) {
    return Pronunciations::new();
  }

  let mut combined: Vec<(Vec<Symbol>, f64)> = part_results[0].iter()
    .map(|(pronunciation, weight)| (pronunciation.clone(), weight.powf(options.weight_exponent)))
    .collect();

  for part in &part_results[1 ..] {
    let mut next = Vec::new();
    for (symbols, weight) in &combined {
      for (pronunciation, part_weight) in part.iter() {
        let mut joined = symbols.clone();
        joined.push("-".to_string());
        joined.extend(pronunciation.iter().cloned());
        next.push((joined, weight * part_weight.powf(options.weight_exponent)));
      }
    }
    combined = next;
  }

  let mut result = Pronunciations::new();
  for (symbols, weight) in combined {
    result.insert_new(symbols, weight);
  }
  result
}
