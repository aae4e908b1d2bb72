
use std::collections::HashSet;

use indicatif::ProgressBar;

use crate::dictionary::{PronunciationDict, Pronunciations, Symbol};
use crate::errors::{DictError, Result};
use crate::lookup::MpOptions;

// Removes the given symbols from every pronunciation; returns how many words changed.
pub fn remove_symbols_from_pronunciations(dictionary: &mut PronunciationDict, symbols: &HashSet<Symbol>, mp_options: &MpOptions, silent: bool) -> Result<usize> {
  use rayon::prelude::*;

  mp_options.validate()?;

  let pool = rayon::ThreadPoolBuilder::new()
    .num_threads(mp_options.n_jobs)
    .build()
    .map_err(|e| DictError::InvalidArgument(e.to_string()))?;

  let progress = if silent {
    ProgressBar::hidden()
  } else {
    ProgressBar::new(dictionary.len() as u64)
  };

  let filtered: Vec<Option<Pronunciations>> = {
    let dictionary: &PronunciationDict = dictionary;
    let indices: Vec<usize> = (0 .. dictionary.len()).collect();
    let mut indexed: Vec<(usize, Option<Pronunciations>)> = pool.install(|| {
      indices.par_chunks(mp_options.chunksize).flat_map_iter(|chunk| {
        chunk.iter().map(|&i| {
          let (_, pronunciations) = dictionary.entry(i);
          let result = filter_pronunciations(pronunciations, symbols);
          progress.inc(1);
          (i, result)
        }).collect::<Vec<_>>()
      }).collect()
    });
    indexed.sort_by_key(|(i, _)| *i);
    indexed.into_iter().map(|(_, r)| r).collect()
  };
  progress.finish_and_clear();

  let mut changed_counter = 0;
  for (i, new_pronunciations) in filtered.into_iter().enumerate() {
    if let Some(new_pronunciations) = new_pronunciations {
      dictionary.set_at(i, new_pronunciations);
      changed_counter += 1;
    }
  }

  Ok(changed_counter)
}

fn filter_pronunciations(pronunciations: &Pronunciations, symbols: &HashSet<Symbol>) -> Option<Pronunciations> {
  let mut result = Pronunciations::new();
  let mut changed_anything = false;

  for (pronunciation, weight) in pronunciations.iter() {
    let filtered: Vec<Symbol> = pronunciation.iter()
      .filter(|symbol| !symbols.contains(*symbol))
      .cloned()
      .collect();
    if filtered != *pronunciation {
      changed_anything = true;
    }
    result.insert_new(filtered, *weight);
  }

  if changed_anything {
    Some(result)
  } else {
    None
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::dictionary::Pronunciation;

  fn p(symbols: &[&str]) -> Pronunciation {
    symbols.iter().map(|s| s.to_string()).collect()
  }

  fn symbols(items: &[&str]) -> HashSet<Symbol> {
    items.iter().map(|s| s.to_string()).collect()
  }

  #[test]
  fn removes_symbols_and_counts_changed_words() {
    let mut dict = PronunciationDict::new();
    dict.push_pronunciation("one".to_owned(), p(&["W", "AH1", "N", "?"]), 1.0);
    dict.push_pronunciation("two".to_owned(), p(&["T", "UW1"]), 1.0);
    dict.push_pronunciation("three".to_owned(), p(&["TH", ".", "R", "IY1"]), 1.0);

    let changed = remove_symbols_from_pronunciations(
      &mut dict, &symbols(&["?", "."]), &MpOptions::new(2, None, 1), true).unwrap();

    assert_eq!(changed, 2);
    assert_eq!(*dict.get("one").unwrap(), Pronunciations::from_entries(vec![(p(&["W", "AH1", "N"]), 1.0)]));
    assert_eq!(*dict.get("two").unwrap(), Pronunciations::from_entries(vec![(p(&["T", "UW1"]), 1.0)]));
    assert_eq!(*dict.get("three").unwrap(), Pronunciations::from_entries(vec![(p(&["TH", "R", "IY1"]), 1.0)]));
  }

  #[test]
  fn colliding_filtered_pronunciations_keep_first_weight() {
    let mut dict = PronunciationDict::new();
    dict.push_pronunciation("one".to_owned(), p(&["W", "AH1", "N"]), 0.6);
    dict.push_pronunciation("one".to_owned(), p(&["W", "AH1", "N", "!"]), 0.4);

    let changed = remove_symbols_from_pronunciations(
      &mut dict, &symbols(&["!"]), &MpOptions::new(1, None, 1), true).unwrap();

    assert_eq!(changed, 1);
    let one = dict.get("one").unwrap();
    assert_eq!(one.len(), 1);
    assert_eq!(one.get(&p(&["W", "AH1", "N"])), Some(0.6));
  }

  #[test]
  fn unchanged_dictionary_reports_zero() {
    let mut dict = PronunciationDict::new();
    dict.push_pronunciation("one".to_owned(), p(&["W", "AH1", "N"]), 1.0);

    let changed = remove_symbols_from_pronunciations(
      &mut dict, &symbols(&["?"]), &MpOptions::new(1, None, 100), true).unwrap();

    assert_eq!(changed, 0);
  }

  #[test]
  fn symbols_match_whole_tokens_only() {
    let mut dict = PronunciationDict::new();
    dict.push_pronunciation("one".to_owned(), p(&["AH1?", "?"]), 1.0);

    let changed = remove_symbols_from_pronunciations(
      &mut dict, &symbols(&["?"]), &MpOptions::new(1, None, 1), true).unwrap();

    assert_eq!(changed, 1);
    assert_eq!(*dict.get("one").unwrap(), Pronunciations::from_entries(vec![(p(&["AH1?"]), 1.0)]));
  }
}
