
use indicatif::ProgressBar;

use crate::dictionary::{dict_words_to_lower, PronunciationDict, Pronunciations, Symbol, WordSet};
use crate::errors::{DictError, Result};
use crate::resolve::{get_pronunciations_from_word, Options};

#[derive(Clone, Debug)]
pub struct MpOptions {
  pub n_jobs: usize,
  pub maxtasksperchild: Option<usize>,
  pub chunksize: usize
}

impl MpOptions {
  pub fn new(n_jobs: usize, maxtasksperchild: Option<usize>, chunksize: usize) -> MpOptions {
    MpOptions { n_jobs, maxtasksperchild, chunksize }
  }

  pub fn validate(&self) -> Result<()> {
    if self.n_jobs < 1 {
      return Err(DictError::InvalidArgument("n_jobs must be at least 1".to_owned()));
    }
    if self.chunksize < 1 {
      return Err(DictError::InvalidArgument("chunksize must be at least 1".to_owned()));
    }
    if self.maxtasksperchild == Some(0) {
      return Err(DictError::InvalidArgument("maxtasksperchild must be at least 1".to_owned()));
    }
    Ok(())
  }
}

pub fn create_dict_from_dict(vocabulary: &WordSet, reference_dict: &PronunciationDict, trim: &[Symbol], split_on_hyphen: bool, ignore_case: bool, mp_options: &MpOptions, silent: bool) -> Result<(PronunciationDict, WordSet)> {
  let options = Options::new(trim.iter().map(|s| s.as_str()), split_on_hyphen);
  get_pronunciations(vocabulary, reference_dict, &options, ignore_case, mp_options, silent)
}

pub fn get_pronunciations(vocabulary: &WordSet, lookup_dict: &PronunciationDict, options: &Options, ignore_case: bool, mp_options: &MpOptions, silent: bool) -> Result<(PronunciationDict, WordSet)> {
  use rayon::prelude::*;

  mp_options.validate()?;

  // case folding happens once, before distribution
  let folded;
  let lookup_dict = if ignore_case {
    folded = dict_words_to_lower(lookup_dict);
    &folded
  } else {
    lookup_dict
  };

  let pool = rayon::ThreadPoolBuilder::new()
    .num_threads(mp_options.n_jobs)
    .build()
    .map_err(|e| DictError::InvalidArgument(e.to_string()))?;

  let progress = if silent {
    ProgressBar::hidden()
  } else {
    ProgressBar::new(vocabulary.len() as u64)
  };

  let lookup = |word: &str| lookup_in_dict(word, lookup_dict, ignore_case);

  let indices: Vec<usize> = (0 .. vocabulary.len()).collect();
  let mut indexed: Vec<(usize, Pronunciations)> = pool.install(|| {
    indices.par_chunks(mp_options.chunksize).flat_map_iter(|chunk| {
      chunk.iter().map(|&i| {
        let pronunciations = get_pronunciations_from_word(vocabulary.get(i), &lookup, options);
        progress.inc(1);
        (i, pronunciations)
      }).collect::<Vec<_>>()
    }).collect()
  });
  progress.finish_and_clear();

  // chunks may complete in any order; reassemble by original vocabulary index
  indexed.sort_by_key(|(i, _)| *i);

  Ok(assemble_dictionary(indexed, vocabulary))
}

fn lookup_in_dict(word: &str, dictionary: &PronunciationDict, ignore_case: bool) -> Pronunciations {
  let folded;
  let word = if ignore_case {
    folded = word.to_lowercase();
    folded.as_str()
  } else {
    word
  };
  match dictionary.get(word) {
    Some(pronunciations) => pronunciations.clone(),
    None => Pronunciations::new()
  }
}

fn assemble_dictionary(indexed: Vec<(usize, Pronunciations)>, vocabulary: &WordSet) -> (PronunciationDict, WordSet) {
  let mut resulting_dict = PronunciationDict::new();
  let mut unresolved_words = WordSet::new();

  for (i, pronunciations) in indexed {
    let word = vocabulary.get(i).to_owned();
    if pronunciations.is_empty() {
      unresolved_words.insert(word);
      continue;
    }
    resulting_dict.insert_new(word, pronunciations);
  }

  (resulting_dict, unresolved_words)
}
