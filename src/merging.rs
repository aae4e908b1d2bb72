
use clap::ValueEnum;

use crate::dictionary::PronunciationDict;

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq)]
pub enum DuplicateHandling {
  // only insert words that are missing from the target
  Add,
  // union the pronunciations of words present in both
  Extend,
  // the source's pronunciations supersede the target's
  Replace
}

pub fn merge_dictionary(target: &mut PronunciationDict, source: &PronunciationDict, handling: DuplicateHandling) {
  match handling {
    DuplicateHandling::Add => dictionary_add_new(target, source),
    DuplicateHandling::Extend => dictionary_extend(target, source),
    DuplicateHandling::Replace => dictionary_replace(target, source)
  }
}

fn dictionary_add_new(target: &mut PronunciationDict, source: &PronunciationDict) {
  for (word, pronunciations) in source.iter() {
    if !target.contains(word) {
      target.insert_new(word.clone(), pronunciations.clone());
    }
  }
}

fn dictionary_extend(target: &mut PronunciationDict, source: &PronunciationDict) {
  for (word, pronunciations) in source.iter() {
    target.union_into(word.clone(), pronunciations);
  }
}

fn dictionary_replace(target: &mut PronunciationDict, source: &PronunciationDict) {
  for (word, pronunciations) in source.iter() {
    target.set(word.clone(), pronunciations.clone());
  }
}
