
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use clap::ValueEnum;
use itertools::Itertools;
use lazy_static::lazy_static;
use regex::Regex;
use tempfile::NamedTempFile;

use crate::dictionary::{Pronunciation, PronunciationDict, WordSet};
use crate::errors::{DictError, Result};

pub const COMMENT_PREFIX: &str = ";;;";

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq)]
pub enum Encoding {
  #[value(name = "utf-8")]
  Utf8,
  #[value(name = "latin-1")]
  Latin1
}

impl Encoding {
  pub fn decode(&self, bytes: &[u8]) -> Result<String> {
    match self {
      Encoding::Utf8 => Ok(String::from_utf8(bytes.to_vec())?),
      Encoding::Latin1 => Ok(bytes.iter().map(|&b| b as char).collect())
    }
  }

  pub fn encode(&self, text: &str) -> Vec<u8> {
    match self {
      Encoding::Utf8 => text.as_bytes().to_vec(),
      Encoding::Latin1 => text.chars().map(|c| if (c as u32) < 256 { c as u8 } else { b'?' }).collect()
    }
  }
}

#[derive(Clone, Debug, Default)]
pub struct ParseOptions {
  pub consider_comments: bool,
  pub consider_counters: bool,
  pub consider_pron_comments: bool,
  pub consider_weights: bool
}

#[derive(Clone, Debug)]
pub struct FormatOptions {
  pub parts_sep: String,
  pub include_counters: bool,
  pub include_weights: bool
}

impl Default for FormatOptions {
  fn default() -> FormatOptions {
    FormatOptions {
      parts_sep: "  ".to_owned(),
      include_counters: false,
      include_weights: false
    }
  }
}

pub fn parse_text(text: &str, options: &ParseOptions) -> Result<PronunciationDict> {
  lazy_static! {
    static ref COUNTER_RE: Regex = Regex::new(r"^(.*)\((\d+)\)$").unwrap();
  }

  let mut dictionary = PronunciationDict::new();

  for (line_number, line) in text.lines().enumerate() {
    if line.trim().is_empty() {
      continue;
    }
    if options.consider_comments && line.starts_with(COMMENT_PREFIX) {
      continue;
    }

    let mut fields = line.split_whitespace();
    let word_field = fields.next().unwrap();

    let word = if options.consider_counters {
      match COUNTER_RE.captures(word_field) {
        Some(captures) => captures.get(1).unwrap().as_str().to_owned(),
        None => word_field.to_owned()
      }
    } else {
      word_field.to_owned()
    };

    let mut symbols: Vec<&str> = fields.collect();
    if options.consider_pron_comments {
      if let Some(position) = symbols.iter().position(|s| s.starts_with('#')) {
        symbols.truncate(position);
      }
    }

    let mut weight = 1.0;
    if options.consider_weights {
      if symbols.is_empty() {
        return Err(DictError::InvalidFormat {
          line: line_number + 1,
          message: "missing weight".to_owned()
        });
      }
      let weight_field = symbols.remove(0);
      weight = weight_field.parse().map_err(|_| DictError::InvalidFormat {
        line: line_number + 1,
        message: format!("invalid weight '{}'", weight_field)
      })?;
    }

    if symbols.is_empty() {
      continue;
    }

    let pronunciation: Pronunciation = symbols.iter().map(|s| s.to_string()).collect();
    dictionary.push_pronunciation(word, pronunciation, weight);
  }

  Ok(dictionary)
}

pub fn to_text(dictionary: &PronunciationDict, options: &FormatOptions) -> String {
  let mut content = String::new();

  for (word, pronunciations) in dictionary.iter() {
    for (counter, (pronunciation, weight)) in pronunciations.iter().enumerate() {
      content.push_str(word);
      if options.include_counters && counter > 0 {
        content.push_str(&format!("({})", counter));
      }
      content.push_str(&options.parts_sep);
      if options.include_weights {
        content.push_str(&format!("{} ", weight));
      }
      content.push_str(&pronunciation.iter().join(" "));
      content.push('\n');
    }
  }

  content
}

pub fn load_dict(path: &Path, encoding: Encoding, options: &ParseOptions) -> Result<PronunciationDict> {
  if path.is_dir() {
    return Err(DictError::PathIsDirectory(path.to_owned()));
  }
  let bytes = fs::read(path)?;
  let text = encoding.decode(&bytes)?;
  parse_text(&text, options)
}

pub fn save_dict(dictionary: &PronunciationDict, path: &Path, encoding: Encoding, options: &FormatOptions) -> Result<()> {
  if path.is_dir() {
    return Err(DictError::PathIsDirectory(path.to_owned()));
  }
  let parent = match path.parent() {
    Some(parent) if !parent.as_os_str().is_empty() => parent.to_owned(),
    _ => PathBuf::from(".")
  };
  fs::create_dir_all(&parent)?;

  let content = to_text(dictionary, options);

  // written to a temporary file first so a failure never leaves a partial dictionary behind
  let mut temp_file = NamedTempFile::new_in(&parent)?;
  temp_file.write_all(&encoding.encode(&content))?;
  temp_file.persist(path)?;
  Ok(())
}

pub fn read_vocabulary(path: &Path, encoding: Encoding) -> Result<WordSet> {
  if path.is_dir() {
    return Err(DictError::PathIsDirectory(path.to_owned()));
  }
  let bytes = fs::read(path)?;
  let text = encoding.decode(&bytes)?;

  let mut words = WordSet::new();
  for line in text.lines() {
    if line.trim().is_empty() {
      continue;
    }
    words.insert(line.to_owned());
  }
  Ok(words)
}

pub fn write_word_list(words: &WordSet, path: &Path) -> Result<()> {
  let parent = match path.parent() {
    Some(parent) if !parent.as_os_str().is_empty() => parent.to_owned(),
    _ => PathBuf::from(".")
  };
  fs::create_dir_all(&parent)?;
  fs::write(path, words.iter().join("\n"))?;
  Ok(())
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::dictionary::Pronunciations;

  fn p(symbols: &[&str]) -> Pronunciation {
    symbols.iter().map(|s| s.to_string()).collect()
  }

  #[test]
  fn parses_plain_lines() {
    let text = "test\tT E0 S T\ndef  D E0 F\n";
    let dictionary = parse_text(text, &ParseOptions::default()).unwrap();

    assert_eq!(dictionary.len(), 2);
    assert_eq!(*dictionary.get("test").unwrap(), Pronunciations::from_entries(vec![(p(&["T", "E0", "S", "T"]), 1.0)]));
    assert_eq!(*dictionary.get("def").unwrap(), Pronunciations::from_entries(vec![(p(&["D", "E0", "F"]), 1.0)]));
  }

  #[test]
  fn counter_suffixes_accumulate_on_one_word() {
    let text = "test T E0 S T\ntest(1) T E1 S T\n";
    let options = ParseOptions { consider_counters: true, ..ParseOptions::default() };
    let dictionary = parse_text(text, &options).unwrap();

    assert_eq!(dictionary.len(), 1);
    assert_eq!(dictionary.get("test").unwrap().len(), 2);
  }

  #[test]
  fn counters_are_part_of_the_word_when_disabled() {
    let text = "test(1) T E1 S T\n";
    let dictionary = parse_text(text, &ParseOptions::default()).unwrap();
    assert!(dictionary.contains("test(1)"));
  }

  #[test]
  fn weights_are_parsed_when_enabled() {
    let text = "test 0.7 T E0 S T\ndef 2 D E0 F\n";
    let options = ParseOptions { consider_weights: true, ..ParseOptions::default() };
    let dictionary = parse_text(text, &options).unwrap();

    assert_eq!(dictionary.get("test").unwrap().get(&p(&["T", "E0", "S", "T"])), Some(0.7));
    assert_eq!(dictionary.get("def").unwrap().get(&p(&["D", "E0", "F"])), Some(2.0));
  }

  #[test]
  fn invalid_weight_reports_the_line() {
    let text = "test 0.7 T\ndef oops D\n";
    let options = ParseOptions { consider_weights: true, ..ParseOptions::default() };
    let error = parse_text(text, &options).unwrap_err();

    match error {
      DictError::InvalidFormat { line, .. } => assert_eq!(line, 2),
      other => panic!("unexpected error: {:?}", other)
    }
  }

  #[test]
  fn comment_lines_and_pron_comments_are_dropped() {
    let text = ";;; a header\ntest T E0 S T # rare\n";
    let options = ParseOptions {
      consider_comments: true,
      consider_pron_comments: true,
      ..ParseOptions::default()
    };
    let dictionary = parse_text(text, &options).unwrap();

    assert_eq!(dictionary.len(), 1);
    assert_eq!(*dictionary.get("test").unwrap(), Pronunciations::from_entries(vec![(p(&["T", "E0", "S", "T"]), 1.0)]));
  }

  #[test]
  fn duplicate_lines_keep_the_first_weight() {
    let text = "test 0.7 T E0 S T\ntest 0.2 T E0 S T\n";
    let options = ParseOptions { consider_weights: true, ..ParseOptions::default() };
    let dictionary = parse_text(text, &options).unwrap();

    let test = dictionary.get("test").unwrap();
    assert_eq!(test.len(), 1);
    assert_eq!(test.get(&p(&["T", "E0", "S", "T"])), Some(0.7));
  }

  #[test]
  fn latin1_decodes_every_byte() {
    let bytes = vec![b'd', 0xE9, b'j', 0xE0, b' ', b'D'];
    let text = Encoding::Latin1.decode(&bytes).unwrap();
    assert_eq!(text, "déjà D");
    assert!(Encoding::Utf8.decode(&bytes).is_err());
  }

  #[test]
  fn formats_counters_and_weights() {
    let mut dictionary = PronunciationDict::new();
    dictionary.push_pronunciation("test".to_owned(), p(&["T", "E0", "S", "T"]), 0.7);
    dictionary.push_pronunciation("test".to_owned(), p(&["T", "E1", "S", "T"]), 0.3);

    let options = FormatOptions {
      parts_sep: "\t".to_owned(),
      include_counters: true,
      include_weights: true
    };
    let text = to_text(&dictionary, &options);
    assert_eq!(text, "test\t0.7 T E0 S T\ntest(1)\t0.3 T E1 S T\n");
  }

  #[test]
  fn formats_with_default_separator() {
    let mut dictionary = PronunciationDict::new();
    dictionary.push_pronunciation("def".to_owned(), p(&["D", "E0", "F"]), 2.0);

    let text = to_text(&dictionary, &FormatOptions::default());
    assert_eq!(text, "def  D E0 F\n");
  }

  #[test]
  fn vocabulary_reader_skips_blanks_and_duplicates() {
    let text = "Test?\n\nTest-def.\nTest?\n";
    let words: WordSet = text.lines()
      .filter(|line| !line.trim().is_empty())
      .map(|line| line.to_owned())
      .collect();

    assert_eq!(words.len(), 2);
    assert_eq!(words.get(0), "Test?");
    assert_eq!(words.get(1), "Test-def.");
  }
}
