
use std::collections::HashSet;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use console::style;

use dict_creation::dictionary::default_punctuation;
use dict_creation::logging::configure_logging;
use dict_creation::serialization::{load_dict, save_dict, write_word_list, Encoding, FormatOptions, ParseOptions};
use dict_creation::strip_words::{remove_symbols_from_words, StripMode};

#[derive(Parser, Debug)]
#[command(name = "stripwords", about = "Remove symbols from words; a word whose symbols are all removed is taken out of the dictionary")]
struct Args {
  /// Dictionary files, rewritten in place
  #[arg(required = true)]
  dictionaries: Vec<PathBuf>,

  /// Remove these symbols from the words
  #[arg(long, value_name = "SYMBOL", num_args = 0..)]
  symbols: Option<Vec<String>>,

  /// Where to remove the symbols
  #[arg(long, value_enum, default_value_t = StripMode::Both)]
  mode: StripMode,

  /// Write removed words to this file
  #[arg(long, value_name = "PATH")]
  removed_out: Option<PathBuf>,

  /// Encoding of the dictionaries
  #[arg(long, value_enum, default_value_t = Encoding::Utf8)]
  encoding: Encoding,

  #[arg(long)]
  consider_comments: bool,

  #[arg(long)]
  consider_counters: bool,

  #[arg(long)]
  consider_pron_comments: bool,

  #[arg(long)]
  consider_weights: bool,

  /// Separator between word and pronunciation in the output
  #[arg(long, value_name = "SEP", default_value = "  ")]
  parts_sep: String,

  #[arg(long)]
  include_counters: bool,

  #[arg(long)]
  include_weights: bool
}

fn main() -> ExitCode {
  configure_logging();
  let args = Args::parse();
  if run(&args) {
    ExitCode::SUCCESS
  } else {
    ExitCode::FAILURE
  }
}

fn run(args: &Args) -> bool {
  let symbols: HashSet<char> = args.symbols.clone()
    .unwrap_or_else(default_punctuation)
    .iter()
    .flat_map(|s| s.chars())
    .collect();

  let parse_options = ParseOptions {
    consider_comments: args.consider_comments,
    consider_counters: args.consider_counters,
    consider_pron_comments: args.consider_pron_comments,
    consider_weights: args.consider_weights
  };
  let format_options = FormatOptions {
    parts_sep: args.parts_sep.clone(),
    include_counters: args.include_counters,
    include_weights: args.include_weights
  };

  for path in &args.dictionaries {
    let mut dictionary = match load_dict(path, args.encoding, &parse_options) {
      Ok(dictionary) => dictionary,
      Err(error) => {
        tracing::error!("Dictionary '{}' couldn't be read: {}", path.display(), error);
        return false;
      }
    };

    let (removed_words, changed_counter) = remove_symbols_from_words(&mut dictionary, &symbols, args.mode);

    if changed_counter == 0 {
      tracing::info!("{}: didn't change anything", path.display());
      continue;
    }

    tracing::info!("Changed {} word(s)", changed_counter);

    if let Err(error) = save_dict(&dictionary, path, args.encoding, &format_options) {
      tracing::error!("Dictionary couldn't be written: {}", error);
      return false;
    }
    tracing::info!("Written dictionary to: {}", path.display());

    if !removed_words.is_empty() {
      eprintln!("{}", style(format!("{} word(s) were removed", removed_words.len())).yellow());

      let removed_out = args.removed_out.clone()
        .unwrap_or_else(|| std::env::temp_dir().join("removed-words.txt"));
      if let Err(error) = write_word_list(&removed_words, &removed_out) {
        tracing::error!("Removed words output couldn't be created: {}", error);
        return false;
      }
      tracing::info!("Written removed words to: {}", removed_out.display());
    } else {
      tracing::info!("No words were removed");
    }
  }

  true
}
