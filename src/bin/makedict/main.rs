
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use console::style;

use dict_creation::dictionary::default_punctuation;
use dict_creation::logging::configure_logging;
use dict_creation::lookup::{create_dict_from_dict, MpOptions};
use dict_creation::serialization::{load_dict, read_vocabulary, save_dict, write_word_list, Encoding, FormatOptions, ParseOptions};

fn default_n_jobs() -> usize {
  std::thread::available_parallelism().map(|n| n.get()).unwrap_or(1)
}

#[derive(Parser, Debug)]
#[command(name = "makedict", about = "Transcribe a vocabulary with a given reference pronunciation dictionary")]
struct Args {
  /// File containing the vocabulary (words separated by line)
  vocabulary: PathBuf,

  /// File containing the reference pronunciation dictionary
  reference_dictionary: PathBuf,

  /// Path to the output dictionary
  dictionary: PathBuf,

  /// Ignore case while looking up in the reference dictionary
  #[arg(long)]
  ignore_case: bool,

  /// Trim these symbols from the start and end of a word before looking it up
  #[arg(long, value_name = "SYMBOL", num_args = 0..)]
  trim: Option<Vec<String>>,

  /// Split words on hyphen symbol before lookup
  #[arg(long)]
  split_on_hyphen: bool,

  /// Write out-of-vocabulary words to this file
  #[arg(long, value_name = "PATH")]
  oov_out: Option<PathBuf>,

  /// Encoding of the vocabulary file
  #[arg(long, value_enum, default_value_t = Encoding::Utf8)]
  vocabulary_encoding: Encoding,

  /// Encoding of the reference and output dictionaries
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
  include_weights: bool,

  /// Amount of parallel jobs
  #[arg(short = 'j', long, value_name = "N", default_value_t = default_n_jobs())]
  n_jobs: usize,

  /// Amount of words to chunk into one job
  #[arg(short = 'c', long, value_name = "N", default_value_t = 1000)]
  chunksize: usize,

  /// Amount of tasks per child
  #[arg(short = 'm', long, value_name = "N")]
  maxtasksperchild: Option<usize>,

  /// Suppress the progress bar
  #[arg(long)]
  silent: bool
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
  let max_jobs = default_n_jobs();
  if args.n_jobs < 1 || args.n_jobs > max_jobs {
    tracing::error!("n_jobs must be between 1 and {}", max_jobs);
    return false;
  }

  let vocabulary = match read_vocabulary(&args.vocabulary, args.vocabulary_encoding) {
    Ok(vocabulary) => vocabulary,
    Err(error) => {
      tracing::error!("Vocabulary couldn't be read: {}", error);
      return false;
    }
  };

  let parse_options = ParseOptions {
    consider_comments: args.consider_comments,
    consider_counters: args.consider_counters,
    consider_pron_comments: args.consider_pron_comments,
    consider_weights: args.consider_weights
  };
  let reference_dictionary = match load_dict(&args.reference_dictionary, args.encoding, &parse_options) {
    Ok(dictionary) => dictionary,
    Err(error) => {
      tracing::error!("Reference dictionary couldn't be read: {}", error);
      return false;
    }
  };

  let trim = args.trim.clone().unwrap_or_else(default_punctuation);
  let mp_options = MpOptions::new(args.n_jobs, args.maxtasksperchild, args.chunksize);

  let (dictionary, unresolved_words) = match create_dict_from_dict(
    &vocabulary, &reference_dictionary, &trim, args.split_on_hyphen, args.ignore_case, &mp_options, args.silent) {
    Ok(result) => result,
    Err(error) => {
      tracing::error!("{}", error);
      return false;
    }
  };

  let format_options = FormatOptions {
    parts_sep: args.parts_sep.clone(),
    include_counters: args.include_counters,
    include_weights: args.include_weights
  };
  if let Err(error) = save_dict(&dictionary, &args.dictionary, args.encoding, &format_options) {
    tracing::error!("Dictionary couldn't be written: {}", error);
    return false;
  }
  tracing::info!("Written dictionary to: {}", args.dictionary.display());

  if !unresolved_words.is_empty() {
    eprintln!("{}", style(format!(
      "{} of {} words were not contained in the reference dictionary",
      unresolved_words.len(), vocabulary.len())).yellow());

    let oov_out = args.oov_out.clone().unwrap_or_else(|| std::env::temp_dir().join("oov.txt"));
    if let Err(error) = write_word_list(&unresolved_words, &oov_out) {
      tracing::error!("Unresolved output file couldn't be created: {}", error);
      return false;
    }
    tracing::info!("Written unresolved vocabulary to: {}", oov_out.display());
  } else {
    tracing::info!("Complete vocabulary is contained in output!");
  }

  true
}
