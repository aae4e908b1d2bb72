
use std::collections::HashSet;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

use dict_creation::dictionary::default_punctuation;
use dict_creation::logging::configure_logging;
use dict_creation::lookup::MpOptions;
use dict_creation::serialization::{load_dict, save_dict, Encoding, FormatOptions, ParseOptions};
use dict_creation::strip_prons::remove_symbols_from_pronunciations;

fn default_n_jobs() -> usize {
  std::thread::available_parallelism().map(|n| n.get()).unwrap_or(1)
}

#[derive(Parser, Debug)]
#[command(name = "stripprons", about = "Remove symbols from pronunciations")]
struct Args {
  /// Dictionary files, rewritten in place
  #[arg(required = true)]
  dictionaries: Vec<PathBuf>,

  /// Remove these symbols from the pronunciations
  #[arg(long, value_name = "SYMBOL", num_args = 0..)]
  symbols: Option<Vec<String>>,

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

  let symbols: HashSet<String> = args.symbols.clone()
    .unwrap_or_else(default_punctuation)
    .into_iter()
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
  let mp_options = MpOptions::new(args.n_jobs, args.maxtasksperchild, args.chunksize);

  for path in &args.dictionaries {
    let mut dictionary = match load_dict(path, args.encoding, &parse_options) {
      Ok(dictionary) => dictionary,
      Err(error) => {
        tracing::error!("Dictionary '{}' couldn't be read: {}", path.display(), error);
        return false;
      }
    };

    let changed_counter = match remove_symbols_from_pronunciations(&mut dictionary, &symbols, &mp_options, args.silent) {
      Ok(changed_counter) => changed_counter,
      Err(error) => {
        tracing::error!("{}", error);
        return false;
      }
    };

    if changed_counter == 0 {
      tracing::info!("{}: didn't change anything", path.display());
      continue;
    }

    tracing::info!("Changed pronunciations of {} word(s)", changed_counter);

    if let Err(error) = save_dict(&dictionary, path, args.encoding, &format_options) {
      tracing::error!("Dictionary couldn't be written: {}", error);
      return false;
    }
    tracing::info!("Written dictionary to: {}", path.display());
  }

  true
}
