
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

use dict_creation::logging::configure_logging;
use dict_creation::merging::{merge_dictionary, DuplicateHandling};
use dict_creation::serialization::{load_dict, save_dict, Encoding, FormatOptions, ParseOptions};

#[derive(Parser, Debug)]
#[command(name = "mergedicts", about = "Merge multiple pronunciation dictionaries into one")]
struct Args {
  /// Dictionary files (at least two)
  #[arg(required = true, num_args = 2..)]
  dictionaries: Vec<PathBuf>,

  /// File for the output dictionary
  #[arg(short = 'o', long, value_name = "PATH")]
  output_dictionary: PathBuf,

  /// How existing pronunciations are handled
  #[arg(long, value_enum, default_value_t = DuplicateHandling::Add)]
  duplicate_handling: DuplicateHandling,

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
  let parse_options = ParseOptions {
    consider_comments: args.consider_comments,
    consider_counters: args.consider_counters,
    consider_pron_comments: args.consider_pron_comments,
    consider_weights: args.consider_weights
  };

  let mut resulting_dictionary = None;

  for path in &args.dictionaries {
    let dictionary = match load_dict(path, args.encoding, &parse_options) {
      Ok(dictionary) => dictionary,
      Err(error) => {
        tracing::error!("Dictionary '{}' couldn't be read: {}", path.display(), error);
        return false;
      }
    };

    match resulting_dictionary {
      None => resulting_dictionary = Some(dictionary),
      Some(ref mut target) => merge_dictionary(target, &dictionary, args.duplicate_handling)
    }
  }

  let resulting_dictionary = resulting_dictionary.expect("clap requires at least two dictionaries");

  let format_options = FormatOptions {
    parts_sep: args.parts_sep.clone(),
    include_counters: args.include_counters,
    include_weights: args.include_weights
  };
  if let Err(error) = save_dict(&resulting_dictionary, &args.output_dictionary, args.encoding, &format_options) {
    tracing::error!("Dictionary couldn't be written: {}", error);
    return false;
  }

  tracing::info!("Written dictionary to: {}", args.output_dictionary.display());
  true
}
