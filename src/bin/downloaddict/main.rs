
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

use dict_creation::download::{download_dict, PUBLIC_DICTS};
use dict_creation::logging::configure_logging;
use dict_creation::serialization::{save_dict, Encoding, FormatOptions};

#[derive(Parser, Debug)]
#[command(name = "downloaddict", about = "Download a public pronunciation dictionary")]
struct Args {
  /// Name of the public dictionary (e.g. cmu, librispeech, mfa)
  #[arg(required_unless_present = "list")]
  name: Option<String>,

  /// File where to output the pronunciation dictionary
  #[arg(long, value_name = "PATH")]
  path: Option<PathBuf>,

  /// List the available public dictionaries and exit
  #[arg(long)]
  list: bool
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
  if args.list {
    for (name, dict) in &PUBLIC_DICTS {
      println!("{}\t{}", name, dict.description);
    }
    return true;
  }

  let name = args.name.as_deref().unwrap();
  let dictionary = match download_dict(name) {
    Ok(dictionary) => dictionary,
    Err(error) => {
      tracing::error!("{}", error);
      return false;
    }
  };

  let path = args.path.clone().unwrap_or_else(|| std::env::temp_dir().join("pronunciations.dict"));
  if let Err(error) = save_dict(&dictionary, &path, Encoding::Utf8, &FormatOptions::default()) {
    tracing::error!("Couldn't write to file: {}", error);
    return false;
  }

  tracing::info!("Written dictionary to: {}", path.display());
  true
}
