
use std::path::PathBuf;

pub type Result<T, E = DictError> = std::result::Result<T, E>;

#[derive(Debug, thiserror::Error)]
pub enum DictError {
  #[error("invalid argument: {0}")]
  InvalidArgument(String),

  #[error("line {line}: {message}")]
  InvalidFormat { line: usize, message: String },

  #[error("the path '{0}' is a directory, but a file was expected")]
  PathIsDirectory(PathBuf),

  #[error(transparent)]
  Io(#[from] std::io::Error),

  #[error(transparent)]
  Utf8(#[from] std::string::FromUtf8Error),

  #[error(transparent)]
  Persist(#[from] tempfile::PersistError),

  #[error(transparent)]
  Http(#[from] reqwest::Error),

  #[error("request to '{url}' failed with status {status}")]
  HttpStatus { url: String, status: reqwest::StatusCode },

  #[error("unknown public dictionary '{0}'")]
  UnknownDictionary(String),
}
