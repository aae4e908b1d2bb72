
pub mod dictionary;
pub mod download;
pub mod errors;
pub mod logging;
pub mod lookup;
pub mod merging;
pub mod resolve;
pub mod serialization;
pub mod strip_prons;
pub mod strip_words;
