
use crate::dictionary::PronunciationDict;
use crate::errors::{DictError, Result};
use crate::serialization::{parse_text, Encoding, ParseOptions};

#[derive(Clone, Copy, Debug)]
pub struct PublicDict {
  pub url: &'static str,
  pub encoding: Encoding,
  pub description: &'static str
}

pub const PUBLIC_DICTS: [(&str, PublicDict); 6] = [
  ("cmu", PublicDict {
    url: "http://svn.code.sf.net/p/cmusphinx/code/trunk/cmudict/cmudict-0.7b",
    encoding: Encoding::Latin1,
    description: "CMU (ARPA)"
  }),
  ("librispeech", PublicDict {
    url: "https://www.openslr.org/resources/11/librispeech-lexicon.txt",
    encoding: Encoding::Utf8,
    description: "LibriSpeech (ARPA)"
  }),
  ("mfa", PublicDict {
    url: "https://raw.githubusercontent.com/MontrealCorpusTools/mfa-models/main/dictionary/english.dict",
    encoding: Encoding::Utf8,
    description: "MFA (ARPA)"
  }),
  ("mfa-en-uk", PublicDict {
    url: "https://raw.githubusercontent.com/MontrealCorpusTools/mfa-models/main/dictionary/english_uk_ipa.dict",
    encoding: Encoding::Utf8,
    description: "MFA en-UK (IPA)"
  }),
  ("mfa-en-us", PublicDict {
    url: "https://raw.githubusercontent.com/MontrealCorpusTools/mfa-models/main/dictionary/english_us_ipa.dict",
    encoding: Encoding::Utf8,
    description: "MFA en-US (IPA)"
  }),
  ("prosodylab", PublicDict {
    url: "https://raw.githubusercontent.com/prosodylab/Prosodylab-Aligner/master/eng.dict",
    encoding: Encoding::Utf8,
    description: "Prosodylab (ARPA)"
  })
];

pub fn find_public_dict(name: &str) -> Result<&'static PublicDict> {
  PUBLIC_DICTS.iter()
    .find(|(dict_name, _)| *dict_name == name)
    .map(|(_, dict)| dict)
    .ok_or_else(|| DictError::UnknownDictionary(name.to_owned()))
}

pub fn download_dict(name: &str) -> Result<PronunciationDict> {
  let info = find_public_dict(name)?;

  tracing::info!("Downloading {}...", info.description);

  let response = reqwest::blocking::get(info.url)?;
  if !response.status().is_success() {
    return Err(DictError::HttpStatus {
      url: info.url.to_owned(),
      status: response.status()
    });
  }
  let bytes = response.bytes()?;
  let text = info.encoding.decode(&bytes)?;

  let options = ParseOptions {
    consider_comments: true,
    consider_counters: true,
    consider_pron_comments: true,
    consider_weights: false
  };
  parse_text(&text, &options)
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn known_names_are_found() {
    for name in ["cmu", "librispeech", "mfa", "mfa-en-uk", "mfa-en-us", "prosodylab"] {
      let dict = find_public_dict(name).unwrap();
      println!("{}: {}", name, dict.description);
      assert!(dict.url.starts_with("http"));
    }
  }

  #[test]
  fn cmu_uses_latin1() {
    assert_eq!(find_public_dict("cmu").unwrap().encoding, Encoding::Latin1);
  }

  #[test]
  fn unknown_name_is_an_error() {
    let error = find_public_dict("klingon").unwrap_err();
    assert!(matches!(error, DictError::UnknownDictionary(_)));
  }
}
