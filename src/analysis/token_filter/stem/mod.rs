//! Stemming token filter and the per-language stemmer engines.
//!
//! Each engine implements [`Stemmer`]: an in-place, allocation-free
//! transform of a caller-owned `&mut [char]` buffer that returns the new
//! logical length. [`StemFilter`] adapts an engine to the token-stream
//! [`Filter`] contract and honors the keyword exemption flag.

use serde::{Deserialize, Serialize};

use super::Filter;
use crate::analysis::token::{Token, TokenStream};
use crate::error::{Result, SlavstemError};

/// Trait for the light stemming engines.
///
/// Implementations mutate `buf[..len]` in place and return the stem's
/// length. They never touch indices at or beyond `len`, never allocate,
/// and hold no per-call state, so a single instance is safe to share
/// across threads.
pub trait Stemmer: Send + Sync {
    /// Stem the word in `buf[..len]`, returning the new logical length.
    ///
    /// Input is expected to be lowercase (with diacritical marks, unless
    /// the engine was built for ASCII-folded input).
    fn stem(&self, buf: &mut [char], len: usize) -> usize;

    /// Get the name of this stemmer.
    fn name(&self) -> &'static str;
}

mod rules;

// Stemmer implementations
pub mod croatian;
pub mod czech;
pub mod slovak;
pub mod slovenian;
pub mod slovenian_snowball;

// Re-export stemmers
pub use croatian::CroatianStemmer;
pub use czech::CzechStemmer;
pub use slovak::SlovakStemmer;
pub use slovenian::SlovenianStemmer;
pub use slovenian_snowball::SlovenianSnowballStemmer;

/// The language (and variant) a [`StemFilter`] stems for.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StemmerKind {
    Czech,
    Slovak,
    Slovenian,
    SlovenianSnowball,
    Croatian,
}

/// Configuration for building a [`StemFilter`].
///
/// # Examples
///
/// ```
/// use slavstem::analysis::token_filter::stem::StemFilterConfig;
///
/// let config: StemFilterConfig =
///     serde_json::from_str(r#"{"language": "slovenian_snowball"}"#).unwrap();
/// assert!(!config.with_ascii_fold);
/// ```
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct StemFilterConfig {
    /// Which language engine to use.
    pub language: StemmerKind,
    /// Select the ASCII-folded rule tables (for pipelines that strip
    /// diacritics before stemming).
    #[serde(default)]
    pub with_ascii_fold: bool,
}

/// Filter that applies light stemming to tokens.
///
/// Tokens marked as keywords (see
/// [`KeywordMarkerFilter`](crate::analysis::token_filter::KeywordMarkerFilter))
/// and stopped tokens pass through untouched.
pub struct StemFilter {
    /// The stemmer to use.
    stemmer: Box<dyn Stemmer>,
}

impl std::fmt::Debug for StemFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StemFilter")
            .field("stemmer", &self.stemmer.name())
            .finish()
    }
}

impl StemFilter {
    /// Create a stem filter with a custom stemmer.
    pub fn with_stemmer(stemmer: Box<dyn Stemmer>) -> Self {
        StemFilter { stemmer }
    }

    /// Create a stem filter from a configuration.
    ///
    /// Fails when the configuration asks for a variant the language does
    /// not have (Croatian carries no ASCII-fold table).
    pub fn from_config(config: &StemFilterConfig) -> Result<Self> {
        let stemmer: Box<dyn Stemmer> = match (config.language, config.with_ascii_fold) {
            (StemmerKind::Czech, false) => Box::new(CzechStemmer::new()),
            (StemmerKind::Czech, true) => Box::new(CzechStemmer::ascii_folded()),
            (StemmerKind::Slovak, false) => Box::new(SlovakStemmer::new()),
            (StemmerKind::Slovak, true) => Box::new(SlovakStemmer::ascii_folded()),
            (StemmerKind::Slovenian, false) => Box::new(SlovenianStemmer::new()),
            (StemmerKind::Slovenian, true) => Box::new(SlovenianStemmer::ascii_folded()),
            (StemmerKind::SlovenianSnowball, false) => Box::new(SlovenianSnowballStemmer::new()),
            (StemmerKind::SlovenianSnowball, true) => {
                Box::new(SlovenianSnowballStemmer::ascii_folded())
            }
            (StemmerKind::Croatian, false) => Box::new(CroatianStemmer::new()),
            (StemmerKind::Croatian, true) => {
                return Err(SlavstemError::invalid_config(
                    "croatian stemmer has no ascii_fold variant",
                ));
            }
        };
        Ok(StemFilter { stemmer })
    }

    fn stem_token(&self, token: Token) -> Token {
        let mut buf: Vec<char> = token.text.chars().collect();
        let len = buf.len();
        let new_len = self.stemmer.stem(&mut buf, len);
        if new_len == len {
            token
        } else {
            token.with_text(buf[..new_len].iter().collect::<String>())
        }
    }
}

impl Filter for StemFilter {
    fn filter(&self, tokens: TokenStream) -> Result<TokenStream> {
        let filtered_tokens = tokens
            .map(|token| {
                if token.is_stopped() || token.is_keyword() {
                    token
                } else {
                    self.stem_token(token)
                }
            })
            .collect::<Vec<_>>();

        Ok(Box::new(filtered_tokens.into_iter()))
    }

    fn name(&self) -> &'static str {
        "stem"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::token::Token;

    #[test]
    fn test_stem_filter() {
        let filter = StemFilter::with_stemmer(Box::new(SlovenianStemmer::new()));
        let tokens = vec![
            Token::new("hiša", 0),
            Token::new("knjigami", 1),
            Token::new("test", 2).stop(),
        ];
        let token_stream = Box::new(tokens.into_iter());

        let result: Vec<Token> = filter.filter(token_stream).unwrap().collect();

        assert_eq!(result.len(), 3);
        assert_eq!(result[0].text, "hiš");
        assert_eq!(result[1].text, "knjig");
        assert_eq!(result[2].text, "test"); // Stopped tokens are not processed
        assert!(result[2].is_stopped());
    }

    #[test]
    fn test_stem_filter_keyword_exemption() {
        let filter = StemFilter::with_stemmer(Box::new(SlovenianStemmer::new()));
        let tokens = vec![
            Token::new("nomago", 0).as_keyword(),
            Token::new("nomaga", 1),
        ];
        let token_stream = Box::new(tokens.into_iter());

        let result: Vec<Token> = filter.filter(token_stream).unwrap().collect();

        // The keyword token is byte-identical; the unprotected one stems.
        assert_eq!(result[0].text, "nomago");
        assert!(result[0].is_keyword());
        assert_eq!(result[1].text, "nomag");
    }

    #[test]
    fn test_from_config() {
        let config = StemFilterConfig {
            language: StemmerKind::Czech,
            with_ascii_fold: true,
        };
        let filter = StemFilter::from_config(&config).unwrap();

        let tokens = vec![Token::new("ruzove", 0)];
        let result: Vec<Token> = filter
            .filter(Box::new(tokens.into_iter()))
            .unwrap()
            .collect();
        assert_eq!(result[0].text, "ruh");
    }

    #[test]
    fn test_croatian_rejects_ascii_fold() {
        let config = StemFilterConfig {
            language: StemmerKind::Croatian,
            with_ascii_fold: true,
        };
        assert!(StemFilter::from_config(&config).is_err());
    }

    #[test]
    fn test_config_deserialization() {
        let config: StemFilterConfig =
            serde_json::from_str(r#"{"language": "slovak", "with_ascii_fold": true}"#).unwrap();
        assert_eq!(config.language, StemmerKind::Slovak);
        assert!(config.with_ascii_fold);

        // with_ascii_fold defaults to false
        let config: StemFilterConfig =
            serde_json::from_str(r#"{"language": "slovenian_snowball"}"#).unwrap();
        assert_eq!(config.language, StemmerKind::SlovenianSnowball);
        assert!(!config.with_ascii_fold);
    }

    #[test]
    fn test_filter_name() {
        let filter = StemFilter::with_stemmer(Box::new(CroatianStemmer::new()));
        assert_eq!(filter.name(), "stem");
    }
}
