//! Keyword marker filter implementation.
//!
//! Marks tokens that occur in a protected-word set as keywords. Downstream
//! stemming filters leave keyword tokens untouched, which is how protected
//! synonyms and proper names are kept out of the stemmers.

use std::sync::Arc;

use ahash::AHashSet;

use crate::analysis::token::{Token, TokenStream};
use crate::analysis::token_filter::Filter;
use crate::error::Result;

/// A filter that sets the keyword flag on tokens found in a word set.
///
/// # Examples
///
/// ```
/// use slavstem::analysis::token::Token;
/// use slavstem::analysis::token_filter::Filter;
/// use slavstem::analysis::token_filter::keyword_marker::KeywordMarkerFilter;
///
/// let filter = KeywordMarkerFilter::from_words(vec!["nomago"]);
/// let tokens = vec![Token::new("nomago", 0), Token::new("nomaga", 1)];
/// let result: Vec<_> = filter.filter(Box::new(tokens.into_iter()))
///     .unwrap()
///     .collect();
///
/// assert!(result[0].is_keyword());
/// assert!(!result[1].is_keyword());
/// ```
#[derive(Clone, Debug)]
pub struct KeywordMarkerFilter {
    /// The set of protected words
    keywords: Arc<AHashSet<String>>,
}

impl KeywordMarkerFilter {
    /// Create a new keyword marker filter with the given word set.
    pub fn with_keywords(keywords: AHashSet<String>) -> Self {
        KeywordMarkerFilter {
            keywords: Arc::new(keywords),
        }
    }

    /// Create a keyword marker filter from a list of words.
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let keywords = words.into_iter().map(|s| s.into()).collect();
        Self::with_keywords(keywords)
    }

    /// Check if a word is in the protected set.
    pub fn is_protected(&self, word: &str) -> bool {
        self.keywords.contains(word)
    }

    /// Get the number of protected words.
    pub fn len(&self) -> usize {
        self.keywords.len()
    }

    /// Check if the protected word set is empty.
    pub fn is_empty(&self) -> bool {
        self.keywords.is_empty()
    }
}

impl Filter for KeywordMarkerFilter {
    fn filter(&self, tokens: TokenStream) -> Result<TokenStream> {
        let filtered_tokens: Vec<Token> = tokens
            .map(|token| {
                if !token.is_stopped() && !token.is_keyword() && self.is_protected(&token.text) {
                    token.as_keyword()
                } else {
                    token
                }
            })
            .collect();

        Ok(Box::new(filtered_tokens.into_iter()))
    }

    fn name(&self) -> &'static str {
        "keyword_marker"
    }
}
