//! Lowercase filter implementation.
//!
//! This module provides a filter that converts all token text to lowercase,
//! which is essential for case-insensitive search and is a precondition for
//! the light stemmers. Optionally the original-cased token is preserved and
//! re-emitted at the same position, so exact-case matches stay possible.
//!
//! # Examples
//!
//! ```
//! use slavstem::analysis::token::Token;
//! use slavstem::analysis::token_filter::Filter;
//! use slavstem::analysis::token_filter::lowercase::LowercaseFilter;
//!
//! let filter = LowercaseFilter::new();
//! let tokens = vec![Token::new("Praha", 0), Token::new("BRNO", 1)];
//! let filtered: Vec<_> = filter.filter(Box::new(tokens.into_iter()))
//!     .unwrap()
//!     .collect();
//!
//! assert_eq!(filtered[0].text, "praha");
//! assert_eq!(filtered[1].text, "brno");
//! ```

use crate::analysis::token::TokenStream;
use crate::analysis::token_filter::Filter;
use crate::error::Result;

/// A filter that converts tokens to lowercase.
///
/// # Behavior
///
/// - Converts all characters to lowercase (Unicode-aware)
/// - Skips tokens marked as stopped
/// - With `preserve_original`, a token that changed under lowercasing is
///   followed by its original form at the same position
///   (`position_increment = 0`)
#[derive(Clone, Debug, Default)]
pub struct LowercaseFilter {
    preserve_original: bool,
}

impl LowercaseFilter {
    /// Create a new lowercase filter.
    pub fn new() -> Self {
        LowercaseFilter {
            preserve_original: false,
        }
    }

    /// Create a lowercase filter that also keeps the original-cased token.
    pub fn preserving_original() -> Self {
        LowercaseFilter {
            preserve_original: true,
        }
    }
}

impl Filter for LowercaseFilter {
    fn filter(&self, tokens: TokenStream) -> Result<TokenStream> {
        let mut filtered_tokens = Vec::new();

        for token in tokens {
            if token.is_stopped() {
                filtered_tokens.push(token);
                continue;
            }

            let lowered = token.text.to_lowercase();
            if self.preserve_original && lowered != token.text {
                let original = token.clone().with_position_increment(0);
                filtered_tokens.push(token.with_text(lowered));
                filtered_tokens.push(original);
            } else {
                filtered_tokens.push(token.with_text(lowered));
            }
        }

        Ok(Box::new(filtered_tokens.into_iter()))
    }

    fn name(&self) -> &'static str {
        "lowercase"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::token::Token;

    #[test]
    fn test_lowercase_filter() {
        let filter = LowercaseFilter::new();
        let tokens = vec![
            Token::new("Hello", 0),
            Token::new("WORLD", 1),
            Token::new("Test", 2).stop(),
        ];
        let token_stream = Box::new(tokens.into_iter());

        let result: Vec<Token> = filter.filter(token_stream).unwrap().collect();

        assert_eq!(result.len(), 3);
        assert_eq!(result[0].text, "hello");
        assert_eq!(result[1].text, "world");
        assert_eq!(result[2].text, "Test"); // Stopped tokens are not processed
        assert!(result[2].is_stopped());
    }

    #[test]
    fn test_lowercase_preserves_original() {
        let filter = LowercaseFilter::preserving_original();
        let tokens = vec![Token::new("Škoda", 0), Token::new("auto", 1)];
        let token_stream = Box::new(tokens.into_iter());

        let result: Vec<Token> = filter.filter(token_stream).unwrap().collect();

        // "Škoda" expands to lowercased + original at the same position.
        assert_eq!(result.len(), 3);
        assert_eq!(result[0].text, "škoda");
        assert_eq!(result[0].position_increment, 1);
        assert_eq!(result[1].text, "Škoda");
        assert_eq!(result[1].position_increment, 0);
        assert_eq!(result[2].text, "auto");
    }

    #[test]
    fn test_lowercase_no_duplicate_for_lowercase_input() {
        let filter = LowercaseFilter::preserving_original();
        let tokens = vec![Token::new("auto", 0)];
        let token_stream = Box::new(tokens.into_iter());

        let result: Vec<Token> = filter.filter(token_stream).unwrap().collect();

        assert_eq!(result.len(), 1);
        assert_eq!(result[0].text, "auto");
    }

    #[test]
    fn test_filter_name() {
        assert_eq!(LowercaseFilter::new().name(), "lowercase");
    }
}
