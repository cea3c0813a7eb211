//! Text analysis module for Slavstem.
//!
//! This module provides the token data model and the token filters that make
//! up a stemming pipeline: lowercasing, keyword marking and the per-language
//! light stemmers.

pub mod token;
pub mod token_filter;

// Re-export commonly used types
pub use token::*;
pub use token_filter::*;
