//! # Slavstem
//!
//! Light morphological stemmers for Czech, Slovak, Slovenian and Croatian,
//! packaged as token filters for a text analysis pipeline.
//!
//! ## Features
//!
//! - Pure Rust implementation
//! - Rule-table driven suffix stripping with palatalization normalization
//! - Diacritic-preserving and ASCII-folded rule tables per language
//! - Two explicit Slovenian variants (hand-written and R1 region-restricted)
//! - Keyword exemption and lowercase-with-original-preservation filters

pub mod analysis;
pub mod error;

pub mod prelude {}

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
