//! Region-restricted stemmer for Slovenian, in the Snowball style.
//!
//! Unlike the light stemmers, suffix removal here is gated by an R1 region
//! boundary computed per word: the position just after the first non-vowel
//! that follows the first vowel. A suffix may only be stripped if the whole
//! of it lies at or after R1, which protects short stems without the
//! per-rule length guards the light engines carry.
//!
//! This variant is intentionally not interchangeable with
//! [`SlovenianStemmer`](super::SlovenianStemmer): it has no palatalization
//! and no possessive phase, and dual-number forms diverge (`hišama` keeps
//! its own `hišam` cluster instead of joining `hiš`).

use crate::analysis::token_filter::stem::Stemmer;
use crate::analysis::token_filter::stem::rules::ends_with;

const VOWELS: &[char] = &['a', 'e', 'i', 'o', 'u'];

struct SnowballTables {
    suffixes_4: &'static [&'static str],
    suffixes_3: &'static [&'static str],
    suffixes_2: &'static [&'static str],
}

static DIACRITIC: SnowballTables = SnowballTables {
    suffixes_4: &[
        "ovih", "evih", "ovim", "evim", "osti", "ejši", "ejša", "ejše", "ejšo",
    ],
    suffixes_3: &[
        "ega", "emu", "emi", "imi", "ima", "oma", "ami", "ova", "ove", "eva", "evi", "ovi", "ali",
        "ale", "alo",
    ],
    suffixes_2: &["om", "em", "im", "ih", "ah", "eh", "oj", "ej", "ov", "ev", "mi"],
};

static ASCII_FOLDED: SnowballTables = SnowballTables {
    suffixes_4: &[
        "ovih", "evih", "ovim", "evim", "osti", "ejsi", "ejsa", "ejse", "ejso",
    ],
    suffixes_3: &[
        "ega", "emu", "emi", "imi", "ima", "oma", "ami", "ova", "ove", "eva", "evi", "ovi", "ali",
        "ale", "alo",
    ],
    suffixes_2: &["om", "em", "im", "ih", "ah", "eh", "oj", "ej", "ov", "ev", "mi"],
};

/// Region-restricted (Snowball-style) stemmer for Slovenian.
pub struct SlovenianSnowballStemmer {
    tables: &'static SnowballTables,
}

impl SlovenianSnowballStemmer {
    /// Create a stemmer for lowercase input carrying diacritical marks.
    pub fn new() -> Self {
        SlovenianSnowballStemmer { tables: &DIACRITIC }
    }

    /// Create a stemmer for lowercase, ASCII-folded input.
    pub fn ascii_folded() -> Self {
        SlovenianSnowballStemmer {
            tables: &ASCII_FOLDED,
        }
    }

    /// Position just after the first non-vowel following the first vowel,
    /// or `len` when no such transition exists (empty region, no stripping).
    fn r1(buf: &[char], len: usize) -> usize {
        let mut seen_vowel = false;
        for (i, &c) in buf[..len].iter().enumerate() {
            let is_vowel = VOWELS.contains(&c);
            if seen_vowel && !is_vowel {
                return i + 1;
            }
            if is_vowel {
                seen_vowel = true;
            }
        }
        len
    }

    fn strip(&self, buf: &[char], len: usize, r1: usize) -> usize {
        for &suffix in self.tables.suffixes_4 {
            if len >= 4 && len - 4 >= r1 && ends_with(buf, len, suffix) {
                return len - 4;
            }
        }
        for &suffix in self.tables.suffixes_3 {
            if len >= 3 && len - 3 >= r1 && ends_with(buf, len, suffix) {
                return len - 3;
            }
        }
        // Short buckets carry an extra floor so no stem degenerates below
        // two characters.
        for &suffix in self.tables.suffixes_2 {
            if len >= 4 && len - 2 >= r1 && ends_with(buf, len, suffix) {
                return len - 2;
            }
        }
        if len >= 3 && len - 1 >= r1 && len - 1 >= 2 && VOWELS.contains(&buf[len - 1]) {
            return len - 1;
        }
        len
    }
}

impl Default for SlovenianSnowballStemmer {
    fn default() -> Self {
        Self::new()
    }
}

impl Stemmer for SlovenianSnowballStemmer {
    fn stem(&self, buf: &mut [char], len: usize) -> usize {
        if len <= 3 {
            return len;
        }
        let r1 = Self::r1(buf, len);
        self.strip(buf, len, r1)
    }

    fn name(&self) -> &'static str {
        "slovenian_snowball"
    }
}
