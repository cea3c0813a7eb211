//! Light stemmer for Croatian.
//!
//! A peer of the Czech/Slovak/Slovenian engines: case-suffix removal,
//! possessive removal, and a final normalization that undoes sibilarization
//! (`vuci` back to `vuk`, `nozi` back to `nog`).
//!
//! A handful of irregular forms with stem-internal alternations are handled
//! by an explicit lookup before the suffix phases, since no suffix rule can
//! relate `zao` to `zlo` or `dobar` to `dobr`.
//!
//! Croatian suffix literals carry no diacritics, so there is no separate
//! ASCII-fold table for this engine.

use crate::analysis::token_filter::stem::Stemmer;
use crate::analysis::token_filter::stem::rules::{
    NormRule, SuffixRule, apply_first, ends_with, norm, normalize_tail, t,
};

/// Whole-word irregular forms, rewritten in place before the rule phases.
/// Every replacement is no longer than its source form.
static IRREGULAR: &[(&str, &str)] = &[
    ("zao", "zlo"),
    ("zla", "zlo"),
    ("zlu", "zlo"),
    ("zli", "zlo"),
    ("zle", "zlo"),
    ("dobar", "dobr"),
];

static CASE_RULES: &[SuffixRule] = &[
    t("ovima", 8, 5),
    t("evima", 8, 5),
    t("ijama", 8, 5),
    t("ijima", 8, 5),
    t("ima", 6, 3),
    t("ama", 6, 3),
    t("oga", 6, 3),
    t("ome", 6, 3),
    t("omu", 6, 3),
    t("ega", 6, 3),
    t("emu", 6, 3),
    t("om", 5, 2),
    t("em", 5, 2),
    t("og", 5, 2),
    t("eg", 5, 2),
    t("im", 5, 2),
    t("ih", 5, 2),
    t("oj", 5, 2),
];

static POSSESSIVE_RULES: &[SuffixRule] = &[t("ov", 6, 2), t("ev", 6, 2), t("in", 6, 2)];

static NORM_RULES: &[NormRule] = &[norm("c", "k"), norm("z", "g")];

const VOWELS: &[char] = &['a', 'e', 'i', 'o', 'u'];

/// Light stemmer for Croatian.
pub struct CroatianStemmer;

impl CroatianStemmer {
    pub fn new() -> Self {
        CroatianStemmer
    }

    /// Rewrite a whole-word irregular form to its stem. Returns the new
    /// length when a form matched.
    fn rewrite_irregular(buf: &mut [char], len: usize) -> Option<usize> {
        for &(form, stem) in IRREGULAR {
            if form.chars().count() == len && ends_with(buf, len, form) {
                for (i, c) in stem.chars().enumerate() {
                    buf[i] = c;
                }
                return Some(stem.chars().count());
            }
        }
        None
    }

    fn remove_case(&self, buf: &mut [char], len: usize) -> usize {
        if let Some(new_len) = apply_first(buf, len, CASE_RULES, &[]) {
            return new_len;
        }

        if len > 3 && VOWELS.contains(&buf[len - 1]) {
            return len - 1;
        }

        len
    }

    fn remove_possessives(&self, buf: &mut [char], len: usize) -> usize {
        apply_first(buf, len, POSSESSIVE_RULES, &[]).unwrap_or(len)
    }
}

impl Default for CroatianStemmer {
    fn default() -> Self {
        Self::new()
    }
}

impl Stemmer for CroatianStemmer {
    fn stem(&self, buf: &mut [char], len: usize) -> usize {
        if let Some(new_len) = Self::rewrite_irregular(buf, len) {
            return new_len;
        }

        let mut len = self.remove_case(buf, len);
        len = self.remove_possessives(buf, len);
        if len > 0 {
            normalize_tail(buf, len, NORM_RULES);
        }
        len
    }

    fn name(&self) -> &'static str {
        "croatian"
    }
}
