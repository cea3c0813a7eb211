//! Light stemmer for Slovenian.
//!
//! Follows the same light-stemming approach as the Czech and Slovak
//! engines, with suffix information drawn from Popović & Willett,
//! *Processing of documents and queries in a Slovene language free text
//! retrieval system* (1990). Slovenian declension covers six cases, three
//! genders and three numbers (including the dual), which is why the
//! suffix tables carry the `-oma`/`-ema`/`-ovoma` dual endings.
//!
//! Palatalization hardens `c`/`č` to `k` and `z`/`ž` to `g`; `š` does not
//! palatalize in Slovenian.

use crate::analysis::token_filter::stem::Stemmer;
use crate::analysis::token_filter::stem::rules::{
    PalatalRule, SuffixRule, apply_first, p, pal, palatalize, t,
};

struct SlovenianTables {
    case_rules: &'static [SuffixRule],
    possessive_rules: &'static [SuffixRule],
    palatal_rules: &'static [PalatalRule],
}

// Case and possessive suffixes are plain ASCII, so both variants share
// them; only the palatalization tails differ.
static CASE_RULES: &[SuffixRule] = &[
    t("osti", 9, 1),
    t("ovoma", 8, 5),
    t("evoma", 8, 5),
    t("ivoma", 8, 5),
    t("osti", 7, 4),
    t("ovih", 7, 4),
    t("evim", 7, 4),
    t("ivim", 7, 4),
    p("oma", 6, 2),
    p("ima", 6, 2),
    p("ema", 6, 2),
    p("ami", 6, 2),
    p("imi", 6, 2),
    p("emi", 6, 2),
    p("ega", 6, 2),
    p("emu", 6, 2),
    p("ova", 6, 2),
    p("eva", 6, 2),
    p("ove", 6, 2),
    p("eve", 6, 2),
    p("ovi", 6, 2),
    p("evi", 6, 2),
    p("ijo", 6, 2),
    t("ich", 6, 3),
    t("avi", 6, 3),
    t("aje", 6, 3),
    t("alo", 6, 3),
    t("ali", 6, 3),
    t("ale", 6, 3),
    t("ice", 6, 1),
    p("om", 5, 1),
    p("im", 5, 2),
    p("em", 5, 2),
    t("ih", 5, 2),
    t("ah", 5, 2),
    t("ov", 5, 2),
    t("ev", 5, 2),
    t("eh", 5, 2),
    t("at", 5, 2),
    t("il", 5, 2),
    t("ij", 5, 2),
    t("al", 5, 2),
    t("el", 5, 2),
];

static POSSESSIVE_RULES: &[SuffixRule] = &[t("ov", 6, 2), p("in", 6, 1)];

static DIACRITIC: SlovenianTables = SlovenianTables {
    case_rules: CASE_RULES,
    possessive_rules: POSSESSIVE_RULES,
    palatal_rules: &[
        pal("ci", "k"),
        pal("ce", "k"),
        pal("či", "k"),
        pal("če", "k"),
        pal("zi", "g"),
        pal("ze", "g"),
        pal("ži", "g"),
        pal("že", "g"),
    ],
};

static ASCII_FOLDED: SlovenianTables = SlovenianTables {
    case_rules: CASE_RULES,
    possessive_rules: POSSESSIVE_RULES,
    palatal_rules: &[
        pal("ci", "k"),
        pal("ce", "k"),
        pal("zi", "g"),
        pal("ze", "g"),
    ],
};

/// Light stemmer for Slovenian.
pub struct SlovenianStemmer {
    tables: &'static SlovenianTables,
}

impl SlovenianStemmer {
    /// Create a stemmer for lowercase input carrying diacritical marks.
    pub fn new() -> Self {
        SlovenianStemmer { tables: &DIACRITIC }
    }

    /// Create a stemmer for lowercase, ASCII-folded input.
    pub fn ascii_folded() -> Self {
        SlovenianStemmer {
            tables: &ASCII_FOLDED,
        }
    }

    fn remove_case(&self, buf: &mut [char], len: usize) -> usize {
        if let Some(new_len) =
            apply_first(buf, len, self.tables.case_rules, self.tables.palatal_rules)
        {
            return new_len;
        }

        if len > 3 {
            match buf[len - 1] {
                'e' | 'i' => return palatalize(buf, len, self.tables.palatal_rules),
                'a' | 'o' | 'u' => return len - 1,
                _ => {}
            }
        }

        len
    }

    fn remove_possessives(&self, buf: &mut [char], len: usize) -> usize {
        apply_first(buf, len, self.tables.possessive_rules, self.tables.palatal_rules)
            .unwrap_or(len)
    }
}

impl Default for SlovenianStemmer {
    fn default() -> Self {
        Self::new()
    }
}

impl Stemmer for SlovenianStemmer {
    fn stem(&self, buf: &mut [char], len: usize) -> usize {
        let len = self.remove_case(buf, len);
        self.remove_possessives(buf, len)
    }

    fn name(&self) -> &'static str {
        "slovenian"
    }
}
