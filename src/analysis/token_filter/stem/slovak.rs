//! Light stemmer for Slovak.
//!
//! A close cousin of the Czech algorithm, adapted for Slovak morphology.
//! Where Czech folds soft consonants in a final normalization pass, Slovak
//! palatalizes eagerly: many case rules strip their suffix and immediately
//! rewrite the freshly exposed soft tail (`c`/`č` to `k`, `z`/`ž` to `h`)
//! before cutting one more character.
//!
//! Input is expected to be lowercase. The default tables assume diacritical
//! marks are present; [`SlovakStemmer::ascii_folded`] selects a parallel
//! table for pipelines that strip diacritics before stemming.

use crate::analysis::token_filter::stem::Stemmer;
use crate::analysis::token_filter::stem::rules::{
    PalatalRule, SuffixRule, apply_first, p, pal, palatalize, t,
};

struct SlovakTables {
    case_rules: &'static [SuffixRule],
    /// Final vowels that palatalize the tail before being cut.
    soft_vowels: &'static [char],
    /// Final vowels that are simply cut.
    hard_vowels: &'static [char],
    possessive_rules: &'static [SuffixRule],
    palatal_rules: &'static [PalatalRule],
}

static DIACRITIC: SlovakTables = SlovakTables {
    case_rules: &[
        t("ostiach", 9, 4),
        t("ostami", 9, 3),
        t("ostou", 9, 2),
        t("osti", 9, 1),
        t("atoch", 8, 5),
        p("aťom", 7, 3),
        p("och", 6, 2),
        p("ich", 6, 2),
        p("ích", 6, 2),
        p("ého", 6, 2),
        p("ami", 6, 2),
        p("emi", 6, 2),
        p("ému", 6, 2),
        p("ete", 6, 2),
        p("eti", 6, 2),
        p("iho", 6, 2),
        p("ího", 6, 2),
        p("ími", 6, 2),
        p("imu", 6, 2),
        p("aťa", 6, 2),
        t("ách", 6, 3),
        t("ata", 6, 3),
        t("aty", 6, 3),
        t("ých", 6, 3),
        t("ové", 6, 3),
        t("ovi", 6, 3),
        t("ými", 6, 3),
        t("ice", 6, 1),
        t("ciam", 6, 3),
        p("om", 5, 1),
        p("es", 5, 2),
        p("ém", 5, 2),
        p("ím", 5, 2),
        t("um", 5, 2),
        t("at", 5, 2),
        t("ám", 5, 2),
        t("os", 5, 2),
        t("us", 5, 2),
        t("ým", 5, 2),
        t("mi", 5, 2),
        t("ou", 5, 2),
        t("ej", 5, 2),
    ],
    soft_vowels: &['e', 'i', 'í'],
    hard_vowels: &['u', 'y', 'a', 'o', 'á', 'é', 'ý'],
    possessive_rules: &[t("ov", 6, 2), p("in", 6, 1)],
    palatal_rules: &[
        pal("čte", "ck"),
        pal("čti", "ck"),
        pal("čtí", "ck"),
        pal("šte", "sk"),
        pal("šti", "sk"),
        pal("ští", "sk"),
        pal("ci", "k"),
        pal("ce", "k"),
        pal("či", "k"),
        pal("če", "k"),
        pal("zi", "h"),
        pal("ze", "h"),
        pal("ži", "h"),
        pal("že", "h"),
    ],
};

// The folded table collapses á/a, ť/t and so on; entries that become
// identical after folding are listed once.
static ASCII_FOLDED: SlovakTables = SlovakTables {
    case_rules: &[
        t("ostiach", 9, 4),
        t("ostami", 9, 3),
        t("ostou", 9, 2),
        t("osti", 9, 1),
        t("atoch", 8, 5),
        p("atom", 7, 3),
        p("och", 6, 2),
        p("ich", 6, 2),
        p("eho", 6, 2),
        p("ami", 6, 2),
        p("emi", 6, 2),
        p("emu", 6, 2),
        p("ete", 6, 2),
        p("eti", 6, 2),
        p("iho", 6, 2),
        p("imi", 6, 2),
        p("imu", 6, 2),
        p("ata", 6, 2),
        t("ach", 6, 3),
        t("aty", 6, 3),
        t("ych", 6, 3),
        t("ove", 6, 3),
        t("ovi", 6, 3),
        t("ymi", 6, 3),
        t("ice", 6, 1),
        t("ciam", 6, 3),
        p("om", 5, 1),
        p("es", 5, 2),
        p("em", 5, 2),
        p("im", 5, 2),
        t("um", 5, 2),
        t("at", 5, 2),
        t("am", 5, 2),
        t("os", 5, 2),
        t("us", 5, 2),
        t("ym", 5, 2),
        t("mi", 5, 2),
        t("ou", 5, 2),
        t("ej", 5, 2),
    ],
    soft_vowels: &['e', 'i'],
    hard_vowels: &['u', 'y', 'a', 'o'],
    possessive_rules: &[t("ov", 6, 2), p("in", 6, 1)],
    palatal_rules: &[
        pal("cte", "ck"),
        pal("cti", "ck"),
        pal("ste", "sk"),
        pal("sti", "sk"),
        pal("ci", "k"),
        pal("ce", "k"),
        pal("zi", "h"),
        pal("ze", "h"),
    ],
};

/// Light stemmer for Slovak.
pub struct SlovakStemmer {
    tables: &'static SlovakTables,
}

impl SlovakStemmer {
    /// Create a stemmer for lowercase input carrying diacritical marks.
    pub fn new() -> Self {
        SlovakStemmer { tables: &DIACRITIC }
    }

    /// Create a stemmer for lowercase, ASCII-folded input.
    pub fn ascii_folded() -> Self {
        SlovakStemmer {
            tables: &ASCII_FOLDED,
        }
    }

    fn remove_case(&self, buf: &mut [char], len: usize) -> usize {
        if let Some(new_len) = apply_first(buf, len, self.tables.case_rules, self.tables.palatal_rules)
        {
            return new_len;
        }

        if len > 3 {
            let last = buf[len - 1];
            if self.tables.soft_vowels.contains(&last) {
                return palatalize(buf, len, self.tables.palatal_rules);
            }
            if self.tables.hard_vowels.contains(&last) {
                return len - 1;
            }
        }

        len
    }

    fn remove_possessives(&self, buf: &mut [char], len: usize) -> usize {
        apply_first(buf, len, self.tables.possessive_rules, self.tables.palatal_rules)
            .unwrap_or(len)
    }
}

impl Default for SlovakStemmer {
    fn default() -> Self {
        Self::new()
    }
}

impl Stemmer for SlovakStemmer {
    fn stem(&self, buf: &mut [char], len: usize) -> usize {
        let len = self.remove_case(buf, len);
        self.remove_possessives(buf, len)
    }

    fn name(&self) -> &'static str {
        "slovak"
    }
}
