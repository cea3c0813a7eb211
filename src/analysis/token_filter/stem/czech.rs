//! Light stemmer for Czech.
//!
//! Implements the algorithm described in *Indexing and stemming approaches
//! for the Czech language* (Dolamic & Savoy, 2009): case-suffix removal,
//! possessive-suffix removal and a final consonant normalization pass.
//!
//! Input is expected to be lowercase. The default tables assume diacritical
//! marks are present; [`CzechStemmer::ascii_folded`] selects a parallel table
//! for pipelines that strip diacritics before stemming.

use crate::analysis::token_filter::stem::Stemmer;
use crate::analysis::token_filter::stem::rules::{
    NormRule, SuffixRule, apply_first, ends_with, norm, normalize_tail, t,
};

struct CzechTables {
    case_rules: &'static [SuffixRule],
    vowels: &'static [char],
    possessive_rules: &'static [SuffixRule],
    norm_rules: &'static [NormRule],
    /// Penultimate long-u marker collapsed to `o` (`ů`, or `u` when folded).
    penult_u: char,
}

static DIACRITIC: CzechTables = CzechTables {
    case_rules: &[
        t("atech", 8, 5),
        t("ětem", 7, 4),
        t("etem", 7, 4),
        t("atům", 7, 4),
        t("ech", 6, 3),
        t("ich", 6, 3),
        t("ích", 6, 3),
        t("ého", 6, 3),
        t("ěmi", 6, 3),
        t("emi", 6, 3),
        t("ému", 6, 3),
        t("ěte", 6, 3),
        t("ete", 6, 3),
        t("ěti", 6, 3),
        t("eti", 6, 3),
        t("ího", 6, 3),
        t("iho", 6, 3),
        t("ími", 6, 3),
        t("ímu", 6, 3),
        t("imu", 6, 3),
        t("ách", 6, 3),
        t("ata", 6, 3),
        t("aty", 6, 3),
        t("ých", 6, 3),
        t("ama", 6, 3),
        t("ami", 6, 3),
        t("ové", 6, 3),
        t("ovi", 6, 3),
        t("ými", 6, 3),
        t("em", 5, 2),
        t("es", 5, 2),
        t("ém", 5, 2),
        t("ím", 5, 2),
        t("ům", 5, 2),
        t("at", 5, 2),
        t("ám", 5, 2),
        t("os", 5, 2),
        t("us", 5, 2),
        t("ým", 5, 2),
        t("mi", 5, 2),
        t("ou", 5, 2),
    ],
    vowels: &['a', 'e', 'i', 'o', 'u', 'ů', 'y', 'á', 'é', 'í', 'ý', 'ě'],
    possessive_rules: &[t("ov", 6, 2), t("in", 6, 2), t("ův", 6, 2)],
    norm_rules: &[
        norm("čt", "ck"),
        norm("št", "sk"),
        norm("c", "k"),
        norm("č", "k"),
        norm("z", "h"),
        norm("ž", "h"),
    ],
    penult_u: 'ů',
};

// The folded table collapses ě/e, í/i, ů/u and so on; entries that become
// identical after folding are listed once.
static ASCII_FOLDED: CzechTables = CzechTables {
    case_rules: &[
        t("atech", 8, 5),
        t("etem", 7, 4),
        t("atum", 7, 4),
        t("ech", 6, 3),
        t("ich", 6, 3),
        t("eho", 6, 3),
        t("emi", 6, 3),
        t("emu", 6, 3),
        t("ete", 6, 3),
        t("eti", 6, 3),
        t("iho", 6, 3),
        t("imi", 6, 3),
        t("imu", 6, 3),
        t("ach", 6, 3),
        t("ata", 6, 3),
        t("aty", 6, 3),
        t("ych", 6, 3),
        t("ama", 6, 3),
        t("ami", 6, 3),
        t("ove", 6, 3),
        t("ovi", 6, 3),
        t("ymi", 6, 3),
        t("em", 5, 2),
        t("es", 5, 2),
        t("im", 5, 2),
        t("um", 5, 2),
        t("at", 5, 2),
        t("am", 5, 2),
        t("os", 5, 2),
        t("us", 5, 2),
        t("ym", 5, 2),
        t("mi", 5, 2),
        t("ou", 5, 2),
    ],
    vowels: &['a', 'e', 'i', 'o', 'u', 'y'],
    possessive_rules: &[t("ov", 6, 2), t("in", 6, 2), t("uv", 6, 2)],
    norm_rules: &[
        norm("ct", "ck"),
        norm("st", "sk"),
        norm("c", "k"),
        norm("z", "h"),
    ],
    penult_u: 'u',
};

/// Light stemmer for Czech.
pub struct CzechStemmer {
    tables: &'static CzechTables,
}

impl CzechStemmer {
    /// Create a stemmer for lowercase input carrying diacritical marks.
    pub fn new() -> Self {
        CzechStemmer { tables: &DIACRITIC }
    }

    /// Create a stemmer for lowercase, ASCII-folded input.
    pub fn ascii_folded() -> Self {
        CzechStemmer {
            tables: &ASCII_FOLDED,
        }
    }

    fn remove_case(&self, buf: &mut [char], len: usize) -> usize {
        if let Some(new_len) = apply_first(buf, len, self.tables.case_rules, &[]) {
            return new_len;
        }

        // Special case for "liga" in the locative ("lize"), which should join
        // the rest of the paradigm as "lig". Applying the rewrite to longer
        // words would damage them, hence the exact-length match.
        if len == 4 && ends_with(buf, len, "lize") {
            buf[len - 2] = 'g';
            return len - 1;
        }

        if len > 3 && self.tables.vowels.contains(&buf[len - 1]) {
            return len - 1;
        }

        len
    }

    fn remove_possessives(&self, buf: &mut [char], len: usize) -> usize {
        apply_first(buf, len, self.tables.possessive_rules, &[]).unwrap_or(len)
    }

    fn normalize(&self, buf: &mut [char], len: usize) -> usize {
        if normalize_tail(buf, len, self.tables.norm_rules) {
            return len;
        }

        if len > 1 && buf[len - 2] == 'e' {
            // e* > *
            buf[len - 2] = buf[len - 1];
            return len - 1;
        }

        if len > 2 && buf[len - 2] == self.tables.penult_u {
            // *ů* -> *o*
            buf[len - 2] = 'o';
            return len;
        }

        len
    }
}

impl Default for CzechStemmer {
    fn default() -> Self {
        Self::new()
    }
}

impl Stemmer for CzechStemmer {
    fn stem(&self, buf: &mut [char], len: usize) -> usize {
        let mut len = self.remove_case(buf, len);
        len = self.remove_possessives(buf, len);
        if len > 0 {
            len = self.normalize(buf, len);
        }
        len
    }

    fn name(&self) -> &'static str {
        "czech"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stem(stemmer: &CzechStemmer, word: &str) -> String {
        let mut buf: Vec<char> = word.chars().collect();
        let len = buf.len();
        let len = stemmer.stem(&mut buf, len);
        buf[..len].iter().collect()
    }

    #[test]
    fn test_diacritic_pairs() {
        let stemmer = CzechStemmer::new();

        assert_eq!(stem(&stemmer, "stařenk"), "stařenk");
        assert_eq!(stem(&stemmer, "růžové"), "růh");
        assert_eq!(stem(&stemmer, "liga"), "lig");
        assert_eq!(stem(&stemmer, "lize"), "lig");
    }

    #[test]
    fn test_ascii_folded_pairs() {
        let stemmer = CzechStemmer::ascii_folded();

        assert_eq!(stem(&stemmer, "starenk"), "starenk");
        assert_eq!(stem(&stemmer, "starenka"), "starenk");
        assert_eq!(stem(&stemmer, "ruzove"), "ruh");
        assert_eq!(stem(&stemmer, "liga"), "lig");
        assert_eq!(stem(&stemmer, "lize"), "lig");
    }

    #[test]
    fn test_case_suffix_buckets() {
        let stemmer = CzechStemmer::new();

        // 5-char bucket
        assert_eq!(stem(&stemmer, "koťatech"), "koť");
        // 3-char bucket
        assert_eq!(stem(&stemmer, "zámkové"), "zámk");
        // 2-char bucket
        assert_eq!(stem(&stemmer, "hradem"), "hrad");
        // trailing vowel
        assert_eq!(stem(&stemmer, "hrady"), "hrad");
    }

    #[test]
    fn test_possessive_removal() {
        let stemmer = CzechStemmer::new();

        assert_eq!(stem(&stemmer, "karlov"), "karl");
        // The possessive strip exposes a soft č, which normalization hardens.
        assert_eq!(stem(&stemmer, "matčin"), "matk");
    }

    #[test]
    fn test_normalization() {
        let stemmer = CzechStemmer::new();

        // trailing c -> k
        assert_eq!(stem(&stemmer, "ulice"), "ulik");
        // penultimate e collapses onto the final consonant
        assert_eq!(stem(&stemmer, "pátek"), "pátk");
        // ů -> o
        assert_eq!(stem(&stemmer, "dům"), "dom");
    }

    #[test]
    fn test_short_words() {
        let stemmer = CzechStemmer::new();

        // Case and possessive phases leave short words alone, but the
        // e-collapse in normalization has no length guard beyond len > 1.
        assert_eq!(stem(&stemmer, "pes"), "ps");
        assert_eq!(stem(&stemmer, "rok"), "rok");
    }

    #[test]
    fn test_name() {
        assert_eq!(CzechStemmer::new().name(), "czech");
    }
}
