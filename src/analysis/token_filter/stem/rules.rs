//! Shared rule-table machinery for the light stemmers.
//!
//! Suffix matching is data, not control flow: each engine owns ordered
//! `&'static` tables of [`SuffixRule`]s, arranged longest-bucket-first so the
//! longest applicable suffix always wins. Within a bucket the listed order is
//! authoritative and the first match stops the scan.
//!
//! All helpers operate on a caller-owned `&mut [char]` plus a logical length
//! and never allocate; transforms only shrink the logical length or rewrite
//! characters below it.

/// What to do with the buffer once a suffix rule has matched.
#[derive(Debug, Clone, Copy)]
pub(crate) enum StemAction {
    /// Drop the last `n` characters.
    Truncate(usize),
    /// Drop the last `n` characters, then palatalize the new tail.
    ///
    /// Palatalization itself removes one more character, so the net effect
    /// of `Palatalize(n)` is a shrink by `n + 1`.
    Palatalize(usize),
}

/// A single suffix-match rule.
///
/// `min_len` is the inclusive minimum source length; it must exceed the
/// suffix length by enough margin that a meaningful stem remains.
#[derive(Debug, Clone, Copy)]
pub(crate) struct SuffixRule {
    pub suffix: &'static str,
    pub min_len: usize,
    pub action: StemAction,
}

/// A palatalization rule: when the buffer ends in `tail`, the leading
/// consonant(s) of the tail are rewritten to `rewrite` (the hard form) and
/// one trailing character is cut.
///
/// `rewrite` is exactly one character shorter than `tail`.
#[derive(Debug, Clone, Copy)]
pub(crate) struct PalatalRule {
    pub tail: &'static str,
    pub rewrite: &'static str,
}

/// A tail-normalization rule: a same-length in-place rewrite of the final
/// characters (e.g. `čt` -> `ck`).
#[derive(Debug, Clone, Copy)]
pub(crate) struct NormRule {
    pub tail: &'static str,
    pub rewrite: &'static str,
}

/// Shorthand constructor for a truncating rule.
pub(crate) const fn t(suffix: &'static str, min_len: usize, n: usize) -> SuffixRule {
    SuffixRule {
        suffix,
        min_len,
        action: StemAction::Truncate(n),
    }
}

/// Shorthand constructor for a palatalizing rule.
pub(crate) const fn p(suffix: &'static str, min_len: usize, n: usize) -> SuffixRule {
    SuffixRule {
        suffix,
        min_len,
        action: StemAction::Palatalize(n),
    }
}

/// Shorthand constructor for a palatalization tail rewrite.
pub(crate) const fn pal(tail: &'static str, rewrite: &'static str) -> PalatalRule {
    PalatalRule { tail, rewrite }
}

/// Shorthand constructor for a tail normalization rewrite.
pub(crate) const fn norm(tail: &'static str, rewrite: &'static str) -> NormRule {
    NormRule { tail, rewrite }
}

/// Returns true if `buf[..len]` ends with `suffix`.
pub(crate) fn ends_with(buf: &[char], len: usize, suffix: &str) -> bool {
    let mut pos = len;
    for c in suffix.chars().rev() {
        if pos == 0 {
            return false;
        }
        pos -= 1;
        if buf[pos] != c {
            return false;
        }
    }
    true
}

/// Apply the first matching suffix rule, if any.
///
/// Returns the new logical length, or `None` if no rule matched.
pub(crate) fn apply_first(
    buf: &mut [char],
    len: usize,
    rules: &[SuffixRule],
    palatal: &[PalatalRule],
) -> Option<usize> {
    for rule in rules {
        if len >= rule.min_len && ends_with(buf, len, rule.suffix) {
            let new_len = match rule.action {
                StemAction::Truncate(n) => len - n,
                StemAction::Palatalize(n) => palatalize(buf, len - n, palatal),
            };
            return Some(new_len);
        }
    }
    None
}

/// Rewrite a soft consonant(+vowel) tail to its hard form, then cut one
/// character. Always shrinks by exactly one.
///
/// Targets of three characters or fewer are only cut, never rewritten;
/// the 2-char palatalizing case rules reach this with `len == 3`.
pub(crate) fn palatalize(buf: &mut [char], len: usize, rules: &[PalatalRule]) -> usize {
    if len <= 3 {
        return len - 1;
    }

    for rule in rules {
        let tail_len = rule.tail.chars().count();
        if len >= tail_len && ends_with(buf, len, rule.tail) {
            let start = len - tail_len;
            for (i, c) in rule.rewrite.chars().enumerate() {
                buf[start + i] = c;
            }
            break;
        }
    }

    len - 1
}

/// Apply the first matching same-length tail rewrite, if any.
pub(crate) fn normalize_tail(buf: &mut [char], len: usize, rules: &[NormRule]) -> bool {
    for rule in rules {
        let tail_len = rule.tail.chars().count();
        if len >= tail_len && ends_with(buf, len, rule.tail) {
            let start = len - tail_len;
            for (i, c) in rule.rewrite.chars().enumerate() {
                buf[start + i] = c;
            }
            return true;
        }
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ends_with() {
        let buf: Vec<char> = "nemocnica".chars().collect();
        assert!(ends_with(&buf, buf.len(), "ica"));
        assert!(ends_with(&buf, buf.len(), ""));
        assert!(!ends_with(&buf, buf.len(), "ice"));
        // Matching respects the logical length, not the physical one.
        assert!(ends_with(&buf, 8, "nic"));
    }

    #[test]
    fn test_ends_with_longer_than_buffer() {
        let buf: Vec<char> = "om".chars().collect();
        assert!(!ends_with(&buf, buf.len(), "atom"));
    }

    #[test]
    fn test_apply_first_takes_first_match() {
        const RULES: &[SuffixRule] = &[
            SuffixRule {
                suffix: "ice",
                min_len: 6,
                action: StemAction::Truncate(1),
            },
            SuffixRule {
                suffix: "ce",
                min_len: 4,
                action: StemAction::Truncate(2),
            },
        ];
        let mut buf: Vec<char> = "radnice".chars().collect();
        let len = buf.len();
        // "ice" is listed first and wins even though "ce" would also match.
        assert_eq!(apply_first(&mut buf, len, RULES, &[]), Some(6));
    }

    #[test]
    fn test_apply_first_honors_guard() {
        const RULES: &[SuffixRule] = &[SuffixRule {
            suffix: "ice",
            min_len: 6,
            action: StemAction::Truncate(1),
        }];
        let mut buf: Vec<char> = "ice".chars().collect();
        let len = buf.len();
        assert_eq!(apply_first(&mut buf, len, RULES, &[]), None);
    }

    #[test]
    fn test_palatalize_rewrites_and_cuts() {
        const PALATAL: &[PalatalRule] = &[
            PalatalRule {
                tail: "ci",
                rewrite: "k",
            },
            PalatalRule {
                tail: "ste",
                rewrite: "sk",
            },
        ];
        let mut buf: Vec<char> = "vlastenci".chars().collect();
        let len = buf.len();
        let new_len = palatalize(&mut buf, len, PALATAL);
        assert_eq!(new_len, 8);
        assert_eq!(buf[..new_len].iter().collect::<String>(), "vlastenk");
    }

    #[test]
    fn test_palatalize_without_match_just_cuts() {
        const PALATAL: &[PalatalRule] = &[PalatalRule {
            tail: "ci",
            rewrite: "k",
        }];
        let mut buf: Vec<char> = "hise".chars().collect();
        let len = buf.len();
        assert_eq!(palatalize(&mut buf, len, PALATAL), 3);
        assert_eq!(buf[..3].iter().collect::<String>(), "his");
    }

    #[test]
    fn test_palatalize_short_target_only_cuts() {
        const PALATAL: &[PalatalRule] = &[PalatalRule {
            tail: "zi",
            rewrite: "h",
        }];
        // A 2-char palatalizing rule on a 5-char word leaves a 3-char
        // target; no tail rewrite, just the cut.
        let mut buf: Vec<char> = "mezi".chars().collect();
        assert_eq!(palatalize(&mut buf, 3, PALATAL), 2);
        assert_eq!(buf[..2].iter().collect::<String>(), "me");
    }

    #[test]
    fn test_normalize_tail() {
        const NORM: &[NormRule] = &[
            NormRule {
                tail: "ct",
                rewrite: "ck",
            },
            NormRule {
                tail: "c",
                rewrite: "k",
            },
        ];
        let mut buf: Vec<char> = "pect".chars().collect();
        let len = buf.len();
        assert!(normalize_tail(&mut buf, len, NORM));
        assert_eq!(buf[..len].iter().collect::<String>(), "peck");
    }
}
