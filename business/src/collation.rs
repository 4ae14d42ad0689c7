//! Swedish text collation for table sorting.
//!
//! Follows the ordering users expect from Swedish locale comparison:
//!
//! - primary: whitespace and punctuation, then digits, then letters `a..z`
//!   followed by `å`, `ä`, `ö`; case and most accents are ignored
//! - secondary: accented letters after their base letter (`e` < `é`)
//! - tertiary: lower case before upper case
//!
//! `æ` collates with `ä`, `ø` with `ö` and `ü` with `y`, as in Swedish
//! dictionaries.

use std::cmp::Ordering;

const PUNCT_BASE: u32 = 0;
const DIGIT_BASE: u32 = 1_000;
const LETTER_BASE: u32 = 2_000;
const OTHER_BASE: u32 = 10_000;

/// Base letter and accent rank for Latin letters outside `a..z`.
fn fold_accent(c: char) -> Option<(char, u8)> {
    let folded = match c {
        'á' => ('a', 1),
        'à' => ('a', 2),
        'â' => ('a', 3),
        'ã' => ('a', 4),
        'ç' => ('c', 1),
        'é' => ('e', 1),
        'è' => ('e', 2),
        'ê' => ('e', 3),
        'ë' => ('e', 4),
        'í' => ('i', 1),
        'ì' => ('i', 2),
        'î' => ('i', 3),
        'ï' => ('i', 4),
        'ñ' => ('n', 1),
        'ó' => ('o', 1),
        'ò' => ('o', 2),
        'ô' => ('o', 3),
        'õ' => ('o', 4),
        'ú' => ('u', 1),
        'ù' => ('u', 2),
        'û' => ('u', 3),
        'ü' => ('y', 1),
        'ý' => ('y', 2),
        'æ' => ('ä', 1),
        'ø' => ('ö', 1),
        _ => return None,
    };
    Some(folded)
}

fn letter_rank(c: char) -> Option<u32> {
    match c {
        'a'..='z' => Some(c as u32 - 'a' as u32),
        'å' => Some(26),
        'ä' => Some(27),
        'ö' => Some(28),
        _ => None,
    }
}

/// Sort key of one character: (primary, secondary, tertiary).
fn weights(c: char) -> (u32, u8, u8) {
    let mut lower = c.to_lowercase();
    let (lc, case) = match (lower.next(), lower.next()) {
        (Some(l), None) if l != c => (l, 1),
        (Some(l), None) => (l, 0),
        _ => (c, 0),
    };

    let (base, accent) = fold_accent(lc).unwrap_or((lc, 0));

    let primary = if let Some(rank) = letter_rank(base) {
        LETTER_BASE + rank
    } else if let Some(digit) = base.to_digit(10) {
        DIGIT_BASE + digit
    } else if base.is_whitespace() {
        PUNCT_BASE
    } else if base.is_ascii_punctuation() {
        PUNCT_BASE + 1 + base as u32
    } else {
        OTHER_BASE + base as u32
    };

    (primary, accent, case)
}

/// Compare two strings the way a Swedish locale comparison would.
pub fn compare(a: &str, b: &str) -> Ordering {
    let wa: Vec<_> = a.chars().map(weights).collect();
    let wb: Vec<_> = b.chars().map(weights).collect();

    let primary = |w: &[(u32, u8, u8)]| w.iter().map(|&(p, _, _)| p).collect::<Vec<_>>();
    let secondary = |w: &[(u32, u8, u8)]| w.iter().map(|&(_, s, _)| s).collect::<Vec<_>>();
    let tertiary = |w: &[(u32, u8, u8)]| w.iter().map(|&(_, _, t)| t).collect::<Vec<_>>();

    primary(&wa)
        .cmp(&primary(&wb))
        .then_with(|| secondary(&wa).cmp(&secondary(&wb)))
        .then_with(|| tertiary(&wa).cmp(&tertiary(&wb)))
}
