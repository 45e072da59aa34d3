//! Locale-aware ordering for display names.
//!
//! Approximates the default collation used by desktop toolkits, level by
//! level: base letters case-insensitively and without accents (with
//! whitespace, then punctuation, then digits, then letters), then accents,
//! then case with lowercase first.

use std::cmp::Ordering;

/// Compare two display names for sorting.
pub fn compare(a: &str, b: &str) -> Ordering {
    primary_key(a)
        .cmp(primary_key(b))
        .then_with(|| accent_key(a).cmp(accent_key(b)))
        .then_with(|| case_key(a).cmp(case_key(b)))
        .then_with(|| a.cmp(b))
}

fn folded(s: &str) -> impl Iterator<Item = (char, char)> + '_ {
    s.chars()
        .flat_map(char::to_lowercase)
        .map(|c| (fold_accent(c), c))
}

/// Base letters, grouped by character class.
fn primary_key(s: &str) -> impl Iterator<Item = (u8, char)> + '_ {
    folded(s).map(|(base, _)| (char_class(base), base))
}

/// Unaccented before accented at the first accent difference.
fn accent_key(s: &str) -> impl Iterator<Item = bool> + '_ {
    folded(s).map(|(base, c)| base != c)
}

/// Lowercase before uppercase at the first case difference.
fn case_key(s: &str) -> impl Iterator<Item = bool> + '_ {
    s.chars().map(char::is_uppercase)
}

fn char_class(c: char) -> u8 {
    if c.is_whitespace() {
        0
    } else if c.is_alphanumeric() {
        if c.is_numeric() { 2 } else { 3 }
    } else {
        1
    }
}

/// Map common Latin accented letters to their base letter.
fn fold_accent(c: char) -> char {
    match c {
        'à' | 'á' | 'â' | 'ã' | 'ä' | 'å' | 'ā' | 'ă' | 'ą' => 'a',
        'ç' | 'ć' | 'č' => 'c',
        'ď' => 'd',
        'è' | 'é' | 'ê' | 'ë' | 'ē' | 'ė' | 'ę' | 'ě' => 'e',
        'ì' | 'í' | 'î' | 'ï' | 'ī' | 'į' => 'i',
        'ł' => 'l',
        'ñ' | 'ń' | 'ň' => 'n',
        'ò' | 'ó' | 'ô' | 'õ' | 'ö' | 'ø' | 'ō' | 'ő' => 'o',
        'ř' => 'r',
        'ś' | 'š' | 'ş' => 's',
        'ť' => 't',
        'ù' | 'ú' | 'û' | 'ü' | 'ū' | 'ů' | 'ű' => 'u',
        'ý' | 'ÿ' => 'y',
        'ź' | 'ż' | 'ž' => 'z',
        other => other,
    }
}
