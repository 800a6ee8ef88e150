// Label Normalizer - canonicalizes raw category label text
//
// Labels are authored by hand, so the same category arrives with mixed
// case, en-dashes, curly quotes, and uneven spacing. Everything the
// compiler matches against goes through normalize_label() first.
//
// Negation is a SEPARATE signal tested against the original label:
// boolean-flag rules flip polarity on it, but range/contains rules must
// ignore it entirely.

use once_cell::sync::Lazy;
use regex::Regex;

/// Canonical form of a raw label: lowercase, ASCII hyphens and quotes,
/// single-spaced, trimmed.
pub fn normalize_label(raw: &str) -> String {
    let mapped: String = raw
        .to_lowercase()
        .chars()
        .map(|c| match c {
            '\u{2013}' | '\u{2014}' => '-',  // en-dash, em-dash
            '\u{201c}' | '\u{201d}' => '"',  // curly double quotes
            '\u{2018}' | '\u{2019}' => '\'', // curly single quotes
            _ => c,
        })
        .collect();

    mapped.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Fixed set of negation markers, word-bounded so "nobel" or "north"
/// never trip the bare "no"/"not".
static NEGATION: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\b(not|no|did not|does not|was not|is not|never|didn['\u{2019}]t|doesn['\u{2019}]t|wasn['\u{2019}]t|isn['\u{2019}]t)\b")
        .expect("negation pattern is valid")
});

/// Whether the label carries one of the fixed negation markers.
/// Tested against the raw label, not the normalized form.
pub fn is_negated(raw: &str) -> bool {
    NEGATION.is_match(raw)
}

// ============================================================================
// TESTS
// ============================================================================
