use once_cell::sync::Lazy;
use regex::Regex;

static WHITESPACE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").expect("whitespace regex"));

/// `from thence` / `from said` must win over a bare `thence`, so they lead the alternation
static DELIMITERS: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i);|\bfrom\s+thence\b|\bfrom\s+said\b|\bthence\b|\bthen\b")
        .expect("clause delimiter regex")
});

/// Collapse whitespace and fold typographic quotes and degree marks to ASCII forms
#[must_use]
pub fn normalize_text(text: &str) -> String {
    let folded: String = text
        .chars()
        .map(|c| match c {
            '\u{201C}' | '\u{201D}' | '\u{2033}' => '"',
            '\u{2018}' | '\u{2019}' | '\u{2032}' => '\'',
            '\u{00BA}' | '\u{02DA}' => '°',
            other => other,
        })
        .collect();

    WHITESPACE.replace_all(&folded, " ").trim().to_string()
}

/// Split normalized text into call clauses, dropping empty pieces
#[must_use]
pub fn split_clauses(text: &str) -> Vec<String> {
    let normalized = normalize_text(text);

    DELIMITERS
        .split(&normalized)
        .map(|clause| clause.trim().trim_matches(',').trim())
        .filter(|clause| !clause.is_empty())
        .map(str::to_string)
        .collect()
}
