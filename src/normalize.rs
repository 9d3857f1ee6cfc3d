//! Header canonicalization for the raw listing export.
//!
//! Raw exports spell headers inconsistently ("Restaurant ID",
//! "Average Cost for two"). Each label passes through a title form that
//! inserts word boundaries at existing case and separator breaks, loses
//! its spaces, and lands in `snake_case`, so every downstream column
//! lookup works against a single spelling. The conversion is total: an
//! unexpected label never fails, it just normalizes oddly.

use heck::ToSnakeCase;

pub fn canonical_headers(headers: &[String]) -> Vec<String> {
    headers.iter().map(|label| canonical_header(label)).collect()
}

pub fn canonical_header(label: &str) -> String {
    let titled = titleize(label);
    let compact: String = titled.chars().filter(|ch| *ch != ' ').collect();
    compact.to_snake_case()
}

/// Splits at separators and lowercase-to-uppercase transitions, then
/// capitalizes each word: `"Average Cost for two"` → `"Average Cost For Two"`.
fn titleize(label: &str) -> String {
    let mut words: Vec<String> = Vec::new();
    let mut current = String::new();
    let mut prev: Option<char> = None;

    for ch in label.chars() {
        if matches!(ch, ' ' | '_' | '-' | '.') {
            if !current.is_empty() {
                words.push(std::mem::take(&mut current));
            }
            prev = None;
            continue;
        }
        if let Some(last) = prev
            && last.is_lowercase()
            && ch.is_uppercase()
        {
            words.push(std::mem::take(&mut current));
        }
        current.push(ch);
        prev = Some(ch);
    }
    if !current.is_empty() {
        words.push(current);
    }

    words
        .iter()
        .map(|word| capitalize(word))
        .collect::<Vec<_>>()
        .join(" ")
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}
