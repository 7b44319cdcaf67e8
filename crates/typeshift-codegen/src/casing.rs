//! Identifier casing transform.
//!
//! Word-boundary-aware lower-camel conversion. The whole identifier is never
//! blindly lower-cased: input is split into words at separators and case
//! boundaries, and only the leading word's case is adjusted, so embedded
//! acronyms come out the way the `camelcase` package renders them
//! (`HTMLParser` -> `htmlParser`, `FooBAR` -> `fooBAR` when preserving).

use crate::config::CamelCaseOptions;

/// Converts an identifier to lower-camel (or Pascal) case.
pub fn camel_case(input: &str, options: &CamelCaseOptions) -> String {
    let words = split_words(input);
    let mut out = String::with_capacity(input.len());

    for (i, word) in words.iter().enumerate() {
        if i == 0 && !options.pascal_case {
            if options.preserve_consecutive_uppercase {
                out.push_str(&lower_first(word));
            } else {
                out.push_str(&word.to_lowercase());
            }
        } else if options.preserve_consecutive_uppercase
            && word.chars().all(|c| !c.is_lowercase())
        {
            out.push_str(word);
        } else {
            out.push_str(&upper_first(&word.to_lowercase()));
        }
    }

    out
}

/// Splits an identifier into words at separators (`_`, `-`, `.`, spaces)
/// and at case boundaries: lower/digit to upper, and the end of an
/// uppercase run followed by a lowercase letter (`HTMLParser` -> `HTML`,
/// `Parser`).
fn split_words(input: &str) -> Vec<String> {
    let mut words = Vec::new();
    let mut current = String::new();
    let chars: Vec<char> = input.chars().collect();

    for (i, &c) in chars.iter().enumerate() {
        if matches!(c, '_' | '-' | '.' | ' ') {
            if !current.is_empty() {
                words.push(std::mem::take(&mut current));
            }
            continue;
        }

        if !current.is_empty() {
            let prev = chars[i - 1];
            let upper_after_lower = c.is_uppercase() && (prev.is_lowercase() || prev.is_numeric());
            let run_end = c.is_uppercase()
                && prev.is_uppercase()
                && chars.get(i + 1).is_some_and(|n| n.is_lowercase());
            if upper_after_lower || run_end {
                words.push(std::mem::take(&mut current));
            }
        }

        current.push(c);
    }

    if !current.is_empty() {
        words.push(current);
    }

    words
}

fn lower_first(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(c) => c.to_lowercase().chain(chars).collect(),
        None => String::new(),
    }
}

fn upper_first(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(c) => c.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
