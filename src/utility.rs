//! Tokenizing and other small helpers shared by the report decoders.
use optional::{none, some, Optioned};

/// The group used in place of any missing value.
pub(crate) const PLACEHOLDER: &str = "/////";

/// Split a report into its groups.
///
/// Groups are separated by any run of whitespace, so line breaks inside a report don't matter.
/// The `=` that ends a WMO report is removed from the last group.
pub(crate) fn tokenize(text: &str) -> Vec<&str> {
    let mut tokens: Vec<&str> = text.split_whitespace().collect();

    if let Some(last) = tokens.pop() {
        let last = last.trim_end_matches('=');
        if !last.is_empty() {
            tokens.push(last);
        }
    }

    tokens
}

/// True for a group, or part of a group, made up entirely of `/`.
pub(crate) fn is_placeholder(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b == b'/')
}

/// Parse a string of ASCII digits, anything else is `None`.
pub(crate) fn parse_digits(s: &str) -> Option<i32> {
    if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }

    s.parse().ok()
}

/// Move an `Option` into the `Optioned` type used for physical quantities.
pub(crate) fn to_optioned<T>(val: Option<T>) -> Optioned<T>
where
    T: optional::Noned + Copy,
{
    match val {
        Some(v) => some(v),
        None => none(),
    }
}
