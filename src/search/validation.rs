//! Search term rules.
//!
//! [`is_valid_search_term`] is the only rule that gates network requests.
//! [`check_input`] is the stricter per-keystroke check whose result is shown
//! next to the input field.

use thiserror::Error;

/// Fewest characters a term needs before it is sent anywhere.
pub const MIN_TERM_CHARS: usize = 2;
/// Longest term the input hint accepts.
pub const MAX_TERM_CHARS: usize = 70;

/// True when the term has more than one character.
pub fn is_valid_search_term(term: &str) -> bool {
    term.chars().count() >= MIN_TERM_CHARS
}

/// Inline hint shown under the search field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum InputHint {
    #[error("Search term must be at least 2 characters")]
    TooShort,
    #[error("Search term must not exceed 70 characters")]
    TooLong,
    #[error("Only letters, numbers, spaces, hyphens and apostrophes are allowed")]
    InvalidCharacters,
}

/// Runs the input rules in order and reports the first one that fails.
pub fn check_input(term: &str) -> Result<(), InputHint> {
    let len = term.chars().count();
    if len < MIN_TERM_CHARS {
        return Err(InputHint::TooShort);
    }
    if len > MAX_TERM_CHARS {
        return Err(InputHint::TooLong);
    }
    if !term.chars().all(is_allowed_char) {
        return Err(InputHint::InvalidCharacters);
    }
    Ok(())
}

fn is_allowed_char(ch: char) -> bool {
    ch.is_ascii_alphanumeric()
        || ('\u{C0}'..='\u{FF}').contains(&ch)
        || ch.is_whitespace()
        || ch == '-'
        || ch == '\''
}
