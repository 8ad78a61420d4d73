//! Span validation run before token assembly.
//!
//! A span that fails validation never becomes a token; the lexer aborts the
//! whole run with the error. The character-set check runs first and reports
//! the exact offending offset; the shape checks (number, identifier) run on
//! the full span after it.

use std::fmt;

use super::token;

/// Lexical validation errors. All are fatal to the current run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LexError {
    /// A character outside the permitted set.
    IllegalSymbol { symbol: char, position: usize },
    /// An all digit-and-punctuation span that is not a well-formed number.
    IllegalConstant { text: String, position: usize },
    /// A mixed letters-and-digits span that is not a well-formed identifier.
    IdentifierStartsWithDigit { text: String, position: usize },
}

impl fmt::Display for LexError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LexError::IllegalSymbol { symbol, position } => {
                write!(f, "Недопустимый символ «{}» на позиции {}", symbol, position)
            }
            LexError::IllegalConstant { text, position } => {
                write!(
                    f,
                    "Неправильно задана константа «{}» на позиции {}",
                    text, position
                )
            }
            LexError::IdentifierStartsWithDigit { text, position } => {
                write!(
                    f,
                    "Идентификатор «{}» не может начинаться с цифры на позиции: {}",
                    text, position
                )
            }
        }
    }
}

impl std::error::Error for LexError {}

/// Characters permitted anywhere inside a span.
fn is_allowed(c: char) -> bool {
    c.is_ascii_alphanumeric()
        || matches!(c, '_' | '.' | '+' | '-' | '*' | '/' | '(' | ')' | '[' | ']')
}

/// Validate one raw span starting at `position` in the stripped line.
pub fn validate_span(span: &str, position: usize) -> Result<(), LexError> {
    for (offset, c) in span.chars().enumerate() {
        if !is_allowed(c) {
            return Err(LexError::IllegalSymbol {
                symbol: c,
                position: position + offset,
            });
        }
    }

    let has_digit = span.chars().any(|c| c.is_ascii_digit());
    let has_letter = span.chars().any(|c| c.is_ascii_alphabetic());

    if has_digit && !has_letter && !token::is_number(span) {
        return Err(LexError::IllegalConstant {
            text: span.to_string(),
            position,
        });
    }
    if has_digit && has_letter && !token::is_identifier(span) {
        return Err(LexError::IdentifierStartsWithDigit {
            text: span.to_string(),
            position,
        });
    }

    Ok(())
}
