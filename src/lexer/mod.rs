//! Lexical analysis
//!
//! This module turns one raw expression line into a flat token sequence and
//! an insertion-ordered symbol table:
//! - [`token`]: lexical categories, the classifier and the token type
//! - [`validate`]: span validation run before any token is built
//! - [`symbols`]: the symbol table populated during scanning
//! - [`scanner`]: the lexer driving the three above
//!
//! # Scanning policy
//!
//! All whitespace is stripped up front; token positions are 0-based offsets
//! into the stripped line. The six operator characters `+ - * / ( )` split
//! the line into spans; every span is validated, classified and (for
//! identifiers) registered in the symbol table. The first invalid span
//! aborts the whole run — no partial token list is ever returned.

pub mod scanner;
pub mod symbols;
pub mod token;
pub mod validate;
