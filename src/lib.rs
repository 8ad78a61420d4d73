//! # Introduction
//!
//! exprc compiles a single arithmetic expression through the classic
//! compiler front-end stages and emits one of two alternative intermediate
//! representations: stack-oriented postfix code or linear three-address
//! code, with automatic integer-to-float promotion.
//!
//! ## Pipeline
//!
//! ```text
//! line → Lexer (+symbol table) → Parser → Semantic analysis → {Postfix | Three-address}
//! ```
//!
//! 1. [`lexer`] — strips whitespace, splits the line into validated tokens
//!    and builds the symbol table.
//! 2. [`parser`] — recursive-descent parsing into an expression tree.
//! 3. [`semantic`] — rejects division by a constant zero and inserts
//!    `Int2Float` promotion nodes where operand types disagree.
//! 4. [`codegen`] — postfix and three-address generators walking the
//!    annotated tree.
//! 5. [`visualize`] — box-drawing tree dumps.
//! 6. [`pipeline`] — mode dispatch tying the stages together; not much more
//!    than plumbing around the library API.
//!
//! ## Supported expressions
//!
//! Identifiers (with optional inline `name[f]` / `name[i]` type
//! annotation), integer and float literals, `+ - * /`, unary minus and
//! parentheses. One expression per invocation.

pub mod codegen;
pub mod lexer;
pub mod parser;
pub mod pipeline;
pub mod semantic;
pub mod visualize;
