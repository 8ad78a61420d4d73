//! Code generation
//!
//! Both generators consume the tree produced by the semantic analyzer:
//! - [`postfix`]: stack-oriented postfix code; the symbol table is a plain
//!   copy of the lexer's.
//! - [`three_address`]: linear three-address code; the generator extends
//!   its copy of the table with `#T<k>` temporaries.
//!
//! Neither generator touches the lexer's own table — each works on a clone
//! handed to it by the caller.

pub mod postfix;
pub mod three_address;
