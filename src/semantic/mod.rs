//! Semantic analysis: constant-division check and type promotion.
//!
//! Two passes over the raw tree, run in order:
//!
//! 1. **Division-by-zero check** — pure validation; a `/` node whose right
//!    child is a numeric literal equal to 0 aborts the run. Identifier or
//!    subexpression divisors are never flagged, even when statically zero.
//! 2. **Promotion insertion** — copy-on-rewrite; a binary node mixing an
//!    Integer operand with a Float one gets its Integer side wrapped in an
//!    `Int2Float` node. The input tree is left untouched so the
//!    pre-analysis shape stays available for dumps and tests.

use std::fmt;

use crate::lexer::symbols::SymbolTable;
use crate::lexer::token::{LexicalCategory, VariableType};
use crate::parser::tree::{BinOp, SyntaxTree};

/// Semantic errors; all abort the run before any code is generated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SemanticError {
    /// Division whose right operand is the numeric constant 0.
    DivisionByZero,
}

impl fmt::Display for SemanticError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SemanticError::DivisionByZero => {
                write!(f, "Ошибка: обнаружено деление на константу 0")
            }
        }
    }
}

impl std::error::Error for SemanticError {}

/// Tree walker borrowing the lexer's symbol table read-only.
pub struct SemanticAnalyzer<'a> {
    symbols: &'a SymbolTable,
}

impl<'a> SemanticAnalyzer<'a> {
    pub fn new(symbols: &'a SymbolTable) -> Self {
        Self { symbols }
    }

    /// Run both passes, returning the promoted tree.
    pub fn analyze(&self, tree: &SyntaxTree) -> Result<SyntaxTree, SemanticError> {
        check_division_by_zero(tree)?;
        Ok(self.insert_conversions(tree))
    }

    /// Rebuild `node`, wrapping the Integer side of mixed binary operations
    /// in `Int2Float`. Unary minus and existing `Int2Float` nodes are
    /// rebuilt recursively but never themselves re-wrapped.
    fn insert_conversions(&self, node: &SyntaxTree) -> SyntaxTree {
        match node {
            SyntaxTree::Leaf(token) => SyntaxTree::Leaf(token.clone()),
            SyntaxTree::Negate(operand) => {
                SyntaxTree::Negate(Box::new(self.insert_conversions(operand)))
            }
            SyntaxTree::Int2Float(operand) => {
                SyntaxTree::Int2Float(Box::new(self.insert_conversions(operand)))
            }
            SyntaxTree::Binary { op, left, right } => {
                let mut left = self.insert_conversions(left);
                let mut right = self.insert_conversions(right);
                let left_type = subtree_type(&left, self.symbols);
                let right_type = subtree_type(&right, self.symbols);
                if left_type == VariableType::Integer && right_type == VariableType::Float {
                    left = SyntaxTree::Int2Float(Box::new(left));
                } else if left_type == VariableType::Float && right_type == VariableType::Integer {
                    right = SyntaxTree::Int2Float(Box::new(right));
                }
                SyntaxTree::Binary {
                    op: *op,
                    left: Box::new(left),
                    right: Box::new(right),
                }
            }
        }
    }
}

/// Depth-first scan for `/` nodes dividing by a literal zero.
fn check_division_by_zero(node: &SyntaxTree) -> Result<(), SemanticError> {
    if let SyntaxTree::Binary {
        op: BinOp::Div,
        right,
        ..
    } = node
    {
        if let SyntaxTree::Leaf(token) = right.as_ref() {
            if token.category == LexicalCategory::Number {
                if let Ok(value) = token.text.parse::<f64>() {
                    if value == 0.0 {
                        return Err(SemanticError::DivisionByZero);
                    }
                }
            }
        }
    }

    match node {
        SyntaxTree::Leaf(_) => Ok(()),
        SyntaxTree::Negate(operand) | SyntaxTree::Int2Float(operand) => {
            check_division_by_zero(operand)
        }
        SyntaxTree::Binary { left, right, .. } => {
            check_division_by_zero(left)?;
            check_division_by_zero(right)
        }
    }
}

/// Effective type of a subtree against a symbol table.
///
/// `Int2Float` is Float. Identifier leaves read the table (Integer when
/// absent). Number leaves are Float iff the literal carries a fractional or
/// exponent marker. Interior nodes are Float iff any child is. Recomputed
/// on demand — a single-line expression keeps the tree small enough that
/// memoization is not worth carrying.
pub fn subtree_type(node: &SyntaxTree, symbols: &SymbolTable) -> VariableType {
    match node {
        SyntaxTree::Int2Float(_) => VariableType::Float,
        SyntaxTree::Leaf(token) => match token.category {
            LexicalCategory::Identifier => symbols
                .type_of(&token.text)
                .unwrap_or(VariableType::Integer),
            LexicalCategory::Number => {
                if token.text.contains(['.', 'e', 'E']) {
                    VariableType::Float
                } else {
                    VariableType::Integer
                }
            }
            _ => VariableType::Integer,
        },
        SyntaxTree::Negate(operand) => subtree_type(operand, symbols),
        SyntaxTree::Binary { left, right, .. } => {
            if subtree_type(left, symbols) == VariableType::Float
                || subtree_type(right, symbols) == VariableType::Float
            {
                VariableType::Float
            } else {
                VariableType::Integer
            }
        }
    }
}
