//! Recursive-descent parser for the expression grammar.
//!
//! ```text
//! expression := term (('+'|'-') term)*
//! term       := factor (('*'|'/') factor)*
//! factor     := '-' factor | '(' expression ')' | Identifier | Number
//! ```

use std::fmt;

use super::tree::{BinOp, SyntaxTree};
use crate::lexer::token::{LexicalCategory, Token};

/// Syntax errors raised while building the tree.
///
/// The index is the position in the token stream, not a character offset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// A parenthesis was opened but never closed.
    MissingClosingParen { index: usize },
    /// `factor` found no valid start token.
    ExpectedOperand { index: usize },
    /// Tokens remained after a complete expression was parsed.
    TrailingToken { index: usize, token: String },
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::MissingClosingParen { index } => {
                write!(f, "Missing closing parenthesis at index {}", index)
            }
            ParseError::ExpectedOperand { index } => {
                write!(f, "Expected operand at index {}", index)
            }
            ParseError::TrailingToken { index, token } => {
                write!(f, "Unexpected token at index {}: {}", index, token)
            }
        }
    }
}

impl std::error::Error for ParseError {}

/// Recursive descent parser over the token stream.
pub struct Parser {
    tokens: Vec<Token>,
    position: usize,
}

impl Parser {
    pub fn new(tokens: Vec<Token>) -> Self {
        Self {
            tokens,
            position: 0,
        }
    }

    /// Parse a full expression and verify every token was consumed.
    pub fn parse(&mut self) -> Result<SyntaxTree, ParseError> {
        let tree = self.parse_expression()?;
        self.check_end()?;
        Ok(tree)
    }

    /// expression := term (('+'|'-') term)*
    pub fn parse_expression(&mut self) -> Result<SyntaxTree, ParseError> {
        let mut left = self.parse_term()?;
        loop {
            let op = if self.check(LexicalCategory::Plus) {
                BinOp::Add
            } else if self.check(LexicalCategory::Minus) {
                BinOp::Sub
            } else {
                break;
            };
            self.advance();
            let right = self.parse_term()?;
            left = SyntaxTree::Binary {
                op,
                left: Box::new(left),
                right: Box::new(right),
            };
        }
        Ok(left)
    }

    /// term := factor (('*'|'/') factor)*
    fn parse_term(&mut self) -> Result<SyntaxTree, ParseError> {
        let mut left = self.parse_factor()?;
        loop {
            let op = if self.check(LexicalCategory::Multiply) {
                BinOp::Mul
            } else if self.check(LexicalCategory::Divide) {
                BinOp::Div
            } else {
                break;
            };
            self.advance();
            let right = self.parse_factor()?;
            left = SyntaxTree::Binary {
                op,
                left: Box::new(left),
                right: Box::new(right),
            };
        }
        Ok(left)
    }

    /// factor := '-' factor | '(' expression ')' | Identifier | Number
    fn parse_factor(&mut self) -> Result<SyntaxTree, ParseError> {
        if self.check(LexicalCategory::Minus) {
            self.advance();
            let operand = self.parse_factor()?;
            return Ok(SyntaxTree::Negate(Box::new(operand)));
        }

        if self.check(LexicalCategory::OpenParen) {
            self.advance();
            let expr = self.parse_expression()?;
            if !self.check(LexicalCategory::CloseParen) {
                return Err(ParseError::MissingClosingParen {
                    index: self.position,
                });
            }
            self.advance();
            return Ok(expr);
        }

        if self.check(LexicalCategory::Identifier) || self.check(LexicalCategory::Number) {
            let token = self.tokens[self.position].clone();
            self.advance();
            return Ok(SyntaxTree::Leaf(token));
        }

        Err(ParseError::ExpectedOperand {
            index: self.position,
        })
    }

    /// Error if any tokens remain after a complete expression.
    fn check_end(&self) -> Result<(), ParseError> {
        if self.position < self.tokens.len() {
            return Err(ParseError::TrailingToken {
                index: self.position,
                token: self.tokens[self.position].text.clone(),
            });
        }
        Ok(())
    }

    fn check(&self, category: LexicalCategory) -> bool {
        self.tokens
            .get(self.position)
            .map_or(false, |t| t.category == category)
    }

    fn advance(&mut self) {
        self.position += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexer::scanner::Lexer;

    fn parse(line: &str) -> Result<SyntaxTree, ParseError> {
        let tokens = Lexer::new(line).tokenize().expect("lexing failed");
        Parser::new(tokens).parse()
    }

    fn binary(tree: &SyntaxTree) -> (BinOp, &SyntaxTree, &SyntaxTree) {
        match tree {
            SyntaxTree::Binary { op, left, right } => (*op, left, right),
            other => panic!("expected binary node, got {:?}", other),
        }
    }

    fn leaf_text(tree: &SyntaxTree) -> &str {
        match tree {
            SyntaxTree::Leaf(token) => &token.text,
            other => panic!("expected leaf, got {:?}", other),
        }
    }

    #[test]
    fn test_precedence_multiplication_binds_tighter() {
        let tree = parse("2+3*4").unwrap();

        let (op, left, right) = binary(&tree);
        assert_eq!(op, BinOp::Add);
        assert_eq!(leaf_text(left), "2");

        let (op, left, right) = binary(right);
        assert_eq!(op, BinOp::Mul);
        assert_eq!(leaf_text(left), "3");
        assert_eq!(leaf_text(right), "4");
    }

    #[test]
    fn test_left_associativity() {
        // 1-2-3 must parse as (1-2)-3
        let tree = parse("1-2-3").unwrap();

        let (op, left, right) = binary(&tree);
        assert_eq!(op, BinOp::Sub);
        assert_eq!(leaf_text(right), "3");

        let (op, left, right) = binary(left);
        assert_eq!(op, BinOp::Sub);
        assert_eq!(leaf_text(left), "1");
        assert_eq!(leaf_text(right), "2");
    }

    #[test]
    fn test_parentheses_return_inner_tree_unchanged() {
        let grouped = parse("(1+2)*3").unwrap();

        let (op, left, right) = binary(&grouped);
        assert_eq!(op, BinOp::Mul);
        assert_eq!(leaf_text(right), "3");

        let (op, ..) = binary(left);
        assert_eq!(op, BinOp::Add);
    }

    #[test]
    fn test_unary_minus_is_single_child() {
        let tree = parse("-a*2").unwrap();

        let (op, left, right) = binary(&tree);
        assert_eq!(op, BinOp::Mul);
        assert_eq!(leaf_text(right), "2");

        match left {
            SyntaxTree::Negate(operand) => assert_eq!(leaf_text(operand), "a"),
            other => panic!("expected unary minus, got {:?}", other),
        }
    }

    #[test]
    fn test_double_unary_minus() {
        let tree = parse("--5").unwrap();
        match tree {
            SyntaxTree::Negate(inner) => {
                assert!(matches!(*inner, SyntaxTree::Negate(_)));
            }
            other => panic!("expected unary minus, got {:?}", other),
        }
    }

    #[test]
    fn test_missing_closing_parenthesis() {
        let err = parse("(1+2").unwrap_err();
        assert_eq!(err, ParseError::MissingClosingParen { index: 4 });
        assert_eq!(err.to_string(), "Missing closing parenthesis at index 4");
    }

    #[test]
    fn test_missing_operand() {
        let err = parse("1+").unwrap_err();
        assert_eq!(err, ParseError::ExpectedOperand { index: 2 });

        let err = parse("").unwrap_err();
        assert_eq!(err, ParseError::ExpectedOperand { index: 0 });

        let err = parse("1+*2").unwrap_err();
        assert_eq!(err, ParseError::ExpectedOperand { index: 2 });
    }

    #[test]
    fn test_trailing_tokens_rejected() {
        let err = parse("1)").unwrap_err();
        assert_eq!(
            err,
            ParseError::TrailingToken {
                index: 1,
                token: ")".to_string()
            }
        );
        assert_eq!(err.to_string(), "Unexpected token at index 1: )");
    }
}
