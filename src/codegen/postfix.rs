//! Postfix (stack) code generation.

use crate::lexer::symbols::SymbolTable;
use crate::lexer::token::LexicalCategory;
use crate::parser::tree::SyntaxTree;

/// Emits postfix code by a post-order walk of the annotated tree.
///
/// Identifiers come out as `<id,N>`, literals as `<text>`, operators as
/// `<op>`, promotion nodes as `<i2f>` and unary minus as `<-u>`. No
/// temporaries are created.
pub struct PostfixGenerator {
    symbols: SymbolTable,
    code: Vec<String>,
}

impl PostfixGenerator {
    /// `symbols` is the generator's own copy of the lexer's table.
    pub fn new(symbols: SymbolTable) -> Self {
        Self {
            symbols,
            code: Vec::new(),
        }
    }

    /// Append the code for `tree` to the output sequence.
    pub fn generate(&mut self, tree: &SyntaxTree) {
        match tree {
            SyntaxTree::Leaf(token) => match token.category {
                LexicalCategory::Identifier => {
                    if let Some(id) = token.identifier_id {
                        self.code.push(format!("<id,{}>", id));
                    }
                }
                LexicalCategory::Number => {
                    self.code.push(format!("<{}>", token.text));
                }
                _ => {}
            },
            SyntaxTree::Int2Float(operand) => {
                self.generate(operand);
                self.code.push("<i2f>".to_string());
            }
            SyntaxTree::Binary { op, left, right } => {
                self.generate(left);
                self.generate(right);
                self.code.push(format!("<{}>", op.symbol()));
            }
            SyntaxTree::Negate(operand) => {
                self.generate(operand);
                self.code.push("<-u>".to_string());
            }
        }
    }

    /// Emitted tokens joined by single spaces, newline-terminated.
    pub fn code_text(&self) -> String {
        let mut out = self.code.join(" ");
        out.push('\n');
        out
    }

    /// The generator's symbol table (a copy of the lexer's).
    pub fn symbols(&self) -> &SymbolTable {
        &self.symbols
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexer::scanner::Lexer;
    use crate::parser::parser::Parser;
    use crate::semantic::SemanticAnalyzer;

    fn postfix(line: &str) -> String {
        let mut lexer = Lexer::new(line);
        let tokens = lexer.tokenize().expect("lexing failed");
        let symbols = lexer.into_symbols();
        let tree = Parser::new(tokens).parse().expect("parsing failed");
        let annotated = SemanticAnalyzer::new(&symbols)
            .analyze(&tree)
            .expect("semantic analysis failed");

        let mut generator = PostfixGenerator::new(symbols.clone());
        generator.generate(&annotated);
        generator.code_text()
    }

    #[test]
    fn test_precedence_ordering() {
        assert_eq!(postfix("2+3*4"), "<2> <3> <4> <*> <+>\n");
    }

    #[test]
    fn test_promotion_marker_follows_operand() {
        assert_eq!(postfix("a[f]+1"), "<id,1> <1> <i2f> <+>\n");
    }

    #[test]
    fn test_unary_minus_marker() {
        assert_eq!(postfix("-a*2"), "<id,1> <-u> <2> <*>\n");
    }

    #[test]
    fn test_parentheses_flatten_away() {
        assert_eq!(postfix("(1+2)*3"), "<1> <2> <+> <3> <*>\n");
    }

    #[test]
    fn test_single_operand() {
        assert_eq!(postfix("x"), "<id,1>\n");
        assert_eq!(postfix("7"), "<7>\n");
    }
}
