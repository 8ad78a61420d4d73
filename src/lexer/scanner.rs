//! The lexer: splits one input line into tokens and builds the symbol table.

use super::symbols::SymbolTable;
use super::token::{self, LexicalCategory, Token, VariableType};
use super::validate::{self, LexError};

/// Characters that close out a pending span and become one-character tokens.
const OPERATORS: [char; 6] = ['+', '-', '*', '/', '(', ')'];

/// Lexer for a single expression line.
///
/// Whitespace is stripped up front, so token positions are offsets into the
/// stripped line. The lexer owns the symbol table it populates; downstream
/// stages borrow it or take a clone.
pub struct Lexer {
    input: Vec<char>,
    symbols: SymbolTable,
}

impl Lexer {
    pub fn new(line: &str) -> Self {
        Self {
            input: line.chars().filter(|c| !c.is_whitespace()).collect(),
            symbols: SymbolTable::new(),
        }
    }

    /// Tokenize the whole line.
    ///
    /// Scans left to right: an operator character closes out any pending
    /// span and is emitted as its own token; the trailing span is flushed
    /// at end of line. The first invalid span aborts the run — no partial
    /// token list is returned.
    pub fn tokenize(&mut self) -> Result<Vec<Token>, LexError> {
        let mut tokens = Vec::new();
        let mut start = 0;
        for i in 0..self.input.len() {
            if OPERATORS.contains(&self.input[i]) {
                if start != i {
                    self.push_span(start, i, &mut tokens)?;
                }
                self.push_span(i, i + 1, &mut tokens)?;
                start = i + 1;
            }
        }
        self.push_span(start, self.input.len(), &mut tokens)?;
        Ok(tokens)
    }

    /// Symbol table populated by [`Lexer::tokenize`].
    pub fn symbols(&self) -> &SymbolTable {
        &self.symbols
    }

    /// Consume the lexer, yielding the populated table.
    pub fn into_symbols(self) -> SymbolTable {
        self.symbols
    }

    fn push_span(
        &mut self,
        start: usize,
        end: usize,
        tokens: &mut Vec<Token>,
    ) -> Result<(), LexError> {
        if start >= end {
            return Ok(());
        }
        let span: String = self.input[start..end].iter().collect();
        let token = self.build_token(&span, start)?;
        tokens.push(token);
        Ok(())
    }

    fn build_token(&mut self, span: &str, position: usize) -> Result<Token, LexError> {
        // `name[f]` sets or overwrites the identifier's recorded type; the
        // emitted token carries the bare name.
        if let Some((name, var_type)) = split_annotation(span) {
            validate::validate_span(name, position)?;
            let id = self.symbols.declare(name, var_type);
            return Ok(Token::identifier(name, position, id, var_type));
        }

        validate::validate_span(span, position)?;
        let token = Token::new(span, position);
        if token.category == LexicalCategory::Identifier {
            let (id, var_type) = self.symbols.declare_default(span);
            return Ok(Token::identifier(span, position, id, var_type));
        }
        Ok(token)
    }
}

/// Split an annotated identifier span `name[f|F|i|I]` into the bare name
/// and the declared type. Anything else returns `None` and flows through
/// normal validation and classification.
fn split_annotation(span: &str) -> Option<(&str, VariableType)> {
    if span.len() < 4 || !span.ends_with(']') {
        return None;
    }
    let open = span.len() - 3;
    if span.as_bytes()[open] != b'[' {
        return None;
    }
    let name = &span[..open];
    if !token::is_identifier(name) {
        return None;
    }
    match span.as_bytes()[open + 1] {
        b'f' | b'F' => Some((name, VariableType::Float)),
        b'i' | b'I' => Some((name, VariableType::Integer)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_operator_splitting_and_positions() {
        let mut lexer = Lexer::new("2+3*4");
        let tokens = lexer.tokenize().unwrap();

        let texts: Vec<&str> = tokens.iter().map(|t| t.text.as_str()).collect();
        assert_eq!(texts, vec!["2", "+", "3", "*", "4"]);

        let positions: Vec<usize> = tokens.iter().map(|t| t.position).collect();
        assert_eq!(positions, vec![0, 1, 2, 3, 4]);

        assert_eq!(tokens[0].category, LexicalCategory::Number);
        assert_eq!(tokens[1].category, LexicalCategory::Plus);
        assert_eq!(tokens[3].category, LexicalCategory::Multiply);
    }

    #[test]
    fn test_whitespace_stripped_before_positions() {
        let mut lexer = Lexer::new("  1 +  2 ");
        let tokens = lexer.tokenize().unwrap();

        let positions: Vec<usize> = tokens.iter().map(|t| t.position).collect();
        assert_eq!(positions, vec![0, 1, 2]);
    }

    #[test]
    fn test_identifier_gets_id_and_default_type() {
        let mut lexer = Lexer::new("x+y");
        let tokens = lexer.tokenize().unwrap();

        assert_eq!(tokens[0].identifier_id, Some(1));
        assert_eq!(tokens[0].variable_type, Some(VariableType::Integer));
        assert_eq!(tokens[2].identifier_id, Some(2));

        assert_eq!(lexer.symbols().type_of("x"), Some(VariableType::Integer));
    }

    #[test]
    fn test_annotation_strips_brackets_and_sets_type() {
        let mut lexer = Lexer::new("rate[F]*2");
        let tokens = lexer.tokenize().unwrap();

        assert_eq!(tokens[0].text, "rate");
        assert_eq!(tokens[0].category, LexicalCategory::Identifier);
        assert_eq!(tokens[0].variable_type, Some(VariableType::Float));
        assert_eq!(lexer.symbols().type_of("rate"), Some(VariableType::Float));

        // brackets are stripped but the operator after them keeps its
        // stripped-line offset
        assert_eq!(tokens[1].position, 7);
    }

    #[test]
    fn test_reannotation_reuses_id_last_write_wins() {
        let mut lexer = Lexer::new("a+a[f]");
        let tokens = lexer.tokenize().unwrap();

        assert_eq!(tokens[0].identifier_id, Some(1));
        assert_eq!(tokens[2].identifier_id, Some(1));
        assert_eq!(lexer.symbols().type_of("a"), Some(VariableType::Float));
        assert_eq!(lexer.symbols().len(), 1);
    }

    #[test]
    fn test_unannotated_reuse_keeps_recorded_type() {
        let mut lexer = Lexer::new("a[f]+a");
        let tokens = lexer.tokenize().unwrap();

        assert_eq!(tokens[2].variable_type, Some(VariableType::Float));
        assert_eq!(lexer.symbols().len(), 1);
    }

    #[test]
    fn test_invalid_span_aborts_run() {
        let mut lexer = Lexer::new("1+12.");
        let err = lexer.tokenize().unwrap_err();
        assert!(matches!(err, LexError::IllegalConstant { position: 2, .. }));
    }

    #[test]
    fn test_malformed_annotation_becomes_unknown_token() {
        let mut lexer = Lexer::new("a[x]");
        let tokens = lexer.tokenize().unwrap();

        assert_eq!(tokens.len(), 1);
        assert_eq!(tokens[0].category, LexicalCategory::Unknown);
        assert!(lexer.symbols().is_empty());
    }

    #[test]
    fn test_empty_line_yields_no_tokens() {
        let mut lexer = Lexer::new("   ");
        assert!(lexer.tokenize().unwrap().is_empty());
    }
}
