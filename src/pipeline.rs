//! Mode dispatch: runs the pipeline stages for one input line and collects
//! the output documents each mode produces.
//!
//! [`compile`] is pure with respect to the filesystem — outputs come back
//! as named documents for the caller (the binary, or a test) to write.

use std::fmt;

use crate::codegen::postfix::PostfixGenerator;
use crate::codegen::three_address::ThreeAddressGenerator;
use crate::lexer::scanner::Lexer;
use crate::lexer::validate::LexError;
use crate::parser::parser::{ParseError, Parser};
use crate::semantic::{SemanticAnalyzer, SemanticError};
use crate::visualize;

/// Processing modes selected on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Token and symbol dumps.
    Lex,
    /// Raw syntax tree dump.
    Syntax,
    /// Promoted (semantically annotated) tree dump.
    Semantic,
    /// Three-address code plus extended symbol dump.
    ThreeAddress,
    /// Postfix code plus symbol dump.
    Postfix,
}

impl Mode {
    /// Parse the command-line mode name.
    pub fn from_arg(arg: &str) -> Option<Mode> {
        match arg {
            "lex" => Some(Mode::Lex),
            "syn" => Some(Mode::Syntax),
            "sem" => Some(Mode::Semantic),
            "gen1" => Some(Mode::ThreeAddress),
            "gen2" => Some(Mode::Postfix),
            _ => None,
        }
    }
}

/// Any error surfaced by a pipeline stage; the first one aborts the run.
#[derive(Debug)]
pub enum CompileError {
    Lex(LexError),
    Parse(ParseError),
    Semantic(SemanticError),
}

impl fmt::Display for CompileError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CompileError::Lex(e) => write!(f, "{}", e),
            CompileError::Parse(e) => write!(f, "{}", e),
            CompileError::Semantic(e) => write!(f, "{}", e),
        }
    }
}

impl std::error::Error for CompileError {}

impl From<LexError> for CompileError {
    fn from(err: LexError) -> Self {
        CompileError::Lex(err)
    }
}

impl From<ParseError> for CompileError {
    fn from(err: ParseError) -> Self {
        CompileError::Parse(err)
    }
}

impl From<SemanticError> for CompileError {
    fn from(err: SemanticError) -> Self {
        CompileError::Semantic(err)
    }
}

/// One named output document produced by a mode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputFile {
    pub name: String,
    pub content: String,
}

impl OutputFile {
    fn new(name: &str, content: String) -> Self {
        Self {
            name: name.to_string(),
            content,
        }
    }
}

/// File names used by the modes with fixed outputs.
pub const SYNTAX_TREE_FILE: &str = "syntax_tree.txt";
pub const SEMANTIC_TREE_FILE: &str = "syntax_tree_mod.txt";
pub const THREE_ADDRESS_FILE: &str = "portable_code.txt";
pub const POSTFIX_FILE: &str = "postfix.txt";
pub const GENERATOR_SYMBOLS_FILE: &str = "symbols.txt";

/// Run `mode` over one expression line.
///
/// `tokens_file` and `symbols_file` name the two documents of the `lex`
/// mode; the other modes use the fixed names above.
pub fn compile(
    mode: Mode,
    line: &str,
    tokens_file: &str,
    symbols_file: &str,
) -> Result<Vec<OutputFile>, CompileError> {
    let mut lexer = Lexer::new(line);
    let tokens = lexer.tokenize()?;
    let symbols = lexer.into_symbols();

    match mode {
        Mode::Lex => {
            let mut token_dump = String::new();
            for token in &tokens {
                token_dump.push_str(&token.to_string());
                token_dump.push('\n');
            }
            Ok(vec![
                OutputFile::new(tokens_file, token_dump),
                OutputFile::new(symbols_file, symbols.dump()),
            ])
        }
        Mode::Syntax => {
            let tree = Parser::new(tokens).parse()?;
            Ok(vec![OutputFile::new(
                SYNTAX_TREE_FILE,
                visualize::render_tree(&tree),
            )])
        }
        Mode::Semantic => {
            let tree = Parser::new(tokens).parse()?;
            let annotated = SemanticAnalyzer::new(&symbols).analyze(&tree)?;
            Ok(vec![OutputFile::new(
                SEMANTIC_TREE_FILE,
                visualize::render_tree(&annotated),
            )])
        }
        Mode::ThreeAddress => {
            let tree = Parser::new(tokens).parse()?;
            let annotated = SemanticAnalyzer::new(&symbols).analyze(&tree)?;
            let mut generator = ThreeAddressGenerator::new(symbols.clone());
            generator.generate(&annotated);
            Ok(vec![
                OutputFile::new(THREE_ADDRESS_FILE, generator.code_text()),
                OutputFile::new(GENERATOR_SYMBOLS_FILE, generator.symbols().dump_extended()),
            ])
        }
        Mode::Postfix => {
            let tree = Parser::new(tokens).parse()?;
            let annotated = SemanticAnalyzer::new(&symbols).analyze(&tree)?;
            let mut generator = PostfixGenerator::new(symbols.clone());
            generator.generate(&annotated);
            Ok(vec![
                OutputFile::new(POSTFIX_FILE, generator.code_text()),
                OutputFile::new(GENERATOR_SYMBOLS_FILE, generator.symbols().dump_extended()),
            ])
        }
    }
}
