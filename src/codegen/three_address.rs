//! Three-address code generation.

use crate::lexer::symbols::SymbolTable;
use crate::lexer::token::{LexicalCategory, VariableType};
use crate::parser::tree::SyntaxTree;
use crate::semantic::subtree_type;

/// Operand handed back by the recursive emitter: either a numeric literal
/// written as-is, or a symbol rendered as `<id,N>` through the extended
/// table. Identifiers and temporaries format identically.
enum Operand {
    Literal(String),
    Symbol(u32),
}

impl Operand {
    fn render(&self) -> String {
        match self {
            Operand::Literal(text) => text.clone(),
            Operand::Symbol(id) => format!("<id,{}>", id),
        }
    }
}

/// Emits linear three-address code over the annotated tree.
///
/// The extended symbol table is seeded from the lexer's; temporaries are
/// named `#T<k>` from k = 1 and their ids continue past the table's
/// highest existing id.
pub struct ThreeAddressGenerator {
    symbols: SymbolTable,
    code: Vec<String>,
    temp_counter: u32,
}

impl ThreeAddressGenerator {
    /// `symbols` is the generator's own copy of the lexer's table.
    pub fn new(symbols: SymbolTable) -> Self {
        Self {
            symbols,
            code: Vec::new(),
            temp_counter: 0,
        }
    }

    /// Emit the instructions for `tree`; read results back with
    /// [`ThreeAddressGenerator::code_text`] and
    /// [`ThreeAddressGenerator::symbols`].
    pub fn generate(&mut self, tree: &SyntaxTree) {
        self.emit(tree);
    }

    fn emit(&mut self, node: &SyntaxTree) -> Operand {
        match node {
            SyntaxTree::Leaf(token) => match (token.category, token.identifier_id) {
                (LexicalCategory::Identifier, Some(id)) => Operand::Symbol(id),
                _ => Operand::Literal(token.text.clone()),
            },
            SyntaxTree::Int2Float(operand) => {
                let src = self.emit(operand);
                let dest = self.new_temp(VariableType::Float);
                self.code.push(format!("i2f <id,{}> {}", dest, src.render()));
                Operand::Symbol(dest)
            }
            SyntaxTree::Binary { op, left, right } => {
                let src1 = self.emit(left);
                let src2 = self.emit(right);
                let dest = self.new_temp(self.result_type(left, right));
                self.code.push(format!(
                    "{} <id,{}> {} {}",
                    op.opcode(),
                    dest,
                    src1.render(),
                    src2.render()
                ));
                Operand::Symbol(dest)
            }
            SyntaxTree::Negate(operand) => {
                let src = self.emit(operand);
                let dest = self.new_temp(subtree_type(operand, &self.symbols));
                self.code.push(format!("sub <id,{}> 0 {}", dest, src.render()));
                Operand::Symbol(dest)
            }
        }
    }

    /// Result type of a binary operation: Float if either operand subtree
    /// is Float, else Integer.
    fn result_type(&self, left: &SyntaxTree, right: &SyntaxTree) -> VariableType {
        if subtree_type(left, &self.symbols) == VariableType::Float
            || subtree_type(right, &self.symbols) == VariableType::Float
        {
            VariableType::Float
        } else {
            VariableType::Integer
        }
    }

    /// Allocate the next `#T<k>` temporary with the given type, returning
    /// its freshly assigned table id.
    fn new_temp(&mut self, var_type: VariableType) -> u32 {
        self.temp_counter += 1;
        let name = format!("#T{}", self.temp_counter);
        self.symbols.declare(&name, var_type)
    }

    /// One instruction per line, newline-terminated.
    pub fn code_text(&self) -> String {
        let mut out = String::new();
        for line in &self.code {
            out.push_str(line);
            out.push('\n');
        }
        out
    }

    /// Extended table including generated temporaries.
    pub fn symbols(&self) -> &SymbolTable {
        &self.symbols
    }
}
