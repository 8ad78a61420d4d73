//! Token definitions and lexical classification.
//!
//! A span of source text is mapped to exactly one [`LexicalCategory`] by
//! testing the category patterns in a fixed priority order; [`Unknown`] is
//! the fallback when no pattern matches the full span.
//!
//! [`Unknown`]: LexicalCategory::Unknown

use std::fmt;

/// Declared numeric type of a variable or generated temporary.
///
/// Float dominates Integer under promotion: a binary operation with at
/// least one Float operand produces a Float result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VariableType {
    Integer,
    Float,
}

impl VariableType {
    /// Nominative form used in the lexical symbol dump.
    pub fn russian_name(self) -> &'static str {
        match self {
            VariableType::Integer => "целый",
            VariableType::Float => "вещественный",
        }
    }

    /// Genitive form used in the token dump ("... целого типа").
    pub fn russian_genitive(self) -> &'static str {
        match self {
            VariableType::Integer => "целого",
            VariableType::Float => "вещественного",
        }
    }

    /// Lowercase English form used in the generators' symbol dump.
    pub fn english_name(self) -> &'static str {
        match self {
            VariableType::Integer => "integer",
            VariableType::Float => "float",
        }
    }
}

/// All lexical categories recognized by the classifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LexicalCategory {
    OpenParen,
    CloseParen,
    Plus,
    Minus,
    Multiply,
    Divide,
    Number,
    Identifier,
    Unknown,
}

impl LexicalCategory {
    /// Categories in classification priority order. `Unknown` is absent on
    /// purpose: it is the fallback, not a pattern.
    const PRIORITY: [LexicalCategory; 8] = [
        LexicalCategory::OpenParen,
        LexicalCategory::CloseParen,
        LexicalCategory::Plus,
        LexicalCategory::Minus,
        LexicalCategory::Multiply,
        LexicalCategory::Divide,
        LexicalCategory::Number,
        LexicalCategory::Identifier,
    ];

    /// Classify a span by testing each category pattern in priority order.
    pub fn classify(span: &str) -> LexicalCategory {
        for category in Self::PRIORITY {
            if category.matches(span) {
                return category;
            }
        }
        LexicalCategory::Unknown
    }

    /// Whether the entire span matches this category's pattern.
    fn matches(self, span: &str) -> bool {
        match self {
            LexicalCategory::OpenParen => span == "(",
            LexicalCategory::CloseParen => span == ")",
            LexicalCategory::Plus => span == "+",
            LexicalCategory::Minus => span == "-",
            LexicalCategory::Multiply => span == "*",
            LexicalCategory::Divide => span == "/",
            LexicalCategory::Number => is_number(span),
            LexicalCategory::Identifier => is_identifier(span),
            LexicalCategory::Unknown => false,
        }
    }
}

impl fmt::Display for LexicalCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            LexicalCategory::OpenParen => "OpenBracketType",
            LexicalCategory::CloseParen => "CloseBracketType",
            LexicalCategory::Plus => "PlusType",
            LexicalCategory::Minus => "MinusType",
            LexicalCategory::Multiply => "MultiplyType",
            LexicalCategory::Divide => "DivideType",
            LexicalCategory::Number => "NumberType",
            LexicalCategory::Identifier => "IdentifierType",
            LexicalCategory::Unknown => "UnknownType",
        };
        write!(f, "{}", name)
    }
}

/// Number literal pattern: optional sign, then `0` or a non-zero-leading
/// digit run, optionally followed by `.` and one or more digits.
///
/// No exponent syntax; leading zeros ("007") and bare dots ("12.") do not
/// match.
pub fn is_number(span: &str) -> bool {
    let bytes = span.as_bytes();
    let mut i = 0;
    if i < bytes.len() && (bytes[i] == b'+' || bytes[i] == b'-') {
        i += 1;
    }
    if i >= bytes.len() || !bytes[i].is_ascii_digit() {
        return false;
    }
    if bytes[i] == b'0' {
        i += 1;
    } else {
        while i < bytes.len() && bytes[i].is_ascii_digit() {
            i += 1;
        }
    }
    if i == bytes.len() {
        return true;
    }
    if bytes[i] != b'.' {
        return false;
    }
    i += 1;
    if i == bytes.len() {
        return false;
    }
    bytes[i..].iter().all(|b| b.is_ascii_digit())
}

/// Identifier pattern: ASCII letter or underscore, then letters, digits and
/// underscores.
pub fn is_identifier(span: &str) -> bool {
    let mut chars = span.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

/// A classified, positioned unit of source text.
///
/// `variable_type` and `identifier_id` are populated only for identifier
/// tokens, after the symbol table lookup. A token is immutable once built;
/// the symbol table, not the token, is authoritative for an identifier's
/// final type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub text: String,
    /// 0-based offset in the whitespace-stripped line.
    pub position: usize,
    pub category: LexicalCategory,
    pub variable_type: Option<VariableType>,
    pub identifier_id: Option<u32>,
}

impl Token {
    /// Build a non-identifier token; the category comes from the classifier.
    pub fn new(text: impl Into<String>, position: usize) -> Self {
        let text = text.into();
        let category = LexicalCategory::classify(&text);
        Token {
            text,
            position,
            category,
            variable_type: None,
            identifier_id: None,
        }
    }

    /// Build an identifier token carrying its symbol table id and the type
    /// recorded at creation time.
    pub fn identifier(
        text: impl Into<String>,
        position: usize,
        id: u32,
        variable_type: VariableType,
    ) -> Self {
        Token {
            text: text.into(),
            position,
            category: LexicalCategory::Identifier,
            variable_type: Some(variable_type),
            identifier_id: Some(id),
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.identifier_id, self.variable_type) {
            (Some(id), Some(variable_type)) => write!(
                f,
                "<id,{}>\t- идентификатор с именем {} {} типа",
                id,
                self.text,
                variable_type.russian_genitive()
            ),
            _ => write!(f, "<{}> - {}", self.text, self.category),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_operators_and_brackets() {
        assert_eq!(LexicalCategory::classify("("), LexicalCategory::OpenParen);
        assert_eq!(LexicalCategory::classify(")"), LexicalCategory::CloseParen);
        assert_eq!(LexicalCategory::classify("+"), LexicalCategory::Plus);
        assert_eq!(LexicalCategory::classify("-"), LexicalCategory::Minus);
        assert_eq!(LexicalCategory::classify("*"), LexicalCategory::Multiply);
        assert_eq!(LexicalCategory::classify("/"), LexicalCategory::Divide);
    }

    #[test]
    fn test_classify_numbers() {
        assert_eq!(LexicalCategory::classify("0"), LexicalCategory::Number);
        assert_eq!(LexicalCategory::classify("42"), LexicalCategory::Number);
        assert_eq!(LexicalCategory::classify("3.14"), LexicalCategory::Number);
        assert_eq!(LexicalCategory::classify("0.5"), LexicalCategory::Number);
    }

    #[test]
    fn test_classify_identifiers() {
        assert_eq!(LexicalCategory::classify("x"), LexicalCategory::Identifier);
        assert_eq!(
            LexicalCategory::classify("_tmp1"),
            LexicalCategory::Identifier
        );
        assert_eq!(
            LexicalCategory::classify("long_name"),
            LexicalCategory::Identifier
        );
    }

    #[test]
    fn test_classify_fallback_is_unknown() {
        assert_eq!(LexicalCategory::classify("a[x]"), LexicalCategory::Unknown);
        assert_eq!(LexicalCategory::classify("#T1"), LexicalCategory::Unknown);
        assert_eq!(LexicalCategory::classify(""), LexicalCategory::Unknown);
    }

    #[test]
    fn test_number_pattern_edges() {
        assert!(is_number("0"));
        assert!(is_number("10"));
        assert!(is_number("-7"));
        assert!(is_number("+3.5"));
        assert!(!is_number("007"));
        assert!(!is_number("12."));
        assert!(!is_number("1.2.3"));
        assert!(!is_number(".5"));
        assert!(!is_number("1e5"));
    }

    #[test]
    fn test_identifier_pattern_edges() {
        assert!(is_identifier("_"));
        assert!(is_identifier("a1"));
        assert!(!is_identifier("1a"));
        assert!(!is_identifier("a-b"));
        assert!(!is_identifier(""));
    }

    #[test]
    fn test_token_display() {
        let number = Token::new("2", 0);
        assert_eq!(number.to_string(), "<2> - NumberType");

        let plus = Token::new("+", 1);
        assert_eq!(plus.to_string(), "<+> - PlusType");

        let ident = Token::identifier("a", 2, 1, VariableType::Float);
        assert_eq!(
            ident.to_string(),
            "<id,1>\t- идентификатор с именем a вещественного типа"
        );
    }
}
