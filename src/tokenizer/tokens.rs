use lazy_static::lazy_static;
use std::{collections::HashSet, fmt::Display};

lazy_static! {
    pub static ref KEYWORDS: HashSet<&'static str> = {
        let mut set = HashSet::new();
        set.insert("int");
        set.insert("for");
        set.insert("return");
        set
    };

    pub static ref OPERATORS: HashSet<&'static str> = {
        let mut set = HashSet::new();
        set.insert("=");
        set.insert("+");
        set.insert("++");
        set.insert("<");
        set
    };

    pub static ref PUNCTUATION: HashSet<char> = {
        let mut set = HashSet::new();
        set.insert(';');
        set.insert('(');
        set.insert(')');
        set.insert('{');
        set.insert('}');
        set
    };
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum TokenKind {
    Keyword,
    Identifier,
    Number,
    Operator,
    Punctuation,
    Unknown,
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            TokenKind::Keyword => "KEYWORD",
            TokenKind::Identifier => "IDENTIFIER",
            TokenKind::Number => "NUMBER",
            TokenKind::Operator => "OPERATOR",
            TokenKind::Punctuation => "PUNCTUATION",
            TokenKind::Unknown => "UNKNOWN",
        };
        write!(f, "{}", name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub value: String,
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} | {}", self.value, self.kind)
    }
}

pub fn is_keyword(value: &str) -> bool {
    KEYWORDS.contains(value)
}

pub fn is_operator(value: &str) -> bool {
    OPERATORS.contains(value)
}

pub fn is_punctuation(c: char) -> bool {
    PUNCTUATION.contains(&c)
}

/// One or more digits, optionally followed by a decimal point and one or
/// more digits. No sign, no exponent, no trailing or leading dot.
pub fn is_number(value: &str) -> bool {
    let mut seen_dot = false;
    let mut integer_digits = false;
    let mut fraction_digits = false;

    for c in value.chars() {
        if c.is_ascii_digit() {
            if seen_dot {
                fraction_digits = true;
            } else {
                integer_digits = true;
            }
        } else if c == '.' && !seen_dot {
            seen_dot = true;
        } else {
            return false;
        }
    }

    integer_digits && (!seen_dot || fraction_digits)
}

/// A leading ASCII letter or underscore, followed by any number of ASCII
/// letters, digits, or underscores.
pub fn is_identifier(value: &str) -> bool {
    let mut chars = value.chars();

    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        _ => return false,
    }

    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}
