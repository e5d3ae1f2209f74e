use crate::MK_TOKEN;

use super::tokens::{
    is_identifier, is_keyword, is_number, is_operator, is_punctuation, Token, TokenKind,
};

pub struct Tokenizer {
    chars: Vec<char>,
    tokens: Vec<Token>,
    pos: usize,
}

impl Tokenizer {
    pub fn new(source: &str) -> Tokenizer {
        Tokenizer {
            chars: source.chars().collect(),
            tokens: vec![],
            pos: 0,
        }
    }

    pub fn advance_n(&mut self, n: usize) {
        self.pos += n;
    }

    pub fn push(&mut self, token: Token) {
        self.tokens.push(token);
    }

    pub fn at(&self) -> char {
        self.chars[self.pos]
    }

    pub fn peek_next(&self) -> Option<char> {
        self.chars.get(self.pos + 1).copied()
    }

    pub fn at_eof(&self) -> bool {
        self.pos >= self.chars.len()
    }
}

// Matches C `isspace`: space, tab, CR, LF, vertical tab, form feed.
fn is_space(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\r' | '\n' | '\x0B' | '\x0C')
}

fn is_operator_start(c: char) -> bool {
    matches!(c, '+' | '=' | '<')
}

fn is_word_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '.' || c == '_'
}

fn punctuation_handler(tokenizer: &mut Tokenizer) {
    let value = String::from(tokenizer.at());

    tokenizer.push(MK_TOKEN!(TokenKind::Punctuation, value));
    tokenizer.advance_n(1);
}

fn operator_handler(tokenizer: &mut Tokenizer) {
    let mut value = String::from(tokenizer.at());

    // Only `+` pairs up with a following `+`; `=` and `<` are always single.
    if tokenizer.at() == '+' && tokenizer.peek_next() == Some('+') {
        value.push('+');
        tokenizer.advance_n(1);
    }
    tokenizer.advance_n(1);

    let kind = if is_operator(&value) {
        TokenKind::Operator
    } else {
        TokenKind::Unknown
    };
    tokenizer.push(MK_TOKEN!(kind, value));
}

fn word_handler(tokenizer: &mut Tokenizer) {
    let mut value = String::new();

    while !tokenizer.at_eof() && is_word_char(tokenizer.at()) {
        value.push(tokenizer.at());
        tokenizer.advance_n(1);
    }

    let kind = if is_keyword(&value) {
        TokenKind::Keyword
    } else if is_number(&value) {
        TokenKind::Number
    } else if is_identifier(&value) {
        TokenKind::Identifier
    } else {
        TokenKind::Unknown
    };
    tokenizer.push(MK_TOKEN!(kind, value));
}

fn unknown_handler(tokenizer: &mut Tokenizer) {
    let value = String::from(tokenizer.at());

    tokenizer.push(MK_TOKEN!(TokenKind::Unknown, value));
    tokenizer.advance_n(1);
}

/// Scans `source` into an ordered token stream in a single left-to-right
/// pass. Never fails: anything outside the fixed vocabulary comes back as an
/// Unknown token rather than an error.
pub fn tokenize(source: &str) -> Vec<Token> {
    let mut tokenizer = Tokenizer::new(source);

    while !tokenizer.at_eof() {
        let c = tokenizer.at();

        if is_space(c) {
            tokenizer.advance_n(1);
        } else if is_punctuation(c) {
            punctuation_handler(&mut tokenizer);
        } else if is_operator_start(c) {
            operator_handler(&mut tokenizer);
        } else if is_word_char(c) {
            word_handler(&mut tokenizer);
        } else {
            unknown_handler(&mut tokenizer);
        }
    }

    tokenizer.tokens
}
