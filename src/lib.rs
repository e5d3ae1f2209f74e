#![allow(clippy::module_inception)]

pub mod errors;
pub mod macros;
pub mod tokenizer;

pub use crate::tokenizer::tokenizer::tokenize;
pub use crate::tokenizer::tokens::{Token, TokenKind};
