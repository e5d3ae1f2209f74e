//! Lexical analysis module.
//!
//! This module contains the tokenizer that converts raw source text into a
//! stream of classified tokens. It handles:
//!
//! - Single-pass, maximal-munch scanning over the input characters
//! - Classification of word runs as keywords, numbers, or identifiers
//! - The fixed operator and punctuation vocabularies
//! - Unknown-token recovery for unrecognised input

pub mod tokenizer;
pub mod tokens;
