//! Error types and error handling for the driver.
//!
//! This module defines the error types reported by the command-line front
//! end. It includes:
//!
//! - Error variants for failures outside the tokenizer itself
//! - Error formatting and display functionality

pub mod errors;

#[cfg(test)]
mod tests;
