//! Lexical analysis module for the checker.
//!
//! This module contains the tokenizer that converts Chiwis source text
//! into a stream of classified tokens for validation. It handles:
//!
//! - Ordered, first-match tokenization using anchored regex patterns
//! - Whole-statement tokens for declarations, assignments and I/O
//! - Loose capture of `Si`/`para`/`kiara.salida` headers for later validation
//! - Token offset tracking for error reporting
//! - Comments and whitespace handling

pub mod lexer;
pub mod tokens;

#[cfg(test)]
mod tests;
