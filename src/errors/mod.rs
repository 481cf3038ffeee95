//! Error types and error handling for the checker.
//!
//! This module defines the error types used by the tokenizer and the
//! structural validator. It includes:
//!
//! - Error structures with source offset information
//! - Specific error variants for each violated rule
//! - The lexical / syntax classification
//! - Helpful error messages and suggestions

pub mod errors;
