//! Parser module for validating a Chiwis token stream.
//!
//! This module walks the token stream produced by the lexer and checks
//! that it forms a valid program. It does not build a syntax tree; it
//! either accepts the program or reports the first violation found:
//!
//! - Block nesting and brace balance
//! - Statement dispatch through a token-kind lookup table
//! - `Si` conditions (operand / operator alternation)
//! - `para` loop headers (init, condition, update with a per-loop scope)
//! - `kiara.salida` output segments

pub mod condition;
pub mod lookups;
pub mod loop_header;
pub mod operands;
pub mod output;
pub mod parser;
pub mod split;
pub mod stmt;
