use std::collections::HashMap;

use crate::{errors::errors::Error, lexer::tokens::TokenKind};

use super::{parser::Parser, stmt::*};

pub type StmtHandler = fn(&mut Parser<'_>) -> Result<(), Error>;

// Lookup table inside parser struct, so it's easier
pub type StmtLookup = HashMap<TokenKind, StmtHandler>;

/// Registers the handler for every token kind allowed in statement position.
///
/// Kinds left out here (`main()`, `{`, a lone `No`, `EndOfInput`) are
/// reported as unexpected when they show up inside a block.
pub fn create_token_lookups(parser: &mut Parser) {
    // Declarations, checked whole by the lexer
    parser.stmt(TokenKind::DeclInt, parse_single_token_stmt);
    parser.stmt(TokenKind::DeclFloat, parse_single_token_stmt);
    parser.stmt(TokenKind::DeclString, parse_single_token_stmt);
    parser.stmt(TokenKind::DeclBool, parse_single_token_stmt);
    parser.stmt(TokenKind::DeclGeneric, parse_single_token_stmt);
    parser.stmt(TokenKind::DeclList, parse_single_token_stmt);

    parser.stmt(TokenKind::Assignment, parse_single_token_stmt);
    parser.stmt(TokenKind::Input, parse_single_token_stmt);

    // Statements with content validated here
    parser.stmt(TokenKind::Output, parse_output_stmt);
    parser.stmt(TokenKind::If, parse_if_stmt);
    parser.stmt(TokenKind::ForLoop, parse_for_stmt);

    parser.stmt(TokenKind::Comment, parse_comment);
}
