//! Parser state and the top-level validation entry point.
//!
//! The parser keeps a single forward-only cursor over the token stream and
//! the current brace depth. Statement handlers are looked up by token kind,
//! the same way for every block.

use std::collections::HashMap;

use log::debug;

use crate::{
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::{Token, TokenKind, TokenStream},
};

use super::{
    lookups::{create_token_lookups, StmtHandler, StmtLookup},
    stmt::parse_block,
};

/// The main parser structure that maintains validation state.
pub struct Parser<'a> {
    /// The tokens being validated, always ending with `EndOfInput`
    tokens: &'a [Token],
    /// Current position in the token stream
    pos: usize,
    /// Number of blocks currently open
    brace_depth: usize,
    /// Lookup table for statement handlers
    stmt_lookup: StmtLookup,
}

impl<'a> Parser<'a> {
    /// Creates a new Parser over `tokens` with an empty lookup table.
    pub fn new(tokens: &'a TokenStream) -> Self {
        Parser {
            tokens: &tokens[..],
            pos: 0,
            brace_depth: 0,
            stmt_lookup: HashMap::new(),
        }
    }

    /// Returns the current token without advancing.
    ///
    /// Once the cursor reaches the end this keeps returning `EndOfInput`.
    pub fn current_token(&self) -> &'a Token {
        let index = self.pos.min(self.tokens.len() - 1);
        &self.tokens[index]
    }

    /// Returns the kind of the current token.
    pub fn current_token_kind(&self) -> TokenKind {
        self.current_token().kind
    }

    /// Advances to the next token and returns the previous one.
    pub fn advance(&mut self) -> &'a Token {
        let token = self.current_token();
        if token.kind != TokenKind::EndOfInput {
            self.pos += 1;
        }
        token
    }

    /// Expects a token of the specified kind, with optional custom error.
    ///
    /// # Returns
    ///
    /// Returns Ok(Token) and advances if the current token matches,
    /// otherwise returns the given error or an `UnexpectedToken` error.
    pub fn expect_error(
        &mut self,
        expected_kind: TokenKind,
        error: Option<Error>,
    ) -> Result<&'a Token, Error> {
        let token = self.current_token();
        if token.kind != expected_kind {
            return Err(error.unwrap_or_else(|| {
                Error::new(
                    ErrorImpl::UnexpectedToken {
                        expected: expected_kind.to_string(),
                        found: token.kind,
                        lexeme: token.lexeme.clone(),
                    },
                    token.offset(),
                )
            }));
        }

        Ok(self.advance())
    }

    /// Expects a token of the specified kind with the default error.
    pub fn expect(&mut self, expected_kind: TokenKind) -> Result<&'a Token, Error> {
        self.expect_error(expected_kind, None)
    }

    /// Returns true while the cursor has not reached `EndOfInput`.
    pub fn has_tokens(&self) -> bool {
        self.current_token_kind() != TokenKind::EndOfInput
    }

    pub fn brace_depth(&self) -> usize {
        self.brace_depth
    }

    pub fn open_block(&mut self) {
        self.brace_depth += 1;
    }

    /// Leaves the innermost block. The depth may never go below zero.
    pub fn close_block(&mut self, position: usize) -> Result<(), Error> {
        self.brace_depth = self
            .brace_depth
            .checked_sub(1)
            .ok_or_else(|| Error::new(ErrorImpl::StrayCloseBrace, position))?;
        Ok(())
    }

    /// Returns a reference to the statement lookup table.
    pub fn get_stmt_lookup(&self) -> &StmtLookup {
        &self.stmt_lookup
    }

    /// Registers a statement handler for a token kind.
    pub fn stmt(&mut self, kind: TokenKind, stmt_fn: StmtHandler) {
        self.stmt_lookup.insert(kind, stmt_fn);
    }

    /// Returns the source offset of the current token.
    pub fn get_position(&self) -> usize {
        self.current_token().offset()
    }
}

/// Checks that `{` and `}` tokens pair up across the whole stream.
pub fn check_brace_balance(tokens: &TokenStream) -> Result<(), Error> {
    let mut depth = 0usize;

    for token in tokens {
        match token.kind {
            TokenKind::OpenBrace => depth += 1,
            TokenKind::CloseBrace => {
                depth = depth
                    .checked_sub(1)
                    .ok_or_else(|| Error::new(ErrorImpl::StrayCloseBrace, token.offset()))?;
            }
            _ => {}
        }
    }

    if depth != 0 {
        return Err(Error::new(
            ErrorImpl::UnclosedBlock { open: depth },
            tokens.end_of_input().offset(),
        ));
    }

    Ok(())
}

/// Validates a token stream as a Chiwis program.
///
/// The stream must hold exactly one `main()` followed by one balanced block.
/// Validation stops at the first violation, which is returned as the error.
pub fn parse(tokens: &TokenStream) -> Result<(), Error> {
    let mut parser = Parser::new(tokens);
    create_token_lookups(&mut parser);

    check_brace_balance(tokens)?;

    let token = parser.current_token();
    let error = Error::new(
        ErrorImpl::UnexpectedToken {
            expected: String::from("main()"),
            found: token.kind,
            lexeme: token.lexeme.clone(),
        },
        token.offset(),
    );
    parser.expect_error(TokenKind::MainMethod, Some(error))?;
    parse_block(&mut parser)?;

    if parser.has_tokens() {
        let token = parser.current_token();
        return Err(Error::new(
            ErrorImpl::UnexpectedToken {
                expected: String::from("end of input after the main block"),
                found: token.kind,
                lexeme: token.lexeme.clone(),
            },
            token.offset(),
        ));
    }

    if parser.brace_depth() != 0 {
        return Err(Error::new(
            ErrorImpl::UnclosedBlock {
                open: parser.brace_depth(),
            },
            parser.get_position(),
        ));
    }

    debug!("validated {} tokens", tokens.len());
    Ok(())
}
