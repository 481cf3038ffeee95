use log::{debug, trace};

use crate::{
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::{Token, TokenKind},
};

use super::{
    condition::validate_condition, loop_header::validate_loop_header, output::validate_output,
    parser::Parser, split::extract_parenthesized,
};

/// Dispatches on the current token through the statement lookup table.
pub fn parse_stmt(parser: &mut Parser) -> Result<(), Error> {
    let token = parser.current_token();
    let handler = parser.get_stmt_lookup().get(&token.kind).copied();

    match handler {
        Some(handler) => handler(parser),
        None => Err(Error::new(
            ErrorImpl::UnexpectedStatement {
                kind: token.kind,
                lexeme: token.lexeme.clone(),
            },
            token.offset(),
        )),
    }
}

/// `{ statement* }`
pub fn parse_block(parser: &mut Parser) -> Result<(), Error> {
    let token = parser.current_token();
    let error = Error::new(
        ErrorImpl::UnexpectedToken {
            expected: String::from("`{`"),
            found: token.kind,
            lexeme: token.lexeme.clone(),
        },
        token.offset(),
    );
    parser.expect_error(TokenKind::OpenBrace, Some(error))?;
    parser.open_block();
    debug!("entering block at {} (depth {})", token.offset(), parser.brace_depth());

    while !parser
        .current_token()
        .is_one_of_many(&[TokenKind::CloseBrace, TokenKind::EndOfInput])
    {
        parse_stmt(parser)?;
    }

    if parser.current_token_kind() == TokenKind::EndOfInput {
        return Err(Error::new(
            ErrorImpl::UnclosedBlock {
                open: parser.brace_depth(),
            },
            parser.get_position(),
        ));
    }

    let close = parser.advance();
    parser.close_block(close.offset())?;
    debug!("leaving block at {} (depth {})", close.offset(), parser.brace_depth());

    Ok(())
}

/// Declarations, assignments and input: their shape was already checked by
/// the lexer.
pub fn parse_single_token_stmt(parser: &mut Parser) -> Result<(), Error> {
    let token = parser.advance();
    trace!("{} accepted: {}", token.kind, token.lexeme);
    Ok(())
}

pub fn parse_comment(parser: &mut Parser) -> Result<(), Error> {
    parser.advance();
    Ok(())
}

fn parenthesized(token: &Token) -> Result<&str, Error> {
    extract_parenthesized(&token.lexeme).ok_or_else(|| {
        Error::new(
            ErrorImpl::MissingParentheses {
                lexeme: token.lexeme.clone(),
            },
            token.offset(),
        )
    })
}

pub fn parse_output_stmt(parser: &mut Parser) -> Result<(), Error> {
    let token = parser.current_token();
    let expression = parenthesized(token)?;
    validate_output(expression).map_err(|e| Error::new(e, token.offset()))?;

    parser.advance();
    debug!("output validated: {}", expression);
    Ok(())
}

/// `Si (condition) { ... }` with an optional `No { ... }`
pub fn parse_if_stmt(parser: &mut Parser) -> Result<(), Error> {
    let token = parser.current_token();
    let condition = parenthesized(token)?;
    validate_condition(condition).map_err(|e| Error::new(e, token.offset()))?;

    parser.advance();
    debug!("condition validated: {}", condition);
    parse_block(parser)?;

    if parser.current_token_kind() == TokenKind::Else {
        parser.advance();
        parse_block(parser)?;
    }

    Ok(())
}

/// `para (init; condition; update) { ... }`
pub fn parse_for_stmt(parser: &mut Parser) -> Result<(), Error> {
    let token = parser.current_token();
    let header = parenthesized(token)?;
    validate_loop_header(header).map_err(|e| Error::new(e, token.offset()))?;

    parser.advance();
    debug!("loop header validated: {}", header);
    parse_block(parser)
}
