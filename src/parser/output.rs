use crate::{errors::errors::ErrorImpl, lexer::tokens::is_reserved};

use super::{
    operands::{is_identifier, is_string_literal},
    split::split_top_level,
};

/// Validates the text inside `kiara.salida( ... )`.
///
/// Segments are separated by top-level commas. A segment is either an
/// identifier, a `+` concatenation of strings and identifiers, or a single
/// string literal, and a bare string literal must be the only segment.
pub fn validate_output(expression: &str) -> Result<(), ErrorImpl> {
    let segments: Vec<&str> = split_top_level(expression, ',')
        .into_iter()
        .map(str::trim)
        .collect();

    for segment in &segments {
        let pieces = split_top_level(segment, '+');

        if pieces.len() > 1 {
            for piece in pieces.into_iter().map(str::trim) {
                if !is_string_literal(piece) {
                    check_output_identifier(piece, segment)?;
                }
            }
        } else if is_string_literal(segment) {
            if segments.len() != 1 {
                return Err(ErrorImpl::StringNotAlone {
                    segment: segment.to_string(),
                });
            }
        } else {
            check_output_identifier(segment, segment)?;
        }
    }

    Ok(())
}

fn check_output_identifier(word: &str, segment: &str) -> Result<(), ErrorImpl> {
    if is_reserved(word) {
        return Err(ErrorImpl::ReservedWord {
            word: word.to_string(),
            context: segment.to_string(),
        });
    }

    if !is_identifier(word) {
        return Err(ErrorImpl::MalformedOutput {
            segment: segment.to_string(),
        });
    }

    Ok(())
}
