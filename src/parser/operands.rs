use lazy_static::lazy_static;
use regex::Regex;

use crate::{errors::errors::ErrorImpl, lexer::tokens::is_reserved};

pub const RELATIONAL_OPERATORS: [&str; 6] = ["==", "!=", "<=", ">=", "<", ">"];
pub const LOGICAL_OPERATORS: [&str; 2] = ["&&", "||"];

/// Every condition operator, two-character forms first.
pub const CONDITION_OPERATORS: [&str; 8] = ["==", "!=", "<=", ">=", "&&", "||", "<", ">"];

lazy_static! {
    static ref IDENTIFIER: Regex = Regex::new(r"^[a-zA-Z_][a-zA-Z0-9_]*$").unwrap();
    static ref INTEGER: Regex = Regex::new(r"^-?[0-9]+$").unwrap();
    static ref STRING_LITERAL: Regex = Regex::new(r#"^"[^"]*"$"#).unwrap();
}

pub fn is_identifier(text: &str) -> bool {
    IDENTIFIER.is_match(text)
}

pub fn is_integer(text: &str) -> bool {
    INTEGER.is_match(text)
}

pub fn is_string_literal(text: &str) -> bool {
    STRING_LITERAL.is_match(text)
}

pub fn is_relational_operator(text: &str) -> bool {
    RELATIONAL_OPERATORS.contains(&text)
}

pub fn is_condition_operator(text: &str) -> bool {
    is_relational_operator(text) || LOGICAL_OPERATORS.contains(&text)
}

/// Identifier, integer or quoted string.
pub fn is_operand(text: &str) -> bool {
    is_identifier(text) || is_integer(text) || is_string_literal(text)
}

/// Rejects reserved words first, then anything that is not an identifier.
pub fn check_identifier(word: &str, context: &str) -> Result<(), ErrorImpl> {
    if is_reserved(word) {
        return Err(ErrorImpl::ReservedWord {
            word: word.to_string(),
            context: context.to_string(),
        });
    }

    if !is_identifier(word) {
        return Err(ErrorImpl::InvalidOperand {
            operand: word.to_string(),
            context: context.to_string(),
        });
    }

    Ok(())
}

/// Rejects reserved words first, then anything that is not an operand.
pub fn check_operand(operand: &str, context: &str) -> Result<(), ErrorImpl> {
    if is_reserved(operand) {
        return Err(ErrorImpl::ReservedWord {
            word: operand.to_string(),
            context: context.to_string(),
        });
    }

    if !is_operand(operand) {
        return Err(ErrorImpl::InvalidOperand {
            operand: operand.to_string(),
            context: context.to_string(),
        });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_operand_shapes() {
        assert!(is_operand("contador"));
        assert!(is_operand("_x1"));
        assert!(is_operand("42"));
        assert!(is_operand("-7"));
        assert!(is_operand("\"hola mundo\""));
        assert!(!is_operand("1abc"));
        assert!(!is_operand("a b"));
        assert!(!is_operand("3.5"));
    }

    #[test]
    fn test_check_operand_reports_reserved_words_first() {
        assert_eq!(
            check_operand("True", "x == True"),
            Err(ErrorImpl::ReservedWord {
                word: "True".to_string(),
                context: "x == True".to_string()
            })
        );
        assert!(check_operand("x", "x == True").is_ok());
    }
}
