use crate::{errors::errors::ErrorImpl, lexer::tokens::is_reserved};

use super::{
    operands::{check_operand, is_condition_operator, is_identifier, is_operand},
    split::split_condition,
};

/// Validates the text inside `Si ( ... )`.
///
/// A lone part must be a bare identifier. Otherwise parts alternate
/// operand, operator, operand, ... and both ends must be operands.
pub fn validate_condition(condition: &str) -> Result<(), ErrorImpl> {
    let parts = split_condition(condition);

    let (first, last) = match (parts.first(), parts.last()) {
        (Some(first), Some(last)) => (*first, *last),
        _ => return Err(ErrorImpl::EmptyCondition),
    };

    if parts.len() == 1 {
        if is_reserved(first) {
            return Err(ErrorImpl::ReservedWord {
                word: first.to_string(),
                context: condition.to_string(),
            });
        }
        if !is_identifier(first) {
            return Err(ErrorImpl::InvalidOperand {
                operand: first.to_string(),
                context: condition.to_string(),
            });
        }
        return Ok(());
    }

    for (i, part) in parts.iter().enumerate() {
        if i % 2 == 0 {
            check_operand(part, condition)?;
        } else if !is_condition_operator(part) {
            return Err(ErrorImpl::InvalidOperator {
                operator: part.to_string(),
                context: condition.to_string(),
            });
        }
    }

    if !is_operand(first) || !is_operand(last) {
        return Err(ErrorImpl::DanglingOperator {
            condition: condition.to_string(),
        });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_identifier_condition() {
        assert!(validate_condition("activo").is_ok());
        assert!(matches!(
            validate_condition("5"),
            Err(ErrorImpl::InvalidOperand { .. })
        ));
        assert!(matches!(
            validate_condition("True"),
            Err(ErrorImpl::ReservedWord { .. })
        ));
    }

    #[test]
    fn test_alternating_condition() {
        assert!(validate_condition("a == 1").is_ok());
        assert!(validate_condition("a < b && b <= 10 || nombre != \"ana\"").is_ok());
    }

    #[test]
    fn test_empty_condition() {
        assert_eq!(validate_condition(""), Err(ErrorImpl::EmptyCondition));
        assert_eq!(validate_condition("   "), Err(ErrorImpl::EmptyCondition));
    }

    #[test]
    fn test_trailing_operator() {
        assert_eq!(
            validate_condition("a =="),
            Err(ErrorImpl::DanglingOperator {
                condition: "a ==".to_string()
            })
        );
    }

    #[test]
    fn test_doubled_operator() {
        assert!(matches!(
            validate_condition("a == == b"),
            Err(ErrorImpl::InvalidOperand { operand, .. }) if operand == "=="
        ));
    }
}
