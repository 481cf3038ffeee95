//! Validation of `para (init; condition; update)` headers.
//!
//! Each header gets its own `LoopScope`, filled by the init clause and
//! consulted by the condition and update clauses. The scope is dropped when
//! the header has been checked; nested or sibling loops never see it.

use std::collections::HashMap;

use lazy_static::lazy_static;
use regex::Regex;

use crate::{
    errors::errors::ErrorImpl,
    lexer::tokens::{is_reserved, TokenKind, DECLARATION_LOOKUP},
};

use super::{
    operands::{is_identifier, is_integer, is_relational_operator},
    split::{split_condition, split_top_level},
};

lazy_static! {
    static ref LOOP_INIT: Regex = Regex::new(
        r"^(?P<keyword>[a-zA-Z_][a-zA-Z0-9_]*)\s+(?P<name>[a-zA-Z_][a-zA-Z0-9_]*)\s*=\s*-?[0-9]+$"
    )
    .unwrap();
    static ref STEP_UPDATE: Regex =
        Regex::new(r"^(?P<name>[a-zA-Z_][a-zA-Z0-9_]*)\s*(?:\+\+|--)$").unwrap();
    static ref COMPOUND_UPDATE: Regex =
        Regex::new(r"^(?P<name>[a-zA-Z_][a-zA-Z0-9_]*)\s*[-+*/%]=\s*-?[0-9]+$").unwrap();
}

/// Variables declared by a single loop header.
#[derive(Debug, Default)]
pub struct LoopScope {
    variables: HashMap<String, TokenKind>,
}

impl LoopScope {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn declare(&mut self, name: &str, kind: TokenKind) {
        self.variables.insert(name.to_string(), kind);
    }

    pub fn lookup(&self, name: &str) -> Option<TokenKind> {
        self.variables.get(name).copied()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.variables.contains_key(name)
    }
}

/// Validates the text inside `para ( ... )`.
pub fn validate_loop_header(header: &str) -> Result<(), ErrorImpl> {
    let clauses: Vec<&str> = split_top_level(header, ';')
        .into_iter()
        .map(str::trim)
        .collect();

    let [init, condition, update] = clauses.as_slice() else {
        return Err(ErrorImpl::LoopClauseCount {
            found: clauses.len(),
        });
    };

    let mut scope = LoopScope::new();
    validate_init(init, &mut scope)?;
    validate_loop_condition(condition, &scope)?;
    validate_update(update, &scope)
}

/// `ent <name> = <integer>`
fn validate_init(clause: &str, scope: &mut LoopScope) -> Result<(), ErrorImpl> {
    let invalid = || ErrorImpl::InvalidLoopInit {
        clause: clause.to_string(),
    };

    let captures = LOOP_INIT.captures(clause).ok_or_else(invalid)?;
    let kind = DECLARATION_LOOKUP
        .get(&captures["keyword"])
        .copied()
        .filter(|kind| *kind == TokenKind::DeclInt)
        .ok_or_else(invalid)?;

    let name = &captures["name"];
    if is_reserved(name) {
        return Err(ErrorImpl::ReservedWord {
            word: name.to_string(),
            context: clause.to_string(),
        });
    }

    scope.declare(name, kind);
    Ok(())
}

/// `<operand> <relational operator> <operand>`; identifiers must come from
/// the init clause.
fn validate_loop_condition(clause: &str, scope: &LoopScope) -> Result<(), ErrorImpl> {
    let parts = split_condition(clause);

    let [left, operator, right] = parts.as_slice() else {
        return Err(ErrorImpl::InvalidLoopCondition {
            clause: clause.to_string(),
        });
    };

    if !is_relational_operator(operator) {
        return Err(ErrorImpl::InvalidOperator {
            operator: operator.to_string(),
            context: clause.to_string(),
        });
    }

    for operand in [left, right] {
        check_scoped_operand(operand, clause, scope)?;
    }

    Ok(())
}

fn check_scoped_operand(operand: &str, clause: &str, scope: &LoopScope) -> Result<(), ErrorImpl> {
    if is_integer(operand) {
        return Ok(());
    }

    if is_reserved(operand) {
        return Err(ErrorImpl::ReservedWord {
            word: operand.to_string(),
            context: clause.to_string(),
        });
    }

    if !is_identifier(operand) {
        return Err(ErrorImpl::InvalidOperand {
            operand: operand.to_string(),
            context: clause.to_string(),
        });
    }

    if !scope.contains(operand) {
        return Err(ErrorImpl::UndeclaredLoopVariable {
            name: operand.to_string(),
        });
    }

    Ok(())
}

/// `<name>++`, `<name>--` or `<name> <op>= <integer>`
fn validate_update(clause: &str, scope: &LoopScope) -> Result<(), ErrorImpl> {
    let captures = STEP_UPDATE
        .captures(clause)
        .or_else(|| COMPOUND_UPDATE.captures(clause))
        .ok_or_else(|| ErrorImpl::InvalidLoopUpdate {
            clause: clause.to_string(),
        })?;

    let name = &captures["name"];
    if is_reserved(name) {
        return Err(ErrorImpl::ReservedWord {
            word: name.to_string(),
            context: clause.to_string(),
        });
    }

    if scope.lookup(name).is_none() {
        return Err(ErrorImpl::UndeclaredLoopVariable {
            name: name.to_string(),
        });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counted_loop() {
        assert!(validate_loop_header("ent i = 0; i < 10; i++").is_ok());
        assert!(validate_loop_header("ent k=10; 0 <= k; k -= 2").is_ok());
        assert!(validate_loop_header("ent i = 0; i != 3; i--").is_ok());
    }

    #[test]
    fn test_clause_count() {
        assert_eq!(
            validate_loop_header("ent i = 0; i < 10"),
            Err(ErrorImpl::LoopClauseCount { found: 2 })
        );
        assert_eq!(
            validate_loop_header("ent i = 0; i < 10; i++;"),
            Err(ErrorImpl::LoopClauseCount { found: 4 })
        );
    }

    #[test]
    fn test_init_must_declare_an_integer() {
        assert!(matches!(
            validate_loop_header("flot i = 0; i < 10; i++"),
            Err(ErrorImpl::InvalidLoopInit { .. })
        ));
        assert!(matches!(
            validate_loop_header("i = 0; i < 10; i++"),
            Err(ErrorImpl::InvalidLoopInit { .. })
        ));
        assert!(matches!(
            validate_loop_header("ent Si = 0; Si < 10; Si++"),
            Err(ErrorImpl::ReservedWord { word, .. }) if word == "Si"
        ));
    }

    #[test]
    fn test_condition_uses_loop_scope() {
        assert_eq!(
            validate_loop_header("ent i = 0; j < 10; i++"),
            Err(ErrorImpl::UndeclaredLoopVariable {
                name: "j".to_string()
            })
        );
        assert!(matches!(
            validate_loop_header("ent i = 0; i && 10; i++"),
            Err(ErrorImpl::InvalidOperator { .. })
        ));
        assert!(matches!(
            validate_loop_header("ent i = 0; i < ; i++"),
            Err(ErrorImpl::InvalidLoopCondition { .. })
        ));
    }

    #[test]
    fn test_update_uses_loop_scope() {
        assert_eq!(
            validate_loop_header("ent i = 0; i < 10; j++"),
            Err(ErrorImpl::UndeclaredLoopVariable {
                name: "j".to_string()
            })
        );
        assert!(matches!(
            validate_loop_header("ent i = 0; i < 10; i = i + 1"),
            Err(ErrorImpl::InvalidLoopUpdate { .. })
        ));
    }

    #[test]
    fn test_scope_records_declared_kind() {
        let mut scope = LoopScope::new();
        validate_init("ent n = 3", &mut scope).unwrap();
        assert_eq!(scope.lookup("n"), Some(TokenKind::DeclInt));
        assert!(!scope.contains("m"));
    }
}
