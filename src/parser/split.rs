//! Text helpers for the parenthesised parts of `Si`, `para` and
//! `kiara.salida` tokens. All splitting ignores separators inside quoted
//! strings.

use super::operands::CONDITION_OPERATORS;

/// The text between the first `(` and the last `)` of `lexeme`, trimmed.
pub fn extract_parenthesized(lexeme: &str) -> Option<&str> {
    let open = lexeme.find('(')?;
    let close = lexeme.rfind(')')?;
    if close < open {
        return None;
    }

    Some(lexeme[open + 1..close].trim())
}

/// Splits `text` on every `separator` outside quotes. Parts are untrimmed
/// and may be empty.
pub fn split_top_level(text: &str, separator: char) -> Vec<&str> {
    let mut parts = Vec::new();
    let mut in_string = false;
    let mut start = 0;

    for (i, c) in text.char_indices() {
        if c == '"' {
            in_string = !in_string;
        } else if c == separator && !in_string {
            parts.push(&text[start..i]);
            start = i + c.len_utf8();
        }
    }
    parts.push(&text[start..]);

    parts
}

/// Splits a condition into operands and operators, keeping the operators as
/// their own parts. Operands are trimmed; blank operands are dropped.
pub fn split_condition(condition: &str) -> Vec<&str> {
    let mut parts = Vec::new();
    let mut in_string = false;
    let mut start = 0;
    let mut chars = condition.char_indices();

    while let Some((i, c)) = chars.next() {
        if c == '"' {
            in_string = !in_string;
            continue;
        }
        if in_string {
            continue;
        }

        let rest = &condition[i..];
        if let Some(op) = CONDITION_OPERATORS.iter().find(|op| rest.starts_with(**op)) {
            push_operand(&mut parts, &condition[start..i]);
            parts.push(&condition[i..i + op.len()]);
            start = i + op.len();
            // operators are ASCII, skip the rest of this one
            for _ in 1..op.len() {
                chars.next();
            }
        }
    }
    push_operand(&mut parts, &condition[start..]);

    parts
}

fn push_operand<'a>(parts: &mut Vec<&'a str>, operand: &'a str) {
    let operand = operand.trim();
    if !operand.is_empty() {
        parts.push(operand);
    }
}
