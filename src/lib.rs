#![allow(clippy::module_inception)]

use crate::{
    errors::errors::{Error, ErrorTip},
    lexer::{lexer::tokenize, tokens::TokenStream},
    parser::parser::parse,
};

pub mod errors;
pub mod lexer;
pub mod macros;
pub mod parser;

extern crate regex;

/// Byte range of a token in the source text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

/// Tokenizes and validates `source`, handing back the token stream when the
/// program is valid.
pub fn check(source: &str) -> Result<TokenStream, Error> {
    let tokens = tokenize(source)?;
    parse(&tokens)?;
    Ok(tokens)
}

/// Returns the 1-based line number, the line text and the column of
/// `position` within `source`.
///
/// A position equal to the source length points just past the last line.
pub fn get_line_at_position(source: &str, position: usize) -> Option<(usize, String, usize)> {
    if position > source.len() {
        return None;
    }

    let mut start = 0;
    let mut line_number = 1;

    for line in source.split_inclusive('\n') {
        let end = start + line.len();

        if (start..end).contains(&position) {
            return Some((line_number, line.to_string(), position - start));
        }

        start = end;
        line_number += 1;
    }

    // End of input: report against the final line.
    let last = source.lines().last().unwrap_or("");
    if source.ends_with('\n') || source.is_empty() {
        Some((line_number, String::new(), 0))
    } else {
        Some((line_number - 1, last.to_string(), last.len()))
    }
}

/// Renders `error` against its source in the form
///
/// ```text
/// SyntaxError: ReservedWord (`para` is a reserved word, rename the variable)
/// -> program.chw
///    |
///  3 | Si (para == 1) {
///    | -^
/// ```
pub fn format_error(error: &Error, source: &str, file: &str) -> String {
    let mut out = String::new();

    if let ErrorTip::None = error.get_tip() {
        out.push_str(&format!("{}: {}\n", error.kind(), error.get_error_name()));
    } else {
        out.push_str(&format!(
            "{}: {} ({})\n",
            error.kind(),
            error.get_error_name(),
            error.get_tip()
        ));
    }
    out.push_str(&format!("   {}\n", error.get_error()));
    out.push_str(&format!("-> {}\n", file));

    let Some((line, line_text, line_pos)) = get_line_at_position(source, error.get_position())
    else {
        return out;
    };

    let line_string = line.to_string();
    let padding = line_string.len() + 2;

    out.push_str(&format!("{:>padding$}\n", "|"));

    let (line_text_removed, removed_whitespace) = remove_starting_whitespace(&line_text);
    out.push_str(&format!("{} | {}\n", line_string, line_text_removed.trim_end()));

    let arrows = line_pos.saturating_sub(removed_whitespace) + 1;
    out.push_str(&format!("{:>padding$} {:->arrows$}\n", "|", "^"));

    out
}

fn remove_starting_whitespace(string: &str) -> (&str, usize) {
    let trimmed = string.trim_start_matches([' ', '\t']);
    (trimmed, string.len() - trimmed.len())
}
