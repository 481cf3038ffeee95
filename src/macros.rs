//! Utility macros for the checker.
//!
//! This module defines helper macros used by the lexer:
//!
//! - `MK_TOKEN!` - Creates a Token instance
//! - `MK_PATTERN!` - Creates an entry of the ordered lexical pattern table
//!
//! These macros reduce boilerplate in the lexer implementation.

/// Creates a Token instance.
///
/// # Arguments
///
/// * `$kind` - The TokenKind
/// * `$lexeme` - The token's trimmed source text
/// * `$span` - The source span
///
/// # Example
///
/// ```ignore
/// let token = MK_TOKEN!(TokenKind::OpenBrace, "{".to_string(), span);
/// ```
#[macro_export]
macro_rules! MK_TOKEN {
    ($kind:expr, $lexeme:expr, $span:expr) => {
        Token {
            kind: $kind,
            lexeme: $lexeme,
            span: $span,
        }
    };
}

/// Creates an anchored entry for the lexical pattern table.
///
/// The regex source is prefixed with `^` so a pattern can only match at the
/// current scan offset. The optional third argument is a guard run on the
/// captures; the match is rejected when it returns false.
///
/// # Example
///
/// ```ignore
/// MK_PATTERN!(Some(TokenKind::OpenBrace), r"\{");
/// MK_PATTERN!(Some(TokenKind::Input), INPUT_SRC, name_not_reserved);
/// ```
#[macro_export]
macro_rules! MK_PATTERN {
    ($kind:expr, $source:expr) => {
        RegexPattern::new($kind, &$source, None)
    };
    ($kind:expr, $source:expr, $guard:expr) => {
        RegexPattern::new($kind, &$source, Some($guard as PatternGuard))
    };
}
