//! Unit tests for the lexer module.
//!
//! This module contains tests for tokenization including:
//! - Every statement form of the language
//! - First-match ordering between declarations and assignments
//! - Reserved-word and literal-shape rejection
//! - Comments and whitespace
//! - Offsets, the end-of-input sentinel and error snippets

use pretty_assertions::assert_eq;

use super::{lexer::tokenize, tokens::TokenKind};
use crate::errors::errors::{ErrorImpl, ErrorKind};

fn kinds(source: &str) -> Vec<TokenKind> {
    tokenize(source).unwrap().iter().map(|t| t.kind).collect()
}

#[test]
fn test_tokenize_full_program() {
    let source = r#"main() {
  ent x = 5;
  flot y = 2.5;
  cad s = "hola";
  sn b = True;
  let g = 3;
  list nums[3] = {1, 2, 3};
  x = x + 1;
  kiara.entrada(x);
  kiara.salida("x = " + s);
  Si (x > 3) { } No { }
  para (ent i = 0; i < 10; i++) { }
  ~ comentario ~
}"#;

    assert_eq!(
        kinds(source),
        vec![
            TokenKind::MainMethod,
            TokenKind::OpenBrace,
            TokenKind::DeclInt,
            TokenKind::DeclFloat,
            TokenKind::DeclString,
            TokenKind::DeclBool,
            TokenKind::DeclGeneric,
            TokenKind::DeclList,
            TokenKind::Assignment,
            TokenKind::Input,
            TokenKind::Output,
            TokenKind::If,
            TokenKind::OpenBrace,
            TokenKind::CloseBrace,
            TokenKind::Else,
            TokenKind::OpenBrace,
            TokenKind::CloseBrace,
            TokenKind::ForLoop,
            TokenKind::OpenBrace,
            TokenKind::CloseBrace,
            TokenKind::Comment,
            TokenKind::CloseBrace,
            TokenKind::EndOfInput,
        ]
    );
}

#[test]
fn test_tokenize_lexemes_are_trimmed_statements() {
    let tokens = tokenize("main() {\n  Si ( a == 1 ) {\n  }\n}").unwrap();

    assert_eq!(tokens[0].lexeme, "main()");
    assert_eq!(tokens[1].lexeme, "{");
    assert_eq!(tokens[2].kind, TokenKind::If);
    assert_eq!(tokens[2].lexeme, "Si ( a == 1 )");
}

#[test]
fn test_tokenize_offsets() {
    let tokens = tokenize("main() {\n  ent x;\n}").unwrap();

    assert_eq!(tokens[0].offset(), 0);
    assert_eq!(tokens[1].offset(), 7);
    assert_eq!(tokens[2].offset(), 11);
    assert_eq!(tokens[2].span.end, 17);
    assert_eq!(tokens[3].offset(), 18);
}

#[test]
fn test_tokenize_end_of_input_sentinel() {
    let source = "main() { }";
    let tokens = tokenize(source).unwrap();
    let last = tokens.end_of_input();

    assert_eq!(last.kind, TokenKind::EndOfInput);
    assert_eq!(last.lexeme, "");
    assert_eq!(last.offset(), source.len());
    assert_eq!(tokens.statements().len(), 3);
}

#[test]
fn test_tokenize_whitespace_only() {
    let tokens = tokenize("  \n\t ").unwrap();

    assert_eq!(tokens.len(), 1);
    assert_eq!(tokens[0].kind, TokenKind::EndOfInput);
    assert_eq!(tokens[0].offset(), 5);
}

#[test]
fn test_tokenize_declarations_without_initializer() {
    assert_eq!(
        kinds("ent a; flot b; cad c; sn d; let e; list f;"),
        vec![
            TokenKind::DeclInt,
            TokenKind::DeclFloat,
            TokenKind::DeclString,
            TokenKind::DeclBool,
            TokenKind::DeclGeneric,
            TokenKind::DeclList,
            TokenKind::EndOfInput,
        ]
    );
}

#[test]
fn test_tokenize_arithmetic_initializers() {
    assert_eq!(
        kinds("ent a = b * 2 - -3; flot c = 1.5 / d; cad e = \"x\" + f;"),
        vec![
            TokenKind::DeclInt,
            TokenKind::DeclFloat,
            TokenKind::DeclString,
            TokenKind::EndOfInput,
        ]
    );
}

#[test]
fn test_tokenize_list_forms() {
    assert_eq!(
        kinds("list a[]; list b[10]; list c = {\"x\", \"y\"}; list d[2] = {True, False};"),
        vec![
            TokenKind::DeclList,
            TokenKind::DeclList,
            TokenKind::DeclList,
            TokenKind::DeclList,
            TokenKind::EndOfInput,
        ]
    );
}

#[test]
fn test_tokenize_keyword_prefix_is_an_assignment() {
    let tokens = tokenize("entero = 5;").unwrap();

    assert_eq!(tokens[0].kind, TokenKind::Assignment);
    assert_eq!(tokens[0].lexeme, "entero = 5;");
}

#[test]
fn test_tokenize_compound_assignments() {
    assert_eq!(
        kinds("x += 1; x -= 1; x *= 2; x /= 2; x %= 3;"),
        vec![
            TokenKind::Assignment,
            TokenKind::Assignment,
            TokenKind::Assignment,
            TokenKind::Assignment,
            TokenKind::Assignment,
            TokenKind::EndOfInput,
        ]
    );
}

#[test]
fn test_tokenize_else_needs_word_boundary() {
    assert_eq!(
        kinds("Nombre = 1; No {"),
        vec![
            TokenKind::Assignment,
            TokenKind::Else,
            TokenKind::OpenBrace,
            TokenKind::EndOfInput,
        ]
    );
}

#[test]
fn test_tokenize_statements_on_one_line() {
    let tokens = tokenize("kiara.salida(a); kiara.salida(b);").unwrap();

    assert_eq!(tokens[0].lexeme, "kiara.salida(a);");
    assert_eq!(tokens[1].lexeme, "kiara.salida(b);");
}

#[test]
fn test_tokenize_condition_with_quoted_parentheses() {
    let tokens = tokenize(r#"Si (a == "(x)") {"#).unwrap();

    assert_eq!(tokens[0].kind, TokenKind::If);
    assert_eq!(tokens[0].lexeme, r#"Si (a == "(x)")"#);
}

#[test]
fn test_tokenize_comments() {
    let tokens = tokenize("~ uno\n dos ~ ent x;").unwrap();

    assert_eq!(tokens[0].kind, TokenKind::Comment);
    assert_eq!(tokens[0].lexeme, "~ uno\n dos ~");
    assert_eq!(tokens[1].kind, TokenKind::DeclInt);
}

#[test]
fn test_tokenize_reserved_declaration_name() {
    let error = tokenize("ent para = 1;").unwrap_err();

    assert_eq!(error.kind(), ErrorKind::Lexical);
    assert_eq!(error.get_position(), 0);
    assert_eq!(
        error.get_error(),
        &ErrorImpl::UnrecognisedInput {
            offset: 0,
            snippet: "ent para = 1;".to_string()
        }
    );
}

#[test]
fn test_tokenize_reserved_assignment_target() {
    assert!(tokenize("sn = True;").is_err());
    assert!(tokenize("kiara.entrada(list);").is_err());
}

#[test]
fn test_tokenize_initializer_must_fit_declared_kind() {
    assert!(tokenize("ent x = 2.5;").is_err());
    assert!(tokenize("sn x = 1;").is_err());
    assert!(tokenize("cad x = 4;").is_err());
}

#[test]
fn test_tokenize_missing_semicolon() {
    let error = tokenize("main() {\n  ent x = 1\n}").unwrap_err();

    assert_eq!(error.get_position(), 11);
}

#[test]
fn test_tokenize_error_snippet_is_bounded() {
    let source = format!("main() {{ {} }}", "@".repeat(30));
    let error = tokenize(&source).unwrap_err();

    assert_eq!(
        error.get_error(),
        &ErrorImpl::UnrecognisedInput {
            offset: 9,
            snippet: "@".repeat(20)
        }
    );
}

#[test]
fn test_tokenize_is_repeatable() {
    let source = "main() { para (ent i = 0; i < 3; i++) { kiara.salida(i); } }";

    assert_eq!(tokenize(source).unwrap(), tokenize(source).unwrap());
}
