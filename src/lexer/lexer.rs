use lazy_static::lazy_static;
use log::trace;
use regex::{Captures, Regex};

use crate::{
    errors::errors::{Error, ErrorImpl},
    Span, MK_PATTERN, MK_TOKEN,
};

use super::tokens::{is_reserved, Token, TokenKind, TokenStream};

/// Number of characters shown after the offset in a lexical error.
const SNIPPET_LEN: usize = 20;

const IDENT: &str = r"[a-zA-Z_][a-zA-Z0-9_]*";
const INT: &str = r"-?[0-9]+";
const FLOAT: &str = r"-?[0-9]+(?:\.[0-9]+)?";
const STRING: &str = r#""[^"\n]*""#;
const BOOL: &str = r"(?:True|False)";
const ARITH_OP: &str = r"[-+*/%]";

pub type PatternGuard = fn(&Captures) -> bool;

/// One entry of the ordered lexical table.
///
/// `kind` is `None` for input that is consumed without producing a token.
pub struct RegexPattern {
    kind: Option<TokenKind>,
    regex: Regex,
    guard: Option<PatternGuard>,
}

impl RegexPattern {
    pub fn new(kind: Option<TokenKind>, source: &str, guard: Option<PatternGuard>) -> Self {
        RegexPattern {
            kind,
            regex: Regex::new(&format!("^(?:{})", source)).unwrap(),
            guard,
        }
    }

    pub fn kind(&self) -> Option<TokenKind> {
        self.kind
    }

    /// Length of the match starting exactly at the beginning of `input`.
    pub fn match_len(&self, input: &str) -> Option<usize> {
        let captures = self.regex.captures(input)?;
        if let Some(guard) = self.guard {
            if !guard(&captures) {
                return None;
            }
        }

        captures.get(0).map(|m| m.end())
    }
}

/// `operand (op operand)*` where operands are `operand` or identifiers.
fn arithmetic(operand: &str, op: &str) -> String {
    format!(r"(?:{operand}|{IDENT})(?:\s*{op}\s*(?:{operand}|{IDENT}))*")
}

fn declaration(keyword: &str, value: &str) -> String {
    format!(r"{keyword}\s+(?P<name>{IDENT})\s*(?:=\s*{value})?\s*;")
}

fn name_not_reserved(captures: &Captures) -> bool {
    captures
        .name("name")
        .map(|name| !is_reserved(name.as_str()))
        .unwrap_or(true)
}

lazy_static! {
    /// Tested in order; the first pattern that matches at the offset wins.
    /// Typed declarations must stay ahead of the bare assignment form.
    pub static ref PATTERNS: Vec<RegexPattern> = {
        let literal = format!("(?:{FLOAT}|{STRING}|{BOOL})");
        let any_value = arithmetic(&format!("(?:{FLOAT}|{STRING})"), ARITH_OP);

        vec![
            MK_PATTERN!(Some(TokenKind::MainMethod), r"main\s*\(\s*\)"),
            MK_PATTERN!(Some(TokenKind::OpenBrace), r"\{"),
            MK_PATTERN!(Some(TokenKind::CloseBrace), r"\}"),
            MK_PATTERN!(Some(TokenKind::DeclInt), declaration("ent", &arithmetic(INT, ARITH_OP)), name_not_reserved),
            MK_PATTERN!(Some(TokenKind::DeclFloat), declaration("flot", &arithmetic(FLOAT, ARITH_OP)), name_not_reserved),
            MK_PATTERN!(Some(TokenKind::DeclString), declaration("cad", &arithmetic(STRING, r"\+")), name_not_reserved),
            MK_PATTERN!(Some(TokenKind::DeclBool), declaration("sn", &format!("(?:{BOOL}|{IDENT})")), name_not_reserved),
            MK_PATTERN!(Some(TokenKind::DeclGeneric), declaration("let", &any_value), name_not_reserved),
            MK_PATTERN!(
                Some(TokenKind::DeclList),
                format!(
                    r"list\s+(?P<name>{IDENT})\s*(?:\[\s*[0-9]*\s*\])?\s*(?:=\s*\{{\s*(?:{literal}(?:\s*,\s*{literal})*)?\s*\}})?\s*;"
                ),
                name_not_reserved
            ),
            MK_PATTERN!(
                Some(TokenKind::Input),
                format!(r"kiara\.entrada\s*\(\s*(?P<name>{IDENT})\s*\)\s*;"),
                name_not_reserved
            ),
            MK_PATTERN!(Some(TokenKind::Output), r#"kiara\.salida\s*\((?:"[^"\n]*"|[^"()])*\)\s*;"#),
            MK_PATTERN!(Some(TokenKind::If), r#"Si\s*\((?:"[^"\n]*"|[^"()])*\)"#),
            MK_PATTERN!(Some(TokenKind::Else), r"No\b"),
            MK_PATTERN!(Some(TokenKind::ForLoop), r"para\s*\([^()]*\)"),
            MK_PATTERN!(
                Some(TokenKind::Assignment),
                format!(r"(?P<name>{IDENT})\s*{ARITH_OP}?=\s*{any_value}\s*;"),
                name_not_reserved
            ),
            MK_PATTERN!(Some(TokenKind::Comment), r"~[^~]*~"),
            MK_PATTERN!(None, r"\s+"),
        ]
    };
}

pub struct Lexer<'a> {
    tokens: Vec<Token>,
    source: &'a str,
    pos: usize,
}

impl<'a> Lexer<'a> {
    pub fn new(source: &'a str) -> Lexer<'a> {
        Lexer {
            tokens: vec![],
            source,
            pos: 0,
        }
    }

    pub fn advance_n(&mut self, n: usize) {
        self.pos += n;
    }

    pub fn push(&mut self, token: Token) {
        trace!("token {}", token);
        self.tokens.push(token);
    }

    pub fn remainder(&self) -> &'a str {
        &self.source[self.pos..]
    }

    pub fn at_eof(&self) -> bool {
        self.pos >= self.source.len()
    }

    fn snippet(&self) -> String {
        self.remainder().chars().take(SNIPPET_LEN).collect()
    }

    fn unrecognised(&self) -> Error {
        Error::new(
            ErrorImpl::UnrecognisedInput {
                offset: self.pos,
                snippet: self.snippet(),
            },
            self.pos,
        )
    }
}

/// Splits `source` into classified tokens.
///
/// Whitespace is consumed silently. Fails with an `UnrecognisedInput` error
/// at the first offset where no pattern matches.
pub fn tokenize(source: &str) -> Result<TokenStream, Error> {
    let mut lex = Lexer::new(source);

    while !lex.at_eof() {
        let remainder = lex.remainder();
        let matched = PATTERNS
            .iter()
            .find_map(|pattern| pattern.match_len(remainder).map(|len| (pattern.kind(), len)));

        match matched {
            Some((_, 0)) | None => return Err(lex.unrecognised()),
            Some((None, len)) => lex.advance_n(len),
            Some((Some(kind), len)) => {
                let text = &remainder[..len];
                let trimmed = text.trim();
                let start = lex.pos + (text.len() - text.trim_start().len());

                lex.push(MK_TOKEN!(
                    kind,
                    trimmed.to_string(),
                    Span {
                        start,
                        end: start + trimmed.len()
                    }
                ));
                lex.advance_n(len);
            }
        }
    }

    Ok(TokenStream::new(lex.tokens, source.len()))
}
