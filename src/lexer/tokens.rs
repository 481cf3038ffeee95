use lazy_static::lazy_static;
use std::{
    collections::{HashMap, HashSet},
    fmt::Display,
    ops::Deref,
};

use crate::Span;

lazy_static! {
    /// Declaration keywords and the token kind each one introduces.
    pub static ref DECLARATION_LOOKUP: HashMap<&'static str, TokenKind> = {
        let mut map = HashMap::new();
        map.insert("ent", TokenKind::DeclInt);
        map.insert("flot", TokenKind::DeclFloat);
        map.insert("cad", TokenKind::DeclString);
        map.insert("sn", TokenKind::DeclBool);
        map.insert("let", TokenKind::DeclGeneric);
        map.insert("list", TokenKind::DeclList);
        map
    };

    /// Words that may never appear as an identifier or operand.
    pub static ref RESERVED_WORDS: HashSet<&'static str> = {
        let mut set: HashSet<&'static str> = DECLARATION_LOOKUP.keys().copied().collect();
        set.insert("para");
        set.insert("Si");
        set.insert("No");
        set.insert("True");
        set.insert("False");
        set.insert("kiara");
        set
    };
}

/// Returns true when `word` is one of the language's reserved words.
pub fn is_reserved(word: &str) -> bool {
    RESERVED_WORDS.contains(word)
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum TokenKind {
    MainMethod,
    OpenBrace,
    CloseBrace,

    DeclInt,     // ent
    DeclFloat,   // flot
    DeclString,  // cad
    DeclBool,    // sn
    DeclGeneric, // let
    DeclList,    // list

    Assignment,
    Input,  // kiara.entrada
    Output, // kiara.salida

    If,   // Si
    Else, // No
    ForLoop, // para

    Comment,
    EndOfInput,
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub lexeme: String,
    pub span: Span,
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {} @ {}", self.kind, self.lexeme, self.span.start)
    }
}

impl Token {
    /// Byte offset of the token in the source text.
    pub fn offset(&self) -> usize {
        self.span.start
    }

    pub fn is_one_of_many(&self, kinds: &[TokenKind]) -> bool {
        kinds.contains(&self.kind)
    }

    pub fn debug(&self) {
        if self.kind == TokenKind::EndOfInput {
            println!("{} ()", self.kind);
        } else {
            println!("{}", self);
        }
    }
}

/// The ordered, read-only output of the tokenizer.
///
/// Always terminated by an `EndOfInput` token, so a cursor over it can never
/// run off the end.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenStream {
    tokens: Vec<Token>,
}

impl TokenStream {
    /// Wraps `tokens`, appending an `EndOfInput` sentinel at `source_len` when
    /// the list does not already end with one.
    pub fn new(mut tokens: Vec<Token>, source_len: usize) -> Self {
        if tokens.last().map(|t| t.kind) != Some(TokenKind::EndOfInput) {
            tokens.push(Token {
                kind: TokenKind::EndOfInput,
                lexeme: String::new(),
                span: Span {
                    start: source_len,
                    end: source_len,
                },
            });
        }

        TokenStream { tokens }
    }

    /// The tokens without the trailing sentinel.
    pub fn statements(&self) -> &[Token] {
        &self.tokens[..self.tokens.len() - 1]
    }

    pub fn end_of_input(&self) -> &Token {
        &self.tokens[self.tokens.len() - 1]
    }
}

impl Deref for TokenStream {
    type Target = [Token];

    fn deref(&self) -> &Self::Target {
        &self.tokens
    }
}

impl<'a> IntoIterator for &'a TokenStream {
    type Item = &'a Token;
    type IntoIter = std::slice::Iter<'a, Token>;

    fn into_iter(self) -> Self::IntoIter {
        self.tokens.iter()
    }
}
