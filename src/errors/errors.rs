use std::fmt::Display;

use thiserror::Error;

use crate::lexer::tokens::TokenKind;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Error {
    internal_error: ErrorImpl,
    position: usize,
}

impl Error {
    pub fn new(error_impl: ErrorImpl, position: usize) -> Self {
        Error {
            internal_error: error_impl,
            position,
        }
    }

    /// Byte offset of the offending text in the source.
    pub fn get_position(&self) -> usize {
        self.position
    }

    pub fn get_error(&self) -> &ErrorImpl {
        &self.internal_error
    }

    pub fn kind(&self) -> ErrorKind {
        match self.internal_error {
            ErrorImpl::UnrecognisedInput { .. } => ErrorKind::Lexical,
            _ => ErrorKind::Syntax,
        }
    }

    pub fn get_error_name(&self) -> &str {
        match &self.internal_error {
            ErrorImpl::UnrecognisedInput { .. } => "UnrecognisedInput",
            ErrorImpl::UnexpectedToken { .. } => "UnexpectedToken",
            ErrorImpl::UnexpectedStatement { .. } => "UnexpectedStatement",
            ErrorImpl::UnclosedBlock { .. } => "UnclosedBlock",
            ErrorImpl::StrayCloseBrace => "StrayCloseBrace",
            ErrorImpl::MissingParentheses { .. } => "MissingParentheses",
            ErrorImpl::ReservedWord { .. } => "ReservedWord",
            ErrorImpl::InvalidOperand { .. } => "InvalidOperand",
            ErrorImpl::InvalidOperator { .. } => "InvalidOperator",
            ErrorImpl::EmptyCondition => "EmptyCondition",
            ErrorImpl::DanglingOperator { .. } => "DanglingOperator",
            ErrorImpl::MalformedOutput { .. } => "MalformedOutput",
            ErrorImpl::StringNotAlone { .. } => "StringNotAlone",
            ErrorImpl::LoopClauseCount { .. } => "LoopClauseCount",
            ErrorImpl::InvalidLoopInit { .. } => "InvalidLoopInit",
            ErrorImpl::InvalidLoopCondition { .. } => "InvalidLoopCondition",
            ErrorImpl::InvalidLoopUpdate { .. } => "InvalidLoopUpdate",
            ErrorImpl::UndeclaredLoopVariable { .. } => "UndeclaredLoopVariable",
        }
    }

    pub fn get_tip(&self) -> ErrorTip {
        match &self.internal_error {
            ErrorImpl::UnrecognisedInput { .. } => ErrorTip::Suggestion(String::from(
                "Check for a missing `;`, a misspelt keyword or a value that does not fit the declared type",
            )),
            ErrorImpl::UnexpectedToken { expected, .. } => {
                ErrorTip::Suggestion(format!("Expected {} here", expected))
            }
            ErrorImpl::UnexpectedStatement { .. } => ErrorTip::Suggestion(String::from(
                "Blocks may only follow `main()`, `Si`, `No` or `para`",
            )),
            ErrorImpl::UnclosedBlock { open } => {
                ErrorTip::Suggestion(format!("Add {} closing brace(s) `}}`", open))
            }
            ErrorImpl::StrayCloseBrace => {
                ErrorTip::Suggestion(String::from("Remove the extra `}`"))
            }
            ErrorImpl::MissingParentheses { .. } => ErrorTip::None,
            ErrorImpl::ReservedWord { word, .. } => ErrorTip::Suggestion(format!(
                "`{}` is a reserved word, rename the variable",
                word
            )),
            ErrorImpl::InvalidOperand { .. } => ErrorTip::Suggestion(String::from(
                "Operands must be identifiers, integers or quoted strings",
            )),
            ErrorImpl::InvalidOperator { .. } => ErrorTip::Suggestion(String::from(
                "Use one of == != < > <= >= && ||",
            )),
            ErrorImpl::EmptyCondition => {
                ErrorTip::Suggestion(String::from("Write a condition inside the parentheses"))
            }
            ErrorImpl::DanglingOperator { .. } => ErrorTip::Suggestion(String::from(
                "Every operator needs an operand on both sides",
            )),
            ErrorImpl::MalformedOutput { .. } => ErrorTip::Suggestion(String::from(
                "Output identifiers separated by `,` or join strings with `+`",
            )),
            ErrorImpl::StringNotAlone { .. } => ErrorTip::Suggestion(String::from(
                "Join text and values with `+` instead of `,`",
            )),
            ErrorImpl::LoopClauseCount { .. } => ErrorTip::Suggestion(String::from(
                "A loop header looks like `para (ent i = 0; i < 10; i++)`",
            )),
            ErrorImpl::InvalidLoopInit { .. } => {
                ErrorTip::Suggestion(String::from("Initialise the loop with `ent <name> = <integer>`"))
            }
            ErrorImpl::InvalidLoopCondition { .. } => ErrorTip::Suggestion(String::from(
                "Compare the loop variable with a relational operator",
            )),
            ErrorImpl::InvalidLoopUpdate { .. } => ErrorTip::Suggestion(String::from(
                "Update the loop variable with `++`, `--` or `<op>= <integer>`",
            )),
            ErrorImpl::UndeclaredLoopVariable { name } => ErrorTip::Suggestion(format!(
                "Declare `{}` in the loop initialisation",
                name
            )),
        }
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.kind(), self.internal_error)
    }
}

impl std::error::Error for Error {}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Lexical,
    Syntax,
}

impl Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorKind::Lexical => write!(f, "LexicalError"),
            ErrorKind::Syntax => write!(f, "SyntaxError"),
        }
    }
}

pub enum ErrorTip {
    None,
    Suggestion(String),
}

impl Display for ErrorTip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorTip::None => write!(f, ""),
            ErrorTip::Suggestion(suggestion) => write!(f, "{}", suggestion),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ErrorImpl {
    #[error("no pattern matches at offset {offset}: {snippet:?}")]
    UnrecognisedInput { offset: usize, snippet: String },
    #[error("expected {expected}, found {found} {lexeme:?}")]
    UnexpectedToken {
        expected: String,
        found: TokenKind,
        lexeme: String,
    },
    #[error("unexpected token {kind} in {lexeme:?}")]
    UnexpectedStatement { kind: TokenKind, lexeme: String },
    #[error("braces are not balanced: {open} block(s) left open")]
    UnclosedBlock { open: usize },
    #[error("braces are not balanced: closing brace without a matching opening brace")]
    StrayCloseBrace,
    #[error("could not extract the parenthesised text from {lexeme:?}")]
    MissingParentheses { lexeme: String },
    #[error("reserved word {word:?} cannot be used as an operand in {context:?}")]
    ReservedWord { word: String, context: String },
    #[error("invalid operand {operand:?} in {context:?}")]
    InvalidOperand { operand: String, context: String },
    #[error("invalid operator {operator:?} in {context:?}")]
    InvalidOperator { operator: String, context: String },
    #[error("condition is empty")]
    EmptyCondition,
    #[error("condition must begin and end with a valid operand: {condition:?}")]
    DanglingOperator { condition: String },
    #[error("malformed output segment {segment:?}")]
    MalformedOutput { segment: String },
    #[error("string literal {segment:?} cannot be combined with other output segments using ','")]
    StringNotAlone { segment: String },
    #[error("loop header must have exactly three clauses separated by ';', found {found}")]
    LoopClauseCount { found: usize },
    #[error("invalid loop initialisation {clause:?}")]
    InvalidLoopInit { clause: String },
    #[error("invalid loop condition {clause:?}")]
    InvalidLoopCondition { clause: String },
    #[error("invalid loop update {clause:?}")]
    InvalidLoopUpdate { clause: String },
    #[error("variable {name:?} is not declared in the loop header")]
    UndeclaredLoopVariable { name: String },
}
