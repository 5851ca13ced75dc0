//! Located errors raised by the expression lexer and parser.

use quince_common::Position;

/// What went wrong, independent of the message wording.
///
/// Callers that re-word errors (the JSON layer does) dispatch on this
/// rather than on message text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExprErrorKind {
    UnexpectedCharacter,
    UnterminatedString,
    UnterminatedComment,
    UnterminatedTemplate,
    UnterminatedRegExp,
    InvalidEscape,
    InvalidNumber,
    UnexpectedToken,
    UnexpectedEof,
    NestingTooDeep,
}

/// An error with an exact location in the parsed source.
///
/// `line` is 1-based, `column` is 0-based, both relative to the text the
/// expression parser was handed (not to any enclosing document).
#[derive(Debug, Clone, PartialEq)]
pub struct ExprError {
    pub kind: ExprErrorKind,
    pub message: String,
    pub index: usize,
    pub line: u32,
    pub column: u32,
}

impl ExprError {
    pub fn new(kind: ExprErrorKind, message: impl Into<String>, index: usize, pos: Position) -> Self {
        ExprError {
            kind,
            message: message.into(),
            index,
            line: pos.line,
            column: pos.column,
        }
    }
}
