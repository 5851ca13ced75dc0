//! Error codes for quince diagnostics.

/// Error codes for categorizing syntax errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    // Lexical errors (E0100 - E0199)
    UnexpectedCharacter,
    UnterminatedString,
    UnterminatedComment,
    UnterminatedTemplate,
    UnterminatedRegExp,
    InvalidEscape,
    InvalidNumber,
    NestingTooDeep,

    // Structural errors (E0200 - E0299)
    UnexpectedToken,
    UnexpectedIdentifier,
    UnexpectedLiteral,
    UnexpectedExpression,
    UnexpectedNode,
    ExpectedToken,
    ExpectedExpression,
    UnexpectedEnd,
}

impl ErrorCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            // Lexical
            ErrorCode::UnexpectedCharacter => "E0100",
            ErrorCode::UnterminatedString => "E0101",
            ErrorCode::UnterminatedComment => "E0102",
            ErrorCode::UnterminatedTemplate => "E0103",
            ErrorCode::UnterminatedRegExp => "E0104",
            ErrorCode::InvalidEscape => "E0105",
            ErrorCode::InvalidNumber => "E0106",
            ErrorCode::NestingTooDeep => "E0107",

            // Structural
            ErrorCode::UnexpectedToken => "E0200",
            ErrorCode::UnexpectedIdentifier => "E0201",
            ErrorCode::UnexpectedLiteral => "E0202",
            ErrorCode::UnexpectedExpression => "E0203",
            ErrorCode::UnexpectedNode => "E0204",
            ErrorCode::ExpectedToken => "E0205",
            ErrorCode::ExpectedExpression => "E0206",
            ErrorCode::UnexpectedEnd => "E0207",
        }
    }

    /// Get a human-readable description of the error category.
    pub fn description(&self) -> &'static str {
        match self {
            // Lexical
            ErrorCode::UnexpectedCharacter => "unexpected character in input",
            ErrorCode::UnterminatedString => "string literal is not terminated",
            ErrorCode::UnterminatedComment => "comment is not terminated",
            ErrorCode::UnterminatedTemplate => "template literal is not terminated",
            ErrorCode::UnterminatedRegExp => "regular expression is not terminated",
            ErrorCode::InvalidEscape => "invalid escape sequence",
            ErrorCode::InvalidNumber => "invalid number literal",
            ErrorCode::NestingTooDeep => "expression nesting exceeds the depth limit",

            // Structural
            ErrorCode::UnexpectedToken => "token is not valid at this position",
            ErrorCode::UnexpectedIdentifier => "identifier is not a valid value",
            ErrorCode::UnexpectedLiteral => "literal kind is not a valid value",
            ErrorCode::UnexpectedExpression => "expression kind is not a valid value",
            ErrorCode::UnexpectedNode => "node has no JSON equivalent",
            ErrorCode::ExpectedToken => "a required token is missing",
            ErrorCode::ExpectedExpression => "a value was expected",
            ErrorCode::UnexpectedEnd => "input ended before the value was complete",
        }
    }
}
