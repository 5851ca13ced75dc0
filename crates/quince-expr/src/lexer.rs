//! The expression lexer.
//! 表达式词法分析器。

use crate::error::{ExprError, ExprErrorKind};
use crate::token::{Comment, CommentKind, LexKind, Lexeme};
use quince_common::{BytePos, LineMap, Span};

/// Output of a full tokenize pass.
/// 一次完整词法分析的输出。
#[derive(Debug)]
pub(crate) struct LexOutput {
    pub lexemes: Vec<Lexeme>,
    pub comments: Vec<Comment>,
}

/// The expression lexer.
/// 表达式词法分析器。
///
/// Converts source text into a lexeme sequence, collecting comments on the
/// side. The first lexical error aborts the scan.
/// 将源文本转换为词素序列，同时收集注释。遇到第一个词法错误即中止扫描。
pub(crate) struct Lexer<'src> {
    src: &'src str,
    /// Character iterator with position info
    /// 带位置信息的字符迭代器
    chars: std::iter::Peekable<std::str::CharIndices<'src>>,
    /// Current position in source
    /// 当前在源码中的位置
    pos: usize,
    line_map: &'src LineMap,
    /// Last significant lexeme, for slash disambiguation
    /// 上一个有效词素，用于斜杠歧义消解
    prev: Option<LexKind>,
    comments: Vec<Comment>,
}

impl<'src> Lexer<'src> {
    pub fn new(src: &'src str, line_map: &'src LineMap) -> Self {
        Self {
            src,
            chars: src.char_indices().peekable(),
            pos: 0,
            line_map,
            prev: None,
            comments: Vec::new(),
        }
    }

    /// Tokenize the entire source, ending with an `Eof` lexeme.
    /// 对整个源码进行词法分析，以 `Eof` 词素结尾。
    pub fn tokenize(mut self) -> Result<LexOutput, ExprError> {
        let mut lexemes = Vec::new();

        loop {
            let lexeme = self.next_lexeme()?;
            let is_eof = lexeme.kind == LexKind::Eof;
            if !is_eof {
                self.prev = Some(lexeme.kind.clone());
            }
            lexemes.push(lexeme);
            if is_eof {
                break;
            }
        }

        Ok(LexOutput {
            lexemes,
            comments: self.comments,
        })
    }

    fn next_lexeme(&mut self) -> Result<Lexeme, ExprError> {
        self.skip_trivia()?;

        let start = self.pos;

        // Check for end of file - 检查是否到达文件末尾
        let Some((_pos, ch)) = self.advance() else {
            return Ok(Lexeme::new(LexKind::Eof, Span::from_usize(start, start)));
        };

        let kind = match ch {
            // Single character tokens - 单字符 token
            '(' => LexKind::LParen,
            ')' => LexKind::RParen,
            '[' => LexKind::LBracket,
            ']' => LexKind::RBracket,
            '{' => LexKind::LBrace,
            '}' => LexKind::RBrace,
            ',' => LexKind::Comma,
            ':' => LexKind::Colon,
            ';' => LexKind::Semicolon,
            '~' => LexKind::Tilde,
            '^' => LexKind::Caret,
            '%' => LexKind::Percent,
            '+' => LexKind::Plus,
            '-' => LexKind::Minus,

            // Dot, ellipsis, or leading-dot number
            // 点、省略号、或以点开头的数字
            '.' => {
                if self.peek_char().is_some_and(|c| c.is_ascii_digit()) {
                    return self.number(start, '.');
                } else if self.peek_char() == Some('.') && self.peek_nth(1) == Some('.') {
                    self.advance();
                    self.advance();
                    LexKind::Ellipsis
                } else {
                    LexKind::Dot
                }
            }

            // Star or exponent - 星号或幂运算符
            '*' => {
                if self.peek_char() == Some('*') {
                    self.advance();
                    LexKind::StarStar
                } else {
                    LexKind::Star
                }
            }

            // Slash: comments were consumed by skip_trivia, so this is a
            // regular expression or a division operator
            // 斜杠：注释已在 skip_trivia 中消耗，这里是正则表达式或除号
            '/' => {
                if self.regexp_allowed() {
                    return self.regexp(start);
                }
                LexKind::Slash
            }

            // Equals - 等号
            '=' => {
                if self.peek_char() == Some('=') {
                    self.advance();
                    if self.peek_char() == Some('=') {
                        self.advance();
                        LexKind::EqEqEq
                    } else {
                        LexKind::EqEq
                    }
                } else {
                    LexKind::Eq
                }
            }

            // Bang (not) - 感叹号（逻辑非）
            '!' => {
                if self.peek_char() == Some('=') {
                    self.advance();
                    if self.peek_char() == Some('=') {
                        self.advance();
                        LexKind::BangEqEq
                    } else {
                        LexKind::BangEq
                    }
                } else {
                    LexKind::Bang
                }
            }

            // Less than / shift left - 小于号 / 左移
            '<' => {
                if self.peek_char() == Some('=') {
                    self.advance();
                    LexKind::LtEq
                } else if self.peek_char() == Some('<') {
                    self.advance();
                    LexKind::LtLt
                } else {
                    LexKind::Lt
                }
            }

            // Greater than / shift right - 大于号 / 右移
            '>' => {
                if self.peek_char() == Some('=') {
                    self.advance();
                    LexKind::GtEq
                } else if self.peek_char() == Some('>') {
                    self.advance();
                    if self.peek_char() == Some('>') {
                        self.advance();
                        LexKind::GtGtGt
                    } else {
                        LexKind::GtGt
                    }
                } else {
                    LexKind::Gt
                }
            }

            // Ampersand - & 符号
            '&' => {
                if self.peek_char() == Some('&') {
                    self.advance();
                    LexKind::AmpAmp
                } else {
                    LexKind::Amp
                }
            }

            // Pipe - 管道符号
            '|' => {
                if self.peek_char() == Some('|') {
                    self.advance();
                    LexKind::PipePipe
                } else {
                    LexKind::Pipe
                }
            }

            // Nullish coalescing - 空值合并运算符
            '?' => {
                if self.peek_char() == Some('?') {
                    self.advance();
                    LexKind::Coalesce
                } else {
                    return Err(self.error_unexpected_char(ch, start));
                }
            }

            // String literal - 字符串字面量
            '"' | '\'' => return self.string_literal(start, ch),

            // Template literal - 模板字符串
            '`' => return self.template_literal(start),

            // Numbers - 数字
            '0'..='9' => return self.number(start, ch),

            // Identifiers and keywords - 标识符和关键字
            c if is_ident_start(c) => return Ok(self.identifier(start, c)),

            _ => return Err(self.error_unexpected_char(ch, start)),
        };

        Ok(Lexeme::new(kind, Span::from_usize(start, self.pos)))
    }

    /// Advance to the next character.
    /// 前进到下一个字符。
    fn advance(&mut self) -> Option<(usize, char)> {
        let result = self.chars.next();
        if let Some((pos, ch)) = result {
            self.pos = pos + ch.len_utf8();
        }
        result
    }

    /// Peek at the next character without consuming it.
    /// 查看下一个字符但不消耗它。
    fn peek_char(&mut self) -> Option<char> {
        self.chars.peek().map(|(_, ch)| *ch)
    }

    /// Peek at the nth character ahead; `peek_nth(0)` equals `peek_char`.
    /// 查看前方第 n 个字符；`peek_nth(0)` 等同于 `peek_char`。
    fn peek_nth(&self, n: usize) -> Option<char> {
        self.chars.clone().nth(n).map(|(_, ch)| ch)
    }

    fn err(&self, kind: ExprErrorKind, message: impl Into<String>, index: usize) -> ExprError {
        ExprError::new(kind, message, index, self.line_map.position(BytePos::from(index)))
    }

    fn error_unexpected_char(&self, ch: char, pos: usize) -> ExprError {
        self.err(
            ExprErrorKind::UnexpectedCharacter,
            format!("Unexpected character '{ch}'."),
            pos,
        )
    }

    /// True if a `/` here starts a regular expression.
    /// 如果此处的 `/` 开始一个正则表达式则返回 true。
    fn regexp_allowed(&self) -> bool {
        match &self.prev {
            Some(kind) => !kind.slash_means_division(),
            None => true,
        }
    }

    /// Skip whitespace and comments, collecting the comments.
    /// 跳过空白字符和注释，并收集注释。
    fn skip_trivia(&mut self) -> Result<(), ExprError> {
        loop {
            match self.peek_char() {
                Some(c) if c.is_whitespace() || c == '\u{feff}' => {
                    self.advance();
                }
                Some('/') => match self.peek_nth(1) {
                    Some('/') => self.line_comment(),
                    Some('*') => self.block_comment()?,
                    _ => break,
                },
                _ => break,
            }
        }
        Ok(())
    }

    /// Consume a `//` comment up to (not including) the line terminator.
    /// 消耗 `//` 注释，直到行终止符（不包含）。
    fn line_comment(&mut self) {
        let start = self.pos;
        self.advance(); // /
        self.advance(); // /
        let text_start = self.pos;

        while let Some(ch) = self.peek_char() {
            if is_line_terminator(ch) {
                break;
            }
            self.advance();
        }

        self.comments.push(Comment {
            kind: CommentKind::Line,
            value: self.src[text_start..self.pos].to_string(),
            span: Span::from_usize(start, self.pos),
        });
    }

    /// Consume a `/* */` comment.
    /// 消耗 `/* */` 注释。
    fn block_comment(&mut self) -> Result<(), ExprError> {
        let start = self.pos;
        self.advance(); // /
        self.advance(); // *
        let text_start = self.pos;

        loop {
            match self.advance() {
                Some((_, '*')) if self.peek_char() == Some('/') => {
                    let text_end = self.pos - 1;
                    self.advance();
                    self.comments.push(Comment {
                        kind: CommentKind::Block,
                        value: self.src[text_start..text_end].to_string(),
                        span: Span::from_usize(start, self.pos),
                    });
                    return Ok(());
                }
                Some(_) => {}
                None => {
                    return Err(self.err(
                        ExprErrorKind::UnterminatedComment,
                        "Unterminated comment.",
                        start,
                    ));
                }
            }
        }
    }

    /// Parse a string literal. `quote` is `"` or `'`.
    /// 解析字符串字面量。`quote` 为 `"` 或 `'`。
    fn string_literal(&mut self, start: usize, quote: char) -> Result<Lexeme, ExprError> {
        let mut value = String::new();

        loop {
            match self.advance() {
                Some((_, ch)) if ch == quote => break,
                Some((_, '\\')) => {
                    if let Some(escaped) = self.escape_sequence(start)? {
                        value.push(escaped);
                    }
                }
                // U+2028/U+2029 are legal inside strings; \n and \r are not.
                // U+2028/U+2029 在字符串内合法；\n 和 \r 不合法。
                Some((_, '\n' | '\r')) | None => {
                    return Err(self.err(
                        ExprErrorKind::UnterminatedString,
                        "Unterminated string constant.",
                        start,
                    ));
                }
                Some((_, ch)) => value.push(ch),
            }
        }

        Ok(Lexeme::new(LexKind::Str(value), Span::from_usize(start, self.pos)))
    }

    /// Parse an escape sequence. Returns `None` for line continuations.
    /// 解析转义序列。行延续返回 `None`。
    fn escape_sequence(&mut self, literal_start: usize) -> Result<Option<char>, ExprError> {
        let Some((pos, ch)) = self.advance() else {
            return Err(self.err(
                ExprErrorKind::UnterminatedString,
                "Unterminated string constant.",
                literal_start,
            ));
        };

        let escaped = match ch {
            'n' => '\n',
            'r' => '\r',
            't' => '\t',
            'b' => '\u{0008}',
            'f' => '\u{000c}',
            'v' => '\u{000b}',
            '0' if !self.peek_char().is_some_and(|c| c.is_ascii_digit()) => '\0',
            'x' => return self.hex_escape(pos, 2).map(Some),
            'u' => {
                if self.peek_char() == Some('{') {
                    self.advance();
                    return self.braced_unicode_escape(pos).map(Some);
                }
                return self.hex_escape(pos, 4).map(Some);
            }
            // Line continuation - 行延续
            '\r' => {
                if self.peek_char() == Some('\n') {
                    self.advance();
                }
                return Ok(None);
            }
            '\n' | '\u{2028}' | '\u{2029}' => return Ok(None),
            // Identity escape (covers \\ \" \' \/ and everything else)
            // 恒等转义（涵盖 \\ \" \' \/ 及其他所有字符）
            other => other,
        };
        Ok(Some(escaped))
    }

    /// Parse `count` hex digits after `\x` or `\u`.
    /// 解析 `\x` 或 `\u` 之后的 `count` 个十六进制数字。
    fn hex_escape(&mut self, escape_pos: usize, count: usize) -> Result<char, ExprError> {
        let mut code = 0u32;
        for _ in 0..count {
            match self.advance() {
                Some((_, c)) if c.is_ascii_hexdigit() => {
                    code = code * 16 + c.to_digit(16).unwrap_or(0);
                }
                _ => {
                    return Err(self.err(
                        ExprErrorKind::InvalidEscape,
                        "Invalid hexadecimal escape sequence.",
                        escape_pos,
                    ));
                }
            }
        }
        char::from_u32(code).ok_or_else(|| {
            self.err(
                ExprErrorKind::InvalidEscape,
                "Invalid Unicode escape sequence.",
                escape_pos,
            )
        })
    }

    /// Parse a `\u{...}` escape; the opening brace is already consumed.
    /// 解析 `\u{...}` 转义；左花括号已被消耗。
    fn braced_unicode_escape(&mut self, escape_pos: usize) -> Result<char, ExprError> {
        let mut code = 0u32;
        let mut digits = 0;
        loop {
            match self.advance() {
                Some((_, '}')) if digits > 0 => break,
                Some((_, c)) if c.is_ascii_hexdigit() && digits < 6 => {
                    code = code * 16 + c.to_digit(16).unwrap_or(0);
                    digits += 1;
                }
                _ => {
                    return Err(self.err(
                        ExprErrorKind::InvalidEscape,
                        "Invalid Unicode escape sequence.",
                        escape_pos,
                    ));
                }
            }
        }
        char::from_u32(code).ok_or_else(|| {
            self.err(
                ExprErrorKind::InvalidEscape,
                "Invalid Unicode escape sequence.",
                escape_pos,
            )
        })
    }

    /// Parse a template literal, substitutions included, as one lexeme.
    /// 将模板字符串（含插值）作为单个词素解析。
    fn template_literal(&mut self, start: usize) -> Result<Lexeme, ExprError> {
        self.template_body(start)?;
        Ok(Lexeme::new(LexKind::Template, Span::from_usize(start, self.pos)))
    }

    /// Consume a template body up to and including the closing backtick.
    /// 消耗模板主体，直到并包含结束反引号。
    fn template_body(&mut self, start: usize) -> Result<(), ExprError> {
        loop {
            match self.advance() {
                Some((_, '`')) => return Ok(()),
                Some((_, '\\')) => {
                    self.advance();
                }
                Some((_, '$')) if self.peek_char() == Some('{') => {
                    self.advance();
                    self.template_substitution(start)?;
                }
                Some(_) => {}
                None => {
                    return Err(self.err(
                        ExprErrorKind::UnterminatedTemplate,
                        "Unterminated template literal.",
                        start,
                    ));
                }
            }
        }
    }

    /// Consume a `${...}` substitution, tracking nested braces, strings,
    /// and nested templates.
    /// 消耗 `${...}` 插值，处理嵌套花括号、字符串和嵌套模板。
    fn template_substitution(&mut self, start: usize) -> Result<(), ExprError> {
        let mut depth = 1usize;
        loop {
            match self.advance() {
                Some((_, '{')) => depth += 1,
                Some((_, '}')) => {
                    depth -= 1;
                    if depth == 0 {
                        return Ok(());
                    }
                }
                Some((_, '`')) => self.template_body(start)?,
                Some((pos, quote @ ('"' | '\''))) => {
                    self.string_literal(pos, quote)?;
                }
                Some(_) => {}
                None => {
                    return Err(self.err(
                        ExprErrorKind::UnterminatedTemplate,
                        "Unterminated template literal.",
                        start,
                    ));
                }
            }
        }
    }

    /// Parse a regular expression literal; the leading `/` is consumed.
    /// 解析正则表达式字面量；起始的 `/` 已被消耗。
    fn regexp(&mut self, start: usize) -> Result<Lexeme, ExprError> {
        let mut in_class = false;

        loop {
            match self.advance() {
                Some((_, '\\')) => {
                    if self.advance().is_none() {
                        return Err(self.err(
                            ExprErrorKind::UnterminatedRegExp,
                            "Unterminated regular expression.",
                            start,
                        ));
                    }
                }
                Some((_, '[')) => in_class = true,
                Some((_, ']')) => in_class = false,
                Some((_, '/')) if !in_class => break,
                Some((_, ch)) if is_line_terminator(ch) => {
                    return Err(self.err(
                        ExprErrorKind::UnterminatedRegExp,
                        "Unterminated regular expression.",
                        start,
                    ));
                }
                Some(_) => {}
                None => {
                    return Err(self.err(
                        ExprErrorKind::UnterminatedRegExp,
                        "Unterminated regular expression.",
                        start,
                    ));
                }
            }
        }

        let pattern = self.src[start + 1..self.pos - 1].to_string();

        let flags_start = self.pos;
        while self.peek_char().is_some_and(is_ident_continue) {
            self.advance();
        }
        let flags = self.src[flags_start..self.pos].to_string();

        Ok(Lexeme::new(
            LexKind::Regex { pattern, flags },
            Span::from_usize(start, self.pos),
        ))
    }

    /// Parse a number literal in any of its forms.
    /// 解析任意形式的数字字面量。
    fn number(&mut self, start: usize, first: char) -> Result<Lexeme, ExprError> {
        let mut bigint = false;

        let value = if first == '0' && matches!(self.peek_char(), Some('x' | 'X')) {
            self.advance();
            let v = self.radix_digits(start, 16)?;
            bigint = self.eat_bigint_suffix();
            v
        } else if first == '0' && matches!(self.peek_char(), Some('o' | 'O')) {
            self.advance();
            let v = self.radix_digits(start, 8)?;
            bigint = self.eat_bigint_suffix();
            v
        } else if first == '0' && matches!(self.peek_char(), Some('b' | 'B')) {
            self.advance();
            let v = self.radix_digits(start, 2)?;
            bigint = self.eat_bigint_suffix();
            v
        } else if first == '0' && self.peek_char().is_some_and(|c| c.is_ascii_digit()) {
            // Legacy octal, unless a digit 8 or 9 forces decimal
            // 传统八进制，除非出现数字 8 或 9 则按十进制处理
            self.legacy_octal(start)?
        } else {
            let v = self.decimal(start, first)?;
            if !self.src[start..self.pos].contains(['.', 'e', 'E']) {
                bigint = self.eat_bigint_suffix();
            }
            v
        };

        // An identifier may not directly follow a number.
        // 标识符不能紧跟在数字之后。
        if self.peek_char().is_some_and(is_ident_start) {
            return Err(self.err(
                ExprErrorKind::InvalidNumber,
                "Identifier directly after number.",
                self.pos,
            ));
        }

        Ok(Lexeme::new(
            LexKind::Num { value, bigint },
            Span::from_usize(start, self.pos),
        ))
    }

    fn eat_bigint_suffix(&mut self) -> bool {
        if self.peek_char() == Some('n') {
            self.advance();
            true
        } else {
            false
        }
    }

    /// Digits of a `0x`/`0o`/`0b` literal, folded into an f64.
    /// `0x`/`0o`/`0b` 字面量的数字部分，折叠为 f64。
    fn radix_digits(&mut self, start: usize, radix: u32) -> Result<f64, ExprError> {
        let mut value = 0.0f64;
        let mut digits = 0;

        while let Some(ch) = self.peek_char() {
            if ch == '_' {
                self.advance();
            } else if let Some(d) = ch.to_digit(radix) {
                value = value * radix as f64 + d as f64;
                digits += 1;
                self.advance();
            } else {
                break;
            }
        }

        if digits == 0 {
            return Err(self.err(ExprErrorKind::InvalidNumber, "Invalid number.", start));
        }
        Ok(value)
    }

    fn legacy_octal(&mut self, start: usize) -> Result<f64, ExprError> {
        let mut text = String::from("0");
        while let Some(ch) = self.peek_char() {
            if ch.is_ascii_digit() {
                text.push(ch);
                self.advance();
            } else {
                break;
            }
        }

        if text.contains(['8', '9']) {
            text.parse::<f64>()
                .map_err(|_| self.err(ExprErrorKind::InvalidNumber, "Invalid number.", start))
        } else {
            let mut value = 0.0f64;
            for d in text.chars().filter_map(|c| c.to_digit(8)) {
                value = value * 8.0 + d as f64;
            }
            Ok(value)
        }
    }

    /// Decimal literal: integer part, fraction, exponent.
    /// 十进制字面量：整数部分、小数部分、指数部分。
    fn decimal(&mut self, start: usize, first: char) -> Result<f64, ExprError> {
        let mut text = String::new();
        if first == '.' {
            text.push('0');
        }
        text.push(first);

        if first != '.' {
            self.decimal_digits(&mut text);
            // Fraction - 小数部分
            if self.peek_char() == Some('.') {
                self.advance();
                text.push('.');
                self.decimal_digits(&mut text);
            }
        } else {
            self.decimal_digits(&mut text);
        }

        // Exponent - 指数部分
        if matches!(self.peek_char(), Some('e' | 'E')) {
            self.advance();
            text.push('e');
            if matches!(self.peek_char(), Some('+' | '-')) {
                let (_, sign) = self.advance().unwrap_or((0, '+'));
                text.push(sign);
            }
            let before = text.len();
            self.decimal_digits(&mut text);
            if text.len() == before {
                return Err(self.err(ExprErrorKind::InvalidNumber, "Invalid number.", start));
            }
        }

        // `5.` parses; `.` alone cannot reach here
        // `5.` 可以解析；单独的 `.` 不会进入此分支
        text.parse::<f64>()
            .map_err(|_| self.err(ExprErrorKind::InvalidNumber, "Invalid number.", start))
    }

    fn decimal_digits(&mut self, text: &mut String) {
        while let Some(ch) = self.peek_char() {
            if ch.is_ascii_digit() {
                text.push(ch);
                self.advance();
            } else if ch == '_' {
                self.advance();
            } else {
                break;
            }
        }
    }

    /// Parse an identifier or keyword literal.
    /// 解析标识符或关键字字面量。
    fn identifier(&mut self, start: usize, first: char) -> Lexeme {
        let mut name = String::from(first);

        while let Some(ch) = self.peek_char() {
            if is_ident_continue(ch) {
                name.push(ch);
                self.advance();
            } else {
                break;
            }
        }

        let kind = match name.as_str() {
            "null" => LexKind::Null,
            "true" => LexKind::True,
            "false" => LexKind::False,
            _ => LexKind::Ident(name),
        };
        Lexeme::new(kind, Span::from_usize(start, self.pos))
    }
}

fn is_ident_start(ch: char) -> bool {
    ch.is_alphabetic() || ch == '_' || ch == '$'
}

fn is_ident_continue(ch: char) -> bool {
    ch.is_alphanumeric() || ch == '_' || ch == '$'
}

fn is_line_terminator(ch: char) -> bool {
    matches!(ch, '\n' | '\r' | '\u{2028}' | '\u{2029}')
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lex(src: &str) -> Vec<LexKind> {
        let map = LineMap::new(src);
        let output = Lexer::new(src, &map).tokenize().expect("lex error");
        output.lexemes.into_iter().map(|l| l.kind).collect()
    }

    fn lex_err(src: &str) -> ExprError {
        let map = LineMap::new(src);
        Lexer::new(src, &map).tokenize().expect_err("expected error")
    }

    #[test]
    fn test_punctuators() {
        assert_eq!(
            lex("( ) [ ] { } , : ..."),
            vec![
                LexKind::LParen,
                LexKind::RParen,
                LexKind::LBracket,
                LexKind::RBracket,
                LexKind::LBrace,
                LexKind::RBrace,
                LexKind::Comma,
                LexKind::Colon,
                LexKind::Ellipsis,
                LexKind::Eof,
            ]
        );
    }

    #[test]
    fn test_number_forms() {
        assert_eq!(lex("1.5")[0], LexKind::Num { value: 1.5, bigint: false });
        assert_eq!(lex(".5")[0], LexKind::Num { value: 0.5, bigint: false });
        assert_eq!(lex("5.")[0], LexKind::Num { value: 5.0, bigint: false });
        assert_eq!(lex("0xFF")[0], LexKind::Num { value: 255.0, bigint: false });
        assert_eq!(lex("0o17")[0], LexKind::Num { value: 15.0, bigint: false });
        assert_eq!(lex("0b101")[0], LexKind::Num { value: 5.0, bigint: false });
        assert_eq!(lex("0123")[0], LexKind::Num { value: 83.0, bigint: false });
        assert_eq!(lex("089")[0], LexKind::Num { value: 89.0, bigint: false });
        assert_eq!(lex("1e3")[0], LexKind::Num { value: 1000.0, bigint: false });
        assert_eq!(lex("1_000")[0], LexKind::Num { value: 1000.0, bigint: false });
        assert_eq!(lex("12n")[0], LexKind::Num { value: 12.0, bigint: true });
        assert_eq!(lex("0x10n")[0], LexKind::Num { value: 16.0, bigint: true });
    }

    #[test]
    fn test_identifier_after_number_rejected() {
        let err = lex_err("3abc");
        assert_eq!(err.kind, ExprErrorKind::InvalidNumber);
    }

    #[test]
    fn test_string_escapes() {
        assert_eq!(lex(r#""a\nb""#)[0], LexKind::Str("a\nb".into()));
        assert_eq!(lex(r#"'\x41'"#)[0], LexKind::Str("A".into()));
        assert_eq!(lex(r#""A""#)[0], LexKind::Str("A".into()));
        assert_eq!(lex(r#""\u{1F600}""#)[0], LexKind::Str("\u{1F600}".into()));
        assert_eq!(lex(r#""\q""#)[0], LexKind::Str("q".into()));
        assert_eq!(lex("\"a\\\nb\"")[0], LexKind::Str("ab".into()));
    }

    #[test]
    fn test_unterminated_string() {
        let err = lex_err("\"abc");
        assert_eq!(err.kind, ExprErrorKind::UnterminatedString);
        assert_eq!(err.index, 0);
        let err = lex_err("\"ab\ncd\"");
        assert_eq!(err.kind, ExprErrorKind::UnterminatedString);
    }

    #[test]
    fn test_comments_collected() {
        let src = "1 // one\n/* two */ 2";
        let map = LineMap::new(src);
        let output = Lexer::new(src, &map).tokenize().unwrap();
        assert_eq!(output.comments.len(), 2);
        assert_eq!(output.comments[0].kind, CommentKind::Line);
        assert_eq!(output.comments[0].value, " one");
        assert_eq!(output.comments[1].kind, CommentKind::Block);
        assert_eq!(output.comments[1].value, " two ");
    }

    #[test]
    fn test_unterminated_block_comment() {
        let err = lex_err("1 /* nope");
        assert_eq!(err.kind, ExprErrorKind::UnterminatedComment);
        assert_eq!(err.index, 2);
    }

    #[test]
    fn test_regexp_vs_division() {
        // After `(` a slash is a regexp - `(` 之后的斜杠是正则表达式
        let kinds = lex("(/ab/gi)");
        assert!(matches!(&kinds[1], LexKind::Regex { pattern, flags }
            if pattern == "ab" && flags == "gi"));
        // After a number it is division - 数字之后是除号
        let kinds = lex("1 / 2");
        assert_eq!(kinds[1], LexKind::Slash);
    }

    #[test]
    fn test_regexp_class_slash() {
        let kinds = lex("(/[/]/)");
        assert!(matches!(&kinds[1], LexKind::Regex { pattern, .. } if pattern == "[/]"));
    }

    #[test]
    fn test_template_opaque() {
        let kinds = lex("`a${ {b: '}'} }c`");
        assert_eq!(kinds[0], LexKind::Template);
        assert_eq!(kinds.len(), 2);
    }

    #[test]
    fn test_keywords() {
        assert_eq!(lex("null")[0], LexKind::Null);
        assert_eq!(lex("true")[0], LexKind::True);
        assert_eq!(lex("false")[0], LexKind::False);
        assert_eq!(lex("NaN")[0], LexKind::Ident("NaN".into()));
    }
}
