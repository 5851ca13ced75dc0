//! The location corrector.
//! 位置修正器。
//!
//! Every offset the delegate parser reports is relative to the wrapped
//! text, which carries the two-character synthetic `0(` prefix on line 1.
//! The corrector removes that effect uniformly: byte offsets shift back by
//! two (clamped at zero), columns shift back by two on line 1 only, and
//! line numbers are never adjusted.

use quince_common::{BytePos, LineMap, Loc, Position, Span};

/// Length of the synthetic `0(` prefix, in bytes, all on line 1.
/// 合成前缀 `0(` 的字节长度，全部位于第 1 行。
pub(crate) const PREFIX_LEN: u32 = 2;

pub(crate) struct Relocator<'a> {
    /// Line index of the wrapped text.
    /// 包装后文本的行索引。
    line_map: &'a LineMap,
}

impl<'a> Relocator<'a> {
    pub fn new(line_map: &'a LineMap) -> Self {
        Self { line_map }
    }

    /// Corrected byte span.
    /// 修正后的字节范围。
    pub fn span(&self, span: Span) -> Span {
        Span::new(span.start.rewind(PREFIX_LEN), span.end.rewind(PREFIX_LEN))
    }

    /// Corrected line/column position of a wrapped-text offset.
    /// 包装后文本偏移量的修正行列位置。
    pub fn position(&self, pos: BytePos) -> Position {
        fix_position(self.line_map.position(pos))
    }

    /// Corrected `Loc` of a wrapped-text span.
    /// 包装后文本范围的修正 `Loc`。
    pub fn loc(&self, span: Span) -> Loc {
        Loc::new(self.position(span.start), self.position(span.end))
    }

    /// Corrected `(span, loc)` pair, the shape every node carries.
    /// 修正后的 `(span, loc)` 对，即每个节点携带的形状。
    pub fn locate(&self, span: Span) -> (Span, Loc) {
        (self.span(span), self.loc(span))
    }

    /// Corrected location of a delegate error: index shifts back by two,
    /// column shifts back by two only for first-line errors.
    /// 委托解析器错误的修正位置：索引回退两位，列号仅在第一行回退两位。
    pub fn error_location(&self, index: usize, line: u32, column: u32) -> (usize, Position) {
        (
            index.saturating_sub(PREFIX_LEN as usize),
            fix_position(Position::new(line, column)),
        )
    }
}

fn fix_position(pos: Position) -> Position {
    if pos.line == 1 {
        Position::new(pos.line, pos.column.saturating_sub(PREFIX_LEN))
    } else {
        pos
    }
}
