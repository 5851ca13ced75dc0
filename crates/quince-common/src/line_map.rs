//! Offset-to-position conversion.
//! 偏移量到行列位置的转换。

use crate::{BytePos, Position};

/// An index of line start offsets, built once per source buffer.
/// 行起始偏移量的索引，每个源码缓冲区构建一次。
///
/// Lines are delimited by `\n`, `\r`, `\r\n`, U+2028 and U+2029, matching
/// the line terminators the lexer recognizes.
#[derive(Debug, Clone)]
pub struct LineMap {
    /// Byte offset of the first character of each line. Always starts with 0.
    /// 每一行第一个字符的字节偏移量，始终以 0 开头。
    line_starts: Vec<u32>,
}

impl LineMap {
    pub fn new(src: &str) -> Self {
        let mut line_starts = vec![0u32];
        let mut iter = src.char_indices().peekable();
        while let Some((i, ch)) = iter.next() {
            match ch {
                '\n' | '\u{2028}' | '\u{2029}' => {
                    line_starts.push((i + ch.len_utf8()) as u32);
                }
                '\r' => {
                    // \r\n counts as a single terminator - \r\n 算作一个换行符
                    if let Some((_, '\n')) = iter.peek() {
                        iter.next();
                        line_starts.push((i + 2) as u32);
                    } else {
                        line_starts.push((i + 1) as u32);
                    }
                }
                _ => {}
            }
        }
        LineMap { line_starts }
    }

    /// Convert a byte offset into a 1-based line / 0-based column position.
    /// 将字节偏移量转换为行号（从 1 开始）/ 列号（从 0 开始）。
    pub fn position(&self, pos: BytePos) -> Position {
        let line_idx = match self.line_starts.binary_search(&pos.0) {
            Ok(i) => i,
            Err(i) => i - 1,
        };
        Position {
            line: (line_idx + 1) as u32,
            column: pos.0 - self.line_starts[line_idx],
        }
    }

    /// Number of lines in the source buffer.
    /// 源码缓冲区的行数。
    pub fn line_count(&self) -> usize {
        self.line_starts.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pos(map: &LineMap, offset: u32) -> (u32, u32) {
        let p = map.position(BytePos(offset));
        (p.line, p.column)
    }

    #[test]
    fn test_single_line() {
        let map = LineMap::new("hello");
        assert_eq!(pos(&map, 0), (1, 0));
        assert_eq!(pos(&map, 4), (1, 4));
        assert_eq!(pos(&map, 5), (1, 5));
    }

    #[test]
    fn test_lf_lines() {
        let map = LineMap::new("ab\ncd\n");
        assert_eq!(pos(&map, 0), (1, 0));
        assert_eq!(pos(&map, 2), (1, 2));
        assert_eq!(pos(&map, 3), (2, 0));
        assert_eq!(pos(&map, 5), (2, 2));
        assert_eq!(pos(&map, 6), (3, 0));
    }

    #[test]
    fn test_crlf_is_one_terminator() {
        let map = LineMap::new("a\r\nb");
        assert_eq!(map.line_count(), 2);
        assert_eq!(pos(&map, 3), (2, 0));
    }

    #[test]
    fn test_lone_cr() {
        let map = LineMap::new("a\rb");
        assert_eq!(map.line_count(), 2);
        assert_eq!(pos(&map, 2), (2, 0));
    }

    #[test]
    fn test_empty_source() {
        let map = LineMap::new("");
        assert_eq!(map.line_count(), 1);
        assert_eq!(pos(&map, 0), (1, 0));
    }
}
