//! Syntax error type and reporting for quince.
//! quince 的语法错误类型和报告。
//!
//! This crate provides error rendering using ariadne.
//! 本 crate 使用 ariadne 库渲染错误信息。

mod codes;
mod error;

pub use codes::ErrorCode;
pub use error::SyntaxError;

use ariadne::{Color, Label, Report, ReportKind, Source};

/// Render a syntax error to stderr.
/// 将语法错误渲染到标准错误输出。
pub fn emit(source: &str, filename: &str, error: &SyntaxError) {
    // Errors at end of input get a zero-width span.
    // 位于输入末尾的错误使用零宽度范围。
    let end = (error.index + 1).min(source.len()).max(error.index);
    let span = error.index..end;

    Report::build(ReportKind::Error, filename, error.index)
        .with_code(error.code.as_str())
        .with_message(&error.message)
        .with_label(
            Label::new((filename, span))
                .with_message(error.code.description())
                .with_color(Color::Red),
        )
        .finish()
        .eprint((filename, Source::from(source)))
        .ok();
}
