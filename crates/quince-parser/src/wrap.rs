//! The wrapper/driver.
//!
//! Borrows the delegate grammar by boundary injection: the document text
//! is embedded as the sole argument of a synthetic call, `0(` + text +
//! `\n)`, so the delegate parser does all lexing and parsing. The driver
//! then pulls the call argument back out as the semantic root, polices
//! the argument list, strips the synthetic tokens, and pins the program
//! extent back onto the original text.

use crate::classify::Classifier;
use crate::convert::Converter;
use crate::relocate::{Relocator, PREFIX_LEN};
use quince_common::{BytePos, LineMap, Loc, Position, Span};
use quince_diagnostic::SyntaxError;
use quince_expr as expr;
use quince_expr::{Element, ExprKind, Lit, ParseOptions};
use quince_syntax::{ExpressionStatement, Program, Statement};

const PREFIX: &str = "0(";
const SUFFIX: &str = "\n)";

pub(crate) fn parse_document(text: &str, options: &ParseOptions) -> Result<Program, SyntaxError> {
    let wrapped = format!("{PREFIX}{text}{SUFFIX}");

    // Caller options are echoed through, except that the driver always
    // needs the token and comment streams for its own bookkeeping.
    let mut delegate_options = options.clone();
    delegate_options.tokens = true;
    delegate_options.comments = true;

    let parse = match expr::parse_program(&wrapped, &delegate_options) {
        Ok(parse) => parse,
        Err(error) => {
            // No token list survives a failed delegate parse; the
            // classifier only needs the line map here.
            let line_map = LineMap::new(&wrapped);
            let relocator = Relocator::new(&line_map);
            let classifier = Classifier::new(text.len(), &[], &relocator);
            return Err(classifier.from_expr_error(&error));
        }
    };

    let relocator = Relocator::new(&parse.line_map);
    let classifier = Classifier::new(text.len(), &parse.tokens, &relocator);
    let converter = Converter::new(&wrapped, &relocator, &classifier);

    let argument = extract_argument(&parse.program, &classifier)?;

    // Drop the synthetic `0` `(` ... `)` tokens bracketing the text.
    let stripped = strip_synthetic(&parse.tokens);

    // A trailing comma after the last real token is legal call-argument
    // syntax in the delegate grammar, but not a JSON document.
    if let Some(last) = stripped.last() {
        if last.value == "," {
            return Err(classifier.unexpected_comma(last.span.start));
        }
    }

    let expression = converter.convert_value(argument)?;

    let statement = ExpressionStatement {
        span: expression.span(),
        loc: expression.loc(),
        expression,
    };

    let tokens = if options.tokens {
        stripped
            .iter()
            .map(|token| converter.convert_token(token))
            .collect::<Result<Vec<_>, _>>()?
    } else {
        Vec::new()
    };
    let comments = if options.comments {
        parse
            .comments
            .iter()
            .map(|comment| converter.convert_comment(comment))
            .collect()
    } else {
        Vec::new()
    };

    // The program covers the original text exactly: end pulled back from
    // the synthetic `\n)` suffix to the end of the real text.
    let span = Span::from_usize(0, text.len());
    let loc = Loc::new(
        Position::FIRST,
        relocator.position(BytePos::from(text.len() + PREFIX_LEN as usize)),
    );

    Ok(Program {
        body: vec![Statement::Expression(statement)],
        comments,
        tokens,
        span,
        loc,
    })
}

/// Pull the single call argument out of the wrapped program.
fn extract_argument<'a>(
    program: &'a expr::Program,
    classifier: &Classifier,
) -> Result<&'a expr::Expr, SyntaxError> {
    // More than one statement means the text broke out of the synthetic
    // call, e.g. `)1(`.
    if program.body.len() > 1 {
        return Err(classifier.unexpected_token_at(program.body[1].span.start));
    }
    let Some(statement) = program.body.first() else {
        return Err(classifier.empty_expression());
    };

    let arguments = match &statement.expression.kind {
        ExprKind::Call { callee, arguments }
            if callee.span.start == BytePos(0)
                && matches!(&callee.kind, ExprKind::Literal(Lit::Number(n)) if *n == 0.0) =>
        {
            arguments
        }
        // Any other shape means trailing text attached itself to the
        // synthetic call, e.g. `1)*(2`.
        ExprKind::Binary { left, .. } => {
            let at = classifier
                .token_after(left.span.end)
                .unwrap_or(left.span.end);
            return Err(classifier.unexpected_token_at(at));
        }
        ExprKind::Call { callee, .. } => {
            let at = classifier
                .token_after(callee.span.end)
                .unwrap_or(callee.span.end);
            return Err(classifier.unexpected_token_at(at));
        }
        _ => return Err(classifier.unexpected_token_at(statement.span.start)),
    };

    match arguments.len() {
        0 => Err(classifier.empty_expression()),
        1 => match &arguments[0] {
            Element::Spread(spread) => {
                Err(classifier.unexpected_token("...", spread.span.start))
            }
            Element::Expr(expression) => Ok(expression),
        },
        _ => {
            let second = arguments[1].span().start;
            let at = classifier.comma_before(second).unwrap_or(second);
            Err(classifier.unexpected_comma(at))
        }
    }
}

/// Drop the synthetic `0`, `(` and `)` tokens.
fn strip_synthetic(tokens: &[expr::Token]) -> &[expr::Token] {
    if tokens.len() >= 3 {
        &tokens[2..tokens.len() - 1]
    } else {
        &[]
    }
}
