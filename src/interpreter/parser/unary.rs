use std::iter::Peekable;

use crate::{
    ast::{Expr, UnaryOperator},
    error::ParseError,
    interpreter::{
        lexer::{Operator, Token},
        parser::{
            binary::parse_exponent,
            core::{MAX_DEPTH, ParseResult, parse_expression},
            utils::parse_comma_separated,
        },
        symbols::is_constant,
    },
};

/// Parses a unary expression.
///
/// Supports prefix operators:
/// - `-`  (numeric negation)
/// - `+`  (identity)
///
/// Unary operators are right-associative, so an input like `+-x` is parsed as
/// `+( -x )`. They bind looser than `^`, which is handled by
/// [`parse_exponent`].
///
/// Grammar:
/// ```text
///     unary := ("-" | "+") unary
///            | exponent
/// ```
/// # Parameters
/// - `tokens`: Token iterator with lookahead.
/// - `depth`: Current nesting depth.
///
/// # Errors
/// [`ParseError::TooDeep`] once `depth` exceeds [`MAX_DEPTH`].
pub fn parse_unary<'a, I>(tokens: &mut Peekable<I>, depth: usize) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)>
{
    if depth > MAX_DEPTH {
        return Err(ParseError::TooDeep);
    }

    let op = match tokens.peek() {
        Some((Token::Operator(Operator::Minus), _)) => UnaryOperator::Neg,
        Some((Token::Operator(Operator::Plus), _)) => UnaryOperator::Pos,
        _ => return parse_exponent(tokens, depth),
    };
    let Some((_, position)) = tokens.next() else {
        return Err(ParseError::UnexpectedEnd);
    };
    let operand = parse_unary(tokens, depth + 1)?;
    Ok(Expr::UnaryOp { op,
                       operand: Box::new(operand),
                       position: *position })
}

/// Parses a primary (atomic) expression.
///
/// Grammar:
/// ```text
///     primary := NUMBER
///              | IDENTIFIER
///              | IDENTIFIER "(" arguments? ")"
///              | "(" expression ")"
/// ```
/// An identifier naming a built-in constant becomes [`Expr::Constant`];
/// every other bare identifier becomes [`Expr::Variable`].
///
/// # Errors
/// - [`ParseError::UnexpectedEnd`] when the input stops where an operand is
///   required.
/// - [`ParseError::UnexpectedToken`] for any token that cannot start an
///   operand.
pub fn parse_primary<'a, I>(tokens: &mut Peekable<I>, depth: usize) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)>
{
    match tokens.next() {
        Some((Token::Number(value), position)) => Ok(Expr::Literal { value:    *value,
                                                                     position: *position, }),
        Some((Token::Identifier(name), position)) => {
            parse_identifier_or_call(tokens, name, *position, depth)
        },
        Some((Token::LeftParen, position)) => parse_grouping(tokens, *position, depth),
        Some((Token::End, _)) | None => Err(ParseError::UnexpectedEnd),
        Some((token, position)) => Err(ParseError::UnexpectedToken(token.clone(), *position)),
    }
}

/// Parses the remainder of a parenthesized expression whose `(` sits at
/// `open`.
///
/// Grammar `grouping := "(" expression ")"`
///
/// # Returns
/// The inner expression as-is (no wrapper node).
fn parse_grouping<'a, I>(tokens: &mut Peekable<I>, open: usize, depth: usize) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)>
{
    let expr = parse_expression(tokens, depth + 1)?;
    match tokens.next() {
        Some((Token::RightParen, _)) => Ok(expr),
        Some((Token::End, _)) | None => Err(ParseError::UnbalancedParens(open)),
        Some((token, position)) => Err(ParseError::UnexpectedToken(token.clone(), *position)),
    }
}

/// Parses an identifier that has already been consumed: a call when `(`
/// follows, otherwise a constant or variable reference.
fn parse_identifier_or_call<'a, I>(tokens: &mut Peekable<I>,
                                   name: &str,
                                   position: usize,
                                   depth: usize)
                                   -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)>
{
    if let Some((Token::LeftParen, open)) = tokens.peek() {
        let open = *open;
        tokens.next();
        let args = parse_comma_separated(tokens, open, depth + 1)?;
        return Ok(Expr::Call { function: name.to_string(),
                               args,
                               position });
    }

    if is_constant(name) {
        Ok(Expr::Constant { name: name.to_string(),
                            position })
    } else {
        Ok(Expr::Variable { name: name.to_string(),
                            position })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interpreter::lexer::tokenize;

    fn primary(source: &str) -> ParseResult<Expr> {
        let tokens = tokenize(source).unwrap();
        parse_primary(&mut tokens.iter().peekable(), 0)
    }

    #[test]
    fn call_records_name_and_position() {
        let expr = primary("  atan2(1, 2)").unwrap();
        let Expr::Call { function, args, position } = expr else {
            panic!("expected a call");
        };
        assert_eq!(function, "atan2");
        assert_eq!(args.len(), 2);
        assert_eq!(position, 2);
    }

    #[test]
    fn constant_called_like_a_function_is_still_a_call() {
        // Whether `e(...)` is meaningful is decided at evaluation time.
        assert!(matches!(primary("e(1)"), Ok(Expr::Call { .. })));
    }

    #[test]
    fn grouping_reports_unexpected_tokens_inside() {
        assert_eq!(primary("(1 ,"),
                   Err(ParseError::UnexpectedToken(Token::Comma, 3)));
    }

    #[test]
    fn unary_stops_at_depth_limit() {
        let tokens = tokenize("1").unwrap();
        assert_eq!(parse_unary(&mut tokens.iter().peekable(), MAX_DEPTH + 1),
                   Err(ParseError::TooDeep));
        assert!(parse_unary(&mut tokens.iter().peekable(), MAX_DEPTH).is_ok());
    }
}
