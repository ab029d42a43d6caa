use std::iter::Peekable;

use crate::{
    ast::{BinaryOperator, Expr},
    interpreter::{
        lexer::{Operator, Token},
        parser::{
            core::ParseResult,
            unary::{parse_primary, parse_unary},
        },
    },
};

/// Parses addition and subtraction expressions.
///
/// Handles left-associative binary operators: `+` and `-`.
///
/// The rule is: `additive := multiplicative (("+" | "-") multiplicative)*`
///
/// Chains are folded in a loop, so their length does not count towards the
/// nesting depth.
///
/// # Parameters
/// - `tokens`: Token stream with position information.
/// - `depth`: Current nesting depth.
///
/// # Returns
/// An `Expr::BinaryOp` tree representing the parsed expression.
pub fn parse_additive<'a, I>(tokens: &mut Peekable<I>, depth: usize) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)>
{
    let mut left = parse_multiplicative(tokens, depth)?;
    loop {
        if let Some((token, position)) = tokens.peek()
           && let Some(op) = token_to_binary_operator(token)
           && matches!(op, BinaryOperator::Add | BinaryOperator::Sub)
        {
            tokens.next();
            let right = parse_multiplicative(tokens, depth)?;
            left = Expr::BinaryOp { left: Box::new(left),
                                    op,
                                    right: Box::new(right),
                                    position: *position };
            continue;
        }
        break;
    }
    Ok(left)
}

/// Parses multiplication-level expressions.
///
/// Handles left-associative operators: `*`, `/`, `%` and `//`.
///
/// The rule is: `multiplicative := unary (("*" | "/" | "%" | "//") unary)*`
///
/// # Parameters
/// - `tokens`: Token stream with position information.
/// - `depth`: Current nesting depth.
///
/// # Returns
/// A binary expression tree combining unary-level nodes.
pub fn parse_multiplicative<'a, I>(tokens: &mut Peekable<I>, depth: usize) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)>
{
    let mut left = parse_unary(tokens, depth)?;
    loop {
        if let Some((token, position)) = tokens.peek()
           && let Some(op) = token_to_binary_operator(token)
           && matches!(op,
                       BinaryOperator::Mul
                       | BinaryOperator::Div
                       | BinaryOperator::Mod
                       | BinaryOperator::FloorDiv)
        {
            tokens.next();
            let right = parse_unary(tokens, depth)?;
            left = Expr::BinaryOp { left: Box::new(left),
                                    op,
                                    right: Box::new(right),
                                    position: *position };
            continue;
        }
        break;
    }
    Ok(left)
}

/// Parses exponentiation expressions.
///
/// The right operand is parsed at the unary level, which recurses back into
/// this function, so `a ^ b ^ c` parses as `a ^ (b ^ c)` and `2 ^ -1` is
/// accepted. Prefix operators bind looser than `^`: `-2 ^ 2` is `-(2 ^ 2)`.
///
/// The rule is: `exponent := primary ("^" unary)?`
///
/// # Parameters
/// - `tokens`: Token stream.
/// - `depth`: Current nesting depth.
///
/// # Returns
/// An exponentiation expression tree.
pub fn parse_exponent<'a, I>(tokens: &mut Peekable<I>, depth: usize) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)>
{
    let base = parse_primary(tokens, depth)?;
    if let Some((Token::Operator(Operator::Caret), position)) = tokens.peek() {
        tokens.next();
        let exponent = parse_unary(tokens, depth + 1)?;
        return Ok(Expr::BinaryOp { left:     Box::new(base),
                                   op:       BinaryOperator::Pow,
                                   right:    Box::new(exponent),
                                   position: *position, });
    }
    Ok(base)
}

/// Maps a token to its corresponding binary operator.
///
/// Returns `Some(BinaryOperator)` when the token is an operator symbol and
/// `None` for all other tokens. `+` and `-` map to their binary meaning; the
/// unary parser checks for them before this function is consulted.
///
/// # Example
/// ```
/// use calcx::{
///     ast::BinaryOperator,
///     interpreter::{
///         lexer::{Operator, Token},
///         parser::binary::token_to_binary_operator,
///     },
/// };
///
/// assert_eq!(token_to_binary_operator(&Token::Operator(Operator::DoubleSlash)),
///            Some(BinaryOperator::FloorDiv));
/// assert_eq!(token_to_binary_operator(&Token::Comma), None);
/// ```
#[must_use]
pub const fn token_to_binary_operator(token: &Token) -> Option<BinaryOperator> {
    match token {
        Token::Operator(op) => Some(match op {
                                        Operator::Plus => BinaryOperator::Add,
                                        Operator::Minus => BinaryOperator::Sub,
                                        Operator::Star => BinaryOperator::Mul,
                                        Operator::Slash => BinaryOperator::Div,
                                        Operator::DoubleSlash => BinaryOperator::FloorDiv,
                                        Operator::Percent => BinaryOperator::Mod,
                                        Operator::Caret => BinaryOperator::Pow,
                                    }),
        _ => None,
    }
}
