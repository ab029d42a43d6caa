use std::iter::Peekable;

use crate::{
    ast::Expr,
    error::ParseError,
    interpreter::{
        lexer::Token,
        parser::core::{ParseResult, parse_expression},
    },
};

/// Parses a comma-separated argument list up to its closing `)`.
///
/// The opening `(` at character offset `open` has already been consumed. An
/// immediately encountered `)` produces an empty list; a trailing comma is
/// rejected because the parser then expects another argument.
///
/// Grammar (simplified): `arguments := expression ("," expression)*`
///
/// # Parameters
/// - `tokens`: Token iterator positioned at the first argument or `)`.
/// - `open`: Position of the opening parenthesis, used when it is never
///   closed.
/// - `depth`: Nesting depth of the arguments.
///
/// # Errors
/// - [`ParseError::UnbalancedParens`] if the input ends before `)`.
/// - [`ParseError::UnexpectedToken`] for anything other than `,` or `)`
///   after an argument.
pub(in crate::interpreter::parser) fn parse_comma_separated<'a, I>(tokens: &mut Peekable<I>,
                                                                   open: usize,
                                                                   depth: usize)
                                                                   -> ParseResult<Vec<Expr>>
    where I: Iterator<Item = &'a (Token, usize)>
{
    let mut items = Vec::new();
    if let Some((Token::RightParen, _)) = tokens.peek() {
        tokens.next();

        return Ok(items);
    }
    loop {
        items.push(parse_expression(tokens, depth)?);
        match tokens.next() {
            Some((Token::Comma, _)) => {},
            Some((Token::RightParen, _)) => break,
            Some((Token::End, _)) | None => return Err(ParseError::UnbalancedParens(open)),
            Some((token, position)) => {
                return Err(ParseError::UnexpectedToken(token.clone(), *position));
            },
        }
    }
    Ok(items)
}
