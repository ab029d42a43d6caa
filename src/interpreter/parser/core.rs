use std::iter::Peekable;

use crate::{
    ast::Expr,
    error::ParseError,
    interpreter::{lexer::Token, parser::binary::parse_additive},
};

pub type ParseResult<T> = Result<T, ParseError>;

/// Deepest nesting of groups, calls and prefix operators the parser accepts.
pub const MAX_DEPTH: usize = 256;

/// Most operator tokens a single expression may contain. Long operator
/// chains build equally tall trees, so this bounds them the way
/// [`MAX_DEPTH`] bounds nesting.
pub const MAX_OPERATORS: usize = 4096;

/// Parses a complete token sequence into an expression tree.
///
/// The whole sequence must form one expression followed by `End`. A stray
/// `)` after the expression is reported as unbalanced; any other leftover
/// token (e.g. `2 pi`, since implicit multiplication is not supported) is
/// unexpected.
///
/// # Errors
/// Returns the first [`ParseError`] encountered; no partial tree is
/// produced. Input with more than [`MAX_OPERATORS`] operators is rejected
/// as [`ParseError::TooDeep`] before parsing starts.
///
/// # Example
/// ```
/// use calcx::interpreter::{lexer::tokenize, parser::core::parse};
///
/// let expr = parse(&tokenize("2 + 3 * 4").unwrap()).unwrap();
/// assert_eq!(expr.to_string(), "(2 + (3 * 4))");
/// ```
pub fn parse(tokens: &[(Token, usize)]) -> ParseResult<Expr> {
    let operators = tokens.iter()
                          .filter(|(token, _)| matches!(token, Token::Operator(_)))
                          .count();
    if operators > MAX_OPERATORS {
        return Err(ParseError::TooDeep);
    }

    let mut iter = tokens.iter().peekable();
    let expr = parse_expression(&mut iter, 0)?;

    match iter.next() {
        Some((Token::End, _)) | None => Ok(expr),
        Some((Token::RightParen, position)) => Err(ParseError::UnbalancedParens(*position)),
        Some((token, position)) => Err(ParseError::UnexpectedToken(token.clone(), *position)),
    }
}

/// Parses a full expression.
///
/// This is the entry point for every sub-expression (top level, inside
/// parentheses, and each call argument). It begins at the lowest-precedence
/// level, addition, and recursively descends through the precedence
/// hierarchy.
///
/// Grammar: `expression := additive`
///
/// # Parameters
/// - `tokens`: Token iterator providing `(Token, position)` pairs.
/// - `depth`: Current nesting depth, checked against [`MAX_DEPTH`].
pub fn parse_expression<'a, I>(tokens: &mut Peekable<I>, depth: usize) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)>
{
    parse_additive(tokens, depth)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interpreter::lexer::tokenize;

    fn shape(source: &str) -> String {
        parse(&tokenize(source).unwrap()).unwrap().to_string()
    }

    fn failure(source: &str) -> ParseError {
        parse(&tokenize(source).unwrap()).unwrap_err()
    }

    #[test]
    fn precedence_and_grouping() {
        assert_eq!(shape("2 + 3 * 4"), "(2 + (3 * 4))");
        assert_eq!(shape("(2 + 3) * 4"), "((2 + 3) * 4)");
        assert_eq!(shape("8 // 3 % 2 / 1"), "(((8 // 3) % 2) / 1)");
        assert_eq!(shape("1 - 2 - 3"), "((1 - 2) - 3)");
    }

    #[test]
    fn power_is_right_associative() {
        assert_eq!(shape("2 ^ 3 ^ 2"), "(2 ^ (3 ^ 2))");
    }

    #[test]
    fn unary_minus_binds_looser_than_power() {
        assert_eq!(shape("-2 ^ 2"), "(-(2 ^ 2))");
        assert_eq!(shape("2 ^ -1"), "(2 ^ (-1))");
        assert_eq!(shape("-2 * 3"), "((-2) * 3)");
        assert_eq!(shape("+-+1"), "(+(-(+1)))");
    }

    #[test]
    fn constants_variables_and_calls() {
        let expr = parse(&tokenize("pi + x").unwrap()).unwrap();
        let Expr::BinaryOp { left, right, .. } = expr else {
            panic!("expected a binary operation");
        };
        assert!(matches!(*left, Expr::Constant { ref name, position: 0 } if name == "pi"));
        assert!(matches!(*right, Expr::Variable { ref name, position: 5 } if name == "x"));

        assert_eq!(shape("max(1, 2 + 3, f())"), "max(1, (2 + 3), f())");
    }

    #[test]
    fn unbalanced_parentheses() {
        assert_eq!(failure("(1 + 2"), ParseError::UnbalancedParens(0));
        assert_eq!(failure("1 + 2)"), ParseError::UnbalancedParens(5));
        assert_eq!(failure("sqrt(4"), ParseError::UnbalancedParens(4));
        assert_eq!(failure("((1)"), ParseError::UnbalancedParens(0));
    }

    #[test]
    fn incomplete_input() {
        assert_eq!(failure(""), ParseError::UnexpectedEnd);
        assert_eq!(failure("1 +"), ParseError::UnexpectedEnd);
        assert_eq!(failure("2 ^"), ParseError::UnexpectedEnd);
        assert_eq!(failure("-"), ParseError::UnexpectedEnd);
    }

    #[test]
    fn implicit_multiplication_is_rejected() {
        assert_eq!(failure("2pi"),
                   ParseError::UnexpectedToken(Token::Identifier("pi".to_string()), 1));
        assert_eq!(failure("3(4 + 5)"), ParseError::UnexpectedToken(Token::LeftParen, 1));
        assert_eq!(failure("(1)(2)"), ParseError::UnexpectedToken(Token::LeftParen, 3));
    }

    #[test]
    fn misplaced_tokens() {
        assert_eq!(failure("1 + * 2"),
                   ParseError::UnexpectedToken(Token::Operator(crate::interpreter::lexer::Operator::Star),
                                               4));
        assert_eq!(failure("()"), ParseError::UnexpectedToken(Token::RightParen, 1));
        assert_eq!(failure("f(1,)"), ParseError::UnexpectedToken(Token::RightParen, 4));
        assert_eq!(failure("(1 2)"), ParseError::UnexpectedToken(Token::Number(2.0), 3));
        assert_eq!(failure(","), ParseError::UnexpectedToken(Token::Comma, 0));
    }

    #[test]
    fn nesting_depth_is_bounded() {
        let nested = format!("{}1{}", "(".repeat(MAX_DEPTH + 1), ")".repeat(MAX_DEPTH + 1));
        assert_eq!(failure(&nested), ParseError::TooDeep);

        let minuses = format!("{}1", "-".repeat(MAX_DEPTH + 1));
        assert_eq!(failure(&minuses), ParseError::TooDeep);

        let shallow = format!("{}1{}", "(".repeat(MAX_DEPTH - 1), ")".repeat(MAX_DEPTH - 1));
        assert!(parse(&tokenize(&shallow).unwrap()).is_ok());
    }

    #[test]
    fn long_operator_chains_are_not_nesting() {
        let sum = vec!["1"; 300].join(" + ");
        assert!(parse(&tokenize(&sum).unwrap()).is_ok());

        let product = vec!["2"; MAX_OPERATORS + 1].join(" * ");
        assert!(parse(&tokenize(&product).unwrap()).is_ok());

        let nested = format!("{}{}{}",
                             "(".repeat(MAX_DEPTH - 1),
                             vec!["1"; 1000].join(" - "),
                             ")".repeat(MAX_DEPTH - 1));
        assert!(parse(&tokenize(&nested).unwrap()).is_ok());
    }

    #[test]
    fn operator_count_is_bounded() {
        let long = vec!["1"; MAX_OPERATORS + 2].join(" + ");
        assert_eq!(failure(&long), ParseError::TooDeep);
    }

    #[test]
    fn missing_end_token_is_tolerated() {
        let mut tokens = tokenize("1 + 2").unwrap();
        tokens.pop();
        assert!(parse(&tokens).is_ok());
    }
}
