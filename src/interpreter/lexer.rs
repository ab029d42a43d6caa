use std::fmt;

use logos::Logos;

use crate::error::LexError;

/// Represents a lexical token in the source input.
/// A token is a minimal but meaningful unit of text produced by the lexer.
/// This enum defines all recognized tokens in the expression language.
#[derive(Logos, Debug, PartialEq, Clone)]
#[logos(error = LexFault)]
#[logos(skip r"[ \t\r\n\f]+")]
pub enum Token {
    /// Numeric literal tokens, such as `3`, `3.14`, `.5`, `2.` or `2.1e-10`.
    #[regex(r"([0-9]+(\.[0-9]*)?|\.[0-9]+)([eE][+-]?[0-9]+)?", parse_number)]
    #[regex(r"[0-9]*\.[0-9]*\.[0-9.]*", malformed_number)]
    #[regex(r"([0-9]+(\.[0-9]*)?|\.[0-9]+)[eE][+-]?", malformed_number)]
    Number(f64),
    /// Identifier tokens; constant, variable or function names such as `x`
    /// or `sin`. `π` is read as `pi`.
    #[regex(r"[a-zA-Z][a-zA-Z0-9_]*", |lex| lex.slice().to_string())]
    #[token("π", |_| String::from("pi"))]
    Identifier(String),
    /// Arithmetic operators, including the typographic spellings `×`, `÷`,
    /// `−` and the `**` power spelling.
    #[token("+", |_| Operator::Plus)]
    #[token("-", |_| Operator::Minus)]
    #[token("−", |_| Operator::Minus)]
    #[token("*", |_| Operator::Star)]
    #[token("×", |_| Operator::Star)]
    #[token("/", |_| Operator::Slash)]
    #[token("÷", |_| Operator::Slash)]
    #[token("//", |_| Operator::DoubleSlash)]
    #[token("%", |_| Operator::Percent)]
    #[token("^", |_| Operator::Caret)]
    #[token("**", |_| Operator::Caret)]
    Operator(Operator),
    /// `(`
    #[token("(")]
    LeftParen,
    /// `)`
    #[token(")")]
    RightParen,
    /// `,`
    #[token(",")]
    Comma,
    /// End of input. Never produced by the scanner itself; [`tokenize`]
    /// appends exactly one.
    End,
}

/// Operator symbols carried by [`Token::Operator`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operator {
    /// `+`
    Plus,
    /// `-`
    Minus,
    /// `*`
    Star,
    /// `/`
    Slash,
    /// `//`
    DoubleSlash,
    /// `%`
    Percent,
    /// `^`
    Caret,
}

/// Failure kinds raised by the scanner. The character offset is attached by
/// [`tokenize`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum LexFault {
    /// No token starts at this character.
    #[default]
    UnexpectedChar,
    /// A number-shaped run of characters that is not a valid literal.
    MalformedNumber,
}

/// Parses a floating-point literal from the current token slice.
///
/// Literals that overflow to infinity are rejected as malformed.
fn parse_number(lex: &logos::Lexer<Token>) -> Result<f64, LexFault> {
    lex.slice()
       .parse::<f64>()
       .ok()
       .filter(|value| value.is_finite())
       .ok_or(LexFault::MalformedNumber)
}

/// Rejects number-shaped slices such as `1.2.3` or `4e+`.
const fn malformed_number(_: &logos::Lexer<Token>) -> Result<f64, LexFault> {
    Err(LexFault::MalformedNumber)
}

/// Converts the scanner's byte offsets into character offsets.
///
/// Offsets are requested in increasing order, so each call only counts the
/// characters since the previous one.
struct CharOffsets<'s> {
    source: &'s str,
    byte:   usize,
    chars:  usize,
}

impl<'s> CharOffsets<'s> {
    const fn new(source: &'s str) -> Self {
        Self { source,
               byte: 0,
               chars: 0 }
    }

    fn at(&mut self, byte: usize) -> usize {
        self.chars += self.source[self.byte..byte].chars().count();
        self.byte = byte;
        self.chars
    }
}

/// Converts an expression into tokens paired with their character offsets.
///
/// Whitespace is skipped. The returned sequence always ends with exactly one
/// [`Token::End`], positioned one past the last character.
///
/// # Errors
/// - [`LexError::UnexpectedChar`] for characters that start no token.
/// - [`LexError::MalformedNumber`] for literals such as `1.2.3` or `1e`.
///
/// # Example
/// ```
/// use calcx::interpreter::lexer::{Operator, Token, tokenize};
///
/// let tokens = tokenize("2 // x").unwrap();
/// assert_eq!(tokens,
///            vec![(Token::Number(2.0), 0),
///                 (Token::Operator(Operator::DoubleSlash), 2),
///                 (Token::Identifier("x".to_string()), 5),
///                 (Token::End, 6)]);
/// ```
pub fn tokenize(source: &str) -> Result<Vec<(Token, usize)>, LexError> {
    let mut tokens = Vec::new();
    let mut offsets = CharOffsets::new(source);
    let mut lexer = Token::lexer(source);

    while let Some(token) = lexer.next() {
        let start = lexer.span().start;
        let position = offsets.at(start);
        match token {
            Ok(tok) => tokens.push((tok, position)),
            Err(LexFault::MalformedNumber) => return Err(LexError::MalformedNumber(position)),
            Err(LexFault::UnexpectedChar) => {
                let found = source[start..].chars().next().unwrap_or_default();
                return Err(LexError::UnexpectedChar(found, position));
            },
        }
    }

    tokens.push((Token::End, offsets.at(source.len())));
    Ok(tokens)
}

/// Renders tokens back to canonical text, separated by single spaces.
///
/// Re-tokenizing the result yields the same tokens.
///
/// # Example
/// ```
/// use calcx::interpreter::lexer::{render, tokenize};
///
/// let tokens = tokenize("2×(3 ** .5)").unwrap();
/// assert_eq!(render(&tokens), "2.0 * ( 3.0 ^ 0.5 )");
/// ```
#[must_use]
pub fn render(tokens: &[(Token, usize)]) -> String {
    tokens.iter()
          .filter(|(token, _)| *token != Token::End)
          .map(|(token, _)| token.to_string())
          .collect::<Vec<_>>()
          .join(" ")
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            // `{:?}` is the shortest form that round-trips and always keeps a
            // decimal point or exponent.
            Self::Number(value) => write!(f, "{value:?}"),
            Self::Identifier(name) => write!(f, "{name}"),
            Self::Operator(op) => write!(f, "{op}"),
            Self::LeftParen => write!(f, "("),
            Self::RightParen => write!(f, ")"),
            Self::Comma => write!(f, ","),
            Self::End => Ok(()),
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let symbol = match self {
            Self::Plus => "+",
            Self::Minus => "-",
            Self::Star => "*",
            Self::Slash => "/",
            Self::DoubleSlash => "//",
            Self::Percent => "%",
            Self::Caret => "^",
        };
        write!(f, "{symbol}")
    }
}
