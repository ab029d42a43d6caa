/// The evaluator module walks the AST and computes results.
///
/// The evaluator evaluates children before parents, applies the arithmetic
/// rules, dispatches calls through the function registry and classifies
/// every failure.
///
/// # Responsibilities
/// - Evaluates AST nodes, performing all supported operations.
/// - Resolves constants and variables through the symbol table.
/// - Reports division by zero, domain violations and overflow.
pub mod evaluator;
/// The lexer module tokenizes source text for further parsing.
///
/// The lexer reads the raw source text and produces a sequence of tokens,
/// each paired with its character offset, terminated by a single `End`
/// token. This is the first stage of interpretation.
///
/// # Responsibilities
/// - Converts the input character stream into positioned tokens.
/// - Handles numeric literals, identifiers, operators and delimiters.
/// - Reports lexical errors for invalid or malformed input.
pub mod lexer;
/// The parser module builds the abstract syntax tree (AST) from tokens.
///
/// The parser processes the token sequence produced by the lexer and
/// constructs an AST that honors the precedence and associativity table. It
/// performs no numeric evaluation.
///
/// # Responsibilities
/// - Converts tokens into structured AST nodes.
/// - Validates grammar, parenthesis balance and nesting depth.
pub mod parser;
/// Name resolution for constants and variables.
pub mod symbols;
