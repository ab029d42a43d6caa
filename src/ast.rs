use std::fmt;

/// An abstract syntax tree (AST) node representing an arithmetic expression.
///
/// Each non-leaf node exclusively owns its children. The parser never
/// produces an incomplete node, so every operator carries all of its
/// operands. `position` is the 0-based character offset of the token that
/// introduced the node.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// A numeric literal.
    Literal {
        /// The constant value.
        value:    f64,
        /// Character offset in the source text.
        position: usize,
    },
    /// Reference to a user variable by name.
    Variable {
        /// Name of the variable.
        name:     String,
        /// Character offset in the source text.
        position: usize,
    },
    /// Reference to a named constant such as `pi`.
    Constant {
        /// Name of the constant.
        name:     String,
        /// Character offset in the source text.
        position: usize,
    },
    /// A prefix operation (`-x`, `+x`).
    UnaryOp {
        /// The unary operator to apply.
        op:       UnaryOperator,
        /// The operand expression.
        operand:  Box<Self>,
        /// Character offset in the source text.
        position: usize,
    },
    /// A binary operation (addition, power, etc.).
    BinaryOp {
        /// Left operand.
        left:     Box<Self>,
        /// The operator.
        op:       BinaryOperator,
        /// Right operand.
        right:    Box<Self>,
        /// Character offset of the operator.
        position: usize,
    },
    /// Function call expression (e.g. `sin(x)`).
    Call {
        /// Name of the function being called.
        function: String,
        /// Arguments to the function, in order.
        args:     Vec<Self>,
        /// Character offset in the source text.
        position: usize,
    },
}

impl Expr {
    /// Gets the character offset from `self`.
    /// ## Example
    /// ```
    /// use calcx::ast::Expr;
    ///
    /// let expr = Expr::Variable { name:     "x".to_string(),
    ///                             position: 5, };
    ///
    /// assert_eq!(expr.position(), 5);
    /// ```
    #[must_use]
    pub const fn position(&self) -> usize {
        match self {
            Self::Literal { position, .. }
            | Self::Variable { position, .. }
            | Self::Constant { position, .. }
            | Self::UnaryOp { position, .. }
            | Self::BinaryOp { position, .. }
            | Self::Call { position, .. } => *position,
        }
    }
}

/// Renders the tree fully parenthesized, so the grouping chosen by the
/// parser is visible: `2 ^ 3 ^ 2` renders as `(2 ^ (3 ^ 2))`.
impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Literal { value, .. } => write!(f, "{value}"),
            Self::Variable { name, .. } | Self::Constant { name, .. } => write!(f, "{name}"),
            Self::UnaryOp { op, operand, .. } => write!(f, "({op}{operand})"),
            Self::BinaryOp { left, op, right, .. } => write!(f, "({left} {op} {right})"),
            Self::Call { function, args, .. } => {
                write!(f, "{function}(")?;
                for (i, arg) in args.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{arg}")?;
                }
                write!(f, ")")
            },
        }
    }
}

/// Represents a binary operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum BinaryOperator {
    /// Addition (`+`)
    Add,
    /// Subtraction (`-`)
    Sub,
    /// Multiplication (`*`)
    Mul,
    /// Division (`/`)
    Div,
    /// Floored modulo (`%`)
    Mod,
    /// Floor division (`//`)
    FloorDiv,
    /// Exponentiation (`^`)
    Pow,
}

/// Represents a prefix operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum UnaryOperator {
    /// Arithmetic negation (e.g. `-x`).
    Neg,
    /// Identity (e.g. `+x`).
    Pos,
}

impl fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let operator = match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
            Self::Mod => "%",
            Self::FloorDiv => "//",
            Self::Pow => "^",
        };
        write!(f, "{operator}")
    }
}

impl fmt::Display for UnaryOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Neg => write!(f, "-"),
            Self::Pos => write!(f, "+"),
        }
    }
}
