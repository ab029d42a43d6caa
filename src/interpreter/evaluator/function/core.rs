use std::{collections::HashMap, fmt};

use lazy_static::lazy_static;

use crate::{
    error::DomainResult,
    interpreter::evaluator::function::{
        builtin, combinatorics, log, min_max, number_theory, round, sqrt,
    },
    settings::AngleMode,
};

/// Type alias for builtin function handlers.
///
/// A builtin receives a slice of evaluated argument values and the angle mode
/// in effect. It returns the result or a [`crate::error::DomainError`] when
/// the arguments are outside its domain.
pub type BuiltinFn = fn(&[f64], AngleMode) -> DomainResult<f64>;

/// Specifies the allowed number of arguments for a function.
///
/// - `Exact(n)` means the function must receive exactly `n` arguments.
/// - `Range(min, max)` accepts any count in `min..=max`.
/// - `AtLeast(min)` accepts `min` or more arguments.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Arity {
    Exact(usize),
    Range(usize, usize),
    AtLeast(usize),
}

impl Arity {
    /// Tests whether the given argument count satisfies this arity constraint.
    ///
    /// # Example
    /// ```
    /// use calcx::interpreter::evaluator::function::core::Arity;
    ///
    /// assert!(Arity::Range(1, 2).accepts(2));
    /// assert!(!Arity::Exact(1).accepts(0));
    /// assert!(Arity::AtLeast(1).accepts(40));
    /// ```
    #[must_use]
    pub const fn accepts(self, n: usize) -> bool {
        match self {
            Self::Exact(m) => n == m,
            Self::Range(min, max) => min <= n && n <= max,
            Self::AtLeast(min) => n >= min,
        }
    }
}

impl fmt::Display for Arity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Exact(n) => write!(f, "{n}"),
            Self::Range(min, max) => write!(f, "{min} to {max}"),
            Self::AtLeast(min) => write!(f, "at least {min}"),
        }
    }
}

/// A registered function: its name, accepted argument count and handler.
#[derive(Debug, Clone)]
pub struct FunctionDef {
    pub name:    String,
    pub arity:   Arity,
    pub func:    BuiltinFn,
    /// One-line description shown by the session's function listing. Empty
    /// for functions registered without one.
    pub summary: &'static str,
}

/// Internal metadata for the built-in table.
struct BuiltinDef {
    name:    &'static str,
    arity:   Arity,
    func:    BuiltinFn,
    summary: &'static str,
}

/// Defines builtin functions by generating a lookup table and a name list.
///
/// Each entry provides:
/// - a string name,
/// - an arity specification,
/// - a function pointer implementing the builtin,
/// - a one-line summary.
///
/// The macro produces:
/// - `BUILTIN_TABLE` (static table the standard registry is built from),
/// - `BUILTIN_FUNCTIONS` (public list of builtin names).
macro_rules! builtin_functions {
    (
        $(
            $name:literal => {
                arity: $arity:expr,
                func: $func:expr,
                summary: $summary:literal $(,)?
            }
        ),* $(,)?
    ) => {
        static BUILTIN_TABLE: &[BuiltinDef] = &[
            $(
                BuiltinDef { name: $name, arity: $arity, func: $func, summary: $summary },
            )*
        ];
        /// Names of every built-in function, in registration order.
        pub const BUILTIN_FUNCTIONS: &[&str] = &[
            $($name,)*
        ];
    };
}

builtin_functions! {
    "sin"              => { arity: Arity::Exact(1),     func: builtin::sin,                 summary: "sine, argument in the angle mode" },
    "cos"              => { arity: Arity::Exact(1),     func: builtin::cos,                 summary: "cosine, argument in the angle mode" },
    "tan"              => { arity: Arity::Exact(1),     func: builtin::tan,                 summary: "tangent, argument in the angle mode" },
    "asin"             => { arity: Arity::Exact(1),     func: builtin::asin,                summary: "inverse sine, -1 <= x <= 1" },
    "acos"             => { arity: Arity::Exact(1),     func: builtin::acos,                summary: "inverse cosine, -1 <= x <= 1" },
    "atan"             => { arity: Arity::Exact(1),     func: builtin::atan,                summary: "inverse tangent" },
    "atan2"            => { arity: Arity::Exact(2),     func: builtin::atan2,               summary: "angle of the point (x, y), called as atan2(y, x)" },
    "sinh"             => { arity: Arity::Exact(1),     func: builtin::sinh,                summary: "hyperbolic sine" },
    "cosh"             => { arity: Arity::Exact(1),     func: builtin::cosh,                summary: "hyperbolic cosine" },
    "tanh"             => { arity: Arity::Exact(1),     func: builtin::tanh,                summary: "hyperbolic tangent" },
    "asinh"            => { arity: Arity::Exact(1),     func: builtin::asinh,               summary: "inverse hyperbolic sine" },
    "acosh"            => { arity: Arity::Exact(1),     func: builtin::acosh,               summary: "inverse hyperbolic cosine, x >= 1" },
    "atanh"            => { arity: Arity::Exact(1),     func: builtin::atanh,               summary: "inverse hyperbolic tangent, -1 < x < 1" },
    "radians"          => { arity: Arity::Exact(1),     func: builtin::radians,             summary: "degrees to radians" },
    "degrees"          => { arity: Arity::Exact(1),     func: builtin::degrees,             summary: "radians to degrees" },
    "ln"               => { arity: Arity::Exact(1),     func: log::ln,                      summary: "natural logarithm, x > 0" },
    "log"              => { arity: Arity::Exact(1),     func: log::log10,                   summary: "base-10 logarithm, x > 0" },
    "log10"            => { arity: Arity::Exact(1),     func: log::log10,                   summary: "base-10 logarithm, x > 0" },
    "log2"             => { arity: Arity::Exact(1),     func: log::log2,                    summary: "base-2 logarithm, x > 0" },
    "logn"             => { arity: Arity::Exact(2),     func: log::logn,                    summary: "logarithm of x in the given base, logn(x, base)" },
    "exp"              => { arity: Arity::Exact(1),     func: log::exp,                     summary: "e raised to x" },
    "exp2"             => { arity: Arity::Exact(1),     func: log::exp2,                    summary: "2 raised to x" },
    "exp10"            => { arity: Arity::Exact(1),     func: log::exp10,                   summary: "10 raised to x" },
    "sqrt"             => { arity: Arity::Exact(1),     func: sqrt::sqrt,                   summary: "square root, x >= 0" },
    "cbrt"             => { arity: Arity::Exact(1),     func: sqrt::cbrt,                   summary: "cube root" },
    "nthroot"          => { arity: Arity::Exact(2),     func: sqrt::nthroot,                summary: "n-th root, nthroot(x, n)" },
    "square"           => { arity: Arity::Exact(1),     func: sqrt::square,                 summary: "x squared" },
    "cube"             => { arity: Arity::Exact(1),     func: sqrt::cube,                   summary: "x cubed" },
    "pow"              => { arity: Arity::Exact(2),     func: sqrt::pow,                    summary: "x raised to y, pow(x, y)" },
    "reciprocal"       => { arity: Arity::Exact(1),     func: sqrt::reciprocal,             summary: "1 / x, x != 0" },
    "abs"              => { arity: Arity::Exact(1),     func: round::abs,                   summary: "absolute value" },
    "floor"            => { arity: Arity::Exact(1),     func: round::floor,                 summary: "largest integer <= x" },
    "ceil"             => { arity: Arity::Exact(1),     func: round::ceil,                  summary: "smallest integer >= x" },
    "trunc"            => { arity: Arity::Exact(1),     func: round::trunc,                 summary: "integer part of x" },
    "round"            => { arity: Arity::Range(1, 2),  func: round::round,                 summary: "round half to even, round(x) or round(x, digits)" },
    "sign"             => { arity: Arity::Exact(1),     func: round::sign,                  summary: "-1, 0 or 1" },
    "factorial"        => { arity: Arity::Exact(1),     func: combinatorics::factorial,     summary: "n!, n a non-negative integer" },
    "double_factorial" => { arity: Arity::Exact(1),     func: combinatorics::double_factorial, summary: "n!!, n a non-negative integer" },
    "comb"             => { arity: Arity::Exact(2),     func: combinatorics::comb,          summary: "combinations, comb(n, r)" },
    "ncr"              => { arity: Arity::Exact(2),     func: combinatorics::comb,          summary: "combinations, ncr(n, r)" },
    "perm"             => { arity: Arity::Exact(2),     func: combinatorics::perm,          summary: "permutations, perm(n, r)" },
    "npr"              => { arity: Arity::Exact(2),     func: combinatorics::perm,          summary: "permutations, npr(n, r)" },
    "gcd"              => { arity: Arity::Exact(2),     func: number_theory::gcd,           summary: "greatest common divisor" },
    "lcm"              => { arity: Arity::Exact(2),     func: number_theory::lcm,           summary: "least common multiple" },
    "fibonacci"        => { arity: Arity::Exact(1),     func: number_theory::fibonacci,     summary: "n-th Fibonacci number" },
    "is_prime"         => { arity: Arity::Exact(1),     func: number_theory::is_prime,      summary: "1 if n is prime, otherwise 0" },
    "min"              => { arity: Arity::AtLeast(1),   func: |args, _| min_max::min(args), summary: "smallest argument" },
    "max"              => { arity: Arity::AtLeast(1),   func: |args, _| min_max::max(args), summary: "largest argument" },
    "hypot"            => { arity: Arity::Exact(2),     func: min_max::hypot,               summary: "sqrt(x^2 + y^2) without overflow" },
}

lazy_static! {
    static ref STANDARD: FunctionRegistry = FunctionRegistry::from_table(BUILTIN_TABLE);
}

/// Maps function names to their definitions.
///
/// The standard registry is built once, on first use, and is read-only
/// afterwards; it can be shared freely between evaluations. Additional
/// registries can be assembled with [`FunctionRegistry::new`] and
/// [`FunctionRegistry::register`].
#[derive(Debug, Clone, Default)]
pub struct FunctionRegistry {
    functions: HashMap<String, FunctionDef>,
}

impl FunctionRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The process-wide registry of every built-in function.
    ///
    /// # Example
    /// ```
    /// use calcx::interpreter::evaluator::function::core::{Arity, FunctionRegistry};
    ///
    /// let sqrt = FunctionRegistry::standard().lookup("sqrt").unwrap();
    /// assert_eq!(sqrt.arity, Arity::Exact(1));
    /// ```
    #[must_use]
    pub fn standard() -> &'static Self {
        &STANDARD
    }

    fn from_table(table: &[BuiltinDef]) -> Self {
        let mut registry = Self::new();
        for def in table {
            registry.functions.insert(def.name.to_string(),
                                      FunctionDef { name:    def.name.to_string(),
                                                    arity:   def.arity,
                                                    func:    def.func,
                                                    summary: def.summary, });
        }
        registry
    }

    /// Registers `func` under `name`, replacing any previous definition.
    ///
    /// # Example
    /// ```
    /// use calcx::interpreter::evaluator::function::core::{Arity, FunctionRegistry};
    ///
    /// let mut registry = FunctionRegistry::new();
    /// registry.register("double", Arity::Exact(1), |args, _| Ok(args[0] * 2.0));
    ///
    /// let double = registry.lookup("double").unwrap();
    /// assert_eq!((double.func)(&[21.0], Default::default()), Ok(42.0));
    /// ```
    pub fn register(&mut self, name: &str, arity: Arity, func: BuiltinFn) -> &mut Self {
        self.functions.insert(name.to_string(),
                              FunctionDef { name: name.to_string(),
                                            arity,
                                            func,
                                            summary: "" });
        self
    }

    /// Looks up a function by name.
    #[must_use]
    pub fn lookup(&self, name: &str) -> Option<&FunctionDef> {
        self.functions.get(name)
    }

    /// Returns `true` if `name` is registered.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.functions.contains_key(name)
    }

    /// All registered names, sorted alphabetically.
    #[must_use]
    pub fn names(&self) -> Vec<&str> {
        let mut names = self.functions.keys().map(String::as_str).collect::<Vec<_>>();
        names.sort_unstable();
        names
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_registry_contains_every_builtin() {
        let registry = FunctionRegistry::standard();
        for name in BUILTIN_FUNCTIONS {
            assert!(registry.contains(name), "{name} missing");
        }
        assert_eq!(registry.names().len(), BUILTIN_FUNCTIONS.len());
    }

    #[test]
    fn names_are_sorted() {
        let names = FunctionRegistry::standard().names();
        let mut sorted = names.clone();
        sorted.sort_unstable();
        assert_eq!(names, sorted);
    }

    #[test]
    fn arity_display() {
        assert_eq!(Arity::Exact(2).to_string(), "2");
        assert_eq!(Arity::Range(1, 2).to_string(), "1 to 2");
        assert_eq!(Arity::AtLeast(1).to_string(), "at least 1");
    }

    #[test]
    fn register_replaces_existing_definitions() {
        let mut registry = FunctionRegistry::new();
        registry.register("f", Arity::Exact(1), |_, _| Ok(1.0))
                .register("f", Arity::Exact(2), |_, _| Ok(2.0));
        assert_eq!(registry.lookup("f").map(|def| def.arity), Some(Arity::Exact(2)));
        assert!(registry.lookup("g").is_none());
    }
}
