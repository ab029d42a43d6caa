use std::collections::HashMap;

use lazy_static::lazy_static;

/// Named constants, as `(name, value)` pairs.
///
/// Physical constants use their exact SI (2019) values where defined.
pub const CONSTANTS: &[(&str, f64)] = &[("pi", std::f64::consts::PI),
                                        ("e", std::f64::consts::E),
                                        ("tau", std::f64::consts::TAU),
                                        ("phi", 1.618_033_988_749_895),
                                        ("golden_ratio", 1.618_033_988_749_895),
                                        ("sqrt2", std::f64::consts::SQRT_2),
                                        ("sqrt3", 1.732_050_807_568_877_2),
                                        ("euler_gamma", 0.577_215_664_901_532_9),
                                        ("speed_of_light", 299_792_458.0),
                                        ("planck_constant", 6.626_070_15e-34),
                                        ("avogadro_number", 6.022_140_76e23),
                                        ("boltzmann_constant", 1.380_649e-23),
                                        ("elementary_charge", 1.602_176_634e-19),
                                        ("gravitational_constant", 6.674_30e-11)];

lazy_static! {
    static ref CONSTANT_MAP: HashMap<&'static str, f64> = CONSTANTS.iter().copied().collect();
}

/// Looks up a named constant.
///
/// # Example
/// ```
/// use calcx::interpreter::symbols::constant;
///
/// assert_eq!(constant("pi"), Some(std::f64::consts::PI));
/// assert_eq!(constant("x"), None);
/// ```
#[must_use]
pub fn constant(name: &str) -> Option<f64> {
    CONSTANT_MAP.get(name).copied()
}

/// Returns `true` if `name` is a registered constant.
#[must_use]
pub fn is_constant(name: &str) -> bool {
    CONSTANT_MAP.contains_key(name)
}

/// Read/write access to user variables.
///
/// The variable zone of the symbol table is owned by a collaborator (the
/// calculator memory) and injected at call time; the evaluator only reads
/// through it.
pub trait VariableStore {
    /// Returns the current value of `name`, if it is bound.
    fn get_variable(&self, name: &str) -> Option<f64>;

    /// Binds `name` to `value`.
    fn set_variable(&mut self, name: &str, value: f64);
}

impl VariableStore for HashMap<String, f64> {
    fn get_variable(&self, name: &str) -> Option<f64> {
        self.get(name).copied()
    }

    fn set_variable(&mut self, name: &str, value: f64) {
        self.insert(name.to_string(), value);
    }
}

/// Resolves names to values for one evaluation.
///
/// Constants take precedence over variables of the same spelling. This rule
/// is fixed.
#[derive(Clone, Copy)]
pub struct SymbolTable<'a> {
    variables: Option<&'a dyn VariableStore>,
}

impl<'a> SymbolTable<'a> {
    /// A table that only knows the built-in constants.
    #[must_use]
    pub const fn constants_only() -> Self {
        Self { variables: None }
    }

    /// A table that falls back to `variables` for non-constant names.
    #[must_use]
    pub const fn with_variables(variables: &'a dyn VariableStore) -> Self {
        Self { variables: Some(variables) }
    }

    /// Resolves a constant or variable name.
    ///
    /// # Example
    /// ```
    /// use std::collections::HashMap;
    ///
    /// use calcx::interpreter::symbols::SymbolTable;
    ///
    /// let mut vars = HashMap::new();
    /// vars.insert("pi".to_string(), 3.0);
    /// vars.insert("x".to_string(), 2.0);
    ///
    /// let table = SymbolTable::with_variables(&vars);
    /// assert_eq!(table.resolve("pi"), Some(std::f64::consts::PI));
    /// assert_eq!(table.resolve("x"), Some(2.0));
    /// ```
    #[must_use]
    pub fn resolve(&self, name: &str) -> Option<f64> {
        constant(name).or_else(|| self.variables?.get_variable(name))
    }
}
