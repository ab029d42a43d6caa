use std::collections::{BTreeMap, HashMap};

use thiserror::Error;
use tracing::trace;

use crate::interpreter::symbols::VariableStore;

/// Name under which expressions see the memory register.
pub const REGISTER_NAME: &str = "mem";
/// Name under which expressions see the last successful result.
pub const ANSWER_NAME: &str = "ans";

/// Errors raised by memory operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MemoryError {
    /// The register was divided by zero; its value is unchanged.
    #[error("Cannot divide memory by zero.")]
    DivisionByZero,
    /// No variable with this name has been stored.
    #[error("Variable '{0}' not found.")]
    UnknownVariable(String),
}

/// The calculator memory: one register, named variables and the last
/// answer.
///
/// Expressions read the register as `mem`, the last answer as `ans` and
/// every stored variable by its name.
///
/// # Example
/// ```
/// use calcx::{evaluate_expression_with, memory::Memory, settings::AngleMode};
///
/// let mut memory = Memory::new();
/// memory.store(10.0);
/// memory.add(5.0);
/// memory.store_variable("x", 2.0);
///
/// let value = evaluate_expression_with("mem * x", &memory, AngleMode::Degrees).unwrap();
/// assert_eq!(value, 30.0);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Memory {
    register:  f64,
    variables: HashMap<String, f64>,
    answer:    Option<f64>,
}

impl Memory {
    /// Creates an empty memory with the register at zero.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the register value.
    pub fn store(&mut self, value: f64) {
        trace!(value, "memory store");
        self.register = value;
    }

    /// The current register value.
    #[must_use]
    pub const fn recall(&self) -> f64 {
        self.register
    }

    /// Resets the register to zero.
    pub fn clear(&mut self) {
        self.register = 0.0;
    }

    pub fn add(&mut self, value: f64) {
        self.register += value;
    }

    pub fn subtract(&mut self, value: f64) {
        self.register -= value;
    }

    pub fn multiply(&mut self, value: f64) {
        self.register *= value;
    }

    /// Divides the register by `value`.
    ///
    /// # Errors
    /// [`MemoryError::DivisionByZero`] if `value` is zero. The register is
    /// left untouched.
    ///
    /// # Example
    /// ```
    /// use calcx::memory::{Memory, MemoryError};
    ///
    /// let mut memory = Memory::new();
    /// memory.store(9.0);
    /// assert_eq!(memory.divide(0.0), Err(MemoryError::DivisionByZero));
    /// assert_eq!(memory.recall(), 9.0);
    /// ```
    pub fn divide(&mut self, value: f64) -> Result<(), MemoryError> {
        if value == 0.0 {
            return Err(MemoryError::DivisionByZero);
        }
        self.register /= value;
        Ok(())
    }

    /// Binds `name` to `value`, replacing any previous binding.
    pub fn store_variable(&mut self, name: &str, value: f64) {
        trace!(name, value, "variable store");
        self.variables.insert(name.to_string(), value);
    }

    /// Returns the value bound to `name`.
    ///
    /// # Errors
    /// [`MemoryError::UnknownVariable`] if nothing is bound to `name`.
    pub fn recall_variable(&self, name: &str) -> Result<f64, MemoryError> {
        self.variables
            .get(name)
            .copied()
            .ok_or_else(|| MemoryError::UnknownVariable(name.to_string()))
    }

    /// All stored variables, ordered by name.
    #[must_use]
    pub fn variables(&self) -> BTreeMap<&str, f64> {
        self.variables
            .iter()
            .map(|(name, value)| (name.as_str(), *value))
            .collect()
    }

    pub fn clear_variables(&mut self) {
        self.variables.clear();
    }

    /// The most recent successful result, if any.
    #[must_use]
    pub const fn answer(&self) -> Option<f64> {
        self.answer
    }

    pub fn set_answer(&mut self, value: f64) {
        self.answer = Some(value);
    }
}

impl VariableStore for Memory {
    fn get_variable(&self, name: &str) -> Option<f64> {
        // Stored variables shadow the two reserved names.
        self.variables.get(name).copied().or(match name {
                                                 REGISTER_NAME => Some(self.register),
                                                 ANSWER_NAME => self.answer,
                                                 _ => None,
                                             })
    }

    fn set_variable(&mut self, name: &str, value: f64) {
        self.store_variable(name, value);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn register_arithmetic() {
        let mut memory = Memory::new();
        assert_eq!(memory.recall(), 0.0);

        memory.store(4.0);
        memory.add(6.0);
        memory.subtract(2.0);
        memory.multiply(3.0);
        assert_eq!(memory.recall(), 24.0);

        assert_eq!(memory.divide(4.0), Ok(()));
        assert_eq!(memory.recall(), 6.0);

        memory.clear();
        assert_eq!(memory.recall(), 0.0);
    }

    #[test]
    fn division_by_zero_keeps_the_register() {
        let mut memory = Memory::new();
        memory.store(42.0);
        assert_eq!(memory.divide(0.0), Err(MemoryError::DivisionByZero));
        assert_eq!(memory.divide(-0.0), Err(MemoryError::DivisionByZero));
        assert_eq!(memory.recall(), 42.0);
    }

    #[test]
    fn named_variables() {
        let mut memory = Memory::new();
        memory.store_variable("b", 2.0);
        memory.store_variable("a", 1.0);
        memory.store_variable("b", 3.0);

        assert_eq!(memory.recall_variable("b"), Ok(3.0));
        assert_eq!(memory.recall_variable("z"),
                   Err(MemoryError::UnknownVariable("z".to_string())));
        assert_eq!(memory.variables().into_iter().collect::<Vec<_>>(),
                   vec![("a", 1.0), ("b", 3.0)]);

        memory.clear_variables();
        assert!(memory.variables().is_empty());
    }

    #[test]
    fn reserved_names_resolve() {
        let mut memory = Memory::new();
        assert_eq!(memory.get_variable(ANSWER_NAME), None);
        assert_eq!(memory.get_variable(REGISTER_NAME), Some(0.0));

        memory.set_answer(7.0);
        memory.store(2.0);
        assert_eq!(memory.get_variable(ANSWER_NAME), Some(7.0));
        assert_eq!(memory.get_variable(REGISTER_NAME), Some(2.0));

        memory.set_variable("mem", 9.0);
        assert_eq!(memory.get_variable(REGISTER_NAME), Some(9.0));
    }
}
