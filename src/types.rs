//! Type-safe wrapper for propositional variables.
//!
//! Variables are identified by name only: two occurrences of `A` in a formula
//! denote the same variable. The ordering of [`Var`] is the ordering of the
//! underlying strings (by code point), and it decides the column order of
//! every truth table.
use std::borrow::Borrow;
use std::fmt;

/// A propositional variable, identified by its name.
///
/// # Invariants
///
/// - The name is a non-empty word (a letter or `_`, then letters, digits or `_`)
///   when it comes out of the parser. Hand-built variables are not checked.
/// - `A < B < a`: variables compare by code point, not case-insensitively.
#[derive(Debug, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct Var(String);

impl Var {
    /// Creates a new variable with the given name.
    ///
    /// # Panics
    ///
    /// Panics if `name` is empty.
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        assert!(!name.is_empty(), "Variable names must be non-empty");
        Var(name)
    }

    /// Returns the variable name.
    pub fn name(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Var {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Borrow<str> for Var {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Var {
    fn from(name: &str) -> Self {
        Var::new(name)
    }
}

impl From<String> for Var {
    fn from(name: String) -> Self {
        Var::new(name)
    }
}
