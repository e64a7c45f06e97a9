use std::collections::HashMap;
use std::fmt;

use crate::ast::Stmt;

/// The complete run-time environment of a program.
///
/// There is a single global environment: simple variables, array
/// variables and function definitions live in three independent
/// namespaces, so the same name may exist in more than one of them at
/// once. All stored values are integers, and arrays are sparse mappings
/// from integer indices to integers.
///
/// The environment is owned by the caller. The interpreter mutates it in
/// place, which means definitions can be preloaded before a run and
/// inspected afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct State {
    /// Simple variables: name → value.
    pub vars:      HashMap<String, i64>,
    /// Array variables: name → sparse index-to-value mapping.
    pub arrays:    HashMap<String, HashMap<i64, i64>>,
    /// User-defined functions: name → body statements.
    pub functions: HashMap<String, Vec<Stmt>>,
}

impl State {
    /// Creates an empty environment.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl fmt::Display for State {
    /// Formats the environment as the canonical dump
    /// `{ v: {…}, a: {…}, f: {…} }`.
    ///
    /// Names and array indices are sorted so the dump is deterministic,
    /// and function bodies are printed back as source through the
    /// canonical statement printer.
    ///
    /// # Example
    /// ```
    /// let state = jerboa::run("a = 2  x[1] = 5", String::new, |_| ()).unwrap();
    ///
    /// assert_eq!(state.to_string(), "{ v: {a: 2}, a: {x: {1: 5}}, f: {} }");
    /// ```
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{ v: {{")?;
        let mut names: Vec<&String> = self.vars.keys().collect();
        names.sort();
        for (i, name) in names.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{name}: {}", self.vars[*name])?;
        }

        write!(f, "}}, a: {{")?;
        let mut names: Vec<&String> = self.arrays.keys().collect();
        names.sort();
        for (i, name) in names.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            let slots = &self.arrays[*name];
            let mut indices: Vec<&i64> = slots.keys().collect();
            indices.sort();
            write!(f, "{name}: {{")?;
            for (j, index) in indices.iter().enumerate() {
                if j > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{index}: {}", slots[*index])?;
            }
            write!(f, "}}")?;
        }

        write!(f, "}}, f: {{")?;
        let mut names: Vec<&String> = self.functions.keys().collect();
        names.sort();
        for (i, name) in names.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{name}: def {name}()")?;
            for statement in &self.functions[*name] {
                write!(f, " {statement}")?;
            }
            write!(f, " end")?;
        }
        write!(f, "}} }}")
    }
}
