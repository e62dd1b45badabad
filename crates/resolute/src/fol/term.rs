//! Terms in clausal logic
//!
//! Terms are flat identifiers: either a variable or a constant symbol. There
//! are no nested function applications.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Classify a textual identifier.
///
/// An identifier whose first character is an ASCII lowercase letter
/// (`a`..=`z`) names a variable; anything else names a constant. This is the only place the
/// naming convention is encoded.
pub fn is_variable(name: &str) -> bool {
    name.chars().next().map_or(false, |c| c.is_ascii_lowercase())
}

/// A variable in clausal logic
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Variable {
    pub name: String,
}

impl Variable {
    pub fn new(name: impl Into<String>) -> Self {
        Variable { name: name.into() }
    }
}

/// A constant symbol
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Constant {
    pub name: String,
}

impl Constant {
    pub fn new(name: impl Into<String>) -> Self {
        Constant { name: name.into() }
    }
}

/// A term: a variable or a constant
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Term {
    Variable(Variable),
    Constant(Constant),
}

impl Term {
    /// Build a term from an identifier, classifying it with [`is_variable`].
    pub fn from_name(name: &str) -> Self {
        if is_variable(name) {
            Term::variable(name)
        } else {
            Term::constant(name)
        }
    }

    /// Create a variable term
    pub fn variable(name: impl Into<String>) -> Self {
        Term::Variable(Variable::new(name))
    }

    /// Create a constant term
    pub fn constant(name: impl Into<String>) -> Self {
        Term::Constant(Constant::new(name))
    }

    pub fn is_variable(&self) -> bool {
        matches!(self, Term::Variable(_))
    }

    /// The identifier of this term
    pub fn name(&self) -> &str {
        match self {
            Term::Variable(v) => &v.name,
            Term::Constant(c) => &c.name,
        }
    }

    /// The variable of this term, if it is one
    pub fn as_variable(&self) -> Option<&Variable> {
        match self {
            Term::Variable(v) => Some(v),
            Term::Constant(_) => None,
        }
    }
}

impl fmt::Display for Variable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

impl fmt::Display for Constant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

impl fmt::Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Term::Variable(v) => write!(f, "{}", v),
            Term::Constant(c) => write!(f, "{}", c),
        }
    }
}
