//! Literals: possibly negated predicates applied to terms

use super::term::{Term, Variable};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;

/// A literal (positive or negative atom)
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Literal {
    pub negated: bool,
    pub predicate: String,
    pub terms: Vec<Term>,
}

impl Literal {
    pub fn new(negated: bool, predicate: impl Into<String>, terms: Vec<Term>) -> Self {
        Literal {
            negated,
            predicate: predicate.into(),
            terms,
        }
    }

    /// Create a new positive literal
    pub fn positive(predicate: impl Into<String>, terms: Vec<Term>) -> Self {
        Literal::new(false, predicate, terms)
    }

    /// Create a new negative literal
    pub fn negative(predicate: impl Into<String>, terms: Vec<Term>) -> Self {
        Literal::new(true, predicate, terms)
    }

    pub fn arity(&self) -> usize {
        self.terms.len()
    }

    /// Get the complement of this literal
    pub fn complement(&self) -> Literal {
        Literal {
            negated: !self.negated,
            predicate: self.predicate.clone(),
            terms: self.terms.clone(),
        }
    }

    /// Whether `other` has the same predicate and arity with opposite sign
    pub fn is_complementary_to(&self, other: &Literal) -> bool {
        self.negated != other.negated
            && self.predicate == other.predicate
            && self.arity() == other.arity()
    }

    /// Collect all variables in this literal
    pub fn collect_variables(&self, vars: &mut HashSet<Variable>) {
        for term in &self.terms {
            if let Term::Variable(v) = term {
                vars.insert(v.clone());
            }
        }
    }

    /// Rebuild this literal with every term passed through `f`
    pub fn map_terms(&self, mut f: impl FnMut(&Term) -> Term) -> Literal {
        Literal {
            negated: self.negated,
            predicate: self.predicate.clone(),
            terms: self.terms.iter().map(|t| f(t)).collect(),
        }
    }
}

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.negated {
            write!(f, "-")?;
        }
        write!(f, "{}", self.predicate)?;
        if self.terms.is_empty() {
            return Ok(());
        }
        write!(f, "(")?;
        for (i, term) in self.terms.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", term)?;
        }
        write!(f, ")")
    }
}
