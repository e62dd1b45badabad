//! Variable substitutions

use super::literal::Literal;
use super::term::{Term, Variable};
use std::collections::HashMap;

/// A substitution mapping variables to terms
///
/// Lookups are single-step: a bound variable resolves to its recorded term
/// and that term is not looked up again, even if it is itself a bound
/// variable.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Substitution {
    pub map: HashMap<Variable, Term>,
}

impl Substitution {
    /// Create a new empty substitution
    pub fn new() -> Self {
        Substitution {
            map: HashMap::new(),
        }
    }

    /// Add a variable -> term mapping, replacing any earlier binding
    pub fn insert(&mut self, var: Variable, term: Term) {
        self.map.insert(var, term);
    }

    /// Get the term for a variable, if bound
    pub fn get(&self, var: &Variable) -> Option<&Term> {
        self.map.get(var)
    }

    /// Check if a variable is bound
    pub fn contains(&self, var: &Variable) -> bool {
        self.map.contains_key(var)
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// Resolve a term with one lookup
    pub fn resolve(&self, term: &Term) -> Term {
        match term {
            Term::Variable(v) => self.map.get(v).cloned().unwrap_or_else(|| term.clone()),
            Term::Constant(_) => term.clone(),
        }
    }
}

impl Term {
    /// Apply a substitution to this term
    pub fn apply_substitution(&self, subst: &Substitution) -> Term {
        subst.resolve(self)
    }
}

impl Literal {
    /// Apply a substitution to this literal
    pub fn apply_substitution(&self, subst: &Substitution) -> Literal {
        self.map_terms(|t| subst.resolve(t))
    }
}
