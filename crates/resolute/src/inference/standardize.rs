//! Standardizing clauses apart
//!
//! Before two clauses are resolved, each clause's variables are renamed to
//! names tied to the clause's identity so that a variable `x` in one clause
//! can never be confused with an unrelated `x` in the other.

use crate::fol::{Literal, Term, Variable};
use std::collections::HashMap;
use std::fmt::Display;

/// Fresh name for a variable standardized with `tag`
pub fn fresh_name(name: &str, tag: impl Display) -> String {
    format!("{}_{}", name, tag)
}

/// Rename every variable in `literals` to a fresh name derived from `tag`.
///
/// One rename map is shared by the whole sequence, so repeated occurrences
/// of a variable get the same fresh name. Constants are left alone. The
/// i-th output literal is the renamed form of the i-th input literal.
pub fn standardize<'a>(
    literals: impl IntoIterator<Item = &'a Literal>,
    tag: impl Display,
) -> Vec<Literal> {
    let mut renaming: HashMap<Variable, Variable> = HashMap::new();
    literals
        .into_iter()
        .map(|lit| {
            lit.map_terms(|term| match term {
                Term::Variable(v) => Term::Variable(
                    renaming
                        .entry(v.clone())
                        .or_insert_with(|| Variable::new(fresh_name(&v.name, &tag)))
                        .clone(),
                ),
                Term::Constant(_) => term.clone(),
            })
        })
        .collect()
}
