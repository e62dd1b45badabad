//! Literal and term unification

use crate::fol::{Constant, Literal, Substitution, Term};
use thiserror::Error;

/// Result of a unification attempt
pub type UnificationResult = Result<Substitution, UnificationError>;

/// Reasons a unification attempt fails
///
/// Failing to unify is the common case during search, so these are plain
/// values, not faults.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UnificationError {
    /// Predicate symbols don't match
    #[error("predicate clash: {0} vs {1}")]
    PredicateClash(String, String),
    /// Both literals have the same sign
    #[error("literals are not complementary")]
    SamePolarity,
    /// Arities don't match
    #[error("arity mismatch: {0} vs {1}")]
    ArityMismatch(usize, usize),
    /// Constant symbols don't match
    #[error("constant clash: {0} vs {1}")]
    ConstantClash(Constant, Constant),
}

/// Unify two complementary literals, returning the accumulated substitution
pub fn unify_literals(a: &Literal, b: &Literal) -> UnificationResult {
    if a.predicate != b.predicate {
        return Err(UnificationError::PredicateClash(
            a.predicate.clone(),
            b.predicate.clone(),
        ));
    }
    if a.negated == b.negated {
        return Err(UnificationError::SamePolarity);
    }
    if a.arity() != b.arity() {
        return Err(UnificationError::ArityMismatch(a.arity(), b.arity()));
    }

    let mut subst = Substitution::new();
    for (t1, t2) in a.terms.iter().zip(b.terms.iter()) {
        unify_term(t1, t2, &mut subst)?;
    }
    Ok(subst)
}

/// Unify two terms, returning a fresh substitution
pub fn unify(term1: &Term, term2: &Term) -> UnificationResult {
    let mut subst = Substitution::new();
    unify_term(term1, term2, &mut subst)?;
    Ok(subst)
}

/// Unify two terms under an existing substitution
///
/// Each side is resolved with a single lookup; bindings are not chased
/// further. There is no occurs check. A variable that is already bound may
/// be rebound here when it is the resolved form of the other side.
pub fn unify_term(
    term1: &Term,
    term2: &Term,
    subst: &mut Substitution,
) -> Result<(), UnificationError> {
    let t1 = subst.resolve(term1);
    let t2 = subst.resolve(term2);

    match (t1, t2) {
        (t1, t2) if t1 == t2 => Ok(()),
        (Term::Variable(v), t) | (t, Term::Variable(v)) => {
            subst.insert(v, t);
            Ok(())
        }
        (Term::Constant(c1), Term::Constant(c2)) => Err(UnificationError::ConstantClash(c1, c2)),
    }
}
