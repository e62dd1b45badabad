//! Unification algorithm for literals and flat terms

mod mgu;


pub use mgu::{unify, unify_literals, unify_term, UnificationError, UnificationResult};
