//! Clausal logic data structures
//!
//! This module provides the value types the prover works on: terms,
//! literals, clauses and substitutions. None of them is mutated after
//! construction; applying a substitution always builds new values.

pub mod clause;
pub mod literal;
pub mod substitution;
pub mod term;

// Re-export commonly used types
pub use clause::{Clause, ClauseId};
pub use literal::Literal;
pub use substitution::Substitution;
pub use term::{is_variable, Constant, Term, Variable};
