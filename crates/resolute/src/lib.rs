//! resolute: a set-of-support resolution refutation prover
//!
//! Clauses are sets of literals over flat terms (variables and constants).
//! The prover repeatedly resolves clauses from the set of support against
//! every stored clause until it derives the empty clause or runs out of
//! support.
//!
//! ```
//! use resolute::{parse_problem, Prover, ProverConfig};
//!
//! let problem = parse_problem("Man(Marcus)\n-Man(x) | Mortal(x)\n---\n-Mortal(Marcus)\n").unwrap();
//! let mut prover = Prover::new(problem, ProverConfig::default());
//! assert!(prover.prove().is_proof());
//! ```

pub mod clause_store;
pub mod config;
pub mod error;
pub mod fol;
pub mod inference;
pub mod json;
pub mod parser;
pub mod prover;
pub mod report;
pub mod state;
pub mod unification;

// Re-export commonly used types from fol
pub use fol::{is_variable, Clause, ClauseId, Constant, Literal, Substitution, Term, Variable};

pub use clause_store::ClauseStore;
pub use config::ProverConfig;
pub use error::{ResoluteError, Result};
pub use inference::{resolve, standardize, Resolvents};
pub use parser::{parse_problem, parse_problem_file, ParseError};
pub use prover::{refute, Prover};
pub use state::{
    InputClause, LimitReason, Problem, Proof, ProofResult, ProofStep, ProverStats,
    VerificationError,
};
pub use unification::{unify, unify_literals, unify_term, UnificationError, UnificationResult};
