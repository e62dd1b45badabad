//! Prover configuration types.

use std::time::Duration;

/// Optional bounds on the set-of-support loop
///
/// The default is unbounded: the loop runs until it derives the empty clause
/// or the support queue empties, which on some inputs is never.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProverConfig {
    /// Maximum number of clauses taken from the support queue (0 = no limit)
    pub max_iterations: usize,
    /// Maximum number of clauses in the store (0 = no limit)
    pub max_clauses: usize,
    /// Wall-clock limit for the search
    pub timeout: Option<Duration>,
}

impl ProverConfig {
    /// Whether any bound is set
    pub fn is_bounded(&self) -> bool {
        self.max_iterations > 0 || self.max_clauses > 0 || self.timeout.is_some()
    }
}
