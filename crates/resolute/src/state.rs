//! Core state types for the refutation search.
//!
//! This module consolidates the values passed across the prover boundary:
//! the parsed problem it consumes, the proof trace it records, and the
//! result and statistics it reports.

use crate::fol::{Clause, ClauseId, Literal};
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

// =============================================================================
// Problem
// =============================================================================

/// One input clause and whether it seeds the set of support
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputClause {
    pub literals: Vec<Literal>,
    pub support: bool,
}

/// Parsed input, in file order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Problem {
    pub clauses: Vec<InputClause>,
}

impl Problem {
    pub fn new() -> Self {
        Problem::default()
    }

    /// Append a clause that is not part of the set of support
    pub fn axiom(mut self, literals: Vec<Literal>) -> Self {
        self.clauses.push(InputClause {
            literals,
            support: false,
        });
        self
    }

    /// Append a clause to the set of support
    pub fn support(mut self, literals: Vec<Literal>) -> Self {
        self.clauses.push(InputClause {
            literals,
            support: true,
        });
        self
    }

    pub fn support_count(&self) -> usize {
        self.clauses.iter().filter(|c| c.support).count()
    }
}

// =============================================================================
// Proof trace
// =============================================================================

/// One resolution step: `left` and `right` resolved into `resolvent`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProofStep {
    pub left: ClauseId,
    pub right: ClauseId,
    /// Id of the stored clause equal to the resolvent
    pub resolvent_id: ClauseId,
    pub resolvent: Clause,
    /// False when the resolvent was already in the store
    pub is_new: bool,
}

/// A refutation: the trace up to and including the empty-clause step
#[derive(Debug, Clone)]
pub struct Proof {
    pub steps: Vec<ProofStep>,
    pub empty_clause_id: ClauseId,
}

impl Proof {
    /// The step that derived the empty clause, if the refutation needed one
    pub fn final_step(&self) -> Option<&ProofStep> {
        self.steps.last().filter(|s| s.resolvent.is_empty())
    }
}

// =============================================================================
// ProofResult
// =============================================================================

/// Which external bound stopped the search
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LimitReason {
    Iterations,
    Clauses,
    Timeout,
    Cancelled,
}

impl fmt::Display for LimitReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LimitReason::Iterations => write!(f, "iteration limit reached"),
            LimitReason::Clauses => write!(f, "clause limit reached"),
            LimitReason::Timeout => write!(f, "timeout"),
            LimitReason::Cancelled => write!(f, "cancelled"),
        }
    }
}

/// Result of the refutation search
#[derive(Debug, Clone)]
pub enum ProofResult {
    /// Empty clause derived - proof found
    Proof(Proof),
    /// Support queue emptied without deriving the empty clause
    Exhausted,
    /// A caller-imposed bound stopped the search before a verdict
    ResourceLimit(LimitReason),
}

impl ProofResult {
    pub fn is_proof(&self) -> bool {
        matches!(self, ProofResult::Proof(_))
    }
}

// =============================================================================
// Statistics
// =============================================================================

/// Counters maintained by the search loop
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProverStats {
    /// Clauses taken from the support queue and resolved against the store
    pub given: usize,
    /// Literal pairs tried for unification
    pub unification_attempts: usize,
    /// Resolvents produced, duplicates included
    pub resolvents_generated: usize,
    /// Resolvents that were new to the store
    pub clauses_kept: usize,
}

// =============================================================================
// Verification
// =============================================================================

/// A derivation step that does not check out
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum VerificationError {
    #[error("clause {0} is not in the store")]
    UnknownClause(ClauseId),
    #[error("clause {clause} does not follow by resolution from {left} and {right}")]
    InvalidResolvent {
        clause: ClauseId,
        left: ClauseId,
        right: ClauseId,
    },
    #[error("clause {0} is not empty")]
    NotEmpty(ClauseId),
}
