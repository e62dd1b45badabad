//! Prover: set-of-support resolution refutation.
//!
//! The `Prover` owns the whole search context: the clause store, the support
//! queue, the set of clauses already used as given clause, the proof trace
//! and the statistics. Nothing lives outside it.
//!
//! Use `prove()` to run to completion, or `step()` for incremental execution.

use crate::clause_store::ClauseStore;
use crate::config::ProverConfig;
use crate::fol::{Clause, ClauseId};
use crate::inference::resolve;
use crate::state::{
    LimitReason, Problem, Proof, ProofResult, ProofStep, ProverStats, VerificationError,
};
use std::collections::{BTreeSet, HashSet, VecDeque};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, info};

/// Per-problem refutation engine.
pub struct Prover {
    /// Prover configuration (optional bounds)
    pub config: ProverConfig,
    /// Every clause seen so far, input and derived
    store: ClauseStore,
    /// Ids of clauses still to be used as the given clause, FIFO
    support: VecDeque<ClauseId>,
    /// Ids already taken from the queue
    seen: HashSet<ClauseId>,
    /// Every resolution step, in the order it happened
    trace: Vec<ProofStep>,
    stats: ProverStats,
    /// An input clause that is already empty
    empty_input: Option<ClauseId>,
    initial_clause_count: usize,
    start_time: Option<Instant>,
    finished: Option<ProofResult>,
    /// Set to `true` to stop the search loop from another thread.
    pub cancel: Arc<AtomicBool>,
}

impl Prover {
    /// Create a new Prover from a parsed problem.
    ///
    /// Every input clause goes into the store in input order; support clauses
    /// are also queued. A support clause equal to an earlier clause is queued
    /// under the earlier clause's id.
    pub fn new(problem: Problem, config: ProverConfig) -> Self {
        let mut store = ClauseStore::new();
        let mut support = VecDeque::new();
        let mut empty_input = None;

        for input in problem.clauses {
            let (stored, _) = store.insert_if_new(Clause::new(input.literals));
            let id = stored.id.unwrap_or_default();
            if stored.is_empty() && empty_input.is_none() {
                empty_input = Some(id);
            }
            if input.support {
                support.push_back(id);
            }
        }

        Prover {
            config,
            initial_clause_count: store.len(),
            store,
            support,
            seen: HashSet::new(),
            trace: Vec::new(),
            stats: ProverStats::default(),
            empty_input,
            start_time: None,
            finished: None,
            cancel: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Run the search to completion.
    ///
    /// Without bounds in the configuration this only returns once the empty
    /// clause is derived or the support queue empties.
    pub fn prove(&mut self) -> ProofResult {
        debug!(
            clauses = self.store.len(),
            support = self.support.len(),
            "starting refutation"
        );
        loop {
            if let Some(result) = self.step() {
                return result;
            }
        }
    }

    /// Take one clause from the support queue and resolve it against the
    /// store.
    ///
    /// Returns `Some(result)` once the search is over (and the same result on
    /// every later call), `None` to continue.
    pub fn step(&mut self) -> Option<ProofResult> {
        if let Some(result) = &self.finished {
            return Some(result.clone());
        }
        let result = self.advance()?;
        match &result {
            ProofResult::Proof(proof) => info!(
                empty_clause = proof.empty_clause_id,
                steps = proof.steps.len(),
                "proof found"
            ),
            ProofResult::Exhausted => info!(clauses = self.store.len(), "support exhausted"),
            ProofResult::ResourceLimit(reason) => info!(%reason, "search stopped"),
        }
        self.finished = Some(result.clone());
        Some(result)
    }

    fn advance(&mut self) -> Option<ProofResult> {
        let start = *self.start_time.get_or_insert_with(Instant::now);

        if let Some(id) = self.empty_input.take() {
            return Some(ProofResult::Proof(Proof {
                steps: Vec::new(),
                empty_clause_id: id,
            }));
        }
        if self.support.is_empty() {
            return Some(ProofResult::Exhausted);
        }
        if let Some(reason) = self.interrupted(start) {
            return Some(ProofResult::ResourceLimit(reason));
        }
        if self.config.max_iterations > 0 && self.stats.given >= self.config.max_iterations {
            return Some(ProofResult::ResourceLimit(LimitReason::Iterations));
        }

        let current_id = self.support.pop_front()?;
        if !self.seen.insert(current_id) {
            return None;
        }
        self.stats.given += 1;
        if let Some(current) = self.store.get(current_id) {
            debug!(
                given = current_id,
                clause = %current,
                queued = self.support.len(),
                "given clause"
            );
        }

        // The store grows while it is scanned; clauses kept during this scan
        // are visited before it ends.
        let mut partner = 0;
        while partner < self.store.len() {
            partner += 1;
            if partner == current_id {
                continue;
            }
            if let Some(reason) = self.interrupted(start) {
                return Some(ProofResult::ResourceLimit(reason));
            }
            let (Some(current), Some(other)) =
                (self.store.get(current_id), self.store.get(partner))
            else {
                continue;
            };

            let mut resolvents = resolve(current, other);
            for resolvent in resolvents.by_ref() {
                if let Some(result) = self.accept(current_id, partner, resolvent) {
                    self.stats.unification_attempts += resolvents.attempts();
                    return Some(result);
                }
            }
            self.stats.unification_attempts += resolvents.attempts();
        }

        None
    }

    /// Record a resolvent and store it if it is new.
    fn accept(&mut self, left: ClauseId, right: ClauseId, resolvent: Clause) -> Option<ProofResult> {
        self.stats.resolvents_generated += 1;

        let (stored, is_new) = self.store.insert_if_new(resolvent);
        let resolvent_id = stored.id.unwrap_or_default();
        let stored = stored.clone();
        let is_empty = stored.is_empty();

        if is_new {
            debug!(id = resolvent_id, left, right, clause = %stored, "kept resolvent");
        }
        self.trace.push(ProofStep {
            left,
            right,
            resolvent_id,
            resolvent: stored,
            is_new,
        });

        if is_empty {
            return Some(ProofResult::Proof(Proof {
                steps: self.trace.clone(),
                empty_clause_id: resolvent_id,
            }));
        }
        if is_new {
            self.stats.clauses_kept += 1;
            self.support.push_back(resolvent_id);
            if self.config.max_clauses > 0 && self.store.len() >= self.config.max_clauses {
                return Some(ProofResult::ResourceLimit(LimitReason::Clauses));
            }
        }
        None
    }

    /// Cancellation or timeout
    fn interrupted(&self, start: Instant) -> Option<LimitReason> {
        if self.cancel.load(Ordering::Relaxed) {
            return Some(LimitReason::Cancelled);
        }
        match self.config.timeout {
            Some(timeout) if start.elapsed() >= timeout => Some(LimitReason::Timeout),
            _ => None,
        }
    }

    // =========================================================================
    // Public accessors
    // =========================================================================

    /// The clause store.
    pub fn store(&self) -> &ClauseStore {
        &self.store
    }

    /// All stored clauses in insertion order.
    pub fn clauses(&self) -> impl Iterator<Item = &Clause> {
        self.store.iter()
    }

    /// Every resolution step recorded so far.
    pub fn trace(&self) -> &[ProofStep] {
        &self.trace
    }

    pub fn stats(&self) -> ProverStats {
        self.stats
    }

    /// Number of distinct input clauses.
    pub fn initial_clause_count(&self) -> usize {
        self.initial_clause_count
    }

    /// Clauses still waiting in the support queue.
    pub fn queued(&self) -> usize {
        self.support.len()
    }

    /// Ids of `clause_id` and all of its ancestors, ascending.
    ///
    /// Parents always have lower ids than the clauses derived from them, so
    /// the order is a valid derivation order.
    pub fn extract_proof(&self, clause_id: ClauseId) -> Vec<ClauseId> {
        let mut visited = BTreeSet::new();
        let mut to_visit = vec![clause_id];

        while let Some(id) = to_visit.pop() {
            if !visited.insert(id) {
                continue;
            }
            if let Some((left, right)) = self.store.get(id).and_then(|c| c.parents) {
                to_visit.push(left);
                to_visit.push(right);
            }
        }

        visited.into_iter().collect()
    }

    /// Verify the derivation of an empty clause.
    ///
    /// Every derived ancestor must be reproduced by resolving its recorded
    /// parents again.
    pub fn verify_proof(&self, empty_clause_id: ClauseId) -> Result<(), VerificationError> {
        let empty = self
            .store
            .get(empty_clause_id)
            .ok_or(VerificationError::UnknownClause(empty_clause_id))?;
        if !empty.is_empty() {
            return Err(VerificationError::NotEmpty(empty_clause_id));
        }

        for id in self.extract_proof(empty_clause_id) {
            let clause = self
                .store
                .get(id)
                .ok_or(VerificationError::UnknownClause(id))?;
            let Some((left, right)) = clause.parents else {
                continue;
            };
            let left_clause = self
                .store
                .get(left)
                .ok_or(VerificationError::UnknownClause(left))?;
            let right_clause = self
                .store
                .get(right)
                .ok_or(VerificationError::UnknownClause(right))?;

            if !resolve(left_clause, right_clause).any(|r| &r == clause) {
                return Err(VerificationError::InvalidResolvent {
                    clause: id,
                    left,
                    right,
                });
            }
        }

        Ok(())
    }
}

/// Build a prover for `problem` and run it to completion.
pub fn refute(problem: Problem, config: ProverConfig) -> (ProofResult, Prover) {
    let mut prover = Prover::new(problem, config);
    let result = prover.prove();
    (result, prover)
}
