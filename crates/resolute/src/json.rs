//! JSON serialization types for proof data

use crate::fol::{Clause, ClauseId, Literal, Term};
use crate::prover::Prover;
use crate::state::{ProofResult, ProofStep, ProverStats};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// JSON representation of a term
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum TermJson {
    Variable { name: String },
    Constant { name: String },
}

impl From<&Term> for TermJson {
    fn from(term: &Term) -> Self {
        match term {
            Term::Variable(v) => TermJson::Variable {
                name: v.name.clone(),
            },
            Term::Constant(c) => TermJson::Constant {
                name: c.name.clone(),
            },
        }
    }
}

/// JSON representation of a literal
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LiteralJson {
    pub negated: bool,
    pub predicate: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub args: Vec<TermJson>,
}

impl From<&Literal> for LiteralJson {
    fn from(lit: &Literal) -> Self {
        LiteralJson {
            negated: lit.negated,
            predicate: lit.predicate.clone(),
            args: lit.terms.iter().map(TermJson::from).collect(),
        }
    }
}

/// JSON representation of a clause
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClauseJson {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<ClauseId>,
    /// Display form, e.g. `-Man(x) | Mortal(x)`
    pub text: String,
    pub literals: Vec<LiteralJson>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub premises: Vec<ClauseId>,
}

impl From<&Clause> for ClauseJson {
    fn from(clause: &Clause) -> Self {
        ClauseJson {
            id: clause.id,
            text: clause.to_string(),
            literals: clause.iter().map(LiteralJson::from).collect(),
            premises: clause
                .parents
                .map(|(left, right)| vec![left, right])
                .unwrap_or_default(),
        }
    }
}

/// JSON representation of a resolution step
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProofStepJson {
    pub left: ClauseId,
    pub right: ClauseId,
    pub resolvent_id: ClauseId,
    pub resolvent: String,
    pub is_new: bool,
}

impl From<&ProofStep> for ProofStepJson {
    fn from(step: &ProofStep) -> Self {
        ProofStepJson {
            left: step.left,
            right: step.right,
            resolvent_id: step.resolvent_id,
            resolvent: step.resolvent.to_string(),
            is_new: step.is_new,
        }
    }
}

/// JSON representation of a proof
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProofJson {
    pub steps: Vec<ProofStepJson>,
    pub empty_clause_id: ClauseId,
}

/// JSON representation of a search result
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "result")]
pub enum ProofResultJson {
    Proof {
        proof: ProofJson,
        clauses: Vec<ClauseJson>,
        stats: ProverStats,
        time_seconds: f64,
    },
    Exhausted {
        clauses: Vec<ClauseJson>,
        steps: Vec<ProofStepJson>,
        stats: ProverStats,
        time_seconds: f64,
    },
    ResourceLimit {
        reason: String,
        clauses: Vec<ClauseJson>,
        steps: Vec<ProofStepJson>,
        stats: ProverStats,
        time_seconds: f64,
    },
}

impl ProofResultJson {
    pub fn from_result(result: &ProofResult, prover: &Prover, elapsed: Duration) -> Self {
        let clauses = prover.clauses().map(ClauseJson::from).collect();
        let stats = prover.stats();
        let time_seconds = elapsed.as_secs_f64();

        match result {
            ProofResult::Proof(proof) => ProofResultJson::Proof {
                proof: ProofJson {
                    steps: proof.steps.iter().map(ProofStepJson::from).collect(),
                    empty_clause_id: proof.empty_clause_id,
                },
                clauses,
                stats,
                time_seconds,
            },
            ProofResult::Exhausted => ProofResultJson::Exhausted {
                clauses,
                steps: prover.trace().iter().map(ProofStepJson::from).collect(),
                stats,
                time_seconds,
            },
            ProofResult::ResourceLimit(reason) => ProofResultJson::ResourceLimit {
                reason: reason.to_string(),
                clauses,
                steps: prover.trace().iter().map(ProofStepJson::from).collect(),
                stats,
                time_seconds,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ProverConfig;
    use crate::parser::parse_problem;
    use crate::prover::refute;

    fn run(input: &str) -> ProofResultJson {
        let problem = parse_problem(input).unwrap();
        let (result, prover) = refute(problem, ProverConfig::default());
        ProofResultJson::from_result(&result, &prover, Duration::from_millis(5))
    }

    #[test]
    fn test_proof_is_tagged() {
        let json = serde_json::to_value(run("P(A)\n---\n-P(A)\n")).unwrap();

        assert_eq!(json["result"], "Proof");
        assert_eq!(json["proof"]["empty_clause_id"], 3);
        let step = &json["proof"]["steps"][0];
        assert_eq!(step["left"], 2);
        assert_eq!(step["right"], 1);
        assert_eq!(step["resolvent"], "<empty>");
        assert_eq!(json["clauses"][2]["premises"], serde_json::json!([2, 1]));
        assert_eq!(json["stats"]["resolvents_generated"], 1);
    }

    #[test]
    fn test_exhausted_is_tagged() {
        let json = serde_json::to_value(run("P(A)\n---\n-P(B)\n")).unwrap();

        assert_eq!(json["result"], "Exhausted");
        assert_eq!(json["clauses"].as_array().map(Vec::len), Some(2));
        // Input clauses have no premises
        assert!(json["clauses"][0].get("premises").is_none());
    }

    #[test]
    fn test_terms_are_typed() {
        let lit = Literal::positive("Loves", vec![Term::variable("x"), Term::constant("Mary")]);
        let json = serde_json::to_value(LiteralJson::from(&lit)).unwrap();

        assert_eq!(json["args"][0]["type"], "Variable");
        assert_eq!(json["args"][1], serde_json::json!({"type": "Constant", "name": "Mary"}));
    }

    #[test]
    fn test_result_round_trips() {
        let text = serde_json::to_string(&run("P(A)\n---\n-P(A)\n")).unwrap();
        let back: ProofResultJson = serde_json::from_str(&text).unwrap();
        assert!(matches!(back, ProofResultJson::Proof { .. }));
    }
}
