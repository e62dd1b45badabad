//! Human-readable listing of a finished search

use crate::prover::Prover;
use crate::state::ProofResult;
use std::fmt::Write;

/// Render the clause listing and resolution steps.
///
/// Every stored clause is listed with its id. After a proof, the steps that
/// added a clause are listed along with the final empty-clause step, then the
/// number of resolvents generated. Otherwise the steps section only says
/// that no proof exists.
pub fn render(prover: &Prover, result: &ProofResult) -> String {
    let mut out = String::new();

    out.push_str("Input Clauses:\n");
    for clause in prover.clauses() {
        let _ = writeln!(out, "{}: {}", clause.id.unwrap_or_default(), clause);
    }

    out.push_str("\nResolution steps:\n");
    match result {
        ProofResult::Proof(proof) => {
            let last = proof.steps.len().saturating_sub(1);
            for (idx, step) in proof.steps.iter().enumerate() {
                if step.is_new || idx == last {
                    let _ = writeln!(
                        out,
                        "{} and {} give {}: {}",
                        step.left, step.right, step.resolvent_id, step.resolvent
                    );
                }
            }
            let _ = writeln!(out, "\n{} total resolutions", prover.stats().resolvents_generated);
        }
        ProofResult::Exhausted => out.push_str("No proof exists.\n"),
        ProofResult::ResourceLimit(reason) => {
            out.push_str("No proof exists.\n");
            let _ = writeln!(out, "\nSearch stopped: {}", reason);
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ProverConfig;
    use crate::parser::parse_problem;
    use crate::prover::refute;

    fn run(input: &str, config: ProverConfig) -> String {
        let (result, prover) = refute(parse_problem(input).unwrap(), config);
        render(&prover, &result)
    }

    #[test]
    fn test_one_step_proof() {
        let expected = "\
Input Clauses:
1: P(A)
2: -P(A)
3: <empty>

Resolution steps:
2 and 1 give 3: <empty>

1 total resolutions
";
        assert_eq!(run("P(A)\n---\n-P(A)\n", ProverConfig::default()), expected);
    }

    #[test]
    fn test_no_proof() {
        let expected = "\
Input Clauses:
1: P(A)
2: -P(B)

Resolution steps:
No proof exists.
";
        assert_eq!(run("P(A)\n---\n-P(B)\n", ProverConfig::default()), expected);
    }

    #[test]
    fn test_two_step_proof_lists_derived_clauses() {
        let out = run(
            "Man(Marcus)\n-Man(x) | Mortal(x)\n---\n-Mortal(Marcus)\n",
            ProverConfig::default(),
        );
        assert!(out.contains("2: -Man(x) | Mortal(x)\n"));
        assert!(out.contains("3 and 2 give 4: -Man(x)\n"));
        assert!(out.contains("4 and 1 give 5: <empty>\n"));
        assert!(out.ends_with("\n2 total resolutions\n"));
    }

    #[test]
    fn test_limit_is_reported() {
        let config = ProverConfig {
            max_iterations: 1,
            ..Default::default()
        };
        let out = run("-P(x) | Q(x)\n-Q(x) | R(x)\n---\nP(A)\n", config);
        assert!(out.contains("No proof exists.\n"));
        assert!(out.ends_with("Search stopped: iteration limit reached\n"));
    }
}
