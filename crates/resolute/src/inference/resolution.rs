//! Binary resolution inference rule

use super::standardize::standardize;
use crate::fol::{Clause, ClauseId, Literal, Substitution};
use crate::unification::unify_literals;
use tracing::trace;

/// Lazily enumerate every resolvent of `clause1` and `clause2`.
///
/// Each literal of `clause1` is tried against each literal of `clause2`; every
/// pair that unifies yields one resolvent, so a clause pair may produce any
/// number of them. Calling `resolve` again restarts the enumeration.
///
/// Unification runs on standardized copies tagged with the clause ids. The
/// resolvent itself is built from the parents' literals as written, with the
/// unifier applied to them.
pub fn resolve(clause1: &Clause, clause2: &Clause) -> Resolvents {
    let left: Vec<Literal> = clause1.iter().cloned().collect();
    let right: Vec<Literal> = clause2.iter().cloned().collect();
    let left_std = standardize(&left, tag(clause1, "l"));
    let right_std = standardize(&right, tag(clause2, "r"));

    Resolvents {
        parents: (clause1.id.unwrap_or(0), clause2.id.unwrap_or(0)),
        left,
        right,
        left_std,
        right_std,
        i: 0,
        j: 0,
        attempts: 0,
    }
}

fn tag(clause: &Clause, fallback: &str) -> String {
    clause
        .id
        .map(|id| id.to_string())
        .unwrap_or_else(|| fallback.to_string())
}

/// Iterator over the resolvents of one clause pair
///
/// Holds its own copies of both clauses, so the clauses it was built from
/// may be borrowed mutably again while it is being consumed.
pub struct Resolvents {
    parents: (ClauseId, ClauseId),
    /// Parent literals as written
    left: Vec<Literal>,
    right: Vec<Literal>,
    /// Standardized forms, position for position
    left_std: Vec<Literal>,
    right_std: Vec<Literal>,
    i: usize,
    j: usize,
    attempts: usize,
}

impl Resolvents {
    /// Number of literal pairs tried so far
    pub fn attempts(&self) -> usize {
        self.attempts
    }

    /// Build the resolvent on literal `i` of the left clause and `j` of the
    /// right clause.
    fn build(&self, i: usize, j: usize, subst: &Substitution) -> Clause {
        let left = self
            .left
            .iter()
            .enumerate()
            .filter(|(k, _)| *k != i)
            .map(|(_, lit)| lit);
        let right = self
            .right
            .iter()
            .enumerate()
            .filter(|(k, _)| *k != j)
            .map(|(_, lit)| lit);

        let literals = left.chain(right).map(|lit| lit.apply_substitution(subst));
        Clause::derived(literals, self.parents)
    }
}

impl Iterator for Resolvents {
    type Item = Clause;

    fn next(&mut self) -> Option<Clause> {
        loop {
            if self.i >= self.left_std.len() {
                return None;
            }
            if self.j >= self.right_std.len() {
                self.i += 1;
                self.j = 0;
                continue;
            }
            let (i, j) = (self.i, self.j);
            self.j += 1;
            self.attempts += 1;

            match unify_literals(&self.left_std[i], &self.right_std[j]) {
                Ok(subst) => {
                    let resolvent = self.build(i, j, &subst);
                    trace!(
                        left = self.parents.0,
                        right = self.parents.1,
                        resolvent = %resolvent,
                        "resolved"
                    );
                    return Some(resolvent);
                }
                Err(err) => {
                    trace!(
                        left = %self.left_std[i],
                        right = %self.right_std[j],
                        reason = %err,
                        "no unifier"
                    );
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fol::Term;

    fn lit(negated: bool, pred: &str, args: &[&str]) -> Literal {
        Literal::new(negated, pred, args.iter().map(|a| Term::from_name(a)).collect())
    }

    fn stored(id: ClauseId, literals: Vec<Literal>) -> Clause {
        let mut clause = Clause::new(literals);
        clause.id = Some(id);
        clause
    }

    #[test]
    fn test_complementary_units_give_empty_clause() {
        let c1 = stored(1, vec![lit(false, "P", &["A"])]);
        let c2 = stored(2, vec![lit(true, "P", &["A"])]);

        let results: Vec<Clause> = resolve(&c2, &c1).collect();
        assert_eq!(results.len(), 1);
        assert!(results[0].is_empty());
        assert_eq!(results[0].parents, Some((2, 1)));
    }

    #[test]
    fn test_distinct_constants_do_not_resolve() {
        let c1 = stored(1, vec![lit(false, "P", &["A"])]);
        let c2 = stored(2, vec![lit(true, "P", &["B"])]);

        let mut resolvents = resolve(&c2, &c1);
        assert!(resolvents.next().is_none());
        assert_eq!(resolvents.attempts(), 1);
    }

    #[test]
    fn test_side_literals_keep_their_written_variables() {
        // -Mortal(Marcus) with -Man(x) | Mortal(x): the unifier binds the
        // standardized x_2, so the surviving literal stays -Man(x)
        let goal = stored(3, vec![lit(true, "Mortal", &["Marcus"])]);
        let rule = stored(2, vec![lit(true, "Man", &["x"]), lit(false, "Mortal", &["x"])]);

        let results: Vec<Clause> = resolve(&goal, &rule).collect();
        assert_eq!(results, vec![Clause::new(vec![lit(true, "Man", &["x"])])]);
        assert_eq!(results[0].parents, Some((3, 2)));
    }

    #[test]
    fn test_variable_isolation() {
        // Q(x) with -Q(y) | R(y) unifies x_1 with y_2 and leaves R(y)
        let c1 = stored(1, vec![lit(false, "Q", &["x"])]);
        let c2 = stored(2, vec![lit(true, "Q", &["y"]), lit(false, "R", &["y"])]);

        let results: Vec<Clause> = resolve(&c1, &c2).collect();
        assert_eq!(results, vec![Clause::new(vec![lit(false, "R", &["y"])])]);
    }

    #[test]
    fn test_same_variable_name_in_both_clauses_is_not_shared() {
        // P(x) | S(x) with -P(A) | T(x): x_1 binds to A, the right x stays free
        let c1 = stored(1, vec![lit(false, "P", &["x"]), lit(false, "S", &["x"])]);
        let c2 = stored(2, vec![lit(true, "P", &["A"]), lit(false, "T", &["x"])]);

        let results: Vec<Clause> = resolve(&c1, &c2).collect();
        assert_eq!(
            results,
            vec![Clause::new(vec![lit(false, "S", &["x"]), lit(false, "T", &["x"])])]
        );
    }

    #[test]
    fn test_unifier_applies_to_names_that_match_its_keys() {
        // A written variable named like a standardized one is substituted
        let c1 = stored(1, vec![lit(false, "P", &["A"]), lit(false, "Q", &["x_2"])]);
        let c2 = stored(2, vec![lit(true, "P", &["x"])]);

        let results: Vec<Clause> = resolve(&c1, &c2).collect();
        assert_eq!(results, vec![Clause::new(vec![lit(false, "Q", &["A"])])]);
    }

    #[test]
    fn test_multiple_complementary_pairs() {
        let c1 = stored(1, vec![lit(false, "P", &["A"]), lit(false, "Q", &["B"])]);
        let c2 = stored(2, vec![lit(true, "P", &["A"]), lit(true, "Q", &["B"])]);

        let results: Vec<Clause> = resolve(&c1, &c2).collect();
        assert_eq!(results.len(), 2);
        assert_ne!(results[0], results[1]);
        assert!(results.contains(&Clause::new(vec![lit(false, "Q", &["B"]), lit(true, "Q", &["B"])])));
        assert!(results.contains(&Clause::new(vec![lit(false, "P", &["A"]), lit(true, "P", &["A"])])));
    }

    #[test]
    fn test_duplicate_side_literals_collapse() {
        let c1 = stored(1, vec![lit(false, "P", &["A"]), lit(false, "R", &["A"])]);
        let c2 = stored(2, vec![lit(true, "P", &["A"]), lit(false, "R", &["A"])]);

        let results: Vec<Clause> = resolve(&c1, &c2).collect();
        assert_eq!(results, vec![Clause::new(vec![lit(false, "R", &["A"])])]);
    }

    #[test]
    fn test_every_pair_counts_as_an_attempt() {
        let c1 = stored(1, vec![lit(false, "P", &["A"]), lit(false, "Q", &["A"])]);
        let c2 = stored(2, vec![lit(true, "R", &["A"]), lit(true, "S", &["A"]), lit(false, "T", &["A"])]);

        let mut resolvents = resolve(&c1, &c2);
        assert_eq!(resolvents.by_ref().count(), 0);
        assert_eq!(resolvents.attempts(), 6);
    }

    #[test]
    fn test_resolve_restarts() {
        let c1 = stored(1, vec![lit(false, "P", &["x"])]);
        let c2 = stored(2, vec![lit(true, "P", &["A"]), lit(false, "Q", &["A"])]);

        let first: Vec<Clause> = resolve(&c1, &c2).collect();
        let second: Vec<Clause> = resolve(&c1, &c2).collect();
        assert_eq!(first, second);
    }
}
