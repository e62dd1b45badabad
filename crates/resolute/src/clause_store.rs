//! Deduplicating, append-only clause store.
//!
//! Every clause the prover has seen, input or derived, lives here exactly
//! once. Identity is the literal set: inserting a clause equal to one already
//! stored hands back the stored entry and its original id.

use crate::fol::{Clause, ClauseId};
use indexmap::IndexSet;

/// Ordered set of clauses; a clause's id is its position plus one.
#[derive(Debug, Default)]
pub struct ClauseStore {
    clauses: IndexSet<Clause>,
}

impl ClauseStore {
    pub fn new() -> Self {
        ClauseStore {
            clauses: IndexSet::new(),
        }
    }

    /// Insert `clause` unless an equal clause is already stored.
    ///
    /// Returns the stored clause and whether it was newly added. A new
    /// clause receives the next id; a duplicate is dropped and the existing
    /// entry, with its original id and parents, is returned.
    pub fn insert_if_new(&mut self, mut clause: Clause) -> (&Clause, bool) {
        if let Some(idx) = self.clauses.get_index_of(&clause) {
            return (&self.clauses[idx], false);
        }
        clause.id = Some(self.clauses.len() + 1);
        let (idx, _) = self.clauses.insert_full(clause);
        (&self.clauses[idx], true)
    }

    /// Look up a clause by id
    pub fn get(&self, id: ClauseId) -> Option<&Clause> {
        self.clauses.get_index(id.checked_sub(1)?)
    }

    /// Id of the stored clause equal to `clause`, if any
    pub fn id_of(&self, clause: &Clause) -> Option<ClauseId> {
        self.clauses.get_index_of(clause).map(|idx| idx + 1)
    }

    pub fn contains(&self, clause: &Clause) -> bool {
        self.clauses.contains(clause)
    }

    /// Clauses in insertion order
    pub fn iter(&self) -> impl Iterator<Item = &Clause> {
        self.clauses.iter()
    }

    pub fn len(&self) -> usize {
        self.clauses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.clauses.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fol::{Literal, Term};

    fn p(name: &str) -> Literal {
        Literal::positive("P", vec![Term::from_name(name)])
    }

    #[test]
    fn test_ids_start_at_one_and_increase() {
        let mut store = ClauseStore::new();
        let (first, new1) = store.insert_if_new(Clause::new(vec![p("A")]));
        assert!(new1);
        assert_eq!(first.id, Some(1));

        let (second, new2) = store.insert_if_new(Clause::new(vec![p("B")]));
        assert!(new2);
        assert_eq!(second.id, Some(2));
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn test_duplicate_returns_existing_entry() {
        let mut store = ClauseStore::new();
        store.insert_if_new(Clause::new(vec![p("A"), p("B")]));

        let (stored, is_new) = store.insert_if_new(Clause::derived(vec![p("B"), p("A")], (5, 6)));
        assert!(!is_new);
        assert_eq!(stored.id, Some(1));
        assert_eq!(stored.parents, None);
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_lookup_by_id() {
        let mut store = ClauseStore::new();
        store.insert_if_new(Clause::new(vec![p("A")]));
        store.insert_if_new(Clause::new(vec![]));

        assert_eq!(store.get(1).map(|c| c.len()), Some(1));
        assert!(store.get(2).map_or(false, |c| c.is_empty()));
        assert!(store.get(0).is_none());
        assert!(store.get(3).is_none());
        assert_eq!(store.id_of(&Clause::new(vec![])), Some(2));
    }

    #[test]
    fn test_iteration_follows_insertion_order() {
        let mut store = ClauseStore::new();
        for name in ["C", "A", "B", "A"] {
            store.insert_if_new(Clause::new(vec![p(name)]));
        }
        let ids: Vec<_> = store.iter().map(|c| c.id).collect();
        assert_eq!(ids, vec![Some(1), Some(2), Some(3)]);
        assert_eq!(store.iter().next().map(|c| c.to_string()), Some("P(C)".to_string()));
    }
}
