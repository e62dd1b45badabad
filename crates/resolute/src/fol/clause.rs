//! Clauses: sets of literals with store identity and provenance

use super::literal::Literal;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use std::hash::{Hash, Hasher};

/// Identifier assigned by the clause store, starting at 1
pub type ClauseId = usize;

/// A clause (disjunction of literals)
///
/// Identity is the literal set alone: `id` and `parents` take no part in
/// equality or hashing, so two clauses with the same literals are the same
/// clause no matter how they were derived.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Clause {
    pub literals: BTreeSet<Literal>,
    /// Assigned on first insertion into the clause store
    pub id: Option<ClauseId>,
    /// The two clauses this one was resolved from (None for input clauses)
    pub parents: Option<(ClauseId, ClauseId)>,
}

impl Clause {
    /// Create an input clause from literals; duplicates collapse
    pub fn new(literals: impl IntoIterator<Item = Literal>) -> Self {
        Clause {
            literals: literals.into_iter().collect(),
            id: None,
            parents: None,
        }
    }

    /// Create a resolvent of the two given parent clauses
    pub fn derived(literals: impl IntoIterator<Item = Literal>, parents: (ClauseId, ClauseId)) -> Self {
        Clause {
            literals: literals.into_iter().collect(),
            id: None,
            parents: Some(parents),
        }
    }

    /// Check if this clause is empty (contradiction)
    pub fn is_empty(&self) -> bool {
        self.literals.is_empty()
    }

    pub fn len(&self) -> usize {
        self.literals.len()
    }

    pub fn is_input(&self) -> bool {
        self.parents.is_none()
    }

    pub fn contains(&self, literal: &Literal) -> bool {
        self.literals.contains(literal)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Literal> {
        self.literals.iter()
    }
}

impl PartialEq for Clause {
    fn eq(&self, other: &Self) -> bool {
        self.literals == other.literals
    }
}

impl Eq for Clause {}

impl Hash for Clause {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.literals.hash(state);
    }
}

/// Literals sorted by their text and joined with ` | `; `<empty>` for the
/// empty clause.
impl fmt::Display for Clause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return write!(f, "<empty>");
        }
        let mut texts: Vec<String> = self.literals.iter().map(|l| l.to_string()).collect();
        texts.sort();
        write!(f, "{}", texts.join(" | "))
    }
}
