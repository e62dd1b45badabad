//! Problem parser
//!
//! One clause per line, literals separated by `|`. A line containing `---`
//! ends the axioms: every clause after it seeds the set of support. Blank
//! lines and lines starting with `#` are skipped.
//!
//! ```text
//! Man(Marcus)
//! -Man(x) | Mortal(x)
//! ---
//! -Mortal(Marcus)
//! ```

mod clauses;

use crate::error::Result;
use crate::state::{InputClause, Problem};
use std::fs;
use std::path::Path;
use thiserror::Error;

const SUPPORT_MARKER: &str = "---";

/// Error raised for input that is not valid clause syntax
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("line {line}: malformed clause `{text}`")]
    MalformedLiteral { line: usize, text: String },
}

/// Parse a problem from text
pub fn parse_problem(input: &str) -> std::result::Result<Problem, ParseError> {
    let mut problem = Problem::new();
    let mut support = false;

    for (idx, raw) in input.lines().enumerate() {
        let line = raw.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        if line.contains(SUPPORT_MARKER) {
            support = true;
            continue;
        }

        let (_, literals) = clauses::parse_clause(line).map_err(|_| ParseError::MalformedLiteral {
            line: idx + 1,
            text: line.to_string(),
        })?;
        problem.clauses.push(InputClause { literals, support });
    }

    Ok(problem)
}

/// Read and parse a problem file
pub fn parse_problem_file(path: impl AsRef<Path>) -> Result<Problem> {
    let content = fs::read_to_string(path)?;
    Ok(parse_problem(&content)?)
}
