//! Error types for resolute

use crate::parser::ParseError;
use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ResoluteError {
    #[error("Parse error: {0}")]
    Parse(#[from] ParseError),

    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, ResoluteError>;
