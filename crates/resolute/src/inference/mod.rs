//! Inference rules: standardizing apart and binary resolution

pub mod resolution;
pub mod standardize;

pub use resolution::{resolve, Resolvents};
pub use standardize::{fresh_name, standardize};
