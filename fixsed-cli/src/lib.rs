//! fixsed CLI library
//!
//! This library provides the command-line interface for the fixsed
//! fixed-string search-and-replace tool: pattern-file parsing, transparent
//! stream (de)compression, and the per-line rewriting pipeline around
//! `fixsed-core`.

pub mod args;
pub mod error;
pub mod input;
pub mod output;
pub mod patterns;
pub mod rewrite;

pub use error::{CliError, CliResult};
