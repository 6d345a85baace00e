//! Fixed-string multi-pattern search-and-replace
//!
//! This crate implements an Aho-Corasick trie automaton and three
//! substitution strategies built on top of it. A set of
//! (pattern, replacement) pairs is loaded into a [`Trie`]; the first
//! matching call computes failure and dictionary-suffix links; the scan
//! then locates every pattern occurrence in a single linear pass over the
//! input.
//!
//! # Architecture
//!
//! - [`trie`]: arena-backed prefix tree mapping patterns to replacements
//! - [`automaton`]: failure-link construction and the lazy match scanner
//! - `replace`: greedy, boundary-aware greedy, and chart-optimal
//!   substitution, all methods on [`AhoCorasickTrie`]
//! - [`boundary`]: reversible sentinel transform for whole-word matching
//!
//! # Example
//!
//! ```rust
//! use fixsed_core::AhoCorasickTrie;
//!
//! let mut trie = AhoCorasickTrie::new();
//! trie.insert("cat", "(cat)");
//! trie.insert("cart", "(cart)");
//!
//! assert_eq!(trie.greedy_replace("a cat in a cart"), "a (cat) in a (cart)");
//! ```

#![warn(missing_docs)]

pub mod automaton;
pub mod boundary;
pub mod error;
mod replace;
pub mod trie;

pub use automaton::{AhoCorasickTrie, FindAll, Match};
pub use boundary::{boundary_transform, boundary_untransform, BOUNDARY};
pub use error::{Result, TrieError};
pub use trie::Trie;
