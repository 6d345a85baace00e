//! Arena-backed trie storing replacement strings
//!
//! Nodes live in a contiguous `Vec`; the `children` map owns the tree
//! structure, while `suffix` and `dict_suffix` are non-owning index
//! back-references set by the automaton builder. Cloning the trie clones
//! the arena, so back-references stay valid without any relinking.

use std::collections::BTreeMap;
use std::fmt::Write as _;

use crate::error::{Result, TrieError};

/// Index of a node in the trie arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub(crate) struct NodeId(pub(crate) usize);

/// Arena slot of the root node.
pub(crate) const ROOT: NodeId = NodeId(0);

/// A node in the trie.
#[derive(Debug, Clone, Default)]
pub(crate) struct TrieNode {
    /// Child transitions, ordered by character for deterministic dumps
    pub(crate) children: BTreeMap<char, NodeId>,
    /// Replacement value; present iff a pattern terminates here
    pub(crate) value: Option<String>,
    /// Characters from root to this node
    pub(crate) depth: usize,
    /// Concatenated path from the root, kept for diagnostics
    pub(crate) prefix: String,
    /// The character consumed on the edge from the parent
    pub(crate) uplink: Option<char>,
    /// Failure link: longest proper suffix of `prefix` present in the trie
    pub(crate) suffix: Option<NodeId>,
    /// Nearest value-carrying node along the failure chain
    pub(crate) dict_suffix: Option<NodeId>,
}

/// A prefix tree mapping string keys to replacement values.
#[derive(Debug, Clone)]
pub struct Trie {
    nodes: Vec<TrieNode>,
}

impl Default for Trie {
    fn default() -> Self {
        Self::new()
    }
}

impl Trie {
    /// Create an empty trie containing only the root node.
    pub fn new() -> Self {
        Self {
            nodes: vec![TrieNode::default()],
        }
    }

    pub(crate) fn node(&self, id: NodeId) -> &TrieNode {
        &self.nodes[id.0]
    }

    pub(crate) fn node_mut(&mut self, id: NodeId) -> &mut TrieNode {
        &mut self.nodes[id.0]
    }

    /// Transition from `id` on `ch`, if such a child exists.
    pub(crate) fn child(&self, id: NodeId, ch: char) -> Option<NodeId> {
        self.node(id).children.get(&ch).copied()
    }

    /// Insert `key`, creating nodes as needed, and store `value` on the
    /// terminal node. Re-inserting an existing key overwrites its value.
    pub fn insert(&mut self, key: &str, value: impl Into<String>) {
        let mut current = ROOT;
        for ch in key.chars() {
            current = match self.child(current, ch) {
                Some(next) => next,
                None => {
                    let parent = self.node(current);
                    let mut prefix = parent.prefix.clone();
                    prefix.push(ch);
                    let node = TrieNode {
                        depth: parent.depth + 1,
                        prefix,
                        uplink: Some(ch),
                        ..TrieNode::default()
                    };
                    let id = NodeId(self.nodes.len());
                    self.nodes.push(node);
                    self.node_mut(current).children.insert(ch, id);
                    id
                }
            };
        }
        self.node_mut(current).value = Some(value.into());
    }

    fn lookup(&self, key: &str) -> Option<NodeId> {
        let mut current = ROOT;
        for ch in key.chars() {
            current = self.child(current, ch)?;
        }
        Some(current)
    }

    /// True iff `key` was inserted (a bare path prefix does not count).
    pub fn contains(&self, key: &str) -> bool {
        self.lookup(key)
            .is_some_and(|id| self.node(id).value.is_some())
    }

    /// Look up the value stored for `key`.
    pub fn get(&self, key: &str) -> Result<&str> {
        self.lookup(key)
            .and_then(|id| self.node(id).value.as_deref())
            .ok_or_else(|| TrieError::NotFound {
                key: key.to_string(),
            })
    }

    /// Clear every suffix and dict-suffix link in the arena.
    pub(crate) fn clear_links(&mut self) {
        for node in &mut self.nodes {
            node.suffix = None;
            node.dict_suffix = None;
        }
    }

    /// Deterministic depth-first dump of the trie, one line per node,
    /// children in ascending character order, indented two spaces per
    /// level. Suffix and dict-suffix targets are rendered by their prefix
    /// when set (the root renders as the empty string).
    pub fn pretty_print(&self) -> String {
        let mut out = String::new();
        let mut todo = vec![ROOT];
        while let Some(id) = todo.pop() {
            let node = self.node(id);
            for &child in node.children.values().rev() {
                todo.push(child);
            }
            for _ in 0..node.depth {
                out.push_str("  ");
            }
            self.render_node(id, &mut out);
            out.push('\n');
        }
        out
    }

    fn render_node(&self, id: NodeId, out: &mut String) {
        let node = self.node(id);
        if node.depth == 0 {
            out.push_str("<ROOT>");
            return;
        }
        out.push_str(&node.prefix);
        if let Some(value) = &node.value {
            let _ = write!(out, " (value = \"{value}\")");
        }
        if let Some(suffix) = node.suffix {
            let _ = write!(out, " (suffix = \"{}\")", self.node(suffix).prefix);
        }
        if let Some(dict) = node.dict_suffix {
            let _ = write!(out, " (dict_suffix = \"{}\")", self.node(dict).prefix);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_trie() {
        let trie = Trie::new();
        assert!(!trie.contains(""));
        assert!(!trie.contains("a"));
        assert_eq!(trie.pretty_print(), "<ROOT>\n");
    }

    #[test]
    fn test_insert_and_contains() {
        let mut trie = Trie::new();
        trie.insert("cat", "(cat)");
        assert!(trie.contains("cat"));
        assert!(!trie.contains("ca"));
        assert!(!trie.contains("cats"));
        assert!(!trie.contains("dog"));
    }

    #[test]
    fn test_get() {
        let mut trie = Trie::new();
        trie.insert("cat", "(cat)");
        assert_eq!(trie.get("cat").unwrap(), "(cat)");
        assert_eq!(
            trie.get("ca"),
            Err(TrieError::NotFound {
                key: "ca".to_string()
            })
        );
        assert_eq!(
            trie.get("dog"),
            Err(TrieError::NotFound {
                key: "dog".to_string()
            })
        );
    }

    #[test]
    fn test_duplicate_key_overwrites() {
        let mut trie = Trie::new();
        trie.insert("cat", "first");
        trie.insert("cat", "second");
        assert_eq!(trie.get("cat").unwrap(), "second");
    }

    #[test]
    fn test_prefix_keys_are_distinct() {
        let mut trie = Trie::new();
        trie.insert("cat", "(cat)");
        trie.insert("ca", "(ca)");
        assert_eq!(trie.get("ca").unwrap(), "(ca)");
        assert_eq!(trie.get("cat").unwrap(), "(cat)");
    }

    #[test]
    fn test_pretty_print_format() {
        let mut trie = Trie::new();
        trie.insert("a", "(a)");
        trie.insert("ab", "(ab)");
        trie.insert("bab", "(bab)");
        trie.insert("bc", "(bc)");
        trie.insert("bca", "(bca)");
        trie.insert("c", "(c)");
        trie.insert("caa", "(caa)");
        let expected = "\
<ROOT>
  a (value = \"(a)\")
    ab (value = \"(ab)\")
  b
    ba
      bab (value = \"(bab)\")
    bc (value = \"(bc)\")
      bca (value = \"(bca)\")
  c (value = \"(c)\")
    ca
      caa (value = \"(caa)\")
";
        assert_eq!(trie.pretty_print(), expected);
    }

    #[test]
    fn test_pretty_print_insertion_order_independent() {
        let keys = ["a", "ab", "bab", "bc", "bca", "c", "caa"];
        let mut forward = Trie::new();
        for key in keys {
            forward.insert(key, key.to_uppercase());
        }
        let mut backward = Trie::new();
        for key in keys.iter().rev() {
            backward.insert(key, key.to_uppercase());
        }
        assert_eq!(forward.pretty_print(), backward.pretty_print());
    }
}
