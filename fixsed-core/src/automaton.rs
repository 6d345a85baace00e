//! Aho-Corasick automaton: failure-link construction and the match scanner
//!
//! The automaton is a derived cache over the trie. Links are computed
//! lazily, in bulk, on the first matching call; any insertion afterwards
//! clears every link and the next matching call rebuilds from scratch.
//! This all-or-nothing invalidation trades incremental-update performance
//! for a structure that is always either fully valid or fully absent.

use std::collections::VecDeque;
use std::str::Chars;

use crate::error::Result;
use crate::trie::{NodeId, Trie, ROOT};

/// A trie with Aho-Corasick failure links for linear-time multi-pattern
/// matching and substitution.
#[derive(Debug, Clone, Default)]
pub struct AhoCorasickTrie {
    pub(crate) trie: Trie,
    pub(crate) links_built: bool,
}

/// A single pattern occurrence reported by [`AhoCorasickTrie::find_all`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Match<'a> {
    /// Character offset where the match begins (0-based)
    pub start: usize,
    /// Length of the match in characters
    pub len: usize,
    /// Replacement value stored for the matched pattern
    pub value: &'a str,
}

impl AhoCorasickTrie {
    /// Create an empty automaton.
    pub fn new() -> Self {
        Self {
            trie: Trie::new(),
            links_built: false,
        }
    }

    /// Insert a (pattern, replacement) pair. If the automaton has already
    /// been built, every suffix link is invalidated and the next matching
    /// call rebuilds them.
    pub fn insert(&mut self, key: &str, value: impl Into<String>) {
        self.trie.insert(key, value);
        if self.links_built {
            self.reset_suffix_links();
        }
    }

    /// True iff `key` was inserted as a pattern.
    pub fn contains(&self, key: &str) -> bool {
        self.trie.contains(key)
    }

    /// Look up the replacement stored for `key`.
    pub fn get(&self, key: &str) -> Result<&str> {
        self.trie.get(key)
    }

    /// Deterministic structural dump; see [`Trie::pretty_print`].
    pub fn pretty_print(&self) -> String {
        self.trie.pretty_print()
    }

    fn reset_suffix_links(&mut self) {
        log::debug!("invalidating suffix links after mutation");
        self.links_built = false;
        self.trie.clear_links();
    }

    pub(crate) fn ensure_links(&mut self) {
        if !self.links_built {
            self.build_suffix_links();
        }
    }

    /// Compute failure and dictionary-suffix links for every node.
    ///
    /// Breadth-first from the root's children: a node's failure link is
    /// found by ascending its parent's failure chain until a node with a
    /// child on the same uplink character appears (the root otherwise);
    /// its dict-suffix is the first value-carrying node on its own failure
    /// chain. Nodes whose links are already set are skipped, so the pass
    /// is idempotent and can complete a partial build.
    pub fn build_suffix_links(&mut self) {
        self.links_built = true;
        let mut todo: VecDeque<(NodeId, NodeId)> = self
            .trie
            .node(ROOT)
            .children
            .values()
            .map(|&child| (child, ROOT))
            .collect();
        while let Some((current, parent)) = todo.pop_front() {
            for &child in self.trie.node(current).children.values() {
                todo.push_back((child, current));
            }
            if self.trie.node(current).suffix.is_some() {
                continue;
            }
            let uplink = self
                .trie
                .node(current)
                .uplink
                .expect("non-root node must have an uplink");
            // ascend the parent's failure chain looking for a node that
            // can consume this node's uplink character
            let mut probe = parent;
            let link = loop {
                match self.trie.node(probe).suffix {
                    Some(next) => probe = next,
                    None => break ROOT,
                }
                if let Some(hit) = self.trie.child(probe, uplink) {
                    break hit;
                }
            };
            self.trie.node_mut(current).suffix = Some(link);
            // nearest value-carrying node on the failure chain
            let mut walk = link;
            while self.trie.node(walk).value.is_none() {
                match self.trie.node(walk).suffix {
                    Some(next) => walk = next,
                    None => break,
                }
            }
            if self.trie.node(walk).value.is_some() {
                debug_assert_ne!(walk, current, "dict suffix must not point at its own node");
                self.trie.node_mut(current).dict_suffix = Some(walk);
            }
        }
    }

    /// Scan `text` left to right, lazily yielding every match — nested and
    /// overlapping ones included — as `(start, len, value)`. For each
    /// position the current node's own match (if any) comes first,
    /// followed by its dict-suffix chain in decreasing length. Builds the
    /// automaton first if it is stale.
    pub fn find_all<'a>(&'a mut self, text: &'a str) -> FindAll<'a> {
        self.ensure_links();
        FindAll::new(&self.trie, text)
    }
}

/// Lazy iterator over Aho-Corasick matches; see
/// [`AhoCorasickTrie::find_all`].
#[derive(Debug, Clone)]
pub struct FindAll<'a> {
    trie: &'a Trie,
    chars: Chars<'a>,
    /// Number of characters consumed so far
    pos: usize,
    current: NodeId,
    /// Next node whose match (if any) ends at the last consumed position
    chain: Option<NodeId>,
}

impl<'a> FindAll<'a> {
    pub(crate) fn new(trie: &'a Trie, text: &'a str) -> Self {
        Self {
            trie,
            chars: text.chars(),
            pos: 0,
            current: ROOT,
            chain: None,
        }
    }
}

impl<'a> Iterator for FindAll<'a> {
    type Item = Match<'a>;

    fn next(&mut self) -> Option<Match<'a>> {
        let trie = self.trie;
        loop {
            // drain the matches ending at the previous position
            while let Some(id) = self.chain {
                let node = trie.node(id);
                self.chain = node.dict_suffix;
                if let Some(value) = node.value.as_deref() {
                    debug_assert!(node.depth > 0, "matches must have positive length");
                    return Some(Match {
                        start: self.pos - node.depth,
                        len: node.depth,
                        value,
                    });
                }
            }
            let ch = self.chars.next()?;
            self.pos += 1;
            // follow failure links until a transition on ch exists
            let mut current = self.current;
            loop {
                if let Some(next) = trie.child(current, ch) {
                    current = next;
                    break;
                }
                match trie.node(current).suffix {
                    Some(suffix) => current = suffix,
                    None => {
                        // at the root: discard the character
                        debug_assert_eq!(current, ROOT, "only the root may lack a suffix link");
                        break;
                    }
                }
            }
            self.current = current;
            self.chain = Some(current);
        }
    }
}
