//! Substitution strategies built on the Aho-Corasick scanner
//!
//! Three independent strategies share the automaton:
//!
//! - [`AhoCorasickTrie::greedy_replace`]: one pass, earliest match wins,
//!   longest at that position; committed output is never revisited.
//! - [`AhoCorasickTrie::greedy_replace_w_sep`]: same transitions, but a
//!   match only commits when flanked by spaces or the input edges.
//! - [`AhoCorasickTrie::replace`]: O(n²) chart parse maximizing total
//!   matched-character coverage; globally optimal rather than greedy.

use crate::automaton::{AhoCorasickTrie, FindAll};
use crate::trie::{NodeId, Trie, ROOT};

/// Emit the buffer minus the matched tail, then the replacement.
fn commit(out: &mut String, buffered: &mut Vec<char>, depth: usize, value: &str) {
    let keep = buffered.len().saturating_sub(depth);
    out.extend(buffered.drain(..keep));
    out.push_str(value);
    buffered.clear();
}

fn dict_value(trie: &Trie, id: NodeId) -> &str {
    trie.node(id)
        .value
        .as_deref()
        .expect("dictionary suffix target must carry a value")
}

impl AhoCorasickTrie {
    /// Single-pass greedy substitution.
    ///
    /// When matches overlap, the earliest-starting one wins, then the
    /// longest at that position. Text is buffered while it might still
    /// extend into a match; on a failed transition the scanner first tries
    /// the pending dict-suffix match, then falls back along failure links,
    /// trimming the buffer to the surviving suffix.
    pub fn greedy_replace(&mut self, seq: &str) -> String {
        self.ensure_links();
        let trie = &self.trie;
        let mut current = ROOT;
        let mut buffered: Vec<char> = Vec::new();
        let mut out = String::new();
        for ch in seq.chars() {
            while trie.child(current, ch).is_none() {
                let node = trie.node(current);
                if let Some(dict) = node.dict_suffix {
                    let depth = trie.node(dict).depth;
                    commit(&mut out, &mut buffered, depth, dict_value(trie, dict));
                    current = ROOT;
                    break;
                } else if let Some(suffix) = node.suffix {
                    current = suffix;
                    let depth = trie.node(suffix).depth;
                    if depth > 0 {
                        // flush all but the still-matching tail
                        let keep = buffered.len().saturating_sub(depth);
                        out.extend(buffered.drain(..keep));
                    } else {
                        out.extend(buffered.drain(..));
                        break;
                    }
                } else {
                    current = ROOT;
                    out.extend(buffered.drain(..));
                    break;
                }
            }
            if let Some(next) = trie.child(current, ch) {
                buffered.push(ch);
                current = next;
                if let Some(value) = trie.node(next).value.as_deref() {
                    let depth = trie.node(next).depth;
                    commit(&mut out, &mut buffered, depth, value);
                    current = ROOT;
                }
            } else {
                debug_assert_eq!(current, ROOT, "only the root may reject a character");
                out.extend(buffered.drain(..));
                out.push(ch);
            }
        }
        if let Some(dict) = trie.node(current).dict_suffix {
            let depth = trie.node(dict).depth;
            let keep = buffered.len().saturating_sub(depth);
            out.extend(buffered.drain(..keep));
            out.push_str(dict_value(trie, dict));
        } else {
            out.extend(buffered.drain(..));
        }
        out
    }

    /// Greedy substitution that only commits a match when the characters
    /// immediately before and after it are a plain space or the edge of
    /// the input. Matches failing the check are left unreduced and the
    /// scan continues from the current node.
    ///
    /// This is whole-token replacement without the sentinel transform; the
    /// two mechanisms are deliberately separate code paths.
    pub fn greedy_replace_w_sep(&mut self, seq: &str) -> String {
        self.ensure_links();
        let trie = &self.trie;
        let chars: Vec<char> = seq.chars().collect();
        if chars.is_empty() {
            return String::new();
        }
        let last = chars.len() - 1;
        let mut current = ROOT;
        let mut buffered: Vec<char> = Vec::new();
        let mut out = String::new();
        for (pos, &ch) in chars.iter().enumerate() {
            while trie.child(current, ch).is_none() {
                match trie.node(current).suffix {
                    Some(suffix) => current = suffix,
                    None => break,
                }
            }
            if let Some(next) = trie.child(current, ch) {
                current = next;
                buffered.push(ch);
            } else {
                out.extend(buffered.drain(..));
                out.push(ch);
            }
            let mut reduced = false;
            if let Some(value) = trie.node(current).value.as_deref() {
                let depth = trie.node(current).depth;
                reduced = bounded_commit(&chars, pos, last, depth, value, &mut out, &mut buffered);
            }
            if !reduced {
                if let Some(dict) = trie.node(current).dict_suffix {
                    let depth = trie.node(dict).depth;
                    reduced = bounded_commit(
                        &chars,
                        pos,
                        last,
                        depth,
                        dict_value(trie, dict),
                        &mut out,
                        &mut buffered,
                    );
                }
            }
            if reduced {
                current = ROOT;
            }
        }
        let mut reduced = false;
        if let Some(value) = trie.node(current).value.as_deref() {
            let depth = trie.node(current).depth;
            reduced = bounded_commit(&chars, last, last, depth, value, &mut out, &mut buffered);
        }
        if !reduced {
            if let Some(dict) = trie.node(current).dict_suffix {
                let depth = trie.node(dict).depth;
                reduced = bounded_commit(
                    &chars,
                    last,
                    last,
                    depth,
                    dict_value(trie, dict),
                    &mut out,
                    &mut buffered,
                );
            }
        }
        if !reduced {
            out.extend(buffered.drain(..));
        }
        out
    }

    /// Globally optimal substitution via an O(n²) chart parse.
    ///
    /// `chart[len - 1][start]` holds the best-scoring rewrite of the
    /// substring `[start, start + len)`, where the score is the number of
    /// matched characters. Single characters score zero; a span found by
    /// the scanner scores its own length and is taken as final for that
    /// span. Every other cell takes the best split into two adjacent
    /// sub-spans; equal scores keep the smallest left partition.
    pub fn replace(&mut self, seq: &str) -> String {
        self.ensure_links();
        let trie = &self.trie;
        let n = seq.chars().count();
        if n == 0 {
            return String::new();
        }
        let mut chart: Vec<Vec<Option<(usize, String)>>> = vec![vec![None; n]; n];
        for (col, ch) in seq.chars().enumerate() {
            chart[0][col] = Some((0, ch.to_string()));
        }
        for m in FindAll::new(trie, seq) {
            chart[m.len - 1][m.start] = Some((m.len, m.value.to_string()));
        }
        for row in 1..n {
            for col in 0..n - row {
                if chart[row][col].is_some() {
                    continue;
                }
                let mut best: Option<(usize, String)> = None;
                for split in 0..row {
                    let (left_score, left_text) = chart[split][col]
                        .as_ref()
                        .expect("shorter chart spans must already be filled");
                    let (right_score, right_text) = chart[row - split - 1][col + split + 1]
                        .as_ref()
                        .expect("shorter chart spans must already be filled");
                    let score = left_score + right_score;
                    if best.as_ref().map_or(true, |(b, _)| *b < score) {
                        best = Some((score, format!("{left_text}{right_text}")));
                    }
                }
                chart[row][col] = best;
            }
        }
        let (_, text) = chart[n - 1][0]
            .take()
            .expect("the full-span chart cell must be filled");
        text
    }
}

/// Commit the match only if both flanks are a space or the input edge.
fn bounded_commit(
    chars: &[char],
    pos: usize,
    last: usize,
    depth: usize,
    value: &str,
    out: &mut String,
    buffered: &mut Vec<char>,
) -> bool {
    let begin_boundary = pos < depth || chars[pos - depth] == ' ';
    let end_boundary = pos == last || chars[pos + 1] == ' ';
    if begin_boundary && end_boundary {
        commit(out, buffered, depth, value);
        true
    } else {
        false
    }
}
