//! Line-by-line rewriting pipeline

use anyhow::Result;
use fixsed_core::{boundary_transform, boundary_untransform, AhoCorasickTrie};
use std::io::{BufRead, Write};

/// Substitution strategy selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strategy {
    /// Single-pass greedy substitution (the default)
    Greedy,
    /// O(n²) chart parse maximizing matched coverage (`--slow`)
    Optimal,
}

/// Rewrite a single line with the configured trie.
///
/// When boundary handling is on, the line is run through the sentinel
/// transform (with forced edges, so patterns can anchor at the line ends),
/// rewritten, and stripped of sentinels again.
pub fn rewrite_line(
    trie: &mut AhoCorasickTrie,
    line: &str,
    boundaries: bool,
    strategy: Strategy,
) -> String {
    let line = if boundaries {
        boundary_transform(line, true)
    } else {
        line.to_string()
    };
    let rewritten = match strategy {
        Strategy::Greedy => trie.greedy_replace(&line),
        Strategy::Optimal => trie.replace(&line),
    };
    if boundaries {
        boundary_untransform(&rewritten)
    } else {
        rewritten
    }
}

/// Stream every line of `reader` through the trie into `writer`.
/// Returns the number of lines written.
pub fn rewrite_stream(
    trie: &mut AhoCorasickTrie,
    reader: &mut dyn BufRead,
    writer: &mut dyn Write,
    boundaries: bool,
    strategy: Strategy,
) -> Result<u64> {
    let mut lines = 0u64;
    let mut buf = String::new();
    loop {
        buf.clear();
        if reader.read_line(&mut buf)? == 0 {
            break;
        }
        let line = buf.strip_suffix('\n').unwrap_or(&buf);
        let line = line.strip_suffix('\r').unwrap_or(line);
        writeln!(writer, "{}", rewrite_line(trie, line, boundaries, strategy))?;
        lines += 1;
    }
    Ok(lines)
}
