//! Pattern file parsing and trie construction
//!
//! Two on-disk syntaxes are supported and auto-detected: tab-separated
//! (`before<TAB>after`) and sed-style (`s/before/after/`, any single-char
//! delimiter after the `s`). A `\b` at either edge of `before` pins that
//! edge to a word boundary; `--words` implies `\b` on both edges of every
//! pattern. Word boundaries are realized as sentinel characters inserted
//! by the core's boundary transform, both here and on the scanned text.

use fixsed_core::{boundary_transform, AhoCorasickTrie, BOUNDARY};

use crate::error::{CliError, CliResult};

/// Pattern file syntax selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PatternFormat {
    /// Detect from the file contents
    Auto,
    /// Tab-separated `before<TAB>after`
    Tsv,
    /// Sed-style `s/before/after/`
    Sed,
}

/// Scan the pattern file text and report `(tsv, boundaries)`: whether
/// every non-blank line is tab-separated, and whether any pattern pins a
/// word boundary with `\b` (or `on_word_boundaries` was already set).
pub fn detect_pattern_format(text: &str, on_word_boundaries: bool) -> (bool, bool) {
    let mut tsv = true;
    let mut boundaries = on_word_boundaries;
    for line in text.lines() {
        if line.trim().is_empty() {
            continue;
        }
        if line.matches('\t').count() != 1 {
            tsv = false;
        }
        if line.contains("\\b") {
            boundaries = true;
        }
    }
    (tsv, boundaries)
}

/// Build the replacement trie from pattern file text.
///
/// Returns the trie and whether boundary (whole-word) handling is in
/// effect for this run. Malformed lines are skipped with a warning; a
/// file yielding no usable patterns is an error.
pub fn build_trie(
    text: &str,
    format: PatternFormat,
    on_word_boundaries: bool,
) -> CliResult<(AhoCorasickTrie, bool)> {
    let (detected_tsv, boundaries) = detect_pattern_format(text, on_word_boundaries);
    let tsv = match format {
        PatternFormat::Auto => detected_tsv,
        PatternFormat::Tsv => true,
        PatternFormat::Sed => false,
    };
    let mut trie = AhoCorasickTrie::new();
    let mut loaded = 0usize;
    for (lineno, line) in text.lines().enumerate() {
        let line = line.strip_suffix('\r').unwrap_or(line);
        if line.trim().is_empty() {
            continue;
        }
        let parsed = if tsv {
            parse_tsv_line(line)
        } else {
            parse_sed_line(line)
        };
        let Some((before, after)) = parsed else {
            log::warn!("skipping malformed pattern on line {}: {line}", lineno + 1);
            continue;
        };
        if before.is_empty() {
            log::warn!("skipping empty pattern on line {}", lineno + 1);
            continue;
        }
        let key = pattern_key(&before, on_word_boundaries, boundaries);
        trie.insert(&key, after);
        loaded += 1;
    }
    if loaded == 0 {
        return Err(CliError::PatternFile("no usable patterns found".to_string()).into());
    }
    log::info!("{loaded} patterns loaded");
    Ok((trie, boundaries))
}

fn parse_tsv_line(line: &str) -> Option<(String, String)> {
    let mut fields = line.split('\t');
    let before = fields.next()?;
    let after = fields.next()?;
    if fields.next().is_some() {
        return None;
    }
    Some((before.to_string(), after.to_string()))
}

fn parse_sed_line(line: &str) -> Option<(String, String)> {
    let mut chars = line.chars();
    if chars.next()? != 's' {
        return None;
    }
    let delim = chars.next()?;
    let rest: String = chars.collect();
    let fields: Vec<&str> = rest.split(delim).collect();
    if fields.len() != 3 || !fields[2].is_empty() {
        return None;
    }
    Some((fields[0].to_string(), fields[1].to_string()))
}

/// Translate `\b` edge markers (and the implicit `--words` edges) into
/// sentinel characters, and sentinel-annotate the pattern interior when
/// boundary handling is on.
fn pattern_key(before: &str, words: bool, boundaries: bool) -> String {
    let mut before = before.to_string();
    if words {
        before = format!("\\b{before}\\b");
    }
    let mut start = false;
    if let Some(stripped) = before.strip_prefix("\\b") {
        start = true;
        before = stripped.to_string();
    }
    let mut end = false;
    if let Some(stripped) = before.strip_suffix("\\b") {
        end = true;
        before = stripped.to_string();
    }
    let mut key = if boundaries {
        boundary_transform(&before, false)
    } else {
        before
    };
    if start {
        key.insert(0, BOUNDARY);
    }
    if end {
        key.push(BOUNDARY);
    }
    key
}

#[cfg(test)]
mod tests {
    use super::*;

    const PATTERN_TSV: &str = "\\bMarco Polo\tMarco_Polo
Kublai Khan\tKublai_Khan
Christopher Columbus\tChristopher_Columbus
and uncle\tand_uncle";

    const PATTERN_SED: &str = "s/\\bMarco Polo/Marco_Polo/
s/Kublai Khan/Kublai_Khan/
s.Christopher Columbus.Christopher_Columbus.
s/and uncle/and_uncle/";

    #[test]
    fn test_detect_tsv_with_boundaries() {
        assert_eq!(detect_pattern_format(PATTERN_TSV, false), (true, true));
    }

    #[test]
    fn test_detect_sed_with_boundaries() {
        assert_eq!(detect_pattern_format(PATTERN_SED, false), (false, true));
    }

    #[test]
    fn test_detect_plain_tsv_without_boundaries() {
        assert_eq!(
            detect_pattern_format("cat\t(cat)\ndog\t(dog)", false),
            (true, false)
        );
    }

    #[test]
    fn test_words_flag_carries_through_detection() {
        assert_eq!(
            detect_pattern_format("cat\t(cat)", true),
            (true, true)
        );
    }

    #[test]
    fn test_parse_tsv_line() {
        assert_eq!(
            parse_tsv_line("cat\t(cat)"),
            Some(("cat".to_string(), "(cat)".to_string()))
        );
        assert_eq!(parse_tsv_line("no tab here"), None);
        assert_eq!(parse_tsv_line("too\tmany\ttabs"), None);
    }

    #[test]
    fn test_parse_sed_line() {
        assert_eq!(
            parse_sed_line("s/cat/(cat)/"),
            Some(("cat".to_string(), "(cat)".to_string()))
        );
        assert_eq!(
            parse_sed_line("s.Christopher Columbus.Christopher_Columbus."),
            Some((
                "Christopher Columbus".to_string(),
                "Christopher_Columbus".to_string()
            ))
        );
        assert_eq!(parse_sed_line("x/cat/(cat)/"), None);
        assert_eq!(parse_sed_line("s/cat/(cat)"), None);
        assert_eq!(parse_sed_line("s/cat/"), None);
    }

    #[test]
    fn test_pattern_key_without_boundaries() {
        assert_eq!(pattern_key("cat", false, false), "cat");
    }

    #[test]
    fn test_pattern_key_with_boundary_markers() {
        // leading \b pins the start; interior word edges get sentinels
        assert_eq!(
            pattern_key("\\bMarco Polo", false, true),
            "\0Marco\0 \0Polo"
        );
        // a plain pattern still gets interior sentinels when the run uses
        // boundary handling
        assert_eq!(pattern_key("Kublai Khan", false, true), "Kublai\0 \0Khan");
    }

    #[test]
    fn test_pattern_key_with_words_flag() {
        assert_eq!(pattern_key("cat", true, true), "\0cat\0");
        assert_eq!(pattern_key("a cat", true, true), "\0a\0 \0cat\0");
    }

    #[test]
    fn test_build_trie_reports_boundaries() {
        let (trie, boundaries) = build_trie(PATTERN_TSV, PatternFormat::Auto, false).unwrap();
        assert!(boundaries);
        assert!(trie.contains("Kublai\0 \0Khan"));
        assert!(trie.contains("\0Marco\0 \0Polo"));
    }

    #[test]
    fn test_build_trie_sed_format() {
        let (trie, boundaries) = build_trie(PATTERN_SED, PatternFormat::Auto, false).unwrap();
        assert!(boundaries);
        assert_eq!(trie.get("Kublai\0 \0Khan").unwrap(), "Kublai_Khan");
    }

    #[test]
    fn test_build_trie_skips_malformed_lines() {
        let text = "cat\t(cat)\nmalformed line\ndog\t(dog)";
        let (trie, _) = build_trie(text, PatternFormat::Tsv, false).unwrap();
        assert!(trie.contains("cat"));
        assert!(trie.contains("dog"));
        assert!(!trie.contains("malformed line"));
    }

    #[test]
    fn test_build_trie_empty_file_is_an_error() {
        assert!(build_trie("", PatternFormat::Auto, false).is_err());
        assert!(build_trie("only malformed", PatternFormat::Tsv, false).is_err());
    }
}
