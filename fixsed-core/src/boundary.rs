//! Reversible word-boundary sentinel transform
//!
//! Whole-word matching reduces to literal matching by inserting a sentinel
//! character at every transition between whitespace and non-whitespace,
//! in both the patterns and the scanned text. Stripping the sentinels
//! recovers the original text exactly.

/// Sentinel marking a word edge; not expected in ordinary text.
pub const BOUNDARY: char = '\0';

fn is_boundary_whitespace(ch: char) -> bool {
    matches!(ch, ' ' | '\t' | '\x0B' | '\r' | '\n')
}

/// Insert word-edge sentinels into `seq`.
///
/// With `force_edges`, the result also starts and ends with a sentinel.
/// A sentinel already present in the input toggles the word state instead
/// of stacking; consecutive sentinels collapse to one.
pub fn boundary_transform(seq: &str, force_edges: bool) -> String {
    let mut out = boundary_words(seq);
    if force_edges {
        out.insert(0, BOUNDARY);
        out.push(BOUNDARY);
    }
    remove_duplicates(&out)
}

/// Strip every sentinel, recovering the pre-transform text exactly.
pub fn boundary_untransform(seq: &str) -> String {
    seq.chars().filter(|&ch| ch != BOUNDARY).collect()
}

fn boundary_words(seq: &str) -> String {
    let mut out = String::with_capacity(seq.len() + 2);
    // None until the first non-sentinel character settles the state
    let mut in_word: Option<bool> = None;
    for ch in seq.chars() {
        if ch == BOUNDARY {
            if let Some(word) = in_word {
                in_word = Some(!word);
            }
        } else if is_boundary_whitespace(ch) {
            if in_word == Some(true) {
                out.push(BOUNDARY);
            }
            in_word = Some(false);
        } else {
            if in_word == Some(false) {
                out.push(BOUNDARY);
            }
            in_word = Some(true);
        }
        out.push(ch);
    }
    out
}

fn remove_duplicates(seq: &str) -> String {
    let mut out = String::with_capacity(seq.len());
    let mut last_boundary = false;
    for ch in seq.chars() {
        if ch == BOUNDARY {
            if !last_boundary {
                out.push(ch);
            }
            last_boundary = true;
        } else {
            out.push(ch);
            last_boundary = false;
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transform_forced_edges() {
        assert_eq!(boundary_transform("abc", true), "\0abc\0");
        assert_eq!(boundary_transform("abc def", true), "\0abc\0 \0def\0");
        assert_eq!(
            boundary_transform("  abc def  ", true),
            "\0  \0abc\0 \0def\0  \0"
        );
    }

    #[test]
    fn test_transform_collapses_existing_sentinels() {
        assert_eq!(boundary_transform("\0abc def", true), "\0abc\0 \0def\0");
        assert_eq!(boundary_transform("abc def\0", true), "\0abc\0 \0def\0");
        assert_eq!(boundary_transform("\0abc def\0", true), "\0abc\0 \0def\0");
    }

    #[test]
    fn test_transform_without_forced_edges() {
        assert_eq!(boundary_transform("abc def", false), "abc\0 \0def");
        assert_eq!(boundary_transform("\0abc def", false), "\0abc\0 \0def");
        assert_eq!(boundary_transform("abc def\0", false), "abc\0 \0def\0");
        assert_eq!(boundary_transform("\0abc def\0", false), "\0abc\0 \0def\0");
    }

    #[test]
    fn test_untransform_strips_sentinels() {
        assert_eq!(boundary_untransform("\0abc\0 \0def\0"), "abc def");
        assert_eq!(boundary_untransform("abc"), "abc");
        assert_eq!(boundary_untransform(""), "");
    }

    #[test]
    fn test_round_trip() {
        for text in ["", "a", "hello world", "  padded  ", "tab\tsep", "a\r\nb"] {
            assert_eq!(boundary_untransform(&boundary_transform(text, true)), text);
            assert_eq!(boundary_untransform(&boundary_transform(text, false)), text);
        }
    }

    #[test]
    fn test_all_whitespace_kinds_are_edges() {
        assert_eq!(boundary_transform("a\tb", false), "a\0\t\0b");
        assert_eq!(boundary_transform("a\x0Bb", false), "a\0\x0B\0b");
        assert_eq!(boundary_transform("a\rb", false), "a\0\r\0b");
        assert_eq!(boundary_transform("a\nb", false), "a\0\n\0b");
    }
}
