//! # Lines Module
//!
//! Pure text helpers used by the header verifier: splitting text into lines,
//! counting them, taking a prefix, and normalizing a line so that indentation
//! and comment glue do not influence comparisons.

/// Characters removed by [`normalize`]: whitespace plus the slash of a `//`
/// line-comment marker.
pub const DEFAULT_STRIP_SET: &[char] = &[' ', '\t', '\r', '\n', '/'];

/// Splits `text` into lines.
///
/// `\n`, `\r` and `\r\n` are all accepted as separators. A trailing newline
/// produces a final empty segment, exactly as a plain split would.
///
/// ```
/// use headerguard::lines::split_lines;
///
/// assert_eq!(split_lines("a\r\nb\rc\n"), vec!["a", "b", "c", ""]);
/// ```
pub fn split_lines(text: &str) -> Vec<&str> {
  let mut lines = Vec::new();
  let bytes = text.as_bytes();
  let mut start = 0;
  let mut i = 0;

  while i < bytes.len() {
    match bytes[i] {
      b'\r' => {
        lines.push(&text[start..i]);
        if bytes.get(i + 1) == Some(&b'\n') {
          i += 1;
        }
        start = i + 1;
      }
      b'\n' => {
        lines.push(&text[start..i]);
        start = i + 1;
      }
      _ => {}
    }
    i += 1;
  }

  lines.push(&text[start..]);
  lines
}

/// Counts the lines of `text` the way a line-by-line walk does.
///
/// This is the number of segments of [`split_lines`], not counting the empty
/// segment that follows a terminating newline. Empty text has no lines.
pub fn line_count(text: &str) -> usize {
  let segments = split_lines(text);
  match segments.last() {
    Some(last) if last.is_empty() => segments.len() - 1,
    _ => segments.len(),
  }
}

/// Returns at most the first `k` lines of `text`.
pub fn first_lines(text: &str, k: usize) -> Vec<&str> {
  split_lines(text).into_iter().take(k).collect()
}

/// Removes every whitespace character and every `/` from `line`.
///
/// The characters are removed wherever they occur, not only as a prefix, so
/// `"//  Copyright 2019 X"` and `"Copyright 2019 X"` normalize identically.
pub fn normalize(line: &str) -> String {
  normalize_with(line, DEFAULT_STRIP_SET)
}

/// Removes every character of `strip` from `line`.
pub fn normalize_with(line: &str, strip: &[char]) -> String {
  line.chars().filter(|c| !strip.contains(c)).collect()
}

/// Checks whether `text` starts with a comment opening token (`/**`, `/*` or
/// `//`).
pub fn is_opening_comment_line(text: &str) -> bool {
  text.starts_with("/**") || text.starts_with("/*") || text.starts_with("//")
}

/// Checks whether `line` closes a comment block.
///
/// Ignoring whitespace, the line must be `*/`, `**/` or an empty `//` line
/// comment.
pub fn is_closing_comment_line(line: &str) -> bool {
  let compact = normalize_with(line, &[' ', '\t', '\r', '\n']);
  matches!(compact.as_str(), "*/" | "**/" | "//")
}
