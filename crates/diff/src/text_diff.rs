use anyhow::Result;
use ropey::Rope;

use crate::diff_renderer::{render, Mode};
use crate::error::{CompareError, Side};
use crate::highlight::overlay;
use crate::line_aligner::align;

/// Entry points used by the front-ends
pub struct TextDiff;

impl TextDiff {
    /// Compare two line sequences and render the differences as HTML
    pub fn compare<S: AsRef<str>>(original: &[S], modified: &[S], mode: Mode) -> Result<String> {
        validate_lines(Side::Original, original)?;
        validate_lines(Side::Modified, modified)?;

        let blocks = align(original, modified);
        Ok(render(&blocks, original, modified, mode))
    }

    /// Compare two whole texts, splitting them into lines first
    pub fn compare_text(old_text: &str, new_text: &str, mode: Mode) -> Result<String> {
        let old_lines = Self::split_lines(old_text);
        let new_lines = Self::split_lines(new_text);
        Self::compare(&old_lines[..], &new_lines[..], mode)
    }

    /// Highlight `query` in an already rendered fragment
    pub fn overlay(fragment: &str, query: Option<&str>) -> String {
        overlay(fragment, query)
    }

    /// Split text into lines without their terminators
    ///
    /// Recognises every line break ropey does (LF, CRLF, CR and the Unicode
    /// separators). A trailing line break does not start an extra empty line,
    /// and empty text has no lines at all.
    pub fn split_lines(text: &str) -> Vec<String> {
        let rope = Rope::from_str(text);
        let mut lines: Vec<String> = rope
            .lines()
            .map(|line| strip_line_break(line.to_string()))
            .collect();

        // The rope always reports one more line after a final break
        if rope.len_chars() == 0 || rope.line(rope.len_lines() - 1).len_chars() == 0 {
            lines.pop();
        }

        lines
    }
}

/// Reject lines that still contain a line break
pub(crate) fn validate_lines<S: AsRef<str>>(side: Side, lines: &[S]) -> Result<(), CompareError> {
    match lines
        .iter()
        .position(|line| line.as_ref().contains(is_line_break))
    {
        Some(index) => Err(CompareError::InvalidLine {
            side,
            number: index + 1,
        }),
        None => Ok(()),
    }
}

fn is_line_break(ch: char) -> bool {
    matches!(
        ch,
        '\n' | '\r' | '\u{0B}' | '\u{0C}' | '\u{85}' | '\u{2028}' | '\u{2029}'
    )
}

fn strip_line_break(mut line: String) -> String {
    if line.ends_with("\r\n") {
        line.truncate(line.len() - 2);
    } else if line.ends_with(is_line_break) {
        line.pop();
    }
    line
}
