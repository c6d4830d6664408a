use crate::edit_block::{WordDiff, WordKind, WordSpan};
use crate::lcs::lcs_pairs;

/// Split a line into alternating runs of whitespace and non-whitespace
///
/// Concatenating the tokens gives back the line exactly.
pub fn tokenize(line: &str) -> Vec<&str> {
    let mut tokens = Vec::new();
    let mut start = 0;
    let mut in_space = None;

    for (index, ch) in line.char_indices() {
        let space = ch.is_whitespace();
        if in_space.is_some_and(|previous| previous != space) {
            tokens.push(&line[start..index]);
            start = index;
        }
        in_space = Some(space);
    }

    if start < line.len() {
        tokens.push(&line[start..]);
    }

    tokens
}

/// Align the words of two lines and classify each run as equal or changed
pub fn diff_words(original: &str, modified: &str) -> WordDiff {
    let old_tokens = tokenize(original);
    let new_tokens = tokenize(modified);

    let mut old_matched = vec![false; old_tokens.len()];
    let mut new_matched = vec![false; new_tokens.len()];
    for (i, j) in lcs_pairs(&old_tokens, &new_tokens) {
        old_matched[i] = true;
        new_matched[j] = true;
    }

    WordDiff {
        original: merge_spans(&old_tokens, &old_matched),
        modified: merge_spans(&new_tokens, &new_matched),
    }
}

/// Collapse consecutive tokens of the same kind into one span
fn merge_spans(tokens: &[&str], matched: &[bool]) -> Vec<WordSpan> {
    let mut spans: Vec<WordSpan> = Vec::new();

    for (token, &is_match) in tokens.iter().zip(matched) {
        let kind = if is_match {
            WordKind::Equal
        } else {
            WordKind::Changed
        };

        match spans.last_mut() {
            Some(last) if last.kind == kind => last.text.push_str(token),
            _ => spans.push(WordSpan::new(kind, *token)),
        }
    }

    spans
}
