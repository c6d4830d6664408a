use log::debug;
use std::ops::Range;

use crate::edit_block::{EditBlock, EditKind};
use crate::lcs::lcs_pairs;
use crate::word_diff::diff_words;

/// Compute the edit script between two line sequences, including word-level
/// detail for replaced lines
pub fn align<S: AsRef<str>>(original: &[S], modified: &[S]) -> Vec<EditBlock> {
    let mut blocks = align_lines(original, modified);
    attach_word_diffs(&mut blocks, original, modified);
    blocks
}

/// Compute the line-level edit script between two line sequences
///
/// Lines match only when they are exactly equal. Matched anchors become
/// Equal blocks; the gaps between them become Delete, Insert or Replace.
pub fn align_lines<S: AsRef<str>>(original: &[S], modified: &[S]) -> Vec<EditBlock> {
    let old_lines: Vec<&str> = original.iter().map(|s| s.as_ref()).collect();
    let new_lines: Vec<&str> = modified.iter().map(|s| s.as_ref()).collect();

    let mut blocks = Vec::new();
    let (mut old_pos, mut new_pos) = (0, 0);

    for (old_anchor, new_anchor) in lcs_pairs(&old_lines, &new_lines) {
        push_gap(&mut blocks, old_pos..old_anchor, new_pos..new_anchor);
        push_equal(&mut blocks, old_anchor, new_anchor);
        old_pos = old_anchor + 1;
        new_pos = new_anchor + 1;
    }
    push_gap(&mut blocks, old_pos..old_lines.len(), new_pos..new_lines.len());

    debug_assert!(covers(&blocks, old_lines.len(), new_lines.len()));
    debug!(
        "aligned {} original and {} modified lines into {} blocks",
        old_lines.len(),
        new_lines.len(),
        blocks.len()
    );

    blocks
}

/// Extend the trailing Equal block or start a new one
fn push_equal(blocks: &mut Vec<EditBlock>, old_index: usize, new_index: usize) {
    if let Some(last) = blocks.last_mut() {
        if last.kind == EditKind::Equal
            && last.original_range.end == old_index
            && last.modified_range.end == new_index
        {
            last.original_range.end += 1;
            last.modified_range.end += 1;
            return;
        }
    }

    blocks.push(EditBlock::new(
        EditKind::Equal,
        old_index..old_index + 1,
        new_index..new_index + 1,
    ));
}

/// Classify the unmatched lines between two anchors
fn push_gap(blocks: &mut Vec<EditBlock>, old_gap: Range<usize>, new_gap: Range<usize>) {
    let common = old_gap.len().min(new_gap.len());
    let old_split = old_gap.start + common;
    let new_split = new_gap.start + common;

    if common > 0 {
        blocks.push(EditBlock::new(
            EditKind::Replace,
            old_gap.start..old_split,
            new_gap.start..new_split,
        ));
    }

    if old_split < old_gap.end {
        blocks.push(EditBlock::new(
            EditKind::Delete,
            old_split..old_gap.end,
            new_gap.end..new_gap.end,
        ));
    } else if new_split < new_gap.end {
        blocks.push(EditBlock::new(
            EditKind::Insert,
            old_gap.end..old_gap.end,
            new_split..new_gap.end,
        ));
    }
}

/// Run word-level alignment on every equal-length Replace block
fn attach_word_diffs<S: AsRef<str>>(blocks: &mut [EditBlock], original: &[S], modified: &[S]) {
    for block in blocks
        .iter_mut()
        .filter(|b| b.kind == EditKind::Replace && b.original_len() == b.modified_len())
    {
        let diffs = block
            .original_range
            .clone()
            .zip(block.modified_range.clone())
            .map(|(i, j)| diff_words(original[i].as_ref(), modified[j].as_ref()))
            .collect();
        block.word_diffs = Some(diffs);
    }
}

/// Check that the blocks tile both sequences in order
fn covers(blocks: &[EditBlock], old_len: usize, new_len: usize) -> bool {
    let (mut old_pos, mut new_pos) = (0, 0);
    for block in blocks {
        if block.original_range.start != old_pos || block.modified_range.start != new_pos {
            return false;
        }
        old_pos = block.original_range.end;
        new_pos = block.modified_range.end;
    }
    old_pos == old_len && new_pos == new_len
}
