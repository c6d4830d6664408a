use derive_more::Display;
use std::ops::Range;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A line of input text together with its 1-based position in its sequence
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Line<'a> {
    /// 1-based line number
    pub number: usize,

    /// The line text, without its terminator
    pub text: &'a str,
}

impl<'a> Line<'a> {
    /// Create a line from a 0-based index into its sequence
    pub fn at(index: usize, text: &'a str) -> Self {
        Self {
            number: index + 1,
            text,
        }
    }
}

/// Represents the kind of an edit block
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum EditKind {
    /// Lines present and identical on both sides
    #[display(fmt = "Equal")]
    Equal,

    /// Lines present only in the modified sequence
    #[display(fmt = "Insert")]
    Insert,

    /// Lines present only in the original sequence
    #[display(fmt = "Delete")]
    Delete,

    /// Lines present on both sides but with different content
    #[display(fmt = "Replace")]
    Replace,
}

impl EditKind {
    /// CSS class used for rows of this kind
    pub fn css_class(self) -> &'static str {
        match self {
            EditKind::Equal => "diff-equal",
            EditKind::Insert => "diff-insert",
            EditKind::Delete => "diff-delete",
            EditKind::Replace => "diff-replace",
        }
    }

    /// The kind seen from the other side of the comparison
    pub fn mirrored(self) -> Self {
        match self {
            EditKind::Insert => EditKind::Delete,
            EditKind::Delete => EditKind::Insert,
            other => other,
        }
    }
}

/// Whether a word span survived unchanged
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum WordKind {
    #[display(fmt = "Equal")]
    Equal,

    #[display(fmt = "Changed")]
    Changed,
}

/// A run of tokens inside a replaced line
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct WordSpan {
    pub kind: WordKind,
    pub text: String,
}

impl WordSpan {
    pub fn new(kind: WordKind, text: impl Into<String>) -> Self {
        Self {
            kind,
            text: text.into(),
        }
    }

    pub fn is_changed(&self) -> bool {
        self.kind == WordKind::Changed
    }
}

/// Word-level alignment of one original line against one modified line
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct WordDiff {
    /// Spans of the original line, in order
    pub original: Vec<WordSpan>,

    /// Spans of the modified line, in order
    pub modified: Vec<WordSpan>,
}

impl WordDiff {
    /// Reassemble the original line from its spans
    pub fn original_text(&self) -> String {
        self.original.iter().map(|s| s.text.as_str()).collect()
    }

    /// Reassemble the modified line from its spans
    pub fn modified_text(&self) -> String {
        self.modified.iter().map(|s| s.text.as_str()).collect()
    }

    /// Swap the two sides
    pub fn mirrored(&self) -> Self {
        Self {
            original: self.modified.clone(),
            modified: self.original.clone(),
        }
    }
}

/// A contiguous run of the edit script
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct EditBlock {
    /// What happened to the lines in this block
    pub kind: EditKind,

    /// Indices into the original sequence (0-based, half-open, possibly empty)
    pub original_range: Range<usize>,

    /// Indices into the modified sequence (0-based, half-open, possibly empty)
    pub modified_range: Range<usize>,

    /// Per line pair word alignment; only set for equal-length Replace blocks
    pub word_diffs: Option<Vec<WordDiff>>,
}

impl EditBlock {
    /// Create a block without word-level detail
    pub fn new(kind: EditKind, original_range: Range<usize>, modified_range: Range<usize>) -> Self {
        Self {
            kind,
            original_range,
            modified_range,
            word_diffs: None,
        }
    }

    /// Number of original lines covered
    pub fn original_len(&self) -> usize {
        self.original_range.len()
    }

    /// Number of modified lines covered
    pub fn modified_len(&self) -> usize {
        self.modified_range.len()
    }

    /// Number of rows this block occupies when rendered side by side
    pub fn row_count(&self) -> usize {
        self.original_len().max(self.modified_len())
    }

    /// Check if this block carries a change
    pub fn is_change(&self) -> bool {
        self.kind != EditKind::Equal
    }

    /// Pair up the lines of this block row by row
    ///
    /// The shorter side yields `None` once it runs out.
    pub fn line_pairs(&self) -> impl Iterator<Item = (Option<usize>, Option<usize>)> + '_ {
        (0..self.row_count()).map(move |row| {
            let original = self.original_range.start + row;
            let modified = self.modified_range.start + row;
            (
                (original < self.original_range.end).then_some(original),
                (modified < self.modified_range.end).then_some(modified),
            )
        })
    }

    /// The same block seen from the other side of the comparison
    pub fn mirrored(&self) -> Self {
        Self {
            kind: self.kind.mirrored(),
            original_range: self.modified_range.clone(),
            modified_range: self.original_range.clone(),
            word_diffs: self
                .word_diffs
                .as_ref()
                .map(|diffs| diffs.iter().map(WordDiff::mirrored).collect()),
        }
    }
}

/// Line counts per edit kind
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DiffStats {
    /// Lines matched on both sides
    pub unchanged: usize,

    /// Modified lines with no original counterpart
    pub inserted: usize,

    /// Original lines with no modified counterpart
    pub deleted: usize,

    /// Line pairs that were rewritten in place
    pub replaced: usize,
}

impl DiffStats {
    /// Tally the lines of an edit script
    pub fn from_blocks(blocks: &[EditBlock]) -> Self {
        blocks.iter().fold(Self::default(), |mut stats, block| {
            match block.kind {
                EditKind::Equal => stats.unchanged += block.original_len(),
                EditKind::Insert => stats.inserted += block.modified_len(),
                EditKind::Delete => stats.deleted += block.original_len(),
                EditKind::Replace => stats.replaced += block.row_count(),
            }
            stats
        })
    }

    /// Check if the diff has any changes
    pub fn has_changes(&self) -> bool {
        self.inserted + self.deleted + self.replaced > 0
    }
}
