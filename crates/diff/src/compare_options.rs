use anyhow::Result;
use log::debug;

use crate::diff_renderer::{render, Mode};
use crate::edit_block::{DiffStats, EditBlock};
use crate::error::Side;
use crate::highlight::{count_matches, filter_lines, overlay};
use crate::line_aligner::{align, align_lines};
use crate::text_diff::validate_lines;

/// Settings for one comparison
///
/// ```
/// use doc_diff::{CompareOptions, Mode};
///
/// let result = CompareOptions::default()
///     .mode(Mode::ChangedOnly)
///     .search("cat")
///     .compare(&["the cat sat"], &["the dog sat"])
///     .unwrap();
///
/// assert_eq!(result.match_count, 1);
/// ```
#[derive(Debug, Clone)]
pub struct CompareOptions {
    mode: Mode,
    search: Option<String>,
    filter_to_matches: bool,
    word_diff: bool,
}

impl Default for CompareOptions {
    fn default() -> Self {
        Self {
            mode: Mode::All,
            search: None,
            filter_to_matches: false,
            word_diff: true,
        }
    }
}

/// Everything a front-end needs to display one comparison
#[derive(Debug, Clone)]
pub struct Comparison {
    /// The rendered fragment, with search highlights applied
    pub html: String,

    /// Occurrences of the search term across both compared sequences
    pub match_count: usize,

    /// Line counts per edit kind
    pub stats: DiffStats,

    /// The edit script the fragment was rendered from
    pub blocks: Vec<EditBlock>,

    /// The mode the fragment was actually rendered in
    pub mode: Mode,
}

impl CompareOptions {
    /// Set the display mode
    pub fn mode(mut self, mode: Mode) -> Self {
        self.mode = mode;
        self
    }

    /// Set the search term to highlight; an empty term clears it
    pub fn search(mut self, query: impl Into<String>) -> Self {
        let query = query.into();
        self.search = (!query.is_empty()).then_some(query);
        self
    }

    /// Only compare lines that contain the search term
    pub fn filter_to_matches(mut self, enabled: bool) -> Self {
        self.filter_to_matches = enabled;
        self
    }

    /// Enable or disable word-level highlighting inside replaced lines
    pub fn word_diff(mut self, enabled: bool) -> Self {
        self.word_diff = enabled;
        self
    }

    /// The search term, if any
    pub fn query(&self) -> Option<&str> {
        self.search.as_deref()
    }

    /// Run the comparison
    pub fn compare<S: AsRef<str>>(&self, original: &[S], modified: &[S]) -> Result<Comparison> {
        validate_lines(Side::Original, original)?;
        validate_lines(Side::Modified, modified)?;

        let query = self.query();
        let (original, modified): (Vec<String>, Vec<String>) = match query {
            Some(q) if self.filter_to_matches => {
                (filter_lines(original, q), filter_lines(modified, q))
            }
            _ => (to_owned_lines(original), to_owned_lines(modified)),
        };

        let blocks = if self.word_diff {
            align(&original[..], &modified[..])
        } else {
            align_lines(&original[..], &modified[..])
        };

        let mode = self.mode.effective(query);
        let html = overlay(&render(&blocks, &original[..], &modified[..], mode), query);
        let match_count = query.map_or(0, |q| count_matches(&original[..], &modified[..], q));
        let stats = DiffStats::from_blocks(&blocks);

        debug!(
            "compared {} and {} lines in {} mode: {:?}, {} matches",
            original.len(),
            modified.len(),
            mode,
            stats,
            match_count
        );

        Ok(Comparison {
            html,
            match_count,
            stats,
            blocks,
            mode,
        })
    }
}

fn to_owned_lines<S: AsRef<str>>(lines: &[S]) -> Vec<String> {
    lines.iter().map(|line| line.as_ref().to_string()).collect()
}
