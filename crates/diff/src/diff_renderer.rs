use derive_more::Display;
use log::trace;
use maud::{html, Markup, Render};
use std::str::FromStr;

use crate::edit_block::{EditBlock, EditKind, Line, WordSpan};
use crate::error::CompareError;
use crate::markup::is_well_formed;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// CSS class of the fragment's outer table
pub const TABLE_CLASS: &str = "diff";

/// CSS class of line number cells
pub const LINE_NUMBER_CLASS: &str = "diff-lineno";

/// CSS class of line text cells
pub const TEXT_CLASS: &str = "diff-text";

/// CSS class wrapping changed words inside replaced lines
pub const CHANGED_CLASS: &str = "diff-changed";

/// Which blocks of the edit script are rendered
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Display)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Mode {
    /// Every line of both documents
    #[default]
    #[display(fmt = "all")]
    All,

    /// Only inserted, deleted and replaced lines
    #[display(fmt = "changed-only")]
    ChangedOnly,
}

impl Mode {
    /// The mode to render with while `query` is being searched for
    ///
    /// Searching needs the surrounding unchanged lines, so an active search
    /// always shows everything.
    pub fn effective(self, query: Option<&str>) -> Self {
        match query {
            Some(q) if !q.is_empty() => Mode::All,
            _ => self,
        }
    }
}

impl FromStr for Mode {
    type Err = CompareError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "all" => Ok(Mode::All),
            "changed-only" | "changed_only" | "changedonly" | "diff_only" | "diff-only" => {
                Ok(Mode::ChangedOnly)
            }
            _ => Err(CompareError::UnknownMode(s.to_string())),
        }
    }
}

/// Contents of one text cell
enum Cell<'a> {
    /// The side has no line in this row
    Empty,

    /// Unmarked line text
    Plain(&'a str),

    /// A replaced line with no word-level detail
    Changed(&'a str),

    /// A replaced line split into word spans
    Words(&'a [WordSpan]),
}

impl Render for Cell<'_> {
    fn render(&self) -> Markup {
        match self {
            Cell::Empty => html! {},
            Cell::Plain(text) => html! { (text) },
            Cell::Changed(text) => html! { span class=(CHANGED_CLASS) { (text) } },
            Cell::Words(spans) => html! {
                @for span in spans.iter() {
                    @if span.is_changed() {
                        span class=(CHANGED_CLASS) { (span.text) }
                    } @else {
                        (span.text)
                    }
                }
            },
        }
    }
}

/// One rendered table row
struct Row<'a> {
    kind: EditKind,
    original: Option<Line<'a>>,
    modified: Option<Line<'a>>,
    original_cell: Cell<'a>,
    modified_cell: Cell<'a>,
}

impl Render for Row<'_> {
    fn render(&self) -> Markup {
        html! {
            tr class=(self.kind.css_class()) {
                td class=(LINE_NUMBER_CLASS) {
                    @if let Some(line) = self.original { (line.number) }
                }
                td class=(TEXT_CLASS) { (self.original_cell) }
                td class=(LINE_NUMBER_CLASS) {
                    @if let Some(line) = self.modified { (line.number) }
                }
                td class=(TEXT_CLASS) { (self.modified_cell) }
            }
        }
    }
}

/// Render an edit script as a side-by-side HTML table
///
/// Returns an empty string when there is nothing to show, which happens for
/// two empty inputs or for identical inputs in [`Mode::ChangedOnly`].
pub fn render<S: AsRef<str>>(
    blocks: &[EditBlock],
    original: &[S],
    modified: &[S],
    mode: Mode,
) -> String {
    let rows: Vec<Row<'_>> = blocks
        .iter()
        .filter(|block| mode == Mode::All || block.is_change())
        .flat_map(|block| block_rows(block, original, modified))
        .collect();

    trace!("rendering {} rows in {} mode", rows.len(), mode);

    if rows.is_empty() {
        return String::new();
    }

    let fragment = html! {
        table class=(TABLE_CLASS) {
            @for row in &rows { (row) }
        }
    }
    .into_string();

    debug_assert!(is_well_formed(&fragment), "renderer produced unbalanced markup");
    fragment
}

fn block_rows<'a, S: AsRef<str>>(
    block: &'a EditBlock,
    original: &'a [S],
    modified: &'a [S],
) -> impl Iterator<Item = Row<'a>> + 'a {
    block
        .line_pairs()
        .enumerate()
        .map(move |(row, (old_index, new_index))| {
            let original_line = old_index.map(|i| Line::at(i, original[i].as_ref()));
            let modified_line = new_index.map(|j| Line::at(j, modified[j].as_ref()));
            let words = block.word_diffs.as_ref().and_then(|diffs| diffs.get(row));
            let original_spans = words.map(|w| &w.original[..]);
            let modified_spans = words.map(|w| &w.modified[..]);

            Row {
                kind: block.kind,
                original: original_line,
                modified: modified_line,
                original_cell: cell(block.kind, original_line, original_spans),
                modified_cell: cell(block.kind, modified_line, modified_spans),
            }
        })
}

fn cell<'a>(kind: EditKind, line: Option<Line<'a>>, spans: Option<&'a [WordSpan]>) -> Cell<'a> {
    let Some(line) = line else {
        return Cell::Empty;
    };

    match (kind, spans) {
        (EditKind::Replace, Some(spans)) => Cell::Words(spans),
        (EditKind::Replace, None) => Cell::Changed(line.text),
        _ => Cell::Plain(line.text),
    }
}
