// Core diff library for doccompare
// This crate aligns two line sequences and renders the result as annotated HTML

mod compare_options;
mod diff_renderer;
mod edit_block;
mod error;
mod highlight;
mod lcs;
mod line_aligner;
mod markup;
mod page;
mod text_diff;
mod word_diff;

pub use compare_options::{CompareOptions, Comparison};
pub use diff_renderer::{
    render, Mode, CHANGED_CLASS, LINE_NUMBER_CLASS, TABLE_CLASS, TEXT_CLASS,
};
pub use edit_block::{DiffStats, EditBlock, EditKind, Line, WordDiff, WordKind, WordSpan};
pub use error::{CompareError, Side};
pub use highlight::{count_matches, filter_lines, overlay, HIGHLIGHT_CLASS};
pub use line_aligner::{align, align_lines};
pub use markup::is_well_formed;
pub use page::{render_page, STYLESHEET};
pub use text_diff::TextDiff;
pub use word_diff::{diff_words, tokenize};
