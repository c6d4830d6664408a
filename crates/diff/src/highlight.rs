use std::borrow::Cow;

use html_escape::decode_html_entities;
use log::{debug, warn};
use lol_html::html_content::{ContentType, TextType};
use lol_html::{doc_text, rewrite_str, RewriteStrSettings};
use maud::{html, PreEscaped};

/// CSS class of the search highlight marker
pub const HIGHLIGHT_CLASS: &str = "diff-highlight";

/// Wrap every occurrence of `query` in the text of a rendered fragment
///
/// Matching is literal and case-sensitive, runs left to right without
/// overlaps, and only looks at character data. Tags, attribute values,
/// comments and the bodies of raw text elements such as `<style>` are never
/// touched. Entities are decoded for matching, so `a<b` finds `a&lt;b`, but a
/// marker is never placed inside an entity. A match never spans a tag.
///
/// The fragment must be raw renderer output: running the overlay over its own
/// output is not supported.
pub fn overlay(fragment: &str, query: Option<&str>) -> String {
    let query = match query {
        Some(q) if !q.is_empty() => q,
        _ => return fragment.to_string(),
    };

    let mut pending = String::new();
    let mut hits = 0;

    let result = rewrite_str(
        fragment,
        RewriteStrSettings {
            document_content_handlers: vec![doc_text!(|chunk| {
                if !matches!(chunk.text_type(), TextType::Data) {
                    return Ok(());
                }

                // A text node can arrive split over several chunks
                pending.push_str(chunk.as_str());
                if chunk.last_in_text_node() {
                    let mut highlighted = String::with_capacity(pending.len());
                    hits += highlight_text(&pending, query, &mut highlighted);
                    chunk.replace(&highlighted, ContentType::Html);
                    pending.clear();
                } else {
                    chunk.remove();
                }
                Ok(())
            })],
            ..RewriteStrSettings::default()
        },
    );

    match result {
        Ok(highlighted) => {
            debug!("highlighted {} occurrences of {:?}", hits, query);
            highlighted
        }
        Err(e) => {
            warn!("failed to highlight {:?}: {}", query, e);
            fragment.to_string()
        }
    }
}

/// Copy one encoded text node into `output`, marking matches of `query`
fn highlight_text(text: &str, query: &str, output: &mut String) -> usize {
    let decoded = DecodedText::new(text);
    let mut copied = 0;
    let mut hits = 0;

    for (start, matched) in decoded.plain.match_indices(query) {
        let (Some(from), Some(to)) = (
            decoded.source_offset(start),
            decoded.source_offset(start + matched.len()),
        ) else {
            continue;
        };

        output.push_str(&text[copied..from]);
        output.push_str(&mark(&text[from..to]));
        copied = to;
        hits += 1;
    }

    output.push_str(&text[copied..]);
    hits
}

fn mark(encoded: &str) -> String {
    html! { mark class=(HIGHLIGHT_CLASS) { (PreEscaped(encoded)) } }.into_string()
}

/// A text node with its entities decoded, remembering where each character
/// came from
struct DecodedText {
    plain: String,

    /// (offset in `plain`, offset in the source) at every character or
    /// entity start, plus both lengths as a final entry
    offsets: Vec<(usize, usize)>,
}

impl DecodedText {
    fn new(source: &str) -> Self {
        let mut plain = String::with_capacity(source.len());
        let mut offsets = Vec::with_capacity(source.len() + 1);
        let mut pos = 0;

        while pos < source.len() {
            offsets.push((plain.len(), pos));
            let rest = &source[pos..];

            if let Some((raw, decoded)) = entity_at(rest) {
                plain.push_str(&decoded);
                pos += raw.len();
            } else if let Some(ch) = rest.chars().next() {
                plain.push(ch);
                pos += ch.len_utf8();
            }
        }
        offsets.push((plain.len(), source.len()));

        Self { plain, offsets }
    }

    /// Map a boundary in `plain` back to the source
    fn source_offset(&self, plain_offset: usize) -> Option<usize> {
        self.offsets
            .binary_search_by_key(&plain_offset, |&(plain, _)| plain)
            .ok()
            .map(|index| self.offsets[index].1)
    }
}

/// The character reference at the start of `rest` and what it decodes to
///
/// Only terminated references count; a bare `&` is plain text.
fn entity_at(rest: &str) -> Option<(&str, Cow<'_, str>)> {
    let body = rest.strip_prefix('&')?;
    let end = body.find(|c: char| !(c.is_ascii_alphanumeric() || c == '#'))?;
    if end == 0 || !body[end..].starts_with(';') {
        return None;
    }

    let raw = &rest[..end + 2];
    let decoded = decode_html_entities(raw);
    (decoded != raw).then_some((raw, decoded))
}

/// Count occurrences of `query` across both line sequences
///
/// Occurrences are counted per line without overlaps. An empty query counts
/// nothing.
pub fn count_matches<S: AsRef<str>>(original: &[S], modified: &[S], query: &str) -> usize {
    if query.is_empty() {
        return 0;
    }

    original
        .iter()
        .chain(modified)
        .map(|line| line.as_ref().matches(query).count())
        .sum()
}

/// Keep only the lines that contain `query`
///
/// An empty query keeps every line.
pub fn filter_lines<S: AsRef<str>>(lines: &[S], query: &str) -> Vec<String> {
    lines
        .iter()
        .map(|line| line.as_ref())
        .filter(|line| line.contains(query))
        .map(str::to_string)
        .collect()
}
