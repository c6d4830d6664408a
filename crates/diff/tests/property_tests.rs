use doc_diff::{align, diff_words, is_well_formed, overlay, render, EditBlock, EditKind, Mode};
use proptest::prelude::*;
use similar::{capture_diff_slices, Algorithm, DiffOp};

const WORDS: &[&str] = &[
    "a b", "b a", "a b a", "b  a b", " a", "the cat sat", "sat the cat", "cat", "",
];

fn words() -> impl Strategy<Value = &'static str> {
    prop::sample::select(WORDS.to_vec())
}

fn lines() -> impl Strategy<Value = Vec<String>> {
    // A small alphabet makes repeated and partially matching lines likely
    let pool = vec![
        "", "a", "b", "a b", "b a", "b c", "the cat", "the dog", "<b>", "x & y", "\"q\"",
    ];
    prop::collection::vec(prop::sample::select(pool).prop_map(str::to_string), 0..12)
}

fn covered(blocks: &[EditBlock], pick: fn(&EditBlock) -> std::ops::Range<usize>) -> Vec<usize> {
    blocks.iter().flat_map(pick).collect()
}

fn rows(html: &str) -> Vec<String> {
    html.split("<tr ")
        .skip(1)
        .map(|row| format!("<tr {}", row.trim_end_matches("</table>")))
        .collect()
}

fn changed_lines(blocks: &[EditBlock], pick: fn(&EditBlock) -> usize) -> usize {
    blocks.iter().filter(|b| b.is_change()).map(pick).sum()
}

proptest! {
    #[test]
    fn prop_blocks_cover_both_sequences(original in lines(), modified in lines()) {
        let blocks = align(&original, &modified);

        let old_indices = covered(&blocks, |b| b.original_range.clone());
        let new_indices = covered(&blocks, |b| b.modified_range.clone());
        prop_assert_eq!(old_indices, (0..original.len()).collect::<Vec<_>>());
        prop_assert_eq!(new_indices, (0..modified.len()).collect::<Vec<_>>());
    }

    #[test]
    fn prop_equal_blocks_match_exactly(original in lines(), modified in lines()) {
        for block in align(&original, &modified) {
            if block.kind == EditKind::Equal {
                prop_assert_eq!(
                    &original[block.original_range.clone()],
                    &modified[block.modified_range.clone()]
                );
            }
        }
    }

    #[test]
    fn prop_self_alignment_is_one_equal_block(original in lines()) {
        prop_assume!(!original.is_empty());
        let blocks = align(&original, &original);

        prop_assert_eq!(blocks.len(), 1);
        prop_assert_eq!(blocks[0].kind, EditKind::Equal);
    }

    #[test]
    fn prop_matched_lines_equal_reference_lcs(original in lines(), modified in lines()) {
        let ours: usize = align(&original, &modified)
            .iter()
            .filter(|b| b.kind == EditKind::Equal)
            .map(EditBlock::original_len)
            .sum();

        let reference: usize = capture_diff_slices(Algorithm::Myers, &original[..], &modified[..])
            .iter()
            .map(|op| match op {
                DiffOp::Equal { len, .. } => *len,
                _ => 0,
            })
            .sum();

        prop_assert_eq!(ours, reference);
    }

    #[test]
    fn prop_swapping_sides_mirrors_blocks(original in lines(), modified in lines()) {
        let forward = align(&original, &modified);
        let backward = align(&modified, &original);

        prop_assert_eq!(backward, forward.iter().map(EditBlock::mirrored).collect::<Vec<_>>());
    }

    #[test]
    fn prop_swapping_lines_mirrors_word_spans(original in words(), modified in words()) {
        let forward = diff_words(original, modified);

        prop_assert_eq!(diff_words(modified, original), forward.mirrored());
    }

    #[test]
    fn prop_word_spans_round_trip(original in lines(), modified in lines()) {
        for block in align(&original, &modified) {
            let Some(words) = &block.word_diffs else { continue };
            prop_assert_eq!(block.kind, EditKind::Replace);

            let pairs = block.original_range.clone().zip(block.modified_range.clone());
            for (word_diff, (i, j)) in words.iter().zip(pairs) {
                prop_assert_eq!(word_diff.original_text(), original[i].clone());
                prop_assert_eq!(word_diff.modified_text(), modified[j].clone());
            }
        }
    }

    #[test]
    fn prop_changed_only_is_subset_of_all(original in lines(), modified in lines()) {
        let blocks = align(&original, &modified);
        let all = rows(&render(&blocks, &original, &modified, Mode::All));
        let changed = rows(&render(&blocks, &original, &modified, Mode::ChangedOnly));

        let expected = changed_lines(&blocks, EditBlock::row_count);
        prop_assert_eq!(changed.len(), expected);
        for row in &changed {
            prop_assert!(all.contains(row));
        }
        if blocks.iter().any(|b| b.kind == EditKind::Equal) {
            prop_assert!(changed.len() < all.len());
        }
    }

    #[test]
    fn prop_rendered_markup_is_well_formed(original in lines(), modified in lines()) {
        let blocks = align(&original, &modified);

        prop_assert!(is_well_formed(&render(&blocks, &original, &modified, Mode::All)));
        prop_assert!(is_well_formed(&render(&blocks, &original, &modified, Mode::ChangedOnly)));
    }

    #[test]
    fn prop_overlay_only_adds_markers(
        original in lines(),
        modified in lines(),
        query in prop::sample::select(vec!["a", "b c", "the", "<", "&", "x & y", "\""]),
    ) {
        let html = render(&align(&original, &modified), &original, &modified, Mode::All);

        prop_assert_eq!(overlay(&html, Some("")), html.clone());

        let highlighted = overlay(&html, Some(query));
        prop_assert!(is_well_formed(&highlighted));

        let stripped = highlighted
            .replace(r#"<mark class="diff-highlight">"#, "")
            .replace("</mark>", "");
        prop_assert_eq!(stripped, html);
    }
}
