use anyhow::Result;
use doc_diff::{align, render, DiffStats, Mode, TextDiff};

fn main() -> Result<()> {
    // Two sample texts to compare
    let text1 = "This is the first line.\nHere is the second line.\nAnd the third line.";
    let text2 = "This is the first line.\nHere is a different second line.\nAnd the third line.\nPlus a new fourth line.";

    let original = TextDiff::split_lines(text1);
    let modified = TextDiff::split_lines(text2);
    let blocks = align(&original, &modified);

    // Print the edit script
    println!("Edit script:");
    for block in &blocks {
        println!(
            "  {:<8} original {:?} modified {:?}",
            block.kind.to_string(),
            block.original_range,
            block.modified_range
        );
    }

    let stats = DiffStats::from_blocks(&blocks);
    println!("\nDiff statistics:");
    println!("  Unchanged lines: {}", stats.unchanged);
    println!("  Replaced lines: {}", stats.replaced);
    println!("  Inserted lines: {}", stats.inserted);
    println!("  Deleted lines: {}", stats.deleted);

    println!("\nChanged lines only:");
    println!("{}", render(&blocks, &original, &modified, Mode::ChangedOnly));

    Ok(())
}
