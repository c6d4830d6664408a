use anyhow::Result;
use doc_diff::{render_page, CompareOptions, Mode};

fn main() -> Result<()> {
    let code1 = "function calculateTotal(items) {\n    let sum = 0;\n    for (let i = 0; i < items.length; i++) {\n        sum += items[i].price;\n    }\n    return sum;\n}";
    let code2 = "function calculateTotal(items) {\n    let sum = 0;\n    for (let i = 0; i < items.length; i++) {\n        sum += items[i].price * items[i].quantity;\n    }\n    return sum;\n}";

    let original: Vec<&str> = code1.lines().collect();
    let modified: Vec<&str> = code2.lines().collect();

    // A search term forces the full view so matches keep their context
    let result = CompareOptions::default()
        .mode(Mode::ChangedOnly)
        .search("items")
        .compare(&original, &modified)?;

    println!("Rendered in {} mode with {} matches", result.mode, result.match_count);
    println!("{}", render_page("calculateTotal", &result.html));

    Ok(())
}
