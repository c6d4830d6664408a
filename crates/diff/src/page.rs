use maud::{html, PreEscaped, DOCTYPE};

/// Default styles for every class a rendered fragment uses
pub const STYLESHEET: &str = r#"
body { font-family: "Sarabun", "Segoe UI", sans-serif; margin: 0; background: #f8f9fa; }
.diff-container { max-height: 100vh; overflow: auto; padding: 16px; }
.diff-empty { color: #6c757d; font-style: italic; }
table.diff { width: 100%; border-collapse: collapse; table-layout: fixed; font-family: ui-monospace, monospace; font-size: 13px; }
table.diff td { padding: 2px 6px; vertical-align: top; white-space: pre-wrap; word-break: break-word; }
td.diff-lineno { width: 3.5em; color: #adb5bd; text-align: right; user-select: none; }
tr.diff-insert td.diff-text { background: #e6ffec; }
tr.diff-delete td.diff-text { background: #ffebe9; }
tr.diff-replace td.diff-text { background: #fff8c5; }
span.diff-changed { background: #ffd33d; border-radius: 2px; }
mark.diff-highlight { background: #ff9f43; color: inherit; }
"#;

/// Wrap a rendered fragment into a standalone HTML document
///
/// An empty fragment is shown as a "no differences" notice.
pub fn render_page(title: &str, fragment: &str) -> String {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1";
                title { (title) }
                style { (PreEscaped(STYLESHEET)) }
            }
            body {
                div class="diff-container" {
                    @if fragment.is_empty() {
                        p class="diff-empty" { "No differences found." }
                    } @else {
                        (PreEscaped(fragment))
                    }
                }
            }
        }
    }
    .into_string()
}
