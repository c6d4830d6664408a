use html5gum::{State, Token, Tokenizer};

/// Elements that never take a closing tag
const VOID_ELEMENTS: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "param", "source",
    "track", "wbr",
];

/// Check that every element opened in `html` is closed in the right order
///
/// Any tokenizer error, such as a tag cut off at the end of the input, also
/// makes the markup ill-formed.
pub fn is_well_formed(html: &str) -> bool {
    let mut tokenizer = Tokenizer::new(html);
    let mut open: Vec<String> = Vec::new();

    while let Some(token) = tokenizer.next() {
        let Ok(token) = token else {
            return false;
        };

        match token {
            Token::StartTag(tag) => {
                let name = String::from_utf8_lossy(&tag.name).to_ascii_lowercase();
                if tag.self_closing || VOID_ELEMENTS.contains(&name.as_str()) {
                    continue;
                }

                match name.as_str() {
                    "script" | "style" => tokenizer.set_state(State::ScriptData),
                    "textarea" | "title" => tokenizer.set_state(State::RcData),
                    _ => {}
                }
                open.push(name);
            }
            Token::EndTag(tag) => {
                let name = String::from_utf8_lossy(&tag.name).to_ascii_lowercase();
                if open.pop().as_deref() != Some(name.as_str()) {
                    return false;
                }
            }
            Token::Error(_) => return false,
            Token::String(_) | Token::Comment(_) | Token::Doctype(_) => {}
        }
    }

    open.is_empty()
}
