//! HTML sanitization for user-submitted text.
//!
//! Free-text contact fields are stripped of markup before they reach
//! storage. Tags are removed and their inner text kept, except for elements
//! whose body is never rendered as text (`script`, `style`, `textarea`,
//! `option`), which are dropped together with their content.

/// Elements whose entire body is discarded along with the tags.
const NON_TEXT_TAGS: [&str; 4] = ["script", "style", "textarea", "option"];

/// Strip HTML markup from a text value.
///
/// An unterminated tag swallows the remainder of the input, so a truncated
/// `<scr` can never survive into stored text.
///
/// # Examples
///
/// ```
/// use rolodex_core::sanitize::strip_html;
///
/// assert_eq!(strip_html("<script>alert(1)</script>Bob"), "Bob");
/// assert_eq!(strip_html("<b>Ann</b> Lee"), "Ann Lee");
/// assert_eq!(strip_html("plain text"), "plain text");
/// ```
pub fn strip_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut rest = input;

    while let Some(open) = rest.find('<') {
        out.push_str(&rest[..open]);
        let after = &rest[open + 1..];
        let Some(close) = after.find('>') else {
            return out;
        };
        let tag = &after[..close];
        rest = &after[close + 1..];

        if let Some(name) = opening_tag_name(tag) {
            if NON_TEXT_TAGS.contains(&name.as_str()) {
                rest = skip_element_body(rest, &name);
            }
        }
    }

    out.push_str(rest);
    out
}

/// Extract the lowercased element name from tag contents, or `None` for
/// closing tags, comments, and other non-element markup.
fn opening_tag_name(tag: &str) -> Option<String> {
    if tag.starts_with('/') || tag.starts_with('!') || tag.starts_with('?') {
        return None;
    }
    let name: String = tag
        .chars()
        .take_while(|c| c.is_ascii_alphanumeric())
        .collect::<String>()
        .to_ascii_lowercase();
    if name.is_empty() {
        None
    } else {
        Some(name)
    }
}

/// Skip past the matching closing tag, discarding everything in between.
/// Without a closing tag the rest of the input is discarded.
fn skip_element_body<'a>(rest: &'a str, name: &str) -> &'a str {
    // ASCII lowercasing keeps byte offsets aligned with the original.
    let lower = rest.to_ascii_lowercase();
    let needle = format!("</{name}");
    match lower.find(&needle) {
        Some(at) => match rest[at..].find('>') {
            Some(gt) => &rest[at + gt + 1..],
            None => "",
        },
        None => "",
    }
}
