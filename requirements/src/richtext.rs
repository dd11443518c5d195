//! Rich-text surface abstraction and HTML helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! The editing widget is an external collaborator. The flows only need its
//! HTML (sent as the description) and its plain text (used for the presence
//! check), plus a way to reset it after a successful submission.

#[cfg(test)]
#[path = "richtext_test.rs"]
mod richtext_test;

/// Editing surface that exposes its content as HTML and as plain text.
pub trait RichTextSurface {
    /// Current content as HTML.
    fn html(&self) -> String;
    /// Current content as visible text.
    fn plain_text(&self) -> String;
    /// Reset the surface to empty.
    fn clear(&self);
}

/// Whether `text` contains anything a reader would see.
///
/// Whitespace (including non-breaking space) and zero-width characters do
/// not count.
#[must_use]
pub fn has_visible_text(text: &str) -> bool {
    text.chars()
        .any(|c| !c.is_whitespace() && !matches!(c, '\u{200b}' | '\u{200c}' | '\u{200d}' | '\u{feff}'))
}

/// Strip all markup from `html`, leaving its text content.
#[must_use]
pub fn plain_text_from_html(html: &str) -> String {
    let stripped = ammonia::Builder::empty().clean(html).to_string();
    decode_basic_entities(&stripped)
}

/// Sanitize untrusted HTML for rendering.
#[must_use]
pub fn sanitize_html(html: &str) -> String {
    ammonia::clean(html)
}

fn decode_basic_entities(text: &str) -> String {
    text.replace("&nbsp;", "\u{a0}")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
        .replace("&amp;", "&")
}
