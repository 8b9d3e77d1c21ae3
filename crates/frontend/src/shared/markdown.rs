//! Markdown rendering for assistant messages.
//!
//! Formatting (bold, italic, lists, links) is rendered to HTML; raw HTML in
//! the source is downgraded to text so assistant content is never executed
//! as active markup.

use pulldown_cmark::{html, Event, Options, Parser};

pub fn markdown_to_html(text: &str) -> String {
    let parser = Parser::new_ext(text, Options::empty()).map(|event| match event {
        Event::Html(raw) => Event::Text(raw),
        Event::InlineHtml(raw) => Event::Text(raw),
        event => event,
    });

    let mut out = String::new();
    html::push_html(&mut out, parser);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_renders_bold() {
        assert_eq!(markdown_to_html("**bold**"), "<p><strong>bold</strong></p>\n");
    }

    #[test]
    fn test_renders_list_and_link() {
        let out = markdown_to_html("- [site](https://example.com)\n- second");
        assert!(out.contains("<ul>"));
        assert!(out.contains("<a href=\"https://example.com\">site</a>"));
        assert!(out.contains("<li>second</li>"));
    }

    #[test]
    fn test_inline_html_is_neutralized() {
        let out = markdown_to_html("hi <script>alert(1)</script>");
        assert!(!out.contains("<script>"));
        assert!(out.contains("&lt;script&gt;"));
    }

    #[test]
    fn test_html_block_is_neutralized() {
        let out = markdown_to_html("<div onclick=\"x()\">block</div>");
        assert!(!out.contains("<div"));
    }
}
