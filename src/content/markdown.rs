//! Markdown rendering for content bodies

use pulldown_cmark::{html, Options, Parser};

/// Markdown renderer for gallery and page bodies
#[derive(Debug, Clone)]
pub struct MarkdownRenderer {
    options: Options,
}

impl MarkdownRenderer {
    /// Create a new markdown renderer
    pub fn new() -> Self {
        // Front matter is stripped before rendering, so no metadata blocks
        let options = Options::ENABLE_TABLES
            | Options::ENABLE_STRIKETHROUGH
            | Options::ENABLE_SMART_PUNCTUATION
            | Options::ENABLE_TASKLISTS;
        Self { options }
    }

    /// Render markdown to HTML
    pub fn render(&self, markdown: &str) -> String {
        let parser = Parser::new_ext(markdown, self.options);
        let mut out = String::with_capacity(markdown.len() * 3 / 2);
        html::push_html(&mut out, parser);
        out
    }
}

impl Default for MarkdownRenderer {
    fn default() -> Self {
        Self::new()
    }
}
