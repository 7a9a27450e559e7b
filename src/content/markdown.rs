//! Markdown rendering for content pages

use pulldown_cmark::{html, Event, Options, Parser, Tag, TagEnd};

/// Markdown renderer
pub struct MarkdownRenderer {
    options: Options,
    external_links: bool,
}

impl MarkdownRenderer {
    /// Create a new markdown renderer
    pub fn new() -> Self {
        // No YAML metadata blocks; front-matter is handled by FrontMatter::parse()
        let options = Options::ENABLE_TABLES
            | Options::ENABLE_FOOTNOTES
            | Options::ENABLE_STRIKETHROUGH
            | Options::ENABLE_TASKLISTS
            | Options::ENABLE_SMART_PUNCTUATION
            | Options::ENABLE_HEADING_ATTRIBUTES;
        Self {
            options,
            external_links: true,
        }
    }

    /// Open absolute http(s) links in a new tab
    pub fn with_external_links(mut self, enabled: bool) -> Self {
        self.external_links = enabled;
        self
    }

    /// Render markdown to HTML
    pub fn render(&self, markdown: &str) -> String {
        let parser = Parser::new_ext(markdown, self.options);

        let mut output = String::new();
        if !self.external_links {
            html::push_html(&mut output, parser);
            return output;
        }

        let mut events: Vec<Event> = Vec::new();
        let mut in_external = false;
        for event in parser {
            match event {
                Event::Start(Tag::Link {
                    dest_url, title, ..
                }) if is_external(&dest_url) => {
                    in_external = true;
                    let title_attr = if title.is_empty() {
                        String::new()
                    } else {
                        format!(r#" title="{}""#, crate::helpers::html_escape(&title))
                    };
                    events.push(Event::Html(
                        format!(
                            r#"<a href="{}"{} target="_blank" rel="noopener noreferrer">"#,
                            crate::helpers::html_escape(&dest_url),
                            title_attr
                        )
                        .into(),
                    ));
                }
                Event::End(TagEnd::Link) if in_external => {
                    in_external = false;
                    events.push(Event::Html("</a>".into()));
                }
                other => events.push(other),
            }
        }

        html::push_html(&mut output, events.into_iter());
        output
    }
}

impl Default for MarkdownRenderer {
    fn default() -> Self {
        Self::new()
    }
}

fn is_external(url: &str) -> bool {
    url.starts_with("http://") || url.starts_with("https://")
}
