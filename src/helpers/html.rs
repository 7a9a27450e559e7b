//! HTML helper functions

use super::url::{encode_component, url_for};
use crate::config::SiteConfig;

/// Build a `mailto:` href with a URL-encoded subject line
///
/// # Examples
/// ```ignore
/// mailto("club@example.com", Some("Sponsorship Inquiry"))
/// // -> "mailto:club@example.com?subject=Sponsorship%20Inquiry"
/// ```
pub fn mailto(email: &str, subject: Option<&str>) -> String {
    match subject {
        Some(subject) if !subject.is_empty() => {
            format!("mailto:{}?subject={}", email, encode_component(subject))
        }
        _ => format!("mailto:{}", email),
    }
}

/// Generate a feed link tag
pub fn feed_tag(config: &SiteConfig, path: &str) -> String {
    format!(
        r#"<link rel="alternate" href="{}" title="{}" type="application/atom+xml">"#,
        url_for(config, path),
        html_escape(&config.title)
    )
}

/// Generate meta generator tag
pub fn meta_generator() -> String {
    format!(
        r#"<meta name="generator" content="clubsite {}">"#,
        env!("CARGO_PKG_VERSION")
    )
}

pub fn is_external(path: &str) -> bool {
    path.starts_with("http://") || path.starts_with("https://") || path.starts_with("//")
}

/// Escape HTML special characters
pub fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

/// Truncate a string to at most `length` characters, omission included
pub fn truncate(s: &str, length: usize, omission: Option<&str>) -> String {
    let omission = omission.unwrap_or("...");

    if s.chars().count() <= length {
        s.to_string()
    } else {
        let truncated: String = s
            .chars()
            .take(length.saturating_sub(omission.chars().count()))
            .collect();
        format!("{}{}", truncated.trim_end(), omission)
    }
}

/// Initials for avatar placeholders ("Alex Chen" -> "AC")
pub fn initials(name: &str) -> String {
    name.split_whitespace()
        .filter_map(|word| word.chars().next())
        .flat_map(char::to_uppercase)
        .take(2)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mailto_encodes_subject() {
        assert_eq!(
            mailto("club@example.com", Some("Sponsorship Inquiry")),
            "mailto:club@example.com?subject=Sponsorship%20Inquiry"
        );
        assert_eq!(mailto("club@example.com", None), "mailto:club@example.com");
    }

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("Hello World", 8, None), "Hello...");
        assert_eq!(truncate("Hi", 10, None), "Hi");
    }

    #[test]
    fn test_initials() {
        assert_eq!(initials("Alex Chen"), "AC");
        assert_eq!(initials("maria de la cruz"), "MD");
        assert_eq!(initials(""), "");
    }

    #[test]
    fn test_html_escape() {
        assert_eq!(html_escape(r#"<a href="x">'&'</a>"#), "&lt;a href=&quot;x&quot;&gt;&#39;&amp;&#39;&lt;/a&gt;");
    }
}
