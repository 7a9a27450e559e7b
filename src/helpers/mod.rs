//! Helper functions for templates
//!
//! Plain functions for Rust callers, plus `Helpers`, which exposes the
//! config-aware ones to Tera as filters.

mod date;
mod html;
mod url;

use std::collections::HashMap;
use std::sync::Arc;
use tera::{try_get_value, Tera, Value};

pub use date::*;
pub use html::*;
pub use url::*;

use crate::config::SiteConfig;

/// Collection of all template helpers bound to one site configuration
#[derive(Clone)]
pub struct Helpers {
    config: Arc<SiteConfig>,
}

impl Helpers {
    /// Create a new helpers instance
    pub fn new(config: SiteConfig) -> Self {
        Self {
            config: Arc::new(config),
        }
    }

    /// Resolve a named date style (`default`, `long`, `short`) or pass an
    /// explicit format through
    pub fn date_format<'a>(&'a self, style: &'a str) -> &'a str {
        match style {
            "default" => &self.config.date_format,
            "long" => &self.config.long_date_format,
            "short" => &self.config.short_date_format,
            explicit => explicit,
        }
    }

    /// Register every helper as a Tera filter
    pub fn register(&self, tera: &mut Tera) {
        let helpers = self.clone();
        tera.register_filter(
            "url_for",
            move |value: &Value, _: &HashMap<String, Value>| -> tera::Result<Value> {
                let path = try_get_value!("url_for", "value", String, value);
                Ok(Value::String(url_for(&helpers.config, &path)))
            },
        );

        let helpers = self.clone();
        tera.register_filter(
            "full_url_for",
            move |value: &Value, _: &HashMap<String, Value>| -> tera::Result<Value> {
                let path = try_get_value!("full_url_for", "value", String, value);
                Ok(Value::String(full_url_for(&helpers.config, &path)))
            },
        );

        let helpers = self.clone();
        tera.register_filter(
            "format_date",
            move |value: &Value, args: &HashMap<String, Value>| -> tera::Result<Value> {
                let raw = try_get_value!("format_date", "value", String, value);
                let style = match args.get("style") {
                    Some(val) => try_get_value!("format_date", "style", String, val),
                    None => "default".to_string(),
                };
                let date = chrono::NaiveDate::parse_from_str(&raw, "%Y-%m-%d").map_err(|e| {
                    tera::Error::msg(format!(
                        "Filter `format_date` received an invalid date {:?}: {}",
                        raw, e
                    ))
                })?;
                Ok(Value::String(format_date(&date, helpers.date_format(&style))))
            },
        );

        tera.register_filter("html_escape", html_escape_filter);
        tera.register_filter("mailto", mailto_filter);
        tera.register_filter("truncate_chars", truncate_chars_filter);
        tera.register_filter("initials", initials_filter);
    }
}

/// Tera filter: escape HTML special characters, leaving `/` readable in URLs
fn html_escape_filter(value: &Value, _args: &HashMap<String, Value>) -> tera::Result<Value> {
    let s = try_get_value!("html_escape", "value", String, value);
    Ok(Value::String(html_escape(&s)))
}

/// Tera filter: build a mailto href from an address
fn mailto_filter(value: &Value, args: &HashMap<String, Value>) -> tera::Result<Value> {
    let email = try_get_value!("mailto", "value", String, value);
    let subject = match args.get("subject") {
        Some(val) => Some(try_get_value!("mailto", "subject", String, val)),
        None => None,
    };
    Ok(Value::String(mailto(&email, subject.as_deref())))
}

/// Tera filter: truncate by character count
fn truncate_chars_filter(value: &Value, args: &HashMap<String, Value>) -> tera::Result<Value> {
    let s = try_get_value!("truncate_chars", "value", String, value);
    let length = match args.get("length") {
        Some(val) => try_get_value!("truncate_chars", "length", usize, val),
        None => 150,
    };
    Ok(Value::String(truncate(&s, length, None)))
}

fn initials_filter(value: &Value, _args: &HashMap<String, Value>) -> tera::Result<Value> {
    let name = try_get_value!("initials", "value", String, value);
    Ok(Value::String(initials(&name)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tera::Context;

    fn render(template: &str, context: &Context) -> String {
        let mut config = SiteConfig::default();
        config.root = "/club/".to_string();
        let mut tera = Tera::default();
        Helpers::new(config).register(&mut tera);
        tera.render_str(template, context).unwrap()
    }

    #[test]
    fn test_url_for_filter() {
        assert_eq!(render(r#"{{ "events/" | url_for }}"#, &Context::new()), "/club/events/");
    }

    #[test]
    fn test_date_filter_styles() {
        let mut context = Context::new();
        context.insert("date", "2025-02-05");
        assert_eq!(render("{{ date | format_date }}", &context), "February 5, 2025");
        assert_eq!(
            render(r#"{{ date | format_date(style="long") }}"#, &context),
            "Wednesday, February 5, 2025"
        );
        assert_eq!(render(r#"{{ date | format_date(style="short") }}"#, &context), "Wed, Feb 5");
        assert_eq!(render(r#"{{ date | format_date(style="YYYY") }}"#, &context), "2025");
    }

    #[test]
    fn test_html_escape_filter_keeps_slashes() {
        let mut context = Context::new();
        context.insert("url", "https://example.com/a?b=1&c=2");
        assert_eq!(
            render("{{ url | html_escape }}", &context),
            "https://example.com/a?b=1&amp;c=2"
        );
    }

    #[test]
    fn test_mailto_filter() {
        let mut context = Context::new();
        context.insert("email", "club@example.com");
        assert_eq!(
            render(r#"{{ email | mailto(subject="Sponsorship Inquiry") }}"#, &context),
            "mailto:club@example.com?subject=Sponsorship%20Inquiry"
        );
    }
}
