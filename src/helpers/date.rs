//! Date helper functions

use chrono::NaiveDate;

/// Moment.js-style tokens and their chrono equivalents, longest first
const TOKENS: [(&str, &str); 14] = [
    ("YYYY", "%Y"),
    ("YY", "%y"),
    ("MMMM", "%B"),
    ("MMM", "%b"),
    ("MM", "%m"),
    ("M", "%-m"),
    ("dddd", "%A"),
    ("ddd", "%a"),
    ("DD", "%d"),
    ("D", "%-d"),
    ("HH", "%H"),
    ("hh", "%I"),
    ("mm", "%M"),
    ("ss", "%S"),
];

/// Format a date using a Moment.js-compatible format string
///
/// Text inside `[...]` is copied verbatim.
///
/// # Examples
/// ```ignore
/// format_date(&date, "MMMM D, YYYY") // -> "February 12, 2025"
/// ```
pub fn format_date(date: &NaiveDate, format: &str) -> String {
    date.format(&moment_to_chrono_format(format)).to_string()
}

/// Format a date as an RFC 3339 timestamp at midnight UTC
pub fn date_xml(date: &NaiveDate) -> String {
    date.format("%Y-%m-%dT00:00:00Z").to_string()
}

/// Convert Moment.js format to chrono format
///
/// Tokens are matched left to right, longest first, so `MMMM` is never read
/// as four `M`s and already-converted output is never rescanned.
fn moment_to_chrono_format(format: &str) -> String {
    let mut result = String::with_capacity(format.len() * 2);
    let mut rest = format;

    'outer: while let Some(c) = rest.chars().next() {
        if c == '[' {
            if let Some(end) = rest.find(']') {
                push_literal(&mut result, &rest[1..end]);
                rest = &rest[end + 1..];
                continue;
            }
        }

        for (token, spec) in TOKENS {
            if let Some(after) = rest.strip_prefix(token) {
                result.push_str(spec);
                rest = after;
                continue 'outer;
            }
        }

        push_literal(&mut result, &rest[..c.len_utf8()]);
        rest = &rest[c.len_utf8()..];
    }

    result
}

fn push_literal(out: &mut String, text: &str) {
    for c in text.chars() {
        if c == '%' {
            out.push_str("%%");
        } else {
            out.push(c);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 2, 5).unwrap()
    }

    #[test]
    fn test_format_date() {
        assert_eq!(format_date(&date(), "YYYY-MM-DD"), "2025-02-05");
        assert_eq!(format_date(&date(), "MMMM D, YYYY"), "February 5, 2025");
        assert_eq!(format_date(&date(), "dddd, MMMM D, YYYY"), "Wednesday, February 5, 2025");
        assert_eq!(format_date(&date(), "ddd, MMM D"), "Wed, Feb 5");
    }

    #[test]
    fn test_literal_text() {
        assert_eq!(format_date(&date(), "[Day] D [of] MMMM"), "Day 5 of February");
        assert_eq!(format_date(&date(), "D%"), "5%");
    }

    #[test]
    fn test_moment_to_chrono() {
        assert_eq!(moment_to_chrono_format("YYYY-MM-DD"), "%Y-%m-%d");
        assert_eq!(moment_to_chrono_format("HH:mm:ss"), "%H:%M:%S");
        assert_eq!(moment_to_chrono_format("MMMM"), "%B");
    }

    #[test]
    fn test_date_xml() {
        assert_eq!(date_xml(&date()), "2025-02-05T00:00:00Z");
    }
}
