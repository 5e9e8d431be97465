//! HTML rendering for the history page.

use lw_03_job_orchestrator::RequestRecord;
use std::fmt::Write as _;

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Renders records as the history table fragment.
pub fn history_table(records: &[RequestRecord]) -> String {
    let mut html = String::from(
        "<table class=\"table\">\n\
         <thead>\n\
         <tr><th>ID</th><th>IP</th><th>Size</th><th>Created At</th></tr>\n\
         </thead>\n\
         <tbody>",
    );

    for record in records {
        // Writing into a String cannot fail.
        let _ = write!(
            html,
            "\n<tr><td>{}</td><td>{}</td><td>{}</td><td>{}</td></tr>",
            record.id,
            escape_html(record.client_key.as_str()),
            record.matrix_size,
            record.created_at.format(TIMESTAMP_FORMAT),
        );
    }

    html.push_str("\n</tbody>\n</table>");
    html
}

/// Escapes the five HTML-significant characters.
pub fn escape_html(raw: &str) -> String {
    let mut escaped = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use proptest::prelude::*;
    use shared_types::ClientKey;

    #[test]
    fn test_renders_rows() {
        let records = vec![RequestRecord {
            id: 7,
            client_key: ClientKey::new("10.0.0.1"),
            matrix_size: 250,
            created_at: Utc.with_ymd_and_hms(2024, 3, 9, 14, 5, 6).unwrap(),
        }];

        let html = history_table(&records);
        assert!(html.contains("<th>Created At</th>"));
        assert!(html.contains(
            "<tr><td>7</td><td>10.0.0.1</td><td>250</td><td>2024-03-09 14:05:06</td></tr>"
        ));
    }

    #[test]
    fn test_empty_table() {
        let html = history_table(&[]);
        assert!(html.contains("<tbody>\n</tbody>"));
    }

    #[test]
    fn test_escapes_key() {
        assert_eq!(
            escape_html("<a href=\"x\">&'</a>"),
            "&lt;a href=&quot;x&quot;&gt;&amp;&#39;&lt;/a&gt;"
        );
    }

    proptest! {
        #[test]
        fn prop_escaped_text_has_no_markup(raw in ".*") {
            let escaped = escape_html(&raw);
            prop_assert!(!escaped.contains('<'));
            prop_assert!(!escaped.contains('>'));
            prop_assert!(!escaped.contains('"'));
        }
    }
}
