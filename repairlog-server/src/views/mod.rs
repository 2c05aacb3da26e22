//! HTML rendering
//!
//! Views are plain functions from records to markup. They hold no logic
//! beyond formatting; every piece of user text goes through [`escape`].

pub mod computers;

use axum::http::StatusCode;

/// Escape HTML special characters.
pub fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Wrap a body fragment in the shared page shell.
///
/// `title` is escaped here; `body` must already be safe markup.
pub fn layout(title: &str, body: &str) -> String {
    format!(
        "<!doctype html><html><head><meta charset=\"utf-8\">\
<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\
<title>{title} - Repairlog</title>\
<link rel=\"stylesheet\" href=\"/static/style.css\">\
</head><body>\
<header><a href=\"/\">Repairlog</a> <a href=\"/add\">Add computer</a></header>\
<main>{body}</main>\
</body></html>",
        title = escape(title),
    )
}

/// Minimal error page: status code and reason, nothing else.
pub fn error_page(status: StatusCode) -> String {
    let reason = status.canonical_reason().unwrap_or("Error");
    layout(
        reason,
        &format!("<h1>{} {}</h1>", status.as_u16(), escape(reason)),
    )
}
