//! Computer list, add form, and detail pages

use std::fmt::Write as _;

use crate::db::{Computer, ComputerWithRepairs};

use super::{escape, layout};

/// Timestamp format for repair entries.
const DATE_FORMAT: &str = "%Y-%m-%d %H:%M UTC";

/// List/search page. `query` is echoed back into the search box.
pub fn index(computers: &[Computer], query: Option<&str>) -> String {
    let query = query.unwrap_or_default();
    let mut body = String::new();

    body.push_str("<h1>Computers</h1>");
    let _ = write!(
        body,
        "<form method=\"get\" action=\"/\" class=\"search\">\
<input type=\"search\" name=\"q\" value=\"{}\" placeholder=\"Search by name\">\
<button type=\"submit\">Search</button></form>",
        escape(query)
    );

    if !query.is_empty() {
        let _ = write!(
            body,
            "<p class=\"results\">{} result(s) for &quot;{}&quot; <a href=\"/\">clear</a></p>",
            computers.len(),
            escape(query)
        );
    }

    if computers.is_empty() {
        body.push_str("<p class=\"empty\">No computers found.</p>");
    } else {
        body.push_str("<ul class=\"computers\">");
        for computer in computers {
            let _ = write!(
                body,
                "<li><a href=\"/computer/{}\">{}</a> <span class=\"specs\">{}</span></li>",
                computer.id,
                escape(&computer.name),
                escape(&computer.specs)
            );
        }
        body.push_str("</ul>");
    }

    layout("Computers", &body)
}

/// Empty add-computer form.
pub fn add_form() -> String {
    let body = "<h1>Add computer</h1>\
<form method=\"post\" action=\"/add\">\
<label>Name <input type=\"text\" name=\"name\" maxlength=\"100\" required></label>\
<label>Specs <textarea name=\"specs\" required></textarea></label>\
<label>Software <textarea name=\"software\"></textarea></label>\
<button type=\"submit\">Save</button>\
</form>";

    layout("Add computer", body)
}

/// Detail page: attributes, repair history, and the add-repair form.
pub fn detail(view: &ComputerWithRepairs) -> String {
    let computer = &view.computer;
    let mut body = String::new();

    let _ = write!(
        body,
        "<h1>{}</h1><dl><dt>Specs</dt><dd>{}</dd><dt>Software</dt><dd>{}</dd></dl>",
        escape(&computer.name),
        escape(&computer.specs),
        computer
            .software
            .as_deref()
            .map(escape)
            .unwrap_or_else(|| "<em>none</em>".to_string())
    );

    body.push_str("<h2>Repair history</h2>");
    if view.repairs.is_empty() {
        body.push_str("<p class=\"empty\">No repairs recorded.</p>");
    } else {
        body.push_str("<ol class=\"repairs\">");
        for repair in &view.repairs {
            let _ = write!(
                body,
                "<li><time datetime=\"{}\">{}</time> {}</li>",
                repair.date.to_rfc3339(),
                repair.date.format(DATE_FORMAT),
                escape(&repair.detail)
            );
        }
        body.push_str("</ol>");
    }

    let _ = write!(
        body,
        "<form method=\"post\" action=\"/computer/{}/add_repair\">\
<label>Repair detail <textarea name=\"detail\" required></textarea></label>\
<button type=\"submit\">Add repair</button></form>",
        computer.id
    );

    layout(&computer.name, &body)
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};

    use super::*;
    use crate::db::Repair;

    fn computer(id: i64, name: &str) -> Computer {
        Computer {
            id,
            name: name.into(),
            specs: "16GB RAM".into(),
            software: None,
        }
    }

    #[test]
    fn index_links_each_computer() {
        let html = index(&[computer(1, "Dell XPS"), computer(2, "ThinkPad")], None);
        assert!(html.contains("<a href=\"/computer/1\">Dell XPS</a>"));
        assert!(html.contains("<a href=\"/computer/2\">ThinkPad</a>"));
        assert!(!html.contains("result(s)"));
    }

    #[test]
    fn index_echoes_query_escaped() {
        let html = index(&[], Some("\"><script>"));
        assert!(html.contains("value=\"&quot;&gt;&lt;script&gt;\""));
        assert!(html.contains("No computers found."));
        assert!(!html.contains("<script>"));
    }

    #[test]
    fn detail_lists_repairs_and_form() {
        let view = ComputerWithRepairs {
            computer: computer(7, "Dell XPS"),
            repairs: vec![Repair {
                id: 1,
                date: Utc.with_ymd_and_hms(2024, 3, 1, 9, 30, 0).unwrap(),
                detail: "Replaced <battery>".into(),
                computer_id: 7,
            }],
        };

        let html = detail(&view);
        assert!(html.contains("2024-03-01 09:30 UTC"));
        assert!(html.contains("Replaced &lt;battery&gt;"));
        assert!(html.contains("action=\"/computer/7/add_repair\""));
        assert!(html.contains("<em>none</em>"));
    }
}
