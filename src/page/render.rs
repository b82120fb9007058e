//! HTML rendering of the page.

use std::fmt::Write;

use super::view::PageView;

/// Escape text for use in element content and quoted attributes.
pub fn escape_html(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
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

/// Render the full page document.
pub fn render_page(view: &PageView) -> String {
    let mut html = String::with_capacity(2048);
    let filter = escape_html(&view.filter);

    html.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n");
    html.push_str("<meta charset=\"utf-8\">\n<title>Animals</title>\n</head>\n<body>\n");
    html.push_str("<main>\n<h1>Animals</h1>\n");

    if view.loading {
        html.push_str("<p class=\"loading\">Loading...</p>\n");
    }
    if let Some(error) = &view.error {
        let _ = writeln!(html, "<p class=\"error\">{}</p>", escape_html(error));
    }

    // Filter box and Refresh both resubmit the current filter.
    html.push_str("<section class=\"controls\">\n<form method=\"get\" action=\"/\">\n");
    let _ = writeln!(
        html,
        "<input name=\"filter\" value=\"{filter}\" placeholder=\"Filter by name...\">"
    );
    let _ = writeln!(html, "<span class=\"count\">{} shown</span>", view.count);
    html.push_str("<button type=\"submit\">Refresh</button>\n</form>\n</section>\n");

    if view.show_empty {
        html.push_str("<p class=\"empty\">No animals yet.</p>\n");
    }

    html.push_str("<ul>\n");
    for row in &view.rows {
        let _ = writeln!(
            html,
            "<li data-id=\"{}\"><strong>{}</strong> <span>added {}</span></li>",
            row.id,
            escape_html(&row.name),
            escape_html(&row.added)
        );
    }
    html.push_str("</ul>\n");

    let disabled = if view.input_disabled { " disabled" } else { "" };
    html.push_str("<form method=\"post\" action=\"/\" class=\"create\">\n");
    let _ = writeln!(html, "<input type=\"hidden\" name=\"filter\" value=\"{filter}\">");
    let _ = writeln!(
        html,
        "<input name=\"name\" value=\"{}\" placeholder=\"New animal name\"{disabled}>",
        escape_html(&view.new_name)
    );
    let _ = writeln!(
        html,
        "<button type=\"submit\"{disabled}>{}</button>",
        view.submit_label
    );
    html.push_str("</form>\n</main>\n</body>\n</html>\n");

    html
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::page::AnimalRow;

    fn view() -> PageView {
        PageView {
            rows: Vec::new(),
            count: 0,
            filter: String::new(),
            new_name: String::new(),
            loading: false,
            error: None,
            show_empty: false,
            submit_label: "Add",
            input_disabled: false,
        }
    }

    #[test]
    fn escapes_markup() {
        assert_eq!(
            escape_html(r#"<b>"Rex" & 'Fido'</b>"#),
            "&lt;b&gt;&quot;Rex&quot; &amp; &#39;Fido&#39;&lt;/b&gt;"
        );
    }

    #[test]
    fn rows_are_escaped_and_counted() {
        let mut v = view();
        v.rows.push(AnimalRow {
            id: 3,
            name: "<script>".into(),
            added: "2024-01-01 00:00:00".into(),
        });
        v.count = 1;

        let html = render_page(&v);
        assert!(html.contains("<strong>&lt;script&gt;</strong>"));
        assert!(html.contains("added 2024-01-01 00:00:00"));
        assert!(html.contains("1 shown"));
        assert!(!html.contains("<script>"));
    }

    #[test]
    fn empty_loading_and_error_markers() {
        let mut v = view();
        v.show_empty = true;
        assert!(render_page(&v).contains("No animals yet."));

        let mut v = view();
        v.loading = true;
        v.error = Some("Fetch failed: 500 boom".into());
        let html = render_page(&v);
        assert!(html.contains("Loading..."));
        assert!(html.contains("<p class=\"error\">Fetch failed: 500 boom</p>"));
        assert!(!html.contains("No animals yet."));
    }

    #[test]
    fn submitting_disables_form() {
        let mut v = view();
        v.submit_label = "Adding...";
        v.input_disabled = true;
        let html = render_page(&v);
        assert!(html.contains("<button type=\"submit\" disabled>Adding...</button>"));
        assert!(html.contains("placeholder=\"New animal name\" disabled>"));
    }

    #[test]
    fn filter_round_trips_into_both_forms() {
        let mut v = view();
        v.filter = "a\"b".into();
        let html = render_page(&v);
        assert_eq!(html.matches("value=\"a&quot;b\"").count(), 2);
    }
}
