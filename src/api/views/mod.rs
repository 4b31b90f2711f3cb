//! Server-rendered HTML. Every piece of dynamic text goes through [`escape`].

pub mod home;
pub mod injuries;
pub mod news;
pub mod projections;
pub mod schedule;

use std::fmt::Write;

const NAV: [(&str, &str); 5] = [
    ("/", "Home"),
    ("/projections", "Projections"),
    ("/schedule", "Schedule"),
    ("/news", "News"),
    ("/injuries", "Injuries"),
];

const STYLE: &str = "body{font-family:sans-serif;margin:20px}\
nav a{margin-right:12px}\
table{border-collapse:collapse;margin:8px 0 16px}\
th,td{border:1px solid #ddd;padding:4px 8px}\
.note{color:#555;font-style:italic}\
.card{display:flex;align-items:center;gap:10px;padding:10px;border:1px solid #ddd;border-radius:8px}";

pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

/// Full page: head, navigation, then `body` (already rendered HTML)
pub fn layout(title: &str, body: &str) -> String {
    let nav: Vec<String> = NAV
        .iter()
        .map(|(href, label)| format!("<a href=\"{}\">{}</a>", href, label))
        .collect();

    format!(
        "<!DOCTYPE html>\n<html><head><meta charset=\"utf-8\"><title>{title}</title><style>{STYLE}</style></head>\
         <body><nav>{nav}</nav><h1>{title}</h1>{body}</body></html>",
        title = escape(title),
        nav = nav.join(""),
    )
}

pub fn note(text: &str) -> String {
    format!("<p class=\"note\">{}</p>", escape(text))
}

/// Optional number as text, blank when absent
pub fn number_cell(value: Option<f64>) -> String {
    value.map(|v| v.to_string()).unwrap_or_default()
}

/// HTML table with escaped text cells
pub struct Table {
    class: &'static str,
    headers: Vec<&'static str>,
    rows: Vec<Vec<String>>,
}

impl Table {
    pub fn new(class: &'static str, headers: &[&'static str]) -> Self {
        Self {
            class,
            headers: headers.to_vec(),
            rows: Vec::new(),
        }
    }

    /// Row of plain text; every cell is escaped
    pub fn row<I, S>(&mut self, cells: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.rows
            .push(cells.into_iter().map(|c| escape(c.as_ref())).collect());
        self
    }

    /// Row of cells that are already HTML
    pub fn html_row(&mut self, cells: Vec<String>) -> &mut Self {
        self.rows.push(cells);
        self
    }

    pub fn render(&self) -> String {
        let mut out = format!("<table class=\"{}\"><thead><tr>", self.class);
        for header in &self.headers {
            let _ = write!(out, "<th>{}</th>", escape(header));
        }
        out.push_str("</tr></thead><tbody>");
        for row in &self.rows {
            out.push_str("<tr>");
            for cell in row {
                let _ = write!(out, "<td>{}</td>", cell);
            }
            out.push_str("</tr>");
        }
        out.push_str("</tbody></table>");
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape() {
        assert_eq!(
            escape("<b>\"Ja'Marr\" & co</b>"),
            "&lt;b&gt;&quot;Ja&#39;Marr&quot; &amp; co&lt;/b&gt;"
        );
    }

    #[test]
    fn test_table_escapes_text_rows_only() {
        let mut table = Table::new("t", &["A", "B"]);
        table.row(["<x>", "y"]);
        table.html_row(vec!["<img src=\"a.png\">".to_string(), String::new()]);
        let html = table.render();

        assert!(html.contains("<td>&lt;x&gt;</td>"));
        assert!(html.contains("<td><img src=\"a.png\"></td>"));
        assert!(html.starts_with("<table class=\"t\"><thead><tr><th>A</th><th>B</th>"));
    }

    #[test]
    fn test_layout_escapes_title() {
        let page = layout("Week <1>", "<p>ok</p>");
        assert!(page.contains("<title>Week &lt;1&gt;</title>"));
        assert!(page.contains("<a href=\"/injuries\">Injuries</a>"));
        assert!(page.contains("<p>ok</p>"));
    }
}
