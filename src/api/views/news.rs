use super::{escape, layout, note};
use crate::domain::NewsItem;

pub fn render_news(items: &[NewsItem], query: &str) -> String {
    let mut body = format!(
        "<form method=\"get\" action=\"/news\">\
         <input name=\"q\" placeholder=\"Filter headlines\" value=\"{}\"> \
         <button type=\"submit\">Filter</button></form>",
        escape(query)
    );

    if items.is_empty() {
        body.push_str(&note("No news items found."));
        return layout("NFL News", &body);
    }

    body.push_str("<ul class=\"news\">");
    for item in items {
        body.push_str(&format!(
            "<li><a href=\"{}\" target=\"_blank\" rel=\"noopener\">{}</a> <span class=\"note\">{}</span></li>",
            escape(&item.link),
            escape(&item.title),
            escape(&item.source)
        ));
    }
    body.push_str("</ul>");

    layout("NFL News", &body)
}
