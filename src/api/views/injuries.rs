use super::{escape, layout, note, Table};
use crate::services::injuries::{InjuryTable, PlayerCard};

/// Outcome of a `?player=` lookup
pub enum CardLookup<'a> {
    NotRequested,
    Found(&'a PlayerCard),
    NotFound(&'a str),
}

pub fn render_injuries(table: &InjuryTable, query: &str, card: CardLookup<'_>) -> String {
    let mut body = format!(
        "<form method=\"get\" action=\"/injuries\">\
         <input name=\"player\" placeholder=\"Player name\" value=\"{}\"> \
         <button type=\"submit\">Look up</button></form>",
        escape(query)
    );

    match card {
        CardLookup::NotRequested => {}
        CardLookup::Found(card) => body.push_str(&render_card(card)),
        CardLookup::NotFound(name) => body.push_str(&format!(
            "<div class=\"note\">Sorry, could not find \u{201c}{}\u{201d}.</div>",
            escape(name)
        )),
    }

    body.push_str(&note(&format!(
        "Season {}: scanned the top {} ADP players, showing up to {}. Found {} in {:.2}s.",
        table.season,
        table.scanned,
        table.max_results,
        table.rows.len(),
        table.elapsed_secs
    )));

    if table.rows.is_empty() {
        body.push_str(&note("No injury descriptions found in the scanned range."));
    } else {
        let mut rows = Table::new("injuries", &["Player", "Injury"]);
        for row in &table.rows {
            let link = format!(
                "<a href=\"/injuries?player={}\">{}</a>",
                urlencoding::encode(&row.player),
                escape(&row.player)
            );
            rows.html_row(vec![link, escape(&row.injury)]);
        }
        body.push_str(&rows.render());
    }

    layout("Injury Report", &body)
}

fn render_card(card: &PlayerCard) -> String {
    let photo = card
        .headshot
        .as_deref()
        .map(|src| format!("<img src=\"{}\" width=\"90\">", escape(src)))
        .unwrap_or_default();
    let position = card
        .position
        .as_deref()
        .map(|p| format!(" {}", escape(p)))
        .unwrap_or_default();
    let jersey = card
        .jersey
        .as_deref()
        .map(|j| format!(" #{}", escape(j)))
        .unwrap_or_default();
    let team_code = card
        .team_code
        .as_deref()
        .map(|c| format!(" ({})", escape(c)))
        .unwrap_or_default();

    format!(
        "<div class=\"card\">{photo}<div>\
         <div><strong class=\"player-name\">{name}</strong>{position}{jersey}</div>\
         <div>{team}{team_code}</div>\
         <div><em class=\"injury\">{injury}</em></div>\
         </div></div>",
        name = escape(&card.full_name),
        team = escape(&card.team_name),
        injury = escape(&card.injury),
    )
}
