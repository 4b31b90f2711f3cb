use super::{escape, layout};

pub fn render_home(season: &str) -> String {
    let body = format!(
        "<p>Mock-draft projections and weekly NFL data for the {} season.</p>\
         <ul>\
         <li><a href=\"/projections\">Projections</a>: simulate a snake draft and project one team's week</li>\
         <li><a href=\"/schedule\">Schedule</a>: the week's games with betting lines</li>\
         <li><a href=\"/news\">News</a>: latest fantasy headlines</li>\
         <li><a href=\"/injuries\">Injuries</a>: injury report for the top of the draft board</li>\
         </ul>",
        escape(season)
    );
    layout("Fantasy Football Dashboard", &body)
}
