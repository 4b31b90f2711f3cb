use super::{escape, layout, Table};
use crate::draft::ScoringMode;
use crate::services::projections::ProjectionReport;

const SCORING_OPTIONS: [ScoringMode; 3] = [ScoringMode::Standard, ScoringMode::HalfPpr, ScoringMode::Ppr];

pub fn render_projections(report: &ProjectionReport) -> String {
    let request = &report.request;
    let mut body = controls(request.teams, request.slot, request.week, request.scoring);

    if !report.draft_complete {
        body.push_str(&super::note("Player pools ran out before the draft finished."));
    }

    let mut log = Table::new("draft-log", &["Round", "Pick#", "Team", "Pos", "Player"]);
    for pick in &report.picks {
        log.row([
            pick.round.to_string(),
            pick.pick_number.to_string(),
            pick.team_slot.to_string(),
            pick.position.to_string(),
            pick.player_name.clone(),
        ]);
    }

    let mut roster = Table::new("roster", &["#", "Pos", "Name", "NFL Team", "Photo", "ADP (Average Draft Pick)"]);
    for row in &report.roster {
        let photo = row
            .headshot
            .as_deref()
            .map(|src| format!("<img src=\"{}\" width=\"48\">", escape(src)))
            .unwrap_or_default();
        roster.html_row(vec![
            row.index.to_string(),
            row.position.to_string(),
            escape(&row.name),
            escape(&row.team_name),
            photo,
            row.adp_label(),
        ]);
    }

    let mut projections = Table::new("projections", &["Player", "Pos", "NFL Team", "Opp", "ProjPts"]);
    for row in &report.projections {
        projections.row([
            row.player.clone(),
            row.position.to_string(),
            row.team_name.clone(),
            row.opponent.clone(),
            row.points.to_string(),
        ]);
    }

    let mut starters = Table::new("starters", &["Pos", "Player", "NFL Team", "Opp", "ProjPts"]);
    for row in &report.lineup.starters {
        starters.row([
            row.position.to_string(),
            row.player.clone(),
            row.team_name.clone(),
            row.opponent.clone(),
            row.points.to_string(),
        ]);
    }

    let mut totals = Table::new("totals", &["Group", "ProjPts"]);
    totals
        .row([report.roster_total_label(), report.lineup.roster_total.to_string()])
        .row([report.starters_total_label(), report.lineup.starter_total.to_string()]);

    let roster_heading = format!("Team {} Roster", request.slot);
    for (heading, table) in [
        ("Draft Log", &log),
        (roster_heading.as_str(), &roster),
        ("Projections", &projections),
        ("Starters", &starters),
        ("Totals", &totals),
    ] {
        body.push_str(&format!("<h2>{}</h2>{}", escape(heading), table.render()));
    }

    layout(&report.title(), &body)
}

fn controls(teams: usize, slot: usize, week: u32, scoring: ScoringMode) -> String {
    let options: String = SCORING_OPTIONS
        .iter()
        .map(|mode| {
            let selected = if *mode == scoring { " selected" } else { "" };
            format!("<option value=\"{0}\"{1}>{0}</option>", mode.provider_key(), selected)
        })
        .collect();

    format!(
        "<form method=\"get\" action=\"/projections\">\
         Teams <input name=\"teams\" type=\"number\" min=\"1\" max=\"32\" value=\"{teams}\"> \
         Slot <input name=\"slot\" type=\"number\" min=\"1\" value=\"{slot}\"> \
         Week <input name=\"week\" type=\"number\" min=\"1\" max=\"18\" value=\"{week}\"> \
         Scoring <select name=\"scoring\">{options}</select> \
         <button type=\"submit\">Run draft</button></form>"
    )
}
