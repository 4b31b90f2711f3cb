use super::{layout, note, number_cell, Table};
use crate::services::schedule::WeekSchedule;

pub fn render_schedule(schedule: &WeekSchedule) -> String {
    let mut body = format!(
        "<form method=\"get\" action=\"/schedule\">Week \
         <input name=\"week\" type=\"number\" min=\"1\" max=\"18\" value=\"{}\"> \
         <button type=\"submit\">Show</button></form>",
        schedule.week
    );

    if schedule.rows.is_empty() {
        body.push_str(&note("No games found for that week."));
        return layout(&page_title(schedule), &body);
    }

    let mut table = Table::new(
        "schedule",
        &[
            "Date", "Time", "Away", "Home", "Spread (Home)", "Total (O/U)", "ML Away", "ML Home",
            "Imp Away", "Imp Home", "Note",
        ],
    );
    for row in &schedule.rows {
        table.row([
            row.date.clone(),
            row.time.clone(),
            row.away.clone(),
            row.home.clone(),
            number_cell(row.odds.home_spread),
            number_cell(row.odds.total),
            number_cell(row.odds.moneyline_away),
            number_cell(row.odds.moneyline_home),
            number_cell(row.odds.implied_away),
            number_cell(row.odds.implied_home),
            row.note.clone(),
        ]);
    }
    body.push_str(&table.render());

    if let Some(missing) = &schedule.missing_note {
        body.push_str(&note(missing));
    }

    layout(&page_title(schedule), &body)
}

fn page_title(schedule: &WeekSchedule) -> String {
    format!("Week {} Schedule — {}", schedule.week, schedule.season)
}
