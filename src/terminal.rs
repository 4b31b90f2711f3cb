use colored::Colorize;

use crate::services::projections::ProjectionReport;

/// Plain-terminal rendition of a projections report
pub fn print_report(report: &ProjectionReport) {
    println!("{}", report.title().bold());
    println!(
        "{} teams, slot {}, {} scoring, season {}",
        report.request.teams, report.request.slot, report.request.scoring, report.request.season
    );
    if !report.draft_complete {
        println!("{}", "Player pools ran out before the draft finished.".yellow());
    }

    println!("\n{}", format!("Team {} Roster", report.request.slot).bold());
    for row in &report.roster {
        println!(
            "{:>3}  {:<4}{:<32}{:<26}{:>6}",
            row.index,
            row.position.to_string(),
            row.name,
            row.team_name,
            row.adp_label()
        );
    }

    println!("\n{}", "Projections".bold());
    for row in &report.projections {
        let line = format!(
            "{:<4}{:<32}{:<30}{:>7.2}",
            row.position.to_string(),
            row.player,
            row.opponent,
            row.points
        );
        if row.opponent == "Bye Week" {
            println!("{}", line.dimmed());
        } else {
            println!("{}", line);
        }
    }

    println!("\n{}", "Starters".bold());
    for row in &report.lineup.starters {
        println!(
            "{:<4}{:<32}{:>7.2}",
            row.position.to_string(),
            row.player.green(),
            row.points
        );
    }

    println!();
    println!("{:<32}{:>7.2}", report.roster_total_label(), report.lineup.roster_total);
    println!(
        "{:<32}{}",
        report.starters_total_label(),
        format!("{:>7.2}", report.lineup.starter_total).green().bold()
    );
}
