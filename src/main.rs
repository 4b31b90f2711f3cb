use anyhow::Result;

use ffdash::cli::Command;
use ffdash::{handle_completions, handle_draft, handle_serve, interpret};

fn main() {
    dotenv::dotenv().ok();
    setup_logging();
    parse_and_execute().unwrap_or_else(|e| {
        eprintln!("Error: {e}");
        std::process::exit(1);
    });
}

fn setup_logging() {
    sensible_env_logger::init!();
}

fn parse_and_execute() -> Result<()> {
    let command = interpret();
    execute_command(&command)
}

fn execute_command(command: &Command) -> Result<()> {
    match command {
        Command::Serve { port } => handle_serve(*port),
        Command::Draft {
            teams,
            slot,
            week,
            scoring,
            season,
        } => handle_draft(*teams, *slot, *week, scoring, season.clone()),
        Command::Completions { shell } => handle_completions(*shell),
    }
}
