use clap::{Parser, Subcommand};
use clap_complete::Shell;

#[derive(Parser, Debug)]
#[command(author, version, about = "Fantasy football dashboard and mock-draft projections")]
pub struct Cli {
    /// Command
    #[clap(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
#[clap(rename_all = "lower_case")]
pub enum Command {
    /// Start the dashboard server
    Serve {
        /// Port number (optional, defaults to 5000)
        #[arg(short, long, default_value_t = 5000)]
        port: u16,
    },
    /// Simulate a draft and print one team's weekly projections
    Draft {
        /// Number of teams in the league (1-32)
        #[arg(short, long, default_value_t = 10)]
        teams: usize,
        /// Draft slot of the team to project
        #[arg(short, long, default_value_t = 1)]
        slot: usize,
        /// Week to project (1-18)
        #[arg(short, long, default_value_t = 1)]
        week: u32,
        /// standard, halfPPR or PPR
        #[arg(long, default_value = "standard")]
        scoring: String,
        /// Season year (defaults to the current year)
        #[arg(long)]
        season: Option<String>,
    },
    /// Print shell completions
    Completions {
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serve_defaults_to_port_5000() {
        let cli = Cli::parse_from(["ffdash", "serve"]);
        assert_eq!(cli.command, Command::Serve { port: 5000 });
    }

    #[test]
    fn test_draft_arguments() {
        let cli = Cli::parse_from([
            "ffdash", "draft", "--teams", "12", "--slot", "3", "--week", "5", "--scoring", "PPR",
        ]);
        assert_eq!(
            cli.command,
            Command::Draft {
                teams: 12,
                slot: 3,
                week: 5,
                scoring: "PPR".to_string(),
                season: None,
            }
        );
    }

    #[test]
    fn test_completions_shell() {
        let cli = Cli::parse_from(["ffdash", "completions", "bash"]);
        assert_eq!(cli.command, Command::Completions { shell: Shell::Bash });
    }

    #[test]
    fn test_cli_definition_is_valid() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
