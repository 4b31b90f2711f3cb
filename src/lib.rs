pub mod api;
pub mod cache;
pub mod cli;
pub mod config;
pub mod domain;
pub mod draft;
pub mod errors;
pub mod http;
pub mod identity;
pub mod provider;
pub mod services;
pub mod terminal;

use anyhow::Result;
use clap::{CommandFactory, Parser};
use clap_complete::Shell;
use std::sync::Arc;

use crate::cli::{Cli, Command};
use crate::config::settings::{current_season, AppConfig};
use crate::draft::ScoringMode;
use crate::identity::ProfileResolver;
use crate::provider::tank01::Tank01Client;
use crate::provider::StatsProvider;
use crate::services::projections::{build_projections, ProjectionRequest};
use crate::services::server::ServerService;

pub fn interpret() -> Command {
    let cli = Cli::parse();
    cli.command
}

pub fn handle_serve(port: u16) -> Result<()> {
    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(async {
        let config = AppConfig::new();
        let service = ServerService::new(port, config);
        service.run().await
    })
}

pub fn handle_draft(
    teams: usize,
    slot: usize,
    week: u32,
    scoring: &str,
    season: Option<String>,
) -> Result<()> {
    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(async {
        let config = AppConfig::new();
        let provider: Arc<dyn StatsProvider> = Arc::new(Tank01Client::new(&config.provider)?);
        let profiles = ProfileResolver::new(provider.clone(), config.profile_cache_capacity);

        let request = ProjectionRequest::new(
            teams,
            slot,
            week,
            ScoringMode::parse(scoring),
            season.unwrap_or_else(current_season),
            &config.pages,
        );
        let report = build_projections(provider.as_ref(), &profiles, &config, request).await?;
        terminal::print_report(&report);
        Ok(())
    })
}

pub fn handle_completions(shell: Shell) -> Result<()> {
    let mut command = Cli::command();
    let name = command.get_name().to_string();
    clap_complete::generate(shell, &mut command, name, &mut std::io::stdout());
    Ok(())
}
