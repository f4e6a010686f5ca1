use clap::Parser;
use std::path::Path;

mod cli;
mod api;
mod core;
mod models;
mod generators;
mod services;
mod logging;

use crate::cli::{Args, CliCommand};
use crate::cli::handlers::{self, GenerateOptions};
use crate::core::config::Config;
use crate::services::UserContext;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    if Path::new(".env").exists() {
        dotenvy::dotenv().ok();
    }

    let args = Args::parse();
    let config = Config::load();

    logging::init(&config)?;
    log::debug!("Loaded config: {:?}", config);

    match args.command.unwrap_or(CliCommand::Serve { host: None, port: None }) {
        CliCommand::Serve { host, port } => {
            let host = host.unwrap_or_else(|| config.api_host.clone());
            let port = port.unwrap_or(config.api_port);
            let state = api::AppState::new(&config)?;

            log::info!("Starting PassVault Guard ({} environment)", config.environment);
            api::start_server(state, &host, port, !config.is_production()).await.map_err(|e| {
                log::error!("API server failed: {}", e);
                e
            })?;
            log::info!("PassVault Guard shutdown complete.");
        }
        CliCommand::Generate { length, no_uppercase, no_lowercase, no_numbers, no_symbols, count } => {
            handlers::handle_generate(
                &config,
                &GenerateOptions { length, no_uppercase, no_lowercase, no_numbers, no_symbols, count },
            )?;
        }
        CliCommand::Strength { password, first_name, last_name, email } => {
            handlers::handle_strength(password, UserContext { first_name, last_name, email })?;
        }
        CliCommand::Breach { password } => {
            handlers::handle_breach(&config, password).await?;
        }
    }

    Ok(())
}
