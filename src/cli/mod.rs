// src/cli/mod.rs
use clap::{Parser};

pub mod commands;
pub mod handlers;

pub use commands::CliCommand;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Command to execute (defaults to serving the API)
    #[command(subcommand)]
    pub command: Option<CliCommand>,
}
