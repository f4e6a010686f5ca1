// src/cli/handlers.rs
use anyhow::{Context, Result};
use console::style;
use inquire::Password;
use crate::core::config::Config;
use crate::generators::{GeneratorError, PasswordGenerator};
use crate::models::GenerationRequest;
use crate::services::{check_password_strength, BreachChecker, UserContext};

// Handlers for CLI commands

pub struct GenerateOptions {
    pub length: Option<usize>,
    pub no_uppercase: bool,
    pub no_lowercase: bool,
    pub no_numbers: bool,
    pub no_symbols: bool,
    pub count: usize,
}

impl GenerateOptions {
    fn to_request(&self, config: &Config) -> GenerationRequest {
        GenerationRequest {
            length: self.length.unwrap_or(config.default_password_length),
            include_uppercase: !self.no_uppercase,
            include_lowercase: !self.no_lowercase,
            include_numbers: !self.no_numbers,
            include_symbols: !self.no_symbols,
        }
    }
}

pub fn handle_generate(config: &Config, options: &GenerateOptions) -> Result<()> {
    let request = options.to_request(config);
    let generator = PasswordGenerator::new();

    for _ in 0..options.count.max(1) {
        match generator.generate(&request) {
            Ok(result) => {
                println!(
                    "{}  {}",
                    result.password,
                    style(format!("({} bits)", result.entropy_bits)).dim()
                );
            }
            Err(GeneratorError::InvalidRequest(reason)) => {
                anyhow::bail!("invalid request: {}", reason);
            }
            Err(e) => return Err(e).context("password generation failed"),
        }
    }

    Ok(())
}

pub fn handle_strength(password: Option<String>, context: UserContext) -> Result<()> {
    let password = resolve_password(password)?;
    let report = check_password_strength(&password, &context);

    let label = match report.score {
        0 | 1 => style(report.strength_label.as_str()).red(),
        2 => style(report.strength_label.as_str()).yellow(),
        _ => style(report.strength_label.as_str()).green(),
    };
    println!("Strength: {} ({}/4)", label.bold(), report.score);
    println!("Online attack (10/s):       {}", report.online_crack_time);
    println!("Offline attack (1e10/s):    {}", report.offline_crack_time);
    if !report.warning.is_empty() {
        println!("{} {}", style("Warning:").yellow(), report.warning);
    }
    for suggestion in &report.suggestions {
        println!("  - {}", suggestion);
    }

    Ok(())
}

pub async fn handle_breach(config: &Config, password: Option<String>) -> Result<()> {
    let password = resolve_password(password)?;
    let checker = BreachChecker::new(config)?;
    let report = checker
        .check(&password)
        .await
        .context("Error checking password breach")?;

    if report.is_breached {
        println!("{} {}", style("BREACHED").red().bold(), report.message);
    } else {
        println!("{} {}", style("OK").green().bold(), report.message);
    }

    Ok(())
}

fn resolve_password(password: Option<String>) -> Result<String> {
    match password {
        Some(password) => Ok(password),
        None => Password::new("Password:")
            .with_display_mode(inquire::PasswordDisplayMode::Hidden)
            .without_confirmation()
            .prompt()
            .context("failed to read password"),
    }
}
