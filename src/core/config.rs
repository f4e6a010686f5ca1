// src/core/config.rs
use std::env;
use std::path::PathBuf;
use std::time::Duration;
use log::LevelFilter;

// Configuration for the password security service
#[derive(Debug, Clone)]
pub struct Config {
    // Application Settings
    pub environment: String,

    // Web Interface
    pub api_host: String,
    pub api_port: u16,

    // Password Generation
    pub default_password_length: usize,

    // Breach lookups
    pub breach_api_url: String,
    pub breach_timeout: Duration,

    // Logging
    pub log_level: LevelFilter,
    pub log_file: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            environment: "development".to_string(),

            api_host: "0.0.0.0".to_string(),
            api_port: 8000,

            default_password_length: 12,

            breach_api_url: "https://api.pwnedpasswords.com".to_string(),
            breach_timeout: Duration::from_secs(10),

            log_level: LevelFilter::Info,
            log_file: None,
        }
    }
}

impl Config {
    // Load configuration from environment variables
    pub fn load() -> Self {
        let mut config = Config::default();

        if let Ok(environment) = env::var("ENVIRONMENT") {
            config.environment = environment;
        }

        // Web Interface
        if let Ok(host) = env::var("API_HOST") {
            config.api_host = host;
        }

        if let Some(port) = parse_var("API_PORT") {
            config.api_port = port;
        }

        // Password Generation
        if let Some(length) = parse_var("DEFAULT_PASSWORD_LENGTH") {
            config.default_password_length = length;
        }

        // Breach lookups
        if let Ok(url) = env::var("BREACH_API_URL") {
            config.breach_api_url = url.trim_end_matches('/').to_string();
        }

        if let Some(secs) = parse_var::<u64>("BREACH_TIMEOUT_SECS") {
            config.breach_timeout = Duration::from_secs(secs);
        }

        // Logging
        if let Ok(level) = env::var("LOG_LEVEL") {
            match level.to_lowercase().as_str() {
                "error" => config.log_level = LevelFilter::Error,
                "warn" => config.log_level = LevelFilter::Warn,
                "info" => config.log_level = LevelFilter::Info,
                "debug" => config.log_level = LevelFilter::Debug,
                "trace" => config.log_level = LevelFilter::Trace,
                _ => log::warn!("Unknown log level '{}', using {}", level, config.log_level),
            }
        }

        if let Ok(file) = env::var("LOG_FILE") {
            if !file.trim().is_empty() {
                config.log_file = Some(PathBuf::from(file));
            }
        }

        config
    }

    pub fn is_production(&self) -> bool {
        self.environment.eq_ignore_ascii_case("production")
    }
}

fn parse_var<T: std::str::FromStr>(key: &str) -> Option<T> {
    let raw = env::var(key).ok()?;
    match raw.trim().parse() {
        Ok(value) => Some(value),
        Err(_) => {
            log::warn!("Ignoring unparseable value '{}' for {}", raw, key);
            None
        }
    }
}
