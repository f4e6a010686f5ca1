// src/cli/commands.rs
use clap::Subcommand;

#[derive(Subcommand, Debug)]
pub enum CliCommand {
    /// Run the HTTP API server
    Serve {
        /// Address to bind (overrides API_HOST)
        #[arg(long)]
        host: Option<String>,

        /// Port to listen on (overrides API_PORT)
        #[arg(long)]
        port: Option<u16>,
    },

    /// Generate passwords
    Generate {
        /// Password length, 12 to 50 (default: DEFAULT_PASSWORD_LENGTH)
        #[arg(long, short)]
        length: Option<usize>,

        /// Leave out uppercase letters
        #[arg(long)]
        no_uppercase: bool,

        /// Leave out lowercase letters
        #[arg(long)]
        no_lowercase: bool,

        /// Leave out digits
        #[arg(long)]
        no_numbers: bool,

        /// Leave out symbols
        #[arg(long)]
        no_symbols: bool,

        /// Number of passwords to generate
        #[arg(long, short, default_value_t = 1)]
        count: usize,
    },

    /// Score a password's strength
    Strength {
        /// Password to score (prompted for when omitted)
        password: Option<String>,

        #[arg(long)]
        first_name: Option<String>,

        #[arg(long)]
        last_name: Option<String>,

        #[arg(long)]
        email: Option<String>,
    },

    /// Check whether a password appears in known breaches
    Breach {
        /// Password to check (prompted for when omitted)
        password: Option<String>,
    },
}
