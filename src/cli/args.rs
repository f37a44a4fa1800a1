//! CLI argument definitions.
//!
//! Uses clap derive macros for type-safe argument parsing.

use clap::{Parser, Subcommand, ValueEnum};

use crate::config::DEFAULT_SERVER_HOST;

/// Base service - health, status and user lookup over HTTP
#[derive(Parser, Debug)]
#[command(name = "base-service")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Log output format
    #[arg(long, global = true, value_enum, default_value = "json", env = "LOG_FORMAT")]
    pub log_format: LogFormat,

    #[command(subcommand)]
    pub command: Commands,
}

/// Log line format
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum LogFormat {
    /// One JSON object per line
    Json,
    /// Human-readable text
    Text,
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Start the HTTP server
    Serve(ServeArgs),
}

/// Arguments for the serve command
#[derive(Parser, Debug)]
pub struct ServeArgs {
    /// Host to bind to
    #[arg(short = 'H', long, default_value = DEFAULT_SERVER_HOST)]
    pub host: String,

    /// Port to listen on (defaults to PORT)
    #[arg(short, long)]
    pub port: Option<u16>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serve_defaults() {
        let cli = Cli::try_parse_from(["base-service", "serve"]).unwrap();
        let Commands::Serve(args) = cli.command;
        assert_eq!(args.host, "0.0.0.0");
        assert!(args.port.is_none());
        assert!(!cli.verbose);
    }

    #[test]
    fn serve_with_overrides() {
        let cli = Cli::try_parse_from([
            "base-service",
            "--verbose",
            "--log-format",
            "text",
            "serve",
            "--port",
            "9000",
        ])
        .unwrap();
        assert!(cli.verbose);
        assert_eq!(cli.log_format, LogFormat::Text);
        let Commands::Serve(args) = cli.command;
        assert_eq!(args.port, Some(9000));
    }
}
