//! CLI argument parsing for phonebook

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Phonebook - bounded in-memory contact directory
#[derive(Parser, Debug)]
#[command(
    name = "pb",
    author,
    version,
    about = "Bounded in-memory contact directory",
    after_help = "Logs are written to: ~/.local/share/phonebook/logs/phonebook.log"
)]
pub struct Cli {
    /// Path to config file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Directory capacity; skips the start-up size prompt (non-positive uses the default)
    #[arg(long, allow_negative_numbers = true)]
    pub capacity: Option<i64>,

    /// Log level (TRACE, DEBUG, INFO, WARN, ERROR)
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Run the interactive menu (default)
    Menu,

    /// Print the effective configuration as YAML
    Config,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_to_no_command() {
        let cli = Cli::try_parse_from(["pb"]).unwrap();
        assert!(cli.command.is_none());
        assert!(cli.capacity.is_none());
    }

    #[test]
    fn test_parse_capacity_and_config() {
        let cli = Cli::try_parse_from(["pb", "--capacity", "3", "-c", "pb.yml", "menu"]).unwrap();
        assert_eq!(cli.capacity, Some(3));
        assert_eq!(cli.config, Some(PathBuf::from("pb.yml")));
        assert_eq!(cli.command, Some(Command::Menu));
    }

    #[test]
    fn test_negative_capacity_parses() {
        let cli = Cli::try_parse_from(["pb", "--capacity", "-2"]).unwrap();
        assert_eq!(cli.capacity, Some(-2));
    }

    #[test]
    fn test_config_subcommand() {
        let cli = Cli::try_parse_from(["pb", "config", "--log-level", "debug"]).unwrap();
        assert_eq!(cli.command, Some(Command::Config));
        assert_eq!(cli.log_level.as_deref(), Some("debug"));
    }
}
