use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Course Enrollment TUI - enroll a student in one or more courses
#[derive(Parser, Debug)]
#[command(name = "enroll")]
#[command(about = "A multi-step course enrollment wizard for the terminal")]
#[command(version)]
pub struct Cli {
    /// Write logs to this file (the TUI owns the terminal while it runs)
    #[arg(long, global = true)]
    pub log_file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run the interactive enrollment wizard
    Run {
        /// Path to a configuration file (delays, reserved emails)
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
    /// Validate a configuration file
    Validate {
        /// Path to configuration file to validate
        config: PathBuf,
    },
    /// Write the default configuration to a file
    InitConfig {
        /// Destination path
        path: PathBuf,
    },
    /// Print the course and country catalogs
    Catalog,
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Self::parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_no_subcommand_runs_wizard() {
        let cli = Cli::try_parse_from(["enroll"]).unwrap();
        assert!(cli.command.is_none());
        assert!(cli.log_file.is_none());
    }

    #[test]
    fn test_run_with_config() {
        let cli = Cli::try_parse_from(["enroll", "run", "--config", "c.json"]).unwrap();
        match cli.command {
            Some(Commands::Run { config }) => assert_eq!(config, Some(PathBuf::from("c.json"))),
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_global_log_file() {
        let cli = Cli::try_parse_from(["enroll", "catalog", "--log-file", "x.log"]).unwrap();
        assert_eq!(cli.log_file, Some(PathBuf::from("x.log")));
        assert!(matches!(cli.command, Some(Commands::Catalog)));
    }

    #[test]
    fn test_init_config_subcommand_name() {
        let cli = Cli::try_parse_from(["enroll", "init-config", "out.json"]).unwrap();
        assert!(matches!(cli.command, Some(Commands::InitConfig { .. })));
    }
}
