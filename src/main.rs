//! Course Enrollment TUI - Main entry point

use anyhow::{Context, Result};
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use enrollment_tui::app::App;
use enrollment_tui::catalog::{CountryCatalog, CourseCatalog};
use enrollment_tui::cli::{Cli, Commands};
use enrollment_tui::config::EnrollmentConfig;
use enrollment_tui::error::EnrollError;
use enrollment_tui::service::SimulatedRegistry;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::fs::File;
use std::io::stdout;
use std::path::Path;
use std::sync::Mutex;
use tracing::{debug, error, info};
use tracing_subscriber::EnvFilter;

/// Initialize logging.
///
/// With a log file everything goes there. Without one, headless commands log
/// to stderr and the wizard logs nothing, since stderr shares the screen.
fn init_logger(log_file: Option<&Path>, interactive: bool) -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    match log_file {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("Failed to create log file {}", path.display()))?;
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(Mutex::new(file))
                .with_ansi(false)
                .init();
        }
        None if interactive => {}
        None => {
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(std::io::stderr)
                .init();
        }
    }
    Ok(())
}

/// Main application entry point
fn main() -> Result<()> {
    let cli = Cli::parse_args();
    let interactive = matches!(cli.command, None | Some(Commands::Run { .. }));
    init_logger(cli.log_file.as_deref(), interactive)?;
    info!("Course Enrollment TUI starting up");

    match cli.command {
        None => run_wizard(EnrollmentConfig::default())?,
        Some(Commands::Run { config }) => {
            let config = match config {
                Some(path) => load_config(&path)?,
                None => EnrollmentConfig::default(),
            };
            run_wizard(config)?;
        }
        Some(Commands::Validate { config }) => {
            info!("Validating configuration file: {:?}", config);
            match load_config(&config) {
                Ok(_) => println!("✓ Configuration file is valid: {}", config.display()),
                Err(e) => {
                    error!("Configuration validation failed: {:#}", e);
                    eprintln!("✗ {:#}", e);
                    std::process::exit(1);
                }
            }
        }
        Some(Commands::InitConfig { path }) => {
            EnrollmentConfig::default()
                .save_to_file(&path)
                .with_context(|| format!("Failed to write configuration to {}", path.display()))?;
            println!("✓ Default configuration written to {}", path.display());
        }
        Some(Commands::Catalog) => print_catalog(),
    }

    Ok(())
}

fn load_config(path: &Path) -> Result<EnrollmentConfig> {
    let config = EnrollmentConfig::load_from_file(path)
        .with_context(|| format!("Failed to load configuration from {}", path.display()))?;
    config
        .validate()
        .with_context(|| format!("Invalid configuration in {}", path.display()))?;
    debug!(?config, "Configuration loaded");
    Ok(config)
}

fn print_catalog() {
    println!("Courses:");
    for course in CourseCatalog::options().iter().filter(|c| !c.code.is_empty()) {
        println!(
            "  {:<12} {:<28} {:<9} {}",
            course.code, course.label, course.duration, course.fees
        );
    }
    println!();
    println!("Countries:");
    for country in CountryCatalog::options().iter().filter(|c| !c.code.is_empty()) {
        println!("  {:<4} {}", country.code, country.label);
    }
}

/// Run the interactive wizard
fn run_wizard(config: EnrollmentConfig) -> Result<()> {
    debug!("Initializing terminal for TUI mode");

    enable_raw_mode()
        .map_err(|e| EnrollError::terminal(format!("Failed to enable raw mode: {}", e)))?;
    if let Err(e) = crossterm::execute!(stdout(), EnterAlternateScreen) {
        let _ = disable_raw_mode();
        return Err(EnrollError::terminal(format!("Failed to enter alternate screen: {}", e)).into());
    }

    let result = Terminal::new(CrosstermBackend::new(stdout()))
        .map_err(|e| EnrollError::terminal(format!("Failed to create terminal: {}", e)))
        .and_then(|mut terminal| {
            let mut app = App::new(Box::new(SimulatedRegistry::from_config(&config)));
            app.run(&mut terminal).map_err(EnrollError::from)
        });

    // Always restore the terminal, even if the app failed
    let _ = disable_raw_mode();
    let _ = crossterm::execute!(stdout(), LeaveAlternateScreen);

    result?;
    info!("Wizard closed");
    Ok(())
}
