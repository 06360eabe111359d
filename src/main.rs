//! pitch-deck CLI
//!
//! Present the business-plan deck interactively, or print it as text/JSON.

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use pitch_deck::config::{Config, load_config};
use pitch_deck::deck::{Deck, Navigator};
use pitch_deck::report::{format_outline, format_slide};
use pitch_deck::tui::{self, App};
use pitch_deck::types::OutputFormat;

#[derive(Parser)]
#[command(name = "pitch-deck")]
#[command(about = "Present the campus food-ordering business plan in the terminal")]
#[command(version)]
struct Cli {
    /// Config file (default: <config dir>/pitch-deck/config.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Log file for the interactive presenter
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,

    /// Slide to start on: number (1-7) or key (cover, intro, jtbd, ...)
    #[arg(long, global = true)]
    start: Option<String>,

    /// Use ASCII fallbacks for all icons
    #[arg(long, global = true)]
    ascii_icons: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Full-screen interactive presenter (default)
    Present,

    /// Print the slide list
    Outline {
        /// Output format
        #[arg(long, value_enum, default_value = "human")]
        format: OutputFormatArg,
    },

    /// Print a single slide
    Show {
        /// Slide number (1-7) or key
        slide: String,

        /// Output format
        #[arg(long, value_enum, default_value = "human")]
        format: OutputFormatArg,
    },
}

#[derive(Clone, Copy, clap::ValueEnum)]
enum OutputFormatArg {
    Human,
    Json,
}

impl From<OutputFormatArg> for OutputFormat {
    fn from(arg: OutputFormatArg) -> Self {
        match arg {
            OutputFormatArg::Human => OutputFormat::Human,
            OutputFormatArg::Json => OutputFormat::Json,
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let result = load_settings(&cli).and_then(|config| {
        let command = cli.command.unwrap_or(Commands::Present);
        let interactive = matches!(command, Commands::Present);
        init_logging(interactive, &config.log_path())?;
        log_settings(&config);

        match command {
            Commands::Present => cmd_present(&config),
            Commands::Outline { format } => cmd_outline(&config, format.into()),
            Commands::Show { slide, format } => cmd_show(&config, &slide, format.into()),
        }
    });

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

// ============================================================================
// SETUP
// ============================================================================

/// Config file values with command-line overrides applied.
fn load_settings(cli: &Cli) -> Result<Config, String> {
    let mut config = load_config(cli.config.as_deref()).map_err(|e| e.to_string())?;

    if let Some(start) = &cli.start {
        config.start_slide = start.clone();
    }
    if cli.ascii_icons {
        config.ascii_icons = true;
    }
    if let Some(log_file) = &cli.log_file {
        config.log_file = Some(log_file.clone());
    }

    Ok(config)
}

/// Initialize tracing (RUST_LOG controls the level).
///
/// The presenter owns the terminal, so it logs to a file without colour
/// codes. The print commands log warnings and errors to stderr.
fn init_logging(interactive: bool, log_path: &Path) -> Result<(), String> {
    if interactive {
        if let Some(parent) = log_path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| format!("Cannot create log dir {}: {}", parent.display(), e))?;
        }
        let log_file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(log_path)
            .map_err(|e| format!("Cannot open log file {}: {}", log_path.display(), e))?;

        tracing_subscriber::fmt()
            .with_env_filter(
                EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
            )
            .with_writer(std::sync::Mutex::new(log_file))
            .with_ansi(false)
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(
                EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
            )
            .with_writer(std::io::stderr)
            .init();
    }
    Ok(())
}

/// Record where the settings came from. Runs once the subscriber is installed.
fn log_settings(config: &Config) {
    match &config.source {
        Some(path) => tracing::debug!(path = %path.display(), "loaded config"),
        None => tracing::debug!("no config file, using defaults"),
    }
    tracing::debug!(
        start = %config.start_slide,
        ascii_icons = config.ascii_icons,
        "settings"
    );
}

/// Navigator positioned on the configured start slide.
fn start_navigator(config: &Config) -> Result<Navigator, String> {
    let deck = Deck::standard();
    let index = deck
        .resolve(&config.start_slide)
        .map_err(|e| e.to_string())?;
    Navigator::starting_at(deck, index).map_err(|e| e.to_string())
}

// ============================================================================
// COMMAND HANDLERS
// ============================================================================

fn cmd_present(config: &Config) -> Result<(), String> {
    let navigator = start_navigator(config)?;
    let app = App::new(navigator).with_ascii_icons(config.ascii_icons);
    tui::run(app).map_err(|e| e.to_string())
}

fn cmd_outline(config: &Config, format: OutputFormat) -> Result<(), String> {
    let navigator = start_navigator(config)?;
    print!(
        "{}",
        format_outline(
            &navigator.deck(),
            navigator.current(),
            format,
            config.ascii_icons
        )
    );
    if format == OutputFormat::Json {
        println!();
    }
    Ok(())
}

fn cmd_show(config: &Config, slide: &str, format: OutputFormat) -> Result<(), String> {
    let deck = Deck::standard();
    let mut navigator = Navigator::new(deck);
    let index = deck.resolve(slide).map_err(|e| e.to_string())?;
    navigator.jump_to(index).map_err(|e| e.to_string())?;

    tracing::debug!(slide = navigator.current_slide().id.key(), "show");

    let output = format_slide(
        navigator.current_slide(),
        &navigator.render(),
        navigator.current(),
        navigator.len(),
        format,
        config.ascii_icons,
    );
    print!("{}", output);
    if format == OutputFormat::Json {
        println!();
    }
    Ok(())
}
