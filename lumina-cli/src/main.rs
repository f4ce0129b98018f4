//! Lumina CLI - Command line interface for the Lumina study planner
//!
//! AI-generated study plans, notes, quizzes, and diagrams over local
//! JSON persistence.

mod app;
mod commands;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use lumina_core::Config;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use app::App;
use commands::{ExplainArgs, NotesArgs, PlanArgs, QuizArgs, SettingsArgs, TodayArgs};

/// Lumina: AI study planner
#[derive(Parser, Debug)]
#[command(name = "lumina")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Text model to use (overrides config and env)
    #[arg(long, global = true, env = "LUMINA_MODEL")]
    model: Option<String>,

    /// Data directory (overrides config and env)
    #[arg(long, global = true, env = "LUMINA_DATA_DIR")]
    data_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Show version information
    Version,

    /// Manage study plans
    #[command(visible_alias = "p")]
    Plan(PlanArgs),

    /// Show today's progress against the daily target
    Today(TodayArgs),

    /// Generate structured study notes for a topic
    Notes(NotesArgs),

    /// Generate a practice quiz for a topic
    Quiz(QuizArgs),

    /// Explain a concept in depth, optionally with a diagram
    Explain(ExplainArgs),

    /// Show or change user settings
    Settings(SettingsArgs),

    /// Show current configuration
    Config,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    if cli.verbose {
        tracing::info!("Verbose mode enabled");
    }

    // Load configuration with overrides
    let config = Config::load_with_overrides(cli.model.clone(), cli.data_dir.clone())?;

    if cli.verbose {
        tracing::info!(
            text_model = %config.generator.text_model,
            data_dir = ?config.storage.data_dir,
            "Configuration loaded"
        );
    }

    match cli.command {
        Some(Commands::Version) => {
            println!("lumina {}", env!("CARGO_PKG_VERSION"));
        }
        Some(Commands::Plan(args)) => {
            let mut app = App::open(&config)?;
            args.execute(&mut app, &config).await?;
        }
        Some(Commands::Today(args)) => {
            let app = App::open(&config)?;
            args.execute(&app)?;
        }
        Some(Commands::Notes(args)) => {
            let app = App::open(&config)?;
            args.execute(&app, &config).await?;
        }
        Some(Commands::Quiz(args)) => {
            let app = App::open(&config)?;
            args.execute(&app, &config).await?;
        }
        Some(Commands::Explain(args)) => {
            let app = App::open(&config)?;
            args.execute(&app, &config).await?;
        }
        Some(Commands::Settings(args)) => {
            let mut app = App::open(&config)?;
            args.execute(&mut app)?;
        }
        Some(Commands::Config) => {
            print_config(&config)?;
        }
        None => {
            println!("Lumina - AI study planner");
            println!();
            println!("Use --help for usage information");
        }
    }

    Ok(())
}

fn print_config(config: &Config) -> anyhow::Result<()> {
    println!("Lumina Configuration");
    println!("====================");
    println!();
    println!("Generator Settings:");
    println!("  text_model:  {}", config.generator.text_model);
    println!("  image_model: {}", config.generator.image_model);
    println!("  base_url:    {}", config.generator.base_url);
    println!();
    println!("Storage:");
    println!("  data_dir: {}", config.data_dir()?.display());
    println!();
    if let Some(path) = Config::default_config_path() {
        println!("Config file: {}", path.display());
        if path.exists() {
            println!("  (exists)");
        } else {
            println!("  (not found - using defaults)");
        }
    }
    if let Some(path) = lumina_core::Secrets::default_secrets_path() {
        println!("Secrets file: {}", path.display());
        if path.exists() {
            println!("  (exists)");
        } else {
            println!("  (not found - set GEMINI_API_KEY or create it)");
        }
    }

    Ok(())
}
