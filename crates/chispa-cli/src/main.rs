//! Chispa CLI - render retro sound effects from presets and parameters.

mod commands;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "chispa")]
#[command(author, version, about = "Chispa sound-effect synthesizer CLI", long_about = None)]
struct Cli {
    /// Log at debug level (RUST_LOG takes precedence)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render a sound effect to a WAV or raw PCM file
    Render(commands::render::RenderArgs),

    /// List available wave types
    Waves(commands::waves::WavesArgs),

    /// List synthesis parameters with units and ranges
    Params(commands::params::ParamsArgs),

    /// Manage sound presets
    Presets(commands::presets::PresetsArgs),

    /// Show information about a rendered WAV file
    Info(commands::info::InfoArgs),
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Commands::Render(args) => commands::render::run(args),
        Commands::Waves(args) => commands::waves::run(args),
        Commands::Params(args) => commands::params::run(args),
        Commands::Presets(args) => commands::presets::run(args),
        Commands::Info(args) => commands::info::run(args),
    }
}
