//! `redstone-designer` command-line entry point.

use std::io;
use std::path::PathBuf;

use anyhow::{bail, Result};
use clap::{Args, Parser, Subcommand};
use redstone_designer::commands::{self, InspectOptions};
use redstone_designer::DesignerConfig;

#[derive(Parser)]
#[command(
    name = "redstone-designer",
    about = "Inspect the redstone blocks of an unpacked Minecraft asset pack",
    disable_help_subcommand = true
)]
struct Cli {
    /// Asset root (defaults to $REDSTONE_ASSETS, then `assets/minecraft/`).
    #[arg(long, global = true)]
    assets: Option<PathBuf>,

    /// Seed for weighted model variants (defaults to $REDSTONE_SEED, then 0).
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Log at debug level unless RUST_LOG says otherwise.
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Resolve every palette block and report missing textures.
    Check,
    /// Show the palette and each entry's initial state.
    Palette,
    /// List every block type in the pack.
    List,
    /// Show models, bounds and textures for one block state.
    Inspect(InspectArgs),
    /// Write the hashed catalog snapshot as JSON.
    Export(ExportArgs),
}

#[derive(Args)]
struct InspectArgs {
    /// Block type, e.g. `repeater`.
    block: String,

    /// Property overrides, e.g. `delay=3,powered=true`.
    #[arg(long)]
    state: Option<String>,

    /// Look direction `x,y,z`; sets `facing` to the nearest face.
    #[arg(long, allow_hyphen_values = true)]
    look: Option<String>,
}

#[derive(Args)]
struct ExportArgs {
    /// Output file; stdout when omitted.
    #[arg(long)]
    out: Option<PathBuf>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = DesignerConfig::default()
        .with_env(|key| std::env::var(key).ok())?
        .with_overrides(cli.assets, cli.seed);

    let stdout = io::stdout();
    let mut out = stdout.lock();

    match cli.command.unwrap_or(Commands::Check) {
        Commands::Check => {
            let report = commands::run_check(&config, &mut out)?;
            if !report.is_ok() {
                bail!("{} palette block(s) failed to resolve", report.failures.len());
            }
        }
        Commands::Palette => commands::run_palette(&config, &mut out)?,
        Commands::List => commands::run_list(&config, &mut out)?,
        Commands::Inspect(args) => {
            let options = InspectOptions {
                state: args.state,
                look: args
                    .look
                    .as_deref()
                    .map(commands::parse_direction)
                    .transpose()?,
            };
            commands::run_inspect(&config, &args.block, &options, &mut out)?;
        }
        Commands::Export(args) => match args.out {
            Some(path) => commands::run_export_to_file(&config, &path)?,
            None => commands::run_export(&config, &mut out)?,
        },
    }
    Ok(())
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level)),
        )
        .init();
}
