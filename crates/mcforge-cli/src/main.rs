//! mcforge CLI
//!
//! Command-line interface for generating, previewing, chaining, and
//! delivering Minecraft command batches.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use mcforge_core::logging::{self, Profile};
use mcforge_core::BlockPos;

mod actions;
mod dispatch;
mod settings;

use dispatch::{Action, Dispatcher};
use settings::Settings;

#[derive(Debug, Parser)]
#[command(name = "mcforge")]
#[command(about = "mcforge - command chain compiler and delivery client", long_about = None)]
struct Cli {
    /// Path to the settings file
    #[arg(long, default_value = "mcforge.toml", global = true)]
    config: PathBuf,

    /// Emit JSON logs instead of human-readable output
    #[arg(long, global = true)]
    log_json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Generate commands and deliver them to the listener
    Upload(UploadArgs),
    /// Generate commands and print them
    Preview(FileArgs),
    /// Compile the generated commands into a chain artifact (JSON)
    Chain(ChainArgs),
    /// Resolve an action identifier through the dispatch table and run it
    Run(RunArgs),
}

#[derive(Debug, Args)]
struct FileArgs {
    /// Source file for the generator (defaults to the configured index file)
    file: Option<PathBuf>,
}

#[derive(Debug, Args)]
struct UploadArgs {
    /// Source file for the generator (defaults to the configured index file)
    file: Option<PathBuf>,

    /// Force TLS delivery regardless of the settings file
    #[arg(long, conflicts_with = "insecure")]
    secure: bool,

    /// Force plain-TCP delivery regardless of the settings file
    #[arg(long)]
    insecure: bool,
}

#[derive(Debug, Args)]
struct ChainArgs {
    /// Source file for the generator (defaults to the configured index file)
    file: Option<PathBuf>,

    /// Anchor position "x,y,z" for relative placement
    #[arg(long, value_parser = parse_block_pos)]
    anchor: Option<BlockPos>,
}

#[derive(Debug, Args)]
struct RunArgs {
    /// Action identifier (see `mcforge run --help` output on error)
    action: String,

    /// Source file for the generator (defaults to the configured index file)
    file: Option<PathBuf>,
}

/// Parse "x,y,z" into a block position
fn parse_block_pos(raw: &str) -> Result<BlockPos, String> {
    let parts: Vec<&str> = raw.split(',').collect();
    let &[x, y, z] = parts.as_slice() else {
        return Err(format!("expected x,y,z but got '{raw}'"));
    };
    let parse = |axis: &str, value: &str| {
        value
            .trim()
            .parse::<i32>()
            .map_err(|_| format!("invalid {axis} coordinate '{value}'"))
    };
    Ok(BlockPos::new(
        parse("x", x)?,
        parse("y", y)?,
        parse("z", z)?,
    ))
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    logging::init(if cli.log_json {
        Profile::Production
    } else {
        Profile::Development
    });

    if let Err(e) = run(cli).await {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let settings = Settings::load(&cli.config)?;

    match cli.command {
        Commands::Upload(args) => {
            let file = actions::resolve_file(&settings, args.file);
            let secure = match (args.secure, args.insecure) {
                (true, _) => Some(true),
                (_, true) => Some(false),
                _ => None,
            };
            actions::upload(&settings, &file, secure).await
        }
        Commands::Preview(args) => {
            let file = actions::resolve_file(&settings, args.file);
            actions::preview(&settings, &file)
        }
        Commands::Chain(args) => {
            let file = actions::resolve_file(&settings, args.file);
            actions::chain(&settings, &file, args.anchor)
        }
        Commands::Run(args) => {
            let dispatcher = Dispatcher::new();
            let Some(action) = dispatcher.resolve(&args.action) else {
                return Err(format!(
                    "unknown action '{}'; known actions: {}",
                    args.action,
                    dispatcher.action_ids().join(", ")
                )
                .into());
            };
            let file = actions::resolve_file(&settings, args.file);
            match action {
                Action::UploadSecure => actions::upload(&settings, &file, Some(true)).await,
                Action::UploadInsecure => actions::upload(&settings, &file, Some(false)).await,
                Action::Preview => actions::preview(&settings, &file),
                Action::GenerateChain => actions::chain(&settings, &file, None),
            }
        }
    }
}
