//! ebrains-check — find EBRAINS models hosted outside the supported platforms.

mod commands;
mod config;

use std::io;
use std::path::{Path, PathBuf};
use std::process;

use clap::{ArgAction, Parser, Subcommand};
use ebrains_models::ReportFormat;
use log::LevelFilter;

use config::Located;

#[derive(Parser)]
#[command(
    name = "ebrains-check",
    version,
    about = "Cross-check EBRAINS model repositories against supported hosts"
)]
struct Cli {
    /// Models dump (default: scripts/ebrains-models.json, or [input] models in ebrains-check.toml)
    #[arg(long, global = true)]
    input: Option<PathBuf>,
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Print repository lines on unsupported hosts (the default)
    Unsupported {
        /// Output format (human prints matching lines, json lists parsed models)
        #[arg(long, default_value = "human")]
        format: ReportFormat,
    },
    /// Count models per hosting platform
    Breakdown {
        /// Errors dump written alongside the models dump
        #[arg(long)]
        errors: Option<PathBuf>,
        /// Report format (human, json)
        #[arg(long, default_value = "human")]
        format: ReportFormat,
    },
    /// Show file-listing endpoints for CSCS and data-proxy models
    Locate {
        /// Report format (human, json)
        #[arg(long, default_value = "human")]
        format: ReportFormat,
    },
    /// Resolve a saved container listing for one repository URL
    Listing {
        /// Repository URL (CSCS or data proxy)
        url: String,
        /// File holding the listing body
        file: PathBuf,
        /// Output format (human, json)
        #[arg(long, default_value = "human")]
        format: ReportFormat,
    },
}

fn main() {
    let cli = Cli::parse();

    let result = run(cli);
    if let Err(e) = result {
        eprintln!("error: {e:#}");
        process::exit(1);
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let cwd = std::env::current_dir()?;
    let (located, level, problems) = settings(&cwd);
    init_logging(cli.verbose, level);
    for problem in &problems {
        log::warn!("ignoring {}: {problem:#}", config::CONFIG_FILE);
    }

    let models = located.models_path(&cwd, cli.input.as_deref());
    let mut stdout = io::stdout().lock();

    let command = cli.command.unwrap_or(Commands::Unsupported {
        format: ReportFormat::Human,
    });
    match command {
        Commands::Unsupported { format } => commands::unsupported::run(&models, format, &mut stdout),

        Commands::Breakdown { errors, format } => {
            let errors = located.errors_path(&cwd, errors.as_deref());
            commands::breakdown::run(&models, errors.as_deref(), format, &mut stdout)
        }

        Commands::Locate { format } => commands::locate::run(&models, format, &mut stdout),

        Commands::Listing { url, file, format } => {
            commands::listing::run(&url, &cwd.join(file), format, &mut stdout)
        }
    }
}

/// Config and log level for a run.
///
/// A broken config never stops a run: an unreadable or malformed file falls
/// back to the defaults, and a bad level falls back to `warn`. The problems
/// are returned for logging once the logger is installed.
fn settings(cwd: &Path) -> (Located, Option<LevelFilter>, Vec<anyhow::Error>) {
    let mut problems = Vec::new();
    let located = Located::discover(cwd).unwrap_or_else(|err| {
        problems.push(err);
        Located::default()
    });
    let level = located.config.log_level().unwrap_or_else(|err| {
        problems.push(err);
        None
    });
    (located, level, problems)
}

/// Install the stderr logger.
///
/// `-v` flags win over the config file; `RUST_LOG` directives apply on top.
fn init_logging(verbose: u8, configured: Option<LevelFilter>) {
    let level = match verbose {
        0 => configured.unwrap_or(LevelFilter::Warn),
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };

    let mut builder = env_logger::Builder::new();
    builder.filter_level(level).target(env_logger::Target::Stderr);
    if let Ok(filters) = std::env::var("RUST_LOG") {
        builder.parse_filters(&filters);
    }
    // Tests may install a logger more than once.
    let _ = builder.try_init();
}

/// Resolve the models path the way `run` does, for callers holding only a directory.
#[cfg(test)]
fn models_in(dir: &Path) -> anyhow::Result<PathBuf> {
    Ok(Located::discover(dir)?.models_path(dir, None))
}
