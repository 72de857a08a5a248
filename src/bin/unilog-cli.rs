use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};

use unilog::config::{load_config, LoggingConfig};
use unilog::logger::LEVEL_NAMES;
use unilog::observability::logging::{init_tracing, DEFAULT_FILTER};
use unilog::{Level, LoggerRegistry};

#[derive(Parser)]
#[command(name = "unilog-cli")]
#[command(about = "Inspect and exercise named-logger configurations", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the severity table
    Levels,
    /// Validate a configuration file
    Check {
        /// Path to a TOML config file
        config: PathBuf,
    },
    /// Emit one message through a configured logger
    Emit {
        /// Path to a TOML config file; built-in defaults if omitted
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Logger name
        #[arg(short, long)]
        logger: String,

        /// Severity display name (Debug, Verbose, Info, Warn, Error)
        #[arg(short = 'L', long, default_value = "Info")]
        level: Level,

        /// Message text
        message: String,
    },
}

fn main() -> Result<ExitCode, Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Levels => {
            for (level, name) in LEVEL_NAMES {
                println!("{:>5}  {}", level.rank(), name);
            }
        }
        Commands::Check { config } => {
            let loaded = load_config(&config)?;
            println!(
                "{}: ok ({} logger levels, default {}, sink {:?})",
                config.display(),
                loaded.levels.len(),
                loaded.default_level,
                loaded.sink
            );
        }
        Commands::Emit {
            config,
            logger,
            level,
            message,
        } => {
            let loaded = match config {
                Some(path) => load_config(&path)?,
                None => LoggingConfig::default(),
            };

            // The host sink writes through tracing, so it needs a subscriber.
            let _ = init_tracing(DEFAULT_FILTER);

            let registry = LoggerRegistry::from_config(&loaded)?;
            if let Err(escalation) = registry.get_logger(&logger).log(level, &message) {
                eprintln!("Escalated: {}", escalation);
                return Ok(ExitCode::FAILURE);
            }
        }
    }

    Ok(ExitCode::SUCCESS)
}
