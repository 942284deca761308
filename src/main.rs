use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use std::io;
use std::path::PathBuf;
use std::process::ExitCode;
use timeconv::commands;
use timeconv::config;
use timeconv::logging;
use timeconv::{ConverterShell, Language, OutputFormat, Unit};
use tracing::debug;

#[derive(Parser)]
#[command(name = "timeconv")]
#[command(about = "Convert between seconds, minutes, hours, days, months and years")]
#[command(version)]
struct Cli {
    #[arg(long, global = true, help = "Config file (default: ~/.timeconv/config.toml)")]
    config: Option<PathBuf>,
    #[arg(short, long, global = true, help = "Debug logging on stderr")]
    verbose: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert a value into every other unit
    Convert {
        #[arg(allow_hyphen_values = true, help = "Non-negative number")]
        value: String,
        #[arg(short, long, value_enum, help = "Source unit")]
        unit: Option<Unit>,
        #[arg(short, long, value_enum, help = "Interface language")]
        lang: Option<Language>,
        #[arg(long, value_enum, default_value = "text")]
        format: OutputFormat,
    },
    /// List the supported units
    Units {
        #[arg(short, long, value_enum, help = "Interface language")]
        lang: Option<Language>,
        #[arg(long, value_enum, default_value = "text")]
        format: OutputFormat,
    },
    /// Drive the converter screen from stdin, one event per line
    Interactive {
        #[arg(short, long, value_enum, help = "Initial unit")]
        unit: Option<Unit>,
        #[arg(short, long, value_enum, help = "Initial language")]
        lang: Option<Language>,
    },
    /// Show effective configuration
    Config(ConfigArgs),
}

#[derive(Args)]
struct ConfigArgs {
    #[command(subcommand)]
    action: ConfigAction,
}

#[derive(Subcommand)]
enum ConfigAction {
    List,
    Get { key: String },
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    let config = config::load(cli.config.as_deref())?;
    logging::init(cli.verbose, &config.logging.level)?;
    debug!(
        path = ?config::resolve_path(cli.config.as_deref()),
        language = %config.ui.language,
        unit = %config.ui.unit,
        "configuration loaded"
    );

    match &cli.command {
        Commands::Convert {
            value,
            unit,
            lang,
            format,
        } => {
            return commands::convert::run(
                value,
                unit.unwrap_or(config.ui.unit),
                lang.unwrap_or(config.ui.language),
                *format,
            );
        }
        Commands::Units { lang, format } => {
            commands::units::list(lang.unwrap_or(config.ui.language), *format)?;
        }
        Commands::Interactive { unit, lang } => {
            let mut shell = ConverterShell::new(
                lang.unwrap_or(config.ui.language),
                unit.unwrap_or(config.ui.unit),
            );
            let stdin = io::stdin();
            let mut stdout = io::stdout();
            commands::interactive::run(&mut shell, stdin.lock(), &mut stdout)?;
        }
        Commands::Config(args) => match &args.action {
            ConfigAction::List => commands::config::list(&config)?,
            ConfigAction::Get { key } => commands::config::get(key, &config)?,
        },
    }

    Ok(ExitCode::SUCCESS)
}
