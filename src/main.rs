use anyhow::Result;
use clap::{Args, Parser, Subcommand, ValueEnum};
use duration_picker::OutputFormat;
use duration_picker::commands;
use duration_picker::config;
use duration_picker::picker::unit::UnitsStyle;
use log::LevelFilter;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "dpick")]
#[command(about = "Headless multi-wheel duration picker")]
#[command(version)]
struct Cli {
    #[arg(long, global = true, help = "Config file (defaults to ~/.duration-picker/config.toml)")]
    config: Option<PathBuf>,
    #[arg(long, global = true, value_enum, default_value_t = LogLevel::Warn)]
    log_level: LogLevel,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Copy, Clone, Eq, PartialEq, Debug, Default, ValueEnum)]
enum LogLevel {
    Off,
    Error,
    #[default]
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    const fn as_level_filter(self) -> LevelFilter {
        match self {
            Self::Off => LevelFilter::Off,
            Self::Error => LevelFilter::Error,
            Self::Warn => LevelFilter::Warn,
            Self::Info => LevelFilter::Info,
            Self::Debug => LevelFilter::Debug,
            Self::Trace => LevelFilter::Trace,
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Split a duration over the configured wheels
    Decompose {
        #[arg(allow_negative_numbers = true, help = "Duration in seconds")]
        seconds: f64,
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
    /// Sum UNIT=COUNT pairs back into seconds
    Compose {
        #[arg(required = true, help = "Pairs such as hours=1 minutes=30")]
        parts: Vec<String>,
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
    /// Print a duration as the picker labels it
    Format {
        #[arg(allow_negative_numbers = true, help = "Duration in seconds")]
        seconds: f64,
        #[arg(long, value_enum, help = "Override the configured units style")]
        style: Option<UnitsStyle>,
    },
    /// Set a duration, replay wheel selections and show the wheels
    Spin {
        #[arg(help = "Duration in seconds")]
        seconds: Option<f64>,
        #[arg(long, help = "Animate the wheels while setting the duration")]
        animated: bool,
        #[arg(long = "select", help = "User selection as UNIT=ROW, may repeat")]
        selections: Vec<String>,
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
    /// Show column widths and label positions
    Layout {
        #[arg(long, default_value = "320", help = "Picker width")]
        width: f64,
        #[arg(long, default_value = "0", help = "Duration in seconds")]
        seconds: f64,
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
    /// Inspect configuration
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
    /// Write a default config file
    Init {
        #[arg(long)]
        force: bool,
    },
}

fn init_logging(level: LogLevel) -> Result<()> {
    fern::Dispatch::new()
        .format(|out, message, record| {
            out.finish(format_args!("[{}] {}", record.level(), message))
        })
        .level(level.as_level_filter())
        .chain(std::io::stderr())
        .apply()?;
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.log_level)?;

    let config_path = match &cli.config {
        Some(path) => path.clone(),
        None => config::default_path()?,
    };

    if let Commands::Config(ConfigArgs {
        action: ConfigAction::Init { force },
    }) = &cli.command
    {
        return commands::config::init(&config_path, *force);
    }

    let config = match &cli.config {
        Some(path) => config::load_from_path(path)?,
        None => config::load()?,
    };

    match &cli.command {
        Commands::Decompose { seconds, format } => {
            commands::duration::decompose(&config, *seconds, *format)?;
        }
        Commands::Compose { parts, format } => {
            commands::duration::compose(parts, *format)?;
        }
        Commands::Format { seconds, style } => {
            commands::duration::format(&config, *seconds, *style)?;
        }
        Commands::Spin {
            seconds,
            animated,
            selections,
            format,
        } => {
            commands::wheel::spin(&config, *seconds, *animated, selections, *format)?;
        }
        Commands::Layout {
            width,
            seconds,
            format,
        } => {
            commands::wheel::layout(&config, *width, *seconds, *format)?;
        }
        Commands::Config(args) => match &args.action {
            ConfigAction::List => commands::config::list(&config)?,
            ConfigAction::Get { key } => commands::config::get(key, &config)?,
            ConfigAction::Init { .. } => {}
        },
    }

    Ok(())
}
