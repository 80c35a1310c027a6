mod news;
mod refresh;
mod render;
mod settings;
mod thresholds;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use crate::news::NewsCommands;
use crate::settings::SettingsArgs;
use crate::thresholds::ThresholdCommands;

#[derive(Debug, Parser)]
#[command(name = "moodwire")]
#[command(about = "Weather-driven news briefing")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Fetch weather for the current location and both news feeds
    Refresh {
        #[command(flatten)]
        settings: SettingsArgs,
        /// Print the full outcome as JSON
        #[arg(long)]
        json: bool,
    },
    /// Classify a temperature as cold, cool, or hot
    Classify {
        /// Temperature reading
        #[arg(allow_hyphen_values = true)]
        temperature: f64,
        #[command(flatten)]
        settings: SettingsArgs,
    },
    /// Validate or display temperature thresholds
    Thresholds {
        #[command(subcommand)]
        command: ThresholdCommands,
    },
    /// Query news directly
    News {
        #[command(subcommand)]
        command: NewsCommands,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    init_tracing()?;

    let cli = Cli::parse();
    match cli.command {
        Some(Commands::Refresh { settings, json }) => {
            let config = moodwire_core::load_app_config()?;
            let settings = settings.resolve(config.settings_path.as_deref())?;
            refresh::run_refresh(&config, &settings, json).await?;
        }
        Some(Commands::Classify {
            temperature,
            settings,
        }) => {
            let settings = settings.resolve(crate::settings::env_settings_path().as_deref())?;
            thresholds::run_classify(temperature, &settings);
        }
        Some(Commands::Thresholds { command }) => thresholds::run(command)?,
        Some(Commands::News { command }) => {
            let config = moodwire_core::load_app_config()?;
            news::run(&config, command).await?;
        }
        None => println!("moodwire: run `moodwire refresh` or `moodwire --help`"),
    }

    Ok(())
}

/// `RUST_LOG` wins; otherwise `MOODWIRE_LOG_LEVEL`, defaulting to `info`.
fn init_tracing() -> anyhow::Result<()> {
    let fallback = std::env::var("MOODWIRE_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());
    let env_filter = EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new(fallback))?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();
    Ok(())
}
