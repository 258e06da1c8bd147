use clap::{Parser, Subcommand};
use std::process::ExitCode;

use reelpost::application::errors::BotError;
use reelpost::infrastructure::adapters::webhook;
use reelpost::infrastructure::config::Config;
use reelpost::infrastructure::wiring;

#[derive(Parser)]
#[command(name = "reelpost")]
#[command(about = "Publish movie articles to Blogger from Telegram", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Config file path
    #[arg(short, long, default_value = "config.yaml")]
    config: String,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the webhook server
    Run,
    /// Show version
    Version,
    /// Generate default config
    InitConfig,
}

fn main() -> ExitCode {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_target(false)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Run => run(&cli.config),
        Commands::Version => {
            println!("reelpost v{}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
        Commands::InitConfig => init_config(&cli.config),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("{}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(config_path: &str) -> Result<(), BotError> {
    let config = Config::init(config_path)?;
    tracing::info!("Starting {}", config.bot.name);

    let rt = tokio::runtime::Runtime::new()?;
    rt.block_on(async {
        let state = wiring::app_state(&config)?;
        webhook::serve(state, &config.server.bind).await
    })
}

fn init_config(path: &str) -> Result<(), BotError> {
    if std::path::Path::new(path).exists() {
        tracing::warn!("{} already exists, not overwriting", path);
        return Ok(());
    }
    std::fs::write(path, Config::default_yaml()?)?;
    println!("Wrote default config to {}", path);
    println!("Credentials are read from the environment (TELEGRAM_TOKEN, OMDB_API_KEY, ...)");
    Ok(())
}
