use anyhow::Result;
use clap::{Parser, Subcommand};
use nba_today::{Aggregator, Config};
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "nba-today")]
#[command(about = "NBA games, lines and injuries feed", long_about = None)]
struct Cli {
    /// Config file (default: ./config.toml if present)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the HTTP server
    Serve {
        /// Listen address (overrides config and BIND_ADDR)
        #[arg(short, long)]
        bind: Option<String>,
    },
    /// Build today's feed once and print it
    Today,
}

fn load_config(path: Option<PathBuf>) -> Result<Config> {
    match path {
        Some(path) => {
            let mut config = Config::from_file(path)?;
            config.apply_env(|name| std::env::var(name).ok());
            Ok(config)
        }
        None => Config::new(),
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenv::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    let config = load_config(cli.config)?;

    match cli.command {
        Commands::Serve { bind } => {
            let bind = bind.unwrap_or_else(|| config.server.bind.clone());
            info!("nba-today starting...");
            nba_today::server::serve(config, &bind).await
        }
        Commands::Today => {
            let today = Aggregator::from_config(&config).today().await;
            println!("{}", serde_json::to_string_pretty(&today)?);
            Ok(())
        }
    }
}
