use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod search;

#[derive(Debug, Parser)]
#[command(name = "midway")]
#[command(about = "Find places from a plain-language request")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Run a place search, e.g. "quiet cafe halfway between Oakland and Berkeley"
    Search {
        query: String,
        /// Use the built-in demo data instead of Google Maps
        #[arg(long)]
        demo: bool,
        /// Print the full report as JSON
        #[arg(long)]
        json: bool,
    },
    /// Show how a query is interpreted without searching
    Parse { query: String },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = midway_core::load_app_config()?;

    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    tracing::debug!(env = %config.env, "configuration loaded");

    match cli.command {
        Commands::Search { query, demo, json } => {
            search::run_search(&config, &query, demo, json).await
        }
        Commands::Parse { query } => search::run_parse(&config, &query),
    }
}
