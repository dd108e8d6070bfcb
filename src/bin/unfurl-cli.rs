use clap::{Parser, Subcommand};
use std::path::PathBuf;

use preview_unfurler::config::{load_config, UnfurlerConfig};
use preview_unfurler::fetch::run_plan;
use preview_unfurler::observability::init_logging;
use preview_unfurler::{resolve, Capability, FetchClient};

#[derive(Parser)]
#[command(name = "unfurl-cli")]
#[command(about = "Resolve explorer paths to preview routing decisions", long_about = None)]
struct Cli {
    /// Optional TOML config with upstream API base URLs.
    #[arg(short, long)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Resolve a path and print the Match as JSON
    Resolve {
        #[arg(short, long, default_value = "bitcoin")]
        network: String,
        path: String,
    },
    /// Resolve a path and execute its data-fetch plan, printing the payload
    Fetch {
        #[arg(short, long, default_value = "bitcoin")]
        network: String,
        path: String,
    },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => load_config(path)?,
        None => UnfurlerConfig::default(),
    };
    init_logging(&config.observability.log_level);

    match cli.command {
        Commands::Resolve { network, path } => {
            let matched = resolve(&network, &path, Capability::Render);
            println!("{}", serde_json::to_string_pretty(&matched)?);
        }
        Commands::Fetch { network, path } => {
            let matched = resolve(&network, &path, Capability::Render);
            let data = match (matched.plan, &matched.params) {
                (Some(plan), Some(params)) => {
                    let client = FetchClient::new();
                    run_plan(plan, params, &client, &config.api).await
                }
                _ => None,
            };
            let output = serde_json::json!({
                "match": matched,
                "data": data,
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
    }

    Ok(())
}
