//! Binary entry point: pick a demo and run it against the configured endpoint

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use llm_playground::api::OpenAIClient;
use llm_playground::cli::{Cli, Demo};
use llm_playground::config::Config;
use llm_playground::console::Presenter;
use llm_playground::demos;

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    let mut config = Config::load().await?;
    init_tracing(cli.debug || config.debug);

    if let Some(model) = cli.model {
        config.model = model;
    }
    if let Some(base_url) = cli.base_url {
        config.base_url = base_url;
    }
    if let Some(max_tokens) = cli.max_tokens {
        config.max_tokens = max_tokens;
    }

    let client = OpenAIClient::new(config)?;
    let mut presenter = Presenter::new();

    match cli.demo {
        Some(Demo::Chat) => demos::chat::run(&client, &mut presenter).await?,
        Some(Demo::Planner) => demos::planner::run(&client, &mut presenter).await?,
        Some(Demo::Storyteller) => demos::storyteller::run(&client, &mut presenter).await?,
        None => demos::run_menu(&client, &mut presenter).await?,
    }

    Ok(())
}

/// Route diagnostics to stderr so stdout stays the presenter's surface.
fn init_tracing(debug: bool) {
    let filter = if debug {
        EnvFilter::new("llm_playground=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
