use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod config;
mod constants;
mod error;
mod handlers;
mod models;
mod server;
mod store;

use crate::config::{Cli, Command};
use crate::constants::DEFAULT_LOG_FILTER;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| DEFAULT_LOG_FILTER.into()))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();
    match cli.command() {
        Command::Serve => server::run(cli.config).await,
        Command::Migrate => server::migrate(cli.config).await,
    }
}
