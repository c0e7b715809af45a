//! Command line and environment configuration.

use clap::{Parser, Subcommand};
use std::net::SocketAddr;
use std::time::Duration;

use crate::constants::{
    DEFAULT_CONNECT_TIMEOUT_SECS, DEFAULT_DATABASE_URL, DEFAULT_HOST, DEFAULT_PORT,
};

/// `user-service` command arguments. Every setting may also come from the environment (or a `.env` file).
#[derive(Debug, Clone, Parser)]
#[command(name = "user-service", about = "Demo user service backed by PostgreSQL", version)]
pub(crate) struct Cli {
    #[command(subcommand)]
    pub(crate) command: Option<Command>,
    #[command(flatten)]
    pub(crate) config: Config,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Subcommand)]
pub(crate) enum Command {
    /// Initialize the schema, then serve HTTP traffic (the default).
    Serve,
    /// Initialize the schema and exit.
    Migrate,
}

impl Cli {
    /// The selected subcommand, `serve` when none was given.
    pub(crate) fn command(&self) -> Command {
        self.command.unwrap_or(Command::Serve)
    }
}

/// Settings shared by every subcommand.
#[derive(Debug, Clone, clap::Args)]
pub(crate) struct Config {
    /// PostgreSQL connection string.
    #[arg(long, env = "DATABASE_URL", default_value = DEFAULT_DATABASE_URL, global = true)]
    pub(crate) database_url: String,
    /// Address to listen on.
    #[arg(long, env = "HOST", default_value = DEFAULT_HOST, global = true)]
    pub(crate) host: std::net::IpAddr,
    /// Port to listen on.
    #[arg(long, env = "PORT", default_value = DEFAULT_PORT, global = true)]
    pub(crate) port: u16,
    /// Upper bound on establishing a database connection, in seconds.
    #[arg(
        long,
        env = "DB_CONNECT_TIMEOUT_SECS",
        default_value = DEFAULT_CONNECT_TIMEOUT_SECS,
        global = true
    )]
    pub(crate) connect_timeout_secs: u64,
}

impl Config {
    pub(crate) fn listen_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }

    pub(crate) fn connect_timeout(&self) -> Duration {
        Duration::from_secs(self.connect_timeout_secs)
    }
}
