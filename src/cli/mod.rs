//! CLI command definitions and handlers

use std::path::PathBuf;

use clap::{Parser, Subcommand};

pub mod args;
pub mod bot;
pub mod cache;
pub mod context;
pub mod rankings;
pub mod serve;

pub use args::{GlobalOptions, OutputFormat};
pub use context::CommandContext;

use crate::config::DEFAULT_PORT;

/// Guildboard - guild rankings dashboard backend and chat bot
#[derive(Parser, Debug)]
#[command(name = "guildboard")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Output format (pretty, json)
    #[arg(
        long,
        global = true,
        env = "GUILDBOARD_FORMAT",
        default_value = "pretty",
        hide_env = true
    )]
    pub format: OutputFormat,

    /// Directory for cached upstream responses
    #[arg(
        long,
        global = true,
        env = "GUILDBOARD_CACHE_DIR",
        default_value = ".cache",
        hide_env = true
    )]
    pub cache_dir: PathBuf,

    /// Enable debug logging
    #[arg(long, global = true, env = "GUILDBOARD_DEBUG", hide_env = true)]
    pub debug: bool,

    /// Bypass cache, fetch fresh data from the upstream
    #[arg(long, global = true, env = "GUILDBOARD_NO_CACHE", hide_env = true)]
    pub no_cache: bool,

    /// Warcraft Logs client id
    #[arg(long, global = true, env = "WCL_CLIENT_ID", hide_env_values = true)]
    pub client_id: Option<String>,

    /// Warcraft Logs client secret
    #[arg(long, global = true, env = "WCL_CLIENT_SECRET", hide_env_values = true)]
    pub client_secret: Option<String>,

    /// Override the OAuth token endpoint (development/testing)
    #[arg(long, global = true, env = "GUILDBOARD_TOKEN_URL", hide = true)]
    pub token_url: Option<String>,

    /// Override the GraphQL endpoint (development/testing)
    #[arg(long, global = true, env = "GUILDBOARD_API_URL", hide = true)]
    pub api_url: Option<String>,

    /// GRM roster CSV export
    #[arg(
        long,
        global = true,
        env = "GUILDBOARD_GRM_PATH",
        default_value = "db/grm.csv",
        hide_env = true
    )]
    pub grm_path: PathBuf,

    /// Directory of static frontend files
    #[arg(
        long,
        global = true,
        env = "GUILDBOARD_STATIC_DIR",
        default_value = "frontend",
        hide_env = true
    )]
    pub static_dir: PathBuf,
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run the HTTP API and static frontend
    Serve {
        /// Port to listen on
        #[arg(long, env = "PORT", default_value_t = DEFAULT_PORT)]
        port: u16,
    },

    /// Run the chat bot
    Bot {
        /// Bot token
        #[arg(long, env = "DISCORD_TOKEN", hide_env_values = true)]
        token: Option<String>,
    },

    /// Print guild rankings for one zone
    Rankings {
        /// Zone id (defaults to 1028)
        #[arg(long)]
        zone: Option<String>,
    },

    /// Print each member's best all-stars entry per zone
    Allstars,

    /// Manage local response cache
    #[command(subcommand)]
    Cache(CacheCommands),
}

/// Cache subcommands
#[derive(Subcommand, Debug)]
pub enum CacheCommands {
    /// Show cache statistics
    Status,
    /// Clear all cached data
    Clear,
    /// Print cache directory path
    Path,
}
