//! Guildboard - guild rankings dashboard backend and chat bot

use clap::Parser;

mod allstars;
mod bot;
mod cache;
mod cli;
mod client;
mod config;
mod error;
mod output;
mod roster;
mod server;

use cli::{CacheCommands, Cli, Commands, GlobalOptions};
use error::Result;

#[tokio::main]
async fn main() {
    let _ = dotenvy::dotenv();

    if let Err(err) = run().await {
        log::debug!("Command failed: {:?}", err);
        eprintln!("Error: {}", err);
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.debug);

    let opts = GlobalOptions::from_cli(&cli);

    match cli.command {
        Commands::Serve { port } => cli::serve::run(&opts, port).await,
        Commands::Bot { token } => cli::bot::run(token).await,
        Commands::Rankings { zone } => cli::rankings::rankings(&opts, zone.as_deref()).await,
        Commands::Allstars => cli::rankings::allstars(&opts).await,
        Commands::Cache(cache_cmd) => match cache_cmd {
            CacheCommands::Status => cli::cache::status(&opts).await,
            CacheCommands::Clear => cli::cache::clear(&opts).await,
            CacheCommands::Path => cli::cache::path(&opts),
        },
    }
}

/// `RUST_LOG` controls the level; `--debug` forces debug output.
fn init_logging(debug: bool) {
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"));
    if debug {
        builder.filter_level(log::LevelFilter::Debug);
    }
    builder.format_timestamp_millis().init();
}
