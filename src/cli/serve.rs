//! `serve` command: run the HTTP API

use std::sync::Arc;

use crate::cli::{CommandContext, GlobalOptions};
use crate::client::RankingsApi;
use crate::error::Result;
use crate::server::{self, AppState};

/// Start the HTTP server on `port` and block until shutdown.
pub async fn run(opts: &GlobalOptions, port: u16) -> Result<()> {
    let ctx = CommandContext::new(opts)?;

    let client: Arc<dyn RankingsApi> = ctx.client.clone();
    let state = AppState::new(client, &ctx.config);

    server::serve(state, &ctx.config.static_dir, port).await
}
