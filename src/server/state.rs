//! Shared server state

use std::path::PathBuf;
use std::sync::Arc;

use crate::client::RankingsApi;
use crate::config::Config;

/// State handed to every request handler
#[derive(Clone)]
pub struct AppState {
    /// Rankings source, normally the cached upstream client
    pub client: Arc<dyn RankingsApi>,
    /// GRM roster export read on every `/api/grm` request
    pub grm_path: PathBuf,
    /// Zones aggregated by `/api/allstars`, in order
    pub allstars_zones: Vec<i64>,
}

impl AppState {
    pub fn new(client: Arc<dyn RankingsApi>, config: &Config) -> Self {
        Self {
            client,
            grm_path: config.grm_path.clone(),
            allstars_zones: config.allstars_zones.clone(),
        }
    }
}
