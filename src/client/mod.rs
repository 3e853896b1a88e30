//! Warcraft Logs API client

pub mod api;
#[cfg(test)]
pub mod fixtures;
#[cfg(test)]
pub mod mock;
pub mod models;
pub mod query;
pub mod warcraftlogs;

pub use api::RankingsApi;
#[cfg(test)]
pub use mock::MockWclClient;
pub use warcraftlogs::WclClient;
