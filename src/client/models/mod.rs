//! Warcraft Logs API data models
//!
//! Ranking documents are passed through verbatim; only the pieces the
//! all-stars aggregation reads are given typed shapes.

mod auth;
mod ranking;

pub use auth::AccessToken;
pub use ranking::{AllStarEntry, Member, RankingResponse};
