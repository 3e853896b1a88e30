//! API trait definitions split by responsibility
//!
//! - [`AuthApi`] - Credential exchange
//! - [`RankingsApi`] - Guild rankings queries
//!
//! The caching layer only needs [`RankingsApi`], so authentication stays an
//! implementation detail of the concrete client.

mod auth;
mod rankings;

pub use auth::AuthApi;
pub use rankings::RankingsApi;
