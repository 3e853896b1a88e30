//! Test fixtures and builders for ranking documents
//!
//! Provides builder patterns for creating upstream-shaped JSON with sensible
//! defaults. Import via `use crate::client::fixtures::*` in test modules.

#![allow(dead_code)]

use serde_json::{Value, json};

use super::models::RankingResponse;

// ============================================================================
// AllStarBuilder
// ============================================================================

/// Builder for one `allStars` entry.
#[derive(Debug, Clone)]
pub struct AllStarBuilder {
    partition: i64,
    points: f64,
    rank: i64,
    rank_percent: f64,
    total: i64,
    server_rank: i64,
}

impl AllStarBuilder {
    /// Create a new entry worth the given points.
    pub fn new(points: f64) -> Self {
        Self {
            partition: 1,
            points,
            rank: 100,
            rank_percent: 50.0,
            total: 1000,
            server_rank: 5,
        }
    }

    pub fn partition(mut self, partition: i64) -> Self {
        self.partition = partition;
        self
    }

    pub fn rank(mut self, rank: i64) -> Self {
        self.rank = rank;
        self
    }

    pub fn rank_percent(mut self, rank_percent: f64) -> Self {
        self.rank_percent = rank_percent;
        self
    }

    pub fn total(mut self, total: i64) -> Self {
        self.total = total;
        self
    }

    pub fn server_rank(mut self, server_rank: i64) -> Self {
        self.server_rank = server_rank;
        self
    }

    pub fn build(self) -> Value {
        json!({
            "partition": self.partition,
            "spec": "Any",
            "points": self.points,
            "possiblePoints": 120,
            "rank": self.rank,
            "regionRank": self.rank,
            "serverRank": self.server_rank,
            "rankPercent": self.rank_percent,
            "total": self.total,
        })
    }
}

// ============================================================================
// MemberBuilder
// ============================================================================

/// Builder for one guild member entry.
#[derive(Debug, Clone)]
pub struct MemberBuilder {
    name: String,
    class_id: i64,
    all_stars: Option<Vec<Value>>,
}

impl MemberBuilder {
    /// Create a member with no `allStars` data.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            class_id: 1,
            all_stars: None,
        }
    }

    pub fn class_id(mut self, class_id: i64) -> Self {
        self.class_id = class_id;
        self
    }

    /// Add an `allStars` entry.
    pub fn all_star(mut self, entry: AllStarBuilder) -> Self {
        self.all_stars.get_or_insert_with(Vec::new).push(entry.build());
        self
    }

    pub fn build(self) -> Value {
        let zone_rankings = match self.all_stars {
            Some(all_stars) => json!({ "bestPerformanceAverage": null, "allStars": all_stars }),
            None => json!({ "bestPerformanceAverage": null }),
        };
        json!({
            "id": 1,
            "name": self.name,
            "classID": self.class_id,
            "zoneRankings": zone_rankings,
        })
    }
}

// ============================================================================
// RankingResponseBuilder
// ============================================================================

/// Builder for a full rankings envelope.
#[derive(Debug, Clone, Default)]
pub struct RankingResponseBuilder {
    members: Vec<Value>,
}

impl RankingResponseBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn member(mut self, member: MemberBuilder) -> Self {
        self.members.push(member.build());
        self
    }

    pub fn build(self) -> RankingResponse {
        RankingResponse::new(json!({
            "data": {
                "guildData": {
                    "guild": {
                        "members": { "data": self.members }
                    }
                }
            }
        }))
    }
}

/// Envelope whose `guild` is null.
pub fn missing_guild() -> RankingResponse {
    RankingResponse::new(json!({ "data": { "guildData": { "guild": null } } }))
}
