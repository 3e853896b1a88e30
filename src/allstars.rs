//! All-stars aggregation
//!
//! For each configured zone, picks every member's highest-scoring all-stars
//! entry and emits one flat record per member per zone.

use serde::Serialize;

use crate::client::RankingsApi;
use crate::client::models::{AllStarEntry, Member};
use crate::error::Result;

/// One member's best all-stars result in one zone
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AllStarsRecord {
    pub name: String,
    pub zone: i64,
    #[serde(rename = "allStars")]
    pub all_stars: AllStarsSummary,
}

/// The fields of the winning all-stars entry
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AllStarsSummary {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub partition: Option<i64>,
    pub points: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rank: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rank_percent: Option<f64>,
    /// Size of the ranked population, reported upstream as `total`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub out_of: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub server_rank: Option<i64>,
}

impl From<&AllStarEntry> for AllStarsSummary {
    fn from(entry: &AllStarEntry) -> Self {
        Self {
            partition: entry.partition,
            points: entry.points,
            rank: entry.rank,
            rank_percent: entry.rank_percent,
            out_of: entry.total,
            server_rank: entry.server_rank,
        }
    }
}

/// Highest-points entry; on ties the earliest entry is kept.
pub fn best_entry(entries: &[AllStarEntry]) -> Option<&AllStarEntry> {
    let mut best: Option<&AllStarEntry> = None;
    for entry in entries {
        match best {
            Some(current) if entry.points <= current.points => {}
            _ => best = Some(entry),
        }
    }
    best
}

/// Record for one member in one zone, or `None` when the member has no all-stars data.
pub fn record_for(member: &Member, zone: i64) -> Option<AllStarsRecord> {
    let best = best_entry(member.all_stars())?;
    Some(AllStarsRecord {
        name: member.name.clone(),
        zone,
        all_stars: best.into(),
    })
}

/// Fetch each zone in order and collect the per-member best entries.
///
/// Zones are fetched one after another. The first failing zone aborts the
/// whole aggregation; no partial list is returned.
pub async fn collect_all_stars<C>(client: &C, zones: &[i64]) -> Result<Vec<AllStarsRecord>>
where
    C: RankingsApi + ?Sized,
{
    let mut records = Vec::new();

    for &zone in zones {
        let response = client.fetch_rankings(zone).await?;
        let members = response.members();
        let before = records.len();

        records.extend(members.iter().filter_map(|m| record_for(m, zone)));

        log::debug!(
            "Zone {}: {} of {} members have all-stars data",
            zone,
            records.len() - before,
            members.len()
        );
    }

    Ok(records)
}
