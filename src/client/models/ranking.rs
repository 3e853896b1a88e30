//! Guild ranking models

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::ApiError;

/// Raw GraphQL response for a guild rankings query.
///
/// Shape: `{ data: { guildData: { guild: { members: { data: [Member] } } } } }`.
/// Serialized exactly as received so callers get the upstream document verbatim.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RankingResponse(Value);

/// `null` counts as absent, matching how the upstream reports missing objects.
fn present(value: Option<&Value>) -> Option<&Value> {
    value.filter(|v| !v.is_null())
}

/// `null`, `false`, zero and the empty string carry no document at all.
fn is_empty_document(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f == 0.0),
        Value::String(s) => s.is_empty(),
        Value::Array(_) | Value::Object(_) => false,
    }
}

impl RankingResponse {
    pub fn new(value: Value) -> Self {
        Self(value)
    }

    pub fn as_value(&self) -> &Value {
        &self.0
    }

    pub fn into_value(self) -> Value {
        self.0
    }

    /// `data.guildData`, if present
    pub fn guild_data(&self) -> Option<&Value> {
        let data = present(self.0.get("data"))?;
        present(data.get("guildData"))
    }

    /// `data.guildData.guild`, if present
    pub fn guild(&self) -> Option<&Value> {
        present(self.guild_data()?.get("guild"))
    }

    /// Whether the document carries the guild object at all.
    #[cfg(test)]
    pub fn has_guild(&self) -> bool {
        self.guild().is_some()
    }

    /// Check the envelope holds the nested guild object.
    ///
    /// The three failures share one kind and differ only in message.
    pub fn validate(self) -> Result<Self, ApiError> {
        if is_empty_document(&self.0) {
            return Err(ApiError::NotFound(
                "Guild not found or permission denied".to_string(),
            ));
        }
        if self.guild_data().is_none() {
            return Err(ApiError::NotFound("Guild data not found".to_string()));
        }
        if self.guild().is_none() {
            return Err(ApiError::NotFound("Guild not found".to_string()));
        }
        Ok(self)
    }

    /// Members listed under `guild.members.data`.
    ///
    /// Entries that do not match the [`Member`] shape are skipped.
    pub fn members(&self) -> Vec<Member> {
        let Some(entries) = self
            .guild()
            .and_then(|g| present(g.get("members")))
            .and_then(|m| present(m.get("data")))
            .and_then(Value::as_array)
        else {
            return Vec::new();
        };

        entries
            .iter()
            .filter_map(|entry| match serde_json::from_value::<Member>(entry.clone()) {
                Ok(member) => Some(member),
                Err(e) => {
                    log::debug!("Skipping unreadable member entry: {}", e);
                    None
                }
            })
            .collect()
    }
}

/// Guild member with per-zone rankings
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Member {
    /// Character name
    pub name: String,

    /// Upstream class identifier
    #[serde(rename = "classID", default)]
    pub class_id: Option<i64>,

    /// Zone rankings blob; only `allStars` is read
    #[serde(default)]
    pub zone_rankings: Option<ZoneRankings>,
}

impl Member {
    /// The member's all-stars entries, if any were reported.
    pub fn all_stars(&self) -> &[AllStarEntry] {
        self.zone_rankings
            .as_ref()
            .and_then(|z| z.all_stars.as_deref())
            .unwrap_or(&[])
    }
}

/// Zone rankings for one member
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ZoneRankings {
    #[serde(default)]
    pub all_stars: Option<Vec<AllStarEntry>>,
}

/// One all-stars record for one partition
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AllStarEntry {
    #[serde(default)]
    pub partition: Option<i64>,

    #[serde(default)]
    pub points: f64,

    #[serde(default)]
    pub rank: Option<i64>,

    #[serde(default)]
    pub rank_percent: Option<f64>,

    /// Number of ranked characters in the bracket
    #[serde(default)]
    pub total: Option<i64>,

    #[serde(default)]
    pub server_rank: Option<i64>,
}
