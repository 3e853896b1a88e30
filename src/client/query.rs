//! GraphQL query construction

use serde::Serialize;

use crate::config::GuildIdentity;

/// Request body for the GraphQL endpoint
#[derive(Debug, Serialize)]
pub struct GraphQlRequest {
    pub query: String,
}

/// Build the guild member rankings query for one zone.
///
/// Only the zone varies per call; the guild identity is fixed by configuration.
pub fn rankings_query(guild: &GuildIdentity, zone_id: i64) -> String {
    format!(
        r#"{{
    guildData {{
        guild(id: {id}, serverSlug: "{slug}", serverRegion: "{region}") {{
            members(limit: {limit}) {{
                data {{
                    id
                    name
                    classID
                    zoneRankings(zoneID: {zone_id}, partition: -1)
                }}
            }}
        }}
    }}
}}"#,
        id = guild.id,
        slug = guild.server_slug,
        region = guild.server_region,
        limit = guild.member_limit,
        zone_id = zone_id,
    )
}
