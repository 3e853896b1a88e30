//! `rankings` and `allstars` commands

use crate::allstars::{AllStarsRecord, best_entry, collect_all_stars};
use crate::cli::{CommandContext, GlobalOptions, OutputFormat};
use crate::client::RankingsApi;
use crate::client::models::RankingResponse;
use crate::error::Result;
use crate::output::json::format_json;
use crate::server::parse_zone_id;

/// Print the guild rankings for one zone.
pub async fn rankings(opts: &GlobalOptions, zone: Option<&str>) -> Result<()> {
    let ctx = CommandContext::new(opts)?;
    let zone_id = parse_zone_id(zone);

    let response = ctx.client.fetch_rankings(zone_id).await?;

    match ctx.format {
        OutputFormat::Json => println!("{}", format_json(response.as_value())?),
        OutputFormat::Pretty => print!("{}", render_rankings(zone_id, &response)),
    }
    Ok(())
}

/// Print each member's best all-stars entry per configured zone.
pub async fn allstars(opts: &GlobalOptions) -> Result<()> {
    let ctx = CommandContext::new(opts)?;

    let records = collect_all_stars(ctx.client.as_ref(), &ctx.config.allstars_zones).await?;

    match ctx.format {
        OutputFormat::Json => println!("{}", format_json(&records)?),
        OutputFormat::Pretty => print!("{}", render_allstars(&records)),
    }
    Ok(())
}

fn render_rankings(zone_id: i64, response: &RankingResponse) -> String {
    let members = response.members();
    let mut out = format!("Zone {} - {} members\n", zone_id, members.len());

    for member in &members {
        let points = best_entry(member.all_stars())
            .map(|e| format!("{:.2}", e.points))
            .unwrap_or_else(|| "-".to_string());
        out.push_str(&format!("  {:<20} {:>10}\n", member.name, points));
    }
    out
}

fn render_allstars(records: &[AllStarsRecord]) -> String {
    if records.is_empty() {
        return "No all-stars data found\n".to_string();
    }

    let mut out = format!(
        "{:<20} {:>6} {:>10} {:>8} {:>8}\n",
        "NAME", "ZONE", "POINTS", "RANK", "SERVER"
    );
    for record in records {
        let s = &record.all_stars;
        out.push_str(&format!(
            "{:<20} {:>6} {:>10.2} {:>8} {:>8}\n",
            record.name,
            record.zone,
            s.points,
            optional(s.rank),
            optional(s.server_rank),
        ));
    }
    out
}

fn optional(value: Option<i64>) -> String {
    value.map_or_else(|| "-".to_string(), |v| v.to_string())
}
