//! Request handlers for the JSON API

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use chrono::Utc;
use serde::Serialize;
use serde_json::Value;

use super::state::AppState;
use crate::allstars::{AllStarsRecord, collect_all_stars};
use crate::config::DEFAULT_ZONE_ID;
use crate::roster::{GrmRecord, read_grm};

// ============================================================================
// Request/Response types
// ============================================================================

/// Raw query pairs; repeated keys are kept in order.
type QueryPairs = Vec<(String, String)>;

/// First `zoneID` value in the query string, if any.
fn first_zone_param(pairs: &[(String, String)]) -> Option<&str> {
    pairs
        .iter()
        .find(|(k, _)| k == "zoneID")
        .map(|(_, v)| v.as_str())
}

/// Liveness response
#[derive(Debug, Serialize)]
pub struct StatusResponse {
    pub status: &'static str,
    pub timestamp: String,
}

/// List payload wrapper
#[derive(Debug, Serialize)]
pub struct DataResponse<T> {
    pub data: T,
}

/// Error response
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

type ApiFailure = (StatusCode, Json<ErrorResponse>);

fn failure(status: StatusCode, error: &str, details: Option<String>) -> ApiFailure {
    (
        status,
        Json(ErrorResponse {
            error: error.to_string(),
            details,
        }),
    )
}

/// Leading decimal integer of `raw`, the way a browser-side `parseInt` reads it.
///
/// Missing, unparsable and zero values all fall back to the default zone.
pub fn parse_zone_id(raw: Option<&str>) -> i64 {
    let Some(raw) = raw else {
        return DEFAULT_ZONE_ID;
    };

    let s = raw.trim_start();
    let (negative, digits) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };
    let end = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());

    match digits[..end].parse::<i64>() {
        Ok(0) | Err(_) => DEFAULT_ZONE_ID,
        Ok(n) if negative => -n,
        Ok(n) => n,
    }
}

// ============================================================================
// Handlers
// ============================================================================

/// GET /api/status
pub async fn status() -> Json<StatusResponse> {
    Json(StatusResponse {
        status: "OK",
        timestamp: Utc::now().to_rfc3339(),
    })
}

/// GET /api/rankings?zoneID=<n>
pub async fn rankings(
    State(state): State<AppState>,
    Query(pairs): Query<QueryPairs>,
) -> Result<Json<Value>, ApiFailure> {
    let zone_id = parse_zone_id(first_zone_param(&pairs));

    match state.client.fetch_rankings(zone_id).await {
        Ok(response) => Ok(Json(response.into_value())),
        Err(e) if e.is_not_found() => {
            log::warn!("No guild data for zone {}: {}", zone_id, e);
            Err(failure(
                StatusCode::NOT_FOUND,
                "No guild data found for this zone.",
                None,
            ))
        }
        Err(e) => {
            log::error!("Error fetching rankings for zone {}: {}", zone_id, e);
            Err(failure(
                StatusCode::INTERNAL_SERVER_ERROR,
                "Failed to fetch rankings",
                Some(e.to_string()),
            ))
        }
    }
}

/// GET /api/allstars
pub async fn allstars(
    State(state): State<AppState>,
) -> Result<Json<DataResponse<Vec<AllStarsRecord>>>, ApiFailure> {
    match collect_all_stars(state.client.as_ref(), &state.allstars_zones).await {
        Ok(data) => Ok(Json(DataResponse { data })),
        Err(e) => {
            log::error!("Error fetching allStars data: {}", e);
            Err(failure(
                StatusCode::INTERNAL_SERVER_ERROR,
                "Failed to fetch allStars data",
                Some(e.to_string()),
            ))
        }
    }
}

/// GET /api/attendance
pub async fn attendance() -> Response {
    failure(
        StatusCode::NOT_IMPLEMENTED,
        "Attendance tracking is not implemented.",
        None,
    )
    .into_response()
}

/// GET /api/grm
pub async fn grm(
    State(state): State<AppState>,
) -> Result<Json<DataResponse<Vec<GrmRecord>>>, ApiFailure> {
    match read_grm(&state.grm_path).await {
        Ok(data) => Ok(Json(DataResponse { data })),
        Err(e) => {
            log::error!("Error reading {}: {}", state.grm_path.display(), e);
            Err(failure(
                StatusCode::INTERNAL_SERVER_ERROR,
                "Failed to read CSV file",
                None,
            ))
        }
    }
}
