use std::collections::BTreeMap;

use axum::{extract::State, Extension, Json};
use creatorcalc_core::{
    compute_engagement, required_fields, validate_engagement_input, weekly_trend,
    EngagementCounts, EngagementTier, LenientField, Platform, TrendPoint,
};
use serde::{Deserialize, Serialize};

use crate::middleware::RequestId;

use super::{pause, ApiError, ApiResponse, AppState};

#[derive(Debug, Deserialize)]
pub(in crate::api) struct EngagementRequest {
    pub platform: String,
    /// Field name to raw value; numbers may arrive as strings.
    #[serde(default)]
    pub counts: BTreeMap<String, LenientField>,
}

#[derive(Debug, Serialize)]
pub(in crate::api) struct EngagementResponse {
    pub platform: Platform,
    pub rate_percent: f64,
    pub tier: EngagementTier,
    pub required_fields: &'static [&'static str],
    pub trend: Vec<TrendPoint>,
}

/// POST /api/v1/engagement: engagement rate, tier, and an illustrative trend.
///
/// Rejects a request with a missing platform field or an empty audience as
/// `validation_error`, so no tier is ever reported for a zero denominator.
pub(in crate::api) async fn calculate_engagement(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    Json(body): Json<EngagementRequest>,
) -> Result<Json<ApiResponse<EngagementResponse>>, ApiError> {
    let platform = Platform::parse_lenient(&body.platform);
    let raw: Vec<(&str, String)> = body
        .counts
        .iter()
        .map(|(name, value)| (name.as_str(), value.as_text()))
        .collect();
    let counts =
        EngagementCounts::from_fields(raw.iter().map(|(name, value)| (*name, value.as_str())));

    validate_engagement_input(platform, &counts, |field| {
        body.counts
            .get(field)
            .is_some_and(|value| !value.as_text().trim().is_empty())
    })
    .map_err(|e| ApiError::new(&req_id.0, "validation_error", e.to_string()))?;

    pause(state.calc_delay).await;

    let result = compute_engagement(platform, &counts);
    let trend = weekly_trend(result.rate_percent, &mut rand::rng());
    tracing::debug!(
        platform = %platform,
        rate_percent = result.rate_percent,
        tier = %result.tier,
        "computed engagement"
    );

    Ok(Json(ApiResponse::new(
        EngagementResponse {
            platform,
            rate_percent: result.rate_percent,
            tier: result.tier,
            required_fields: required_fields(platform),
            trend,
        },
        req_id.0,
    )))
}
