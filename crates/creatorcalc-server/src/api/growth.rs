use axum::{extract::State, Extension, Json};
use creatorcalc_core::{compute_growth, GrowthInputForm, GrowthResult};

use crate::middleware::RequestId;

use super::{pause, ApiError, ApiResponse, AppState};

/// POST /api/v1/growth: follower and earnings projection.
pub(in crate::api) async fn project_growth(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    Json(body): Json<GrowthInputForm>,
) -> Result<Json<ApiResponse<GrowthResult>>, ApiError> {
    let input = body.to_input();

    pause(state.calc_delay).await;

    Ok(Json(ApiResponse::new(compute_growth(&input), req_id.0)))
}
