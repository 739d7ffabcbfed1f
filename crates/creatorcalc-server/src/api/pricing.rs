//! Paid pricing report: simulated checkout followed by the gated report.

use axum::{extract::State, Extension, Json};
use chrono::Utc;
use creatorcalc_core::{
    unlock_report, CreatorProfileForm, PaymentPlan, PaymentSessionId, PricingReport,
};
use serde::{Deserialize, Serialize};

use crate::middleware::RequestId;

use super::{pause, ApiError, ApiResponse, AppState};

#[derive(Debug, Deserialize)]
pub(in crate::api) struct CheckoutRequest {
    pub plan: PaymentPlan,
}

#[derive(Debug, Serialize)]
pub(in crate::api) struct CheckoutResponse {
    pub session_id: PaymentSessionId,
    pub plan: PaymentPlan,
    pub amount_usd: u32,
}

#[derive(Debug, Deserialize)]
pub(in crate::api) struct ReportRequest {
    #[serde(default, alias = "sessionId")]
    pub session_id: String,
    #[serde(default)]
    pub profile: CreatorProfileForm,
}

/// POST /api/v1/pricing/checkout: simulate a payment and mint a session id.
pub(in crate::api) async fn checkout(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    Json(body): Json<CheckoutRequest>,
) -> Result<Json<ApiResponse<CheckoutResponse>>, ApiError> {
    pause(state.payment_delay).await;

    let session_id =
        PaymentSessionId::generate(Utc::now().timestamp_millis(), &mut rand::rng());
    tracing::info!(
        session_id = %session_id,
        plan = ?body.plan,
        amount_usd = body.plan.amount_usd(),
        "simulated checkout completed"
    );

    Ok(Json(ApiResponse::new(
        CheckoutResponse {
            session_id,
            plan: body.plan,
            amount_usd: body.plan.amount_usd(),
        },
        req_id.0,
    )))
}

/// POST /api/v1/pricing/report: price a complete profile behind the payment gate.
pub(in crate::api) async fn pricing_report(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    Json(body): Json<ReportRequest>,
) -> Result<Json<ApiResponse<PricingReport>>, ApiError> {
    let rid = &req_id.0;
    let profile = body.profile.to_profile();

    let missing = profile.missing_required_fields();
    if !missing.is_empty() {
        return Err(ApiError::new(
            rid,
            "validation_error",
            format!("missing required fields: {}", missing.join(", ")),
        ));
    }

    pause(state.calc_delay).await;

    let report = unlock_report(state.verifier.as_ref(), &body.session_id, &profile)
        .map_err(|e| ApiError::from_payment(rid, &e))?;

    tracing::info!(
        suggested_price = report.result.suggested_price,
        confidence = report.result.confidence_score,
        "pricing report generated"
    );

    Ok(Json(ApiResponse::new(report, req_id.0)))
}
