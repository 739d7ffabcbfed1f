use axum::{Extension, Json};
use creatorcalc_core::{validate_signup, SignupErrors, SignupForm, UserRecord, UserRole};
use serde::Serialize;

use crate::middleware::RequestId;

use super::{ApiError, ApiResponse};

#[derive(Debug, Serialize)]
pub(in crate::api) struct SignupValidation {
    pub valid: bool,
    pub errors: SignupErrors,
    /// Preview of the record the identity provider would create. Not persisted.
    pub user: Option<UserRecord>,
}

/// POST /api/v1/signup/validate: field-level signup checks.
pub(in crate::api) async fn validate(
    Extension(req_id): Extension<RequestId>,
    Json(body): Json<SignupForm>,
) -> Result<Json<ApiResponse<SignupValidation>>, ApiError> {
    let errors = validate_signup(&body);
    let valid = errors.is_empty();
    let user = valid.then(|| {
        UserRecord::new(
            body.email.trim(),
            body.role.unwrap_or(UserRole::Creator),
        )
    });

    Ok(Json(ApiResponse::new(
        SignupValidation {
            valid,
            errors,
            user,
        },
        req_id.0,
    )))
}
