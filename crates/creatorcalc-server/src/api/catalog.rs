use axum::{Extension, Json};
use creatorcalc_core::pricing::{content_types, niches};
use creatorcalc_core::{required_fields, Platform};
use serde::Serialize;

use crate::middleware::RequestId;

use super::{ApiError, ApiResponse};

#[derive(Debug, Serialize)]
pub(in crate::api) struct PlatformCatalogItem {
    pub platform: Platform,
    pub content_types: &'static [&'static str],
    pub engagement_fields: &'static [&'static str],
}

#[derive(Debug, Serialize)]
pub(in crate::api) struct CatalogData {
    pub platforms: Vec<PlatformCatalogItem>,
    pub niches: Vec<&'static str>,
}

/// GET /api/v1/catalog: form options for every calculator.
pub(in crate::api) async fn get_catalog(
    Extension(req_id): Extension<RequestId>,
) -> Result<Json<ApiResponse<CatalogData>>, ApiError> {
    let platforms = Platform::ALL
        .iter()
        .map(|&platform| PlatformCatalogItem {
            platform,
            content_types: content_types(platform),
            engagement_fields: required_fields(platform),
        })
        .collect();

    Ok(Json(ApiResponse::new(
        CatalogData {
            platforms,
            niches: niches(),
        },
        req_id.0,
    )))
}
