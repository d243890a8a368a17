use crate::params::{RawManifestParams, resolve_params};
use crate::state::AppState;

use axum::{
    Json,
    extract::{Query, State},
    http::{HeaderMap, StatusCode, header},
    response::{IntoResponse, Response},
};
use serde::Serialize;
use tracing::error;
use updraft_core::prelude::*;

pub struct ApiError(anyhow::Error);

impl<E> From<E> for ApiError
where
    E: Into<anyhow::Error>,
{
    fn from(err: E) -> Self {
        Self(err.into())
    }
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    fn new(message: impl Into<String>) -> Self {
        Self {
            error: message.into(),
        }
    }
}

/// RFC 7807-shaped body for failures the client cannot correct.
#[derive(Debug, Serialize)]
pub struct ProblemDetails {
    pub status: u16,
    pub title: String,
    pub detail: String,
}

impl ProblemDetails {
    fn internal(detail: impl Into<String>) -> Self {
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR.as_u16(),
            title: "An error occurred while processing your request.".to_string(),
            detail: detail.into(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if let Some(validation_err) = self.0.downcast_ref::<ValidationError>() {
            return (
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse::new(validation_err.to_string())),
            )
                .into_response();
        }

        if let Some(store_err) = self.0.downcast_ref::<StoreError>() {
            return match store_err {
                StoreError::UnknownRuntimeVersion(_) => (
                    StatusCode::NOT_FOUND,
                    Json(ErrorResponse::new(store_err.to_string())),
                )
                    .into_response(),
                StoreError::NotFound(_) => (
                    StatusCode::NOT_FOUND,
                    Json(ErrorResponse::new("Asset not found.")),
                )
                    .into_response(),
                StoreError::Metadata => (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(ProblemDetails::internal(store_err.to_string())),
                )
                    .into_response(),
                StoreError::Io(_) => {
                    error!("storage failure: {store_err}");
                    (
                        StatusCode::INTERNAL_SERVER_ERROR,
                        Json(ProblemDetails::internal("Internal Server Error")),
                    )
                        .into_response()
                }
            };
        }

        error!("unhandled failure: {}", self.0);
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ProblemDetails::internal("Internal Server Error")),
        )
            .into_response()
    }
}

/// GET /manifest
///
/// The resolution pipeline: validate parameters, check the runtime-version
/// directory, read the metadata document, project the platform's assets and
/// assemble the response. Short-circuits on the first failing stage.
pub async fn get_manifest<S: UpdateStore>(
    State(state): State<AppState<S>>,
    Query(query): Query<RawManifestParams>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, ApiError> {
    let params = resolve_params(&query, &headers)?;
    let runtime_version = params.runtime_version;

    if !state.store.runtime_version_exists(&runtime_version).await {
        return Err(StoreError::UnknownRuntimeVersion(runtime_version).into());
    }

    let metadata = state.store.read_metadata(&runtime_version).await?;
    let created_at = state.store.created_at(&runtime_version).await?;

    let assets = project_assets(
        &metadata,
        params.platform,
        &runtime_version,
        &state.config.base_url,
    );

    Ok(Json(Manifest::new(created_at, runtime_version, assets)))
}

#[derive(serde::Deserialize)]
pub struct AssetQuery {
    asset: Option<String>,
}

/// GET /assets?asset=updates/{runtimeVersion}/{path}
///
/// Serves the file bytes the projected manifest URLs point at. The query
/// value is a path relative to the store root, so parent-directory segments
/// are rejected outright.
pub async fn download_asset<S: UpdateStore>(
    State(state): State<AppState<S>>,
    Query(query): Query<AssetQuery>,
) -> Result<impl IntoResponse, ApiError> {
    let asset = query
        .asset
        .as_deref()
        .filter(|path| !path.is_empty() && !path.split('/').any(|segment| segment == ".."))
        .ok_or(ValidationError::InvalidAssetPath)?;

    let data = state.store.read_asset(asset).await?;
    let content_type = mime_guess::from_path(asset).first_or_octet_stream();

    Ok(([(header::CONTENT_TYPE, content_type.to_string())], data))
}
