use std::sync::Arc;

use anyhow::anyhow;
use axum::Json;
use axum::extract::{Query, State};
use scada_layout_api::models::*;
use serde::Deserialize;
use utoipa::{IntoParams, OpenApi};

use crate::errors::ApiError;
use crate::services::DeviceService;

#[derive(Clone)]
pub struct LayoutState {
    pub device_service: Arc<DeviceService>,
}

#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct LayoutQuery {
    /// Device identifier, the first configured device when omitted
    pub id: Option<String>,
}

#[derive(OpenApi)]
#[openapi(
    paths(get_tv_layout),
    components(schemas(
        Device,
        Page,
        PageTitleStyle,
        TableDetail,
        TableStyle,
        HeaderDetail,
        FooterDetail,
        FooterStyle,
        CellDetail,
        CellStyle,
        CellIcon
    )),
    tags((name = "layout", description = "TV layout resolution"))
)]
pub struct ApiDoc;

#[utoipa::path(
    get,
    path = "/web/layout/tv",
    tag = "layout",
    params(LayoutQuery),
    responses(
        (status = 200, description = "Resolved device layout", body = Device),
        (status = 404, description = "No device matches the identifier", body = String),
        (status = 500, description = "Configuration could not be read or is invalid", body = String)
    )
)]
pub async fn get_tv_layout(
    State(state): State<LayoutState>,
    Query(query): Query<LayoutQuery>,
) -> Result<Json<Device>, ApiError> {
    let requested_id = query.id.filter(|id| !id.is_empty());
    let device_service = state.device_service.clone();

    let device = tokio::task::spawn_blocking(move || device_service.resolve(requested_id.as_deref()))
        .await
        .map_err(|e| anyhow!("Layout resolution task failed: {}", e))??;

    Ok(Json(device))
}

pub async fn get_openapi() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}
