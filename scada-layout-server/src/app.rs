use std::sync::Arc;

use axum::Router;
use axum::routing::get;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::configs::Settings;
use crate::handles::*;
use crate::services::{DeviceService, TimeProvider};

pub fn create_app(settings: &Arc<Settings>, time_provider: Arc<dyn TimeProvider>) -> Router {
    let device_service = Arc::new(DeviceService::new(settings, time_provider));

    let layout = Router::new()
        .route("/tv", get(get_tv_layout))
        .route("/openapi.json", get(get_openapi))
        .with_state(LayoutState { device_service });

    Router::new()
        .nest("/web/layout", layout)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}
