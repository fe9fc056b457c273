pub mod api;
pub mod layout;

pub use api::ApiError;
pub use layout::{LayoutError, ValidationError, ValidationRule};

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use uuid::Uuid;

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::LayoutError(e) => {
                let status = e.status_code();
                if status == StatusCode::NOT_FOUND {
                    tracing::debug!("{}", e);
                } else {
                    tracing::warn!("Layout error: {}", e);
                }
                (status, e.to_string())
            }
            ApiError::InternalError(e) => {
                let error_id = Uuid::new_v4();
                tracing::error!(error_id = ?error_id, "Internal error: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    format!("Internal server error ({error_id})"),
                )
            }
        };

        // Plain text body, the TV front end only displays it
        (status, message).into_response()
    }
}
