use super::LayoutError;

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("Layout error: {0}")]
    LayoutError(#[from] LayoutError),

    #[error("Internal error: {0}")]
    InternalError(#[from] anyhow::Error),
}
