use serde::{Deserialize, Serialize};

use super::Page;

/// Fully resolved layout of one monitoring TV.
#[cfg_attr(feature = "docs", derive(utoipa::ToSchema))]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Device {
    /// Device identifier
    pub id: String,
    /// Base URL that relative icon images are served from
    pub image_base_url: String,
    /// Rotating pages in display order
    pub pages: Vec<Page>,
}
