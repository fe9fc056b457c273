use serde::{Deserialize, Serialize};

use super::TableDetail;

/// One rotating screen of a device.
#[cfg_attr(feature = "docs", derive(utoipa::ToSchema))]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Page {
    /// Page title
    pub title: String,
    /// Seconds the page stays on screen
    pub display_time: u32,
    /// Style of the page index title
    pub style: PageTitleStyle,
    /// Tables in on-screen order
    pub detail: Vec<TableDetail>,
}

#[cfg_attr(feature = "docs", derive(utoipa::ToSchema))]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageTitleStyle {
    pub background_color: String,
    pub font_color: String,
    pub font_size: u32,
}
