use serde::{Deserialize, Serialize};

use super::CellDetail;

/// One data panel of a page.
#[cfg_attr(feature = "docs", derive(utoipa::ToSchema))]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TableDetail {
    /// Panel kind, interpreted by the front end
    #[serde(rename = "type")]
    pub table_type: String,
    /// Resolved panel style
    pub style: TableStyle,
    /// Panel title
    pub title: String,
    /// Column headers
    pub header: Vec<HeaderDetail>,
    /// Cell rows, each as wide as `header`
    pub detail: Vec<Vec<CellDetail>>,
    /// Footer style
    pub footer: FooterDetail,
}

#[cfg_attr(feature = "docs", derive(utoipa::ToSchema))]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TableStyle {
    pub width: u32,
    pub height: u32,
    pub title_font_color: String,
    pub title_font_size: u32,
    pub title_bg_color: String,
}

#[cfg_attr(feature = "docs", derive(utoipa::ToSchema))]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HeaderDetail {
    pub title: String,
}

#[cfg_attr(feature = "docs", derive(utoipa::ToSchema))]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FooterDetail {
    pub style: FooterStyle,
}

#[cfg_attr(feature = "docs", derive(utoipa::ToSchema))]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FooterStyle {
    pub value_font_color: String,
    pub value_font_size: u32,
}
