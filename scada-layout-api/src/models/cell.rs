use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// One data point of a table row.
#[cfg_attr(feature = "docs", derive(utoipa::ToSchema))]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CellDetail {
    /// Cell title
    pub title: String,
    /// Data field key
    pub field: String,
    /// Generation time, `YYYY-MM-DD HH:MM:SS` local time
    pub data_at: String,
    /// Literal value, if configured
    pub value: Option<String>,
    /// Unit suffix, currently always empty
    pub value_unit: String,
    /// Decimal places to display
    pub display_dp: u32,
    /// Zero offset applied to the raw value, currently always null
    pub zero: Option<f64>,
    /// Bit to label translation, currently always null
    pub bit_trans: Option<BTreeMap<String, String>>,
    /// Value to label translation, currently always null
    pub value_trans: Option<BTreeMap<String, String>>,
    /// Monitored value reference
    pub monitor_value: Option<String>,
    /// Lower alarm threshold
    pub min_value: Option<f64>,
    /// Alarm text shown below `min_value`
    pub lower_min_value_alarm_text: Option<String>,
    /// Upper alarm threshold
    pub max_value: Option<f64>,
    /// Alarm text shown above `max_value`
    pub over_max_value_alarm_text: Option<String>,
    /// Resolved cell style
    pub style: CellStyle,
    /// Status icons, currently always empty
    pub icons: Vec<CellIcon>,
}

#[cfg_attr(feature = "docs", derive(utoipa::ToSchema))]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CellStyle {
    pub title_background_color: String,
    pub title_font_color: String,
    pub title_font_size: u32,
    pub value_background_color: String,
    pub value_font_color: String,
    pub value_font_size: u32,
    pub data_at_font_color: String,
    pub data_at_font_size: u32,
    pub alarm_background_color: String,
    pub alarm_font_color: String,
    pub alarm_font_size: u32,
}

#[cfg_attr(feature = "docs", derive(utoipa::ToSchema))]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CellIcon {
    /// Icon name in the icon-cut sheet
    pub name: String,
    /// Image URL relative to the device image base URL
    pub image_url: String,
}
