use serde::{Deserialize, Serialize};

use crate::errors::ValidationRule;

/// One device document under `Tv/`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TvConfig {
    /// Empty means the document never matches
    pub id: String,
    pub pages: Vec<PageConfig>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PageConfig {
    pub title: String,
    pub display_time: u32,
    pub style: PageStyleConfig,
    /// Tables of the page
    pub detail: Vec<TableConfig>,
}

/// Page-wide colors. Only the index title carries its own font size here,
/// every other size comes from the table or cell.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PageStyleConfig {
    pub index_title_background_color: String,
    pub index_title_font_color: String,
    pub index_title_font_size: u32,
    pub title_background_color: String,
    pub title_font_color: String,
    pub sub_title_background_color: String,
    pub sub_title_font_color: String,
    pub value_background_color: String,
    pub value_font_color: String,
    pub data_at_font_color: String,
    pub alarm_background_color: String,
    pub alarm_font_color: String,
    pub footer_font_color: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TableConfig {
    #[serde(rename = "type")]
    pub table_type: String,
    pub title: String,
    pub style: TableSizeConfig,
    pub title_font_size: u32,
    pub footer_font_size: u32,
    pub header: Vec<HeaderConfig>,
    /// Rows of cells
    pub detail: Vec<Vec<CellConfig>>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TableSizeConfig {
    pub width: u32,
    pub height: u32,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct HeaderConfig {
    pub title: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CellConfig {
    pub title: String,
    pub field: String,
    pub value: Option<String>,
    pub dp: Option<u32>,
    pub monitor_value: Option<String>,
    pub min_value: Option<f64>,
    pub min_value_alarm_text: Option<String>,
    pub max_value: Option<f64>,
    pub max_value_alarm_text: Option<String>,
    pub sub_title_font_size: u32,
    pub value_font_size: u32,
    pub data_at_font_size: u32,
    pub alarm_font_size: u32,
}

impl PageConfig {
    pub fn validate(&self) -> Result<(), ValidationRule> {
        if self.title.is_empty() {
            return Err(ValidationRule::EmptyTitle);
        }
        if self.detail.is_empty() {
            return Err(ValidationRule::NoTables);
        }

        Ok(())
    }
}

impl TableConfig {
    pub fn validate(&self) -> Result<(), ValidationRule> {
        if self.table_type.is_empty() {
            return Err(ValidationRule::EmptyType);
        }
        if self.title.is_empty() {
            return Err(ValidationRule::EmptyTitle);
        }
        if self.header.is_empty() {
            return Err(ValidationRule::NoHeaders);
        }

        let expected = self.header.len();
        if let Some((row, cells)) = self
            .detail
            .iter()
            .enumerate()
            .find(|(_, cells)| cells.len() != expected)
        {
            return Err(ValidationRule::RowWidthMismatch {
                row,
                expected,
                actual: cells.len(),
            });
        }

        Ok(())
    }
}

impl CellConfig {
    pub fn validate(&self) -> Result<(), ValidationRule> {
        if self.title.is_empty() {
            return Err(ValidationRule::EmptyTitle);
        }
        if self.field.is_empty() {
            return Err(ValidationRule::EmptyField);
        }
        if self.max_value_alarm_text.is_some() && self.max_value.is_none() {
            return Err(ValidationRule::MaxAlarmWithoutMaxValue);
        }
        if self.min_value_alarm_text.is_some() && self.min_value.is_none() {
            return Err(ValidationRule::MinAlarmWithoutMinValue);
        }
        if let (Some(min), Some(max)) = (self.min_value, self.max_value) {
            if min > max {
                return Err(ValidationRule::ThresholdRange { min, max });
            }
        }

        Ok(())
    }
}
