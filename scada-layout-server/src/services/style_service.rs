//! Page-to-table/cell style propagation.
//!
//! Colors always come from the page and are upper-cased. Sizes always come
//! from the table or cell; the page never supplies one, except for its own
//! index title.

use scada_layout_api::models::{CellStyle, FooterStyle, PageTitleStyle, TableStyle};

use crate::models::{CellConfig, PageStyleConfig, TableConfig};

/// Font sizes a cell overrides for each of its text slots.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CellFontSizes {
    pub title: u32,
    pub value: u32,
    pub data_at: u32,
    pub alarm: u32,
}

impl From<&CellConfig> for CellFontSizes {
    fn from(cell: &CellConfig) -> Self {
        Self {
            title: cell.sub_title_font_size,
            value: cell.value_font_size,
            data_at: cell.data_at_font_size,
            alarm: cell.alarm_font_size,
        }
    }
}

pub fn normalize_color(color: &str) -> String {
    color.to_uppercase()
}

pub fn resolve_cell_style(page: &PageStyleConfig, sizes: CellFontSizes) -> CellStyle {
    CellStyle {
        title_background_color: normalize_color(&page.sub_title_background_color),
        title_font_color: normalize_color(&page.sub_title_font_color),
        title_font_size: sizes.title,
        value_background_color: normalize_color(&page.value_background_color),
        value_font_color: normalize_color(&page.value_font_color),
        value_font_size: sizes.value,
        data_at_font_color: normalize_color(&page.data_at_font_color),
        data_at_font_size: sizes.data_at,
        alarm_background_color: normalize_color(&page.alarm_background_color),
        alarm_font_color: normalize_color(&page.alarm_font_color),
        alarm_font_size: sizes.alarm,
    }
}

pub fn resolve_table_style(page: &PageStyleConfig, table: &TableConfig) -> TableStyle {
    TableStyle {
        width: table.style.width,
        height: table.style.height,
        title_font_color: normalize_color(&page.title_font_color),
        title_font_size: table.title_font_size,
        title_bg_color: normalize_color(&page.title_background_color),
    }
}

pub fn resolve_footer_style(page: &PageStyleConfig, table: &TableConfig) -> FooterStyle {
    FooterStyle {
        value_font_color: normalize_color(&page.footer_font_color),
        value_font_size: table.footer_font_size,
    }
}

pub fn resolve_page_title_style(page: &PageStyleConfig) -> PageTitleStyle {
    PageTitleStyle {
        background_color: normalize_color(&page.index_title_background_color),
        font_color: normalize_color(&page.index_title_font_color),
        font_size: page.index_title_font_size,
    }
}
