use scada_layout_api::models::{
    CellDetail, FooterDetail, HeaderDetail, Page, TableDetail,
};

use crate::errors::ValidationError;
use crate::models::{CellConfig, PageConfig, TableConfig, TvConfig};
use crate::services::{
    CellFontSizes, TimeProvider, format_timestamp, resolve_cell_style, resolve_footer_style,
    resolve_page_title_style, resolve_table_style,
};

/// Turns validated page/table/cell documents into display-ready records.
///
/// Every builder is fail-fast: the first invalid page, table or cell aborts
/// the whole call and nothing partial is returned.
pub struct LayoutBuilder<'a> {
    time_provider: &'a dyn TimeProvider,
}

impl<'a> LayoutBuilder<'a> {
    pub fn new(time_provider: &'a dyn TimeProvider) -> Self {
        Self { time_provider }
    }

    pub fn build_pages(&self, config: &TvConfig) -> Result<Vec<Page>, ValidationError> {
        config.pages.iter().map(|page| self.build_page(page)).collect()
    }

    pub fn build_page(&self, page: &PageConfig) -> Result<Page, ValidationError> {
        page.validate()
            .map_err(|rule| ValidationError::page(&page.title, rule))?;

        let detail = page
            .detail
            .iter()
            .map(|table| self.build_table(page, table))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Page {
            title: page.title.clone(),
            display_time: page.display_time,
            style: resolve_page_title_style(&page.style),
            detail,
        })
    }

    pub fn build_table(
        &self,
        page: &PageConfig,
        table: &TableConfig,
    ) -> Result<TableDetail, ValidationError> {
        table
            .validate()
            .map_err(|rule| ValidationError::table(&page.title, &table.title, rule))?;

        let header = table
            .header
            .iter()
            .map(|header| HeaderDetail {
                title: header.title.clone(),
            })
            .collect();

        let detail = table
            .detail
            .iter()
            .map(|row| {
                row.iter()
                    .map(|cell| self.build_cell(page, table, cell))
                    .collect::<Result<Vec<_>, _>>()
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(TableDetail {
            table_type: table.table_type.clone(),
            style: resolve_table_style(&page.style, table),
            title: table.title.clone(),
            header,
            detail,
            footer: FooterDetail {
                style: resolve_footer_style(&page.style, table),
            },
        })
    }

    pub fn build_cell(
        &self,
        page: &PageConfig,
        table: &TableConfig,
        cell: &CellConfig,
    ) -> Result<CellDetail, ValidationError> {
        cell.validate()
            .map_err(|rule| ValidationError::cell(&page.title, &table.title, &cell.title, rule))?;

        Ok(CellDetail {
            title: cell.title.clone(),
            field: cell.field.clone(),
            data_at: format_timestamp(self.time_provider.now()),
            value: cell.value.clone(),
            value_unit: String::new(),
            display_dp: cell.dp.unwrap_or(0),
            zero: None,
            bit_trans: None,
            value_trans: None,
            monitor_value: cell.monitor_value.clone(),
            min_value: cell.min_value,
            lower_min_value_alarm_text: cell.min_value_alarm_text.clone(),
            max_value: cell.max_value,
            over_max_value_alarm_text: cell.max_value_alarm_text.clone(),
            style: resolve_cell_style(&page.style, CellFontSizes::from(cell)),
            icons: Vec::new(),
        })
    }
}
