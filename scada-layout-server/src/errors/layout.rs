use std::fmt;

use axum::http::StatusCode;

#[derive(Debug, thiserror::Error)]
pub enum LayoutError {
    #[error("{path}: {message} {{file decode failed}}")]
    Decode { path: String, message: String },

    #[error("{pattern}: {source} {{tv config files glob failed}}")]
    Glob {
        pattern: String,
        #[source]
        source: std::io::Error,
    },

    #[error("not found")]
    NotFound,

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("{0}")]
    ConfigurationDefect(String),
}

impl LayoutError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            LayoutError::NotFound => StatusCode::NOT_FOUND,
            LayoutError::Decode { .. } => StatusCode::INTERNAL_SERVER_ERROR,
            LayoutError::Glob { .. } => StatusCode::INTERNAL_SERVER_ERROR,
            LayoutError::Validation(_) => StatusCode::INTERNAL_SERVER_ERROR,
            LayoutError::ConfigurationDefect(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// Structural rule a page, table or cell document broke.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ValidationRule {
    #[error("title is empty")]
    EmptyTitle,

    #[error("field is empty")]
    EmptyField,

    #[error("type is empty")]
    EmptyType,

    #[error("page has no tables")]
    NoTables,

    #[error("table has no headers")]
    NoHeaders,

    #[error("row {row} has {actual} cells but the table has {expected} headers")]
    RowWidthMismatch {
        row: usize,
        expected: usize,
        actual: usize,
    },

    #[error("max value alarm text given without max value")]
    MaxAlarmWithoutMaxValue,

    #[error("min value alarm text given without min value")]
    MinAlarmWithoutMinValue,

    #[error("min value {min} is greater than max value {max}")]
    ThresholdRange { min: f64, max: f64 },
}

/// A rule violation together with where in the document it happened.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    pub page: String,
    pub table: Option<String>,
    pub cell: Option<String>,
    pub rule: ValidationRule,
}

impl ValidationError {
    pub fn page(page: &str, rule: ValidationRule) -> Self {
        Self {
            page: page.to_string(),
            table: None,
            cell: None,
            rule,
        }
    }

    pub fn table(page: &str, table: &str, rule: ValidationRule) -> Self {
        Self {
            table: Some(table.to_string()),
            ..Self::page(page, rule)
        }
    }

    pub fn cell(page: &str, table: &str, cell: &str, rule: ValidationRule) -> Self {
        Self {
            cell: Some(cell.to_string()),
            ..Self::table(page, table, rule)
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Page: {}", self.page)?;
        if let Some(table) = &self.table {
            write!(f, ", Table: {table}")?;
        }
        if let Some(cell) = &self.cell {
            write!(f, ", Cell: {cell}")?;
        }
        write!(f, " {{{}}}", self.rule)
    }
}

impl std::error::Error for ValidationError {}
