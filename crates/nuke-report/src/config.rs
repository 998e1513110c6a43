//! Report configuration
//!
//! `ReportConfig` is plain serde data so a host CLI can embed it in its own
//! config file. Missing fields fall back to the defaults.

use serde::{Deserialize, Serialize};

/// Section title printed above the table
pub const DEFAULT_TITLE: &str = "Nuking complete:";

/// How the report is rendered
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportConfig {
    /// Section title
    pub title: String,

    /// Row ordering
    pub order: RowOrder,

    /// Output format
    pub format: ReportFormat,

    /// Add an "Error" column with the error message of failed rows
    pub show_errors: bool,

    /// Style the section title
    pub color: bool,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            title: DEFAULT_TITLE.to_string(),
            order: RowOrder::default(),
            format: ReportFormat::default(),
            show_errors: false,
            color: true,
        }
    }
}

impl ReportConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn with_order(mut self, order: RowOrder) -> Self {
        self.order = order;
        self
    }

    pub fn with_format(mut self, format: ReportFormat) -> Self {
        self.format = format;
        self
    }

    pub fn with_errors(mut self, show_errors: bool) -> Self {
        self.show_errors = show_errors;
        self
    }

    pub fn with_color(mut self, color: bool) -> Self {
        self.color = color;
        self
    }
}

/// Order of rows in the rendered report
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RowOrder {
    /// Sorted by identifier
    #[default]
    Identifier,
    /// Whatever order the underlying map yields
    Unordered,
}

/// Output format of the report
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReportFormat {
    /// Section header and box-drawn table
    #[default]
    Table,
    /// Pretty-printed JSON array of rows
    Json,
}

impl std::fmt::Display for ReportFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ReportFormat::Table => write!(f, "table"),
            ReportFormat::Json => write!(f, "json"),
        }
    }
}
