//! Render model handed to display layers.

use crate::country::CountryRecord;
use crate::selection::HighlightColor;

/// Column headings of every group table.
pub const COLUMNS: [&str; 3] = ["Country Name", "Country Language", "Country Currency"];

/// Placeholder shown while the query is in flight.
pub const LOADING_TEXT: &str = "Loading";

/// Placeholder shown when the query failed.
pub const ERROR_TEXT: &str = "Error";

/// One table row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableRow {
    /// Country name (the row key).
    pub name: String,
    /// First language name, blank when none.
    pub language: String,
    /// Currency code, blank when none.
    pub currency: String,
    /// Whether this row carries the active marker.
    pub active: bool,
}

impl TableRow {
    /// Build a row from a record.
    pub fn from_record(record: &CountryRecord, active: bool) -> Self {
        Self {
            name: record.name.clone(),
            language: record.first_language().unwrap_or_default().to_string(),
            currency: record.currency.clone().unwrap_or_default(),
            active,
        }
    }

    /// Cells in column order.
    pub fn cells(&self) -> [&str; 3] {
        [self.name.as_str(), self.language.as_str(), self.currency.as_str()]
    }
}

/// A labeled table for one bucket.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupTable {
    /// Bucket label.
    pub label: String,
    /// Rows in display order.
    pub rows: Vec<TableRow>,
}

/// Everything a display layer needs to draw the browser.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BrowserScreen {
    /// Show [`LOADING_TEXT`].
    Loading,
    /// Show [`ERROR_TEXT`].
    Error,
    /// Show one table per group.
    Tables {
        /// Tables in display order.
        tables: Vec<GroupTable>,
        /// Color for the active row.
        active_color: HighlightColor,
    },
}

impl BrowserScreen {
    /// Placeholder text for the non-table states.
    pub fn placeholder(&self) -> Option<&'static str> {
        match self {
            BrowserScreen::Loading => Some(LOADING_TEXT),
            BrowserScreen::Error => Some(ERROR_TEXT),
            BrowserScreen::Tables { .. } => None,
        }
    }
}
