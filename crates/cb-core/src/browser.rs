//! The country browser: query state, input state, and selection, with the
//! render model derived from them.

use crate::country::CountryRecord;
use crate::input::{self, Command};
use crate::render::{BrowserScreen, GroupTable, TableRow};
use crate::selection::{HighlightColor, SelectionEvent, SelectionState};
use crate::view::{self, GroupedView};

/// Outcome of the countries query as seen by the browser.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum QueryState {
    /// The query is still in flight.
    #[default]
    Loading,
    /// The query failed. The cause is not shown.
    Failed,
    /// The query returned this list.
    Loaded(Vec<CountryRecord>),
}

/// Component-local state of one country browser.
#[derive(Debug, Clone, Default)]
pub struct CountryBrowser {
    query: QueryState,
    raw_input: String,
    command: Command,
    selection: SelectionState,
}

impl CountryBrowser {
    /// Create a browser in the loading state with empty input.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current query state.
    pub fn query(&self) -> &QueryState {
        &self.query
    }

    /// Loaded records, empty while loading or after a failure.
    pub fn records(&self) -> &[CountryRecord] {
        match &self.query {
            QueryState::Loaded(records) => records,
            _ => &[],
        }
    }

    /// The raw input line last passed to [`CountryBrowser::set_input`].
    pub fn raw_input(&self) -> &str {
        &self.raw_input
    }

    /// Active search term.
    pub fn search_term(&self) -> &str {
        &self.command.search_term
    }

    /// Active group-by field.
    pub fn group_by(&self) -> &str {
        &self.command.group_by
    }

    /// Selection and color state.
    pub fn selection(&self) -> &SelectionState {
        &self.selection
    }

    /// The selected record, if it is among the loaded records.
    pub fn selected_record(&self) -> Option<&CountryRecord> {
        let name = self.selection.selected_name()?;
        self.records().iter().find(|r| r.name == name)
    }

    /// The active highlight color.
    pub fn active_color(&self) -> HighlightColor {
        self.selection.color()
    }

    /// Record the outcome of the countries query.
    ///
    /// A successful non-empty load bootstraps the selection the first time.
    pub fn on_query_complete<E: std::fmt::Display>(
        &mut self,
        result: Result<Vec<CountryRecord>, E>,
    ) {
        match result {
            Ok(records) => {
                tracing::info!(count = records.len(), "countries loaded");
                self.selection.apply(SelectionEvent::Loaded(&records));
                self.query = QueryState::Loaded(records);
            }
            Err(e) => {
                tracing::warn!(error = %e, "countries query failed");
                self.query = QueryState::Failed;
            }
        }
    }

    /// Replace the input line and re-parse it.
    pub fn set_input(&mut self, raw: impl Into<String>) {
        self.raw_input = raw.into();
        self.command = input::parse(&self.raw_input, &self.command.group_by);
        tracing::trace!(
            search = %self.command.search_term,
            group = %self.command.group_by,
            "input parsed"
        );
    }

    /// Handle a click on the row of the named country.
    pub fn click(&mut self, name: &str) {
        self.selection.apply(SelectionEvent::Click(name));
    }

    /// Filtered and grouped records for the current state.
    pub fn grouped(&self) -> GroupedView<'_> {
        view::derive_view(
            self.records(),
            &self.command.search_term,
            &self.command.group_by,
        )
    }

    /// Build what should be on screen right now.
    pub fn screen(&self) -> BrowserScreen {
        match &self.query {
            QueryState::Loading => BrowserScreen::Loading,
            QueryState::Failed => BrowserScreen::Error,
            QueryState::Loaded(_) => {
                let tables = self
                    .grouped()
                    .buckets()
                    .iter()
                    .map(|bucket| GroupTable {
                        label: bucket.label.clone(),
                        rows: bucket
                            .records
                            .iter()
                            .map(|r| TableRow::from_record(r, self.selection.is_selected(&r.name)))
                            .collect(),
                    })
                    .collect();
                BrowserScreen::Tables {
                    tables,
                    active_color: self.selection.color(),
                }
            }
        }
    }
}
