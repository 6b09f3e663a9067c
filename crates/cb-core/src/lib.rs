//! Core types for Countryboard: country records, the input mini-syntax, and
//! the filtered, grouped view with its selection state.
//!
//! Nothing here performs I/O. Records come from a gateway in `cb-client`;
//! display layers consume [`BrowserScreen`].

pub mod browser;
/// Country records as returned by the countries query.
pub mod country;
/// Parser for the `search:` / `group:` input syntax.
pub mod input;
pub mod render;
/// Selection and highlight color state machine.
pub mod selection;
/// Filtering and grouping of records.
pub mod view;

/// Re-export the browser state.
pub use browser::{CountryBrowser, QueryState};
/// Re-export record types.
pub use country::{CountryRecord, GROUPABLE_FIELDS, Language};
/// Re-export the parsed input command.
pub use input::{Command, parse};
/// Re-export render model types.
pub use render::{BrowserScreen, GroupTable, TableRow};
/// Re-export selection types.
pub use selection::{HighlightColor, PALETTE, Selection, SelectionEvent, SelectionState};
/// Re-export view derivation.
pub use view::{Bucket, GroupedView, derive_view};
