pub mod fetch;
pub mod fields;
pub mod list;
pub mod tui;

use cb_core::CountryRecord;
use cb_tui::Source;

/// Fetch countries synchronously from a source.
fn fetch(source: Source) -> Result<Vec<CountryRecord>, String> {
    let gateway = source.gateway()?;
    tracing::info!(source = %gateway.describe(), "fetching countries");
    gateway.fetch_countries().map_err(|e| e.to_string())
}
