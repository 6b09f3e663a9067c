//! Terminal UI for Countryboard.
//!
//! Shows the country list as grouped tables under a single input line that
//! accepts `search:<text>` and `group:<field>`. The query runs on a
//! background thread while the UI shows a loading placeholder.

pub mod app;
pub mod loader;
pub mod logging;
pub mod shared;
pub mod terminal;
pub mod views;

use std::path::PathBuf;

use cb_client::{ClientConfig, CountryGateway, FixtureGateway, GraphQlGateway};

/// Where to fetch countries from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Source {
    /// A live GraphQL endpoint.
    Endpoint(ClientConfig),
    /// A saved response on disk.
    Fixture(PathBuf),
}

impl Source {
    /// Build the gateway for this source.
    pub fn gateway(self) -> Result<Box<dyn CountryGateway>, String> {
        match self {
            Source::Endpoint(config) => GraphQlGateway::new(config)
                .map(|g| Box::new(g) as Box<dyn CountryGateway>)
                .map_err(|e| e.to_string()),
            Source::Fixture(path) => Ok(Box::new(FixtureGateway::new(path))),
        }
    }
}

/// Start the query for `source` and run the TUI until the user quits.
pub fn launch(source: Source, initial_input: Option<&str>) -> Result<(), String> {
    let gateway = source.gateway()?;
    let description = gateway.describe();
    let loader = loader::Loader::spawn(gateway).map_err(|e| format!("cannot start query: {e}"))?;

    let mut app = app::TuiApp::new(description, Some(loader));
    if let Some(input) = initial_input {
        app = app.with_input(input);
    }
    terminal::run(app)
}
