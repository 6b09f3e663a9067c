//! Runs the countries query off the UI thread.

use std::io;
use std::sync::mpsc::{self, Receiver, TryRecvError};
use std::thread;

use cb_client::CountryGateway;
use cb_core::CountryRecord;

/// Outcome of one query, with the error already rendered to text.
pub type LoadResult = Result<Vec<CountryRecord>, String>;

/// Handle to a query running on a background thread.
pub struct Loader {
    rx: Receiver<LoadResult>,
}

impl Loader {
    /// Start fetching on a new thread.
    pub fn spawn(gateway: Box<dyn CountryGateway>) -> io::Result<Self> {
        let (tx, rx) = mpsc::channel();
        let source = gateway.describe();

        thread::Builder::new()
            .name("countries-query".into())
            .spawn(move || {
                let span = tracing::info_span!("countries_query", %source);
                let _guard = span.enter();
                let result = gateway.fetch_countries().map_err(|e| e.to_string());
                // The UI may already be gone.
                let _ = tx.send(result);
            })?;

        Ok(Self { rx })
    }

    /// Take the result if the query has finished.
    pub fn poll(&self) -> Option<LoadResult> {
        match self.rx.try_recv() {
            Ok(result) => Some(result),
            Err(TryRecvError::Empty) => None,
            Err(TryRecvError::Disconnected) => {
                Some(Err("query thread exited without a result".to_string()))
            }
        }
    }
}
