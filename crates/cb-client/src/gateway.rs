//! Sources of country records.

use std::path::PathBuf;

use reqwest::blocking::Client;
use reqwest::header::{ACCEPT, CONTENT_TYPE};

use cb_core::CountryRecord;

use crate::config::ClientConfig;
use crate::error::{GatewayError, GatewayResult};
use crate::query::{self, GraphQlRequest};

/// Something that can run the countries query.
pub trait CountryGateway: Send {
    /// Fetch the full list of countries.
    fn fetch_countries(&self) -> GatewayResult<Vec<CountryRecord>>;

    /// Short description of where records come from, for logs and status lines.
    fn describe(&self) -> String;
}

/// Gateway that POSTs the countries query to a GraphQL endpoint.
pub struct GraphQlGateway {
    client: Client,
    config: ClientConfig,
}

impl GraphQlGateway {
    /// Build a gateway with its own HTTP client.
    pub fn new(config: ClientConfig) -> GatewayResult<Self> {
        let client = Client::builder()
            .timeout(config.timeout)
            .user_agent(config.user_agent.clone())
            .build()?;
        Ok(Self { client, config })
    }
}

impl CountryGateway for GraphQlGateway {
    fn fetch_countries(&self) -> GatewayResult<Vec<CountryRecord>> {
        tracing::debug!(endpoint = %self.config.endpoint, "sending countries query");

        let response = self
            .client
            .post(&self.config.endpoint)
            .header(ACCEPT, "application/json")
            .header(CONTENT_TYPE, "application/json")
            .json(&GraphQlRequest::countries())
            .send()
            .inspect_err(|e| tracing::warn!(error = %e, "countries request failed"))?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!(status = status.as_u16(), "countries endpoint returned an error status");
            return Err(GatewayError::Status {
                status: status.as_u16(),
            });
        }

        let body = response.text()?;
        let records = query::decode_response(&body)
            .inspect_err(|e| tracing::warn!(error = %e, "countries response rejected"))?;
        tracing::debug!(count = records.len(), "countries query succeeded");
        Ok(records)
    }

    fn describe(&self) -> String {
        self.config.endpoint.clone()
    }
}

/// Gateway that reads a saved response from disk.
///
/// The file may hold the full GraphQL envelope or a bare array of records.
pub struct FixtureGateway {
    path: PathBuf,
}

impl FixtureGateway {
    /// Read records from `path` on each fetch.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl CountryGateway for FixtureGateway {
    fn fetch_countries(&self) -> GatewayResult<Vec<CountryRecord>> {
        tracing::debug!(path = %self.path.display(), "reading countries fixture");
        let body = std::fs::read_to_string(&self.path).map_err(|source| GatewayError::Io {
            path: self.path.clone(),
            source,
        })?;
        query::decode_payload(&body)
            .inspect_err(|e| tracing::warn!(error = %e, "countries fixture rejected"))
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::fs;

    use tempfile::TempDir;

    #[test]
    fn fixture_reads_envelope() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("countries.json");
        fs::write(
            &path,
            r#"{"data":{"countries":[{"name":"Chad","native":"Tchad","capital":"N'Djamena","emoji":"🇹🇩","currency":"XAF","languages":[{"code":"fr","name":"French"}]}]}}"#,
        )
        .unwrap();

        let gateway = FixtureGateway::new(&path);
        let records = gateway.fetch_countries().unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].native, "Tchad");
        assert_eq!(gateway.describe(), path.display().to_string());
    }

    #[test]
    fn fixture_missing_file() {
        let dir = TempDir::new().unwrap();
        let gateway = FixtureGateway::new(dir.path().join("nope.json"));
        assert!(matches!(
            gateway.fetch_countries(),
            Err(GatewayError::Io { .. })
        ));
    }

    #[test]
    fn fixture_malformed() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("bad.json");
        fs::write(&path, "{ not json").unwrap();
        assert!(matches!(
            FixtureGateway::new(&path).fetch_countries(),
            Err(GatewayError::Decode(_))
        ));
    }

    #[test]
    fn graphql_gateway_builds_from_default_config() {
        let gateway = GraphQlGateway::new(ClientConfig::default()).unwrap();
        assert_eq!(gateway.describe(), crate::config::DEFAULT_ENDPOINT);
    }
}
