//! Connection settings for the countries endpoint.

use std::time::Duration;

/// Public countries GraphQL endpoint.
pub const DEFAULT_ENDPOINT: &str = "https://countries.trevorblades.com/";

/// Default HTTP request timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Settings for [`crate::GraphQlGateway`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// GraphQL endpoint URL.
    pub endpoint: String,
    /// Request timeout.
    pub timeout: Duration,
    /// Value of the `User-Agent` header.
    pub user_agent: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            timeout: DEFAULT_TIMEOUT,
            user_agent: format!("countryboard/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

impl ClientConfig {
    /// Set the endpoint URL.
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    /// Set the request timeout in seconds (at least one second).
    pub fn with_timeout_secs(mut self, secs: u64) -> Self {
        self.timeout = Duration::from_secs(secs.max(1));
        self
    }

    /// Set the `User-Agent` header.
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let cfg = ClientConfig::default();
        assert_eq!(cfg.endpoint, DEFAULT_ENDPOINT);
        assert_eq!(cfg.timeout, Duration::from_secs(30));
        assert!(cfg.user_agent.starts_with("countryboard/"));
    }

    #[test]
    fn timeout_floor_is_one_second() {
        let cfg = ClientConfig::default().with_timeout_secs(0);
        assert_eq!(cfg.timeout, Duration::from_secs(1));
    }

    #[test]
    fn builder_overrides() {
        let cfg = ClientConfig::default()
            .with_endpoint("http://localhost:4000/graphql")
            .with_user_agent("test");
        assert_eq!(cfg.endpoint, "http://localhost:4000/graphql");
        assert_eq!(cfg.user_agent, "test");
    }
}
