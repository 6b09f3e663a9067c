//! Gateways that fetch country records for Countryboard.
//!
//! [`GraphQlGateway`] talks to a live GraphQL endpoint; [`FixtureGateway`]
//! replays a saved response from disk. Both implement [`CountryGateway`].

/// Endpoint and HTTP client settings.
pub mod config;
/// Error types for fetching.
pub mod error;
/// Gateway trait and implementations.
pub mod gateway;
/// The countries query and its response decoding.
pub mod query;

/// Re-export client settings.
pub use config::ClientConfig;
/// Re-export error types.
pub use error::{GatewayError, GatewayResult};
/// Re-export gateways.
pub use gateway::{CountryGateway, FixtureGateway, GraphQlGateway};
