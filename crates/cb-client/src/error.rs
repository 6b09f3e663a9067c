use std::path::PathBuf;

/// Alias for `Result<T, GatewayError>`.
pub type GatewayResult<T> = Result<T, GatewayError>;

/// Errors raised while fetching country records.
#[derive(Debug, thiserror::Error)]
pub enum GatewayError {
    /// The HTTP request could not be sent or its body not read.
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    /// The endpoint answered with a non-success status.
    #[error("endpoint returned HTTP {status}")]
    Status {
        /// HTTP status code.
        status: u16,
    },

    /// The endpoint answered with GraphQL errors.
    #[error("GraphQL error: {0}")]
    GraphQl(String),

    /// The response carried no `data.countries` list.
    #[error("response contained no countries")]
    MissingData,

    /// The payload was not valid JSON of the expected shape.
    #[error("could not decode response: {0}")]
    Decode(#[from] serde_json::Error),

    /// A fixture file could not be read.
    #[error("cannot read {path}: {source}")]
    Io {
        /// Fixture path.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },
}
