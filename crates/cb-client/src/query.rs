//! The fixed countries query and decoding of its response.

use serde::{Deserialize, Serialize};

use cb_core::CountryRecord;

use crate::error::{GatewayError, GatewayResult};

/// The one query this client ever sends.
pub const COUNTRIES_QUERY: &str = "query {
  countries {
    name
    native
    capital
    emoji
    currency
    languages {
      code
      name
    }
  }
}";

/// JSON body of a GraphQL POST.
#[derive(Debug, Serialize)]
pub struct GraphQlRequest<'a> {
    /// Query document.
    pub query: &'a str,
}

impl GraphQlRequest<'static> {
    /// Request body for [`COUNTRIES_QUERY`].
    pub fn countries() -> Self {
        Self {
            query: COUNTRIES_QUERY,
        }
    }
}

#[derive(Debug, Deserialize)]
struct GraphQlResponse {
    #[serde(default)]
    data: Option<CountriesData>,
    #[serde(default)]
    errors: Vec<GraphQlErrorEntry>,
}

#[derive(Debug, Deserialize)]
struct CountriesData {
    countries: Option<Vec<CountryRecord>>,
}

#[derive(Debug, Deserialize)]
struct GraphQlErrorEntry {
    message: String,
}

/// Decode a GraphQL response envelope into records.
///
/// Any entry in `errors` fails the whole response, even when partial data
/// came back alongside it.
pub fn decode_response(body: &str) -> GatewayResult<Vec<CountryRecord>> {
    let response: GraphQlResponse = serde_json::from_str(body)?;

    if !response.errors.is_empty() {
        let messages: Vec<&str> = response.errors.iter().map(|e| e.message.as_str()).collect();
        return Err(GatewayError::GraphQl(messages.join("; ")));
    }

    response
        .data
        .and_then(|d| d.countries)
        .ok_or(GatewayError::MissingData)
}

/// Decode either a response envelope or a bare JSON array of records.
pub fn decode_payload(body: &str) -> GatewayResult<Vec<CountryRecord>> {
    if body.trim_start().starts_with('[') {
        Ok(serde_json::from_str(body)?)
    } else {
        decode_response(body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ENVELOPE: &str = r#"{
        "data": {
            "countries": [
                {
                    "name": "Andorra",
                    "native": "Andorra",
                    "capital": "Andorra la Vella",
                    "emoji": "🇦🇩",
                    "currency": "EUR",
                    "languages": [{ "code": "ca", "name": "Catalan" }]
                },
                {
                    "name": "Antarctica",
                    "native": "Antarctica",
                    "capital": null,
                    "emoji": "🇦🇶",
                    "currency": null,
                    "languages": []
                }
            ]
        }
    }"#;

    #[test]
    fn request_body_carries_query() {
        let body = serde_json::to_value(GraphQlRequest::countries()).unwrap();
        let query = body["query"].as_str().unwrap();
        assert!(query.contains("countries"));
        assert!(query.contains("languages"));
    }

    #[test]
    fn decode_envelope() {
        let records = decode_response(ENVELOPE).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].name, "Andorra");
        assert_eq!(records[0].first_language(), Some("Catalan"));
        assert!(records[1].capital.is_none());
    }

    #[test]
    fn decode_keeps_records_with_null_strings() {
        let body = r#"{
            "data": {
                "countries": [
                    { "name": "France", "native": "France", "emoji": "🇫🇷", "languages": [] },
                    {
                        "name": "Nowhere",
                        "native": null,
                        "capital": null,
                        "emoji": null,
                        "currency": null,
                        "languages": [{ "code": null, "name": null }]
                    },
                    { "name": "Limbo", "languages": null }
                ]
            }
        }"#;
        let records = decode_response(body).unwrap();
        assert_eq!(records.len(), 3);
        assert_eq!(records[1].name, "Nowhere");
        assert_eq!(records[1].native, "");
        assert_eq!(records[1].emoji, "");
        assert_eq!(records[1].first_language(), Some(""));
        assert_eq!(records[1].field("native"), None);
        assert!(records[2].languages.is_empty());
    }

    #[test]
    fn decode_graphql_errors() {
        let body = r#"{"errors":[{"message":"bad field"},{"message":"again"}],"data":null}"#;
        match decode_response(body) {
            Err(GatewayError::GraphQl(msg)) => assert_eq!(msg, "bad field; again"),
            other => panic!("unexpected: {other:?}"),
        }
    }

    #[test]
    fn decode_missing_data() {
        assert!(matches!(
            decode_response(r#"{"data":null}"#),
            Err(GatewayError::MissingData)
        ));
        assert!(matches!(
            decode_response(r#"{"data":{"countries":null}}"#),
            Err(GatewayError::MissingData)
        ));
    }

    #[test]
    fn decode_malformed_json() {
        assert!(matches!(
            decode_response("<html>"),
            Err(GatewayError::Decode(_))
        ));
    }

    #[test]
    fn decode_bare_array() {
        let body = r#"[{"name":"Chad","currency":"XAF"}]"#;
        let records = decode_payload(body).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].currency.as_deref(), Some("XAF"));
    }
}
