// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! HTTP transport for communicating with WLED devices.
//!
//! The transport is a thin request layer: it fetches and posts JSON
//! documents and surfaces failures as [`TransportError`](crate::error::TransportError)
//! (the call never completed) or [`ProtocolError`](crate::error::ProtocolError)
//! (the device answered with status ≥ 300). Interpretation of the documents
//! lives in [`state`](crate::state) and the client.

mod http;

pub use http::{HttpConfig, HttpTransport};

/// A raw response body from a WLED endpoint.
#[derive(Debug, Clone)]
pub struct ApiResponse {
    /// The raw JSON response body.
    body: String,
}

impl ApiResponse {
    /// Creates a new response with the given body.
    #[must_use]
    pub fn new(body: String) -> Self {
        Self { body }
    }

    /// Returns the raw JSON response body.
    #[must_use]
    pub fn body(&self) -> &str {
        &self.body
    }

    /// Parses the response as a specific type.
    ///
    /// # Errors
    ///
    /// Returns error if the JSON cannot be parsed into the target type.
    pub fn parse<T: serde::de::DeserializeOwned>(&self) -> Result<T, crate::error::ParseError> {
        serde_json::from_str(&self.body).map_err(Into::into)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_valid_body() {
        let response = ApiResponse::new(r#"{"on": true, "ps": 2}"#.to_string());
        let value: serde_json::Value = response.parse().unwrap();
        assert_eq!(value["on"], serde_json::json!(true));
    }

    #[test]
    fn parse_invalid_body() {
        let response = ApiResponse::new("not json".to_string());
        let result: Result<serde_json::Value, _> = response.parse();
        assert!(result.is_err());
    }

    #[test]
    fn body_accessor() {
        let response = ApiResponse::new("{}".to_string());
        assert_eq!(response.body(), "{}");
    }
}
