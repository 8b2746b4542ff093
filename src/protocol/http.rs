// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! HTTP protocol implementation for WLED devices.

use std::time::Duration;

use reqwest::{Client, Response};
use serde::Serialize;

use crate::error::{Error, ProtocolError, TransportError};
use crate::protocol::ApiResponse;

// ============================================================================
// HttpConfig - Connection parameters for a WLED device
// ============================================================================

/// Configuration for an HTTP WLED device.
///
/// Holds the connection parameters used to build request URLs. The request
/// timeout is finite so that an unreachable device surfaces as a transport
/// error instead of blocking the caller forever.
///
/// # Examples
///
/// ```
/// use wled_lib::protocol::HttpConfig;
/// use std::time::Duration;
///
/// // Simple configuration
/// let config = HttpConfig::new("192.168.1.100");
///
/// // With all options
/// let config = HttpConfig::new("192.168.1.100")
///     .with_port(8080)
///     .with_https()
///     .with_timeout(Duration::from_secs(5));
/// ```
#[derive(Debug, Clone)]
pub struct HttpConfig {
    host: String,
    port: u16,
    use_https: bool,
    timeout: Duration,
}

impl HttpConfig {
    /// Default HTTP port.
    pub const DEFAULT_PORT: u16 = 80;
    /// Default HTTPS port.
    pub const DEFAULT_HTTPS_PORT: u16 = 443;
    /// Default request timeout.
    pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

    /// Creates a new HTTP configuration for the specified host.
    ///
    /// # Arguments
    ///
    /// * `host` - The hostname or IP address of the WLED device
    #[must_use]
    pub fn new(host: impl Into<String>) -> Self {
        Self {
            host: host.into(),
            port: Self::DEFAULT_PORT,
            use_https: false,
            timeout: Self::DEFAULT_TIMEOUT,
        }
    }

    /// Sets a custom port.
    #[must_use]
    pub fn with_port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }

    /// Enables HTTPS.
    ///
    /// If port hasn't been explicitly set, it will be changed to 443.
    #[must_use]
    pub fn with_https(mut self) -> Self {
        self.use_https = true;
        if self.port == Self::DEFAULT_PORT {
            self.port = Self::DEFAULT_HTTPS_PORT;
        }
        self
    }

    /// Sets the request timeout.
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Returns the host.
    #[must_use]
    pub fn host(&self) -> &str {
        &self.host
    }

    /// Returns the port.
    #[must_use]
    pub fn port(&self) -> u16 {
        self.port
    }

    /// Returns whether HTTPS is enabled.
    #[must_use]
    pub fn use_https(&self) -> bool {
        self.use_https
    }

    /// Returns the timeout.
    #[must_use]
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Builds the base URL from this configuration.
    #[must_use]
    pub fn base_url(&self) -> String {
        let scheme = if self.use_https { "https" } else { "http" };
        let port_suffix =
            if (self.use_https && self.port == 443) || (!self.use_https && self.port == 80) {
                String::new()
            } else {
                format!(":{}", self.port)
            };
        format!("{scheme}://{}{port_suffix}", self.host)
    }

    /// Creates an [`HttpTransport`] from this configuration.
    ///
    /// # Errors
    ///
    /// Returns error if the HTTP client cannot be created.
    pub fn into_transport(self) -> Result<HttpTransport, TransportError> {
        let base_url = self.base_url();

        let client = Client::builder()
            .timeout(self.timeout)
            .build()
            .map_err(TransportError::Http)?;

        Ok(HttpTransport { base_url, client })
    }
}

// ============================================================================
// HttpTransport - Request layer for the WLED JSON API
// ============================================================================

/// HTTP transport for communicating with a WLED device.
///
/// Fetches and posts JSON documents against the device's web API. Each call
/// is an independent request; there is no persistent connection.
///
/// # Examples
///
/// ```no_run
/// use wled_lib::protocol::HttpTransport;
///
/// # async fn example() -> wled_lib::Result<()> {
/// let transport = HttpTransport::new("192.168.1.100")?;
/// let response = transport.get("/json/state").await?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct HttpTransport {
    base_url: String,
    client: Client,
}

impl HttpTransport {
    /// Creates a new transport for the specified host.
    ///
    /// # Arguments
    ///
    /// * `host` - The hostname or IP address of the WLED device
    ///
    /// # Errors
    ///
    /// Returns error if the HTTP client cannot be created.
    pub fn new(host: impl Into<String>) -> Result<Self, TransportError> {
        let host = host.into();
        if host.starts_with("http://") || host.starts_with("https://") {
            let client = Client::builder()
                .timeout(HttpConfig::DEFAULT_TIMEOUT)
                .build()
                .map_err(TransportError::Http)?;
            return Ok(Self {
                base_url: host,
                client,
            });
        }
        HttpConfig::new(host).into_transport()
    }

    /// Returns the base URL of the device.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Fetches a JSON document from the device.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Transport`] if the request never completes and
    /// [`Error::Protocol`] if the device answers with status ≥ 300.
    pub async fn get(&self, path: &str) -> Result<ApiResponse, Error> {
        let url = format!("{}{path}", self.base_url);

        tracing::debug!(url = %url, "fetching device document");

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(TransportError::Http)?;

        Self::read_body(response).await
    }

    /// Posts a JSON body to the device and returns the response document.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Transport`] if the request never completes and
    /// [`Error::Protocol`] if the device answers with status ≥ 300.
    pub async fn post_json<T: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &T,
    ) -> Result<ApiResponse, Error> {
        let url = format!("{}{path}", self.base_url);

        tracing::debug!(url = %url, "posting state write");

        let response = self
            .client
            .post(&url)
            .json(body)
            .send()
            .await
            .map_err(TransportError::Http)?;

        Self::read_body(response).await
    }

    async fn read_body(response: Response) -> Result<ApiResponse, Error> {
        let status = response.status();
        if status.as_u16() >= 300 {
            return Err(ProtocolError::UnexpectedStatus(status.as_u16()).into());
        }

        let body = response.text().await.map_err(TransportError::Http)?;

        tracing::debug!(body = %body, "received device response");

        Ok(ApiResponse::new(body))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn http_config_default_values() {
        let config = HttpConfig::new("192.168.1.100");
        assert_eq!(config.host(), "192.168.1.100");
        assert_eq!(config.port(), 80);
        assert!(!config.use_https());
        assert_eq!(config.timeout(), Duration::from_secs(10));
    }

    #[test]
    fn http_config_with_port() {
        let config = HttpConfig::new("192.168.1.100").with_port(8080);
        assert_eq!(config.port(), 8080);
    }

    #[test]
    fn http_config_with_https() {
        let config = HttpConfig::new("192.168.1.100").with_https();
        assert!(config.use_https());
        assert_eq!(config.port(), 443); // Port should change to 443
    }

    #[test]
    fn http_config_with_https_custom_port() {
        let config = HttpConfig::new("192.168.1.100")
            .with_port(8443)
            .with_https();
        assert!(config.use_https());
        assert_eq!(config.port(), 8443); // Port should stay as explicitly set
    }

    #[test]
    fn http_config_base_url_http() {
        let config = HttpConfig::new("192.168.1.100");
        assert_eq!(config.base_url(), "http://192.168.1.100");
    }

    #[test]
    fn http_config_base_url_http_custom_port() {
        let config = HttpConfig::new("192.168.1.100").with_port(8080);
        assert_eq!(config.base_url(), "http://192.168.1.100:8080");
    }

    #[test]
    fn http_config_base_url_https() {
        let config = HttpConfig::new("192.168.1.100").with_https();
        assert_eq!(config.base_url(), "https://192.168.1.100");
    }

    #[test]
    fn http_config_into_transport() {
        let transport = HttpConfig::new("192.168.1.100")
            .with_port(8080)
            .into_transport()
            .unwrap();
        assert_eq!(transport.base_url(), "http://192.168.1.100:8080");
    }

    #[test]
    fn transport_from_plain_host() {
        let transport = HttpTransport::new("192.168.1.100").unwrap();
        assert_eq!(transport.base_url(), "http://192.168.1.100");
    }

    #[test]
    fn transport_keeps_explicit_scheme() {
        let transport = HttpTransport::new("https://192.168.1.100").unwrap();
        assert_eq!(transport.base_url(), "https://192.168.1.100");
    }
}
