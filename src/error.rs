// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Error types for the `wled_lib` library.
//!
//! This module provides the error hierarchy for failures across the library:
//! transport failures, device-side HTTP errors, JSON parsing, and calls made
//! on a client that has not connected yet.

use thiserror::Error;

/// The main error type for this library.
///
/// This enum encompasses all possible errors that can occur when interacting
/// with a WLED device.
#[derive(Debug, Error)]
pub enum Error {
    /// The HTTP request could not be completed.
    #[error("transport error: {0}")]
    Transport(#[from] TransportError),

    /// The device answered with an error status.
    #[error("protocol error: {0}")]
    Protocol(#[from] ProtocolError),

    /// Error occurred while parsing a response or an input value.
    #[error("parse error: {0}")]
    Parse(#[from] ParseError),

    /// An operation other than `connect` was invoked before a successful
    /// `connect`.
    #[error("client is not connected")]
    NotConnected,
}

/// Errors raised when an HTTP call cannot be completed at all.
///
/// DNS failures, refused connections, resets and timeouts all end up here.
/// The library never retries; recovery is the caller's responsibility.
#[derive(Debug, Error)]
pub enum TransportError {
    /// HTTP request failed before a response arrived.
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Connection to the device failed.
    #[error("connection failed: {0}")]
    ConnectionFailed(String),
}

/// Errors raised when the device answered, but with an error status.
#[derive(Debug, Error)]
pub enum ProtocolError {
    /// The device returned an HTTP status of 300 or above.
    #[error("device returned HTTP {0}")]
    UnexpectedStatus(u16),
}

impl ProtocolError {
    /// Returns the HTTP status code carried by this error.
    #[must_use]
    pub const fn status(&self) -> u16 {
        match self {
            Self::UnexpectedStatus(code) => *code,
        }
    }
}

/// Errors related to parsing WLED documents and values.
#[derive(Debug, Error)]
pub enum ParseError {
    /// JSON parsing failed.
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    /// An invalid power setting string was provided.
    #[error("invalid power setting: {0}")]
    InvalidPowerSetting(String),
}

/// A specialized Result type for this library.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn protocol_error_display() {
        let err = ProtocolError::UnexpectedStatus(503);
        assert_eq!(err.to_string(), "device returned HTTP 503");
    }

    #[test]
    fn protocol_error_status_accessor() {
        let err = ProtocolError::UnexpectedStatus(404);
        assert_eq!(err.status(), 404);
    }

    #[test]
    fn error_from_protocol_error() {
        let err: Error = ProtocolError::UnexpectedStatus(500).into();
        assert!(matches!(
            err,
            Error::Protocol(ProtocolError::UnexpectedStatus(500))
        ));
    }

    #[test]
    fn error_from_transport_error() {
        let err: Error = TransportError::ConnectionFailed("refused".to_string()).into();
        assert_eq!(err.to_string(), "transport error: connection failed: refused");
    }

    #[test]
    fn parse_error_display() {
        let err = ParseError::InvalidPowerSetting("blink".to_string());
        assert_eq!(err.to_string(), "invalid power setting: blink");
    }

    #[test]
    fn not_connected_display() {
        assert_eq!(Error::NotConnected.to_string(), "client is not connected");
    }
}
