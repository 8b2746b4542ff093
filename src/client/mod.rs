// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! High-level client abstraction for WLED devices.
//!
//! [`WledClient`] owns the HTTP session to one device: it bootstraps the
//! session with [`connect`](LightControl::connect), caches the device's
//! state document and preset catalog, and translates read/write intents
//! into requests against the JSON API. [`SimClient`] is an in-memory
//! implementation of the same contract for offline use.
//!
//! Callers that should work against either implementation take the
//! [`LightControl`] trait:
//!
//! ```
//! use wled_lib::{LightControl, SimClient};
//!
//! async fn startup(light: &mut impl LightControl) -> wled_lib::Result<()> {
//!     light.connect().await?;
//!     light.cycle_preset(1).await
//! }
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() -> wled_lib::Result<()> {
//! let mut light = SimClient::new();
//! startup(&mut light).await?;
//! # Ok(())
//! # }
//! ```

mod sim;

pub use sim::SimClient;

use crate::command::StateCommand;
use crate::error::{Error, Result};
use crate::protocol::{HttpConfig, HttpTransport};
use crate::state::{PresetCatalog, PresetsDocument, StateSnapshot};
use crate::types::PowerSetting;

/// Path of the state document endpoint.
const STATE_PATH: &str = "/json/state";
/// Path of the preset listing endpoint.
const PRESETS_PATH: &str = "/presets.json";

/// Operations every WLED-style light client supports.
///
/// All operations other than [`connect`](Self::connect) fail fast with
/// [`Error::NotConnected`] until a connect has succeeded. Reads are answered
/// from the cached state; writes go to the device and refresh the cache from
/// the full-state echo.
#[allow(async_fn_in_trait)]
pub trait LightControl {
    /// Connects to the device and reads state and preset information.
    ///
    /// May be called again to rebuild the session; a failed reconnect
    /// leaves the previous session untouched.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Transport`] if a request never completes,
    /// [`Error::Protocol`] on a device error status, and [`Error::Parse`]
    /// on a malformed document.
    async fn connect(&mut self) -> Result<()>;

    /// Returns `true` if the light is turned on.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotConnected`] before a successful connect.
    fn is_on(&self) -> Result<bool>;

    /// Turns the light on or off.
    ///
    /// [`PowerSetting::Toggle`] flips the last-known cached flag; the
    /// device is never consulted for the pre-toggle value.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotConnected`] before a successful connect, and the
    /// failure modes of [`connect`](Self::connect) for the write itself. On
    /// failure the cached state is left unchanged.
    async fn set_on(&mut self, setting: PowerSetting) -> Result<()>;

    /// Returns the active preset name, or `None` when the device reports no
    /// preset (or one this client has no name for).
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotConnected`] before a successful connect.
    fn active_preset(&self) -> Result<Option<String>>;

    /// Activates a preset by name.
    ///
    /// An unknown name is a silent no-op: the device is left unchanged and
    /// no request is sent. The client never guesses or partial-matches.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotConnected`] before a successful connect, and the
    /// failure modes of [`connect`](Self::connect) for the write itself.
    async fn set_preset(&mut self, name: &str) -> Result<()>;

    /// Returns all preset names, sorted ascending.
    ///
    /// The list is a fresh copy, not a live view.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotConnected`] before a successful connect.
    fn list_presets(&self) -> Result<Vec<String>>;

    /// Activates the preset `offset` positions away from the active one.
    ///
    /// The preset list wraps in both directions, so `-1` from the first
    /// preset lands on the last. When no (known) preset is active, the
    /// first preset is selected. With no presets at all this is a no-op.
    ///
    /// # Errors
    ///
    /// Same failure modes as [`set_preset`](Self::set_preset).
    async fn cycle_preset(&mut self, offset: i32) -> Result<()> {
        let presets = self.list_presets()?;
        if presets.is_empty() {
            return Ok(());
        }

        let position = self
            .active_preset()?
            .and_then(|active| presets.iter().position(|name| *name == active));

        let next = match position {
            // Jump to the first preset when nothing (known) is active.
            None => 0,
            // Preset counts are tiny; the i64 arithmetic cannot overflow,
            // and rem_euclid keeps the result in 0..len for negative offsets.
            #[allow(
                clippy::cast_possible_truncation,
                clippy::cast_possible_wrap,
                clippy::cast_sign_loss
            )]
            Some(index) => {
                let len = presets.len() as i64;
                (index as i64 + i64::from(offset)).rem_euclid(len) as usize
            }
        };

        self.set_preset(&presets[next]).await
    }
}

/// Everything a successful connect produces, installed atomically.
#[derive(Debug, Clone)]
struct Session {
    snapshot: StateSnapshot,
    catalog: PresetCatalog,
}

/// A client for one WLED device.
///
/// The client is constructed without network I/O; the session is
/// established by [`connect`](LightControl::connect), which fetches the
/// state document and the preset listing. Afterwards reads are served from
/// the cache and every successful write refreshes it from the device's
/// full-state echo, so no extra round trip is needed.
///
/// # Examples
///
/// ```no_run
/// use wled_lib::{LightControl, PowerSetting, WledClient};
///
/// #[tokio::main]
/// async fn main() -> wled_lib::Result<()> {
///     let mut light = WledClient::new("192.168.1.100")?;
///     light.connect().await?;
///
///     light.set_on(PowerSetting::Toggle).await?;
///
///     if let Some(preset) = light.active_preset()? {
///         println!("active preset: {preset}");
///     }
///     light.cycle_preset(1).await?;
///     Ok(())
/// }
/// ```
#[derive(Debug)]
pub struct WledClient {
    transport: HttpTransport,
    session: Option<Session>,
}

impl WledClient {
    /// Creates a client for the specified host.
    ///
    /// No network I/O happens here; call
    /// [`connect`](LightControl::connect) to establish the session.
    ///
    /// # Arguments
    ///
    /// * `host` - The hostname or IP address of the WLED device
    ///
    /// # Errors
    ///
    /// Returns error if the HTTP client cannot be created.
    pub fn new(host: impl Into<String>) -> Result<Self> {
        let transport = HttpTransport::new(host).map_err(Error::Transport)?;
        Ok(Self {
            transport,
            session: None,
        })
    }

    /// Creates a client from an explicit HTTP configuration.
    ///
    /// # Errors
    ///
    /// Returns error if the HTTP client cannot be created.
    pub fn with_config(config: HttpConfig) -> Result<Self> {
        let transport = config.into_transport().map_err(Error::Transport)?;
        Ok(Self {
            transport,
            session: None,
        })
    }

    /// Returns `true` once a connect has succeeded.
    #[must_use]
    pub fn is_connected(&self) -> bool {
        self.session.is_some()
    }

    /// Returns the base URL requests are issued against.
    #[must_use]
    pub fn base_url(&self) -> &str {
        self.transport.base_url()
    }

    fn session(&self) -> Result<&Session> {
        self.session.as_ref().ok_or(Error::NotConnected)
    }

    /// Posts a state write and adopts the echoed document as the new
    /// snapshot. Nothing is adopted on failure.
    async fn write(&mut self, command: StateCommand) -> Result<()> {
        if self.session.is_none() {
            return Err(Error::NotConnected);
        }

        let snapshot: StateSnapshot = self
            .transport
            .post_json(STATE_PATH, &command.body())
            .await?
            .parse()?;

        if let Some(session) = self.session.as_mut() {
            session.snapshot = snapshot;
        }
        Ok(())
    }
}

impl LightControl for WledClient {
    async fn connect(&mut self) -> Result<()> {
        let snapshot: StateSnapshot = self.transport.get(STATE_PATH).await?.parse()?;
        let document: PresetsDocument = self.transport.get(PRESETS_PATH).await?.parse()?;
        let catalog = PresetCatalog::from_document(&document);

        tracing::debug!(
            presets = catalog.len(),
            on = snapshot.is_on(),
            "session established"
        );

        // Both fetches succeeded; only now is the new session adopted.
        self.session = Some(Session { snapshot, catalog });
        Ok(())
    }

    fn is_on(&self) -> Result<bool> {
        Ok(self.session()?.snapshot.is_on())
    }

    async fn set_on(&mut self, setting: PowerSetting) -> Result<()> {
        let target = setting.resolve(self.session()?.snapshot.is_on());
        self.write(StateCommand::Power(target)).await
    }

    fn active_preset(&self) -> Result<Option<String>> {
        let session = self.session()?;
        Ok(session
            .snapshot
            .preset_id()
            .and_then(|id| session.catalog.name_of(id))
            .map(ToOwned::to_owned))
    }

    async fn set_preset(&mut self, name: &str) -> Result<()> {
        match self.session()?.catalog.id_of(name) {
            Some(id) => self.write(StateCommand::Preset(id)).await,
            None => Ok(()),
        }
    }

    fn list_presets(&self) -> Result<Vec<String>> {
        Ok(self.session()?.catalog.names())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_client_is_not_connected() {
        let client = WledClient::new("192.168.1.100").unwrap();
        assert!(!client.is_connected());
    }

    #[test]
    fn reads_fail_before_connect() {
        let client = WledClient::new("192.168.1.100").unwrap();
        assert!(matches!(client.is_on(), Err(Error::NotConnected)));
        assert!(matches!(client.active_preset(), Err(Error::NotConnected)));
        assert!(matches!(client.list_presets(), Err(Error::NotConnected)));
    }

    #[test]
    fn with_config_builds_base_url() {
        let client =
            WledClient::with_config(HttpConfig::new("192.168.1.100").with_port(8080)).unwrap();
        assert_eq!(client.base_url(), "http://192.168.1.100:8080");
    }
}
