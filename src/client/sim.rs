// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Simulated WLED client for offline use.

use crate::client::LightControl;
use crate::error::{Error, Result, TransportError};
use crate::types::PowerSetting;

/// An in-memory light with the same contract as
/// [`WledClient`](crate::WledClient).
///
/// No network is involved; state lives in the value itself. The simulation
/// honors the full contract: operations fail with [`Error::NotConnected`]
/// until [`connect`](LightControl::connect) has succeeded, preset names are
/// listed sorted ascending, and an unknown preset name is a silent no-op.
///
/// By default the light is on, knows the presets `Bar`, `Baz` and `Foo`,
/// and has `Foo` active.
///
/// # Examples
///
/// ```
/// use wled_lib::{LightControl, PowerSetting, SimClient};
///
/// # #[tokio::main(flavor = "current_thread")]
/// # async fn main() -> wled_lib::Result<()> {
/// let mut light = SimClient::new();
/// light.connect().await?;
///
/// light.set_on(PowerSetting::Toggle).await?;
/// assert!(!light.is_on()?);
///
/// light.cycle_preset(-1).await?;
/// assert_eq!(light.active_preset()?.as_deref(), Some("Baz"));
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct SimClient {
    connected: bool,
    reachable: bool,
    on: bool,
    active: Option<String>,
    presets: Vec<String>,
}

impl SimClient {
    /// Creates a simulated light with the default state.
    #[must_use]
    pub fn new() -> Self {
        Self {
            connected: false,
            reachable: true,
            on: true,
            active: Some("Foo".to_string()),
            presets: vec!["Bar".to_string(), "Baz".to_string(), "Foo".to_string()],
        }
    }

    /// Creates a simulated light whose connect attempts always fail.
    #[must_use]
    pub fn unreachable() -> Self {
        Self {
            reachable: false,
            ..Self::new()
        }
    }

    /// Replaces the preset list.
    ///
    /// The list is sorted on the way in, matching the catalog order of the
    /// real client. The active preset is left as-is even when it no longer
    /// appears in the list.
    #[must_use]
    pub fn with_presets<I, S>(mut self, presets: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.presets = presets.into_iter().map(Into::into).collect();
        self.presets.sort();
        self.presets.dedup();
        self
    }

    /// Sets the active preset.
    #[must_use]
    pub fn with_active_preset(mut self, name: impl Into<String>) -> Self {
        self.active = Some(name.into());
        self
    }

    /// Sets the initial power flag.
    #[must_use]
    pub fn with_power(mut self, on: bool) -> Self {
        self.on = on;
        self
    }

    fn check_connected(&self) -> Result<()> {
        if self.connected {
            Ok(())
        } else {
            Err(Error::NotConnected)
        }
    }
}

impl Default for SimClient {
    fn default() -> Self {
        Self::new()
    }
}

impl LightControl for SimClient {
    async fn connect(&mut self) -> Result<()> {
        if !self.reachable {
            return Err(Error::Transport(TransportError::ConnectionFailed(
                "simulated device is unreachable".to_string(),
            )));
        }
        self.connected = true;
        Ok(())
    }

    fn is_on(&self) -> Result<bool> {
        self.check_connected()?;
        Ok(self.on)
    }

    async fn set_on(&mut self, setting: PowerSetting) -> Result<()> {
        self.check_connected()?;
        self.on = setting.resolve(self.on);
        Ok(())
    }

    fn active_preset(&self) -> Result<Option<String>> {
        self.check_connected()?;
        Ok(self
            .active
            .as_ref()
            .filter(|name| self.presets.contains(name))
            .cloned())
    }

    async fn set_preset(&mut self, name: &str) -> Result<()> {
        self.check_connected()?;
        if self.presets.iter().any(|p| p == name) {
            self.active = Some(name.to_string());
        }
        Ok(())
    }

    fn list_presets(&self) -> Result<Vec<String>> {
        self.check_connected()?;
        Ok(self.presets.clone())
    }
}
