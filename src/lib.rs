// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! `WLED` Lib - A Rust library to control WLED devices.
//!
//! This library provides an async client for a single WLED device's HTTP
//! JSON API. The client bootstraps a session with one `connect` call,
//! caches the device's reported state and preset catalog, and answers
//! reads from the cache; every write asks the device for a full-state echo
//! so the cache stays consistent without extra round trips.
//!
//! # Supported Features
//!
//! - **Power control**: Query, turn on/off, toggle (resolved client-side)
//! - **Presets**: List by name, activate by name, cycle forward/backward
//!   with wraparound
//! - **Session caching**: State snapshot and preset name↔id index built at
//!   connect time
//! - **Simulation**: [`SimClient`] implements the same [`LightControl`]
//!   contract in memory for offline development and tests
//!
//! # Quick Start
//!
//! ```no_run
//! use wled_lib::{LightControl, PowerSetting, WledClient};
//!
//! #[tokio::main]
//! async fn main() -> wled_lib::Result<()> {
//!     let mut light = WledClient::new("192.168.1.100")?;
//!     light.connect().await?;
//!
//!     // Power control
//!     if !light.is_on()? {
//!         light.set_on(PowerSetting::On).await?;
//!     }
//!
//!     // Preset navigation
//!     for name in light.list_presets()? {
//!         println!("preset: {name}");
//!     }
//!     light.set_preset("Sunset").await?;
//!     light.cycle_preset(1).await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Offline Simulation
//!
//! Code written against [`LightControl`] runs unchanged against the
//! in-memory simulation:
//!
//! ```
//! use wled_lib::{LightControl, SimClient};
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() -> wled_lib::Result<()> {
//! let mut light = SimClient::new();
//! light.connect().await?;
//! assert_eq!(light.list_presets()?, vec!["Bar", "Baz", "Foo"]);
//! # Ok(())
//! # }
//! ```

mod client;
pub mod command;
pub mod error;
pub mod protocol;
pub mod state;
pub mod types;

pub use client::{LightControl, SimClient, WledClient};
pub use command::StateCommand;
pub use error::{Error, ParseError, ProtocolError, Result, TransportError};
pub use protocol::{ApiResponse, HttpConfig, HttpTransport};
pub use state::{PresetCatalog, PresetEntry, StateSnapshot};
pub use types::PowerSetting;
