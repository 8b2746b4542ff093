// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Cached device state for WLED devices.
//!
//! [`StateSnapshot`] is the last state document the device reported; it is
//! replaced wholesale on connect and after every successful write, never
//! patched field by field. [`PresetCatalog`] is the bidirectional
//! name↔id index built from the device's preset listing during connect.
//!
//! # Examples
//!
//! ```
//! use wled_lib::state::StateSnapshot;
//!
//! let snapshot: StateSnapshot =
//!     serde_json::from_str(r#"{"on": true, "bri": 128, "ps": 2}"#).unwrap();
//!
//! assert!(snapshot.is_on());
//! assert_eq!(snapshot.preset_id(), Some(2));
//! ```

mod presets;
mod snapshot;

pub use presets::{PresetCatalog, PresetEntry, PresetsDocument};
pub use snapshot::StateSnapshot;
