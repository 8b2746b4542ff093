// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Snapshot of a WLED state document.

use serde::Deserialize;
use serde_json::{Map, Value};

/// The most recent state document reported by the device.
///
/// The client interprets exactly two fields: the `"on"` power flag and the
/// `"ps"` active preset id. Everything else the device reports is retained
/// opaquely and can be read through [`get`](Self::get), but the client never
/// acts on it.
///
/// A snapshot is only ever replaced as a whole - by `connect` and by the
/// full-state echo of a successful write. A failed request leaves the
/// previous snapshot in place.
///
/// # Examples
///
/// ```
/// use wled_lib::state::StateSnapshot;
///
/// let snapshot: StateSnapshot =
///     serde_json::from_str(r#"{"on": false, "ps": -1, "bri": 40}"#).unwrap();
///
/// assert!(!snapshot.is_on());
/// assert_eq!(snapshot.preset_id(), Some(-1));
/// assert_eq!(snapshot.get("bri"), Some(&serde_json::json!(40)));
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct StateSnapshot {
    /// Power flag; the device is assumed off unless explicitly reported on.
    #[serde(default)]
    on: bool,
    /// Active preset id; absent when the device never reported one.
    #[serde(default)]
    ps: Option<i64>,
    /// Everything else in the document, kept verbatim.
    #[serde(flatten)]
    extra: Map<String, Value>,
}

impl StateSnapshot {
    /// Returns the power flag.
    #[must_use]
    pub fn is_on(&self) -> bool {
        self.on
    }

    /// Returns the active preset id as reported by the device.
    ///
    /// WLED reports a negative id when no preset is active; whether an id
    /// actually names a preset is decided by the
    /// [`PresetCatalog`](crate::state::PresetCatalog) lookup, not here.
    #[must_use]
    pub fn preset_id(&self) -> Option<i64> {
        self.ps
    }

    /// Returns a field of the document the client does not interpret.
    #[must_use]
    pub fn get(&self, field: &str) -> Option<&Value> {
        self.extra.get(field)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(body: &str) -> StateSnapshot {
        serde_json::from_str(body).unwrap()
    }

    #[test]
    fn full_document() {
        let snapshot = parse(r#"{"on": true, "bri": 128, "ps": 3, "pl": -1}"#);
        assert!(snapshot.is_on());
        assert_eq!(snapshot.preset_id(), Some(3));
    }

    #[test]
    fn missing_power_flag_defaults_to_off() {
        let snapshot = parse(r#"{"ps": 1}"#);
        assert!(!snapshot.is_on());
    }

    #[test]
    fn missing_preset_id_is_none() {
        let snapshot = parse(r#"{"on": true}"#);
        assert_eq!(snapshot.preset_id(), None);
    }

    #[test]
    fn negative_preset_id_is_kept_verbatim() {
        let snapshot = parse(r#"{"on": true, "ps": -1}"#);
        assert_eq!(snapshot.preset_id(), Some(-1));
    }

    #[test]
    fn uninterpreted_fields_are_retained() {
        let snapshot = parse(r#"{"on": true, "bri": 40, "transition": 7}"#);
        assert_eq!(snapshot.get("bri"), Some(&serde_json::json!(40)));
        assert_eq!(snapshot.get("transition"), Some(&serde_json::json!(7)));
        assert_eq!(snapshot.get("nightlight"), None);
    }
}
