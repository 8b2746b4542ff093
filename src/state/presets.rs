// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Preset catalog built from the device's preset listing.

use std::collections::{BTreeMap, HashMap};

use serde::Deserialize;

/// The `/presets.json` document: string preset id to preset object.
pub type PresetsDocument = BTreeMap<String, PresetEntry>;

/// A single entry of the device's preset listing.
///
/// WLED stores presets as JSON objects; the only field this client reads is
/// the optional `"n"` display name. Slot 0 and other unsaved slots come back
/// as objects without a name and are skipped when the catalog is built.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PresetEntry {
    n: Option<String>,
}

impl PresetEntry {
    /// Creates an entry with the given display name.
    #[must_use]
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            n: Some(name.into()),
        }
    }

    /// Returns the display name, if the preset carries one.
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        self.n.as_deref()
    }
}

/// Bidirectional index between preset names and device-assigned ids.
///
/// Built once per `connect` from the preset listing and read-only
/// afterwards. Name iteration is lexicographic ascending. The mapping is
/// bijective: when two ids carry the same display name, the one with the
/// later key in the document's key order wins and the earlier id becomes
/// unknown to the catalog.
///
/// # Examples
///
/// ```
/// use wled_lib::state::{PresetCatalog, PresetEntry, PresetsDocument};
///
/// let mut doc = PresetsDocument::new();
/// doc.insert("1".to_string(), PresetEntry::named("Foo"));
/// doc.insert("2".to_string(), PresetEntry::named("Bar"));
///
/// let catalog = PresetCatalog::from_document(&doc);
/// assert_eq!(catalog.names(), vec!["Bar".to_string(), "Foo".to_string()]);
/// assert_eq!(catalog.id_of("Foo"), Some(1));
/// assert_eq!(catalog.name_of(2), Some("Bar"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct PresetCatalog {
    by_name: BTreeMap<String, i64>,
    by_id: HashMap<i64, String>,
}

impl PresetCatalog {
    /// Builds a catalog from the device's preset listing.
    ///
    /// Entries without a display name are dropped; entries whose id key is
    /// not numeric are skipped with a warning.
    #[must_use]
    pub fn from_document(doc: &PresetsDocument) -> Self {
        let mut by_name = BTreeMap::new();
        for (key, entry) in doc {
            let Some(name) = entry.name() else {
                continue;
            };
            let Ok(id) = key.parse::<i64>() else {
                tracing::warn!(key = %key, "skipping preset with non-numeric id");
                continue;
            };
            by_name.insert(name.to_string(), id);
        }

        let by_id = by_name
            .iter()
            .map(|(name, &id)| (id, name.clone()))
            .collect();

        Self { by_name, by_id }
    }

    /// Returns the id of the named preset.
    #[must_use]
    pub fn id_of(&self, name: &str) -> Option<i64> {
        self.by_name.get(name).copied()
    }

    /// Returns the name the given id maps to.
    #[must_use]
    pub fn name_of(&self, id: i64) -> Option<&str> {
        self.by_id.get(&id).map(String::as_str)
    }

    /// Returns all preset names, sorted ascending.
    ///
    /// The list is freshly allocated per call; it is a copy, not a view.
    #[must_use]
    pub fn names(&self) -> Vec<String> {
        self.by_name.keys().cloned().collect()
    }

    /// Returns the number of named presets.
    #[must_use]
    pub fn len(&self) -> usize {
        self.by_name.len()
    }

    /// Returns `true` if the device has no named presets.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.by_name.is_empty()
    }
}
