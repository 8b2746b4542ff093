// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! WLED state command definitions.
//!
//! A [`StateCommand`] is a typed write against the device's `/json/state`
//! endpoint. Every command body carries `"v": true`, which asks the device
//! to echo the complete resulting state in the response so the client can
//! refresh its cache without an extra read.

use serde_json::{Value, json};

/// A write command for the WLED state endpoint.
///
/// # Examples
///
/// ```
/// use wled_lib::command::StateCommand;
///
/// let cmd = StateCommand::Power(true);
/// assert_eq!(cmd.body(), serde_json::json!({ "on": true, "v": true }));
///
/// let cmd = StateCommand::Preset(3);
/// assert_eq!(cmd.body(), serde_json::json!({ "ps": 3, "v": true }));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StateCommand {
    /// Set the power flag to an absolute value.
    Power(bool),
    /// Activate a preset by its device-assigned id.
    Preset(i64),
}

impl StateCommand {
    /// Renders the JSON request body for this command.
    #[must_use]
    pub fn body(&self) -> Value {
        match self {
            Self::Power(on) => json!({ "on": on, "v": true }),
            Self::Preset(id) => json!({ "ps": id, "v": true }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn power_command_body() {
        assert_eq!(
            StateCommand::Power(false).body(),
            json!({ "on": false, "v": true })
        );
    }

    #[test]
    fn preset_command_body() {
        assert_eq!(
            StateCommand::Preset(7).body(),
            json!({ "ps": 7, "v": true })
        );
    }

    #[test]
    fn body_always_requests_full_echo() {
        for cmd in [StateCommand::Power(true), StateCommand::Preset(1)] {
            assert_eq!(cmd.body()["v"], json!(true));
        }
    }
}
