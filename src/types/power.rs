// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Power-related types for WLED devices.

use std::fmt;
use std::str::FromStr;

use crate::error::ParseError;

/// A power intent for a WLED device.
///
/// `Toggle` is a client-side convenience: it is resolved against the
/// client's cached power flag before anything is sent on the wire, so the
/// device only ever sees an absolute on/off value.
///
/// # Examples
///
/// ```
/// use wled_lib::types::PowerSetting;
///
/// assert_eq!(PowerSetting::On.resolve(false), true);
/// assert_eq!(PowerSetting::Toggle.resolve(true), false);
/// assert_eq!("toggle".parse::<PowerSetting>().unwrap(), PowerSetting::Toggle);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PowerSetting {
    /// Power off.
    Off,
    /// Power on.
    On,
    /// Flip the last-known power state.
    Toggle,
}

impl PowerSetting {
    /// Returns the string representation of this setting.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Off => "off",
            Self::On => "on",
            Self::Toggle => "toggle",
        }
    }

    /// Resolves this setting to an absolute power flag.
    ///
    /// `current` is the last-known power flag; only `Toggle` consults it.
    #[must_use]
    pub const fn resolve(&self, current: bool) -> bool {
        match self {
            Self::Off => false,
            Self::On => true,
            Self::Toggle => !current,
        }
    }
}

impl fmt::Display for PowerSetting {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for PowerSetting {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "off" | "0" | "false" => Ok(Self::Off),
            "on" | "1" | "true" => Ok(Self::On),
            "toggle" => Ok(Self::Toggle),
            _ => Err(ParseError::InvalidPowerSetting(s.to_string())),
        }
    }
}

impl From<bool> for PowerSetting {
    fn from(value: bool) -> Self {
        if value { Self::On } else { Self::Off }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn power_setting_as_str() {
        assert_eq!(PowerSetting::Off.as_str(), "off");
        assert_eq!(PowerSetting::On.as_str(), "on");
        assert_eq!(PowerSetting::Toggle.as_str(), "toggle");
    }

    #[test]
    fn power_setting_resolve() {
        assert!(PowerSetting::On.resolve(false));
        assert!(PowerSetting::On.resolve(true));
        assert!(!PowerSetting::Off.resolve(true));
        assert!(PowerSetting::Toggle.resolve(false));
        assert!(!PowerSetting::Toggle.resolve(true));
    }

    #[test]
    fn power_setting_from_str() {
        assert_eq!("on".parse::<PowerSetting>().unwrap(), PowerSetting::On);
        assert_eq!("OFF".parse::<PowerSetting>().unwrap(), PowerSetting::Off);
        assert_eq!("1".parse::<PowerSetting>().unwrap(), PowerSetting::On);
        assert_eq!("false".parse::<PowerSetting>().unwrap(), PowerSetting::Off);
        assert_eq!(
            "Toggle".parse::<PowerSetting>().unwrap(),
            PowerSetting::Toggle
        );
    }

    #[test]
    fn power_setting_from_str_invalid() {
        let result = "blink".parse::<PowerSetting>();
        assert!(matches!(
            result.unwrap_err(),
            ParseError::InvalidPowerSetting(_)
        ));
    }

    #[test]
    fn power_setting_from_bool() {
        assert_eq!(PowerSetting::from(true), PowerSetting::On);
        assert_eq!(PowerSetting::from(false), PowerSetting::Off);
    }
}
