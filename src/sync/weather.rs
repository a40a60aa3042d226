//! Weather state: enablement, units, temperature and condition icon.
//!
//! Weather is hidden until the first complete observation arrives, then
//! stays enabled for the life of the app.  A change of units invalidates
//! any fetched temperature, so the caller must request fresh data.

use core::fmt;
use core::fmt::Write as _;

use serde::{Deserialize, Serialize};

/// Fixed six-entry condition icon table, indexed by condition code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[repr(u8)]
pub enum WeatherIcon {
    Lightning = 0,
    Rain = 1,
    Snow = 2,
    Fog = 3,
    Clear = 4,
    Clouds = 5,
}

impl WeatherIcon {
    /// Every icon in condition-code order.
    pub const TABLE: [WeatherIcon; 6] = [
        Self::Lightning,
        Self::Rain,
        Self::Snow,
        Self::Fog,
        Self::Clear,
        Self::Clouds,
    ];

    /// Look up the icon for an externally supplied condition code.
    /// Returns `None` for codes outside the table.
    pub fn from_code(code: i32) -> Option<Self> {
        usize::try_from(code)
            .ok()
            .and_then(|i| Self::TABLE.get(i).copied())
    }

    /// Index of this icon in the table.
    pub const fn code(self) -> u8 {
        self as u8
    }
}

impl fmt::Display for WeatherIcon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Lightning => write!(f, "lightning"),
            Self::Rain => write!(f, "rain"),
            Self::Snow => write!(f, "snow"),
            Self::Fog => write!(f, "fog"),
            Self::Clear => write!(f, "clear"),
            Self::Clouds => write!(f, "clouds"),
        }
    }
}

/// What an applied observation changed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ObservationOutcome {
    /// First observation ever: weather elements must be revealed.
    pub revealed: bool,
    /// Formatted temperature text, e.g. `"72 °F"`.
    pub text: String,
    /// New icon, only when the condition code changed.
    pub icon: Option<WeatherIcon>,
}

/// Last-known weather, owned by the watch service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeatherState {
    enabled: bool,
    units: String,
    temperature: i32,
    condition: WeatherIcon,
}

impl Default for WeatherState {
    fn default() -> Self {
        Self::new()
    }
}

impl WeatherState {
    pub const fn new() -> Self {
        Self {
            enabled: false,
            units: String::new(),
            temperature: 0,
            condition: WeatherIcon::Clear,
        }
    }

    pub fn enabled(&self) -> bool {
        self.enabled
    }

    pub fn units(&self) -> &str {
        &self.units
    }

    pub fn temperature(&self) -> i32 {
        self.temperature
    }

    pub fn condition(&self) -> WeatherIcon {
        self.condition
    }

    /// Store a new unit label.
    ///
    /// Returns `true` when the label changed and weather must be re-fetched.
    pub fn on_units(&mut self, units: &str) -> bool {
        if self.units == units {
            return false;
        }
        units.clone_into(&mut self.units);
        true
    }

    /// Apply a complete temperature + condition observation.
    ///
    /// An unknown condition code still updates the temperature but leaves
    /// the stored icon untouched.
    pub fn on_observation(&mut self, temperature: i32, condition_code: i32) -> ObservationOutcome {
        let revealed = !self.enabled;
        self.enabled = true;
        self.temperature = temperature;

        let icon = match WeatherIcon::from_code(condition_code) {
            Some(icon) if icon != self.condition => {
                self.condition = icon;
                Some(icon)
            }
            _ => None,
        };

        ObservationOutcome {
            revealed,
            text: self.display_text(),
            icon,
        }
    }

    /// Render `"<temperature> °<units>"`.
    pub fn display_text(&self) -> String {
        let mut text = String::with_capacity(8 + self.units.len());
        // Writing into a String cannot fail.
        let _ = write!(text, "{} \u{00b0}{}", self.temperature, self.units);
        text
    }
}
