//! Headless display adapter.
//!
//! Implements [`DisplaySink`] by logging every rendering command.  Used
//! for bench runs without a screen and as the simulation display.

use log::info;

use crate::app::ports::DisplaySink;
use crate::sync::weather::WeatherIcon;

#[derive(Debug, Default)]
pub struct LogDisplay;

impl LogDisplay {
    pub fn new() -> Self {
        Self
    }
}

impl DisplaySink for LogDisplay {
    fn set_countdown_text(&mut self, text: &str) {
        info!("DISP  | countdown '{}'", text);
    }

    fn set_name_text(&mut self, text: &str) {
        info!("DISP  | name '{}'", text);
    }

    fn set_weather_text(&mut self, text: &str) {
        info!("DISP  | weather '{}'", text);
    }

    fn set_weather_icon(&mut self, icon: WeatherIcon) {
        info!("DISP  | icon {} ({})", icon, icon.code());
    }

    fn set_weather_visible(&mut self, visible: bool) {
        info!("DISP  | weather {}", if visible { "shown" } else { "hidden" });
    }

    fn set_time_text(&mut self, hours: &str, minutes: &str) {
        info!("DISP  | time {} {}", hours, minutes);
    }
}
