use serde::Deserialize;

#[cfg(debug_assertions)]
pub fn get_relay_url() -> &'static str {
    "http://localhost:3001/submit"  // Local relay mock when running with trunk serve
}

#[cfg(not(debug_assertions))]
pub fn get_relay_url() -> &'static str {
    "https://api.web3forms.com/submit"
}

pub const CONTACT_EMAIL: &str = "hello@iconiqa.studio";

/// Widths at which the page switches between layouts.
pub const STICKY_CARDS_MIN_WIDTH: f64 = 1000.0;
pub const SPOTLIGHT_SLIDER_MAX_WIDTH: f64 = 1024.0;

/// Resize debounce windows in milliseconds.
pub const RESIZE_DEBOUNCE_MS: u32 = 250;
pub const GALLERY_RESIZE_DEBOUNCE_MS: u32 = 300;

/// How long the "message sent" confirmation stays up.
pub const CONFIRMATION_MS: u32 = 5_000;

#[derive(Clone, Copy, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct SpotlightConfig {
    pub gap: f64,
    pub speed: f64,
    pub arc_radius: f64,
}

impl Default for SpotlightConfig {
    fn default() -> Self {
        Self {
            gap: 0.08,
            speed: 0.3,
            arc_radius: 500.0,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct MarqueeConfig {
    /// Pixels per second.
    pub speed: f64,
    /// margin-right of each item in px.
    pub item_margin: f64,
}

impl Default for MarqueeConfig {
    fn default() -> Self {
        Self {
            speed: 50.0,
            item_margin: 30.0,
        }
    }
}

/// Fixed control fields sent alongside every contact submission.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct RelayConfig {
    pub access_key: String,
    pub from_name: String,
}

impl Default for RelayConfig {
    fn default() -> Self {
        Self {
            access_key: option_env!("RELAY_ACCESS_KEY").unwrap_or_default().to_string(),
            from_name: "Iconiqa Website".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_config_falls_back_to_defaults() {
        let cfg: SpotlightConfig = serde_json::from_str(r#"{ "gap": 0.1 }"#).unwrap();
        assert_eq!(cfg.gap, 0.1);
        assert_eq!(cfg.speed, 0.3);
        assert_eq!(cfg.arc_radius, 500.0);
    }

    #[test]
    fn marquee_defaults() {
        let cfg = MarqueeConfig::default();
        assert_eq!(cfg.speed, 50.0);
        assert_eq!(cfg.item_margin, 30.0);
    }
}
