//! Dashboard settings, embedded from `assets/dashboard.json` at build time.
//!
//! Missing keys fall back to their defaults; a file that fails to parse is
//! logged and replaced by [`DashboardConfig::default`] as a whole.

use once_cell::sync::Lazy;
use serde::Deserialize;
use tracing::{warn, Level};

use crate::data::RevenueRange;
use crate::engine::geometry::DonutLayout;
use crate::engine::heat::{ColorRamp, Rgb};

const EMBEDDED_CONFIG: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/assets/dashboard.json"
));

static CONFIG: Lazy<DashboardConfig> = Lazy::new(|| {
    DashboardConfig::from_json(EMBEDDED_CONFIG).unwrap_or_else(|err| {
        warn!(%err, "dashboard.json is malformed; using built-in defaults");
        DashboardConfig::default()
    })
});

/// Process-wide configuration (parsed on first use).
pub fn config() -> &'static DashboardConfig {
    &CONFIG
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    pub brand: String,
    pub tagline: String,
    pub log_level: String,
    pub default_sort_key: String,
    pub default_range: RevenueRange,
    pub donut: DonutLayout,
    pub donut_hole_radius: f64,
    pub heat_ramp: RampConfig,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct RampConfig {
    pub low: String,
    pub high: String,
}

impl Default for RampConfig {
    fn default() -> Self {
        let ramp = ColorRamp::default();
        Self {
            low: ramp.low.to_hex(),
            high: ramp.high.to_hex(),
        }
    }
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            brand: "FinSight".to_string(),
            tagline: "Modern Finance Dashboard".to_string(),
            log_level: "info".to_string(),
            default_sort_key: "date".to_string(),
            default_range: RevenueRange::Monthly,
            donut: DonutLayout::default(),
            donut_hole_radius: 32.0,
            heat_ramp: RampConfig::default(),
        }
    }
}

impl DashboardConfig {
    pub fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(raw)
    }

    /// Heat ramp with unparsable endpoints replaced by the default ones.
    pub fn heat_ramp(&self) -> ColorRamp {
        let fallback = ColorRamp::default();
        let parse = |raw: &str, default: Rgb| {
            Rgb::from_hex(raw).unwrap_or_else(|| {
                warn!(color = raw, "invalid heat ramp color; using default");
                default
            })
        };
        ColorRamp {
            low: parse(&self.heat_ramp.low, fallback.low),
            high: parse(&self.heat_ramp.high, fallback.high),
        }
    }

    pub fn log_level(&self) -> Level {
        self.log_level.parse().unwrap_or(Level::INFO)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_config_parses() {
        let parsed = DashboardConfig::from_json(EMBEDDED_CONFIG).unwrap();
        assert_eq!(parsed.brand, "FinSight");
        assert_eq!(parsed.default_sort_key, "date");
        assert_eq!(parsed.donut, DonutLayout::default());
        assert_eq!(parsed.heat_ramp(), ColorRamp::default());
    }

    #[test]
    fn missing_keys_take_defaults() {
        let parsed = DashboardConfig::from_json(r#"{ "brand": "Ledger" }"#).unwrap();
        assert_eq!(parsed.brand, "Ledger");
        assert_eq!(parsed.default_range, RevenueRange::Monthly);
        assert_eq!(parsed.log_level(), Level::INFO);
    }

    #[test]
    fn malformed_json_is_an_error() {
        assert!(DashboardConfig::from_json("{ brand: ").is_err());
    }

    #[test]
    fn bad_ramp_colors_fall_back() {
        let parsed = DashboardConfig::from_json(
            r##"{ "heat_ramp": { "low": "not-a-color", "high": "#ffffff" }, "log_level": "debug" }"##,
        )
        .unwrap();
        let ramp = parsed.heat_ramp();
        assert_eq!(ramp.low, ColorRamp::default().low);
        assert_eq!(ramp.high, Rgb::new(255, 255, 255));
        assert_eq!(parsed.log_level(), Level::DEBUG);
    }

    #[test]
    fn partial_ramp_keeps_the_other_endpoint() {
        let parsed =
            DashboardConfig::from_json(r##"{ "brand": "Ledger", "heat_ramp": { "low": "#000000" } }"##)
                .unwrap();
        assert_eq!(parsed.brand, "Ledger");
        let ramp = parsed.heat_ramp();
        assert_eq!(ramp.low, Rgb::new(0, 0, 0));
        assert_eq!(ramp.high, ColorRamp::default().high);
    }
}
