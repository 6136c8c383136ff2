// Tunables for the particle field. The defaults reproduce the portfolio
// page's background exactly; anything else is opt-in from JS.

use crate::color::Color;

#[cfg(feature = "serde")]
use serde::Deserialize;

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct FieldConfig {
    /// Number of particles seeded at startup. Never changes afterwards.
    pub particle_count: usize,
    /// Radius range `[min, max)` in canvas pixels.
    pub size_range: (f64, f64),
    /// Each velocity component is drawn from `[-max_speed, max_speed)`.
    pub max_speed: f64,
    pub opacity_range: (f64, f64),
    /// Pairs closer than this are joined by a line.
    pub link_distance: f64,
    /// Line alpha at distance zero, falling off linearly to 0 at `link_distance`.
    pub link_alpha: f64,
    pub line_width: f64,
    pub color: Color,
    /// Wrap every frame in console.time / console.timeEnd.
    pub profile: bool,
}

impl FieldConfig {
    pub const PARTICLE_COUNT: usize = 80;
    pub const LINK_DISTANCE: f64 = 150.0;
    pub const LINK_ALPHA: f64 = 0.06;

    #[cfg(feature = "serde_json")]
    pub fn from_json(json: &str) -> Result<FieldConfig, serde_json::Error> {
        serde_json::from_str(json)
    }
}

impl Default for FieldConfig {
    fn default() -> Self {
        FieldConfig {
            particle_count: FieldConfig::PARTICLE_COUNT,
            size_range: (0.5, 2.5),
            max_speed: 0.2,
            opacity_range: (0.1, 0.6),
            link_distance: FieldConfig::LINK_DISTANCE,
            link_alpha: FieldConfig::LINK_ALPHA,
            line_width: 0.5,
            color: Color::from_u32(0x00c8ff),
            profile: false,
        }
    }
}

// The JSON tests only build with the loader enabled:
// `cargo test --features serde_json`.
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_page_constants() {
        let config = FieldConfig::default();
        assert_eq!(config.particle_count, 80);
        assert_eq!(config.link_distance, 150.0);
        assert_eq!(config.link_alpha, 0.06);
        assert_eq!(config.line_width, 0.5);
        assert_eq!(config.color, Color { r: 0, g: 200, b: 255 });
        assert!(!config.profile);
    }

    #[cfg(feature = "serde_json")]
    #[test]
    fn json_overrides_only_given_fields() {
        let config = FieldConfig::from_json(r#"{ "particle_count": 12, "profile": true }"#).unwrap();
        assert_eq!(config.particle_count, 12);
        assert!(config.profile);
        assert_eq!(config.link_distance, 150.0);
    }

    #[cfg(feature = "serde_json")]
    #[test]
    fn json_rejects_wrong_types() {
        assert!(FieldConfig::from_json(r#"{ "particle_count": "many" }"#).is_err());
    }
}
