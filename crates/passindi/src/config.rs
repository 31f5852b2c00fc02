use crate::anim::AnimationConfig;
use crate::color::Color;
use crate::units::{Density, Dp};
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const DEFAULT_COUNT: usize = 3;
pub const DEFAULT_RADIUS: f64 = 8.0;
pub const DEFAULT_RING_MARGIN: f64 = 4.0;
pub const DEFAULT_FILL_MARGIN: f64 = 2.0;
pub const DEFAULT_RING_STROKE: f64 = 1.0;
pub const MAX_COUNT: usize = 64;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error("Indicator needs at least one slot")]
    NoSlots,
    #[error("Too many slots: {count} (at most {max})")]
    TooManySlots { count: usize, max: usize },
    #[error("Invalid {name}: {value} (must be a finite, {requirement} length)")]
    InvalidLength {
        name: &'static str,
        value: f64,
        requirement: &'static str,
    },
    #[error("Fill margin {fill_margin} must be smaller than radius {radius}")]
    FillMarginTooLarge { fill_margin: f64, radius: f64 },
    #[error("Invalid display density: {0}")]
    InvalidDensity(f64),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct IndicatorConfig {
    pub count: usize,
    pub radius: Dp,
    pub ring_margin: Dp,
    pub fill_margin: Dp,
    pub ring_stroke: Dp,
    pub ring_color: Color,
    pub fill_color: Color,
    pub animation: AnimationConfig,
}

impl Default for IndicatorConfig {
    fn default() -> Self {
        Self {
            count: DEFAULT_COUNT,
            radius: Dp::new(DEFAULT_RADIUS),
            ring_margin: Dp::new(DEFAULT_RING_MARGIN),
            fill_margin: Dp::new(DEFAULT_FILL_MARGIN),
            ring_stroke: Dp::new(DEFAULT_RING_STROKE),
            ring_color: Color::BLACK,
            fill_color: Color::BLACK,
            animation: AnimationConfig::default(),
        }
    }
}

/// Pixel sizes derived from an [`IndicatorConfig`] at a given density.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Metrics {
    pub radius: f64,
    pub ring_margin: f64,
    pub fill_margin: f64,
    pub ring_stroke: f64,
}

impl Metrics {
    pub fn full_fill_radius(&self) -> f64 {
        self.radius - self.fill_margin
    }
}

impl IndicatorConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.count == 0 {
            return Err(ConfigError::NoSlots);
        }
        if self.count > MAX_COUNT {
            return Err(ConfigError::TooManySlots {
                count: self.count,
                max: MAX_COUNT,
            });
        }

        check_length("radius", *self.radius, |v| v > 0.0, "positive")?;
        check_length("ring_margin", *self.ring_margin, |v| v >= 0.0, "non-negative")?;
        check_length("fill_margin", *self.fill_margin, |v| v >= 0.0, "non-negative")?;
        check_length("ring_stroke", *self.ring_stroke, |v| v >= 0.0, "non-negative")?;

        if self.fill_margin >= self.radius {
            return Err(ConfigError::FillMarginTooLarge {
                fill_margin: *self.fill_margin,
                radius: *self.radius,
            });
        }

        Ok(())
    }

    pub fn metrics(&self, density: Density) -> Result<Metrics, ConfigError> {
        self.validate()?;
        if !density.is_valid() {
            return Err(ConfigError::InvalidDensity(*density));
        }

        Ok(self.scaled(density))
    }

    /// Converts the dp lengths to pixels without validating them.
    pub(crate) fn scaled(&self, density: Density) -> Metrics {
        Metrics {
            radius: self.radius.to_px(density),
            ring_margin: self.ring_margin.to_px(density),
            fill_margin: self.fill_margin.to_px(density),
            ring_stroke: self.ring_stroke.to_px(density),
        }
    }
}

fn check_length(
    name: &'static str,
    value: f64,
    valid: impl Fn(f64) -> bool,
    requirement: &'static str,
) -> Result<(), ConfigError> {
    if value.is_finite() && valid(value) {
        Ok(())
    } else {
        Err(ConfigError::InvalidLength {
            name,
            value,
            requirement,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::anim::Easing;

    #[test]
    fn test_defaults() {
        let config = IndicatorConfig::default();
        assert_eq!(config.count, 3);
        assert_eq!(config.animation.duration_ms, 200);
        assert_eq!(config.animation.easing, Easing::EaseInOut);

        let metrics = config.metrics(Density::new(2.0)).unwrap();
        assert_eq!(metrics.radius, 16.0);
        assert_eq!(metrics.ring_margin, 8.0);
        assert_eq!(metrics.fill_margin, 4.0);
        assert_eq!(metrics.ring_stroke, 2.0);
        assert_eq!(metrics.full_fill_radius(), 12.0);
    }

    #[test]
    fn test_partial_deserialization_keeps_defaults() {
        let json = r##"{
            "count": 6,
            "fill_color": "#ff0000",
            "animation": { "easing": "linear" }
        }"##;
        let config: IndicatorConfig = serde_json::from_str(json).unwrap();

        assert_eq!(config.count, 6);
        assert_eq!(config.radius, Dp::new(DEFAULT_RADIUS));
        assert_eq!(config.ring_color, Color::BLACK);
        assert_eq!(config.fill_color, Color::rgba(1.0, 0.0, 0.0, 1.0));
        assert_eq!(config.animation.easing, Easing::Linear);
        assert_eq!(config.animation.duration_ms, 200);
    }

    #[test]
    fn test_negative_count_is_rejected_by_deserialization() {
        assert!(serde_json::from_str::<IndicatorConfig>(r#"{ "count": -1 }"#).is_err());
    }

    #[test]
    fn test_validation_errors() {
        let config = IndicatorConfig {
            count: 0,
            ..Default::default()
        };
        assert_eq!(config.validate(), Err(ConfigError::NoSlots));

        let config = IndicatorConfig {
            radius: Dp::new(0.0),
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidLength { name: "radius", .. })
        ));

        let config = IndicatorConfig {
            ring_margin: Dp::new(f64::NAN),
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidLength {
                name: "ring_margin",
                ..
            })
        ));

        let config = IndicatorConfig {
            fill_margin: Dp::new(8.0),
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::FillMarginTooLarge { .. })
        ));
    }

    #[test]
    fn test_slot_count_upper_bound() {
        let config = IndicatorConfig {
            count: MAX_COUNT,
            ..Default::default()
        };
        assert_eq!(config.validate(), Ok(()));

        let config = IndicatorConfig {
            count: usize::MAX,
            ..Default::default()
        };
        assert_eq!(
            config.validate(),
            Err(ConfigError::TooManySlots {
                count: usize::MAX,
                max: MAX_COUNT,
            })
        );
        assert!(config.metrics(Density::BASELINE).is_err());
    }

    #[test]
    fn test_invalid_density() {
        let config = IndicatorConfig::default();
        assert_eq!(
            config.metrics(Density::new(0.0)),
            Err(ConfigError::InvalidDensity(0.0))
        );
    }
}
