use serde::{Deserialize, Serialize};
use serde_with::{DeserializeFromStr, SerializeDisplay};
use std::f64::consts::PI;
use std::time::Duration;
use strum::{Display as StrumDisplay, EnumIter, EnumString};

pub const DEFAULT_DURATION_MS: u64 = 200;

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    SerializeDisplay,
    DeserializeFromStr,
    EnumString,
    EnumIter,
    StrumDisplay,
)]
#[strum(ascii_case_insensitive)]
pub enum Easing {
    #[strum(to_string = "linear")]
    Linear,
    #[strum(to_string = "ease-in", serialize = "accelerate")]
    EaseIn,
    #[strum(to_string = "ease-out", serialize = "decelerate")]
    EaseOut,
    #[default]
    #[strum(to_string = "ease-in-out", serialize = "accelerate-decelerate")]
    EaseInOut,
    #[strum(to_string = "ease-out-cubic")]
    EaseOutCubic,
}

impl Easing {
    /// Maps linear progress in `[0, 1]` onto the curve.
    pub fn apply(&self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Self::Linear => t,
            Self::EaseIn => t * t,
            Self::EaseOut => 1.0 - (1.0 - t) * (1.0 - t),
            Self::EaseInOut => ((t + 1.0) * PI).cos() / 2.0 + 0.5,
            Self::EaseOutCubic => 1.0 - (1.0 - t).powi(3),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnimationConfig {
    #[serde(default = "default_duration_ms")]
    pub duration_ms: u64,
    #[serde(default)]
    pub easing: Easing,
}

fn default_duration_ms() -> u64 {
    DEFAULT_DURATION_MS
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            duration_ms: DEFAULT_DURATION_MS,
            easing: Easing::default(),
        }
    }
}

impl AnimationConfig {
    pub fn duration(&self) -> Duration {
        Duration::from_millis(self.duration_ms)
    }
}

/// Interpolates a single value between two endpoints.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tween {
    pub from: f64,
    pub to: f64,
    pub duration: Duration,
    pub easing: Easing,
    elapsed: Duration,
}

impl Tween {
    pub fn new(from: f64, to: f64, duration: Duration, easing: Easing) -> Self {
        Self {
            from,
            to,
            duration,
            easing,
            elapsed: Duration::ZERO,
        }
    }

    pub fn progress(&self) -> f64 {
        if self.duration.is_zero() {
            return 1.0;
        }
        (self.elapsed.as_secs_f64() / self.duration.as_secs_f64()).min(1.0)
    }

    pub fn is_finished(&self) -> bool {
        self.elapsed >= self.duration
    }

    pub fn value(&self) -> f64 {
        if self.is_finished() {
            return self.to;
        }
        let eased = self.easing.apply(self.progress());
        self.from + (self.to - self.from) * eased
    }

    /// Moves the tween forward by `dt` and returns the new value. The final
    /// step lands exactly on `to`.
    pub fn step(&mut self, dt: Duration) -> f64 {
        self.elapsed = self.elapsed.saturating_add(dt).min(self.duration);
        self.value()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Animation {
    #[default]
    Idle,
    Running(Tween),
    Completed,
}

impl Animation {
    pub fn is_running(&self) -> bool {
        matches!(self, Self::Running(_))
    }

    /// Advances a running tween. Returns the value written this frame, if any.
    pub fn tick(&mut self, dt: Duration) -> Option<f64> {
        let Self::Running(tween) = self else {
            return None;
        };
        let value = tween.step(dt);
        if tween.is_finished() {
            *self = Self::Completed;
        }
        Some(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_easing_endpoints() {
        for easing in Easing::iter() {
            assert!(easing.apply(0.0).abs() < 1e-9, "{easing} at 0");
            assert!((easing.apply(1.0) - 1.0).abs() < 1e-9, "{easing} at 1");
        }
    }

    #[test]
    fn test_ease_in_out_is_symmetric() {
        let easing = Easing::EaseInOut;
        assert!((easing.apply(0.5) - 0.5).abs() < 1e-9);
        assert!(easing.apply(0.25) < 0.25);
        assert!(easing.apply(0.75) > 0.75);
    }

    #[test]
    fn test_easing_deserialization() {
        let cases = vec![
            ("\"linear\"", Easing::Linear),
            ("\"Linear\"", Easing::Linear),
            ("\"ease-in-out\"", Easing::EaseInOut),
            ("\"ACCELERATE-DECELERATE\"", Easing::EaseInOut),
            ("\"decelerate\"", Easing::EaseOut),
            ("\"ease-out-cubic\"", Easing::EaseOutCubic),
        ];

        for (json, expected) in cases {
            let deserialized: Easing = serde_json::from_str(json).unwrap();
            assert_eq!(deserialized, expected);
        }

        assert!(serde_json::from_str::<Easing>("\"bouncy\"").is_err());
    }

    #[test]
    fn test_tween_snaps_to_target() {
        let mut tween = Tween::new(0.0, 6.0, Duration::from_millis(200), Easing::EaseInOut);
        let mid = tween.step(Duration::from_millis(100));
        assert!(mid > 0.0 && mid < 6.0);
        assert!(!tween.is_finished());

        let end = tween.step(Duration::from_millis(150));
        assert_eq!(end, 6.0);
        assert!(tween.is_finished());
    }

    #[test]
    fn test_zero_duration_finishes_immediately() {
        let mut tween = Tween::new(6.0, 0.0, Duration::ZERO, Easing::Linear);
        assert_eq!(tween.step(Duration::ZERO), 0.0);
        assert!(tween.is_finished());
    }

    #[test]
    fn test_animation_state_machine() {
        let mut animation = Animation::Running(Tween::new(
            0.0,
            1.0,
            Duration::from_millis(100),
            Easing::Linear,
        ));
        assert!(animation.is_running());

        let half = animation.tick(Duration::from_millis(50)).unwrap();
        assert!((half - 0.5).abs() < 1e-9);
        assert!(animation.is_running());

        assert_eq!(animation.tick(Duration::from_millis(50)), Some(1.0));
        assert_eq!(animation, Animation::Completed);
        assert_eq!(animation.tick(Duration::from_millis(16)), None);
    }
}
