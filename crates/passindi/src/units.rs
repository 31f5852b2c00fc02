use derive_more::{Deref, Display, From, Into};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// Pixels per density-independent pixel.
#[derive(Debug, Clone, Copy, PartialEq, Display, Deref, From, Into)]
pub struct Density(f64);

impl Density {
    pub const BASELINE: Density = Density(1.0);

    pub fn new(pixels_per_dp: f64) -> Self {
        Self(pixels_per_dp)
    }

    pub fn is_valid(&self) -> bool {
        self.0.is_finite() && self.0 > 0.0
    }
}

impl Default for Density {
    fn default() -> Self {
        Self::BASELINE
    }
}

/// A length in density-independent pixels.
#[derive(
    Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize, Display, Deref, From, Into,
)]
#[serde(transparent)]
pub struct Dp(f64);

impl Dp {
    pub fn new(value: f64) -> Self {
        Self(value)
    }

    pub fn to_px(self, density: Density) -> f64 {
        dp(self.0, density)
    }
}

pub fn dp(value: f64, density: Density) -> f64 {
    value * *density
}
