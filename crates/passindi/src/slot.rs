use crate::anim::{Animation, Easing, Tween};
use crate::units::Point;
use std::time::Duration;

#[derive(Debug, Clone, PartialEq)]
pub struct Slot {
    pub center: Point,
    pub radius: f64,
    pub fill_radius: f64,
    pub filled: bool,
    pub animation: Animation,
}

impl Slot {
    pub fn new(center: Point, radius: f64) -> Self {
        Self {
            center,
            radius,
            fill_radius: 0.0,
            filled: false,
            animation: Animation::Idle,
        }
    }

    /// Whether the fill disk should be painted this frame.
    pub fn is_fill_visible(&self) -> bool {
        (self.filled || self.animation.is_running()) && self.fill_radius > 0.0
    }

    /// Replaces any running animation with one from `from` to `to`.
    pub fn animate(&mut self, from: f64, to: f64, duration: Duration, easing: Easing) {
        self.fill_radius = from;
        self.animation = Animation::Running(Tween::new(from, to, duration, easing));
    }

    /// Returns true if the fill radius changed.
    pub fn tick(&mut self, dt: Duration) -> bool {
        match self.animation.tick(dt) {
            Some(value) => {
                self.fill_radius = value;
                true
            }
            None => false,
        }
    }
}
