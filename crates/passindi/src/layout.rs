use crate::config::Metrics;
use crate::units::{Point, Size};

/// A host constraint on one axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MeasureSpec {
    Exactly(f64),
    AtMost(f64),
    Unspecified,
}

impl MeasureSpec {
    pub fn resolve(&self, desired: f64) -> f64 {
        match *self {
            Self::Exactly(size) => size,
            Self::AtMost(size) => size.min(desired),
            Self::Unspecified => desired,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Padding {
    pub start: f64,
    pub end: f64,
    pub top: f64,
    pub bottom: f64,
}

impl Padding {
    pub fn uniform(value: f64) -> Self {
        Self {
            start: value,
            end: value,
            top: value,
            bottom: value,
        }
    }

    pub fn horizontal(&self) -> f64 {
        self.start + self.end
    }

    pub fn vertical(&self) -> f64 {
        self.top + self.bottom
    }
}

pub fn desired_size(count: usize, metrics: &Metrics, padding: &Padding) -> Size {
    let diameter = 2.0 * metrics.radius;
    let gaps = count.saturating_sub(1) as f64;
    Size::new(
        padding.horizontal() + count as f64 * diameter + gaps * metrics.ring_margin,
        padding.vertical() + diameter,
    )
}

/// Slot centers laid out left to right, vertically centered in the padded box.
pub fn slot_centers(
    count: usize,
    metrics: &Metrics,
    padding: &Padding,
    height: f64,
) -> impl Iterator<Item = Point> + use<> {
    let step = 2.0 * metrics.radius + metrics.ring_margin;
    let y = padding.top + (height - padding.vertical()) / 2.0;
    let (start, radius) = (padding.start, metrics.radius);

    (0..count).map(move |i| Point::new(start + i as f64 * step + radius, y))
}
