use crate::canvas::Canvas;
use crate::config::{ConfigError, IndicatorConfig, Metrics};
use crate::layout::{self, MeasureSpec, Padding};
use crate::slot::Slot;
use crate::units::{Density, Size};
use std::time::Duration;

/// A row of dots that fill as characters are typed.
///
/// The filled slots always form a prefix of the row. Geometry is recomputed by
/// [`measure`](Self::measure); fill state survives re-layout and is keyed by slot index.
#[derive(Debug, Clone)]
pub struct PasswordIndicator {
    config: IndicatorConfig,
    metrics: Metrics,
    padding: Padding,
    width_spec: MeasureSpec,
    height_spec: MeasureSpec,
    size: Size,
    slots: Vec<Slot>,
    dirty: bool,
}

impl PasswordIndicator {
    pub fn new(config: IndicatorConfig, density: Density) -> Result<Self, ConfigError> {
        let metrics = config.metrics(density)?;
        Ok(Self::from_parts(config, metrics))
    }

    fn from_parts(config: IndicatorConfig, metrics: Metrics) -> Self {
        let mut indicator = Self {
            config,
            metrics,
            padding: Padding::default(),
            width_spec: MeasureSpec::Unspecified,
            height_spec: MeasureSpec::Unspecified,
            size: Size::default(),
            slots: Vec::new(),
            dirty: true,
        };
        indicator.relayout();
        indicator
    }

    pub fn config(&self) -> &IndicatorConfig {
        &self.config
    }

    pub fn metrics(&self) -> &Metrics {
        &self.metrics
    }

    pub fn padding(&self) -> &Padding {
        &self.padding
    }

    pub fn size(&self) -> Size {
        self.size
    }

    pub fn slots(&self) -> &[Slot] {
        &self.slots
    }

    pub fn count(&self) -> usize {
        self.slots.len()
    }

    pub fn filled_count(&self) -> usize {
        self.slots.iter().take_while(|s| s.filled).count()
    }

    pub fn is_animating(&self) -> bool {
        self.slots.iter().any(|s| s.animation.is_running())
    }

    pub fn desired_size(&self, padding: &Padding) -> Size {
        layout::desired_size(self.config.count, &self.metrics, padding)
    }

    /// Resolves the widget size against the host constraints and regenerates slot geometry.
    pub fn measure(&mut self, width: MeasureSpec, height: MeasureSpec, padding: Padding) -> Size {
        self.width_spec = width;
        self.height_spec = height;
        self.padding = padding;
        self.relayout();
        self.size
    }

    /// Swaps in a new configuration, keeping the filled prefix (clamped to the new count).
    pub fn reconfigure(
        &mut self,
        config: IndicatorConfig,
        density: Density,
    ) -> Result<(), ConfigError> {
        let metrics = config.metrics(density)?;
        let filled = self.filled_count().min(config.count);

        self.config = config;
        self.metrics = metrics;
        self.slots.clear();
        self.relayout();

        let full = self.metrics.full_fill_radius();
        for slot in self.slots.iter_mut().take(filled) {
            slot.filled = true;
            slot.fill_radius = full;
        }
        self.dirty = true;

        log::debug!(
            "Reconfigured indicator: {} slots, {} filled",
            self.slots.len(),
            filled
        );
        Ok(())
    }

    /// Advances or retreats until `target` slots (clamped to the count) are filled.
    pub fn fill_to(&mut self, target: usize) {
        let target = target.min(self.count());
        while self.filled_count() < target {
            self.advance();
        }
        while self.filled_count() > target {
            self.retreat();
        }
    }

    fn relayout(&mut self) {
        let desired = self.desired_size(&self.padding);
        self.size = Size::new(
            self.width_spec.resolve(desired.width),
            self.height_spec.resolve(desired.height),
        );

        let count = self.config.count;
        let radius = self.metrics.radius;
        let centers = layout::slot_centers(count, &self.metrics, &self.padding, self.size.height);

        self.slots.truncate(count);
        for (i, center) in centers.enumerate() {
            match self.slots.get_mut(i) {
                Some(slot) => {
                    slot.center = center;
                    slot.radius = radius;
                }
                None => self.slots.push(Slot::new(center, radius)),
            }
        }
        self.dirty = true;
    }

    pub fn draw<C: Canvas>(&self, canvas: &mut C) -> Result<(), C::Error> {
        let full = self.metrics.full_fill_radius();
        for slot in &self.slots {
            canvas.stroke_circle(
                slot.center,
                slot.radius,
                self.metrics.ring_stroke,
                self.config.ring_color,
            )?;
            if slot.is_fill_visible() {
                canvas.fill_circle(
                    slot.center,
                    slot.fill_radius.min(full),
                    self.config.fill_color,
                )?;
            }
        }
        Ok(())
    }

    /// Fills the first empty slot. No-op when every slot is filled.
    pub fn advance(&mut self) {
        let full = self.metrics.full_fill_radius();
        let (duration, easing) = (self.config.animation.duration(), self.config.animation.easing);

        if let Some((i, slot)) = self.slots.iter_mut().enumerate().find(|(_, s)| !s.filled) {
            slot.filled = true;
            slot.animate(0.0, full, duration, easing);
            self.dirty = true;
            log::debug!("Filled slot {}", i);
        }
    }

    /// Empties the last filled slot. No-op when every slot is empty.
    pub fn retreat(&mut self) {
        let (duration, easing) = (self.config.animation.duration(), self.config.animation.easing);
        let first_empty = self.filled_count();
        let Some(i) = first_empty.checked_sub(1) else {
            return;
        };

        let slot = &mut self.slots[i];
        slot.filled = false;
        slot.animate(slot.fill_radius, 0.0, duration, easing);
        self.dirty = true;
        log::debug!("Emptied slot {}", i);
    }

    /// Empties every slot, shrinking them all at once.
    pub fn reset(&mut self) {
        let (duration, easing) = (self.config.animation.duration(), self.config.animation.easing);
        for slot in &mut self.slots {
            slot.filled = false;
            slot.animate(slot.fill_radius, 0.0, duration, easing);
        }
        self.dirty = true;
        log::debug!("Reset {} slots", self.slots.len());
    }

    /// Advances every running animation by `dt`. Returns true if anything moved.
    pub fn tick(&mut self, dt: Duration) -> bool {
        let changed = self
            .slots
            .iter_mut()
            .fold(false, |changed, slot| slot.tick(dt) | changed);
        self.dirty |= changed;
        changed
    }

    /// Returns and clears the pending redraw request.
    pub fn take_redraw(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }
}

impl Default for PasswordIndicator {
    fn default() -> Self {
        let config = IndicatorConfig::default();
        let metrics = config.scaled(Density::BASELINE);
        Self::from_parts(config, metrics)
    }
}
