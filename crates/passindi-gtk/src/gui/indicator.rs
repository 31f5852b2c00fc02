use super::canvas::CairoCanvas;
use gtk::prelude::*;
use gtk4 as gtk;
use passindi::ipc::Command;
use passindi::units::Density;
use passindi::{ConfigError, IndicatorConfig, MeasureSpec, Padding, PasswordIndicator};
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use std::time::Duration;

/// Hosts a [`PasswordIndicator`] inside a drawing area and drives its animations
/// from the widget's frame clock.
pub struct IndicatorView {
    pub area: gtk::DrawingArea,
    indicator: Rc<RefCell<PasswordIndicator>>,
    padding: Rc<Cell<Padding>>,
    ticking: Rc<Cell<bool>>,
}

impl IndicatorView {
    pub fn new(area: gtk::DrawingArea, indicator: PasswordIndicator, padding: Padding) -> Self {
        let view = Self {
            area,
            indicator: Rc::new(RefCell::new(indicator)),
            padding: Rc::new(Cell::new(padding)),
            ticking: Rc::new(Cell::new(false)),
        };
        view.connect();
        view
    }

    fn connect(&self) {
        let indicator = self.indicator.clone();
        let padding = self.padding.clone();
        self.area.connect_resize(move |_, width, height| {
            let size = indicator.borrow_mut().measure(
                MeasureSpec::Exactly(width as f64),
                MeasureSpec::Exactly(height as f64),
                padding.get(),
            );
            log::debug!("Indicator laid out at {}x{}", size.width, size.height);
        });

        let indicator = self.indicator.clone();
        self.area.set_draw_func(move |_, cr, _, _| {
            if let Err(e) = indicator.borrow().draw(&mut CairoCanvas::new(cr)) {
                log::error!("Drawing error: {}", e);
            }
        });

        self.update_content_size();
    }

    pub fn count(&self) -> usize {
        self.indicator.borrow().count()
    }

    pub fn filled_count(&self) -> usize {
        self.indicator.borrow().filled_count()
    }

    /// Fills or empties dots until `target` are filled.
    pub fn fill_to(&self, target: usize) {
        self.indicator.borrow_mut().fill_to(target);
        self.schedule();
    }

    pub fn apply(&self, command: Command) {
        {
            let mut indicator = self.indicator.borrow_mut();
            match command {
                Command::Advance => indicator.advance(),
                Command::Retreat => indicator.retreat(),
                Command::Reset => indicator.reset(),
            }
        }
        self.schedule();
    }

    pub fn reconfigure(
        &self,
        config: IndicatorConfig,
        padding: Padding,
        density: Density,
    ) -> Result<(), ConfigError> {
        self.indicator.borrow_mut().reconfigure(config, density)?;
        self.padding.set(padding);
        self.update_content_size();

        let (width, height) = (self.area.width(), self.area.height());
        if width > 0 && height > 0 {
            self.indicator.borrow_mut().measure(
                MeasureSpec::Exactly(width as f64),
                MeasureSpec::Exactly(height as f64),
                padding,
            );
        }
        self.schedule();
        Ok(())
    }

    fn update_content_size(&self) {
        let size = self.indicator.borrow().desired_size(&self.padding.get());
        self.area.set_content_width(size.width.ceil() as i32);
        self.area.set_content_height(size.height.ceil() as i32);
    }

    fn schedule(&self) {
        let animating = {
            let mut indicator = self.indicator.borrow_mut();
            if indicator.take_redraw() {
                self.area.queue_draw();
            }
            indicator.is_animating()
        };

        if animating && !self.ticking.replace(true) {
            self.start_ticking();
        }
    }

    fn start_ticking(&self) {
        let indicator = self.indicator.clone();
        let ticking = self.ticking.clone();
        let last_frame = Cell::new(None::<i64>);

        self.area.add_tick_callback(move |area, clock| {
            let now = clock.frame_time();
            let dt = last_frame.get().map_or(0, |last| (now - last).max(0));
            last_frame.set(Some(now));

            let mut indicator = indicator.borrow_mut();
            indicator.tick(Duration::from_micros(dt as u64));
            if indicator.take_redraw() {
                area.queue_draw();
            }

            if indicator.is_animating() {
                glib::ControlFlow::Continue
            } else {
                ticking.set(false);
                glib::ControlFlow::Break
            }
        });
    }
}

/// Translates an edit into indicator commands. `filled` is the indicator's
/// current fill, which socket commands may have moved away from the typed
/// length; the edit brings it back to `current`. Lengths past the slot count
/// are clamped so extra characters neither fill nor empty dots.
pub fn commands_for_edit(filled: usize, current: usize, count: usize) -> Vec<Command> {
    if current == 0 && filled > 1 {
        return vec![Command::Reset];
    }

    let (filled, current) = (filled.min(count), current.min(count));
    if current >= filled {
        vec![Command::Advance; current - filled]
    } else {
        vec![Command::Retreat; filled - current]
    }
}
