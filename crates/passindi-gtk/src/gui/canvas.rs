use cairo::Context;
use passindi::Canvas;
use passindi::color::Color;
use passindi::units::Point;
use std::f64::consts::PI;

pub struct CairoCanvas<'a> {
    cr: &'a Context,
}

impl<'a> CairoCanvas<'a> {
    pub fn new(cr: &'a Context) -> Self {
        Self { cr }
    }

    fn circle(&self, center: Point, radius: f64, color: Color) {
        let (r, g, b, a) = color.components();
        self.cr.set_source_rgba(r, g, b, a);
        self.cr.new_sub_path();
        self.cr.arc(center.x, center.y, radius, 0.0, 2.0 * PI);
    }
}

impl Canvas for CairoCanvas<'_> {
    type Error = cairo::Error;

    fn stroke_circle(
        &mut self,
        center: Point,
        radius: f64,
        width: f64,
        color: Color,
    ) -> Result<(), Self::Error> {
        if width <= 0.0 {
            return Ok(());
        }
        self.circle(center, radius, color);
        self.cr.set_line_width(width);
        self.cr.stroke()
    }

    fn fill_circle(&mut self, center: Point, radius: f64, color: Color) -> Result<(), Self::Error> {
        if radius <= 0.0 {
            return Ok(());
        }
        self.circle(center, radius, color);
        self.cr.fill()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use passindi::PasswordIndicator;
    use std::time::Duration;

    fn alpha_at(data: &[u8], stride: usize, x: usize, y: usize) -> u32 {
        let i = y * stride + x * 4;
        u32::from_ne_bytes([data[i], data[i + 1], data[i + 2], data[i + 3]]) >> 24
    }

    #[test]
    fn test_renders_filled_and_empty_slots() {
        let mut indicator = PasswordIndicator::default();
        indicator.advance();
        while indicator.is_animating() {
            indicator.tick(Duration::from_millis(16));
        }

        let mut surface = cairo::ImageSurface::create(cairo::Format::ARgb32, 56, 16).unwrap();
        {
            let cr = Context::new(&surface).unwrap();
            indicator.draw(&mut CairoCanvas::new(&cr)).unwrap();
        }
        surface.flush();

        let stride = surface.stride() as usize;
        let data = surface.data().unwrap();
        assert_eq!(alpha_at(&data, stride, 8, 8), 255);
        assert_eq!(alpha_at(&data, stride, 28, 8), 0);
    }
}
