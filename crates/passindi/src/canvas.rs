use crate::color::Color;
use crate::units::Point;

/// Drawing surface supplied by the host toolkit.
pub trait Canvas {
    type Error;

    fn stroke_circle(
        &mut self,
        center: Point,
        radius: f64,
        width: f64,
        color: Color,
    ) -> Result<(), Self::Error>;

    fn fill_circle(&mut self, center: Point, radius: f64, color: Color) -> Result<(), Self::Error>;
}
