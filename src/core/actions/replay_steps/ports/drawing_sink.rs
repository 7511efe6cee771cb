use crate::core::data::colour::Colour;
use crate::core::data::plane_point::PlanePoint;

/// The boundary between the step generators and whatever renders them.
///
/// `move_to` relocates the cursor with the pen up, `line_to` draws a
/// coloured segment from the current cursor position, and `set_heading`
/// reorients the cursor in degrees.
pub trait DrawingSink {
    fn move_to(&mut self, position: PlanePoint);

    fn line_to(&mut self, position: PlanePoint, colour: Colour);

    fn set_heading(&mut self, degrees: f64);
}
