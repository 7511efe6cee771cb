use crate::core::data::colour::Colour;
use crate::core::data::plane_point::PlanePoint;

/// Pen position for a step: `Up` relocates the cursor, `Down` draws a
/// coloured segment from the previous position.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum PenState {
    Up,
    Down,
}

/// One emitted drawing instruction.
///
/// Steps are produced by a curve generator and consumed once by a drawing
/// sink; the generator never retains them. `heading` carries the cursor
/// orientation in degrees after the step for families that track one, and
/// is `None` for curves generated from absolute coordinates.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Step {
    pub position: PlanePoint,
    pub colour: Colour,
    pub heading: Option<f64>,
    pub pen: PenState,
}
