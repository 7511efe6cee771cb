/// A raster pixel coordinate. The origin is the top-left corner of the
/// buffer, y grows downward.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}
