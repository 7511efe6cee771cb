use crate::core::actions::replay_steps::ports::drawing_sink::DrawingSink;
use crate::core::data::colour::Colour;
use crate::core::data::pixel_buffer::PixelBuffer;
use crate::core::data::pixel_rect::PixelRect;
use crate::core::data::plane_point::PlanePoint;
use crate::core::data::point::Point;

/// Rasterises drawing commands into a pixel buffer.
///
/// The plane origin sits at the centre of the raster with y pointing up;
/// segments that wander off-canvas are clipped pixel by pixel rather than
/// reported as errors. The cursor starts at the origin with heading 0,
/// the same idle state a freshly created drawing cursor has.
#[derive(Debug)]
pub struct RasterSink {
    buffer: PixelBuffer,
    cursor: PlanePoint,
    heading: f64,
}

impl RasterSink {
    #[must_use]
    pub fn new(pixel_rect: PixelRect) -> Self {
        Self {
            buffer: PixelBuffer::new(pixel_rect),
            cursor: PlanePoint::ORIGIN,
            heading: 0.0,
        }
    }

    #[must_use]
    pub fn buffer(&self) -> &PixelBuffer {
        &self.buffer
    }

    #[must_use]
    pub fn into_buffer(self) -> PixelBuffer {
        self.buffer
    }

    #[must_use]
    pub fn heading(&self) -> f64 {
        self.heading
    }

    fn to_pixel(&self, position: PlanePoint) -> Point {
        let rect = self.buffer.pixel_rect();

        Point {
            x: (f64::from(rect.width()) / 2.0 + position.x).round() as i32,
            y: (f64::from(rect.height()) / 2.0 - position.y).round() as i32,
        }
    }

    fn plot(&mut self, pixel: Point, colour: Colour) {
        // contains() guards the only failure set_pixel has
        if self.buffer.pixel_rect().contains(pixel) {
            let _ = self.buffer.set_pixel(pixel, colour);
        }
    }

    // Bresenham's line, integer arithmetic only
    fn draw_line(&mut self, from: Point, to: Point, colour: Colour) {
        let dx = (to.x - from.x).abs();
        let dy = -(to.y - from.y).abs();
        let sx = if from.x < to.x { 1 } else { -1 };
        let sy = if from.y < to.y { 1 } else { -1 };

        let mut err = dx + dy;
        let mut x = from.x;
        let mut y = from.y;

        loop {
            self.plot(Point { x, y }, colour);

            if x == to.x && y == to.y {
                break;
            }

            let doubled = 2 * err;
            if doubled >= dy {
                err += dy;
                x += sx;
            }
            if doubled <= dx {
                err += dx;
                y += sy;
            }
        }
    }
}

impl DrawingSink for RasterSink {
    fn move_to(&mut self, position: PlanePoint) {
        self.cursor = position;
    }

    fn line_to(&mut self, position: PlanePoint, colour: Colour) {
        let from = self.to_pixel(self.cursor);
        let to = self.to_pixel(position);

        self.draw_line(from, to, colour);
        self.cursor = position;
    }

    fn set_heading(&mut self, degrees: f64) {
        self.heading = degrees.rem_euclid(360.0);
    }
}
