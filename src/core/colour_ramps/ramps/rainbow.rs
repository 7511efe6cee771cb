use crate::core::actions::generate_steps::ports::colour_ramp::ColourRamp;
use crate::core::data::colour::Colour;

/// Full-saturation hue rotation: progress through the step sequence maps
/// to a full traversal of the colour wheel.
#[derive(Debug, Clone, Copy, Default)]
pub struct RainbowRamp;

impl ColourRamp for RainbowRamp {
    fn colour_at(&self, step: usize, total_steps: usize) -> Colour {
        // A zero-length sequence has no progress to map; settle on hue 0
        // instead of dividing by zero.
        let hue = if total_steps == 0 {
            0.0
        } else {
            (step as f64 / total_steps as f64 * 360.0).rem_euclid(360.0)
        };

        hue_to_rgb(hue)
    }

    fn display_name(&self) -> &str {
        "Rainbow"
    }
}

// HSV sector conversion with S = 1, V = 1. hue must be in [0, 360).
fn hue_to_rgb(hue: f64) -> Colour {
    let x = 1.0 - ((hue / 60.0) % 2.0 - 1.0).abs();

    let (r, g, b) = if hue < 60.0 {
        (1.0, x, 0.0)
    } else if hue < 120.0 {
        (x, 1.0, 0.0)
    } else if hue < 180.0 {
        (0.0, 1.0, x)
    } else if hue < 240.0 {
        (0.0, x, 1.0)
    } else if hue < 300.0 {
        (x, 0.0, 1.0)
    } else {
        (1.0, 0.0, x)
    };

    Colour {
        r: (r * 255.0) as u8,
        g: (g * 255.0) as u8,
        b: (b * 255.0) as u8,
    }
}
