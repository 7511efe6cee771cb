use crate::core::actions::generate_steps::ports::colour_ramp::ColourRamp;
use crate::core::actions::generate_steps::ports::curve_algorithm::CurveAlgorithm;
use crate::core::curves::errors::CurveError;
use crate::core::data::plane_point::PlanePoint;
use crate::core::data::step::{PenState, Step};

const LENGTH_INCREMENT: f64 = 0.5;
// the extra degree keeps each lap from closing back into the same polygon
const SPIRAL_DRIFT_DEGREES: f64 = 1.0;

/// A spiral built on a regular polygon: the turn angle is the polygon's
/// exterior angle plus a one-degree drift.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeometricSpiral {
    sides: u32,
    iterations: u32,
    initial_length: f64,
}

impl GeometricSpiral {
    pub fn new(sides: u32, iterations: u32, initial_length: f64) -> Result<Self, CurveError> {
        if sides < 3 {
            return Err(CurveError::TooFewSides { sides });
        }

        Ok(Self {
            sides,
            iterations,
            initial_length,
        })
    }

    fn turn_angle(&self) -> f64 {
        360.0 / f64::from(self.sides) + SPIRAL_DRIFT_DEGREES
    }
}

impl CurveAlgorithm for GeometricSpiral {
    fn step_count(&self) -> usize {
        self.iterations as usize
    }

    fn steps<'a>(&'a self, ramp: &'a dyn ColourRamp) -> Box<dyn Iterator<Item = Step> + 'a> {
        let total = self.step_count();
        let turn_angle = self.turn_angle();
        let start = (PlanePoint::ORIGIN, 0.0_f64, self.initial_length);

        Box::new((0..total).scan(start, move |state, i| {
            let (position, heading, length) = state;

            let angle = heading.to_radians();
            *position = position.translate(*length * angle.cos(), *length * angle.sin());
            *heading = (*heading - turn_angle).rem_euclid(360.0);
            *length += LENGTH_INCREMENT;

            Some(Step {
                position: *position,
                colour: ramp.colour_at(i, total),
                heading: Some(*heading),
                pen: PenState::Down,
            })
        }))
    }
}
