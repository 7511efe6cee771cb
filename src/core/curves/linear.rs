use crate::core::actions::generate_steps::ports::colour_ramp::ColourRamp;
use crate::core::actions::generate_steps::ports::curve_algorithm::CurveAlgorithm;
use crate::core::curves::errors::CurveError;
use crate::core::data::plane_point::PlanePoint;
use crate::core::data::step::{PenState, Step};

/// How the segment length evolves between steps.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Growth {
    /// Multiply the length each step. Must be greater than zero.
    Factor(f64),
    /// Add a fixed amount each step.
    Increment(f64),
}

impl Growth {
    fn apply(self, length: f64) -> f64 {
        match self {
            Self::Factor(factor) => length * factor,
            Self::Increment(increment) => length + increment,
        }
    }
}

/// The basic expanding spiral: turn by a fixed angle each step while the
/// segment length grows.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearSpiral {
    iterations: u32,
    initial_length: f64,
    growth: Growth,
    turn_angle: f64,
}

impl LinearSpiral {
    pub fn new(
        iterations: u32,
        initial_length: f64,
        growth: Growth,
        turn_angle: f64,
    ) -> Result<Self, CurveError> {
        if let Growth::Factor(factor) = growth {
            if factor <= 0.0 {
                return Err(CurveError::NonPositiveGrowthFactor { factor });
            }
        }

        Ok(Self {
            iterations,
            initial_length,
            growth,
            turn_angle: turn_angle.rem_euclid(360.0),
        })
    }
}

impl CurveAlgorithm for LinearSpiral {
    fn step_count(&self) -> usize {
        self.iterations as usize
    }

    fn steps<'a>(&'a self, ramp: &'a dyn ColourRamp) -> Box<dyn Iterator<Item = Step> + 'a> {
        let total = self.step_count();
        let start = (PlanePoint::ORIGIN, 0.0_f64, self.initial_length);

        Box::new((0..total).scan(start, move |state, i| {
            let (position, heading, length) = state;

            let angle = heading.to_radians();
            *position = position.translate(*length * angle.cos(), *length * angle.sin());
            // turning right is a clockwise rotation, so the heading decreases
            *heading = (*heading - self.turn_angle).rem_euclid(360.0);
            *length = self.growth.apply(*length);

            Some(Step {
                position: *position,
                colour: ramp.colour_at(i, total),
                heading: Some(*heading),
                pen: PenState::Down,
            })
        }))
    }
}
