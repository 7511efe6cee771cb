use crate::core::actions::generate_steps::ports::colour_ramp::ColourRamp;
use crate::core::actions::generate_steps::ports::curve_algorithm::CurveAlgorithm;
use crate::core::curves::errors::CurveError;
use crate::core::data::plane_point::PlanePoint;
use crate::core::data::step::{PenState, Step};

const AMPLITUDE: f64 = 100.0;

/// A rose curve, `r = amplitude · |sin(petals · t)|`, sampled one degree
/// of `t` per step and emitted as absolute plane positions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoseSpiral {
    petals: u32,
    iterations: u32,
}

impl RoseSpiral {
    pub fn new(petals: u32, iterations: u32) -> Result<Self, CurveError> {
        if petals == 0 {
            return Err(CurveError::NonPositivePetals { petals: 0 });
        }

        Ok(Self { petals, iterations })
    }
}

impl CurveAlgorithm for RoseSpiral {
    fn step_count(&self) -> usize {
        self.iterations as usize
    }

    fn steps<'a>(&'a self, ramp: &'a dyn ColourRamp) -> Box<dyn Iterator<Item = Step> + 'a> {
        let total = self.step_count();

        Box::new((0..total).map(move |i| {
            let t = (i as f64).to_radians();
            let radius = AMPLITUDE * (f64::from(self.petals) * t).sin().abs();

            Step {
                position: PlanePoint::from_polar(radius, t),
                colour: ramp.colour_at(i, total),
                heading: None,
                pen: PenState::Down,
            }
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::colour_ramps::ramps::rainbow::RainbowRamp;

    #[test]
    fn test_zero_petals_is_rejected() {
        assert_eq!(
            RoseSpiral::new(0, 720),
            Err(CurveError::NonPositivePetals { petals: 0 })
        );
    }

    #[test]
    fn test_radius_never_exceeds_amplitude() {
        let rose = RoseSpiral::new(7, 720).unwrap();

        for step in rose.steps(&RainbowRamp) {
            let radius = step.position.x.hypot(step.position.y);
            assert!(radius <= AMPLITUDE + 1e-9);
        }
    }

    #[test]
    fn test_starts_at_origin() {
        let rose = RoseSpiral::new(5, 10).unwrap();

        let first = rose.steps(&RainbowRamp).next().unwrap();

        assert!(first.position.x.abs() < 1e-9);
        assert!(first.position.y.abs() < 1e-9);
    }

    #[test]
    fn test_petal_tips_touch_amplitude() {
        // with 2 petals, sin(2t) peaks at t = 45 degrees, which is step 45
        let rose = RoseSpiral::new(2, 360).unwrap();
        let steps: Vec<Step> = rose.steps(&RainbowRamp).collect();
        let tip = steps[45].position;

        assert!((tip.x.hypot(tip.y) - AMPLITUDE).abs() < 1e-9);
    }

    #[test]
    fn test_zero_iterations_yield_empty_sequence() {
        let rose = RoseSpiral::new(7, 0).unwrap();

        assert_eq!(rose.steps(&RainbowRamp).count(), 0);
    }

    #[test]
    fn test_generation_is_restartable() {
        let rose = RoseSpiral::new(9, 360).unwrap();

        let first: Vec<Step> = rose.steps(&RainbowRamp).collect();
        let second: Vec<Step> = rose.steps(&RainbowRamp).collect();

        assert_eq!(first, second);
    }
}
