use crate::core::actions::generate_steps::ports::colour_ramp::ColourRamp;
use crate::core::actions::generate_steps::ports::curve_algorithm::CurveAlgorithm;
use crate::core::data::plane_point::PlanePoint;
use crate::core::data::step::{PenState, Step};
use std::f64::consts::PI;

// arc sub-steps advance by this many plane units each
const ARC_STEP_LENGTH: f64 = 2.0;
const QUARTER_TURN_DEGREES: f64 = 90.0;

/// Returns the first `terms` Fibonacci numbers with F[0] = F[1] = 1.
#[must_use]
pub fn fibonacci_sequence(terms: u32) -> Vec<u64> {
    let mut sequence: Vec<u64> = Vec::with_capacity(terms as usize);

    for k in 0..terms as usize {
        let value = if k < 2 {
            1
        } else {
            sequence[k - 1] + sequence[k - 2]
        };
        sequence.push(value);
    }

    sequence
}

fn arc_sub_steps(radius: u64) -> usize {
    let quarter_arc = 2.0 * PI * radius as f64 / 4.0;
    (quarter_arc / ARC_STEP_LENGTH) as usize
}

/// A spiral of quarter-circle arcs whose radii follow the Fibonacci
/// sequence. Each arc is approximated by short forward-and-turn steps;
/// radii too small to fit a single sub-step are skipped outright, turn
/// included, matching the behaviour of the hand-drawn original.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FibonacciSpiral {
    iterations: u32,
}

impl FibonacciSpiral {
    #[must_use]
    pub fn new(iterations: u32) -> Self {
        Self { iterations }
    }
}

impl CurveAlgorithm for FibonacciSpiral {
    fn step_count(&self) -> usize {
        fibonacci_sequence(self.iterations)
            .iter()
            .map(|&radius| arc_sub_steps(radius))
            .sum()
    }

    fn steps<'a>(&'a self, ramp: &'a dyn ColourRamp) -> Box<dyn Iterator<Item = Step> + 'a> {
        let sequence = fibonacci_sequence(self.iterations);
        let total = sequence.len();

        let mut steps = Vec::with_capacity(self.step_count());
        let mut position = PlanePoint::ORIGIN;
        let mut heading = 0.0_f64;

        for (k, &radius) in sequence.iter().enumerate() {
            let sub_steps = arc_sub_steps(radius);
            if sub_steps == 0 {
                continue;
            }

            let colour = ramp.colour_at(k, total);
            let quarter_arc = 2.0 * PI * radius as f64 / 4.0;
            let step_size = quarter_arc / sub_steps as f64;
            let step_angle = QUARTER_TURN_DEGREES / sub_steps as f64;

            for _ in 0..sub_steps {
                let angle = heading.to_radians();
                position = position.translate(step_size * angle.cos(), step_size * angle.sin());
                heading = (heading - step_angle).rem_euclid(360.0);

                steps.push(Step {
                    position,
                    colour,
                    heading: Some(heading),
                    pen: PenState::Down,
                });
            }
        }

        Box::new(steps.into_iter())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::colour_ramps::ramps::rainbow::RainbowRamp;

    #[test]
    fn test_fibonacci_recurrence() {
        let sequence = fibonacci_sequence(15);

        assert_eq!(sequence[0], 1);
        assert_eq!(sequence[1], 1);
        for k in 2..sequence.len() {
            assert_eq!(sequence[k], sequence[k - 1] + sequence[k - 2]);
        }
    }

    #[test]
    fn test_fibonacci_sequence_short_prefixes() {
        assert!(fibonacci_sequence(0).is_empty());
        assert_eq!(fibonacci_sequence(1), vec![1]);
        assert_eq!(fibonacci_sequence(2), vec![1, 1]);
        assert_eq!(fibonacci_sequence(6), vec![1, 1, 2, 3, 5, 8]);
    }

    #[test]
    fn test_unit_radius_arcs_are_skipped() {
        // a quarter arc of radius 1 is ~1.57 units, shorter than one
        // sub-step, so the two leading arcs contribute nothing
        let spiral = FibonacciSpiral::new(2);

        assert_eq!(spiral.step_count(), 0);
        assert_eq!(spiral.steps(&RainbowRamp).count(), 0);
    }

    #[test]
    fn test_step_count_matches_emitted_steps() {
        for iterations in [0, 1, 2, 5, 10, 15] {
            let spiral = FibonacciSpiral::new(iterations);

            assert_eq!(
                spiral.steps(&RainbowRamp).count(),
                spiral.step_count(),
                "iterations = {}",
                iterations
            );
        }
    }

    #[test]
    fn test_arc_sub_steps_share_one_colour() {
        let spiral = FibonacciSpiral::new(5);
        // radius 5 arc: quarter arc ~7.85, 3 sub-steps
        let steps: Vec<Step> = spiral.steps(&RainbowRamp).collect();
        let last_arc: Vec<&Step> = steps.iter().rev().take(3).collect();

        assert!(last_arc.windows(2).all(|w| w[0].colour == w[1].colour));
    }

    #[test]
    fn test_all_positions_are_finite() {
        let spiral = FibonacciSpiral::new(18);

        assert!(spiral.steps(&RainbowRamp).all(|s| s.position.is_finite()));
    }

    #[test]
    fn test_generation_is_restartable() {
        let spiral = FibonacciSpiral::new(12);

        let first: Vec<Step> = spiral.steps(&RainbowRamp).collect();
        let second: Vec<Step> = spiral.steps(&RainbowRamp).collect();

        assert_eq!(first, second);
    }
}
