use crate::core::actions::generate_steps::ports::colour_ramp::ColourRamp;
use crate::core::actions::generate_steps::ports::curve_algorithm::CurveAlgorithm;
use crate::core::data::step::Step;

/// Eagerly collects a curve's step sequence.
///
/// Callers that want laziness can pull from `algorithm.steps(ramp)`
/// directly; this helper exists for consumers that replay the whole
/// drawing anyway and want a single allocation.
pub fn generate_steps<Alg>(algorithm: &Alg, ramp: &dyn ColourRamp) -> Vec<Step>
where
    Alg: CurveAlgorithm + ?Sized,
{
    let mut steps = Vec::with_capacity(algorithm.step_count());
    steps.extend(algorithm.steps(ramp));
    steps
}
