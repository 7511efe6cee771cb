use rayon::prelude::*;

use crate::core::actions::generate_steps::generate_steps::generate_steps;
use crate::core::actions::generate_steps::ports::colour_ramp::ColourRamp;
use crate::core::actions::generate_steps::ports::curve_algorithm::CurveAlgorithm;
use crate::core::data::step::Step;

/// Generates several curves in parallel on rayon's work-stealing pool.
///
/// Output order matches input order, so the result is indistinguishable
/// from mapping [`generate_steps`] sequentially.
pub fn generate_steps_batch_rayon(
    algorithms: &[Box<dyn CurveAlgorithm>],
    ramp: &dyn ColourRamp,
) -> Vec<Vec<Step>> {
    algorithms
        .par_iter()
        .map(|algorithm| generate_steps(algorithm.as_ref(), ramp))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::catalog::catalog::build_params;
    use crate::core::catalog::overrides::ParamOverrides;
    use crate::core::colour_ramps::ramps::rainbow::RainbowRamp;
    use crate::core::curves::curve_kinds::CurveKinds;
    use crate::core::curves::factory::curve_algorithm_factory;

    fn default_algorithms() -> Vec<Box<dyn CurveAlgorithm>> {
        let overrides = ParamOverrides::default();

        CurveKinds::ALL
            .iter()
            .map(|&kind| curve_algorithm_factory(build_params(kind, &overrides).unwrap()))
            .collect()
    }

    #[test]
    fn test_batch_matches_sequential_generation() {
        let algorithms = default_algorithms();

        let sequential: Vec<Vec<Step>> = algorithms
            .iter()
            .map(|algorithm| generate_steps(algorithm.as_ref(), &RainbowRamp))
            .collect();
        let parallel = generate_steps_batch_rayon(&algorithms, &RainbowRamp);

        assert_eq!(parallel, sequential);
    }

    #[test]
    fn test_empty_batch_yields_empty_output() {
        let algorithms: Vec<Box<dyn CurveAlgorithm>> = vec![];

        let results = generate_steps_batch_rayon(&algorithms, &RainbowRamp);

        assert!(results.is_empty());
    }
}
