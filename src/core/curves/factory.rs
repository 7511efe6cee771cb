use crate::core::actions::generate_steps::ports::curve_algorithm::CurveAlgorithm;
use crate::core::curves::curve_params::CurveParams;

#[must_use]
pub fn curve_algorithm_factory(params: CurveParams) -> Box<dyn CurveAlgorithm> {
    match params {
        CurveParams::Linear(spiral) => Box::new(spiral),
        CurveParams::Geometric(spiral) => Box::new(spiral),
        CurveParams::Fibonacci(spiral) => Box::new(spiral),
        CurveParams::Multi(spiral) => Box::new(spiral),
        CurveParams::Parametric(spiral) => Box::new(spiral),
        CurveParams::Rose(spiral) => Box::new(spiral),
    }
}
