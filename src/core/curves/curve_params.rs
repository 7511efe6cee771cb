use crate::core::curves::curve_kinds::CurveKinds;
use crate::core::curves::fibonacci::FibonacciSpiral;
use crate::core::curves::geometric::GeometricSpiral;
use crate::core::curves::linear::LinearSpiral;
use crate::core::curves::multi::MultiSpiral;
use crate::core::curves::parametric::ParametricSpiral;
use crate::core::curves::rose::RoseSpiral;

/// A validated parameter bundle for one generation call. Construction
/// goes through each family's constructor (or the catalog), so a value of
/// this type is always generatable.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CurveParams {
    Linear(LinearSpiral),
    Geometric(GeometricSpiral),
    Fibonacci(FibonacciSpiral),
    Multi(MultiSpiral),
    Parametric(ParametricSpiral),
    Rose(RoseSpiral),
}

impl CurveParams {
    #[must_use]
    pub const fn kind(&self) -> CurveKinds {
        match self {
            Self::Linear(_) => CurveKinds::Linear,
            Self::Geometric(_) => CurveKinds::Geometric,
            Self::Fibonacci(_) => CurveKinds::Fibonacci,
            Self::Multi(_) => CurveKinds::Multi,
            Self::Parametric(_) => CurveKinds::Parametric,
            Self::Rose(_) => CurveKinds::Rose,
        }
    }
}
