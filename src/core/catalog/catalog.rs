use rand::Rng;

use crate::core::catalog::errors::CatalogError;
use crate::core::catalog::overrides::ParamOverrides;
use crate::core::curves::curve_kinds::CurveKinds;
use crate::core::curves::curve_params::CurveParams;
use crate::core::curves::errors::CurveError;
use crate::core::curves::fibonacci::FibonacciSpiral;
use crate::core::curves::geometric::GeometricSpiral;
use crate::core::curves::linear::{Growth, LinearSpiral};
use crate::core::curves::multi::MultiSpiral;
use crate::core::curves::parametric::{ParametricKind, ParametricSpiral};
use crate::core::curves::rose::RoseSpiral;

/// Ordered list of the curve families the catalog can build.
#[must_use]
pub fn list_families() -> &'static [CurveKinds] {
    CurveKinds::ALL
}

fn count(field: &'static str, value: i64) -> Result<u32, CurveError> {
    u32::try_from(value).map_err(|_| CurveError::CountOutOfRange { field, value })
}

/// Builds validated parameters for a family from its defaults plus any
/// caller overrides. Violations surface here, before generation starts.
pub fn build_params(
    kind: CurveKinds,
    overrides: &ParamOverrides,
) -> Result<CurveParams, CatalogError> {
    let params = match kind {
        CurveKinds::Linear => {
            let iterations = count("iterations", overrides.iterations.unwrap_or(100))?;
            let initial_length = overrides.initial_length.unwrap_or(3.0);
            // an explicit increment takes precedence over the factor
            let growth = match (overrides.growth_increment, overrides.growth_factor) {
                (Some(increment), _) => Growth::Increment(increment),
                (None, Some(factor)) => Growth::Factor(factor),
                (None, None) => Growth::Factor(1.05),
            };
            let turn_angle = overrides.turn_angle.unwrap_or(91.0);

            CurveParams::Linear(LinearSpiral::new(
                iterations,
                initial_length,
                growth,
                turn_angle,
            )?)
        }
        CurveKinds::Geometric => {
            let sides = count("sides", overrides.sides.unwrap_or(6))?;
            let iterations = count("iterations", overrides.iterations.unwrap_or(360))?;
            let initial_length = overrides.initial_length.unwrap_or(1.0);

            CurveParams::Geometric(GeometricSpiral::new(sides, iterations, initial_length)?)
        }
        CurveKinds::Fibonacci => {
            let iterations = count("iterations", overrides.iterations.unwrap_or(15))?;

            CurveParams::Fibonacci(FibonacciSpiral::new(iterations))
        }
        CurveKinds::Multi => {
            let spirals = count("spirals", overrides.spirals.unwrap_or(6))?;
            let iterations = count("iterations", overrides.iterations.unwrap_or(100))?;

            CurveParams::Multi(MultiSpiral::new(spirals, iterations))
        }
        CurveKinds::Parametric => {
            let parametric_kind = overrides.parametric_kind.unwrap_or_default();
            let iterations = count("iterations", overrides.iterations.unwrap_or(500))?;

            CurveParams::Parametric(ParametricSpiral::new(parametric_kind, iterations))
        }
        CurveKinds::Rose => {
            let petals = overrides.petals.unwrap_or(7);
            if petals <= 0 {
                return Err(CurveError::NonPositivePetals { petals }.into());
            }
            let petals = count("petals", petals)?;
            let iterations = count("iterations", overrides.iterations.unwrap_or(720))?;

            CurveParams::Rose(RoseSpiral::new(petals, iterations)?)
        }
    };

    Ok(params)
}

/// Resolves a family identifier, then builds its parameters.
pub fn build_params_by_name(
    name: &str,
    overrides: &ParamOverrides,
) -> Result<CurveParams, CatalogError> {
    let kind = CurveKinds::from_identifier(name).ok_or_else(|| CatalogError::UnknownFamily {
        name: name.to_string(),
    })?;

    build_params(kind, overrides)
}

/// Draws parameters for a family from its documented random ranges.
///
/// Randomness comes solely from the caller's generator; the built
/// `CurveParams` value is as deterministic to generate from as any other.
pub fn random_params<R: Rng>(
    kind: CurveKinds,
    rng: &mut R,
) -> Result<CurveParams, CatalogError> {
    let overrides = match kind {
        CurveKinds::Linear => ParamOverrides {
            iterations: Some(rng.random_range(50..=150)),
            initial_length: Some(rng.random_range(1..=5_i32) as f64),
            growth_factor: Some(rng.random_range(1.02..=1.08)),
            turn_angle: Some(rng.random_range(85..=95_i32) as f64),
            ..ParamOverrides::default()
        },
        CurveKinds::Geometric => ParamOverrides {
            sides: Some(rng.random_range(3..=12)),
            iterations: Some(rng.random_range(200..=400)),
            ..ParamOverrides::default()
        },
        CurveKinds::Fibonacci => ParamOverrides {
            iterations: Some(rng.random_range(10..=18)),
            ..ParamOverrides::default()
        },
        CurveKinds::Multi => ParamOverrides {
            spirals: Some(rng.random_range(3..=8)),
            iterations: Some(rng.random_range(50..=100)),
            ..ParamOverrides::default()
        },
        CurveKinds::Parametric => ParamOverrides {
            parametric_kind: Some(ParametricKind::ALL[rng.random_range(0..ParametricKind::ALL.len())]),
            iterations: Some(rng.random_range(300..=600)),
            ..ParamOverrides::default()
        },
        CurveKinds::Rose => ParamOverrides {
            petals: Some(rng.random_range(3..=12)),
            iterations: Some(rng.random_range(360..=1080)),
            ..ParamOverrides::default()
        },
    };

    build_params(kind, &overrides)
}

/// Picks a family uniformly at random, then draws its parameters.
pub fn random_curve<R: Rng>(rng: &mut R) -> Result<CurveParams, CatalogError> {
    let kind = CurveKinds::ALL[rng.random_range(0..CurveKinds::ALL.len())];

    random_params(kind, rng)
}
