use crate::core::actions::generate_steps::ports::colour_ramp::ColourRamp;
use crate::core::actions::generate_steps::ports::curve_algorithm::CurveAlgorithm;
use crate::core::data::plane_point::PlanePoint;
use crate::core::data::step::{PenState, Step};

const DELTA_T: f64 = 0.1;
const ARCHIMEDES_COEFFICIENT: f64 = 2.0;
const LOGARITHMIC_COEFFICIENT: f64 = 2.0;
const LOGARITHMIC_EXPONENT_RATE: f64 = 0.1;
const HYPERBOLIC_NUMERATOR: f64 = 50.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ParametricKind {
    #[default]
    Archimedes,
    Logarithmic,
    Hyperbolic,
}

impl ParametricKind {
    pub const ALL: &'static [Self] = &[Self::Archimedes, Self::Logarithmic, Self::Hyperbolic];

    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Archimedes => "Archimedes",
            Self::Logarithmic => "Logarithmic",
            Self::Hyperbolic => "Hyperbolic",
        }
    }
}

impl std::fmt::Display for ParametricKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str((*self).display_name())
    }
}

/// Spirals sampled from a polar equation at `t = i · 0.1`, emitted as
/// absolute plane positions rather than relative turns:
/// `r = a·t` (Archimedes), `r = a·e^(b·t)` (logarithmic) or `r = a/t`
/// (hyperbolic).
///
/// The hyperbolic radius is undefined at `t = 0`; that single step is
/// skipped, so the emitted sequence is one step shorter than requested.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParametricSpiral {
    kind: ParametricKind,
    iterations: u32,
}

impl ParametricSpiral {
    #[must_use]
    pub fn new(kind: ParametricKind, iterations: u32) -> Self {
        Self { kind, iterations }
    }

    #[must_use]
    pub fn kind(&self) -> ParametricKind {
        self.kind
    }
}

impl CurveAlgorithm for ParametricSpiral {
    fn step_count(&self) -> usize {
        let requested = self.iterations as usize;

        if self.kind == ParametricKind::Hyperbolic && requested > 0 {
            requested - 1
        } else {
            requested
        }
    }

    fn steps<'a>(&'a self, ramp: &'a dyn ColourRamp) -> Box<dyn Iterator<Item = Step> + 'a> {
        let total = self.iterations as usize;

        Box::new((0..total).filter_map(move |i| {
            let t = i as f64 * DELTA_T;

            let radius = match self.kind {
                ParametricKind::Archimedes => ARCHIMEDES_COEFFICIENT * t,
                ParametricKind::Logarithmic => {
                    LOGARITHMIC_COEFFICIENT * (LOGARITHMIC_EXPONENT_RATE * t).exp()
                }
                ParametricKind::Hyperbolic => {
                    if i == 0 {
                        // radius is undefined at t = 0; skip the step
                        return None;
                    }
                    HYPERBOLIC_NUMERATOR / t
                }
            };

            Some(Step {
                position: PlanePoint::from_polar(radius, t),
                colour: ramp.colour_at(i, total),
                heading: None,
                pen: PenState::Down,
            })
        }))
    }
}
