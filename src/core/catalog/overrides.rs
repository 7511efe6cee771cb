use crate::core::curves::parametric::ParametricKind;

/// Caller-supplied parameter overrides. Unset fields fall back to the
/// family defaults; fields a family does not use are ignored.
///
/// Counts are carried as `i64` so that out-of-range caller input (a
/// negative iteration count, say) is representable here and rejected
/// eagerly at build time instead of deep inside generation.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ParamOverrides {
    pub iterations: Option<i64>,
    pub initial_length: Option<f64>,
    pub growth_factor: Option<f64>,
    pub growth_increment: Option<f64>,
    pub turn_angle: Option<f64>,
    pub sides: Option<i64>,
    pub petals: Option<i64>,
    pub spirals: Option<i64>,
    pub parametric_kind: Option<ParametricKind>,
}
