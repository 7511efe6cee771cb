#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CurveKinds {
    #[default]
    Linear,
    Geometric,
    Fibonacci,
    Multi,
    Parametric,
    Rose,
}

impl CurveKinds {
    pub const ALL: &'static [Self] = &[
        Self::Linear,
        Self::Geometric,
        Self::Fibonacci,
        Self::Multi,
        Self::Parametric,
        Self::Rose,
    ];

    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Linear => "Linear spiral",
            Self::Geometric => "Geometric spiral",
            Self::Fibonacci => "Fibonacci spiral",
            Self::Multi => "Multi-spiral",
            Self::Parametric => "Parametric spiral",
            Self::Rose => "Rose spiral",
        }
    }

    /// Stable kebab-case identifier used for catalog lookups.
    #[must_use]
    pub const fn identifier(self) -> &'static str {
        match self {
            Self::Linear => "linear-spiral",
            Self::Geometric => "geometric-spiral",
            Self::Fibonacci => "fibonacci-spiral",
            Self::Multi => "multi-spiral",
            Self::Parametric => "parametric-spiral",
            Self::Rose => "rose-spiral",
        }
    }

    #[must_use]
    pub fn from_identifier(identifier: &str) -> Option<Self> {
        Self::ALL
            .iter()
            .copied()
            .find(|kind| kind.identifier() == identifier)
    }
}

impl std::fmt::Display for CurveKinds {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str((*self).display_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_array_has_default_first() {
        assert_eq!(CurveKinds::ALL.first(), Some(&CurveKinds::default()));
    }

    #[test]
    fn identifiers_round_trip() {
        for &kind in CurveKinds::ALL {
            assert_eq!(CurveKinds::from_identifier(kind.identifier()), Some(kind));
        }
    }

    #[test]
    fn unknown_identifier_resolves_to_none() {
        assert_eq!(CurveKinds::from_identifier("koch-snowflake"), None);
        assert_eq!(CurveKinds::from_identifier(""), None);
    }

    #[test]
    fn display_names_are_unique() {
        let names: Vec<&str> = CurveKinds::ALL.iter().map(|k| k.display_name()).collect();
        for (i, name) in names.iter().enumerate() {
            for (j, other) in names.iter().enumerate() {
                if i != j {
                    assert_ne!(name, other, "Duplicate display name: {}", name);
                }
            }
        }
    }
}
