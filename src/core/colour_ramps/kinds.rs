#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColourRampKinds {
    #[default]
    Rainbow,
    ClassicPalette,
}

impl ColourRampKinds {
    pub const ALL: &'static [Self] = &[Self::Rainbow, Self::ClassicPalette];

    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Rainbow => "Rainbow",
            Self::ClassicPalette => "Classic palette",
        }
    }
}

impl std::fmt::Display for ColourRampKinds {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str((*self).display_name())
    }
}
