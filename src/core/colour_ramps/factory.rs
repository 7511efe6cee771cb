use crate::core::actions::generate_steps::ports::colour_ramp::ColourRamp;
use crate::core::colour_ramps::kinds::ColourRampKinds;
use crate::core::colour_ramps::ramps::palette::PaletteRamp;
use crate::core::colour_ramps::ramps::rainbow::RainbowRamp;

#[must_use]
pub fn colour_ramp_factory(kind: ColourRampKinds) -> Box<dyn ColourRamp> {
    match kind {
        ColourRampKinds::Rainbow => Box::new(RainbowRamp),
        ColourRampKinds::ClassicPalette => Box::new(PaletteRamp::classic()),
    }
}
