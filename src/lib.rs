mod controllers;
mod core;
mod presenters;
mod storage;

pub use crate::controllers::ports::file_presenter::FilePresenterPort;
pub use crate::controllers::spiral::SpiralController;
pub use crate::core::actions::cancellation::{
    CANCEL_CHECK_INTERVAL_STEPS, CancelToken, Cancelled, NeverCancel,
};
pub use crate::core::actions::generate_steps::generate_steps::generate_steps;
pub use crate::core::actions::generate_steps::generate_steps_batch_rayon::generate_steps_batch_rayon;
pub use crate::core::actions::generate_steps::ports::colour_ramp::ColourRamp;
pub use crate::core::actions::generate_steps::ports::curve_algorithm::CurveAlgorithm;
pub use crate::core::actions::replay_steps::ports::drawing_sink::DrawingSink;
pub use crate::core::actions::replay_steps::replay_steps::{
    replay_steps, replay_steps_cancelable,
};
pub use crate::core::catalog::catalog::{
    build_params, build_params_by_name, list_families, random_curve, random_params,
};
pub use crate::core::catalog::errors::CatalogError;
pub use crate::core::catalog::overrides::ParamOverrides;
pub use crate::core::colour_ramps::errors::ColourRampError;
pub use crate::core::colour_ramps::factory::colour_ramp_factory;
pub use crate::core::colour_ramps::kinds::ColourRampKinds;
pub use crate::core::colour_ramps::ramps::palette::{CLASSIC_PALETTE, PaletteRamp};
pub use crate::core::colour_ramps::ramps::rainbow::RainbowRamp;
pub use crate::core::curves::curve_kinds::CurveKinds;
pub use crate::core::curves::curve_params::CurveParams;
pub use crate::core::curves::errors::CurveError;
pub use crate::core::curves::factory::curve_algorithm_factory;
pub use crate::core::curves::fibonacci::{FibonacciSpiral, fibonacci_sequence};
pub use crate::core::curves::geometric::GeometricSpiral;
pub use crate::core::curves::linear::{Growth, LinearSpiral};
pub use crate::core::curves::multi::MultiSpiral;
pub use crate::core::curves::parametric::{ParametricKind, ParametricSpiral};
pub use crate::core::curves::rose::RoseSpiral;
pub use crate::core::data::colour::{Colour, ColourError};
pub use crate::core::data::pixel_buffer::{PixelBuffer, PixelBufferError};
pub use crate::core::data::pixel_rect::{PixelRect, PixelRectError};
pub use crate::core::data::plane_point::PlanePoint;
pub use crate::core::data::point::Point;
pub use crate::core::data::step::{PenState, Step};
pub use crate::presenters::file::ppm::PpmFilePresenter;
pub use crate::presenters::raster::sink::RasterSink;
pub use crate::storage::write_ppm::write_ppm;
