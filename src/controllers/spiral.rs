use std::path::Path;
use std::time::Instant;

use crate::controllers::ports::file_presenter::FilePresenterPort;
use crate::core::actions::generate_steps::generate_steps::generate_steps;
use crate::core::actions::replay_steps::replay_steps::replay_steps;
use crate::core::catalog::catalog::random_curve;
use crate::core::colour_ramps::ramps::rainbow::RainbowRamp;
use crate::core::curves::factory::curve_algorithm_factory;
use crate::core::data::pixel_buffer::PixelBuffer;
use crate::core::data::pixel_rect::PixelRect;
use crate::presenters::raster::sink::RasterSink;

pub struct SpiralController<P: FilePresenterPort> {
    presenter: P,
    buffer: Option<PixelBuffer>,
}

impl<P: FilePresenterPort> SpiralController<P> {
    pub fn new(presenter: P) -> Self {
        Self {
            presenter,
            buffer: None,
        }
    }

    pub fn render(&mut self) -> Result<(), Box<dyn std::error::Error>> {
        let width: i32 = 800;
        let height: i32 = 600;

        let pixel_rect = PixelRect::new(width, height)?;
        let params = random_curve(&mut rand::rng())?;
        let algorithm = curve_algorithm_factory(params);

        println!("Rendering {}...", params.kind());
        println!("Image size: {}x{}", width, height);
        println!("Steps: {}", algorithm.step_count());

        let start = Instant::now();
        let steps = generate_steps(algorithm.as_ref(), &RainbowRamp);
        let duration = start.elapsed();

        println!("Duration:   {:?}", duration);

        let mut sink = RasterSink::new(pixel_rect);
        replay_steps(steps, &mut sink);
        self.buffer = Some(sink.into_buffer());

        Ok(())
    }

    pub fn write(&self, filepath: impl AsRef<Path>) -> std::io::Result<()> {
        if let Some(buffer) = &self.buffer {
            if let Some(parent) = filepath.as_ref().parent() {
                std::fs::create_dir_all(parent)?;
            }

            self.presenter.present(buffer, filepath)?;
        }

        Ok(())
    }
}
