fn main() -> Result<(), Box<dyn std::error::Error>> {
    let presenter = spiral_engine::PpmFilePresenter::new();
    let mut controller = spiral_engine::SpiralController::new(presenter);

    controller.render()?;
    controller.write("output/spiral.ppm")?;

    Ok(())
}
