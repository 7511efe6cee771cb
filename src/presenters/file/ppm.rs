use crate::controllers::ports::file_presenter::FilePresenterPort;
use crate::core::data::pixel_buffer::PixelBuffer;
use crate::storage::write_ppm::write_ppm;
use std::path::Path;

pub struct PpmFilePresenter {}

impl FilePresenterPort for PpmFilePresenter {
    fn present(&self, buffer: &PixelBuffer, filepath: impl AsRef<Path>) -> std::io::Result<()> {
        write_ppm(buffer, filepath)
    }
}

impl Default for PpmFilePresenter {
    fn default() -> Self {
        Self::new()
    }
}

impl PpmFilePresenter {
    pub fn new() -> Self {
        Self {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::data::pixel_rect::PixelRect;

    #[test]
    fn test_presents_ppm_header_and_payload() {
        let pixel_rect = PixelRect::new(4, 2).unwrap();
        let buffer = PixelBuffer::new(pixel_rect);
        let filepath = std::env::temp_dir().join("spiral_engine_presenter_test.ppm");

        let presenter = PpmFilePresenter::new();
        presenter.present(&buffer, &filepath).unwrap();

        let written = std::fs::read(&filepath).unwrap();
        let _ = std::fs::remove_file(&filepath);

        assert!(written.starts_with(b"P6\n4 2\n255\n"));
        assert_eq!(written.len(), b"P6\n4 2\n255\n".len() + 24); // 4*2*3 payload bytes
    }
}
