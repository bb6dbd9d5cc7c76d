use crate::controllers::ports::file_presenter::FilePresenterPort;
use crate::core::data::pixel_buffer::PixelBuffer;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Binary PPM (P6) writer. The pixel buffer is already packed RGB so the body
/// is written as-is.
pub struct PpmFilePresenter {}

impl FilePresenterPort for PpmFilePresenter {
    fn present(&self, buffer: &PixelBuffer, filepath: impl AsRef<Path>) -> std::io::Result<()> {
        let mut file = BufWriter::new(std::fs::File::create(filepath)?);
        write_ppm(buffer, &mut file)?;
        file.flush()
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

fn write_ppm(buffer: &PixelBuffer, out: &mut impl Write) -> std::io::Result<()> {
    let resolution = buffer.resolution();

    writeln!(out, "P6")?;
    writeln!(out, "{} {}", resolution.width(), resolution.height())?;
    writeln!(out, "255")?;
    out.write_all(buffer.buffer())
}
