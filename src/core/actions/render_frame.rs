use std::error::Error;
use std::fmt;
use crate::core::actions::generate_fractal::generate_fractal::generate_fractal;
use crate::core::actions::generate_pixel_buffer::generate_pixel_buffer::{
    GeneratePixelBufferError, generate_pixel_buffer,
};
use crate::core::data::pixel_buffer::{PixelBuffer, PixelBufferError};
use crate::core::data::resolution::Resolution;
use crate::core::data::viewport::Viewport;
use crate::core::fractals::mandelbrot::algorithm::MandelbrotAlgorithm;
use crate::core::fractals::mandelbrot::colour_map::MandelbrotSineColourMap;
use crate::core::fractals::mandelbrot::errors::{MandelbrotColourMapError, MandelbrotError};

#[derive(Debug, PartialEq)]
pub enum RenderFrameError {
    Algorithm(MandelbrotError),
    ColourMap(MandelbrotColourMapError),
    PixelBuffer(PixelBufferError),
}

impl fmt::Display for RenderFrameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Algorithm(err) => write!(f, "algorithm error: {}", err),
            Self::ColourMap(err) => write!(f, "colour map error: {}", err),
            Self::PixelBuffer(err) => write!(f, "pixel buffer error: {}", err),
        }
    }
}

impl Error for RenderFrameError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Algorithm(err) => Some(err),
            Self::ColourMap(err) => Some(err),
            Self::PixelBuffer(err) => Some(err),
        }
    }
}

impl From<MandelbrotError> for RenderFrameError {
    fn from(err: MandelbrotError) -> Self {
        Self::Algorithm(err)
    }
}

impl From<GeneratePixelBufferError<MandelbrotColourMapError>> for RenderFrameError {
    fn from(err: GeneratePixelBufferError<MandelbrotColourMapError>) -> Self {
        match err {
            GeneratePixelBufferError::ColourMap(err) => Self::ColourMap(err),
            GeneratePixelBufferError::PixelBuffer(err) => Self::PixelBuffer(err),
        }
    }
}

/// Renders the whole canvas of `target` at iteration cap `cap`, overwriting
/// every pixel. Nothing is reused from earlier renders.
pub fn render_frame_into(
    viewport: &Viewport,
    cap: u32,
    target: &mut PixelBuffer,
) -> Result<(), RenderFrameError> {
    let algorithm = MandelbrotAlgorithm::new(*viewport, target.resolution(), cap)?;
    let Ok(iterations) = generate_fractal(&algorithm);
    let colour_map = MandelbrotSineColourMap::new(cap);

    generate_pixel_buffer(&iterations, &colour_map, target)?;

    Ok(())
}

/// Allocates a fresh buffer and renders into it.
pub fn render_frame(
    viewport: &Viewport,
    resolution: Resolution,
    cap: u32,
) -> Result<PixelBuffer, RenderFrameError> {
    let mut target = PixelBuffer::new(resolution);

    render_frame_into(viewport, cap, &mut target)?;

    Ok(target)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::data::colour::Colour;
    use crate::core::data::complex::Complex;
    use crate::core::data::point::Point;
    use crate::core::fractals::mandelbrot::algorithm::escape_iterations;
    use crate::core::fractals::mandelbrot::colour_map::colour_for;
    use crate::core::util::pixel_to_complex_coords::pixel_to_complex_coords;

    fn default_viewport() -> Viewport {
        Viewport::new(Complex::ZERO, 1.5)
    }

    #[test]
    fn test_center_pixel_is_black_at_full_detail() {
        let resolution = Resolution::new(80, 60).unwrap();

        let frame = render_frame(&default_viewport(), resolution, 100).unwrap();

        assert_eq!(frame.pixel(Point { x: 40, y: 30 }), Ok(Colour::BLACK));
    }

    #[test]
    fn test_every_pixel_matches_pure_pipeline() {
        let resolution = Resolution::new(16, 9).unwrap();
        let viewport = Viewport::new(Complex { real: -0.5, imag: 0.2 }, 2.0);
        let cap = 25;

        let frame = render_frame(&viewport, resolution, cap).unwrap();

        for point in resolution.points() {
            let c = pixel_to_complex_coords(point, &viewport, resolution);
            let expected = colour_for(escape_iterations(c, cap), cap);

            assert_eq!(frame.pixel(point), Ok(expected), "pixel {:?}", point);
        }
    }

    #[test]
    fn test_render_into_overwrites_previous_frame() {
        let resolution = Resolution::new(12, 8).unwrap();
        let viewport = default_viewport();
        let mut target = PixelBuffer::from_data(resolution, vec![77; 12 * 8 * 3]).unwrap();

        render_frame_into(&viewport, 40, &mut target).unwrap();

        assert_eq!(target, render_frame(&viewport, resolution, 40).unwrap());
    }

    #[test]
    fn test_zero_cap_is_rejected() {
        let resolution = Resolution::new(4, 4).unwrap();

        assert_eq!(
            render_frame(&default_viewport(), resolution, 0),
            Err(RenderFrameError::Algorithm(MandelbrotError::ZeroMaxIterationsError))
        );
    }

    #[test]
    fn test_cap_one_frame_is_all_black() {
        let resolution = Resolution::new(8, 8).unwrap();
        let zoomed_out = Viewport::new(Complex::ZERO, 0.1);

        let frame = render_frame(&zoomed_out, resolution, 1).unwrap();

        // with cap 1 only the first magnitude check runs, and z0 = 0 never escapes
        assert!(frame.buffer().iter().all(|&b| b == 0));
    }
}
