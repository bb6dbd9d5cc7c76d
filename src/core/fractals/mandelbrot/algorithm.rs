use std::convert::Infallible;
use crate::core::data::complex::Complex;
use crate::core::data::point::Point;
use crate::core::data::resolution::Resolution;
use crate::core::data::viewport::Viewport;
use crate::core::actions::generate_fractal::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::fractals::mandelbrot::errors::MandelbrotError;
use crate::core::util::pixel_to_complex_coords::pixel_to_complex_coords;

const ESCAPE_RADIUS_SQUARED: f64 = 4.0;

/// Number of iterations of `z -> z² + c` survived before `|z|² > 4`, or `cap`
/// if the orbit never escapes.
///
/// A point that escapes within `cap` returns the same count for any larger cap.
#[must_use]
pub fn escape_iterations(c: Complex, cap: u32) -> u32 {
    let mut z = Complex::ZERO;

    for iteration in 0..cap {
        if z.magnitude_squared() > ESCAPE_RADIUS_SQUARED {
            return iteration;
        }
        z = z * z + c;
    }

    cap
}

#[derive(Debug, Clone, PartialEq)]
pub struct MandelbrotAlgorithm {
    viewport: Viewport,
    resolution: Resolution,
    max_iterations: u32,
}

impl FractalAlgorithm for MandelbrotAlgorithm {
    type Success = u32;
    type Failure = Infallible;

    fn resolution(&self) -> Resolution {
        self.resolution
    }

    fn compute(&self, pixel: Point) -> Result<Self::Success, Self::Failure> {
        let c = pixel_to_complex_coords(pixel, &self.viewport, self.resolution);

        Ok(escape_iterations(c, self.max_iterations))
    }
}

impl MandelbrotAlgorithm {
    pub fn new(viewport: Viewport, resolution: Resolution, max_iterations: u32) -> Result<Self, MandelbrotError> {
        if max_iterations == 0 {
            return Err(MandelbrotError::ZeroMaxIterationsError)
        }

        Ok(Self { viewport, resolution, max_iterations })
    }
}
