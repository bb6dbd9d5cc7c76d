use std::f64::consts::PI;
use crate::core::actions::generate_pixel_buffer::ports::colour_map::ColourMap;
use crate::core::data::colour::Colour;
use crate::core::fractals::mandelbrot::errors::MandelbrotColourMapError;

const GREEN_PHASE: f64 = 2.0;
const BLUE_PHASE: f64 = 4.0;

fn channel(t: f64, phase: f64) -> u8 {
    (255.0 * (PI * t + phase).sin().abs()).floor() as u8
}

/// Sine-band palette: each channel is `|sin(πt + phase)|` with phases 0, 2 and 4
/// radians, `t = iterations / cap`. Points that reach the cap are black.
#[must_use]
pub fn colour_for(iterations: u32, cap: u32) -> Colour {
    if iterations == cap {
        return Colour::BLACK;
    }

    let t = f64::from(iterations) / f64::from(cap);

    Colour {
        r: channel(t, 0.0),
        g: channel(t, GREEN_PHASE),
        b: channel(t, BLUE_PHASE),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MandelbrotSineColourMap {
    cap: u32,
}

impl MandelbrotSineColourMap {
    #[must_use]
    pub fn new(cap: u32) -> Self {
        Self { cap }
    }
}

impl ColourMap for MandelbrotSineColourMap {
    type T = u32;
    type Failure = MandelbrotColourMapError;

    fn map(&self, iterations: u32) -> Result<Colour, Self::Failure> {
        if iterations > self.cap {
            return Err(MandelbrotColourMapError::IterationsExceedCap {
                iterations,
                cap: self.cap,
            });
        }

        Ok(colour_for(iterations, self.cap))
    }
}
