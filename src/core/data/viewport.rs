use crate::core::data::complex::Complex;

/// Smallest scale the viewport accepts. Anything below (including NaN) is clamped up to it.
pub const MIN_SCALE: f64 = 1e-9;

/// Pan/zoom state: the point of the complex plane at the canvas centre and
/// how far in the view is zoomed. Larger scale means more zoomed in.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Viewport {
    center: Complex,
    scale: f64,
}

fn clamp_scale(scale: f64) -> f64 {
    if scale.is_nan() || scale < MIN_SCALE {
        MIN_SCALE
    } else {
        scale.min(f64::MAX)
    }
}

impl Viewport {
    #[must_use]
    pub fn new(center: Complex, scale: f64) -> Self {
        Self {
            center,
            scale: clamp_scale(scale),
        }
    }

    #[must_use]
    pub fn center(&self) -> Complex {
        self.center
    }

    #[must_use]
    pub fn scale(&self) -> f64 {
        self.scale
    }

    pub fn set_scale(&mut self, scale: f64) {
        self.scale = clamp_scale(scale);
    }

    pub fn zoom_by(&mut self, factor: f64) {
        self.set_scale(self.scale * factor);
    }

    /// Moves the centre against the given plane delta, so dragging the
    /// image right moves the view left.
    pub fn pan_by(&mut self, delta: Complex) {
        self.center = self.center - delta;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_keeps_positive_scale() {
        let viewport = Viewport::new(Complex { real: -0.5, imag: 0.25 }, 1.5);

        assert_eq!(viewport.scale(), 1.5);
        assert_eq!(viewport.center(), Complex { real: -0.5, imag: 0.25 });
    }

    #[test]
    fn test_non_positive_scale_is_clamped_to_floor() {
        assert_eq!(Viewport::new(Complex::ZERO, 0.0).scale(), MIN_SCALE);
        assert_eq!(Viewport::new(Complex::ZERO, -3.0).scale(), MIN_SCALE);
        assert_eq!(Viewport::new(Complex::ZERO, f64::NAN).scale(), MIN_SCALE);
    }

    #[test]
    fn test_infinite_scale_is_clamped_to_max() {
        assert_eq!(Viewport::new(Complex::ZERO, f64::INFINITY).scale(), f64::MAX);
    }

    #[test]
    fn test_repeated_zoom_out_never_reaches_zero() {
        let mut viewport = Viewport::new(Complex::ZERO, 1.5);

        for _ in 0..5000 {
            viewport.zoom_by(1.0 / 1.5);
        }

        assert_eq!(viewport.scale(), MIN_SCALE);
    }

    #[test]
    fn test_pan_by_subtracts_delta() {
        let mut viewport = Viewport::new(Complex { real: 1.0, imag: 1.0 }, 1.5);

        viewport.pan_by(Complex { real: 0.25, imag: -0.5 });

        assert_eq!(viewport.center(), Complex { real: 0.75, imag: 1.5 });
    }
}
