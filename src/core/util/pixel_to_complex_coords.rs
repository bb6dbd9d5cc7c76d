use crate::core::data::complex::Complex;
use crate::core::data::point::Point;
use crate::core::data::resolution::Resolution;
use crate::core::data::viewport::Viewport;

/// Width of the complex-plane window at scale 1.
const PLANE_SPAN: f64 = 4.0;

/// Maps a (possibly fractional, possibly off-canvas) pixel position to the
/// complex plane.
///
/// Both axes divide by the canvas *width*, so a non-square canvas shows a
/// non-square slice of the plane with square pixels.
#[must_use]
pub fn pixel_position_to_complex(
    px: f64,
    py: f64,
    viewport: &Viewport,
    resolution: Resolution,
) -> Complex {
    let width = f64::from(resolution.width());
    let height = f64::from(resolution.height());
    let denominator = viewport.scale() * width;
    let center = viewport.center();

    Complex {
        real: center.real + (px - width / 2.0) * PLANE_SPAN / denominator,
        imag: center.imag + (py - height / 2.0) * PLANE_SPAN / denominator,
    }
}

#[must_use]
pub fn pixel_to_complex_coords(
    pixel: Point,
    viewport: &Viewport,
    resolution: Resolution,
) -> Complex {
    pixel_position_to_complex(f64::from(pixel.x), f64::from(pixel.y), viewport, resolution)
}

/// Converts a pointer movement in pixels into the matching plane delta.
#[must_use]
pub fn pixel_delta_to_complex_delta(
    dpx: f64,
    dpy: f64,
    viewport: &Viewport,
    resolution: Resolution,
) -> Complex {
    let denominator = viewport.scale() * f64::from(resolution.width());

    Complex {
        real: dpx * PLANE_SPAN / denominator,
        imag: dpy * PLANE_SPAN / denominator,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn default_view() -> (Viewport, Resolution) {
        (
            Viewport::new(Complex::ZERO, 1.5),
            Resolution::new(800, 600).unwrap(),
        )
    }

    #[test]
    fn test_canvas_center_maps_to_viewport_center() {
        let (viewport, resolution) = default_view();

        let result = pixel_to_complex_coords(Point { x: 400, y: 300 }, &viewport, resolution);

        assert_eq!(result, Complex::ZERO);
    }

    #[test]
    fn test_top_left_uses_width_for_both_axes() {
        let (viewport, resolution) = default_view();

        let result = pixel_to_complex_coords(Point { x: 0, y: 0 }, &viewport, resolution);

        // -400 * 4 / 1200 and -300 * 4 / 1200
        assert!((result.real - (-4.0 / 3.0)).abs() < 1e-12);
        assert!((result.imag - (-1.0)).abs() < 1e-12);
    }

    #[test]
    fn test_mapping_is_offset_by_center() {
        let resolution = Resolution::new(100, 100).unwrap();
        let viewport = Viewport::new(Complex { real: -0.75, imag: 0.1 }, 2.0);

        let result = pixel_to_complex_coords(Point { x: 50, y: 50 }, &viewport, resolution);

        assert_eq!(result, Complex { real: -0.75, imag: 0.1 });
    }

    #[test]
    fn test_off_canvas_positions_extrapolate_linearly() {
        let (viewport, resolution) = default_view();

        let inside = pixel_position_to_complex(799.0, 300.0, &viewport, resolution);
        let outside = pixel_position_to_complex(1199.0, 300.0, &viewport, resolution);
        let step = pixel_delta_to_complex_delta(400.0, 0.0, &viewport, resolution);

        assert!((outside.real - inside.real - step.real).abs() < 1e-12);
    }

    #[test]
    fn test_delta_matches_drag_scenario() {
        let (viewport, resolution) = default_view();

        let delta = pixel_delta_to_complex_delta(80.0, 0.0, &viewport, resolution);

        assert!((delta.real - 0.266_666_666_7).abs() < 1e-6);
        assert_eq!(delta.imag, 0.0);
    }

    #[test]
    fn test_delta_shrinks_as_scale_grows() {
        let resolution = Resolution::new(800, 600).unwrap();
        let near = Viewport::new(Complex::ZERO, 3.0);
        let far = Viewport::new(Complex::ZERO, 1.5);

        let near_delta = pixel_delta_to_complex_delta(10.0, 10.0, &near, resolution);
        let far_delta = pixel_delta_to_complex_delta(10.0, 10.0, &far, resolution);

        assert!((far_delta.real - 2.0 * near_delta.real).abs() < 1e-12);
        assert!((far_delta.imag - 2.0 * near_delta.imag).abs() < 1e-12);
    }
}
