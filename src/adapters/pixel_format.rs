//! Conversion from the renderer's packed RGB frames to the RGBA layout the
//! window surface expects.

use crate::core::data::pixel_buffer::{BYTES_PER_PIXEL, PixelBuffer, PixelBufferError};

const RGBA_BYTES_PER_PIXEL: usize = 4;

/// Expands `src` into `dst` with alpha forced to opaque. `dst` must hold
/// exactly one RGBA pixel per source pixel.
pub fn copy_pixel_buffer_to_rgba(src: &PixelBuffer, dst: &mut [u8]) -> Result<(), PixelBufferError> {
    let expected_size = src.resolution().pixel_count() * RGBA_BYTES_PER_PIXEL;

    if dst.len() != expected_size {
        return Err(PixelBufferError::BoundsMismatch {
            expected_size,
            buffer_size: dst.len(),
        });
    }

    for (rgb, rgba) in src
        .buffer()
        .chunks_exact(BYTES_PER_PIXEL)
        .zip(dst.chunks_exact_mut(RGBA_BYTES_PER_PIXEL))
    {
        rgba[..BYTES_PER_PIXEL].copy_from_slice(rgb);
        rgba[3] = u8::MAX;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::data::colour::Colour;
    use crate::core::data::point::Point;
    use crate::core::data::resolution::Resolution;

    #[test]
    fn test_copy_expands_each_pixel_with_opaque_alpha() {
        let mut src = PixelBuffer::new(Resolution::new(2, 1).unwrap());
        src.set_pixel(Point { x: 0, y: 0 }, Colour { r: 255, g: 0, b: 0 }).unwrap();
        src.set_pixel(Point { x: 1, y: 0 }, Colour { r: 10, g: 20, b: 30 }).unwrap();
        let mut dst = vec![7; 8];

        copy_pixel_buffer_to_rgba(&src, &mut dst).unwrap();

        assert_eq!(dst, vec![255, 0, 0, 255, 10, 20, 30, 255]);
    }

    #[test]
    fn test_copy_rejects_wrong_destination_size() {
        let src = PixelBuffer::new(Resolution::new(2, 2).unwrap());
        let mut dst = vec![0; 12];

        assert_eq!(
            copy_pixel_buffer_to_rgba(&src, &mut dst),
            Err(PixelBufferError::BoundsMismatch {
                expected_size: 16,
                buffer_size: 12,
            })
        );
    }
}
