use crate::core::actions::generate_pixel_buffer::ports::colour_map::ColourMap;
use crate::core::data::colour::Colour;
use crate::core::data::pixel_buffer::{BYTES_PER_PIXEL, PixelBuffer, PixelBufferError};
use std::error::Error;
use std::fmt;

#[derive(Debug, PartialEq)]
pub enum GeneratePixelBufferError<E> {
    ColourMap(E),
    PixelBuffer(PixelBufferError),
}

impl<E: fmt::Display> fmt::Display for GeneratePixelBufferError<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ColourMap(err) => write!(f, "colour map error: {}", err),
            Self::PixelBuffer(err) => write!(f, "pixel buffer error: {}", err),
        }
    }
}

impl<E: Error + 'static> Error for GeneratePixelBufferError<E> {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::ColourMap(err) => Some(err),
            Self::PixelBuffer(err) => Some(err),
        }
    }
}

impl<E> From<PixelBufferError> for GeneratePixelBufferError<E> {
    fn from(err: PixelBufferError) -> Self {
        Self::PixelBuffer(err)
    }
}

/// Colours `input` (one value per pixel, row-major) into `target`, overwriting
/// every pixel.
///
/// The input length must match the target's pixel count. On a colour map
/// failure the target is left partially written.
pub fn generate_pixel_buffer<CMap: ColourMap>(
    input: &[CMap::T],
    mapper: &CMap,
    target: &mut PixelBuffer,
) -> Result<(), GeneratePixelBufferError<CMap::Failure>>
where
    CMap::T: Copy,
{
    let expected_size = target.buffer_size();
    let input_size = input.len() * BYTES_PER_PIXEL;

    if input_size != expected_size {
        return Err(PixelBufferError::BoundsMismatch {
            expected_size,
            buffer_size: input_size,
        }
        .into());
    }

    for (&value, pixel) in input
        .iter()
        .zip(target.buffer_mut().chunks_exact_mut(BYTES_PER_PIXEL))
    {
        let Colour { r, g, b } = mapper
            .map(value)
            .map_err(GeneratePixelBufferError::ColourMap)?;

        pixel[0] = r;
        pixel[1] = g;
        pixel[2] = b;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::data::pixel_buffer::PixelBufferData;
    use crate::core::data::resolution::Resolution;

    #[derive(Debug, PartialEq)]
    struct StubColourMapError;

    impl fmt::Display for StubColourMapError {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "StubColourMapError")
        }
    }

    impl Error for StubColourMapError {}

    #[derive(Debug)]
    struct StubColourMap {
        fail_on: Option<u8>,
    }

    impl ColourMap for StubColourMap {
        type T = u8;
        type Failure = StubColourMapError;

        fn map(&self, value: u8) -> Result<Colour, Self::Failure> {
            if self.fail_on == Some(value) {
                return Err(StubColourMapError);
            }

            Ok(Colour {
                r: value,
                g: value,
                b: value,
            })
        }
    }

    #[test]
    fn test_generates_pixel_buffer_correctly() {
        let input: Vec<u8> = vec![1, 2, 3, 4, 5, 6];
        let mapper = StubColourMap { fail_on: None };
        let resolution = Resolution::new(3, 2).unwrap();
        let mut target = PixelBuffer::new(resolution);
        let expected: PixelBufferData =
            vec![1, 1, 1, 2, 2, 2, 3, 3, 3, 4, 4, 4, 5, 5, 5, 6, 6, 6];

        generate_pixel_buffer(&input, &mapper, &mut target).unwrap();

        assert_eq!(target.buffer(), &expected);
        assert_eq!(target.resolution(), resolution);
    }

    #[test]
    fn test_overwrites_previous_contents() {
        let resolution = Resolution::new(2, 1).unwrap();
        let mut target = PixelBuffer::from_data(resolution, vec![9; 6]).unwrap();

        generate_pixel_buffer(&[0u8, 7], &StubColourMap { fail_on: None }, &mut target).unwrap();

        assert_eq!(target.buffer(), &vec![0, 0, 0, 7, 7, 7]);
    }

    #[test]
    fn test_propagates_colour_map_failure() {
        let mapper = StubColourMap { fail_on: Some(4) };
        let mut target = PixelBuffer::new(Resolution::new(3, 2).unwrap());

        let result = generate_pixel_buffer(&[1u8, 2, 3, 4, 5, 6], &mapper, &mut target);

        assert_eq!(result, Err(GeneratePixelBufferError::ColourMap(StubColourMapError)));
    }

    #[test]
    fn test_input_size_mismatch_returns_err() {
        let mapper = StubColourMap { fail_on: None };
        let mut target = PixelBuffer::new(Resolution::new(2, 2).unwrap());

        let result = generate_pixel_buffer(&[1u8, 2, 3, 4, 5, 6], &mapper, &mut target);

        assert_eq!(
            result,
            Err(GeneratePixelBufferError::PixelBuffer(
                PixelBufferError::BoundsMismatch {
                    expected_size: 12,
                    buffer_size: 18
                }
            ))
        );
    }

    #[test]
    fn test_error_display() {
        let err: GeneratePixelBufferError<StubColourMapError> =
            GeneratePixelBufferError::ColourMap(StubColourMapError);

        assert_eq!(format!("{}", err), "colour map error: StubColourMapError");
    }
}
