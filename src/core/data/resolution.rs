use std::error::Error;
use std::fmt;
use crate::core::data::point::Point;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ResolutionError {
    InvalidSize { width: u32, height: u32 },
}

impl fmt::Display for ResolutionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidSize { width, height } => {
                write!(f, "resolution must be at least 1x1: {}x{}", width, height)
            }
        }
    }
}

impl Error for ResolutionError {}

/// Output size of the canvas in pixels. Fixed for the lifetime of a controller.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Resolution {
    width: u32,
    height: u32,
}

impl Resolution {
    pub fn new(width: u32, height: u32) -> Result<Self, ResolutionError> {
        if width == 0 || height == 0 {
            return Err(ResolutionError::InvalidSize { width, height });
        }

        Ok(Self { width, height })
    }

    #[must_use]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> u32 {
        self.height
    }

    #[must_use]
    pub fn pixel_count(&self) -> usize {
        self.width as usize * self.height as usize
    }

    #[must_use]
    pub fn contains_point(&self, point: Point) -> bool {
        point.x < self.width && point.y < self.height
    }

    /// Row-major iterator over every pixel, top row first.
    pub fn points(&self) -> impl Iterator<Item = Point> + use<> {
        let width = self.width;

        (0..self.height).flat_map(move |y| (0..width).map(move |x| Point { x, y }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolution_new_valid() {
        let resolution = Resolution::new(800, 600).unwrap();

        assert_eq!(resolution.width(), 800);
        assert_eq!(resolution.height(), 600);
        assert_eq!(resolution.pixel_count(), 480_000);
    }

    #[test]
    fn test_resolution_rejects_zero_dimensions() {
        assert_eq!(
            Resolution::new(0, 10),
            Err(ResolutionError::InvalidSize { width: 0, height: 10 })
        );
        assert_eq!(
            Resolution::new(10, 0),
            Err(ResolutionError::InvalidSize { width: 10, height: 0 })
        );
        assert!(Resolution::new(1, 1).is_ok());
    }

    #[test]
    fn test_resolution_contains_point() {
        let resolution = Resolution::new(4, 3).unwrap();

        assert!(resolution.contains_point(Point { x: 0, y: 0 }));
        assert!(resolution.contains_point(Point { x: 3, y: 2 }));
        assert!(!resolution.contains_point(Point { x: 4, y: 0 }));
        assert!(!resolution.contains_point(Point { x: 0, y: 3 }));
    }

    #[test]
    fn test_points_are_row_major() {
        let resolution = Resolution::new(3, 2).unwrap();
        let points: Vec<(u32, u32)> = resolution.points().map(|p| (p.x, p.y)).collect();

        assert_eq!(points, vec![(0, 0), (1, 0), (2, 0), (0, 1), (1, 1), (2, 1)]);
    }
}
