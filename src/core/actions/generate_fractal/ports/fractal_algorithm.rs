use std::error::Error;
use crate::core::data::point::Point;
use crate::core::data::resolution::Resolution;

/// Per-pixel evaluation step of a frame render.
pub trait FractalAlgorithm {
    type Success;
    type Failure: Error;

    /// Canvas the algorithm was configured for; `compute` is defined for every point inside it.
    fn resolution(&self) -> Resolution;

    fn compute(&self, pixel: Point) -> Result<Self::Success, Self::Failure>;
}
