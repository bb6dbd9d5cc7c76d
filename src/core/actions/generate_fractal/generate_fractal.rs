use crate::core::actions::generate_fractal::ports::fractal_algorithm::FractalAlgorithm;

/// Evaluates the algorithm for every pixel of its canvas, row-major, on the calling thread.
pub fn generate_fractal<Alg: FractalAlgorithm>(algorithm: &Alg) -> Result<Vec<Alg::Success>, Alg::Failure>
{
    algorithm
        .resolution()
        .points()
        .map(|pixel| algorithm.compute(pixel))
        .collect()
}
