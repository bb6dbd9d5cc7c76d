use std::{error::Error, fmt};

#[derive(Debug, PartialEq)]
pub enum MandelbrotError {
    ZeroMaxIterationsError,
}

impl fmt::Display for MandelbrotError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroMaxIterationsError => {
                write!(f, "Maximum iterations must be greater than zero")
            }
        }
    }
}

impl Error for MandelbrotError {}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MandelbrotColourMapError {
    IterationsExceedCap { iterations: u32, cap: u32 },
}

impl fmt::Display for MandelbrotColourMapError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::IterationsExceedCap { iterations, cap } => {
                write!(f, "iteration count {} exceeds cap {}", iterations, cap)
            }
        }
    }
}

impl Error for MandelbrotColourMapError {}
