use std::error::Error;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ConfigError {
    ZeroMaxIterations,
    InvalidZoomFactor { zoom_factor: f64 },
    InvalidInitialScale { scale: f64 },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroMaxIterations => {
                write!(f, "maximum iterations must be greater than zero")
            }
            Self::InvalidZoomFactor { zoom_factor } => {
                write!(f, "zoom factor must be a finite number above 1, got {}", zoom_factor)
            }
            Self::InvalidInitialScale { scale } => {
                write!(f, "initial scale must be a finite positive number, got {}", scale)
            }
        }
    }
}

impl Error for ConfigError {}
