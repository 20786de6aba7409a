use thiserror::Error;

/// Invalid construction or configuration input.
///
/// Every failure in this crate is raised up front, when a grid, ramp, engine
/// or controller is built. Per-sample numeric edge cases are handled in place
/// and never surface here.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigurationError {
    #[error("noise grid must be at least 2x2, got {width}x{height}")]
    GridTooSmall { width: usize, height: usize },
    #[error("max iterations must be positive, got {0}")]
    InvalidMaxIterations(u32),
    #[error("color ramp needs at least one color")]
    EmptyRamp,
    #[error("color ramp holds at most {capacity} colors, got {len}")]
    RampOverCapacity { len: usize, capacity: usize },
    #[error("contrast must be finite and positive, got {0}")]
    InvalidContrast(f64),
    #[error("zoom must be finite and positive, got {0}")]
    InvalidZoom(f64),
    #[error("zoom factor must lie strictly between 0 and 1, got {0}")]
    InvalidZoomFactor(f64),
    #[error("star needs at least 2 points, got {0}")]
    InvalidStarPoints(u32),
    #[error("flat RGBA color data length {0} is not a multiple of 4")]
    ColorDataLength(usize),
}

pub type Result<T> = std::result::Result<T, ConfigurationError>;
