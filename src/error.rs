use thiserror::Error;

/// Errors produced while parsing colors or generating palettes.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// The text is not a color notation that can be parsed.
    #[error("invalid color: {0:?}")]
    InvalidColor(String),
    /// The name does not match any supported color space.
    #[error("unknown color space: {0:?}")]
    UnknownSpace(String),
    /// The name does not match any hue interpolation method.
    #[error("unknown hue interpolation method: {0:?}")]
    UnknownHueMethod(String),
    /// A palette needs a start and an end.
    #[error("at least 2 anchor colors are required, got {count}")]
    TooFewAnchors {
        /// Number of anchors that were given.
        count: usize,
    },
    /// A palette needs at least one step.
    #[error("the step count must be at least 1")]
    ZeroSteps,
}

/// Result type used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;
