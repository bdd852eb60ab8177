//! Error types for carousel setup.

use thiserror::Error;

/// Errors reported while configuring or attaching a carousel.
///
/// Navigation and layout problems are never errors: out-of-range requests
/// are no-ops and degenerate layouts produce best-effort results.
#[derive(Error, Debug)]
pub enum CarouselError {
    /// No slide list was found, or it had no slides.
    #[error("Slide list missing or empty")]
    MissingSlideList,

    /// A configuration value is out of range.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// The configuration document could not be parsed.
    #[cfg(feature = "toml")]
    #[error("Configuration parse error: {0}")]
    Toml(#[from] toml::de::Error),
}

pub type Result<T> = std::result::Result<T, CarouselError>;
