//! Stereoscopic image gate.
//!
//! A side-by-side stereo pair is twice as wide as it is tall. Images are
//! accepted when their dimensions match a known camera resolution exactly, or
//! when their aspect ratio falls within a tolerance of the target ratio.

use std::fmt;
use std::path::Path;

use crate::config::{Resolution, ValidatorConfig};

/// Outcome of validating one image.
#[derive(Debug, Clone, PartialEq)]
pub struct Validation {
    pub accepted: bool,
    pub message: String,
}

impl Validation {
    fn accept(message: String) -> Self {
        Self {
            accepted: true,
            message,
        }
    }

    fn reject(message: String) -> Self {
        Self {
            accepted: false,
            message,
        }
    }
}

impl fmt::Display for Validation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

/// Decides whether images look like side-by-side stereoscopic pairs.
#[derive(Debug, Clone, Default)]
pub struct StereoscopicValidator {
    config: ValidatorConfig,
}

impl StereoscopicValidator {
    pub fn new(config: ValidatorConfig) -> Self {
        Self { config }
    }

    /// Validate the image at `path`.
    ///
    /// Only the image header is read. Any decode or I/O failure is reported
    /// as a rejection, never as an error.
    pub fn validate_image(&self, path: &Path) -> Validation {
        match image::image_dimensions(path) {
            Ok((width, height)) => self.check_dimensions(width, height),
            Err(e) => Validation::reject(format!("Error validating image: {}", e)),
        }
    }

    pub fn check_dimensions(&self, width: u32, height: u32) -> Validation {
        let resolution = Resolution::new(width, height);

        if self.config.known_resolutions.contains(&resolution) {
            return Validation::accept(format!("Valid stereoscopic dimensions: {}", resolution));
        }

        if height > 0 {
            let ratio = f64::from(width) / f64::from(height);
            if (ratio - self.config.target_aspect_ratio).abs() < self.config.aspect_tolerance {
                return Validation::accept(format!("Appears to be stereoscopic: {}", resolution));
            }
        }

        Validation::reject(format!(
            "Invalid dimensions for stereoscopic image: {}",
            resolution
        ))
    }
}
