use serde::Deserialize;
use std::fmt;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub validator: ValidatorConfig,

    #[serde(default)]
    pub output: OutputConfig,
}

/// Acceptance thresholds for side-by-side stereoscopic images
#[derive(Debug, Clone, Deserialize)]
pub struct ValidatorConfig {
    /// Resolutions accepted without an aspect-ratio check
    #[serde(default = "default_known_resolutions")]
    pub known_resolutions: Vec<Resolution>,

    /// Expected width/height ratio of a side-by-side pair
    #[serde(default = "default_target_aspect_ratio")]
    pub target_aspect_ratio: f64,

    /// Maximum (exclusive) deviation from the target ratio
    #[serde(default = "default_aspect_tolerance")]
    pub aspect_tolerance: f64,
}

fn default_known_resolutions() -> Vec<Resolution> {
    vec![Resolution::new(4000, 2000), Resolution::new(3840, 1920)]
}

fn default_target_aspect_ratio() -> f64 {
    2.0
}

fn default_aspect_tolerance() -> f64 {
    0.1
}

impl Default for ValidatorConfig {
    fn default() -> Self {
        Self {
            known_resolutions: default_known_resolutions(),
            target_aspect_ratio: default_target_aspect_ratio(),
            aspect_tolerance: default_aspect_tolerance(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct Resolution {
    pub width: u32,
    pub height: u32,
}

impl Resolution {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

impl fmt::Display for Resolution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct OutputConfig {
    /// Input extensions picked up when scanning a directory (case-insensitive)
    #[serde(default = "default_extensions")]
    pub extensions: Vec<String>,

    /// Extension given to generated containers
    #[serde(default = "default_container_extension")]
    pub container_extension: String,

    /// Copy the source image next to the generated container
    #[serde(default = "default_copy_original")]
    pub copy_original: bool,
}

fn default_extensions() -> Vec<String> {
    vec!["jpg".to_string()]
}

fn default_container_extension() -> String {
    "insp".to_string()
}

fn default_copy_original() -> bool {
    true
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            extensions: default_extensions(),
            container_extension: default_container_extension(),
            copy_original: default_copy_original(),
        }
    }
}

impl OutputConfig {
    /// Check if a path carries one of the configured input extensions.
    pub fn matches(&self, path: &std::path::Path) -> bool {
        path.extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| self.extensions.iter().any(|e| e.eq_ignore_ascii_case(ext)))
            .unwrap_or(false)
    }
}
