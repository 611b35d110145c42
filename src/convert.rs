//! Single-image conversion into an INSP container.

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use inspforge_container::{Splicer, Template};
use tracing::{debug, warn};

use crate::config::OutputConfig;
use crate::validator::StereoscopicValidator;

/// What happened to one input image.
#[derive(Debug)]
pub enum FileOutcome {
    /// A container was written, and optionally a copy of the source image.
    Converted {
        container: PathBuf,
        copy: Option<PathBuf>,
    },
    /// The image did not pass the stereoscopic check.
    Skipped { reason: String },
    /// Reading, splicing or writing failed.
    Failed { error: anyhow::Error },
}

impl FileOutcome {
    pub fn is_converted(&self) -> bool {
        matches!(self, Self::Converted { .. })
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, Self::Failed { .. })
    }
}

impl fmt::Display for FileOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Converted { container, .. } => write!(f, "Created: {}", container.display()),
            Self::Skipped { reason } => write!(f, "Skipped: {}", reason),
            // {:#} renders the whole context chain on one line
            Self::Failed { error } => write!(f, "Failed: {:#}", error),
        }
    }
}

/// Converts images using one analysed template.
pub struct Converter<'a> {
    template: &'a Template,
    validator: &'a StereoscopicValidator,
    output: &'a OutputConfig,
}

impl<'a> Converter<'a> {
    pub fn new(
        template: &'a Template,
        validator: &'a StereoscopicValidator,
        output: &'a OutputConfig,
    ) -> Self {
        Self {
            template,
            validator,
            output,
        }
    }

    /// Create `output_dir`, validate `input` and, if accepted, write its
    /// container there.
    ///
    /// Never returns an error: failures are captured in [`FileOutcome::Failed`].
    pub fn process_file(&self, input: &Path, output_dir: &Path) -> FileOutcome {
        let name = display_name(input);

        if let Err(error) = fs::create_dir_all(output_dir) {
            let error = anyhow::Error::new(error).context(format!(
                "Failed to create output directory: {}",
                output_dir.display()
            ));
            warn!("Error processing {}: {:#}", name, error);
            return FileOutcome::Failed { error };
        }

        let validation = self.validator.validate_image(input);
        debug!("Validating {}: {}", name, validation);
        if !validation.accepted {
            return FileOutcome::Skipped {
                reason: validation.message,
            };
        }

        match self.convert(input, output_dir) {
            Ok((container, copy)) => FileOutcome::Converted { container, copy },
            Err(error) => {
                warn!("Error processing {}: {:#}", name, error);
                FileOutcome::Failed { error }
            }
        }
    }

    fn convert(&self, input: &Path, output_dir: &Path) -> Result<(PathBuf, Option<PathBuf>)> {
        let container_path = container_path(input, output_dir, &self.output.container_extension)?;

        let payload = fs::read(input)
            .with_context(|| format!("Failed to read image: {}", input.display()))?;
        Splicer::new(self.template)
            .write_to(&container_path, &payload)
            .with_context(|| format!("Failed to write container: {}", container_path.display()))?;

        let copy = if self.output.copy_original {
            copy_original(input, output_dir)?
        } else {
            None
        };

        Ok((container_path, copy))
    }
}

/// `<output_dir>/<input stem>.<extension>`
pub fn container_path(input: &Path, output_dir: &Path, extension: &str) -> Result<PathBuf> {
    let stem = input
        .file_stem()
        .ok_or_else(|| anyhow::anyhow!("Input has no file name: {}", input.display()))?;
    let mut file_name = stem.to_os_string();
    file_name.push(".");
    file_name.push(extension);
    Ok(output_dir.join(file_name))
}

/// Copy `input` into `output_dir` unless it already lives there.
fn copy_original(input: &Path, output_dir: &Path) -> Result<Option<PathBuf>> {
    let file_name = input
        .file_name()
        .ok_or_else(|| anyhow::anyhow!("Input has no file name: {}", input.display()))?;
    let destination = output_dir.join(file_name);

    if is_same_file(input, &destination) {
        debug!("Source already in output directory: {}", input.display());
        return Ok(None);
    }

    fs::copy(input, &destination).with_context(|| {
        format!(
            "Failed to copy {} to {}",
            input.display(),
            destination.display()
        )
    })?;
    Ok(Some(destination))
}

fn is_same_file(a: &Path, b: &Path) -> bool {
    match (a.canonicalize(), b.canonicalize()) {
        (Ok(a), Ok(b)) => a == b,
        _ => false,
    }
}

pub fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
