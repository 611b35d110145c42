//! Batch processing of an input file or directory.

use std::path::{Path, PathBuf};

use anyhow::Result;
use tracing::{info, warn};
use walkdir::WalkDir;

use crate::config::OutputConfig;
use crate::convert::{display_name, Converter, FileOutcome};

/// Outcome of one input file.
#[derive(Debug)]
pub struct FileReport {
    pub path: PathBuf,
    pub outcome: FileOutcome,
}

/// Per-file outcomes of a run, in processing order.
#[derive(Debug, Default)]
pub struct BatchReport {
    pub files: Vec<FileReport>,
}

impl BatchReport {
    pub fn converted(&self) -> usize {
        self.files
            .iter()
            .filter(|f| f.outcome.is_converted())
            .count()
    }

    pub fn skipped(&self) -> usize {
        self.files
            .iter()
            .filter(|f| matches!(f.outcome, FileOutcome::Skipped { .. }))
            .count()
    }

    pub fn failed(&self) -> usize {
        self.files.iter().filter(|f| f.outcome.is_failed()).count()
    }

    pub fn has_failures(&self) -> bool {
        self.failed() > 0
    }

    pub fn summary(&self) -> String {
        format!(
            "Processed {} file(s): {} converted, {} skipped, {} failed",
            self.files.len(),
            self.converted(),
            self.skipped(),
            self.failed()
        )
    }
}

/// Immediate files of `dir` whose extension is accepted by `output`.
///
/// Order is directory-enumeration order.
pub fn collect_inputs(dir: &Path, output: &OutputConfig) -> Vec<PathBuf> {
    WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .follow_links(true)
        .into_iter()
        .filter_map(|e| match e {
            Ok(entry) => Some(entry),
            Err(e) => {
                warn!("Failed to read directory entry in {:?}: {}", dir, e);
                None
            }
        })
        .filter(|entry| entry.file_type().is_file())
        .map(|entry| entry.into_path())
        .filter(|path| output.matches(path))
        .collect()
}

/// Convert every matching file of `dir`.
///
/// A failing file is recorded in the report and never stops its siblings.
pub fn process_directory(
    dir: &Path,
    output_dir: &Path,
    converter: &Converter<'_>,
    output: &OutputConfig,
) -> BatchReport {
    let inputs = collect_inputs(dir, output);
    info!("Found {} input file(s) in {:?}", inputs.len(), dir);

    let total = inputs.len();
    let mut report = BatchReport::default();
    for (i, path) in inputs.into_iter().enumerate() {
        info!("[{}/{}] {}", i + 1, total, display_name(&path));
        let outcome = converter.process_file(&path, output_dir);
        report.files.push(FileReport { path, outcome });
    }

    report
}

/// Process `input` as a single file or as a directory of files.
pub fn run(
    input: &Path,
    output_dir: &Path,
    converter: &Converter<'_>,
    output: &OutputConfig,
) -> Result<BatchReport> {
    if input.is_file() {
        let outcome = converter.process_file(input, output_dir);
        Ok(BatchReport {
            files: vec![FileReport {
                path: input.to_path_buf(),
                outcome,
            }],
        })
    } else if input.is_dir() {
        Ok(process_directory(input, output_dir, converter, output))
    } else {
        anyhow::bail!("{} is not a valid file or directory", input.display())
    }
}
