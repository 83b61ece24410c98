//! Match/no-match sorting over a directory of images
//!
//! One linear pass: decode, detect, annotate matches, route to the
//! match or unmatch directory. Files that do not decode are recorded
//! as skipped and the pass continues; listing and write failures abort
//! the run.

use crate::detection::{DetectionConfig, FaceDetector};
use crate::error::SortError;
use crate::traits::PatternDetector;
use crate::utils::ImageUtils;
use crate::Result;
use animesort_core::{FileReport, OutputLayout, RunReport, SortDecision};
use anyhow::Context;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing::{debug, info, warn};

/// Sorts a directory of images into match/unmatch destinations.
///
/// Generic over the detector so tests can inject stubs; production use
/// pairs it with [`FaceDetector`].
pub struct FaceSorter<D = FaceDetector> {
    detector: D,
    output: OutputLayout,
}

impl FaceSorter<FaceDetector> {
    /// Build a sorter from configuration, loading the cascade model.
    ///
    /// Fails with [`SortError::MissingModel`] before any input file is
    /// touched when the model is absent or empty.
    pub fn new(config: DetectionConfig) -> Result<Self, SortError> {
        let detector = FaceDetector::new(&config)?;
        Ok(Self {
            detector,
            output: config.output,
        })
    }
}

impl<D: PatternDetector + Sync> FaceSorter<D> {
    /// Build a sorter around an existing detector.
    pub fn with_detector(detector: D, output: OutputLayout) -> Self {
        Self { detector, output }
    }

    /// Process every regular file directly inside `input_dir` (non-recursive).
    pub fn run<P: AsRef<Path>>(&self, input_dir: P) -> Result<RunReport, SortError> {
        let start = Instant::now();
        let input_dir = input_dir.as_ref();
        info!(input_dir = %input_dir.display(), "starting sort run");

        let files = list_files(input_dir)?;
        debug!(count = files.len(), "listed input files");

        self.output.ensure_dirs()?;

        let mut report = RunReport::new();

        #[cfg(feature = "parallel")]
        {
            use rayon::prelude::*;
            let entries: Result<Vec<_>, SortError> = files
                .par_iter()
                .map(|path| self.process_file(path))
                .collect();

            for entry in entries? {
                report.push(entry);
            }
        }

        #[cfg(not(feature = "parallel"))]
        {
            for path in &files {
                report.push(self.process_file(path)?);
            }
        }

        report.processing_time_ms = start.elapsed().as_millis() as u64;

        let stats = report.stats();
        info!(
            matched = stats.matched,
            unmatched = stats.unmatched,
            skipped = stats.skipped,
            elapsed_ms = report.processing_time_ms,
            "sort run complete"
        );

        Ok(report)
    }

    /// Decode, detect, annotate, and route a single file.
    fn process_file(&self, path: &Path) -> Result<FileReport, SortError> {
        debug!(file = %path.display(), "processing file");

        let file_name = match path.file_name().and_then(|name| name.to_str()) {
            Some(name) => name.to_string(),
            None => {
                warn!(file = %path.display(), "skipping file with unusable name");
                return Ok(FileReport::skipped(
                    path.display().to_string(),
                    "file name is not valid UTF-8".to_string(),
                ));
            }
        };

        let mut image = match ImageUtils::load_color(path) {
            Ok(mat) if ImageUtils::is_decodable(&mat) => mat,
            Ok(_) => {
                warn!(file = %file_name, "skipping undecodable file");
                return Ok(FileReport::skipped(
                    file_name,
                    "not a decodable image".to_string(),
                ));
            }
            Err(error) => {
                warn!(file = %file_name, %error, "skipping file that failed to decode");
                return Ok(FileReport::skipped(file_name, error.to_string()));
            }
        };

        let regions = self.detector.detect(&image)?;
        debug!(file = %file_name, regions = regions.len(), "detection complete");

        let decision = SortDecision::from_match_count(regions.len());
        let destination = self.output.destination_for(decision, &file_name);

        if decision.is_match() {
            self.detector.annotate(&mut image, &regions)?;
            ImageUtils::save_image(&image, &destination).map_err(|error| SortError::Io {
                path: destination.clone(),
                source: std::io::Error::other(error),
            })?;
        } else {
            // No annotation drawn; the output stays byte-identical to the input
            fs::copy(path, &destination).map_err(|source| SortError::Io {
                path: destination.clone(),
                source,
            })?;
        }

        Ok(FileReport::sorted(
            file_name,
            destination,
            decision,
            regions.len(),
        ))
    }

    /// Export the run report as pretty JSON.
    pub fn export_json(&self, report: &RunReport, output_path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(report).context("Failed to serialize run report")?;

        fs::write(output_path, json)
            .with_context(|| format!("Failed to write JSON to: {:?}", output_path))?;

        Ok(())
    }
}

/// List regular files directly inside a directory, sorted by name.
fn list_files(dir: &Path) -> Result<Vec<PathBuf>, SortError> {
    let entries = fs::read_dir(dir).map_err(|source| SortError::ListDir {
        path: dir.to_path_buf(),
        source,
    })?;

    let mut files = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|source| SortError::ListDir {
            path: dir.to_path_buf(),
            source,
        })?;

        let path = entry.path();
        if path.is_file() {
            files.push(path);
        }
    }

    // Name order keeps runs deterministic
    files.sort();
    Ok(files)
}
