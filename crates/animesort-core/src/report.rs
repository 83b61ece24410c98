//! Run reporting: per-file outcomes and aggregate statistics

use crate::decision::SortDecision;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// What happened to one input file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum FileOutcome {
    /// Decoded, detected, and written to the decision's directory.
    Sorted {
        decision: SortDecision,
        regions: usize,
    },
    /// Not processed; the file stays where it was.
    Skipped { reason: String },
}

/// Per-file report entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FileReport {
    pub file_name: String,
    pub destination: Option<PathBuf>,
    pub outcome: FileOutcome,
}

impl FileReport {
    pub fn sorted(
        file_name: String,
        destination: PathBuf,
        decision: SortDecision,
        regions: usize,
    ) -> Self {
        Self {
            file_name,
            destination: Some(destination),
            outcome: FileOutcome::Sorted { decision, regions },
        }
    }

    pub fn skipped(file_name: String, reason: String) -> Self {
        Self {
            file_name,
            destination: None,
            outcome: FileOutcome::Skipped { reason },
        }
    }
}

/// Aggregate statistics over a run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunStats {
    pub total_files: usize,
    pub matched: usize,
    pub unmatched: usize,
    pub skipped: usize,
    pub total_regions: usize,
    pub processing_time_ms: u64,
}

/// Full result of one sorting run.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RunReport {
    pub files: Vec<FileReport>,
    pub processing_time_ms: u64,
}

impl RunReport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, entry: FileReport) {
        self.files.push(entry);
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<FileReport> {
        self.files.iter()
    }

    /// Compute aggregate statistics.
    pub fn stats(&self) -> RunStats {
        let mut matched = 0;
        let mut unmatched = 0;
        let mut skipped = 0;
        let mut total_regions = 0;

        for entry in &self.files {
            match &entry.outcome {
                FileOutcome::Sorted { decision, regions } => {
                    total_regions += regions;
                    if decision.is_match() {
                        matched += 1;
                    } else {
                        unmatched += 1;
                    }
                }
                FileOutcome::Skipped { .. } => skipped += 1,
            }
        }

        RunStats {
            total_files: self.files.len(),
            matched,
            unmatched,
            skipped,
            total_regions,
            processing_time_ms: self.processing_time_ms,
        }
    }
}
