//! Match/no-match routing

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Outcome of running detection on a single image.
///
/// Non-empty detection set routes to the match directory, empty set to
/// the unmatch directory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SortDecision {
    Match,
    NoMatch,
}

impl SortDecision {
    /// Derive the decision from the number of detected regions.
    pub fn from_match_count(count: usize) -> Self {
        if count > 0 {
            SortDecision::Match
        } else {
            SortDecision::NoMatch
        }
    }

    pub fn is_match(&self) -> bool {
        matches!(self, SortDecision::Match)
    }
}

/// Output directory layout: a root with one subdirectory per decision.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputLayout {
    pub root: PathBuf,
    pub match_dir_name: String,
    pub unmatch_dir_name: String,
}

impl Default for OutputLayout {
    fn default() -> Self {
        Self {
            root: "output".into(),
            match_dir_name: "match".to_string(),
            unmatch_dir_name: "unmatch".to_string(),
        }
    }
}

impl OutputLayout {
    /// Layout rooted at the given directory with the default subdirectory names.
    pub fn rooted_at<P: AsRef<Path>>(root: P) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
            ..Default::default()
        }
    }

    pub fn match_dir(&self) -> PathBuf {
        self.root.join(&self.match_dir_name)
    }

    pub fn unmatch_dir(&self) -> PathBuf {
        self.root.join(&self.unmatch_dir_name)
    }

    pub fn dir_for(&self, decision: SortDecision) -> PathBuf {
        match decision {
            SortDecision::Match => self.match_dir(),
            SortDecision::NoMatch => self.unmatch_dir(),
        }
    }

    /// Destination path for an input file: base name preserved, directory
    /// replaced by the decision's directory.
    pub fn destination_for(&self, decision: SortDecision, file_name: &str) -> PathBuf {
        self.dir_for(decision).join(file_name)
    }

    /// Create both output subdirectories.
    pub fn ensure_dirs(&self) -> Result<()> {
        for dir in [self.match_dir(), self.unmatch_dir()] {
            fs::create_dir_all(&dir)
                .with_context(|| format!("Failed to create output directory: {:?}", dir))?;
        }
        Ok(())
    }
}
