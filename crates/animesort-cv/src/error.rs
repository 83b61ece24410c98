//! Error kinds for the sorting pipeline
//!
//! Two failure classes surface to callers: configuration errors (the
//! classifier model is missing or empty) and I/O errors (directory
//! listing or output writes). Detection internals propagate through
//! the `Detection` variant.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SortError {
    #[error("classifier model missing or empty: {path:?}")]
    MissingModel { path: PathBuf },

    #[error("failed to list input directory: {path:?}")]
    ListDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("i/o failure writing: {path:?}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    OpenCv(#[from] opencv::Error),

    #[error(transparent)]
    Detection(#[from] anyhow::Error),
}
