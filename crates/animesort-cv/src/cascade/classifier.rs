//! Cascade classifier handle
//!
//! Loads a serialized cascade model once and answers detection queries
//! for the rest of the run. A missing or empty model file is a fatal
//! configuration error raised before any image is touched.

use super::CascadeParams;
use crate::error::SortError;
use crate::region::{Region, RegionSet};
use opencv::{
    core::{Mat, Rect, Size, Vector},
    objdetect::CascadeClassifier,
    prelude::*,
};
use std::path::Path;
use std::sync::{Mutex, PoisonError};

/// Loaded cascade model plus its detection parameters.
///
/// `detect_multi_scale` needs exclusive access to the underlying
/// classifier, so the handle guards it with a mutex and stays shareable
/// across threads.
pub struct FaceClassifier {
    inner: Mutex<CascadeClassifier>,
    params: CascadeParams,
}

impl FaceClassifier {
    /// Load a cascade model from a file path.
    ///
    /// Missing, empty, and unparseable files all signal the same fatal
    /// configuration error: no valid non-empty model.
    pub fn from_file<P: AsRef<Path>>(path: P, params: CascadeParams) -> Result<Self, SortError> {
        let path = path.as_ref();
        if !path.is_file() {
            return Err(SortError::MissingModel {
                path: path.to_path_buf(),
            });
        }

        let classifier =
            CascadeClassifier::new(&path.to_string_lossy()).map_err(|_| SortError::MissingModel {
                path: path.to_path_buf(),
            })?;
        if classifier.empty().unwrap_or(true) {
            return Err(SortError::MissingModel {
                path: path.to_path_buf(),
            });
        }

        Ok(Self {
            inner: Mutex::new(classifier),
            params,
        })
    }

    /// Run multi-scale detection on a grayscale image.
    pub fn detect(&self, gray: &Mat) -> Result<RegionSet, SortError> {
        let mut rects = Vector::<Rect>::new();
        let (min_w, min_h) = self.params.min_size;
        let (max_w, max_h) = self.params.max_size;

        let mut classifier = self
            .inner
            .lock()
            .unwrap_or_else(PoisonError::into_inner);

        classifier.detect_multi_scale(
            gray,
            &mut rects,
            self.params.scale_factor,
            self.params.min_neighbors,
            0,
            Size::new(min_w, min_h),
            Size::new(max_w, max_h),
        )?;

        Ok(rects.iter().map(Region::from_rect).collect())
    }
}
