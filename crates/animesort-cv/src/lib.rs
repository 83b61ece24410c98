//! Animesort Computer Vision Library
//!
//! Cascade-classifier detection, annotation, and match/no-match sorting
//! built on OpenCV.

pub mod cascade;
pub mod detection;
pub mod error;
pub mod region;
pub mod sort;
pub mod utils;

// Re-export commonly used types
pub use cascade::{CascadeParams, FaceClassifier};
pub use detection::{AnnotationStyle, DetectionConfig, FaceDetector};
pub use error::SortError;
pub use region::{Region, RegionSet};
pub use sort::FaceSorter;

// Re-export opencv for downstream tests and callers
pub use opencv;

// Error handling
pub type Result<T, E = anyhow::Error> = std::result::Result<T, E>;

/// Core traits for the CV system
pub mod traits {
    use super::*;
    use opencv::core::Mat;

    /// Trait for pattern detectors that scan an image and report regions
    pub trait PatternDetector {
        fn detect(&self, image: &Mat) -> Result<RegionSet>;
        fn annotate(&self, image: &mut Mat, regions: &RegionSet) -> Result<()>;
    }
}
