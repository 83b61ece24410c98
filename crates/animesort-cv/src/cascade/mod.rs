//! Cascade classifier module

pub mod classifier;

pub use classifier::FaceClassifier;

use serde::{Deserialize, Serialize};

/// Parameters for `detect_multi_scale`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CascadeParams {
    /// Image pyramid scale step (must be > 1.0)
    pub scale_factor: f64,
    /// Neighboring candidates required to keep a detection
    pub min_neighbors: i32,
    /// Smallest accepted region (width, height); (0, 0) means unbounded
    pub min_size: (i32, i32),
    /// Largest accepted region (width, height); (0, 0) means unbounded
    pub max_size: (i32, i32),
}

impl Default for CascadeParams {
    fn default() -> Self {
        Self {
            scale_factor: 1.1,
            min_neighbors: 3,
            min_size: (0, 0),
            max_size: (0, 0),
        }
    }
}

impl CascadeParams {
    /// Parameters biased against false positives
    pub fn strict() -> Self {
        Self {
            min_neighbors: 5,
            min_size: (24, 24),
            ..Default::default()
        }
    }

    /// Parameters biased towards recall (finer pyramid, fewer neighbors)
    pub fn sensitive() -> Self {
        Self {
            scale_factor: 1.05,
            min_neighbors: 2,
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_params() {
        let params = CascadeParams::default();
        assert!(params.scale_factor > 1.0);
        assert_eq!(params.min_neighbors, 3);
    }

    #[test]
    fn test_presets() {
        assert!(CascadeParams::strict().min_neighbors > CascadeParams::default().min_neighbors);
        assert!(CascadeParams::sensitive().scale_factor < CascadeParams::default().scale_factor);
    }
}
