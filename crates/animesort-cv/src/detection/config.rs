//! Detection configuration

use crate::cascade::CascadeParams;
use animesort_core::OutputLayout;
use opencv::core::Scalar;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Main detection configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DetectionConfig {
    pub cascade_path: PathBuf,
    pub cascade_params: CascadeParams,
    pub annotation: AnnotationStyle,
    pub output: OutputLayout,
}

/// Rectangle outline drawn around each detected region
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnnotationStyle {
    /// Outline color as RGB
    pub color: (u8, u8, u8),
    pub thickness: i32,
}

impl AnnotationStyle {
    /// Get OpenCV color scalar (BGR format)
    pub fn bgr_scalar(&self) -> Scalar {
        Scalar::new(
            self.color.2 as f64, // B
            self.color.1 as f64, // G
            self.color.0 as f64, // R
            255.0,
        )
    }
}

impl Default for AnnotationStyle {
    fn default() -> Self {
        Self {
            color: (255, 0, 255),
            thickness: 5,
        }
    }
}

impl Default for DetectionConfig {
    fn default() -> Self {
        Self {
            cascade_path: "assets/models/lbpcascade_animeface.xml".into(),
            cascade_params: CascadeParams::default(),
            annotation: AnnotationStyle::default(),
            output: OutputLayout::default(),
        }
    }
}
