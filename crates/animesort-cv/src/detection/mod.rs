//! High-level detection module

pub mod config;
pub mod detector;

pub use config::{AnnotationStyle, DetectionConfig};
pub use detector::FaceDetector;
