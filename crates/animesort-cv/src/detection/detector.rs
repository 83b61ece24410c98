//! Cascade-backed face detector with rectangle annotation

use super::config::{AnnotationStyle, DetectionConfig};
use crate::cascade::FaceClassifier;
use crate::error::SortError;
use crate::region::RegionSet;
use crate::traits::PatternDetector;
use crate::utils::ImageUtils;
use crate::Result;
use opencv::{
    core::Mat,
    imgproc::{self, LINE_8},
};

/// Detector pairing a loaded classifier with an annotation style.
pub struct FaceDetector {
    classifier: FaceClassifier,
    annotation: AnnotationStyle,
}

impl FaceDetector {
    /// Create new detector, loading the cascade model from the configured path.
    pub fn new(config: &DetectionConfig) -> Result<Self, SortError> {
        let classifier =
            FaceClassifier::from_file(&config.cascade_path, config.cascade_params.clone())?;

        Ok(Self {
            classifier,
            annotation: config.annotation.clone(),
        })
    }

    /// Detect regions in a color image.
    pub fn detect_regions(&self, image: &Mat) -> Result<RegionSet> {
        let gray = ImageUtils::to_grayscale(image)?;
        Ok(self.classifier.detect(&gray)?)
    }

    /// Draw the configured outline around every region.
    pub fn annotate_regions(&self, image: &mut Mat, regions: &RegionSet) -> Result<()> {
        draw_regions(image, regions, &self.annotation)
    }
}

impl PatternDetector for FaceDetector {
    fn detect(&self, image: &Mat) -> Result<RegionSet> {
        self.detect_regions(image)
    }

    fn annotate(&self, image: &mut Mat, regions: &RegionSet) -> Result<()> {
        self.annotate_regions(image, regions)
    }
}

/// Draw a fixed-color, fixed-thickness rectangle outline at each region's bounds.
pub fn draw_regions(image: &mut Mat, regions: &RegionSet, style: &AnnotationStyle) -> Result<()> {
    for region in regions.iter() {
        imgproc::rectangle(
            image,
            region.to_rect(),
            style.bgr_scalar(),
            style.thickness,
            LINE_8,
            0,
        )?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::region::Region;
    use opencv::core::{Scalar, CV_8UC3};
    use opencv::prelude::*;

    #[test]
    fn test_draw_regions_modifies_buffer() -> Result<()> {
        let mut image =
            Mat::new_rows_cols_with_default(64, 64, CV_8UC3, Scalar::all(0.0))?;

        let mut regions = RegionSet::new();
        regions.push(Region::new(8, 8, 32, 32));

        draw_regions(&mut image, &regions, &AnnotationStyle::default())?;

        // Outline pixel should now carry the annotation color (BGR)
        let pixel: &opencv::core::Vec3b = image.at_2d(8, 8)?;
        assert_eq!(pixel[0], 255);
        assert_eq!(pixel[1], 0);
        assert_eq!(pixel[2], 255);
        Ok(())
    }

    #[test]
    fn test_draw_empty_set_is_noop() -> Result<()> {
        let mut image =
            Mat::new_rows_cols_with_default(16, 16, CV_8UC3, Scalar::all(0.0))?;
        draw_regions(&mut image, &RegionSet::new(), &AnnotationStyle::default())?;

        let pixel: &opencv::core::Vec3b = image.at_2d(0, 0)?;
        assert_eq!(pixel[0], 0);
        Ok(())
    }
}
