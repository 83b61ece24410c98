//! Image codec utilities built on OpenCV imgcodecs

use crate::Result;
use anyhow::{bail, Context};
use opencv::{
    core::{Mat, Vector},
    imgcodecs::{self, IMREAD_COLOR},
    imgproc,
    prelude::*,
};
use std::path::Path;

/// Image utility functions wrapping imgcodecs and imgproc
pub struct ImageUtils;

impl ImageUtils {
    /// Decode an image file as a color Mat (BGR).
    ///
    /// Undecodable input yields an empty Mat rather than an error; callers
    /// decide how to treat that buffer.
    pub fn load_color<P: AsRef<Path>>(path: P) -> Result<Mat> {
        let path_str = path.as_ref().to_string_lossy();

        imgcodecs::imread(&path_str, IMREAD_COLOR)
            .with_context(|| format!("Failed to load color image: {}", path_str))
    }

    /// Convert a color Mat (BGR) to grayscale
    pub fn to_grayscale(image: &Mat) -> Result<Mat> {
        let mut gray = Mat::default();
        imgproc::cvt_color(image, &mut gray, imgproc::COLOR_BGR2GRAY, 0)
            .context("Failed to convert image to grayscale")?;
        Ok(gray)
    }

    /// Encode a Mat to the path implied by its extension
    pub fn save_image<P: AsRef<Path>>(mat: &Mat, path: P) -> Result<()> {
        let path_str = path.as_ref().to_string_lossy();

        let written = imgcodecs::imwrite(&path_str, mat, &Vector::new())
            .with_context(|| format!("Failed to save image: {}", path_str))?;
        if !written {
            bail!("Encoder refused to write image: {}", path_str);
        }

        Ok(())
    }

    /// Whether a decoded buffer is usable for detection
    pub fn is_decodable(mat: &Mat) -> bool {
        !mat.empty()
    }
}
