//! Detection regions
//!
//! Axis-aligned rectangles reported by the classifier, plus the set
//! operations the sorting pipeline needs.

use opencv::core::{Point, Rect};
use serde::{Deserialize, Serialize};

/// A single detected region: position plus size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Region {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Region {
    pub fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Create from OpenCV Rect
    pub fn from_rect(rect: Rect) -> Self {
        Self::new(rect.x, rect.y, rect.width, rect.height)
    }

    /// Convert to OpenCV Rect
    pub fn to_rect(&self) -> Rect {
        Rect::new(self.x, self.y, self.width, self.height)
    }

    /// Calculate area of the region
    pub fn area(&self) -> f64 {
        self.width as f64 * self.height as f64
    }

    /// Calculate center point
    pub fn center(&self) -> Point {
        Point::new(self.x + self.width / 2, self.y + self.height / 2)
    }

    /// Calculate intersection over union (IoU) with another region
    pub fn iou(&self, other: &Region) -> f64 {
        let x1 = self.x.max(other.x);
        let y1 = self.y.max(other.y);
        let x2 = (self.x + self.width).min(other.x + other.width);
        let y2 = (self.y + self.height).min(other.y + other.height);

        if x2 <= x1 || y2 <= y1 {
            return 0.0;
        }

        let intersection = (x2 - x1) as f64 * (y2 - y1) as f64;
        let union = self.area() + other.area() - intersection;

        intersection / union
    }
}

/// Set of regions detected in one image. Empty set means no match.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RegionSet {
    regions: Vec<Region>,
}

impl RegionSet {
    /// Create new empty set
    pub fn new() -> Self {
        Self::default()
    }

    /// Create from vector of regions
    pub fn from_vec(regions: Vec<Region>) -> Self {
        Self { regions }
    }

    /// Add a region to the set
    pub fn push(&mut self, region: Region) {
        self.regions.push(region);
    }

    /// Get number of regions
    pub fn len(&self) -> usize {
        self.regions.len()
    }

    /// Check if empty
    pub fn is_empty(&self) -> bool {
        self.regions.is_empty()
    }

    /// Drop regions smaller than the given size
    pub fn filter_min_size(mut self, min_width: i32, min_height: i32) -> Self {
        self.regions
            .retain(|region| region.width >= min_width && region.height >= min_height);
        self
    }

    /// Convert to iterator
    pub fn iter(&self) -> std::slice::Iter<Region> {
        self.regions.iter()
    }
}

impl IntoIterator for RegionSet {
    type Item = Region;
    type IntoIter = std::vec::IntoIter<Region>;

    fn into_iter(self) -> Self::IntoIter {
        self.regions.into_iter()
    }
}

impl FromIterator<Region> for RegionSet {
    fn from_iter<T: IntoIterator<Item = Region>>(iter: T) -> Self {
        Self::from_vec(iter.into_iter().collect())
    }
}
