//! Axis-aligned rectangle
//!
//! Doubles as the bounding-box representation for every other shape.

use super::{check_boundary_coord, Shape};
use crate::error::ScatterError;
use crate::point::Point;
use serde::{Deserialize, Serialize};

/// Rectangle defined by center and per-axis half-widths
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rectangle {
    origin: Point,
    /// Half the extent along x
    pub half_width: f64,
    /// Half the extent along y
    pub half_height: f64,
}

impl Rectangle {
    /// Create a rectangle centered at `origin`
    pub fn new(origin: Point, half_width: f64, half_height: f64) -> Self {
        Self {
            origin,
            half_width,
            half_height,
        }
    }

    /// Create a rectangle spanning two opposite corners
    pub fn from_corners(bottom_left: Point, top_right: Point) -> Self {
        Self {
            origin: (bottom_left + top_right) * 0.5,
            half_width: (top_right.x - bottom_left.x).abs() * 0.5,
            half_height: (top_right.y - bottom_left.y).abs() * 0.5,
        }
    }

    /// The four corners, counterclockwise from bottom-left
    pub fn corners(&self) -> [Point; 4] {
        let o = self.origin;
        let (w, h) = (self.half_width, self.half_height);
        [
            Point::new(o.x - w, o.y - h),
            Point::new(o.x + w, o.y - h),
            Point::new(o.x + w, o.y + h),
            Point::new(o.x - w, o.y + h),
        ]
    }
}

impl Shape for Rectangle {
    fn origin(&self) -> Point {
        self.origin
    }

    fn contains(&self, point: &Point) -> bool {
        (point.x - self.origin.x).abs() < self.half_width
            && (point.y - self.origin.y).abs() < self.half_height
    }

    fn bounding_box(&self) -> Result<Rectangle, ScatterError> {
        Ok(*self)
    }

    fn boundary_point(&self, t: f64) -> Result<Point, ScatterError> {
        check_boundary_coord(t)?;
        let corners = self.corners();
        // Four perimeter segments, a quarter of the parameter range each
        let s = 4.0 * t;
        let segment = (s.floor() as usize).min(3);
        let frac = s - segment as f64;
        let from = corners[segment];
        let to = corners[(segment + 1) % 4];
        Ok(from + (to - from) * frac)
    }

    fn congruent(&self, other: &Self) -> bool {
        // Orientation-sensitive: no rotation allowed
        self.half_width == other.half_width && self.half_height == other.half_height
    }

    fn translated(&self, offset: Point) -> Self {
        Self::new(self.origin + offset, self.half_width, self.half_height)
    }

    fn volume(&self) -> f64 {
        4.0 * self.half_width * self.half_height
    }

    fn name(&self) -> &'static str {
        "Rectangle"
    }

    fn outer_radius(&self) -> f64 {
        self.half_width.hypot(self.half_height)
    }
}
