//! Circular disc

use super::{check_boundary_coord, Rectangle, Shape};
use crate::error::ScatterError;
use crate::point::Point;
use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

/// Disc defined by center and radius
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Circle {
    origin: Point,
    /// Disc radius
    pub radius: f64,
}

impl Circle {
    /// Create a disc centered at `origin`
    pub fn new(origin: Point, radius: f64) -> Self {
        Self { origin, radius }
    }
}

impl Shape for Circle {
    fn origin(&self) -> Point {
        self.origin
    }

    fn contains(&self, point: &Point) -> bool {
        point.distance_to(&self.origin) < self.radius
    }

    fn bounding_box(&self) -> Result<Rectangle, ScatterError> {
        Ok(Rectangle::new(self.origin, self.radius, self.radius))
    }

    fn boundary_point(&self, t: f64) -> Result<Point, ScatterError> {
        check_boundary_coord(t)?;
        Ok(self.origin + Point::from_polar(self.radius, 2.0 * PI * t))
    }

    fn congruent(&self, other: &Self) -> bool {
        // Rotation-invariant: only the radius matters
        self.radius == other.radius
    }

    fn translated(&self, offset: Point) -> Self {
        Self::new(self.origin + offset, self.radius)
    }

    fn volume(&self) -> f64 {
        PI * self.radius * self.radius
    }

    fn name(&self) -> &'static str {
        "Circle"
    }

    fn outer_radius(&self) -> f64 {
        self.radius
    }
}
