//! Half-plane bounded by a line

use super::{Rectangle, Shape};
use crate::error::ScatterError;
use crate::point::Point;
use serde::{Deserialize, Serialize};

/// Half-plane with outward unit normal
///
/// The interior is the side the normal points away from:
/// `(x - origin) · normal < 0`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Halfspace {
    origin: Point,
    /// Outward unit normal
    pub normal: Point,
}

impl Halfspace {
    /// Create a half-plane through `origin` with outward normal `normal`
    ///
    /// The normal is normalized to unit length; a zero normal is a domain
    /// error.
    pub fn new(origin: Point, normal: Point) -> Result<Self, ScatterError> {
        let normal = normal.normalized().ok_or_else(|| {
            ScatterError::Domain("halfspace normal must be a nonzero vector".into())
        })?;
        Ok(Self { origin, normal })
    }
}

impl Shape for Halfspace {
    fn origin(&self) -> Point {
        self.origin
    }

    fn contains(&self, point: &Point) -> bool {
        (*point - self.origin).dot(&self.normal) < 0.0
    }

    fn bounding_box(&self) -> Result<Rectangle, ScatterError> {
        Err(ScatterError::Domain(
            "bounding box of an unbounded Halfspace is undefined".into(),
        ))
    }

    fn boundary_point(&self, _t: f64) -> Result<Point, ScatterError> {
        Err(ScatterError::Unimplemented(
            "boundary parametrization of the unbounded shape `Halfspace`".into(),
        ))
    }

    fn congruent(&self, other: &Self) -> bool {
        // Orientation-sensitive: translation cannot change the normal
        self.normal == other.normal
    }

    fn translated(&self, offset: Point) -> Self {
        Self {
            origin: self.origin + offset,
            normal: self.normal,
        }
    }

    fn volume(&self) -> f64 {
        f64::INFINITY
    }

    fn name(&self) -> &'static str {
        "Halfspace"
    }

    fn outer_radius(&self) -> f64 {
        f64::INFINITY
    }
}
