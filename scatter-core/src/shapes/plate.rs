//! Infinite slab of finite thickness

use super::{Rectangle, Shape};
use crate::error::ScatterError;
use crate::point::Point;
use serde::{Deserialize, Serialize};

/// Slab between two parallel lines
///
/// The interior is the strip of thickness `width` centered on the line
/// through `origin` perpendicular to `normal`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Plate {
    origin: Point,
    /// Unit normal of the mid-plane
    pub normal: Point,
    /// Slab thickness
    pub width: f64,
}

impl Plate {
    /// Create a slab centered on `origin`
    ///
    /// The normal is normalized to unit length; a zero normal or a
    /// non-positive width is a domain error.
    pub fn new(origin: Point, normal: Point, width: f64) -> Result<Self, ScatterError> {
        let normal = normal
            .normalized()
            .ok_or_else(|| ScatterError::Domain("plate normal must be a nonzero vector".into()))?;
        if width <= 0.0 {
            return Err(ScatterError::Domain(format!(
                "plate width must be positive, got {width}"
            )));
        }
        Ok(Self {
            origin,
            normal,
            width,
        })
    }
}

impl Shape for Plate {
    fn origin(&self) -> Point {
        self.origin
    }

    fn contains(&self, point: &Point) -> bool {
        (*point - self.origin).dot(&self.normal).abs() < self.width / 2.0
    }

    fn bounding_box(&self) -> Result<Rectangle, ScatterError> {
        Err(ScatterError::Domain(
            "bounding box of an unbounded Plate is undefined".into(),
        ))
    }

    fn boundary_point(&self, _t: f64) -> Result<Point, ScatterError> {
        Err(ScatterError::Unimplemented(
            "boundary parametrization of the unbounded shape `Plate`".into(),
        ))
    }

    fn congruent(&self, other: &Self) -> bool {
        self.normal == other.normal && self.width == other.width
    }

    fn translated(&self, offset: Point) -> Self {
        Self {
            origin: self.origin + offset,
            normal: self.normal,
            width: self.width,
        }
    }

    fn volume(&self) -> f64 {
        f64::INFINITY
    }

    fn name(&self) -> &'static str {
        "Plate"
    }

    fn outer_radius(&self) -> f64 {
        f64::INFINITY
    }
}
