//! Degenerate shape containing nothing

use super::{Rectangle, Shape};
use crate::error::ScatterError;
use crate::point::Point;
use serde::{Deserialize, Serialize};

/// Shape with no interior
///
/// Useful as a neutral exclusion region for grid sampling: excluding an
/// `EmptyShape` excludes nothing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct EmptyShape {
    origin: Point,
}

impl EmptyShape {
    /// Create an empty shape anchored at `origin`
    pub fn new(origin: Point) -> Self {
        Self { origin }
    }
}

impl Shape for EmptyShape {
    fn origin(&self) -> Point {
        self.origin
    }

    fn contains(&self, _point: &Point) -> bool {
        false
    }

    fn bounding_box(&self) -> Result<Rectangle, ScatterError> {
        Err(ScatterError::Domain(
            "bounding box of an empty shape is undefined".into(),
        ))
    }

    fn boundary_point(&self, _t: f64) -> Result<Point, ScatterError> {
        Err(ScatterError::Domain(
            "an empty shape has no boundary".into(),
        ))
    }

    fn congruent(&self, _other: &Self) -> bool {
        // All empty shapes are alike
        true
    }

    fn translated(&self, offset: Point) -> Self {
        Self::new(self.origin + offset)
    }

    fn volume(&self) -> f64 {
        0.0
    }

    fn name(&self) -> &'static str {
        "EmptyShape"
    }

    fn outer_radius(&self) -> f64 {
        0.0
    }
}
