//! Plane-wave time-of-flight region
//!
//! The set of scatterer positions whose echo can reach a listener within a
//! given travel time, for a plane wavefront entering at the line
//! `x = plane_x` and propagating in +x. A point p is in the region when
//!
//! ```text
//! p.x > plane_x   and   (p.x - plane_x) + |p - listener| < time
//! ```
//!
//! The boundary is the wavefront line on the left closed by a parabolic
//! arc with the listener at its focus.

use super::{check_boundary_coord, Rectangle, Shape};
use crate::error::ScatterError;
use crate::point::Point;
use serde::{Deserialize, Serialize};

/// Region reachable within a plane-wave travel-time budget
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TimeOfFlight {
    /// Listener position (the region's reference point)
    pub listener: Point,
    /// Maximum travel time (in distance units, speed normalized to 1)
    pub time: f64,
    /// x-coordinate of the wavefront entry line
    pub plane_x: f64,
}

impl TimeOfFlight {
    /// Create a region with the wavefront entering at `x = 0`
    pub fn new(listener: Point, time: f64) -> Result<Self, ScatterError> {
        Self::with_plane(listener, time, 0.0)
    }

    /// Create a region with the wavefront entering at `x = plane_x`
    ///
    /// The travel-time budget must exceed the direct plane-to-listener
    /// distance, otherwise the region is empty.
    pub fn with_plane(listener: Point, time: f64, plane_x: f64) -> Result<Self, ScatterError> {
        let depth = listener.x - plane_x;
        if time <= depth.abs() {
            return Err(ScatterError::Domain(format!(
                "time-of-flight budget {time} does not reach past the wavefront plane"
            )));
        }
        Ok(Self {
            listener,
            time,
            plane_x,
        })
    }

    /// Listener depth behind the wavefront entry line
    fn depth(&self) -> f64 {
        self.listener.x - self.plane_x
    }

    /// Half-height of the region at the wavefront line
    fn half_span(&self) -> f64 {
        (self.time * self.time - self.depth() * self.depth()).sqrt()
    }

    /// x-offset from the wavefront line of the parabolic arc at height `y`
    fn arc_offset(&self, y: f64) -> f64 {
        let d = self.depth();
        let dy = y - self.listener.y;
        (self.time * self.time - d * d - dy * dy) / (2.0 * (self.time - d))
    }
}

impl Shape for TimeOfFlight {
    fn origin(&self) -> Point {
        self.listener
    }

    fn contains(&self, point: &Point) -> bool {
        point.x > self.plane_x
            && (point.x - self.plane_x) + point.distance_to(&self.listener) < self.time
    }

    fn bounding_box(&self) -> Result<Rectangle, ScatterError> {
        let span = self.half_span();
        let x_max = self.plane_x + (self.time + self.depth()) / 2.0;
        Ok(Rectangle::from_corners(
            Point::new(self.plane_x, self.listener.y - span),
            Point::new(x_max, self.listener.y + span),
        ))
    }

    fn boundary_point(&self, t: f64) -> Result<Point, ScatterError> {
        check_boundary_coord(t)?;
        let span = self.half_span();
        if t < 0.5 {
            // Wavefront segment, bottom corner to top corner
            let y = self.listener.y + span * (4.0 * t - 1.0);
            Ok(Point::new(self.plane_x, y))
        } else {
            // Parabolic arc, top corner back down to the bottom corner
            let y = self.listener.y + span * (3.0 - 4.0 * t);
            Ok(Point::new(self.plane_x + self.arc_offset(y), y))
        }
    }

    fn congruent(&self, other: &Self) -> bool {
        // Translation preserves the budget and the listener depth
        self.time == other.time && self.depth() == other.depth()
    }

    fn translated(&self, offset: Point) -> Self {
        Self {
            listener: self.listener + offset,
            time: self.time,
            plane_x: self.plane_x + offset.x,
        }
    }

    fn volume(&self) -> f64 {
        let span = self.half_span();
        2.0 / 3.0 * span.powi(3) / (self.time - self.depth())
    }

    fn name(&self) -> &'static str {
        "TimeOfFlight"
    }

    fn outer_radius(&self) -> f64 {
        // The corners on the wavefront line are exactly `time` away from
        // the listener; everything else is closer.
        self.time
    }
}
