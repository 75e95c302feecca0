//! Geometric boundaries for particles and measurement regions
//!
//! Every shape is an immutable value: translation and resizing produce new
//! instances. The [`Shape`] trait is the extension seam for new geometry;
//! [`AnyShape`] is the closed catalog the T-matrix dispatch works over.
//! Shapes without a closed-form scattering solution are still useful as
//! sampling and exclusion regions.

mod circle;
mod empty;
mod halfspace;
mod plate;
mod rectangle;
mod time_of_flight;

pub use circle::Circle;
pub use empty::EmptyShape;
pub use halfspace::Halfspace;
pub use plate::Plate;
pub use rectangle::Rectangle;
pub use time_of_flight::TimeOfFlight;

use crate::error::ScatterError;
use crate::point::Point;
use serde::{Deserialize, Serialize};

/// Capability set every shape variant must provide
pub trait Shape {
    /// Reference point of the shape, typically its centroid
    fn origin(&self) -> Point;

    /// True iff `point` lies strictly inside the boundary
    fn contains(&self, point: &Point) -> bool;

    /// Smallest axis-aligned rectangle containing the shape
    ///
    /// Unbounded shapes return a domain error.
    fn bounding_box(&self) -> Result<Rectangle, ScatterError>;

    /// Parametric boundary at `t ∈ [0, 1]`
    ///
    /// A coordinate outside `[0, 1]` is a domain error; shapes without a
    /// bounded boundary return an unimplemented error.
    fn boundary_point(&self, t: f64) -> Result<Point, ScatterError>;

    /// True iff `other` has the same geometry up to a rigid translation
    ///
    /// Rotation is only ignored for rotation-invariant shapes. The default
    /// is conservative: nothing is congruent unless a variant says so.
    fn congruent(&self, other: &Self) -> bool
    where
        Self: Sized,
    {
        let _ = other;
        false
    }

    /// New shape with the origin shifted by `offset`, all else equal
    fn translated(&self, offset: Point) -> Self
    where
        Self: Sized;

    /// Area of the shape (infinite for unbounded shapes)
    fn volume(&self) -> f64;

    /// Shape name used in error messages
    fn name(&self) -> &'static str;

    /// Radius of the smallest ball centered at the origin enclosing the shape
    fn outer_radius(&self) -> f64;
}

/// Validate a boundary parameter before evaluating the parametrization
pub(crate) fn check_boundary_coord(t: f64) -> Result<(), ScatterError> {
    if (0.0..=1.0).contains(&t) {
        Ok(())
    } else {
        Err(ScatterError::Domain(format!(
            "boundary coordinate {t} lies outside [0, 1]"
        )))
    }
}

/// Closed catalog of shape variants
///
/// This is the type particles carry; the T-matrix computation pattern
/// matches on it, and variants without a closed-form solution fall through
/// to an unimplemented-combination error.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum AnyShape {
    /// Circular disc
    Circle(Circle),
    /// Axis-aligned rectangle
    Rectangle(Rectangle),
    /// Half-plane bounded by a line
    Halfspace(Halfspace),
    /// Infinite slab of finite thickness
    Plate(Plate),
    /// Plane-wave time-of-flight region
    TimeOfFlight(TimeOfFlight),
    /// Degenerate shape containing nothing
    Empty(EmptyShape),
}

macro_rules! delegate {
    ($self:expr, $inner:ident => $body:expr) => {
        match $self {
            AnyShape::Circle($inner) => $body,
            AnyShape::Rectangle($inner) => $body,
            AnyShape::Halfspace($inner) => $body,
            AnyShape::Plate($inner) => $body,
            AnyShape::TimeOfFlight($inner) => $body,
            AnyShape::Empty($inner) => $body,
        }
    };
}

impl Shape for AnyShape {
    fn origin(&self) -> Point {
        delegate!(self, s => s.origin())
    }

    fn contains(&self, point: &Point) -> bool {
        delegate!(self, s => s.contains(point))
    }

    fn bounding_box(&self) -> Result<Rectangle, ScatterError> {
        delegate!(self, s => s.bounding_box())
    }

    fn boundary_point(&self, t: f64) -> Result<Point, ScatterError> {
        delegate!(self, s => s.boundary_point(t))
    }

    fn congruent(&self, other: &Self) -> bool {
        match (self, other) {
            (AnyShape::Circle(a), AnyShape::Circle(b)) => a.congruent(b),
            (AnyShape::Rectangle(a), AnyShape::Rectangle(b)) => a.congruent(b),
            (AnyShape::Halfspace(a), AnyShape::Halfspace(b)) => a.congruent(b),
            (AnyShape::Plate(a), AnyShape::Plate(b)) => a.congruent(b),
            (AnyShape::TimeOfFlight(a), AnyShape::TimeOfFlight(b)) => a.congruent(b),
            (AnyShape::Empty(a), AnyShape::Empty(b)) => a.congruent(b),
            _ => false,
        }
    }

    fn translated(&self, offset: Point) -> Self {
        match self {
            AnyShape::Circle(s) => AnyShape::Circle(s.translated(offset)),
            AnyShape::Rectangle(s) => AnyShape::Rectangle(s.translated(offset)),
            AnyShape::Halfspace(s) => AnyShape::Halfspace(s.translated(offset)),
            AnyShape::Plate(s) => AnyShape::Plate(s.translated(offset)),
            AnyShape::TimeOfFlight(s) => AnyShape::TimeOfFlight(s.translated(offset)),
            AnyShape::Empty(s) => AnyShape::Empty(s.translated(offset)),
        }
    }

    fn volume(&self) -> f64 {
        delegate!(self, s => s.volume())
    }

    fn name(&self) -> &'static str {
        delegate!(self, s => s.name())
    }

    fn outer_radius(&self) -> f64 {
        delegate!(self, s => s.outer_radius())
    }
}

impl From<Circle> for AnyShape {
    fn from(s: Circle) -> Self {
        AnyShape::Circle(s)
    }
}

impl From<Rectangle> for AnyShape {
    fn from(s: Rectangle) -> Self {
        AnyShape::Rectangle(s)
    }
}

impl From<Halfspace> for AnyShape {
    fn from(s: Halfspace) -> Self {
        AnyShape::Halfspace(s)
    }
}

impl From<Plate> for AnyShape {
    fn from(s: Plate) -> Self {
        AnyShape::Plate(s)
    }
}

impl From<TimeOfFlight> for AnyShape {
    fn from(s: TimeOfFlight) -> Self {
        AnyShape::TimeOfFlight(s)
    }
}

impl From<EmptyShape> for AnyShape {
    fn from(s: EmptyShape) -> Self {
        AnyShape::Empty(s)
    }
}

/// Smallest axis-aligned rectangle containing every shape in `shapes`
///
/// Each shape contributes the corners of its own bounding box; the result
/// spans the per-axis minima and maxima of all corners. For a single shape
/// this reproduces its bounding box exactly.
pub fn bounding_box_of<S: Shape>(shapes: &[S]) -> Result<Rectangle, ScatterError> {
    if shapes.is_empty() {
        return Err(ScatterError::Domain(
            "bounding box of an empty shape collection is undefined".into(),
        ));
    }

    let mut min = Point::new(f64::INFINITY, f64::INFINITY);
    let mut max = Point::new(f64::NEG_INFINITY, f64::NEG_INFINITY);

    for shape in shapes {
        for corner in shape.bounding_box()?.corners() {
            min.x = min.x.min(corner.x);
            min.y = min.y.min(corner.y);
            max.x = max.x.max(corner.x);
            max.y = max.y.max(corner.y);
        }
    }

    Ok(Rectangle::from_corners(min, max))
}

/// Regular grid of points inside `shape`
///
/// Lays a `resolution × resolution` grid over the bounding box and keeps
/// the points inside the shape. `resolution` must be at least 2.
pub fn points_in_shape<S: Shape>(
    shape: &S,
    resolution: usize,
) -> Result<Vec<Point>, ScatterError> {
    points_in_shape_excluding(shape, &EmptyShape::default(), resolution)
}

/// Regular grid of points inside `shape` but outside `exclude`
///
/// The exclusion test runs before the containment test, matching the
/// reading "is in the region but not excluded".
pub fn points_in_shape_excluding<S: Shape, E: Shape>(
    shape: &S,
    exclude: &E,
    resolution: usize,
) -> Result<Vec<Point>, ScatterError> {
    if resolution < 2 {
        return Err(ScatterError::Domain(format!(
            "grid resolution {resolution} is too small, need at least 2 points per axis"
        )));
    }

    let rect = shape.bounding_box()?;
    let corners = rect.corners();
    let (min, max) = (corners[0], corners[2]);
    let step_x = (max.x - min.x) / (resolution - 1) as f64;
    let step_y = (max.y - min.y) / (resolution - 1) as f64;

    let mut points = Vec::new();
    for i in 0..resolution {
        for j in 0..resolution {
            let p = Point::new(min.x + i as f64 * step_x, min.y + j as f64 * step_y);
            if !exclude.contains(&p) && shape.contains(&p) {
                points.push(p);
            }
        }
    }
    Ok(points)
}

/// Sample `num_points` points along the shape boundary
///
/// Parameters are equally spaced in `[0, 1)`; the endpoint is excluded so a
/// closed boundary does not duplicate its first point. A nonzero `dr`
/// displaces each point radially away from the shape origin by `dr` times
/// the vector from origin to the point.
pub fn boundary_points<S: Shape>(
    shape: &S,
    num_points: usize,
    dr: f64,
) -> Result<Vec<Point>, ScatterError> {
    let origin = shape.origin();
    let mut points = Vec::with_capacity(num_points);
    for i in 0..num_points {
        let t = i as f64 / num_points as f64;
        let p = shape.boundary_point(t)?;
        points.push(p + (p - origin) * dr);
    }
    Ok(points)
}
