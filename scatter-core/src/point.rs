//! 2D point type used by shapes, particles, and field evaluation

use serde::{Deserialize, Serialize};
use std::ops::{Add, Mul, Neg, Sub};

/// Point in the plane
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
pub struct Point {
    /// x-coordinate
    pub x: f64,
    /// y-coordinate
    pub y: f64,
}

impl Point {
    /// Create a point from Cartesian coordinates
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Create a point from polar coordinates (r, θ)
    pub fn from_polar(r: f64, theta: f64) -> Self {
        Self::new(r * theta.cos(), r * theta.sin())
    }

    /// Distance from the origin
    pub fn radius(&self) -> f64 {
        self.x.hypot(self.y)
    }

    /// Angle from the positive x-axis
    pub fn theta(&self) -> f64 {
        self.y.atan2(self.x)
    }

    /// Distance to another point
    pub fn distance_to(&self, other: &Point) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }

    /// Dot product
    pub fn dot(&self, other: &Point) -> f64 {
        self.x * other.x + self.y * other.y
    }

    /// Unit vector in the same direction
    ///
    /// Returns `None` for the zero vector.
    pub fn normalized(&self) -> Option<Point> {
        let r = self.radius();
        if r == 0.0 {
            None
        } else {
            Some(Point::new(self.x / r, self.y / r))
        }
    }
}

impl Add for Point {
    type Output = Point;
    fn add(self, rhs: Point) -> Point {
        Point::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Point {
    type Output = Point;
    fn sub(self, rhs: Point) -> Point {
        Point::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Mul<f64> for Point {
    type Output = Point;
    fn mul(self, rhs: f64) -> Point {
        Point::new(self.x * rhs, self.y * rhs)
    }
}

impl Neg for Point {
    type Output = Point;
    fn neg(self) -> Point {
        Point::new(-self.x, -self.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use std::f64::consts::PI;

    #[test]
    fn test_polar_round_trip() {
        let p = Point::from_polar(2.0, PI / 3.0);
        assert_abs_diff_eq!(p.radius(), 2.0, epsilon = 1e-12);
        assert_abs_diff_eq!(p.theta(), PI / 3.0, epsilon = 1e-12);
    }

    #[test]
    fn test_distance() {
        let a = Point::new(1.0, 0.0);
        let b = Point::new(4.0, 4.0);
        assert_abs_diff_eq!(a.distance_to(&b), 5.0, epsilon = 1e-12);
    }

    #[test]
    fn test_arithmetic() {
        let a = Point::new(1.0, 2.0);
        let b = Point::new(-0.5, 1.0);
        assert_eq!(a + b, Point::new(0.5, 3.0));
        assert_eq!(a - b, Point::new(1.5, 1.0));
        assert_eq!(a * 2.0, Point::new(2.0, 4.0));
        assert_eq!(-a, Point::new(-1.0, -2.0));
    }

    #[test]
    fn test_normalized() {
        let v = Point::new(3.0, 4.0).normalized().unwrap();
        assert_abs_diff_eq!(v.radius(), 1.0, epsilon = 1e-12);
        assert!(Point::new(0.0, 0.0).normalized().is_none());
    }
}
