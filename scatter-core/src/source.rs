//! Incident wave sources
//!
//! A source is described twice over: as a field evaluable anywhere in the
//! host medium, and as the coefficients of its regular cylindrical
//! expansion about an arbitrary origin. The two must agree; the expansion
//! is what drives the scattering system, the field is what gets added to
//! the scattered waves when a simulation is evaluated at listening
//! positions.

use crate::acoustics::Acoustic;
use crate::error::ScatterError;
use crate::point::Point;
use ndarray::Array1;
use num_complex::Complex64;
use scatter_wave::besselj;
use std::fmt;

type FieldFn = dyn Fn(Point, f64) -> Complex64 + Send + Sync;
type CoefficientsFn = dyn Fn(f64, Point, usize) -> Array1<Complex64> + Send + Sync;

/// Incident field with its regular expansion
pub struct Source {
    field: Box<FieldFn>,
    coefficients: Box<CoefficientsFn>,
}

impl Source {
    /// Build a source from a field closure and its expansion closure
    ///
    /// `coefficients(omega, origin, order)` must return the `2 * order + 1`
    /// regular coefficients of the field about `origin`, ordered
    /// `-order ..= order`.
    pub fn new(
        field: impl Fn(Point, f64) -> Complex64 + Send + Sync + 'static,
        coefficients: impl Fn(f64, Point, usize) -> Array1<Complex64> + Send + Sync + 'static,
    ) -> Self {
        Self {
            field: Box::new(field),
            coefficients: Box::new(coefficients),
        }
    }

    /// Plane wave `amplitude * e^{i k d·x}` travelling along `direction`
    ///
    /// The expansion about an origin `o` follows from the Jacobi-Anger
    /// identity:
    ///
    /// ```text
    /// e^{i k d·x} = e^{i k d·o} Σ_m i^m e^{-i m θ_d} J_m(k|x - o|) e^{i m θ}
    /// ```
    pub fn plane_wave(
        medium: Acoustic,
        amplitude: Complex64,
        direction: Point,
    ) -> Result<Self, ScatterError> {
        let direction = direction.normalized().ok_or_else(|| {
            ScatterError::Domain("plane wave direction must be a nonzero vector".into())
        })?;
        let theta_d = direction.theta();

        let field = move |x: Point, omega: f64| {
            let k = medium.wavenumber(omega);
            amplitude * (Complex64::i() * k * direction.dot(&x)).exp()
        };

        let coefficients = move |omega: f64, origin: Point, order: usize| {
            let k = medium.wavenumber(omega);
            let phase = amplitude * (Complex64::i() * k * direction.dot(&origin)).exp();
            let m_max = order as i32;
            Array1::from_iter((-m_max..=m_max).map(|m| {
                phase * Complex64::i().powi(m) * Complex64::from_polar(1.0, -(m as f64) * theta_d)
            }))
        };

        Ok(Self::new(field, coefficients))
    }

    /// Evaluate the incident field at `x` and angular frequency `omega`
    pub fn field(&self, x: Point, omega: f64) -> Complex64 {
        (self.field)(x, omega)
    }

    /// Regular expansion coefficients of the field about `origin`
    pub fn coefficients(&self, omega: f64, origin: Point, order: usize) -> Array1<Complex64> {
        (self.coefficients)(omega, origin, order)
    }
}

impl fmt::Debug for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Source").finish_non_exhaustive()
    }
}

/// Reconstruct a source field from its expansion about `origin`
///
/// Used in tests to verify that a source's two descriptions agree inside
/// the expansion's disc of validity.
pub fn field_from_coefficients(
    coefficients: &Array1<Complex64>,
    medium: &Acoustic,
    origin: Point,
    x: Point,
    omega: f64,
) -> Complex64 {
    let k = medium.wavenumber(omega).re;
    let rel = x - origin;
    let (r, theta) = (rel.radius(), rel.theta());
    let m_max = (coefficients.len() as i32 - 1) / 2;
    (-m_max..=m_max)
        .zip(coefficients.iter())
        .map(|(m, c)| *c * besselj(m, k * r) * Complex64::from_polar(1.0, m as f64 * theta))
        .sum()
}
