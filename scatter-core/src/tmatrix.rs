//! Closed-form T-matrix for a single scatterer
//!
//! The T-matrix maps the coefficients of the regular wave incident on a
//! particle to the coefficients of the outgoing wave it scatters. For a
//! circular particle the matrix is diagonal in the cylindrical basis:
//!
//! ```text
//! T = -diag(Z_{-M}, ..., Z_0, ..., Z_M),    Z_{-m} = Z_m
//! ```
//!
//! with the modal ratio Z_m determined by the boundary condition at the
//! circle. Three regimes are covered:
//!
//! - impenetrable (rigid) particle: Z_m = J_m'(ka) / H_m'(ka)
//! - pressure-release particle:     Z_m = J_m(ka) / H_m(ka)
//! - penetrable particle: the general impedance-matching ratio built from
//!   Bessel functions of both the exterior and interior wavenumbers

use crate::acoustics::Acoustic;
use crate::error::ScatterError;
use crate::shapes::{AnyShape, Shape};
use ndarray::Array2;
use num_complex::Complex64;
use scatter_wave::{besselj, besselj_complex, diffbesselj, diffbesselj_complex, diffhankelh1, hankelh1};

/// Reject material combinations with no defined scattering solution
fn check_material(
    shape: &AnyShape,
    inner: &Acoustic,
    outer: &Acoustic,
) -> Result<(), ScatterError> {
    if (inner.sound_speed.norm() * inner.density.norm()).is_nan() {
        return Err(ScatterError::Domain(
            "scattering from a particle with zero density and infinite sound speed \
             (or vice versa) is not defined"
                .into(),
        ));
    }
    if (outer.sound_speed.norm() * outer.density.norm()).is_nan() {
        return Err(ScatterError::Domain(
            "wave propagation in a medium with zero density and infinite sound speed \
             (or vice versa) is not defined"
                .into(),
        ));
    }
    if outer.sound_speed == Complex64::new(0.0, 0.0) {
        return Err(ScatterError::Domain(
            "wave propagation in a medium with zero sound speed is not defined".into(),
        ));
    }
    if outer.density == Complex64::new(0.0, 0.0)
        && inner.sound_speed * inner.density == Complex64::new(0.0, 0.0)
    {
        return Err(ScatterError::Domain(
            "scattering in a medium with zero density from a particle with zero density \
             or zero sound speed is not defined"
                .into(),
        ));
    }
    if shape.outer_radius() == 0.0 {
        return Err(ScatterError::Domain(
            "scattering from a circle of zero radius is not defined".into(),
        ));
    }
    Ok(())
}

/// Modal scattering ratio Z_m for a circular particle
///
/// `ak` is the exterior wavenumber times the radius; `gamma` is the ratio
/// of exterior to interior sound speed, so `gamma * ak` is the interior
/// argument (complex for lossy interiors).
fn modal_ratio(m: i32, ak: f64, inner: &Acoustic, outer: &Acoustic) -> Complex64 {
    let m = m.abs();
    let impenetrable =
        inner.sound_speed.norm().is_infinite() || inner.density.norm().is_infinite();
    let outer_degenerate = outer.density * outer.sound_speed == Complex64::new(0.0, 0.0);

    if impenetrable || outer_degenerate {
        // Rigid boundary: the normal velocity vanishes on the circle
        Complex64::from(diffbesselj(m, ak)) / diffhankelh1(m, ak)
    } else if inner.density == Complex64::new(0.0, 0.0)
        || inner.sound_speed == Complex64::new(0.0, 0.0)
    {
        // Pressure-release boundary: the pressure vanishes on the circle
        Complex64::from(besselj(m, ak)) / hankelh1(m, ak)
    } else {
        let gamma = outer.sound_speed / inner.sound_speed;
        let q = inner.impedance() / outer.impedance();
        let gak = gamma * ak;
        let numer = q * diffbesselj(m, ak) * besselj_complex(m, gak)
            - besselj(m, ak) * diffbesselj_complex(m, gak);
        let denom = q * diffhankelh1(m, ak) * besselj_complex(m, gak)
            - hankelh1(m, ak) * diffbesselj_complex(m, gak);
        numer / denom
    }
}

/// T-matrix of a single particle in the host medium `outer`
///
/// Returns the `(2 * order + 1) × (2 * order + 1)` matrix acting on
/// cylindrical basis coefficients ordered `-order ..= order`. Only the
/// circle has a closed-form solution; every other shape returns an
/// unimplemented-combination error. Degenerate material combinations are
/// rejected with a domain error naming the violated precondition.
pub fn t_matrix(
    shape: &AnyShape,
    inner: &Acoustic,
    outer: &Acoustic,
    omega: f64,
    order: usize,
) -> Result<Array2<Complex64>, ScatterError> {
    let circle = match shape {
        AnyShape::Circle(c) => c,
        other => {
            return Err(ScatterError::Unimplemented(format!(
                "T-matrix for a shape of type `{}`",
                other.name()
            )))
        }
    };

    check_material(shape, inner, outer)?;

    let k = outer.wavenumber(omega);
    if k.im != 0.0 {
        return Err(ScatterError::Unimplemented(
            "T-matrix in a host medium with complex wavenumber".into(),
        ));
    }
    let ak = circle.radius * k.re;

    let m = order as i32;
    let n = 2 * order + 1;
    let mut t = Array2::zeros((n, n));
    for (i, mi) in (-m..=m).enumerate() {
        t[[i, i]] = -modal_ratio(mi, ak, inner, outer);
    }
    Ok(t)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::point::Point;
    use crate::shapes::{Circle, Rectangle};
    use approx::assert_abs_diff_eq;

    const EPSILON: f64 = 1e-10;

    fn unit_circle() -> AnyShape {
        AnyShape::from(Circle::new(Point::new(0.0, 0.0), 1.0))
    }

    #[test]
    fn test_dimensions_and_diagonality() {
        let shape = unit_circle();
        let t = t_matrix(&shape, &Acoustic::sound_hard(), &Acoustic::new(1.0, 1.0), 0.9, 4)
            .unwrap();
        assert_eq!(t.dim(), (9, 9));
        for i in 0..9 {
            for j in 0..9 {
                if i != j {
                    assert_eq!(t[[i, j]], Complex64::new(0.0, 0.0));
                }
            }
        }
    }

    #[test]
    fn test_diagonal_is_symmetric_in_the_order() {
        // Z_{-m} = Z_m: entry (M - m) equals entry (M + m)
        let shape = unit_circle();
        let medium = Acoustic::new(1.0, 1.0);
        let inner = Acoustic::new(2.0, 0.5);
        let t = t_matrix(&shape, &inner, &medium, 1.3, 3).unwrap();
        for m in 1..=3usize {
            let lo = t[[3 - m, 3 - m]];
            let hi = t[[3 + m, 3 + m]];
            assert_abs_diff_eq!(lo.re, hi.re, epsilon = EPSILON);
            assert_abs_diff_eq!(lo.im, hi.im, epsilon = EPSILON);
        }
    }

    #[test]
    fn test_rigid_particle_matches_the_classical_ratio() {
        let shape = unit_circle();
        let outer = Acoustic::new(1.0, 1.0);
        let omega = 1.1;
        let t = t_matrix(&shape, &Acoustic::sound_hard(), &outer, omega, 2).unwrap();
        for m in 0..=2i32 {
            let expected =
                -Complex64::from(diffbesselj(m, omega)) / diffhankelh1(m, omega);
            let got = t[[(2 + m) as usize, (2 + m) as usize]];
            assert_abs_diff_eq!(got.re, expected.re, epsilon = EPSILON);
            assert_abs_diff_eq!(got.im, expected.im, epsilon = EPSILON);
        }
    }

    #[test]
    fn test_pressure_release_particle_matches_the_classical_ratio() {
        let shape = unit_circle();
        let outer = Acoustic::new(1.0, 1.0);
        let omega = 0.8;
        let t = t_matrix(&shape, &Acoustic::sound_soft(), &outer, omega, 2).unwrap();
        let expected = -Complex64::from(besselj(0, omega)) / hankelh1(0, omega);
        let got = t[[2, 2]];
        assert_abs_diff_eq!(got.re, expected.re, epsilon = EPSILON);
        assert_abs_diff_eq!(got.im, expected.im, epsilon = EPSILON);
    }

    #[test]
    fn test_penetrable_particle_limits_to_rigid() {
        // A very dense, very stiff interior approximates the rigid result.
        let shape = unit_circle();
        let outer = Acoustic::new(1.0, 1.0);
        let omega = 1.0;
        let nearly_rigid = Acoustic::new(1e9, 10.0);
        let t = t_matrix(&shape, &nearly_rigid, &outer, omega, 2).unwrap();
        let rigid = t_matrix(&shape, &Acoustic::sound_hard(), &outer, omega, 2).unwrap();
        for i in 0..5 {
            assert!((t[[i, i]] - rigid[[i, i]]).norm() < 1e-3);
        }
    }

    #[test]
    fn test_matched_particle_barely_scatters() {
        // Interior identical to the host: T should be numerically zero.
        let shape = unit_circle();
        let medium = Acoustic::new(1.0, 1.0);
        let t = t_matrix(&shape, &medium, &medium, 1.0, 3).unwrap();
        for i in 0..7 {
            assert!(t[[i, i]].norm() < 1e-12);
        }
    }

    #[test]
    fn test_degenerate_materials_are_domain_errors() {
        let shape = unit_circle();
        let host = Acoustic::new(1.0, 1.0);

        // Zero density with infinite sound speed: 0 × ∞ impedance
        let nan_particle = Acoustic::new(0.0, f64::INFINITY);
        assert!(matches!(
            t_matrix(&shape, &nan_particle, &host, 1.0, 2),
            Err(ScatterError::Domain(_))
        ));

        // Host with zero sound speed
        let frozen = Acoustic::new(1.0, 0.0);
        assert!(matches!(
            t_matrix(&shape, &Acoustic::sound_hard(), &frozen, 1.0, 2),
            Err(ScatterError::Domain(_))
        ));

        // Zero-density host around a sound-soft particle
        assert!(matches!(
            t_matrix(&shape, &Acoustic::sound_soft(), &Acoustic::sound_soft(), 1.0, 2),
            Err(ScatterError::Domain(_))
        ));

        // Zero radius
        let degenerate = AnyShape::from(Circle::new(Point::new(0.0, 0.0), 0.0));
        assert!(matches!(
            t_matrix(&degenerate, &Acoustic::sound_hard(), &host, 1.0, 2),
            Err(ScatterError::Domain(_))
        ));
    }

    #[test]
    fn test_non_circular_shape_is_unimplemented() {
        let shape = AnyShape::from(Rectangle::new(Point::new(0.0, 0.0), 1.0, 1.0));
        let err = t_matrix(&shape, &Acoustic::sound_hard(), &Acoustic::new(1.0, 1.0), 1.0, 2)
            .unwrap_err();
        match err {
            ScatterError::Unimplemented(msg) => assert!(msg.contains("Rectangle")),
            other => panic!("expected Unimplemented, got {other:?}"),
        }
    }
}
