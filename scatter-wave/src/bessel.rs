//! Cylindrical Bessel and Hankel functions of integer order
//!
//! Definitions:
//!
//! ```text
//! H_n^(1)(x) = J_n(x) + i Y_n(x)
//! J_n'(x)    = (J_{n-1}(x) - J_{n+1}(x)) / 2
//! J_{-n}(x)  = (-1)^n J_n(x)
//! ```
//!
//! Real arguments go through `spec_math`. Complex arguments (needed for
//! particles with lossy interiors, where the interior wavenumber picks up
//! an imaginary part) use Miller's downward recurrence, which is stable
//! when the order exceeds the argument magnitude.

use num_complex::Complex64;
use spec_math::Bessel;

/// Cylindrical Bessel function of the first kind J_n(x)
///
/// Negative orders use the reflection J_{-n} = (-1)^n J_n.
pub fn besselj(n: i32, x: f64) -> f64 {
    let j = x.bessel_jv(n.abs() as f64);
    if n < 0 && n % 2 != 0 { -j } else { j }
}

/// Cylindrical Bessel function of the second kind (Neumann) Y_n(x)
pub fn bessely(n: i32, x: f64) -> f64 {
    let y = x.bessel_yv(n.abs() as f64);
    if n < 0 && n % 2 != 0 { -y } else { y }
}

/// Hankel function of the first kind H_n^(1)(x) = J_n(x) + i Y_n(x)
pub fn hankelh1(n: i32, x: f64) -> Complex64 {
    Complex64::new(besselj(n, x), bessely(n, x))
}

/// First derivative J_n'(x) = (J_{n-1}(x) - J_{n+1}(x)) / 2
pub fn diffbesselj(n: i32, x: f64) -> f64 {
    0.5 * (besselj(n - 1, x) - besselj(n + 1, x))
}

/// First derivative Y_n'(x) = (Y_{n-1}(x) - Y_{n+1}(x)) / 2
pub fn diffbessely(n: i32, x: f64) -> f64 {
    0.5 * (bessely(n - 1, x) - bessely(n + 1, x))
}

/// First derivative of the Hankel function H_n^(1)'(x)
pub fn diffhankelh1(n: i32, x: f64) -> Complex64 {
    Complex64::new(diffbesselj(n, x), diffbessely(n, x))
}

/// Bessel function J_n(z) for complex argument
///
/// Uses Miller's downward recurrence
/// ```text
/// J_{k-1}(z) = (2k/z) J_k(z) - J_{k+1}(z)
/// ```
/// normalized with J_0(z) + 2 Σ_k J_{2k}(z) = 1.
///
/// An argument with an infinite component returns 0 (the large-argument
/// limit), and `z = 0` returns the exact values J_0(0) = 1, J_n(0) = 0.
pub fn besselj_complex(n: i32, z: Complex64) -> Complex64 {
    let order = n.unsigned_abs() as usize;
    let sign = if n < 0 && n % 2 != 0 { -1.0 } else { 1.0 };

    if z.im == 0.0 && z.re.is_finite() {
        return Complex64::new(sign * besselj(n.abs(), z.re), 0.0);
    }
    if !z.is_finite() {
        return Complex64::new(0.0, 0.0);
    }
    if z.norm() < 1e-300 {
        return if order == 0 {
            Complex64::new(1.0, 0.0)
        } else {
            Complex64::new(0.0, 0.0)
        };
    }

    // Start well above both the requested order and |z|.
    let start = order + z.norm().ceil() as usize + 20;
    let mut values = vec![Complex64::new(0.0, 0.0); start + 2];
    values[start + 1] = Complex64::new(0.0, 0.0);
    values[start] = Complex64::new(1e-30, 0.0);

    for k in (1..=start).rev() {
        values[k - 1] = 2.0 * k as f64 / z * values[k] - values[k + 1];
    }

    // Normalization: J_0 + 2 (J_2 + J_4 + ...) = 1
    let mut norm_sum = values[0];
    let mut k = 2;
    while k <= start {
        norm_sum += 2.0 * values[k];
        k += 2;
    }

    sign * values[order] / norm_sum
}

/// First derivative J_n'(z) for complex argument
pub fn diffbesselj_complex(n: i32, z: Complex64) -> Complex64 {
    0.5 * (besselj_complex(n - 1, z) - besselj_complex(n + 1, z))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    const EPSILON: f64 = 1e-10;

    #[test]
    fn test_besselj_known_values() {
        // J_0(1) ≈ 0.7651976865579666, J_1(1) ≈ 0.4400505857449335
        assert_abs_diff_eq!(besselj(0, 1.0), 0.7651976865579666, epsilon = EPSILON);
        assert_abs_diff_eq!(besselj(1, 1.0), 0.4400505857449335, epsilon = EPSILON);
    }

    #[test]
    fn test_negative_order_reflection() {
        let x = 2.3;
        assert_abs_diff_eq!(besselj(-1, x), -besselj(1, x), epsilon = EPSILON);
        assert_abs_diff_eq!(besselj(-2, x), besselj(2, x), epsilon = EPSILON);
        assert_abs_diff_eq!(bessely(-3, x), -bessely(3, x), epsilon = EPSILON);
    }

    #[test]
    fn test_derivative_identities() {
        // J_0'(x) = -J_1(x)
        let x = 1.7;
        assert_abs_diff_eq!(diffbesselj(0, x), -besselj(1, x), epsilon = EPSILON);
        assert_abs_diff_eq!(diffbessely(0, x), -bessely(1, x), epsilon = EPSILON);

        // Compare against the one-sided recurrence J_n' = J_{n-1} - n/x J_n
        for n in 1..6 {
            let expected = besselj(n - 1, x) - n as f64 / x * besselj(n, x);
            assert_abs_diff_eq!(diffbesselj(n, x), expected, epsilon = EPSILON);
        }
    }

    #[test]
    fn test_hankel_assembly() {
        let x = 3.1;
        for n in 0..5 {
            let h = hankelh1(n, x);
            assert_abs_diff_eq!(h.re, besselj(n, x), epsilon = EPSILON);
            assert_abs_diff_eq!(h.im, bessely(n, x), epsilon = EPSILON);
        }
    }

    #[test]
    fn test_wronskian() {
        // J_n(x) Y_n'(x) - J_n'(x) Y_n(x) = 2/(πx)
        let x = 2.5;
        for n in 0..6 {
            let w = besselj(n, x) * diffbessely(n, x) - diffbesselj(n, x) * bessely(n, x);
            assert_abs_diff_eq!(w, 2.0 / (std::f64::consts::PI * x), epsilon = 1e-9);
        }
    }

    #[test]
    fn test_complex_agrees_with_real_on_real_axis() {
        let z = Complex64::new(1.9, 0.0);
        for n in -4..=4 {
            let jc = besselj_complex(n, z);
            assert_abs_diff_eq!(jc.re, besselj(n, 1.9), epsilon = EPSILON);
            assert_abs_diff_eq!(jc.im, 0.0, epsilon = EPSILON);
        }
    }

    #[test]
    fn test_complex_recurrence_consistency() {
        // 2n/z J_n = J_{n-1} + J_{n+1} must hold for the normalized values
        let z = Complex64::new(1.2, 0.7);
        for n in 1..5 {
            let lhs = 2.0 * n as f64 / z * besselj_complex(n, z);
            let rhs = besselj_complex(n - 1, z) + besselj_complex(n + 1, z);
            assert!((lhs - rhs).norm() < 1e-9, "recurrence broken at n={n}");
        }
    }

    #[test]
    fn test_complex_small_and_infinite_arguments() {
        let zero = Complex64::new(0.0, 0.0);
        assert_abs_diff_eq!(besselj_complex(0, zero).re, 1.0, epsilon = EPSILON);
        assert_abs_diff_eq!(besselj_complex(3, zero).norm(), 0.0, epsilon = EPSILON);

        let inf = Complex64::new(f64::INFINITY, 0.0);
        assert_abs_diff_eq!(besselj_complex(2, inf).norm(), 0.0, epsilon = EPSILON);
    }

    #[test]
    fn test_complex_derivative_on_real_axis() {
        let z = Complex64::new(2.2, 0.0);
        for n in 0..4 {
            let d = diffbesselj_complex(n, z);
            assert_abs_diff_eq!(d.re, diffbesselj(n, 2.2), epsilon = EPSILON);
        }
    }
}
